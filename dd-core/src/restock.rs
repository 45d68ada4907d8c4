//! Restock recommendations and their fulfillment bars.

use crate::stock::deserialize_nullable_string;
use serde::{Deserialize, Serialize};

pub const NO_RESTOCK: &str = "No restock recommendations found";
pub const ORDER_ACTION: &str = "Order Now";

/// One row of `/api/restock_recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestockRecommendation {
    pub product_name: String,
    #[serde(
        alias = "CategoryName",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub category: String,
    pub current_stock: u32,
    pub recommended_stock: u32,
}

/// `round(100 * current / recommended)` clamped to `[0, 100]`.
///
/// Halves round up. A zero recommendation counts as fully stocked.
pub fn fulfillment_percentage(current: u32, recommended: u32) -> u8 {
    if recommended == 0 {
        return 100;
    }
    let current = u64::from(current);
    let recommended = u64::from(recommended);
    let rounded = (200 * current + recommended) / (2 * recommended);
    rounded.min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentTier {
    Red,
    Amber,
    Green,
}

impl FulfillmentTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=30 => FulfillmentTier::Red,
            31..=60 => FulfillmentTier::Amber,
            _ => FulfillmentTier::Green,
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            FulfillmentTier::Red => "bg-danger",
            FulfillmentTier::Amber => "bg-warning",
            FulfillmentTier::Green => "bg-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockBar {
    pub product_name: String,
    pub category: String,
    pub current_stock: u32,
    pub recommended_stock: u32,
    pub percentage: u8,
    pub tier: FulfillmentTier,
}

impl RestockBar {
    pub fn new(recommendation: &RestockRecommendation) -> Self {
        let percentage = fulfillment_percentage(
            recommendation.current_stock,
            recommendation.recommended_stock,
        );
        Self {
            product_name: recommendation.product_name.clone(),
            category: recommendation.category.clone(),
            current_stock: recommendation.current_stock,
            recommended_stock: recommendation.recommended_stock,
            percentage,
            tier: FulfillmentTier::from_percentage(percentage),
        }
    }

    /// Inline style sizing the progress bar.
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestockList {
    pub bars: Vec<RestockBar>,
}

impl RestockList {
    pub fn from_recommendations(recommendations: &[RestockRecommendation]) -> Self {
        Self {
            bars: recommendations.iter().map(RestockBar::new).collect(),
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.bars.is_empty().then_some(NO_RESTOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_stocked_is_red() {
        assert_eq!(fulfillment_percentage(10, 40), 25);
        assert_eq!(FulfillmentTier::from_percentage(25), FulfillmentTier::Red);
    }

    #[test]
    fn percentage_rounds_half_up_and_clamps() {
        assert_eq!(fulfillment_percentage(1, 8), 13);
        assert_eq!(fulfillment_percentage(2, 3), 67);
        assert_eq!(fulfillment_percentage(90, 40), 100);
        assert_eq!(fulfillment_percentage(0, 40), 0);
        assert_eq!(fulfillment_percentage(5, 0), 100);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(FulfillmentTier::from_percentage(30), FulfillmentTier::Red);
        assert_eq!(FulfillmentTier::from_percentage(31), FulfillmentTier::Amber);
        assert_eq!(FulfillmentTier::from_percentage(60), FulfillmentTier::Amber);
        assert_eq!(FulfillmentTier::from_percentage(61), FulfillmentTier::Green);
        assert_eq!(FulfillmentTier::Green.bar_class(), "bg-success");
    }

    #[test]
    fn bars_from_backend_rows() {
        let json = r#"[
            {"ProductName": "Rice", "Category": "Grains", "CurrentStock": 50, "RecommendedStock": 80},
            {"ProductName": "Beans", "CategoryName": "Canned", "CurrentStock": 120, "RecommendedStock": 100}
        ]"#;
        let recs: Vec<RestockRecommendation> = serde_json::from_str(json).unwrap();
        let list = RestockList::from_recommendations(&recs);
        assert_eq!(list.placeholder(), None);
        assert_eq!(list.bars[0].percentage, 63);
        assert_eq!(list.bars[0].tier, FulfillmentTier::Green);
        assert_eq!(list.bars[1].width_style(), "width: 100%");
        assert_eq!(list.bars[1].category, "Canned");
    }

    #[test]
    fn null_category_still_gets_a_bar() {
        let json = r#"[{"ProductName": "Rice", "Category": null, "CurrentStock": 10, "RecommendedStock": 40}]"#;
        let recs: Vec<RestockRecommendation> = serde_json::from_str(json).unwrap();
        let list = RestockList::from_recommendations(&recs);
        assert_eq!(list.bars.len(), 1);
        assert_eq!(list.bars[0].category, "");
        assert_eq!(list.bars[0].tier, FulfillmentTier::Red);
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(RestockList::default().placeholder(), Some(NO_RESTOCK));
    }
}
