//! Low-stock items and the table view built from them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Quantities at or below this are critical.
pub const CRITICAL_MAX: u32 = 5;
/// Quantities at or below this (and above [`CRITICAL_MAX`]) are low.
pub const LOW_MAX: u32 = 15;

pub const NO_LOW_STOCK: &str = "No low stock products found";
pub const RESTOCK_ACTION: &str = "Restock";
pub const TABLE_COLUMNS: [&str; 5] = ["Product", "Category", "Quantity", "Stock Level", "Action"];

/// One row of `/api/low_stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LowStockItem {
    pub product_name: String,
    #[serde(
        alias = "CategoryName",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub category: String,
    pub stock_quantity: u32,
}

/// Severity of a stock quantity.
/// Reads a display-only string field, treating `null` as empty.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTier {
    Critical,
    Low,
    Normal,
}

impl StockTier {
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity <= CRITICAL_MAX {
            StockTier::Critical
        } else if quantity <= LOW_MAX {
            StockTier::Low
        } else {
            StockTier::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockTier::Critical => "Critical",
            StockTier::Low => "Low",
            StockTier::Normal => "Normal",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockTier::Critical => "bg-danger",
            StockTier::Low => "bg-warning",
            StockTier::Normal => "bg-primary",
        }
    }
}

impl fmt::Display for StockTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockRow {
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub tier: StockTier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Item(LowStockRow),
    /// A single full-width message row.
    Message(&'static str),
}

/// Rows of the low-stock table, rebuilt wholesale from each response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LowStockTable {
    pub rows: Vec<TableRow>,
}

impl LowStockTable {
    pub fn from_items(items: &[LowStockItem]) -> Self {
        if items.is_empty() {
            return Self {
                rows: vec![TableRow::Message(NO_LOW_STOCK)],
            };
        }

        let rows = items
            .iter()
            .map(|item| {
                TableRow::Item(LowStockRow {
                    product_name: item.product_name.clone(),
                    category: item.category.clone(),
                    quantity: item.stock_quantity,
                    tier: StockTier::from_quantity(item.stock_quantity),
                })
            })
            .collect();
        Self { rows }
    }

    /// Number of item rows (message rows excluded).
    pub fn item_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, TableRow::Item(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(StockTier::from_quantity(0), StockTier::Critical);
        assert_eq!(StockTier::from_quantity(5), StockTier::Critical);
        assert_eq!(StockTier::from_quantity(6), StockTier::Low);
        assert_eq!(StockTier::from_quantity(15), StockTier::Low);
        assert_eq!(StockTier::from_quantity(16), StockTier::Normal);
    }

    #[test]
    fn badge_follows_tier() {
        assert_eq!(StockTier::Critical.badge_class(), "bg-danger");
        assert_eq!(StockTier::Low.badge_class(), "bg-warning");
        assert_eq!(StockTier::Normal.to_string(), "Normal");
    }

    #[test]
    fn empty_response_renders_one_message_row() {
        let table = LowStockTable::from_items(&[]);
        assert_eq!(table.rows, vec![TableRow::Message(NO_LOW_STOCK)]);
        assert_eq!(table.item_count(), 0);
    }

    #[test]
    fn decodes_backend_rows() {
        let json = r#"[
            {"ProductName": "Oat Milk", "Category": "Dairy", "StockQuantity": 4},
            {"ProductName": "Granola", "CategoryName": "Cereal", "StockQuantity": 12, "Tag": "promotion"}
        ]"#;
        let items: Vec<LowStockItem> = serde_json::from_str(json).unwrap();
        let table = LowStockTable::from_items(&items);
        assert_eq!(table.item_count(), 2);
        match &table.rows[1] {
            TableRow::Item(row) => {
                assert_eq!(row.category, "Cereal");
                assert_eq!(row.tier, StockTier::Low);
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn null_category_keeps_the_row() {
        let json = r#"[
            {"ProductName": "Loose Lemons", "Category": null, "StockQuantity": 2},
            {"ProductName": "Tea", "Category": "Drinks", "StockQuantity": 9}
        ]"#;
        let items: Vec<LowStockItem> = serde_json::from_str(json).unwrap();
        let table = LowStockTable::from_items(&items);
        assert_eq!(table.item_count(), 2);
        match &table.rows[0] {
            TableRow::Item(row) => {
                assert_eq!(row.category, "");
                assert_eq!(row.tier, StockTier::Critical);
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let json = r#"[{"ProductName": "Ghost", "Category": "X", "StockQuantity": -1}]"#;
        assert!(serde_json::from_str::<Vec<LowStockItem>>(json).is_err());
    }
}
