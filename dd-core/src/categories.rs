//! Category options derived from the inventory snapshot.
//!
//! Categories keep the order in which the backend first returns them; they
//! are not sorted, so the list follows whatever order `/api/stock_levels`
//! uses.

use crate::filters::ALL;
use serde::Deserialize;
use std::collections::HashSet;

pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// The only part of a `/api/stock_levels` row the panel cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockLevelRow {
    #[serde(alias = "CategoryName", default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn all() -> Self {
        Self {
            value: ALL.to_string(),
            label: ALL_CATEGORIES_LABEL.to_string(),
        }
    }

    pub fn category(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// Distinct non-empty categories in first-seen order.
pub fn distinct_categories(rows: &[StockLevelRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| row.category.as_deref())
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}

/// "All Categories" followed by one option per category.
pub fn category_options(categories: &[String]) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption::all())
        .chain(categories.iter().map(|c| CategoryOption::category(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(names: &[&str]) -> Vec<StockLevelRow> {
        names
            .iter()
            .map(|n| StockLevelRow {
                category: Some(n.to_string()),
            })
            .collect()
    }

    #[test]
    fn duplicates_collapse() {
        let options = category_options(&distinct_categories(&rows(&["A", "A", "B"])));
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All Categories", "A", "B"]);
        assert_eq!(options[0].value, ALL);
    }

    #[test]
    fn first_seen_order_is_kept() {
        assert_eq!(
            distinct_categories(&rows(&["Snacks", "Dairy", "Snacks", "Bakery"])),
            vec!["Snacks", "Dairy", "Bakery"]
        );
    }

    #[test]
    fn rows_without_category_are_skipped() {
        let json = r#"[
            {"CategoryName": "Dairy", "TotalStock": 120},
            {"TotalStock": 7},
            {"Category": "", "TotalStock": 1},
            {"Category": "Frozen"}
        ]"#;
        let rows: Vec<StockLevelRow> = serde_json::from_str(json).unwrap();
        assert_eq!(distinct_categories(&rows), vec!["Dairy", "Frozen"]);
    }
}
