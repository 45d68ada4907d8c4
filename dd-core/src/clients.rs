//! Typed fetch clients, one per endpoint.
//!
//! Each client builds its own query string from the filter subset its
//! endpoint understands, decodes the JSON array and turns it into the view
//! model for its widget. Errors are returned to the caller untouched; the
//! orchestrator decides how to show them.

use crate::api::{get_json, InventoryApi};
use crate::categories::{category_options, distinct_categories, CategoryOption, StockLevelRow};
use crate::endpoints;
use crate::error::Result;
use crate::expiry::{ExpiringItem, ExpiryTimeline};
use crate::filters::{build_query, FilterSelection};
use crate::restock::{RestockList, RestockRecommendation};
use crate::stock::{LowStockItem, LowStockTable};

pub fn low_stock_path(filters: &FilterSelection) -> String {
    format!(
        "{}{}",
        endpoints::LOW_STOCK,
        build_query(filters, endpoints::LOW_STOCK_PARAMS)
    )
}

pub fn expiring_path(filters: &FilterSelection) -> String {
    format!(
        "{}{}",
        endpoints::EXPIRING_PRODUCTS,
        build_query(filters, endpoints::EXPIRING_PARAMS)
    )
}

pub fn restock_path(filters: &FilterSelection) -> String {
    format!(
        "{}{}",
        endpoints::RESTOCK_RECOMMENDATIONS,
        build_query(filters, endpoints::RESTOCK_PARAMS)
    )
}

pub async fn fetch_low_stock<A: InventoryApi>(
    api: &A,
    filters: &FilterSelection,
) -> Result<LowStockTable> {
    let items: Vec<LowStockItem> = get_json(api, &low_stock_path(filters)).await?;
    Ok(LowStockTable::from_items(&items))
}

/// Fetch expiring items and bucket them into the timeline.
pub async fn fetch_expiring<A: InventoryApi>(
    api: &A,
    filters: &FilterSelection,
) -> Result<ExpiryTimeline> {
    let items: Vec<ExpiringItem> = get_json(api, &expiring_path(filters)).await?;
    Ok(ExpiryTimeline::from_items(&items))
}

pub async fn fetch_restock<A: InventoryApi>(
    api: &A,
    filters: &FilterSelection,
) -> Result<RestockList> {
    let recommendations: Vec<RestockRecommendation> =
        get_json(api, &restock_path(filters)).await?;
    Ok(RestockList::from_recommendations(&recommendations))
}

/// Fetch the unfiltered inventory snapshot and derive the category options.
pub async fn fetch_category_options<A: InventoryApi>(api: &A) -> Result<Vec<CategoryOption>> {
    let rows: Vec<StockLevelRow> = get_json(api, endpoints::STOCK_LEVELS).await?;
    Ok(category_options(&distinct_categories(&rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterKey;

    fn filters() -> FilterSelection {
        FilterSelection::default()
            .with(FilterKey::Category, "Snacks")
            .with(FilterKey::StockLevel, "critical")
            .with(FilterKey::ExpiryRange, "14")
    }

    #[test]
    fn each_endpoint_gets_its_own_parameters() {
        let filters = filters();
        assert_eq!(
            low_stock_path(&filters),
            "/api/low_stock?category=Snacks&stock_level=critical"
        );
        assert_eq!(
            expiring_path(&filters),
            "/api/expiring_products?category=Snacks&days=14"
        );
        assert_eq!(
            restock_path(&filters),
            "/api/restock_recommendations?category=Snacks&stock_level=critical"
        );
    }

    #[test]
    fn unfiltered_paths_have_no_query() {
        let filters = FilterSelection::default();
        assert_eq!(low_stock_path(&filters), "/api/low_stock");
        assert_eq!(expiring_path(&filters), "/api/expiring_products");
    }
}
