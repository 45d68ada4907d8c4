//! Refreshing the dashboard charts that live outside the panel.
//!
//! The panel does not draw these charts. It fetches each chart's data with
//! the current filters and hands the raw JSON to a [`ChartSink`], which on
//! the web forwards it to the page's own chart scripts.

use crate::api::{get_json, InventoryApi};
use crate::endpoints;
use crate::error::Result;
use crate::filters::{build_query, FilterSelection};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    StockMatrix,
    ExpiringProducts,
    LowStockWarnings,
    StockUtilization,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::StockMatrix,
        ChartKind::ExpiringProducts,
        ChartKind::LowStockWarnings,
        ChartKind::StockUtilization,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            ChartKind::StockMatrix => endpoints::STOCK_MATRIX,
            ChartKind::ExpiringProducts => endpoints::EXPIRING_PRODUCTS_CHART,
            ChartKind::LowStockWarnings => endpoints::LOW_STOCK_WARNINGS,
            ChartKind::StockUtilization => endpoints::STOCK_UTILIZATION,
        }
    }

    /// Name of the `window.*` function the page exposes for this chart.
    pub fn js_hook(&self) -> &'static str {
        match self {
            ChartKind::StockMatrix => "updateStockMatrixChart",
            ChartKind::ExpiringProducts => "updateExpiringProductsChart",
            ChartKind::LowStockWarnings => "updateLowStockWarningsChart",
            ChartKind::StockUtilization => "updateStockUtilizationChart",
        }
    }

    pub fn path(&self, filters: &FilterSelection) -> String {
        format!(
            "{}{}",
            self.endpoint(),
            build_query(filters, endpoints::CHART_PARAMS)
        )
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::StockMatrix => "stock matrix",
            ChartKind::ExpiringProducts => "expiring products chart",
            ChartKind::LowStockWarnings => "low stock warnings",
            ChartKind::StockUtilization => "stock utilization",
        };
        f.write_str(name)
    }
}

/// Receives fresh chart data.
pub trait ChartSink {
    fn update_chart(&self, chart: ChartKind, payload: Value);
}

/// Fetch one chart's data. The payload is not interpreted.
pub async fn fetch_chart<A: InventoryApi>(
    api: &A,
    chart: ChartKind,
    filters: &FilterSelection,
) -> Result<Value> {
    get_json(api, &chart.path(filters)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterKey;

    #[test]
    fn charts_receive_all_four_filters() {
        let filters = FilterSelection::default()
            .with(FilterKey::Category, "Snacks")
            .with(FilterKey::StockLevel, "low")
            .with(FilterKey::ExpiryRange, "7")
            .with(FilterKey::Tag, "seasonal");
        assert_eq!(
            ChartKind::StockMatrix.path(&filters),
            "/api/stock_matrix?category=Snacks&stockLevel=low&expiryRange=7&tag=seasonal"
        );
    }

    #[test]
    fn chart_endpoints_are_distinct() {
        let mut endpoints: Vec<_> = ChartKind::ALL.iter().map(|c| c.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 4);
        assert_eq!(
            ChartKind::StockUtilization.path(&FilterSelection::default()),
            "/api/stock_utilization"
        );
    }
}
