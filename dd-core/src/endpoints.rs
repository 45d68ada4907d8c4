//! Backend endpoint paths and their query parameter maps.

use crate::filters::{FilterKey, ParamMap};

/// Full inventory snapshot, used only to derive the category list.
pub const STOCK_LEVELS: &str = "/api/stock_levels";
pub const LOW_STOCK: &str = "/api/low_stock";
pub const EXPIRING_PRODUCTS: &str = "/api/expiring_products";
pub const RESTOCK_RECOMMENDATIONS: &str = "/api/restock_recommendations";

pub const STOCK_MATRIX: &str = "/api/stock_matrix";
pub const EXPIRING_PRODUCTS_CHART: &str = "/api/expiring_products_chart";
pub const LOW_STOCK_WARNINGS: &str = "/api/low_stock_warnings";
pub const STOCK_UTILIZATION: &str = "/api/stock_utilization";

pub const LOW_STOCK_PARAMS: ParamMap = &[
    (FilterKey::Category, "category"),
    (FilterKey::StockLevel, "stock_level"),
    (FilterKey::Tag, "tag"),
];

pub const EXPIRING_PARAMS: ParamMap = &[
    (FilterKey::Category, "category"),
    (FilterKey::ExpiryRange, "days"),
    (FilterKey::Tag, "tag"),
];

pub const RESTOCK_PARAMS: ParamMap = LOW_STOCK_PARAMS;

/// Chart endpoints take all four filters under their UI-state names.
pub const CHART_PARAMS: ParamMap = &[
    (FilterKey::Category, "category"),
    (FilterKey::StockLevel, "stockLevel"),
    (FilterKey::ExpiryRange, "expiryRange"),
    (FilterKey::Tag, "tag"),
];
