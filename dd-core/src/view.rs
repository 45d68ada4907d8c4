//! The seam between the orchestrator and whatever draws the panel.

use crate::categories::CategoryOption;
use crate::expiry::ExpiryTimeline;
use crate::filters::FilterSelection;
use crate::restock::RestockList;
use crate::stock::LowStockTable;
use std::fmt;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error loading data";

/// DOM id of the "Apply Filters" button.
pub const APPLY_FILTERS_ID: &str = "applyFilters";

/// The three independently refreshed widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    LowStock,
    ExpiryTimeline,
    Restock,
}

impl WidgetId {
    pub const ALL: [WidgetId; 3] = [WidgetId::LowStock, WidgetId::ExpiryTimeline, WidgetId::Restock];

    /// DOM id of the element the widget renders into.
    pub fn dom_id(&self) -> &'static str {
        match self {
            WidgetId::LowStock => "lowStockTable",
            WidgetId::ExpiryTimeline => "expiryTimeline",
            WidgetId::Restock => "restockRecommendations",
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetId::LowStock => "low stock products",
            WidgetId::ExpiryTimeline => "expiring products",
            WidgetId::Restock => "restock recommendations",
        };
        f.write_str(name)
    }
}

/// Everything a widget can show. Setting new content replaces the old
/// content entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetContent {
    #[default]
    Loading,
    LowStock(LowStockTable),
    Expiry(ExpiryTimeline),
    Restock(RestockList),
    Error,
}

impl WidgetContent {
    pub fn is_error(&self) -> bool {
        matches!(self, WidgetContent::Error)
    }
}

/// UI state as seen by the orchestrator.
///
/// Methods take `&self`: implementations hold cheap handles (signals,
/// `RefCell`s) rather than owning the UI.
pub trait ViewState {
    /// Current values of the four filter controls.
    fn filter_selection(&self) -> FilterSelection;

    /// Replace a widget's content.
    fn set_widget_content(&self, widget: WidgetId, content: WidgetContent);

    /// Replace the category control's option list.
    fn set_category_options(&self, options: Vec<CategoryOption>);
}
