//! Reusable Dioxus RSX components for the Deep Dive panel.

mod expiry_timeline;
mod filter_bar;
mod low_stock_table;
mod panel_header;
mod restock_list;
mod widget_message;

pub use expiry_timeline::ExpiryTimelineWidget;
pub use filter_bar::FilterBar;
pub use low_stock_table::LowStockWidget;
pub use panel_header::PanelHeader;
pub use restock_list::RestockWidget;
pub use widget_message::{ErrorDisplay, LoadingSpinner, MessageRow};
