//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. It is also the panel's `ViewState`: the
//! orchestrator reads the filters from it and writes widget content into it,
//! and the components re-render from the signals.

use dd_core::categories::CategoryOption;
use dd_core::filters::FilterSelection;
use dd_core::view::{ViewState, WidgetContent, WidgetId};
use dioxus::prelude::*;

/// Shared state of the Deep Dive panel.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    /// Current values of the four filter controls
    pub filters: Signal<FilterSelection>,
    /// Options of the category control ("All Categories" first)
    pub category_options: Signal<Vec<CategoryOption>>,
    pub low_stock: Signal<WidgetContent>,
    pub expiry_timeline: Signal<WidgetContent>,
    pub restock: Signal<WidgetContent>,
}

impl AppState {
    /// Create a new AppState with every filter at "all" and every widget loading.
    pub fn new() -> Self {
        Self {
            filters: Signal::new(FilterSelection::default()),
            category_options: Signal::new(vec![CategoryOption::all()]),
            low_stock: Signal::new(WidgetContent::Loading),
            expiry_timeline: Signal::new(WidgetContent::Loading),
            restock: Signal::new(WidgetContent::Loading),
        }
    }

    /// The signal backing a widget.
    pub fn widget(&self, widget: WidgetId) -> Signal<WidgetContent> {
        match widget {
            WidgetId::LowStock => self.low_stock,
            WidgetId::ExpiryTimeline => self.expiry_timeline,
            WidgetId::Restock => self.restock,
        }
    }
}

impl ViewState for AppState {
    fn filter_selection(&self) -> FilterSelection {
        self.filters.peek().clone()
    }

    fn set_widget_content(&self, widget: WidgetId, content: WidgetContent) {
        let mut signal = self.widget(widget);
        signal.set(content);
    }

    fn set_category_options(&self, options: Vec<CategoryOption>) {
        let mut signal = self.category_options;
        signal.set(options);
    }
}
