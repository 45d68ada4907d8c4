//! The four filter dropdowns and the "Apply Filters" button.

use crate::state::AppState;
use dd_core::filters::{FilterKey, ALL};
use dd_core::view::APPLY_FILTERS_ID;
use dioxus::prelude::*;

const STOCK_LEVEL_OPTIONS: [(&str, &str); 4] = [
    (ALL, "All Stock Levels"),
    ("critical", "Critical"),
    ("low", "Low"),
    ("normal", "Normal"),
];

const EXPIRY_RANGE_OPTIONS: [(&str, &str); 4] = [
    (ALL, "All Dates"),
    ("7", "Next 7 Days"),
    ("14", "Next 14 Days"),
    ("30", "Next 30 Days"),
];

const TAG_OPTIONS: [(&str, &str); 5] = [
    (ALL, "All Tags"),
    ("seasonal", "Seasonal"),
    ("perishable", "Perishable"),
    ("promotion", "Promotion"),
    ("clearance", "Clearance"),
];

fn owned(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    /// Fired when the user clicks "Apply Filters"
    pub on_apply: EventHandler<()>,
}

#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let state = use_context::<AppState>();
    let categories: Vec<(String, String)> = state
        .category_options
        .read()
        .iter()
        .map(|o| (o.value.clone(), o.label.clone()))
        .collect();
    let on_apply = props.on_apply;

    rsx! {
        div {
            class: "deep-dive-filters",
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap;",
            FilterSelect {
                filter: FilterKey::Category,
                label: "Category".to_string(),
                options: categories,
            }
            FilterSelect {
                filter: FilterKey::StockLevel,
                label: "Stock Level".to_string(),
                options: owned(&STOCK_LEVEL_OPTIONS),
            }
            FilterSelect {
                filter: FilterKey::ExpiryRange,
                label: "Expiry Range".to_string(),
                options: owned(&EXPIRY_RANGE_OPTIONS),
            }
            FilterSelect {
                filter: FilterKey::Tag,
                label: "Tag".to_string(),
                options: owned(&TAG_OPTIONS),
            }
            button {
                id: APPLY_FILTERS_ID,
                r#type: "button",
                class: "btn btn-primary",
                onclick: move |_| on_apply.call(()),
                "Apply Filters"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FilterSelectProps {
    filter: FilterKey,
    label: String,
    /// `(value, label)` pairs
    options: Vec<(String, String)>,
}

/// One labelled dropdown bound to a filter in `AppState`.
#[component]
fn FilterSelect(props: FilterSelectProps) -> Element {
    let mut state = use_context::<AppState>();
    let filter = props.filter;
    let selected = state.filters.read().value(filter).to_string();

    let on_change = move |evt: Event<FormData>| {
        state.filters.write().set(filter, evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold; display: flex; flex-direction: column;",
            "{props.label}"
            select {
                id: filter.dom_id(),
                class: "form-select",
                onchange: on_change,
                for (value, text) in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == selected,
                        "{text}"
                    }
                }
            }
        }
    }
}
