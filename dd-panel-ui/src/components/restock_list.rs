//! Restock recommendations widget with fulfillment bars.

use super::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dd_core::restock::{RestockBar, ORDER_ACTION};
use dd_core::view::{WidgetContent, WidgetId};
use dioxus::prelude::*;

#[component]
pub fn RestockWidget() -> Element {
    let state = use_context::<AppState>();
    let content = state.restock.read().clone();

    let body = match content {
        WidgetContent::Restock(list) => match list.placeholder() {
            Some(placeholder) => rsx! {
                div { class: "text-center", {placeholder} }
            },
            None => rsx! {
                {list.bars.iter().enumerate().map(|(index, bar)| restock_item(index, bar))}
            },
        },
        WidgetContent::Error => rsx! { ErrorDisplay {} },
        _ => rsx! { LoadingSpinner {} },
    };

    rsx! {
        div {
            id: WidgetId::Restock.dom_id(),
            class: "restock-recommendations",
            {body}
        }
    }
}

fn restock_item(index: usize, bar: &RestockBar) -> Element {
    let bar_class = format!("progress-bar {}", bar.tier.bar_class());
    let width = bar.width_style();
    rsx! {
        div {
            key: "{index}",
            class: "restock-item",
            div {
                class: "restock-info",
                div { class: "item-name", "{bar.product_name}" }
                div { class: "item-category", "{bar.category}" }
            }
            div {
                class: "restock-progress",
                div {
                    class: "progress-label",
                    span { "Current: {bar.current_stock}" }
                    span { "Recommended: {bar.recommended_stock}" }
                }
                div {
                    class: "progress",
                    div {
                        class: "{bar_class}",
                        role: "progressbar",
                        style: "{width}",
                        "aria-valuenow": "{bar.current_stock}",
                        "aria-valuemin": "0",
                        "aria-valuemax": "{bar.recommended_stock}",
                    }
                }
            }
            button {
                r#type: "button",
                class: "btn btn-sm btn-primary",
                {ORDER_ACTION}
            }
        }
    }
}
