//! Low-stock table widget.

use super::MessageRow;
use crate::state::AppState;
use dd_core::stock::{LowStockRow, TableRow, RESTOCK_ACTION, TABLE_COLUMNS};
use dd_core::view::{WidgetContent, WidgetId, ERROR_TEXT, LOADING_TEXT};
use dioxus::prelude::*;

/// Table of low-stock products. The `tbody` is replaced wholesale whenever
/// the widget's content changes.
#[component]
pub fn LowStockWidget() -> Element {
    let state = use_context::<AppState>();
    let content = state.low_stock.read().clone();

    let body = match content {
        WidgetContent::LowStock(table) => rsx! {
            {table.rows.iter().enumerate().map(|(index, row)| table_row(index, row))}
        },
        WidgetContent::Error => rsx! {
            MessageRow { message: ERROR_TEXT.to_string(), class: "text-danger".to_string() }
        },
        _ => rsx! {
            MessageRow { message: LOADING_TEXT.to_string() }
        },
    };

    rsx! {
        table {
            class: "table table-sm deep-dive-table",
            thead {
                tr {
                    for column in TABLE_COLUMNS {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                id: WidgetId::LowStock.dom_id(),
                {body}
            }
        }
    }
}

fn table_row(index: usize, row: &TableRow) -> Element {
    match row {
        TableRow::Item(item) => item_row(index, item),
        TableRow::Message(message) => rsx! {
            MessageRow { key: "{index}", message: message.to_string() }
        },
    }
}

fn item_row(index: usize, item: &LowStockRow) -> Element {
    let badge_class = format!("badge {} glassmorphic-badge", item.tier.badge_class());
    let tier = item.tier.label();
    rsx! {
        tr {
            key: "{index}",
            class: "glassmorphic",
            td { "{item.product_name}" }
            td { "{item.category}" }
            td { "{item.quantity}" }
            td {
                span { class: "{badge_class}", "{tier}" }
            }
            td {
                button {
                    r#type: "button",
                    class: "btn btn-sm btn-primary glassmorphic-button",
                    {RESTOCK_ACTION}
                }
            }
        }
    }
}
