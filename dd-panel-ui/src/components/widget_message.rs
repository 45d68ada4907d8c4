//! Loading and error states shared by the widgets.

use dd_core::view::{ERROR_TEXT, LOADING_TEXT};
use dioxus::prelude::*;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "text-center",
            style: "padding: 16px; color: #666;",
            {LOADING_TEXT}
        }
    }
}

/// The one error state every widget collapses its failures into.
#[component]
pub fn ErrorDisplay() -> Element {
    rsx! {
        div {
            class: "text-center text-danger",
            style: "padding: 12px 16px; color: #C62828;",
            {ERROR_TEXT}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MessageRowProps {
    pub message: String,
    /// Extra classes, e.g. `text-danger`
    #[props(default = String::new())]
    pub class: String,
    #[props(default = 5)]
    pub colspan: u32,
}

/// A single full-width table row carrying a message.
#[component]
pub fn MessageRow(props: MessageRowProps) -> Element {
    let class = format!("text-center {}", props.class).trim_end().to_string();
    rsx! {
        tr {
            td {
                colspan: "{props.colspan}",
                class: "{class}",
                "{props.message}"
            }
        }
    }
}
