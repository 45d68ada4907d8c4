//! Card heading shared by the panel and its three widgets.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    pub title: String,
    /// Muted line under the title; omitted when empty
    #[props(default = String::new())]
    pub subtitle: String,
    /// Extra classes on the header, e.g. `deep-dive-title` for the page heading
    #[props(default = String::new())]
    pub class: String,
}

fn header_class(extra: &str) -> String {
    format!("card-header deep-dive-header {}", extra)
        .trim_end()
        .to_string()
}

#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    let class = header_class(&props.class);
    rsx! {
        header {
            class: "{class}",
            h5 { class: "card-title mb-0", "{props.title}" }
            if !props.subtitle.is_empty() {
                small { class: "text-muted", "{props.subtitle}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_class_is_appended() {
        assert_eq!(header_class(""), "card-header deep-dive-header");
        assert_eq!(
            header_class("deep-dive-title"),
            "card-header deep-dive-header deep-dive-title"
        );
    }
}
