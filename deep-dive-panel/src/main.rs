//! Deep Dive Inventory Panel
//!
//! Shows low-stock products, an expiry timeline and restock recommendations
//! for the inventory dashboard, filtered by category, stock level, expiry
//! range and tag. Applying filters also refreshes the dashboard's four
//! charts, which are drawn by the page's own scripts.
//!
//! Data flow:
//! 1. On mount the panel signals ready: category options are loaded from
//!    `/api/stock_levels` and every widget is fetched with all filters at "all".
//! 2. The filter dropdowns write into `AppState`; nothing is fetched until
//!    "Apply Filters" is clicked.
//! 3. Each click runs one refresh cycle. Widgets and charts are fetched
//!    concurrently; a response superseded by a later click is dropped.
//! 4. Widget content lands in `AppState` signals and the widget components
//!    re-render from there. Chart data goes through `js_bridge`.

use dd_panel_ui::components::{
    ExpiryTimelineWidget, FilterBar, LowStockWidget, PanelHeader, RestockWidget,
};
use dd_panel_ui::fetch::BrowserApi;
use dd_panel_ui::js_bridge::PageCharts;
use dd_panel_ui::state::AppState;
use dd_panel_ui::PanelOrchestrator;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("deep-dive-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let orchestrator =
        use_hook(|| PanelOrchestrator::new(BrowserApi::new(), state, PageCharts::new()));

    // Mounting is the ready signal; on_ready ignores repeats.
    let ready = orchestrator.clone();
    use_effect(move || {
        let ready = ready.clone();
        spawn(async move {
            ready.on_ready().await;
        });
    });

    let apply = orchestrator.clone();

    rsx! {
        div {
            class: "deep-dive",
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PanelHeader {
                title: "Deep Dive".to_string(),
                subtitle: "Low stock, upcoming expiries and restock suggestions".to_string(),
                class: "deep-dive-title".to_string(),
            }

            FilterBar {
                on_apply: move |_| {
                    let apply = apply.clone();
                    log::debug!("Apply filters clicked");
                    spawn(async move {
                        apply.apply_filters().await;
                    });
                },
            }

            div {
                class: "deep-dive-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px; margin-top: 12px;",
                section {
                    class: "deep-dive-card",
                    PanelHeader { title: "Low Stock Products".to_string() }
                    LowStockWidget {}
                }
                section {
                    class: "deep-dive-card",
                    PanelHeader { title: "Expiry Timeline".to_string() }
                    ExpiryTimelineWidget {}
                }
                section {
                    class: "deep-dive-card",
                    PanelHeader { title: "Restock Recommendations".to_string() }
                    RestockWidget {}
                }
            }
        }
    }
}
