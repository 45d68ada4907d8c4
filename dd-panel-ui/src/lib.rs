//! Shared Dioxus components and browser glue for the Deep Dive panel.
//!
//! This crate provides:
//! - `fetch`: `InventoryApi` over the browser's `fetch`
//! - `js_bridge`: hands chart data to the page's chart scripts via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals, doubling as the panel's `ViewState`
//! - `components`: the filter bar and the three widgets

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;

use dd_core::Orchestrator;

/// The orchestrator as wired up in the browser.
pub type PanelOrchestrator = Orchestrator<fetch::BrowserApi, state::AppState, js_bridge::PageCharts>;
