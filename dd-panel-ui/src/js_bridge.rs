//! Hands chart data to the page's chart scripts via `js_sys::eval()`.
//!
//! The charts themselves are drawn by the dashboard's own scripts, which
//! expose `window.update*Chart(data)` hooks. The bridge script in
//! `assets/js/chart-bridge.js` queues the latest payload per hook until the
//! hook is defined, so the panel never has to guess when those scripts are
//! ready.

use dd_core::charts::{ChartKind, ChartSink};
use serde_json::Value;

static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[DeepDive] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Define `window.__ddDeliverChart`. Safe to call more than once.
pub fn init_chart_bridge() {
    let _ = js_sys::eval(CHART_BRIDGE_JS);
}

/// Queue `payload_json` for the page hook `window.<hook>`.
pub fn deliver_chart(hook: &str, payload_json: &str) {
    // Passed as a JS string literal and parsed on the other side.
    let literal = match serde_json::to_string(payload_json) {
        Ok(literal) => literal,
        Err(e) => {
            log::error!("Failed to encode payload for {}: {}", hook, e);
            return;
        }
    };
    call_js(&format!(
        "if (window.__ddDeliverChart) {{ window.__ddDeliverChart('{hook}', {literal}); }} \
         else {{ console.warn('[DeepDive] chart bridge not initialized'); }}"
    ));
}

/// `ChartSink` that forwards chart data to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageCharts;

impl PageCharts {
    /// Installs the bridge script.
    pub fn new() -> Self {
        init_chart_bridge();
        PageCharts
    }
}

impl Default for PageCharts {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSink for PageCharts {
    fn update_chart(&self, chart: ChartKind, payload: Value) {
        log::debug!("Updating {} via window.{}", chart, chart.js_hook());
        deliver_chart(chart.js_hook(), &payload.to_string());
    }
}
