use crate::render::{render_categories, render_widget};
use anyhow::bail;
use dd_core::api::{HttpApi, InventoryApi};
use dd_core::categories::CategoryOption;
use dd_core::charts::{ChartKind, ChartSink};
use dd_core::filters::FilterSelection;
use dd_core::view::{ViewState, WidgetContent, WidgetId};
use dd_core::Orchestrator;
use log::{info, warn};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// `ViewState` for a terminal run: the filters are fixed up front and
/// widget content is kept until printed.
pub struct TerminalView {
    filters: FilterSelection,
    widgets: RefCell<HashMap<WidgetId, WidgetContent>>,
    category_options: RefCell<Vec<CategoryOption>>,
}

impl TerminalView {
    pub fn new(filters: FilterSelection) -> Self {
        Self {
            filters,
            widgets: RefCell::new(HashMap::new()),
            category_options: RefCell::new(vec![CategoryOption::all()]),
        }
    }

    pub fn content(&self, widget: WidgetId) -> WidgetContent {
        self.widgets
            .borrow()
            .get(&widget)
            .cloned()
            .unwrap_or_default()
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.category_options.borrow().clone()
    }

    pub fn render(&self) -> String {
        WidgetId::ALL
            .into_iter()
            .map(|widget| render_widget(widget, &self.content(widget)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ViewState for TerminalView {
    fn filter_selection(&self) -> FilterSelection {
        self.filters.clone()
    }

    fn set_widget_content(&self, widget: WidgetId, content: WidgetContent) {
        self.widgets.borrow_mut().insert(widget, content);
    }

    fn set_category_options(&self, options: Vec<CategoryOption>) {
        *self.category_options.borrow_mut() = options;
    }
}

/// One line per chart payload received, in arrival order.
#[derive(Default)]
pub struct ChartLog {
    lines: RefCell<Vec<String>>,
}

impl ChartLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn received(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl ChartSink for ChartLog {
    fn update_chart(&self, chart: ChartKind, payload: Value) {
        let line = format!("{} -> window.{} ({})", chart, chart.js_hook(), summarize(&payload));
        self.lines.borrow_mut().push(line);
    }
}

fn summarize(payload: &Value) -> String {
    match payload {
        Value::Array(items) => format!("{} entries", items.len()),
        Value::Object(fields) => format!("{} fields", fields.len()),
        Value::Null => "empty".to_string(),
        other => other.to_string(),
    }
}

/// Runs one filtered cycle and returns the printed report.
pub async fn snapshot<A: InventoryApi>(api: A, filters: FilterSelection) -> anyhow::Result<String> {
    let orchestrator = Orchestrator::new(api, TerminalView::new(filters), ChartLog::default());
    orchestrator.apply_filters().await;

    let view = orchestrator.view();
    if WidgetId::ALL
        .into_iter()
        .all(|widget| view.content(widget).is_error())
    {
        bail!("every widget failed to load");
    }

    let mut report = view.render();
    report.push_str("\n== Charts ==\n");
    let charts = orchestrator.charts();
    for line in charts.lines() {
        report.push_str(&line);
        report.push('\n');
    }
    let missing = ChartKind::ALL.len() - charts.received();
    if missing > 0 {
        warn!("{} chart(s) did not receive data", missing);
        report.push_str(&format!("{} chart(s) failed\n", missing));
    }
    Ok(report)
}

pub async fn run_snapshot(base_url: &str, filters: FilterSelection) -> anyhow::Result<()> {
    info!("Snapshot of {} with {:?}", base_url, filters);
    let report = snapshot(HttpApi::new(base_url), filters).await?;
    print!("{}", report);
    Ok(())
}

/// Loads the category options; fails if only the "all" option is left.
pub async fn categories<A: InventoryApi>(api: A) -> anyhow::Result<Vec<CategoryOption>> {
    let orchestrator = Orchestrator::new(
        api,
        TerminalView::new(FilterSelection::default()),
        ChartLog::default(),
    );
    orchestrator.load_category_options().await;
    let options = orchestrator.view().category_options();
    if options.len() <= 1 {
        bail!("no categories loaded");
    }
    Ok(options)
}

pub async fn run_categories(base_url: &str) -> anyhow::Result<()> {
    let options = categories(HttpApi::new(base_url)).await?;
    print!("{}", render_categories(&options));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_core::{DeepDiveError, Result};
    use futures::executor::block_on;

    struct Backend {
        routes: Vec<(&'static str, &'static str)>,
    }

    impl InventoryApi for Backend {
        async fn get_text(&self, path_and_query: &str) -> Result<String> {
            let path = path_and_query.split('?').next().unwrap_or_default();
            self.routes
                .iter()
                .find(|(route, _)| *route == path)
                .map(|(_, body)| body.to_string())
                .ok_or_else(|| DeepDiveError::HttpStatus {
                    status: 500,
                    url: path_and_query.to_string(),
                })
        }
    }

    #[test]
    fn snapshot_prints_widgets_and_charts() {
        let backend = Backend {
            routes: vec![
                (
                    "/api/low_stock",
                    r#"[{"ProductName": "Chips", "Category": "Snacks", "StockQuantity": 3}]"#,
                ),
                ("/api/expiring_products", "[]"),
                (
                    "/api/restock_recommendations",
                    r#"[{"ProductName": "Chips", "Category": "Snacks", "CurrentStock": 3, "RecommendedStock": 12}]"#,
                ),
                ("/api/stock_matrix", r#"{"labels": [], "data": []}"#),
                ("/api/low_stock_warnings", "[1, 2]"),
            ],
        };
        let report = block_on(snapshot(backend, FilterSelection::default())).unwrap();
        assert!(report.contains("Chips"));
        assert!(report.contains("Critical"));
        assert!(report.contains("25%"));
        assert!(report.contains("window.updateStockMatrixChart (2 fields)"));
        assert!(report.contains("2 chart(s) failed"));
    }

    #[test]
    fn snapshot_fails_when_backend_is_down() {
        let backend = Backend { routes: vec![] };
        assert!(block_on(snapshot(backend, FilterSelection::default())).is_err());
    }

    #[test]
    fn categories_keep_backend_order() {
        let backend = Backend {
            routes: vec![(
                "/api/stock_levels",
                r#"[{"Category": "Snacks"}, {"Category": "Dairy"}, {"Category": "Snacks"}]"#,
            )],
        };
        let options = block_on(categories(backend)).unwrap();
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["all", "Snacks", "Dairy"]);
    }

    #[test]
    fn categories_fail_without_backend() {
        assert!(block_on(categories(Backend { routes: vec![] })).is_err());
    }

    #[test]
    fn terminal_view_defaults_to_loading() {
        let view = TerminalView::new(FilterSelection::default());
        assert_eq!(view.content(WidgetId::Restock), WidgetContent::Loading);
        view.set_widget_content(WidgetId::Restock, WidgetContent::Error);
        assert!(view.content(WidgetId::Restock).is_error());
    }
}
