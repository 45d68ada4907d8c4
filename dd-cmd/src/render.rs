//! Plain-text rendering of widget content for the terminal.

use dd_core::categories::CategoryOption;
use dd_core::expiry::ExpiryTimeline;
use dd_core::restock::RestockList;
use dd_core::stock::{LowStockTable, TableRow, RESTOCK_ACTION, TABLE_COLUMNS};
use dd_core::view::{WidgetContent, WidgetId, ERROR_TEXT, LOADING_TEXT};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Title line followed by the widget body.
pub fn render_widget(widget: WidgetId, content: &WidgetContent) -> String {
    let mut out = format!("== {} ==\n", widget_title(widget));
    let body = match content {
        WidgetContent::Loading => format!("{}\n", LOADING_TEXT),
        WidgetContent::Error => format!("{}\n", ERROR_TEXT),
        WidgetContent::LowStock(table) => render_low_stock(table),
        WidgetContent::Expiry(timeline) => render_timeline(timeline),
        WidgetContent::Restock(list) => render_restock(list),
    };
    out.push_str(&body);
    out
}

fn widget_title(widget: WidgetId) -> &'static str {
    match widget {
        WidgetId::LowStock => "Low Stock Products",
        WidgetId::ExpiryTimeline => "Expiry Timeline",
        WidgetId::Restock => "Restock Recommendations",
    }
}

pub fn render_low_stock(table: &LowStockTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28} {:<16} {:>8}  {:<11} {}",
        TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2], TABLE_COLUMNS[3], TABLE_COLUMNS[4]
    );
    for row in &table.rows {
        match row {
            TableRow::Item(item) => {
                let _ = writeln!(
                    out,
                    "{:<28} {:<16} {:>8}  {:<11} [{}]",
                    item.product_name, item.category, item.quantity, item.tier, RESTOCK_ACTION
                );
            }
            TableRow::Message(message) => {
                let _ = writeln!(out, "{}", message);
            }
        }
    }
    out
}

pub fn render_timeline(timeline: &ExpiryTimeline) -> String {
    let mut out = String::new();
    for group in timeline.groups() {
        let _ = writeln!(out, "{}", group.bucket.header());
        if let Some(placeholder) = group.placeholder() {
            let _ = writeln!(out, "  {}", placeholder);
            continue;
        }
        for entry in group.entries {
            let marker = if entry.critical { '!' } else { '-' };
            let _ = writeln!(
                out,
                "  {} {} ({} units) {} [{}]",
                marker,
                entry.name,
                entry.units,
                entry.date_label(),
                group.bucket.action_label()
            );
        }
    }
    out
}

pub fn render_restock(list: &RestockList) -> String {
    if let Some(placeholder) = list.placeholder() {
        return format!("{}\n", placeholder);
    }
    let mut out = String::new();
    for bar in &list.bars {
        let filled = usize::from(bar.percentage) * BAR_WIDTH / 100;
        let _ = writeln!(
            out,
            "{} ({}) current {} / recommended {} [{}{}] {}%",
            bar.product_name,
            bar.category,
            bar.current_stock,
            bar.recommended_stock,
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            bar.percentage
        );
    }
    out
}

pub fn render_categories(options: &[CategoryOption]) -> String {
    options
        .iter()
        .map(|o| format!("{}\t{}\n", o.value, o.label))
        .collect()
}
