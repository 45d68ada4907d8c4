//! Expiry timeline widget: three fixed groups, nearest first.

use super::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dd_core::expiry::{ExpiryBucket, TimelineEntry, TimelineGroup};
use dd_core::view::{WidgetContent, WidgetId};
use dioxus::prelude::*;

#[component]
pub fn ExpiryTimelineWidget() -> Element {
    let state = use_context::<AppState>();
    let content = state.expiry_timeline.read().clone();

    let body = match content {
        WidgetContent::Expiry(timeline) => rsx! {
            {timeline.groups().map(timeline_group)}
        },
        WidgetContent::Error => rsx! { ErrorDisplay {} },
        _ => rsx! { LoadingSpinner {} },
    };

    rsx! {
        div {
            id: WidgetId::ExpiryTimeline.dom_id(),
            class: "expiry-timeline",
            {body}
        }
    }
}

fn timeline_group(group: TimelineGroup<'_>) -> Element {
    let bucket = group.bucket;
    let header = bucket.header();
    let items = match group.placeholder() {
        Some(placeholder) => rsx! {
            div { class: "timeline-item", {placeholder} }
        },
        None => rsx! {
            {group.entries.iter().enumerate().map(|(index, entry)| timeline_entry(bucket, index, entry))}
        },
    };

    rsx! {
        div {
            key: "{header}",
            class: "timeline-group",
            div { class: "timeline-header", "{header}" }
            div {
                id: bucket.dom_id(),
                class: "timeline-items",
                {items}
            }
        }
    }
}

fn timeline_entry(bucket: ExpiryBucket, index: usize, entry: &TimelineEntry) -> Element {
    let item_class = format!("timeline-item {}", bucket.item_class(entry.critical));
    let button_class = format!("btn btn-xs {}", bucket.action_class());
    let date = entry.date_label();
    let action = bucket.action_label();
    rsx! {
        div {
            key: "{index}",
            class: "{item_class}",
            div { class: "item-header", "{entry.name} ({entry.units} units)" }
            div { class: "item-date", "{date}" }
            button { r#type: "button", class: "{button_class}", "{action}" }
        }
    }
}
