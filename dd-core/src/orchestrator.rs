//! Wires the panel's two triggers to the fetch clients.
//!
//! Both triggers run the same cycle: read the filters, refresh the three
//! widgets concurrently and refresh the four charts concurrently. The two
//! groups are not ordered relative to each other. Every widget and chart
//! request takes a fresh generation, and a response that has been
//! superseded by a newer request is dropped instead of rendered.

use crate::api::InventoryApi;
use crate::charts::{self, ChartKind, ChartSink};
use crate::clients;
use crate::error::Result;
use crate::filters::FilterSelection;
use crate::generation::Generations;
use crate::view::{ViewState, WidgetContent, WidgetId};
use futures::future::join_all;
use futures::join;
use log::{debug, error, info};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

struct Inner<A, V, C> {
    api: A,
    view: V,
    charts: C,
    widgets: Generations<WidgetId>,
    chart_generations: Generations<ChartKind>,
    ready: Cell<bool>,
}

/// Drives the panel. Cheap to clone; clones share generations and the
/// ready flag.
pub struct Orchestrator<A, V, C> {
    inner: Rc<Inner<A, V, C>>,
}

impl<A, V, C> Clone for Orchestrator<A, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, V, C> PartialEq for Orchestrator<A, V, C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A, V, C> Orchestrator<A, V, C>
where
    A: InventoryApi,
    V: ViewState,
    C: ChartSink,
{
    pub fn new(api: A, view: V, charts: C) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                view,
                charts,
                widgets: Generations::new(),
                chart_generations: Generations::new(),
                ready: Cell::new(false),
            }),
        }
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    pub fn charts(&self) -> &C {
        &self.inner.charts
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.get()
    }

    /// Page-ready trigger. Loads the category options and runs one cycle
    /// with every filter at "all". Only the first call does anything;
    /// returns whether this call was it.
    pub async fn on_ready(&self) -> bool {
        if self.inner.ready.replace(true) {
            debug!("Deep dive panel already initialized");
            return false;
        }
        info!("Initializing deep dive panel");
        let defaults = FilterSelection::default();
        join!(self.load_category_options(), self.run_cycle(&defaults));
        true
    }

    /// Filter-apply trigger. Reads the current filters from the view.
    pub async fn apply_filters(&self) {
        let filters = self.inner.view.filter_selection();
        info!("Applying filters: {:?}", filters);
        self.run_cycle(&filters).await;
    }

    pub async fn run_cycle(&self, filters: &FilterSelection) {
        join!(self.refresh_widgets(filters), self.refresh_charts(filters));
    }

    pub async fn refresh_widgets(&self, filters: &FilterSelection) {
        let api = &self.inner.api;
        join!(
            self.refresh_widget(
                WidgetId::LowStock,
                clients::fetch_low_stock(api, filters),
                WidgetContent::LowStock,
            ),
            self.refresh_widget(
                WidgetId::ExpiryTimeline,
                clients::fetch_expiring(api, filters),
                WidgetContent::Expiry,
            ),
            self.refresh_widget(
                WidgetId::Restock,
                clients::fetch_restock(api, filters),
                WidgetContent::Restock,
            ),
        );
    }

    pub async fn refresh_charts(&self, filters: &FilterSelection) {
        join_all(
            ChartKind::ALL
                .into_iter()
                .map(|chart| self.refresh_chart(chart, filters)),
        )
        .await;
    }

    /// Replace the category control's options. A failure leaves the
    /// current options in place.
    pub async fn load_category_options(&self) {
        match clients::fetch_category_options(&self.inner.api).await {
            Ok(options) => {
                debug!("Loaded {} category options", options.len());
                self.inner.view.set_category_options(options);
            }
            Err(e) => error!("Error loading categories: {}", e),
        }
    }

    async fn refresh_widget<T, F>(
        &self,
        widget: WidgetId,
        fetch: F,
        render: fn(T) -> WidgetContent,
    ) where
        F: Future<Output = Result<T>>,
    {
        let ticket = self.inner.widgets.begin(widget);
        self.inner
            .view
            .set_widget_content(widget, WidgetContent::Loading);

        let result = fetch.await;
        if !self.inner.widgets.is_current(&ticket) {
            debug!(
                "Discarding stale {} response (generation {})",
                widget, ticket.generation
            );
            return;
        }

        let content = match result {
            Ok(value) => render(value),
            Err(e) => {
                error!("Error fetching {}: {}", widget, e);
                WidgetContent::Error
            }
        };
        self.inner.view.set_widget_content(widget, content);
    }

    async fn refresh_chart(&self, chart: ChartKind, filters: &FilterSelection) {
        let ticket = self.inner.chart_generations.begin(chart);
        let result = charts::fetch_chart(&self.inner.api, chart, filters).await;
        if !self.inner.chart_generations.is_current(&ticket) {
            debug!("Discarding stale {} data", chart);
            return;
        }
        match result {
            Ok(payload) => self.inner.charts.update_chart(chart, payload),
            Err(e) => error!("Error refreshing {}: {}", chart, e),
        }
    }
}
