//! Core of the Deep Dive inventory panel.
//!
//! Everything here is platform independent and compiles both to WASM and
//! natively:
//! - `filters` / `endpoints`: filter selection and per-endpoint query strings
//! - `stock`, `expiry`, `restock`, `categories`: wire types and the view
//!   models each widget renders
//! - `api` / `clients` / `charts`: transport seam and typed fetch clients
//! - `view` / `orchestrator`: the `ViewState` seam and the refresh cycle
//!
//! # Usage
//!
//! ```rust
//! use dd_core::filters::{build_query, FilterKey, FilterSelection};
//! use dd_core::endpoints::LOW_STOCK_PARAMS;
//!
//! let filters = FilterSelection::default().with(FilterKey::Category, "Snacks");
//! assert_eq!(build_query(&filters, LOW_STOCK_PARAMS), "?category=Snacks");
//! ```

pub mod api;
pub mod categories;
pub mod charts;
pub mod clients;
pub mod endpoints;
pub mod error;
pub mod expiry;
pub mod filters;
pub mod generation;
pub mod orchestrator;
pub mod restock;
pub mod stock;
pub mod view;

pub use error::{DeepDiveError, Result};
pub use filters::FilterSelection;
pub use orchestrator::Orchestrator;
