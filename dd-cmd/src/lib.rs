//! Command implementations for the Deep Dive CLI.
//!
//! The commands drive the same orchestrator as the web panel, against a
//! live backend, and print what each widget would show.

use clap::{Args, Subcommand};
use dd_core::filters::{FilterSelection, ALL};

pub mod render;
pub mod snapshot;

/// Where the backend lives when `--base-url` is not given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Subcommand)]
pub enum Command {
    /// Run one refresh cycle and print the three widgets and chart outcomes
    Snapshot {
        /// Backend base URL
        #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the category filter's options
    Categories {
        /// Backend base URL
        #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

/// The four panel filters; "all" means unconstrained.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[arg(long, default_value = ALL)]
    pub category: String,

    /// critical, low or normal
    #[arg(long, default_value = ALL)]
    pub stock_level: String,

    /// Days ahead: 7, 14 or 30
    #[arg(long, default_value = ALL)]
    pub expiry_range: String,

    #[arg(long, default_value = ALL)]
    pub tag: String,
}

impl From<FilterArgs> for FilterSelection {
    fn from(args: FilterArgs) -> Self {
        FilterSelection {
            category: args.category,
            stock_level: args.stock_level,
            expiry_range: args.expiry_range,
            tag: args.tag,
        }
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Snapshot { base_url, filters } => {
            snapshot::run_snapshot(&base_url, filters.into()).await
        }
        Command::Categories { base_url } => snapshot::run_categories(&base_url).await,
    }
}
