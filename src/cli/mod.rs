pub mod config;
pub mod list;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::StoreKind;

/// A3S Alerts - Global notice management API
#[derive(Debug, Parser)]
#[command(name = "a3s-alerts", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Storage backend (overrides config)
        #[arg(long, value_enum)]
        store: Option<StoreKind>,

        /// JSON file for the file store (overrides config)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// List alerts stored in the configured data file
    List {
        /// Max number of alerts to show
        #[arg(long, default_value_t = 20)]
        limit: u64,

        /// Number of alerts to skip
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Show all active alerts (cannot be combined with paging)
        #[arg(long, conflicts_with_all = ["limit", "offset"])]
        active: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
