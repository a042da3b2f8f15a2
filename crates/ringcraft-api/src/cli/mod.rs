//! CLI argument definitions and command implementations.

pub mod config;

use clap::{Parser, Subcommand};

/// Ring builder configurator service.
#[derive(Parser)]
#[command(name = "ringcraft", version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to bind (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
        /// Host to bind (overrides config.toml)
        #[arg(long)]
        host: Option<String>,
    },

    /// Inspect or update the storefront configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the feature-to-handle mappings
    Show,

    /// Map a configurator feature to a store handle
    Set {
        /// The configurator feature to map
        #[arg(value_enum)]
        feature: config::Feature,
        /// The collection/page handle to map it to
        handle: String,
    },
}
