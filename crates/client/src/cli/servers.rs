//! Server CLI commands.

use clap::{Parser, Subcommand};

/// Compute server inspection commands.
#[derive(Debug, Parser)]
pub struct ServerCommand {
    #[command(subcommand)]
    pub action: ServerAction,
}

/// Available server actions.
#[derive(Debug, Subcommand)]
pub enum ServerAction {
    /// List servers.
    List {
        /// Show additional columns.
        #[arg(long)]
        long: bool,
    },
    /// Display server details.
    Show {
        /// Server to display (name or ID).
        server: String,
    },
}
