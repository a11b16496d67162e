//! Domain CLI commands.

use clap::{Parser, Subcommand};

/// Domain inspection commands.
#[derive(Debug, Parser)]
pub struct DomainCommand {
    #[command(subcommand)]
    pub action: DomainAction,
}

/// Available domain actions.
#[derive(Debug, Subcommand)]
pub enum DomainAction {
    /// List domains.
    List,
    /// Display domain details.
    Show {
        /// Domain to display (name or ID).
        domain: String,
    },
}
