//! Project CLI commands.

use clap::{Parser, Subcommand};

/// Project inspection commands.
#[derive(Debug, Parser)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

/// Available project actions.
#[derive(Debug, Subcommand)]
pub enum ProjectAction {
    /// List projects.
    List {
        /// Show additional columns.
        #[arg(long)]
        long: bool,
    },
    /// Display project details.
    Show {
        /// Project to display (name or ID).
        project: String,
    },
}
