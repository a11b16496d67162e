//! Role CLI commands.

use clap::{Args, Parser, Subcommand};

/// Role management commands.
#[derive(Debug, Parser)]
pub struct RoleCommand {
    #[command(subcommand)]
    pub action: RoleAction,
}

/// Scope of a role grant: exactly one of a project or a domain.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct ScopeArgs {
    /// Project (name or ID).
    #[arg(long)]
    pub project: Option<String>,
    /// Domain (name or ID).
    #[arg(long)]
    pub domain: Option<String>,
}

/// Available role actions.
#[derive(Debug, Subcommand)]
pub enum RoleAction {
    /// Grant a role to a user on a project or domain.
    Add {
        /// Role to grant (name or ID).
        role: String,
        /// User receiving the role (name or ID).
        #[arg(long)]
        user: String,
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Create a new role.
    Create {
        /// New role name.
        #[arg(value_name = "ROLE_NAME")]
        name: String,
    },
    /// Delete a role.
    Delete {
        /// Role to delete (name or ID).
        role: String,
    },
    /// List roles, or the roles assigned to a user.
    List {
        /// List the roles of this user (name or ID).
        #[arg(long)]
        user: Option<String>,
        /// Filter by project (name or ID).
        #[arg(long, requires = "user", conflicts_with = "domain")]
        project: Option<String>,
        /// Filter by domain (name or ID).
        #[arg(long, requires = "user")]
        domain: Option<String>,
    },
    /// Revoke a role from a user on a project or domain.
    Remove {
        /// Role to revoke (name or ID).
        role: String,
        /// User losing the role (name or ID).
        #[arg(long)]
        user: String,
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Display role details.
    Show {
        /// Role to display (name or ID).
        role: String,
    },
}
