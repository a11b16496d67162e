//! User CLI commands.

use clap::{Args, Parser, Subcommand};

/// User management commands.
#[derive(Debug, Parser)]
pub struct UserCommand {
    #[command(subcommand)]
    pub action: UserAction,
}

/// Mutually exclusive `--enable` / `--disable` switches.
#[derive(Debug, Clone, Default, Args)]
pub struct EnableFlags {
    /// Enable user.
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,
    /// Disable user.
    #[arg(long)]
    pub disable: bool,
}

impl EnableFlags {
    /// The state the user asked for, if any.
    pub fn requested(&self) -> Option<bool> {
        match (self.enable, self.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// Create a new user.
    Create {
        /// New user name.
        #[arg(value_name = "USER_NAME")]
        name: String,
        /// New user password.
        #[arg(long)]
        password: Option<String>,
        /// New user email address.
        #[arg(long)]
        email: Option<String>,
        /// Default project (name or ID).
        #[arg(long)]
        project: Option<String>,
        /// Owning domain (name or ID).
        #[arg(long)]
        domain: Option<String>,
        /// Description for the new user.
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        state: EnableFlags,
    },
    /// Delete a user.
    Delete {
        /// User to delete (name or ID).
        user: String,
    },
    /// List users, or the roles assigned to one user.
    List {
        /// User to list roles for (name or ID); required with --role.
        user: Option<String>,
        /// List the roles assigned to <USER>.
        #[arg(long)]
        role: bool,
        /// Filter roles by domain (name or ID).
        #[arg(long, requires = "role", conflicts_with = "project")]
        domain: Option<String>,
        /// Filter roles by project (name or ID).
        #[arg(long, requires = "role")]
        project: Option<String>,
        /// Show additional columns.
        #[arg(long)]
        long: bool,
    },
    /// Change user attributes.
    Set {
        /// User to change (name or ID).
        user: String,
        /// New user name.
        #[arg(long)]
        name: Option<String>,
        /// New user password.
        #[arg(long)]
        password: Option<String>,
        /// New user email address.
        #[arg(long)]
        email: Option<String>,
        /// New domain (name or ID).
        #[arg(long)]
        domain: Option<String>,
        /// New default project (name or ID).
        #[arg(long)]
        project: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        state: EnableFlags,
    },
    /// Display user details.
    Show {
        /// User to display (name or ID).
        user: String,
    },
}
