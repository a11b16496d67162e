//! CLI command definitions.

pub mod domains;
pub mod projects;
pub mod roles;
pub mod servers;
pub mod users;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line client for cloud identity and compute APIs.
#[derive(Debug, Parser)]
#[command(name = "osctl")]
#[command(version, about = "Command-line client for cloud identity and compute APIs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection and output options shared by every command.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Identity service endpoint.
    #[arg(long, env = "OS_AUTH_URL", global = true)]
    pub os_auth_url: Option<String>,

    /// Compute service endpoint.
    #[arg(long, env = "OS_COMPUTE_URL", global = true)]
    pub os_compute_url: Option<String>,

    /// Pre-issued authentication token.
    #[arg(long, env = "OS_TOKEN", global = true, hide_env_values = true)]
    pub os_token: Option<String>,

    /// Domain used when listing a user's roles without --project or --domain.
    #[arg(long, env = "OS_DEFAULT_DOMAIN", default_value = "default", global = true)]
    pub os_default_domain: String,

    /// Output format.
    #[arg(long, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log requests and command arguments to stderr.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered table output.
    #[default]
    Table,
    /// Raw JSON output.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User management.
    User(users::UserCommand),
    /// Role management and assignment.
    Role(roles::RoleCommand),
    /// Project (tenant) inspection.
    Project(projects::ProjectCommand),
    /// Domain inspection.
    Domain(domains::DomainCommand),
    /// Compute server inspection.
    Server(servers::ServerCommand),
}
