//! Command handlers: resolve names, call the service, render the result.

pub mod domains;
pub mod projects;
pub mod roles;
pub mod servers;
pub mod users;

use osctl_core::compute::ComputeApi;
use osctl_core::identity::IdentityApi;

use crate::cli::Commands;
use crate::config::Config;
use crate::error::Result;
use crate::output::Console;

/// Source of the service clients a command talks to.
pub trait Services: Send + Sync {
    fn identity(&self) -> Result<&dyn IdentityApi>;

    fn compute(&self) -> Result<&dyn ComputeApi>;
}

/// Everything a handler needs for one invocation.
pub struct Context<'a> {
    pub services: &'a dyn Services,
    /// Scope for listing a user's roles when neither project nor domain is given.
    pub default_domain: String,
    pub console: Console,
}

impl<'a> Context<'a> {
    pub fn new(
        services: &'a dyn Services,
        default_domain: impl Into<String>,
        console: Console,
    ) -> Self {
        Self {
            services,
            default_domain: default_domain.into(),
            console,
        }
    }

    /// Context writing to stdout/stderr as configured.
    pub fn from_config(services: &'a dyn Services, config: &Config) -> Self {
        Self::new(
            services,
            config.default_domain.clone(),
            Console::stdio(config.format, config.quiet),
        )
    }
}

/// Dispatch a parsed command to its handler.
pub async fn run(command: Commands, ctx: &mut Context<'_>) -> Result<()> {
    match command {
        Commands::User(cmd) => users::handle(cmd.action, ctx).await,
        Commands::Role(cmd) => roles::handle(cmd.action, ctx).await,
        Commands::Project(cmd) => projects::handle(cmd.action, ctx).await,
        Commands::Domain(cmd) => domains::handle(cmd.action, ctx).await,
        Commands::Server(cmd) => servers::handle(cmd.action, ctx).await,
    }
}
