//! Server command handlers.

use osctl_core::compute::{format_networks, Server};
use osctl_core::{find_resource, Formatter, Formatters};

use super::Context;
use crate::cli::servers::ServerAction;
use crate::error::Result;

/// Columns of `server list`.
pub const LIST_COLUMNS: &[&str] = &["ID", "Name", "Status", "Networks"];

/// Columns of `server list --long`.
pub const LONG_COLUMNS: &[&str] = &["ID", "Name", "Status", "Networks", "Created", "Project Id"];

fn formatters() -> Formatters {
    let mut formatters = Formatters::new();
    formatters.insert("Networks".to_string(), format_networks as Formatter);
    formatters
}

/// Run a server action.
pub async fn handle(action: ServerAction, ctx: &mut Context<'_>) -> Result<()> {
    let compute = ctx.services.compute()?;
    match action {
        ServerAction::List { long } => {
            tracing::debug!(long, "server list");
            let servers = compute.servers().list().await?;
            let columns = if long { LONG_COLUMNS } else { LIST_COLUMNS };
            ctx.console.list(&servers, columns, &formatters())
        }
        ServerAction::Show { server } => {
            tracing::debug!(%server, "server show");
            let found: Server = find_resource(compute.servers(), &server).await?;
            ctx.console.show(&found)
        }
    }
}
