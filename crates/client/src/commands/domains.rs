//! Domain command handlers.

use osctl_core::identity::Domain;
use osctl_core::{find_resource, Formatters};

use super::Context;
use crate::cli::domains::DomainAction;
use crate::error::Result;

/// Columns of `domain list`.
pub const LIST_COLUMNS: &[&str] = &["ID", "Name", "Enabled", "Description"];

pub async fn handle(action: DomainAction, ctx: &mut Context<'_>) -> Result<()> {
    let identity = ctx.services.identity()?;
    match action {
        DomainAction::List => {
            tracing::debug!("domain list");
            let domains = identity.domains().list().await?;
            ctx.console.list(&domains, LIST_COLUMNS, &Formatters::new())
        }
        DomainAction::Show { domain } => {
            tracing::debug!(%domain, "domain show");
            let found: Domain = find_resource(identity.domains(), &domain).await?;
            ctx.console.show(&found)
        }
    }
}
