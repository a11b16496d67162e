//! Project command handlers.

use osctl_core::identity::Project;
use osctl_core::{find_resource, Formatters};

use super::Context;
use crate::cli::projects::ProjectAction;
use crate::error::Result;

/// Columns of `project list`.
pub const LIST_COLUMNS: &[&str] = &["ID", "Name"];

/// Columns of `project list --long`.
pub const LONG_COLUMNS: &[&str] = &["ID", "Name", "Domain Id", "Description", "Enabled"];

/// Run a project action.
pub async fn handle(action: ProjectAction, ctx: &mut Context<'_>) -> Result<()> {
    let identity = ctx.services.identity()?;
    match action {
        ProjectAction::List { long } => {
            tracing::debug!(long, "project list");
            let projects = identity.projects().list().await?;
            let columns = if long { LONG_COLUMNS } else { LIST_COLUMNS };
            ctx.console.list(&projects, columns, &Formatters::new())
        }
        ProjectAction::Show { project } => {
            tracing::debug!(%project, "project show");
            let found: Project = find_resource(identity.projects(), &project).await?;
            ctx.console.show(&found)
        }
    }
}
