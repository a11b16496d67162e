//! User command handlers.

use osctl_core::identity::{CreateUserRequest, Domain, Project, UpdateUserRequest, User};
use osctl_core::{find_resource, Formatters, ServiceError};

use super::roles::list_user_roles;
use super::Context;
use crate::cli::users::UserAction;
use crate::error::Result;

/// Columns of `user list`.
pub const LIST_COLUMNS: &[&str] = &["ID", "Name"];

/// Columns of `user list --long`.
pub const LONG_COLUMNS: &[&str] = &[
    "ID",
    "Name",
    "Project Id",
    "Domain Id",
    "Description",
    "Email",
    "Enabled",
];

/// Run a user action.
pub async fn handle(action: UserAction, ctx: &mut Context<'_>) -> Result<()> {
    match action {
        UserAction::Create {
            name,
            password,
            email,
            project,
            domain,
            description,
            state,
        } => {
            tracing::debug!(
                %name,
                password = password.is_some(),
                ?email,
                ?project,
                ?domain,
                ?description,
                enabled = ?state.requested(),
                "user create"
            );
            let identity = ctx.services.identity()?;

            let project_id = match project {
                Some(token) => {
                    let project: Project = find_resource(identity.projects(), &token).await?;
                    Some(project.id)
                }
                None => None,
            };
            let domain_id = match domain {
                Some(token) => {
                    let domain: Domain = find_resource(identity.domains(), &token).await?;
                    Some(domain.id)
                }
                None => None,
            };

            let request = CreateUserRequest {
                name,
                domain_id,
                project_id,
                password,
                email,
                description,
                enabled: state.requested().unwrap_or(true),
            };
            let user = identity.users().create_user(&request).await?;
            ctx.console.show(&user)
        }
        UserAction::Delete { user } => {
            tracing::debug!(%user, "user delete");
            let identity = ctx.services.identity()?;
            let found: User = find_resource(identity.users(), &user).await?;
            identity.users().delete_user(&found.id).await?;
            ctx.console.message(&format!("Deleted user {}", found.id))
        }
        UserAction::List {
            user,
            role,
            domain,
            project,
            long,
        } => {
            tracing::debug!(?user, role, ?domain, ?project, long, "user list");
            if role {
                let user = user.ok_or_else(|| {
                    ServiceError::Validation("User must be specified with --role".to_string())
                })?;
                return list_user_roles(ctx, &user, project, domain).await;
            }

            let users = ctx.services.identity()?.users().list().await?;
            let columns = if long { LONG_COLUMNS } else { LIST_COLUMNS };
            ctx.console.list(&users, columns, &Formatters::new())
        }
        UserAction::Set {
            user,
            name,
            password,
            email,
            domain,
            project,
            description,
            state,
        } => {
            tracing::debug!(
                %user,
                ?name,
                password = password.is_some(),
                ?email,
                ?domain,
                ?project,
                ?description,
                enabled = ?state.requested(),
                "user set"
            );
            let mut request = UpdateUserRequest {
                name,
                password,
                email,
                description,
                enabled: state.requested(),
                ..Default::default()
            };
            if request.is_empty() && project.is_none() && domain.is_none() {
                return ctx.console.warn("User not updated, no arguments present");
            }

            let identity = ctx.services.identity()?;
            let found: User = find_resource(identity.users(), &user).await?;
            if let Some(token) = project {
                let project: Project = find_resource(identity.projects(), &token).await?;
                request.project_id = Some(project.id);
            }
            if let Some(token) = domain {
                let domain: Domain = find_resource(identity.domains(), &token).await?;
                request.domain_id = Some(domain.id);
            }

            identity.users().update_user(&found.id, &request).await?;
            ctx.console.message(&format!("Updated user {}", found.id))
        }
        UserAction::Show { user } => {
            tracing::debug!(%user, "user show");
            let identity = ctx.services.identity()?;
            let found: User = find_resource(identity.users(), &user).await?;
            ctx.console.show(&found)
        }
    }
}
