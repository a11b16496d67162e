//! Role command handlers.

use osctl_core::identity::{
    AssignmentTarget, CreateRoleRequest, Domain, IdentityApi, Project, Role, RoleAssignment, User,
};
use osctl_core::{find_resource, Formatters};

use super::Context;
use crate::cli::roles::{RoleAction, ScopeArgs};
use crate::error::Result;

/// Columns of `role list`.
pub const LIST_COLUMNS: &[&str] = &["ID", "Name"];

/// Columns of a user's roles on a project.
pub const PROJECT_ASSIGNMENT_COLUMNS: &[&str] = &["ID", "Name", "Project", "User"];

/// Columns of a user's roles on a domain.
pub const DOMAIN_ASSIGNMENT_COLUMNS: &[&str] = &["ID", "Name", "Domain", "User"];

/// Run a role action.
pub async fn handle(action: RoleAction, ctx: &mut Context<'_>) -> Result<()> {
    match action {
        RoleAction::Add { role, user, scope } => {
            tracing::debug!(%role, %user, ?scope, "role add");
            let identity = ctx.services.identity()?;
            let found: Role = find_resource(identity.roles(), &role).await?;
            let target = resolve_scope(identity, &scope).await?;
            let member: User = find_resource(identity.users(), &user).await?;

            identity
                .roles()
                .grant_role(&found.id, &member.id, &target)
                .await?;
            ctx.console.show(&found)
        }
        RoleAction::Create { name } => {
            tracing::debug!(%name, "role create");
            let identity = ctx.services.identity()?;
            let created = identity
                .roles()
                .create_role(&CreateRoleRequest::new(name))
                .await?;
            ctx.console.show(&created)
        }
        RoleAction::Delete { role } => {
            tracing::debug!(%role, "role delete");
            let identity = ctx.services.identity()?;
            let found: Role = find_resource(identity.roles(), &role).await?;
            identity.roles().delete_role(&found.id).await?;
            ctx.console.message(&format!("Deleted role {}", found.id))
        }
        RoleAction::List {
            user,
            project,
            domain,
        } => {
            tracing::debug!(?user, ?project, ?domain, "role list");
            match user {
                Some(user) => list_user_roles(ctx, &user, project, domain).await,
                None => {
                    let roles = ctx.services.identity()?.roles().list().await?;
                    ctx.console.list(&roles, LIST_COLUMNS, &Formatters::new())
                }
            }
        }
        RoleAction::Remove { role, user, scope } => {
            tracing::debug!(%role, %user, ?scope, "role remove");
            let identity = ctx.services.identity()?;
            let found: Role = find_resource(identity.roles(), &role).await?;
            let target = resolve_scope(identity, &scope).await?;
            let member: User = find_resource(identity.users(), &user).await?;

            identity
                .roles()
                .revoke_role(&found.id, &member.id, &target)
                .await?;
            ctx.console.message(&format!(
                "Removed role {} from user {}",
                found.name, member.name
            ))
        }
        RoleAction::Show { role } => {
            tracing::debug!(%role, "role show");
            let identity = ctx.services.identity()?;
            let found: Role = find_resource(identity.roles(), &role).await?;
            ctx.console.show(&found)
        }
    }
}

/// Resolve the `--project` / `--domain` scope of a grant to an assignment target.
async fn resolve_scope(identity: &dyn IdentityApi, scope: &ScopeArgs) -> Result<AssignmentTarget> {
    match (&scope.project, &scope.domain) {
        (Some(token), _) => {
            let project: Project = find_resource(identity.projects(), token).await?;
            Ok(AssignmentTarget::Project(project.id))
        }
        (None, Some(token)) => {
            let domain: Domain = find_resource(identity.domains(), token).await?;
            Ok(AssignmentTarget::Domain(domain.id))
        }
        (None, None) => Err(osctl_core::ServiceError::Validation(
            "Must specify --project or --domain".to_string(),
        )
        .into()),
    }
}

/// List the roles a user holds on a project, a domain, or the default domain.
pub(crate) async fn list_user_roles(
    ctx: &mut Context<'_>,
    user: &str,
    project: Option<String>,
    domain: Option<String>,
) -> Result<()> {
    let identity = ctx.services.identity()?;
    let member: User = find_resource(identity.users(), user).await?;

    if let Some(token) = project {
        let project: Project = find_resource(identity.projects(), &token).await?;
        let roles = identity
            .roles()
            .roles_for_user(&member.id, &AssignmentTarget::Project(project.id.clone()))
            .await?;
        let assignments = RoleAssignment::on_project(roles, &member, &project);
        return ctx
            .console
            .list(&assignments, PROJECT_ASSIGNMENT_COLUMNS, &Formatters::new());
    }

    let token = domain.unwrap_or_else(|| ctx.default_domain.clone());
    let domain: Domain = find_resource(identity.domains(), &token).await?;
    let roles = identity
        .roles()
        .roles_for_user(&member.id, &AssignmentTarget::Domain(domain.id.clone()))
        .await?;
    let assignments = RoleAssignment::on_domain(roles, &member, &domain);
    ctx.console
        .list(&assignments, DOMAIN_ASSIGNMENT_COLUMNS, &Formatters::new())
}
