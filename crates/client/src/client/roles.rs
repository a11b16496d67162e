//! Role API operations.

use async_trait::async_trait;
use osctl_core::identity::{AssignmentTarget, CreateRoleRequest, Role, RoleManager};
use osctl_core::{Collection, Result, ServiceError};
use reqwest::Method;

use super::identity::IDENTITY_VERSION;
use super::IdentityClient;

#[async_trait]
impl Collection<Role> for IdentityClient {
    async fn get(&self, id: &str) -> Result<Option<Role>> {
        self.http
            .get_optional(&[IDENTITY_VERSION, "roles", id], "role")
            .await
            .map_err(ServiceError::from)
    }

    async fn list(&self) -> Result<Vec<Role>> {
        self.http
            .get(&[IDENTITY_VERSION, "roles"], "roles")
            .await
            .map_err(ServiceError::from)
    }
}

#[async_trait]
impl RoleManager for IdentityClient {
    async fn create_role(&self, request: &CreateRoleRequest) -> Result<Role> {
        self.http
            .send(Method::POST, &[IDENTITY_VERSION, "roles"], "role", request)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_role(&self, id: &str) -> Result<()> {
        self.http
            .send_empty(Method::DELETE, &[IDENTITY_VERSION, "roles", id])
            .await
            .map_err(ServiceError::from)
    }

    async fn grant_role(
        &self,
        role_id: &str,
        user_id: &str,
        target: &AssignmentTarget,
    ) -> Result<()> {
        self.http
            .send_empty(Method::PUT, &assignment_path(target, user_id, Some(role_id)))
            .await
            .map_err(ServiceError::from)
    }

    async fn revoke_role(
        &self,
        role_id: &str,
        user_id: &str,
        target: &AssignmentTarget,
    ) -> Result<()> {
        self.http
            .send_empty(Method::DELETE, &assignment_path(target, user_id, Some(role_id)))
            .await
            .map_err(ServiceError::from)
    }

    async fn roles_for_user(&self, user_id: &str, target: &AssignmentTarget) -> Result<Vec<Role>> {
        self.http
            .get(&assignment_path(target, user_id, None), "roles")
            .await
            .map_err(ServiceError::from)
    }
}

/// `/v3/{projects|domains}/{target}/users/{user}/roles[/{role}]`
fn assignment_path<'a>(
    target: &'a AssignmentTarget,
    user_id: &'a str,
    role_id: Option<&'a str>,
) -> Vec<&'a str> {
    let mut path = vec![
        IDENTITY_VERSION,
        target.collection(),
        target.id(),
        "users",
        user_id,
        "roles",
    ];
    path.extend(role_id);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_path_on_project() {
        let target = AssignmentTarget::Project("8-9-64".to_string());
        assert_eq!(
            assignment_path(&target, "a1", Some("r1")),
            vec!["v3", "projects", "8-9-64", "users", "a1", "roles", "r1"]
        );
    }

    #[test]
    fn test_assignment_listing_path_on_domain() {
        let target = AssignmentTarget::Domain("default".to_string());
        assert_eq!(
            assignment_path(&target, "a1", None),
            vec!["v3", "domains", "default", "users", "a1", "roles"]
        );
    }
}
