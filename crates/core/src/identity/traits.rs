use async_trait::async_trait;

use super::requests::{AssignmentTarget, CreateRoleRequest, CreateUserRequest, UpdateUserRequest};
use super::types::{Domain, Project, Role, User};
use crate::error::Result;
use crate::resource::Collection;

/// User collection plus user mutations.
#[async_trait]
pub trait UserManager: Collection<User> {
    /// Creates a new user.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User>;

    /// Applies the populated fields of `request` to the user.
    async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User>;

    /// Deletes a user by ID.
    async fn delete_user(&self, id: &str) -> Result<()>;
}

/// Role collection plus role mutations and assignments.
#[async_trait]
pub trait RoleManager: Collection<Role> {
    /// Creates a new role.
    async fn create_role(&self, request: &CreateRoleRequest) -> Result<Role>;

    /// Deletes a role by ID.
    async fn delete_role(&self, id: &str) -> Result<()>;

    /// Grants a role to a user on a project or domain.
    async fn grant_role(
        &self,
        role_id: &str,
        user_id: &str,
        target: &AssignmentTarget,
    ) -> Result<()>;

    /// Revokes a role from a user on a project or domain.
    async fn revoke_role(
        &self,
        role_id: &str,
        user_id: &str,
        target: &AssignmentTarget,
    ) -> Result<()>;

    /// Lists the roles a user holds on a project or domain.
    async fn roles_for_user(&self, user_id: &str, target: &AssignmentTarget) -> Result<Vec<Role>>;
}

/// Entry point to every identity collection.
pub trait IdentityApi: Send + Sync {
    fn users(&self) -> &dyn UserManager;

    fn roles(&self) -> &dyn RoleManager;

    fn projects(&self) -> &dyn Collection<Project>;

    fn domains(&self) -> &dyn Collection<Domain>;
}
