//! User API operations.

use async_trait::async_trait;
use osctl_core::identity::{CreateUserRequest, UpdateUserRequest, User, UserManager};
use osctl_core::{Collection, Result, ServiceError};
use reqwest::Method;

use super::identity::IDENTITY_VERSION;
use super::IdentityClient;

#[async_trait]
impl Collection<User> for IdentityClient {
    async fn get(&self, id: &str) -> Result<Option<User>> {
        self.http
            .get_optional(&[IDENTITY_VERSION, "users", id], "user")
            .await
            .map_err(ServiceError::from)
    }

    async fn list(&self) -> Result<Vec<User>> {
        self.http
            .get(&[IDENTITY_VERSION, "users"], "users")
            .await
            .map_err(ServiceError::from)
    }
}

#[async_trait]
impl UserManager for IdentityClient {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        self.http
            .send(Method::POST, &[IDENTITY_VERSION, "users"], "user", request)
            .await
            .map_err(ServiceError::from)
    }

    async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<User> {
        self.http
            .send(Method::PATCH, &[IDENTITY_VERSION, "users", id], "user", request)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.http
            .send_empty(Method::DELETE, &[IDENTITY_VERSION, "users", id])
            .await
            .map_err(ServiceError::from)
    }
}
