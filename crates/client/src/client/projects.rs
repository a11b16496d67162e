//! Project API operations.

use async_trait::async_trait;
use osctl_core::identity::Project;
use osctl_core::{Collection, Result, ServiceError};

use super::identity::IDENTITY_VERSION;
use super::IdentityClient;

#[async_trait]
impl Collection<Project> for IdentityClient {
    async fn get(&self, id: &str) -> Result<Option<Project>> {
        self.http
            .get_optional(&[IDENTITY_VERSION, "projects", id], "project")
            .await
            .map_err(ServiceError::from)
    }

    async fn list(&self) -> Result<Vec<Project>> {
        self.http
            .get(&[IDENTITY_VERSION, "projects"], "projects")
            .await
            .map_err(ServiceError::from)
    }
}
