//! Domain API operations.

use async_trait::async_trait;
use osctl_core::identity::Domain;
use osctl_core::{Collection, Result, ServiceError};

use super::identity::IDENTITY_VERSION;
use super::IdentityClient;

#[async_trait]
impl Collection<Domain> for IdentityClient {
    async fn get(&self, id: &str) -> Result<Option<Domain>> {
        self.http
            .get_optional(&[IDENTITY_VERSION, "domains", id], "domain")
            .await
            .map_err(ServiceError::from)
    }

    async fn list(&self) -> Result<Vec<Domain>> {
        self.http
            .get(&[IDENTITY_VERSION, "domains"], "domains")
            .await
            .map_err(ServiceError::from)
    }
}
