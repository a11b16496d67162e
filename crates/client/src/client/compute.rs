//! Compute API client.

use async_trait::async_trait;
use osctl_core::compute::{is_server_id, ComputeApi, Server};
use osctl_core::{Collection, Result, ServiceError};
use url::Url;

use super::HttpClient;

/// HTTP client for the compute API.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    http: HttpClient,
}

impl ComputeClient {
    /// Create a new client for the given endpoint and token.
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url, token),
        }
    }

    /// Get the underlying transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

impl ComputeApi for ComputeClient {
    fn servers(&self) -> &dyn Collection<Server> {
        self
    }
}

#[async_trait]
impl Collection<Server> for ComputeClient {
    async fn get(&self, id: &str) -> Result<Option<Server>> {
        self.http
            .get_optional(&["servers", id], "server")
            .await
            .map_err(ServiceError::from)
    }

    async fn list(&self) -> Result<Vec<Server>> {
        self.http
            .get(&["servers", "detail"], "servers")
            .await
            .map_err(ServiceError::from)
    }

    fn accepts_id(&self, token: &str) -> bool {
        is_server_id(token)
    }
}
