//! Identity v3 client.

use osctl_core::identity::{Domain, IdentityApi, Project, RoleManager, UserManager};
use osctl_core::Collection;
use url::Url;

use super::HttpClient;

/// API version prefix of every identity path.
pub(crate) const IDENTITY_VERSION: &str = "v3";

/// HTTP client for the identity API.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    pub(crate) http: HttpClient,
}

impl IdentityClient {
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

impl IdentityApi for IdentityClient {
    fn users(&self) -> &dyn UserManager {
        self
    }

    fn roles(&self) -> &dyn RoleManager {
        self
    }

    fn projects(&self) -> &dyn Collection<Project> {
        self
    }

    fn domains(&self) -> &dyn Collection<Domain> {
        self
    }
}
