//! Builds the service clients from the invocation's configuration.

use osctl_core::compute::ComputeApi;
use osctl_core::identity::IdentityApi;

use super::{ComputeClient, IdentityClient};
use crate::commands::Services;
use crate::config::Config;
use crate::error::{ClientError, Result};

/// Holds one client per configured service, sharing the token.
#[derive(Debug, Clone)]
pub struct ClientManager {
    identity: Option<IdentityClient>,
    compute: Option<ComputeClient>,
}

impl ClientManager {
    /// Create clients for every endpoint present in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let token = config.require_token()?;
        let identity = config
            .auth_url
            .clone()
            .map(|url| IdentityClient::new(url, token));
        let compute = config
            .compute_url
            .clone()
            .map(|url| ComputeClient::new(url, token));
        tracing::debug!(
            identity = identity.is_some(),
            compute = compute.is_some(),
            "client manager ready"
        );
        Ok(Self { identity, compute })
    }

    /// Get the concrete identity client, if configured.
    pub fn identity_client(&self) -> Option<&IdentityClient> {
        self.identity.as_ref()
    }

    /// Get the concrete compute client, if configured.
    pub fn compute_client(&self) -> Option<&ComputeClient> {
        self.compute.as_ref()
    }
}

impl Services for ClientManager {
    /// Get the identity client.
    fn identity(&self) -> Result<&dyn IdentityApi> {
        self.identity
            .as_ref()
            .map(|client| client as &dyn IdentityApi)
            .ok_or_else(|| {
                ClientError::Config(
                    "identity endpoint required (--os-auth-url or OS_AUTH_URL)".into(),
                )
            })
    }

    /// Get the compute client.
    fn compute(&self) -> Result<&dyn ComputeApi> {
        self.compute
            .as_ref()
            .map(|client| client as &dyn ComputeApi)
            .ok_or_else(|| {
                ClientError::Config(
                    "compute endpoint required (--os-compute-url or OS_COMPUTE_URL)".into(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalOptions, OutputFormat};

    const AUTH_TOKEN: &str = "foobar";
    const AUTH_URL: &str = "http://0.0.0.0";

    fn config(compute_url: Option<&str>) -> Config {
        Config::from_options(&GlobalOptions {
            os_auth_url: Some(AUTH_URL.to_string()),
            os_compute_url: compute_url.map(str::to_string),
            os_token: Some(AUTH_TOKEN.to_string()),
            os_default_domain: "default".to_string(),
            format: OutputFormat::Table,
            quiet: false,
            debug: false,
        })
        .unwrap()
    }

    #[test]
    fn test_make_compute_client() {
        let manager = ClientManager::new(&config(Some("http://0.0.0.0:8774/v2.1"))).unwrap();

        let compute = manager.compute_client().unwrap();
        assert_eq!(compute.http().token(), AUTH_TOKEN);
        assert_eq!(compute.http().base_url().as_str(), "http://0.0.0.0:8774/v2.1");

        let identity = manager.identity_client().unwrap();
        assert_eq!(identity.http().token(), AUTH_TOKEN);
        assert_eq!(identity.http().base_url().as_str(), "http://0.0.0.0/");
    }

    #[test]
    fn test_compute_requires_endpoint() {
        let manager = ClientManager::new(&config(None)).unwrap();

        assert!(manager.identity().is_ok());
        assert!(matches!(manager.compute(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_token_is_required() {
        let mut config = config(None);
        config.token = None;

        assert!(matches!(
            ClientManager::new(&config),
            Err(ClientError::Config(_))
        ));
    }
}
