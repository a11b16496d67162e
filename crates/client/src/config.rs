//! Connection settings resolved from the global command-line options.

use url::Url;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::error::{ClientError, Result};

/// Validated connection and output settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identity service endpoint.
    pub auth_url: Option<Url>,
    /// Compute service endpoint.
    pub compute_url: Option<Url>,
    /// Token sent as `X-Auth-Token`.
    pub token: Option<String>,
    /// Domain used as the default role-listing scope.
    pub default_domain: String,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Config {
    /// Builds the configuration, rejecting malformed endpoints.
    ///
    /// Missing endpoints and tokens are accepted here and reported when a
    /// command first needs them.
    pub fn from_options(options: &GlobalOptions) -> Result<Self> {
        Ok(Self {
            auth_url: parse_endpoint("--os-auth-url", options.os_auth_url.as_deref())?,
            compute_url: parse_endpoint("--os-compute-url", options.os_compute_url.as_deref())?,
            token: options.os_token.clone().filter(|t| !t.trim().is_empty()),
            default_domain: options.os_default_domain.clone(),
            format: options.format,
            quiet: options.quiet,
        })
    }

    /// Authentication token, or a configuration error naming the missing option.
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ClientError::Config("token required (--os-token or OS_TOKEN)".into()))
    }
}

fn parse_endpoint(option: &str, value: Option<&str>) -> Result<Option<Url>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => Url::parse(raw)
            .map(Some)
            .map_err(|e| ClientError::Config(format!("invalid {} '{}': {}", option, raw, e))),
    }
}
