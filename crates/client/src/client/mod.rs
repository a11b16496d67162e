//! HTTP clients for the identity and compute APIs.

pub mod compute;
pub mod domains;
pub mod identity;
pub mod manager;
pub mod projects;
pub mod roles;
pub mod users;

pub use compute::ComputeClient;
pub use identity::IdentityClient;
pub use manager::ClientManager;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};

/// Header carrying the pre-issued token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Authenticated JSON transport rooted at one service endpoint.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl HttpClient {
    /// Create a new transport for the given endpoint and token.
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Build a URL by appending percent-encoded path segments to the base URL.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Config(format!("endpoint cannot be a base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        tracing::debug!(method = %method, url = %url, "request");
        self.client
            .request(method, url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// GET a resource wrapped in `{"<key>": ...}`; `None` on 404.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        key: &str,
    ) -> Result<Option<T>> {
        let response = self.request(Method::GET, self.url(segments)?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = self.handle_response(response).await?;
        take_field(body, key).map(Some)
    }

    /// GET a resource or listing wrapped in `{"<key>": ...}`.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str], key: &str) -> Result<T> {
        let response = self.request(Method::GET, self.url(segments)?).send().await?;
        let body: Value = self.handle_response(response).await?;
        take_field(body, key)
    }

    /// Send `{"<key>": body}` and decode the same envelope from the response.
    pub async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        key: &str,
        body: &B,
    ) -> Result<T> {
        let mut envelope = serde_json::Map::new();
        envelope.insert(key.to_string(), serde_json::to_value(body)?);
        let response = self
            .request(method, self.url(segments)?)
            .json(&envelope)
            .send()
            .await?;
        let body: Value = self.handle_response(response).await?;
        take_field(body, key)
    }

    /// Issue a request with no body and expect no response body.
    pub async fn send_empty(&self, method: Method, segments: &[&str]) -> Result<()> {
        let response = self.request(method, self.url(segments)?).send().await?;
        self.handle_empty_response(response).await
    }

    /// Handle error responses.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Handle responses without a body (204 and friends).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let resource = response.url().path().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::debug!(status = status.as_u16(), %body, "error response");
    if status == StatusCode::NOT_FOUND {
        return ClientError::NotFound { resource };
    }
    ClientError::ServerError {
        status: status.as_u16(),
        message: error_message(&body),
    }
}

/// Extracts `error.message` from an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Takes `body[key]` and decodes it.
pub fn take_field<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing '{}' in response", key)))?;
    serde_json::from_value(value).map_err(ClientError::from)
}
