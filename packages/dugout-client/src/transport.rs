//! HTTP transport shared by every gateway.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{ApiError, Result};
use crate::types::Envelope;

/// API origin used when `API_URL` is not set.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Fixed timeout applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings resolved once at startup and shared by all gateways.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Full base path, origin plus the `/api` prefix.
    pub base_url: String,
    /// Bearer token attached to every request, when present.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Build a config from an API origin such as `http://localhost:8000`.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            base_url: format!("{}/api", origin.trim_end_matches('/')),
            auth_token: None,
        }
    }

    /// Read the origin from `API_URL` and the credential from `API_TOKEN`,
    /// falling back to the local default origin.
    pub fn from_env() -> Self {
        let origin =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        let mut config = Self::new(origin);
        config.auth_token = std::env::var("API_TOKEN").ok();
        config
    }

    /// Attach a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// The single configured HTTP client behind every gateway.
///
/// Holds no per-request state; cheap to clone and share across form
/// instances without locking.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: build_http_client(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET `{base_url}{path}`, unwrapping the response envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.get(&url);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "GET request failed");
            ApiError::Network(e)
        })?;
        unwrap_envelope(&url, response).await
    }

    /// POST `body` as JSON to `{base_url}{path}`, unwrapping the response
    /// envelope.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "POST request failed");
            ApiError::Network(e)
        })?;
        unwrap_envelope(&url, response).await
    }
}

// The browser's fetch carries no client-level timeout knob, so the request
// timeout only applies on native targets.
#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("reqwest client")
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

/// Check the status, then pull `data` out of the `{status, data}` envelope
/// every Dugout endpoint responds with.
async fn unwrap_envelope<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = extract_detail(&body);
        warn!(%url, status = %status, %message, "Dugout API error");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.data)
}

/// Pull the server's `{"detail": "..."}` message out of an error body,
/// falling back to the raw text.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
