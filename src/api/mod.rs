//! HTTP access layer for the marketplace API
//!
//! One [`ApiClient`] carries every endpoint call under a single
//! request/response contract:
//!
//! - privileged calls take a [`Session`] and attach
//!   `Authorization: Token <t>`; public calls take none and attach
//!   nothing;
//! - bodies are JSON except product creation, which is multipart;
//! - any non-2xx status is read as JSON (falling back to text) and
//!   surfaced as [`FarmgateError::Api`] carrying the server `message`
//!   field when present, else [`FALLBACK_ERROR`].
//!
//! There is no retry, no caching, and no request deduplication; each
//! screen refetches independently.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{FarmgateError, Result};
use crate::session::Session;

pub mod auth;
pub mod cart;
pub mod chat;
pub mod farmer;
pub mod orders;
pub mod products;

pub use farmer::{NewProduct, ProductUpdate, ProfileUpdate};

/// Fixed user-facing message for error responses without a usable
/// `message` field.
pub const FALLBACK_ERROR: &str = "Request failed. Please try again.";

/// HTTP client for the marketplace API.
///
/// # Examples
///
/// ```no_run
/// use farmgate::api::ApiClient;
/// use farmgate::config::ApiConfig;
///
/// # async fn example() -> farmgate::error::Result<()> {
/// let api = ApiClient::new(&ApiConfig::default())?;
/// let products = api.list_products().await?;
/// println!("{} products", products.len());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("farmgate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                FarmgateError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::debug!(base_url = %config.base_url, "initialized API client");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL the client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.client.patch(self.url(path))
    }

    /// Attach the token header. The session is required by the caller's
    /// signature, so a request is never built without one.
    pub(crate) fn authorize(builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.header(
            reqwest::header::AUTHORIZATION,
            format!("Token {}", session.token),
        )
    }

    /// Send a request and parse the JSON response body.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        Self::read_json(response).await
    }

    /// Send a request, discarding any success body.
    pub(crate) async fn execute_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, &response.text().await.unwrap_or_default()).into())
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "API request failed");
            return Err(Self::api_error(status, &body).into());
        }
        response.json::<T>().await.map_err(|e| {
            tracing::debug!("Failed to parse API response: {}", e);
            FarmgateError::Http(e).into()
        })
    }

    fn api_error(status: StatusCode, body: &str) -> FarmgateError {
        FarmgateError::Api {
            status: status.as_u16(),
            message: extract_message(body).unwrap_or_else(|| FALLBACK_ERROR.to_string()),
        }
    }
}

/// Pull the `message` field out of an error body.
///
/// The body is read as JSON first; non-JSON bodies and JSON without a
/// string `message` both yield `None`, which callers turn into the
/// fixed fallback.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
