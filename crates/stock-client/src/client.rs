use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP client for the inventory backend.
///
/// Holds the base URL, the request timeout, and (once authenticated) the
/// bearer token attached to every request. Cheap to clone; commands receive
/// it from the application context.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client against `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the underlying TLS/connector setup
    /// fails.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach (or clear) the bearer token used for authenticated calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request with the bearer token attached when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Unauthenticated request (login only).
    pub(crate) fn request_anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|error| ApiError::Decode(error.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::error_for(status, &body))
        }
    }

    /// Send a request where the response body is irrelevant (deletes).
    pub(crate) async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::error_for(status, &body))
        }
    }

    /// Map a non-success status onto the error taxonomy, pulling the
    /// backend's `{"detail": …}` envelope out when present.
    pub(crate) fn error_for(status: StatusCode, body: &str) -> ApiError {
        let detail = extract_detail(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized { detail },
            StatusCode::FORBIDDEN => ApiError::Forbidden { detail },
            StatusCode::NOT_FOUND => ApiError::NotFound { detail },
            _ => {
                tracing::debug!(status = status.as_u16(), %detail, "backend error response");
                ApiError::Api {
                    status: status.as_u16(),
                    detail,
                }
            }
        }
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
