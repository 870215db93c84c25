//! HTTP client for the remote JSON services.
//!
//! This module provides a thin wrapper around `reqwest` that builds request
//! URLs, checks the response status and decodes the body into a model.

use super::error::FetchError;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

/// Makes GET requests against one base URL and tries to conform response
/// data to the requested model.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: HttpClient,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: HttpClient::new(),
        }
    }

    /// Request `path` with query parameters and decode the body as `T`.
    /// Errors name the URL without its query string, which may carry an
    /// API key.
    ///
    /// The body is read as raw bytes before decoding because some services
    /// answer JSON with a `text/html` content type.
    ///
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_owned(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            let message = error_message(&response_text)
                .or_else(|| status.canonical_reason().map(str::to_owned))
                .unwrap_or_else(|| String::from("Unknown error"));
            log::error!(
                "Request to {} failed with status {}: {}",
                url,
                status,
                response_text
            );
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_owned(),
                source: source.without_url(),
            })?;

        serde_json::from_slice::<T>(&response_bytes).map_err(|source| {
            log::error!(
                "Failed to deserialize response from {}: {}. Response body: {}",
                url,
                source,
                String::from_utf8_lossy(&response_bytes)
            );
            FetchError::Parse { url, source }
        })
    }
}

/// Pull a human-readable message out of a JSON error body, if there is one.
///
/// Recognises `{"error": {"message": ..}}` and `{"message": ..}`.
///
fn error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .pointer("/error/message")
        .or_else(|| value.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_owned)
}
