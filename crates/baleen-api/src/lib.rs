//! # baleen-api
//!
//! HTTP client for the Baleen backend API.
//!
//! The admin client reads a single collection from the backend:
//! - `GET /vocabularies`: vocabulary statistics keyed by topic
//!
//! Non-success responses are mapped to operator-facing messages (see
//! [`http::error_for_status`]). [`VocabularySource`] is the seam the fetch
//! store depends on, so it can be driven by something other than HTTP.

pub mod http;
pub mod vocabulary;

mod error;

pub use error::{ApiError, NOT_FOUND_MESSAGE, SERVER_PROBLEM_MESSAGE};
pub use vocabulary::VocabularySource;

use std::time::Duration;

use baleen_config::ApiConfig;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::http::check_response;

/// HTTP client bound to one Baleen backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `endpoint` with the default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the endpoint is not an http(s) URL or the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Self::from_config(&ApiConfig {
            endpoint: endpoint.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if the configuration does not
    /// validate, or [`ApiError::Http`] if the `reqwest::Client` fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|error| ApiError::InvalidEndpoint(error.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.endpoint.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path` with an optional `key=value&...` query string.
    #[must_use]
    pub fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Issue a GET request and check its status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails in transport or the backend
    /// answers with a non-success status.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path, params);
        tracing::debug!(%url, "GET");
        check_response(self.http.get(&url).send().await?).await
    }
}
