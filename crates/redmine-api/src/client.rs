//! The Redmine HTTP client.
//!
//! Sole path to the remote service: encapsulates authentication, URL
//! construction, the per-request timeout, and error normalization. One
//! client is built at startup and shared for the process lifetime; it is
//! immutable after construction.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::RedmineConfig;
use crate::error::{ApiError, Result};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Redmine's API key header.
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-redmine-api-key");

/// An optional query parameter: the value is dropped from the query
/// string when `None` or empty.
pub type QueryParam<'a> = (&'a str, Option<String>);

/// Async client for the Redmine REST API.
#[derive(Debug, Clone)]
pub struct RedmineClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl RedmineClient {
    /// Create a client for the given configuration.
    ///
    /// The header set is fixed here: JSON content negotiation plus
    /// exactly one of the API key header or a Basic `Authorization`
    /// header, with the API key taking precedence when both are
    /// configured. `timeout_ms` defaults to [`DEFAULT_TIMEOUT_MS`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if a credential is not a valid
    /// header value or the underlying HTTP client cannot be built.
    pub fn new(config: &RedmineConfig, timeout_ms: Option<u64>) -> Result<Self> {
        let timeout_ms = timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        let headers = build_headers(config)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            timeout_ms,
        })
    }

    /// Perform a GET request against an API-relative path.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or an unparseable 2xx body.
    pub async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[QueryParam<'_>],
    ) -> Result<T> {
        let url = self.build_url(path, params)?;
        debug!(%url, "GET");
        self.execute(self.http.get(url)).await
    }

    /// Perform a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`RedmineClient::get`].
    pub async fn post<T: serde::de::DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        debug!(%url, "POST");
        self.execute(self.http.post(url).json(body)).await
    }

    /// Perform a PUT request with a JSON body.
    ///
    /// Redmine answers most PUTs with an empty body; that deserializes
    /// as an empty JSON object rather than failing.
    ///
    /// # Errors
    ///
    /// Same as [`RedmineClient::get`].
    pub async fn put<T: serde::de::DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        debug!(%url, "PUT");
        self.execute(self.http.put(url).json(body)).await
    }

    /// Perform a DELETE request.
    ///
    /// # Errors
    ///
    /// Same as [`RedmineClient::get`].
    pub async fn delete<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path, &[])?;
        debug!(%url, "DELETE");
        self.execute(self.http.delete(url)).await
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL, path and query parameters into a full URL.
    ///
    /// Parameters with `None` or empty-string values are omitted from
    /// the query string entirely, never sent as `key=`.
    fn build_url(&self, path: &str, params: &[QueryParam<'_>]) -> Result<Url> {
        let mut url =
            Url::parse(&format!("{}{path}", self.base_url)).map_err(|e| ApiError::Config {
                message: format!("invalid request URL for path {path}: {e}"),
            })?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if let Some(value) = value {
                    if !value.is_empty() {
                        pairs.append_pair(key, value);
                    }
                }
            }
        }
        // An empty query set still leaves a dangling `?`.
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    /// Send the request and normalize its outcome.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| self.request_error(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.request_error(&e))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Redmine returned an error response");
            return Err(ApiError::Api {
                status: status.as_u16(),
                detail: extract_detail(&text),
            });
        }

        // PUT and DELETE may legitimately return nothing.
        if text.is_empty() {
            return serde_json::from_value(Value::Object(serde_json::Map::new())).map_err(|e| {
                ApiError::InvalidResponse {
                    message: format!("empty response does not fit the expected shape: {e}"),
                }
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse {
            message: e.to_string(),
        })
    }

    /// Map a reqwest failure onto the error taxonomy. Credentials live
    /// in headers and never appear in reqwest's diagnostics.
    fn request_error(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            ApiError::Transport {
                message: error_chain(err),
            }
        }
    }
}

/// Build the fixed header set for a configuration.
fn build_headers(config: &RedmineConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(api_key) = &config.api_key {
        let mut value = HeaderValue::from_str(api_key).map_err(|_| ApiError::Config {
            message: "API key is not a valid header value".to_string(),
        })?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
    } else if let (Some(username), Some(password)) = (&config.username, &config.password) {
        let credentials = BASE64.encode(format!("{username}:{password}"));
        let mut value =
            HeaderValue::from_str(&format!("Basic {credentials}")).map_err(|_| {
                ApiError::Config {
                    message: "basic auth credentials are not a valid header value".to_string(),
                }
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Extract a best-effort error detail from a non-2xx response body.
///
/// A JSON body with an `errors` field wins: a list is joined with
/// `", "`, a single value is stringified. Anything else falls back to
/// the raw body text; an empty body yields no detail.
fn extract_detail(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = value.get("errors") {
            return Some(match errors {
                Value::Array(items) => items
                    .iter()
                    .map(value_to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                other => value_to_string(other),
            });
        }
    }

    Some(body.to_string())
}

/// Render a JSON value as plain text, without quotes around strings.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten an error and its source chain into one message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
