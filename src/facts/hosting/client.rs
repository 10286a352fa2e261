//! GitHub API client
//!
//! Minimal client issuing authenticated GET requests with a fixed timeout.

use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "    client";
const USER_AGENT: &str = concat!("gh-trending-analyzer/", env!("CARGO_PKG_VERSION"));
const ACCEPT_SCHEMA: &str = "application/vnd.github.v3+json";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
struct RateLimitInfo {
    remaining: usize,
    reset_at: DateTime<Utc>,
}

/// Result of a hosting API call
#[derive(Debug)]
pub enum HostingApiResult<T> {
    /// Request succeeded
    Success(T),

    /// The requested resource was not found (404)
    NotFound,

    /// Request failed: network error, timeout, non-success status, or undecodable body
    Failed(ohno::AppError),
}

/// Hosting API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Client {
    /// Create a new hosting API client with optional authentication token, base URL, and per-request timeout
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_SCHEMA));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Absolute URL for an API path such as `repos/owner/name`
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Make an API call and classify the result
    pub async fn api_call(&self, path: &str, query: &[(&str, String)]) -> HostingApiResult<reqwest::Response> {
        let url = self.url_for(path);
        log::debug!(target: LOG_TARGET, "GET '{url}' {query:?}");

        let resp = match self.client.get(&url).query(query).send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                return HostingApiResult::Failed(app_err!("request to '{url}' timed out after {}s", self.timeout.as_secs_f64()));
            }
            Err(e) => return HostingApiResult::Failed(e.into()),
        };

        if let Some(rate_limit) = extract_rate_limit_from_headers(resp.headers()) {
            log::debug!(
                target: LOG_TARGET,
                "Rate limit for '{url}': remaining={}, reset={}",
                rate_limit.remaining,
                rate_limit.reset_at
            );
        }

        let status = resp.status();
        log::debug!(target: LOG_TARGET, "'{url}' returned {status}");

        if status.is_success() {
            return HostingApiResult::Success(resp);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return HostingApiResult::NotFound;
        }

        HostingApiResult::Failed(app_err!("request to '{url}' failed with HTTP status {status}"))
    }

    /// Make an API call and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> HostingApiResult<T> {
        match self.api_call(path, query).await {
            HostingApiResult::Success(resp) => match resp.json::<T>().await.into_app_err_with(|| format!("decoding response from '{path}'")) {
                Ok(data) => HostingApiResult::Success(data),
                Err(e) => HostingApiResult::Failed(e),
            },
            HostingApiResult::NotFound => HostingApiResult::NotFound,
            HostingApiResult::Failed(e) => HostingApiResult::Failed(e),
        }
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
