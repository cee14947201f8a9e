//! HTTP driver for Engine Yard API calls

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use url::Url;

use super::params::Params;
use super::{Reader, Updater};
use crate::error::{Error, Result};

/// Versioned media type pinned in the `Accept` header
pub const MEDIA_TYPE: &str = "application/vnd.engineyard.v3+json";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(
    "maury-rs/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/ess/maury)"
);

/// Header carrying the API token
pub const TOKEN_HEADER: &str = "X-EY-TOKEN";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let char_count = text.chars().count();

    let truncated = if char_count > MAX_LOG_BODY_LENGTH {
        let head: String = text.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        text.into_owned()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Low-level driver that knows how to talk to the Engine Yard API over HTTP
#[derive(Clone)]
pub struct Driver {
    client: Client,
    base_url: Url,
    token: String,
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Driver {
    /// Create a driver for the API at `base_url`, authenticating with `token`
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform a GET against `path`
    pub async fn get(&self, path: &str, params: &Params) -> Result<Vec<u8>> {
        self.make_request(Method::GET, path, params, None).await
    }

    /// Perform a POST of `data` against `path`
    pub async fn post(&self, path: &str, params: &Params, data: Vec<u8>) -> Result<Vec<u8>> {
        self.make_request(Method::POST, path, params, Some(data))
            .await
    }

    /// Perform a PUT of `data` against `path`
    pub async fn put(&self, path: &str, params: &Params, data: Vec<u8>) -> Result<Vec<u8>> {
        self.make_request(Method::PUT, path, params, Some(data))
            .await
    }

    /// Perform a PATCH of `data` against `path`
    pub async fn patch(&self, path: &str, params: &Params, data: Vec<u8>) -> Result<Vec<u8>> {
        self.make_request(Method::PATCH, path, params, Some(data))
            .await
    }

    /// Perform a DELETE against `path`
    pub async fn delete(&self, path: &str, params: &Params) -> Result<Vec<u8>> {
        self.make_request(Method::DELETE, path, params, None).await
    }

    async fn make_request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        data: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = self.request_url(path, params);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(TOKEN_HEADER, self.token.as_str())
            .header(ACCEPT, MEDIA_TYPE)
            .header(CONTENT_TYPE, "application/json");

        if let Some(data) = data {
            request = request.body(data);
        }

        let response = request.send().await?;

        // Drain the body before looking at the status so the connection is
        // released on every path
        let status = response.status();
        let body = response.bytes().await?;

        if status.as_u16() > 299 {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }

    /// Join the base path and `path`, then attach the encoded query
    fn request_url(&self, path: &str, params: &Params) -> Url {
        let mut url = self.base_url.clone();

        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_fragment(None);

        if params.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&params.encode()));
        }

        url
    }
}

impl Reader for Driver {
    async fn get(&self, path: &str, params: &Params) -> Result<Vec<u8>> {
        self.make_request(Method::GET, path, params, None).await
    }
}

impl Updater for Driver {
    async fn put(&self, path: &str, params: &Params, data: Vec<u8>) -> Result<Vec<u8>> {
        self.make_request(Method::PUT, path, params, Some(data))
            .await
    }
}
