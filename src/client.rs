//! Main HrClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// The client for the HR administration backend.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```no_run
/// use hrdesk::HrClient;
///
/// # fn main() -> Result<(), hrdesk::error::Error> {
/// let client = HrClient::builder()
///     .url("https://hr.example.com")
///     .bearer_token("session-token")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HrClient {
    inner: Arc<HrClientInner>,
}

struct HrClientInner {
    base_url: String,
    http_client: Client,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
}

impl HrClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> HrClientBuilder<Missing> {
        HrClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers
    }

    pub(crate) fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url.trim_end_matches('/'), path)
    }

    /// Makes an HTTP request and maps failure statuses to [`ApiError`].
    ///
    /// No automatic retry: failures surface to the caller, and the user
    /// triggers a refresh.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.build_url(path);

        let mut request = self
            .inner
            .http_client
            .request(method, &url)
            .headers(self.default_headers());

        if let Some(token) = &self.inner.bearer_token {
            request = request.bearer_auth(token);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| match self.inner.timeout {
            Some(timeout) if e.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::from(e),
        })?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let (message, code) = extract_error_detail(&body);
            log::warn!("request to {} failed with HTTP {}", url, status_code);
            Err(Error::Api(ApiError::Http {
                status: status_code,
                message,
                code,
            }))
        }
    }
}

/// Pulls `message` and `code` out of a JSON error body, falling back to the
/// raw text.
fn extract_error_detail(body: &str) -> (String, Option<String>) {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let message = json
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| m.to_string());
        let code = json
            .get("code")
            .and_then(|c| c.as_str())
            .map(|c| c.to_string());
        if let Some(message) = message {
            return (message, code);
        }
    }
    (body.to_string(), None)
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`HrClient`].
///
/// Uses the typestate pattern so `build()` is only available once the
/// required `url` has been set.
pub struct HrClientBuilder<U> {
    url: U,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl HrClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            bearer_token: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the backend base URL.
    pub fn url(self, url: impl Into<String>) -> HrClientBuilder<Set<String>> {
        HrClientBuilder {
            url: Set(url.into()),
            bearer_token: self.bearer_token,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for HrClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> HrClientBuilder<U> {
    /// Sets the bearer token attached to every request.
    ///
    /// Session management itself lives outside this crate; the token is
    /// ambient plumbing.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl HrClientBuilder<Set<String>> {
    /// Builds the [`HrClient`].
    ///
    /// Fails if the URL does not parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<HrClient, Error> {
        let base_url = self.url.0;
        Url::parse(&base_url).map_err(|_| ApiError::InvalidUrl(base_url.clone()))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(HrClient {
            inner: Arc::new(HrClientInner {
                base_url,
                http_client,
                bearer_token: self.bearer_token,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_valid_url() {
        let client = HrClient::builder()
            .url("https://hr.example.com")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://hr.example.com");
    }

    #[test]
    fn test_build_rejects_invalid_url() {
        let result = HrClient::builder().url("not a url").build();
        assert!(matches!(
            result,
            Err(Error::Api(ApiError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let client = HrClient::builder()
            .url("https://hr.example.com/")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url("/api/admin/hr/awards"),
            "https://hr.example.com/api/admin/hr/awards"
        );
    }
}
