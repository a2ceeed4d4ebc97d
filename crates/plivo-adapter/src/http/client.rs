/*
[INPUT]:  Account credentials and HTTP configuration (base URL, version, timeouts)
[OUTPUT]: Configured reqwest client issuing authenticated REST calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request encoding
*/

use std::time::Duration;

use reqwest::{Client, Method, Url};
use tracing::debug;

use crate::http::{PlivoError, Result};
use crate::types::{ApiResponse, Params};

/// Default Plivo API host
pub const DEFAULT_BASE_URL: &str = "https://api.plivo.com";
/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub version: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Account credentials used for basic auth and signature checks
#[derive(Clone)]
pub struct Credentials {
    pub auth_id: String,
    pub auth_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_id", &self.auth_id)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Plivo REST API
#[derive(Debug, Clone)]
pub struct PlivoClient {
    http_client: Client,
    api_base: String,
    credentials: Credentials,
}

impl PlivoClient {
    /// Create a new client with default configuration
    pub fn new(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::with_config(auth_id, auth_token, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        auth_id: impl Into<String>,
        auth_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let auth_id = auth_id.into();
        let auth_token = auth_token.into();
        if auth_id.is_empty() {
            return Err(PlivoError::MissingCredential { field: "auth_id" });
        }
        if auth_token.is_empty() {
            return Err(PlivoError::MissingCredential { field: "auth_token" });
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let api_base = format!(
            "{}/{}/Account/{}",
            config.base_url.trim_end_matches('/'),
            config.version,
            auth_id
        );
        // Fail at construction rather than on the first call
        Url::parse(&api_base)?;

        Ok(Self {
            http_client,
            api_base,
            credentials: Credentials {
                auth_id,
                auth_token,
            },
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn auth_id(&self) -> &str {
        &self.credentials.auth_id
    }

    /// Account-scoped base path, e.g. `https://api.plivo.com/v1/Account/MAXXX`
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build full URL for an account-relative path
    ///
    /// The path always ends with exactly one `/`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let url = format!("{}{}/", self.api_base, path.trim_end_matches('/'));
        Ok(Url::parse(&url)?)
    }

    /// Issue one authenticated request and decode the JSON body if any
    ///
    /// POST sends `params` as a JSON object, GET and DELETE send them as the
    /// query string. Non-2xx statuses are returned, not raised.
    pub async fn request(&self, method: Method, path: &str, params: Params) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        debug!(method = %method, url = %url, param_count = params.len(), "sending request");

        let builder = self
            .http_client
            .request(method.clone(), url)
            .basic_auth(&self.credentials.auth_id, Some(&self.credentials.auth_token));

        let builder = if method == Method::POST {
            builder.json(&params)
        } else {
            builder.query(&params.to_query_pairs())
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;
        debug!(method = %method, status, body_len = raw.len(), "received response");

        Ok(ApiResponse::from_body(status, &raw))
    }

    pub(crate) async fn get(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.request(Method::GET, path, params).await
    }

    pub(crate) async fn post(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.request(Method::POST, path, params).await
    }

    pub(crate) async fn delete(&self, path: &str, params: Params) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, params).await
    }
}
