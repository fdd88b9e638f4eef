use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwapOption;
use http::{Method, StatusCode};
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::products::Products;
use crate::api::reports::Reports;
use crate::models::{CommonResponse, Envelope};
use crate::{OzonError, OzonResult};

/// Production endpoint of the Seller API.
pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

const CLIENT_ID_HEADER: &str = "Client-Id";
const API_KEY_HEADER: &str = "Api-Key";

#[cfg(feature = "default-client")]
static OZON_CLIENT: Lazy<ArcSwapOption<OzonClient>> = Lazy::new(|| ArcSwapOption::from(None));

/// Stores `client` as the process-wide default client.
///
/// Calling it again replaces the previous client.
#[cfg(feature = "default-client")]
pub fn initialize(client: OzonClient) {
    OZON_CLIENT.store(Some(Arc::new(client)));
}

/// Returns the process-wide default client set by [`initialize`].
#[cfg(feature = "default-client")]
pub fn instance() -> OzonResult<Arc<OzonClient>> {
    OZON_CLIENT.load_full().ok_or_else(|| {
        OzonError::ConfigurationError("Default client has not been initialized".into())
    })
}

/// Builder for the Ozon client.
///
/// This builder provides a fluent API for creating clients with validation
/// at build time.
#[derive(Default)]
pub struct OzonClientBuilder {
    base_url: Option<String>,
    client_id: Option<String>,
    api_key: Option<SecretString>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl OzonClientBuilder {
    /// Sets the API base URL. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the seller client identifier sent in the `Client-Id` header.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the API key sent in the `Api-Key` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Reads `OZON_CLIENT_ID`, `OZON_API_KEY` and `OZON_BASE_URL` from the
    /// environment. Variables that are not set leave the builder unchanged.
    pub fn from_env(mut self) -> Self {
        if let Ok(client_id) = std::env::var("OZON_CLIENT_ID") {
            self.client_id = Some(client_id);
        }
        if let Ok(api_key) = std::env::var("OZON_API_KEY") {
            self.api_key = Some(SecretString::from(api_key));
        }
        if let Ok(base_url) = std::env::var("OZON_BASE_URL") {
            self.base_url = Some(base_url);
        }
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> OzonResult<OzonClient> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let client_id = self
            .client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| OzonError::ConfigurationError("Client-Id is required".into()))?;

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| OzonError::ConfigurationError("Api-Key is required".into()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
            .map_err(|e| OzonError::ConfigurationError(format!("Invalid base URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(OzonError::ConfigurationError(format!(
                "Invalid base URL: {base_url}"
            )));
        }

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("ozon-seller-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    OzonError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        Ok(OzonClient {
            base_url,
            client_id,
            api_key: Arc::new(api_key),
            request_timeout: None,
            http_client,
        })
    }
}

/// The client for the Ozon Seller API.
///
/// Holds the credentials and the HTTP connection pool. Cloning is cheap and
/// clones share the pool, so a client can be handed to many tasks.
#[derive(Clone)]
pub struct OzonClient {
    base_url: Url,
    client_id: String,
    api_key: Arc<SecretString>,
    request_timeout: Option<Duration>,
    http_client: ReqwestClient,
}

impl fmt::Debug for OzonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OzonClient")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl OzonClient {
    pub fn builder() -> OzonClientBuilder {
        OzonClientBuilder::default()
    }

    /// Returns a clone of this client whose requests fail with a timeout
    /// error once `timeout` has elapsed.
    pub fn with_request_timeout(&self, timeout: Duration) -> OzonClient {
        OzonClient {
            request_timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// Gets the seller client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Gets the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Gets the products API interface.
    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Gets the reports API interface.
    pub fn reports(&self) -> Reports<'_> {
        Reports::new(self)
    }

    fn auth_headers(&self) -> OzonResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CLIENT_ID_HEADER,
            HeaderValue::from_str(&self.client_id)
                .map_err(|e| OzonError::ConfigurationError(format!("Invalid Client-Id: {e}")))?,
        );

        let mut api_key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|e| OzonError::ConfigurationError(format!("Invalid Api-Key: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn endpoint_url(&self, endpoint: &str) -> OzonResult<Url> {
        if !endpoint.starts_with('/') {
            return Err(OzonError::InvalidEndpoint(format!(
                "endpoint must start with '/': {endpoint}"
            )));
        }
        if endpoint.contains(['?', '#']) {
            return Err(OzonError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }
        Ok(self.base_url.join(endpoint)?)
    }

    async fn send<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&T>,
    ) -> OzonResult<(StatusCode, Vec<u8>)>
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        let payload = match body {
            Some(data) => serde_json::to_vec(data)?,
            None => b"{}".to_vec(),
        };

        log::debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .headers(self.auth_headers()?)
            .body(payload);

        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        log::debug!("{} {} -> {}", method, endpoint, status);

        if !status.is_success() {
            let common = CommonResponse::from_body(status.as_u16(), &bytes);
            log::warn!("{} {} failed: {}", method, endpoint, common);
            return Err(OzonError::ApiError(common));
        }

        Ok((status, bytes.to_vec()))
    }

    /// Makes a raw request to the Seller API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers.
    /// Use the typed API methods (like `products()`, `reports()`) when
    /// possible.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (e.g., "/v1/warehouse/list").
    /// * `body` - Optional request body (must implement `Serialize`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is malformed.
    /// - The request fails due to network issues.
    /// - The API returns a non-success status.
    /// - The response body is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use ozon_seller_client::{OzonClient, OzonError};
    /// # use serde_json::{json, Value};
    /// # async fn example() -> Result<(), OzonError> {
    /// let client = OzonClient::builder()
    ///     .client_id("123456")
    ///     .api_key("your-api-key")
    ///     .build()?;
    ///
    /// let warehouses: Value = client
    ///     .raw_request("/v1/warehouse/list", Some(&json!({})))
    ///     .await?;
    ///
    /// println!("Warehouses: {:?}", warehouses);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(&self, endpoint: &str, body: Option<&T>) -> OzonResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let (_, bytes) = self.send(Method::POST, endpoint, body).await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Makes a request and decodes the response into `R`, copying the
    /// envelope into the decoded value.
    pub(crate) async fn request<T, R>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&T>,
    ) -> OzonResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned + Envelope,
    {
        let (status, bytes) = self.send(method, endpoint, body).await?;
        let body: &[u8] = if bytes.is_empty() { b"{}" } else { &bytes };

        let mut response: R = serde_json::from_slice(body)?;
        *response.common_mut() = CommonResponse::from_body(status.as_u16(), body);

        Ok(response)
    }
}
