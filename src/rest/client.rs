//! Binance futures REST API client implementation.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{Credentials, CredentialsProvider, SystemClock, TimestampProvider, sign_params};
use crate::error::ClientError;
use crate::request::{Params, RequestBuilder};
use crate::rest::endpoints::{API_KEY_HEADER, FUTURES_BASE_URL, FUTURES_TESTNET_URL};
use crate::rest::types::ApiResponse;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The Binance futures REST API client.
///
/// Every call issues exactly one HTTP request and returns the exchange's
/// answer as an [`ApiResponse`]. There is no retry, backoff or rate limiting:
/// network failures surface as errors and non-2xx statuses are returned as
/// data.
///
/// # Example
///
/// ```rust,no_run
/// use binance_futures_client::rest::FuturesRestClient;
/// use binance_futures_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = FuturesRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let response = client.get_balance_information().await?;
///     println!("{}: {}", response.status, response.body);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct FuturesRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    clock: Arc<dyn TimestampProvider>,
}

impl FuturesRestClient {
    /// Create a new testnet client without credentials.
    ///
    /// Use [`FuturesRestClient::builder()`] to configure credentials for signed endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> FuturesRestClientBuilder {
        FuturesRestClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request stamped by this client's clock.
    pub fn request(&self) -> RequestBuilder {
        RequestBuilder::with_clock(self.clock.clone())
    }

    fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref().map(|c| c.get_credentials())
    }

    // HTTP request methods.

    /// Send a GET request; parameters travel in the query string.
    pub async fn get(
        &self,
        endpoint: &str,
        params: Params,
        signed: bool,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, endpoint, params, signed).await
    }

    /// Send a POST request; parameters travel in the form body.
    pub async fn post(
        &self,
        endpoint: &str,
        params: Params,
        signed: bool,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, endpoint, params, signed).await
    }

    /// Send a DELETE request; parameters travel in the form body.
    pub async fn delete(
        &self,
        endpoint: &str,
        params: Params,
        signed: bool,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::DELETE, endpoint, params, signed).await
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        params: Params,
        signed: bool,
    ) -> Result<ApiResponse, ClientError> {
        let credentials = self.credentials();
        let payload = encode_payload(&params, signed, credentials)?;
        let mut url = self.endpoint_url(endpoint)?;

        tracing::debug!(%method, endpoint, signed, "sending futures request");

        let mut request = if method == Method::GET {
            if !payload.is_empty() {
                url.set_query(Some(&payload));
            }
            self.http_client.request(method, url)
        } else {
            self.http_client.request(method, url).body(payload)
        };

        request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        if let Some(creds) = credentials {
            request = request.header(API_KEY_HEADER, &creds.api_key);
        }

        let response = request.send().await?;
        self.parse_response(endpoint, response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ClientError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Decode the response body, keeping the status alongside.
    ///
    /// An empty body decodes as `null`; a body that is not JSON is an error.
    async fn parse_response(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<ApiResponse, ClientError> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        tracing::debug!(endpoint, status, "received futures response");

        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                ClientError::InvalidResponse(format!("HTTP {}: {}. Body: {}", status, e, text))
            })?
        };

        Ok(ApiResponse { status, body })
    }
}

/// Encode the parameters, appending `signature` last for signed requests.
fn encode_payload(
    params: &Params,
    signed: bool,
    credentials: Option<&Credentials>,
) -> Result<String, ClientError> {
    let query = params.to_query_string()?;
    if !signed {
        return Ok(query);
    }

    let credentials = credentials.ok_or(ClientError::MissingCredentials)?;
    let signature = sign_params(params, credentials)?;
    if query.is_empty() {
        Ok(format!("signature={}", signature))
    } else {
        Ok(format!("{}&signature={}", query, signature))
    }
}

impl Default for FuturesRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FuturesRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuturesRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`FuturesRestClient`].
pub struct FuturesRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    clock: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
}

impl FuturesRestClientBuilder {
    /// Create a new builder targeting the testnet.
    pub fn new() -> Self {
        Self {
            base_url: FUTURES_TESTNET_URL.to_string(),
            credentials: None,
            clock: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use the production environment.
    pub fn use_production(mut self) -> Self {
        self.base_url = FUTURES_BASE_URL.to_string();
        self
    }

    /// Use the testnet environment.
    pub fn use_testnet(mut self) -> Self {
        self.base_url = FUTURES_TESTNET_URL.to_string();
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom clock for request timestamps.
    pub fn timestamp_provider(mut self, clock: Arc<dyn TimestampProvider>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> FuturesRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-futures-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-futures-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));

        FuturesRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            clock,
        }
    }
}

impl Default for FuturesRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
