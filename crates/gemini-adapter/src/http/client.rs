/*
[INPUT]:  HTTP configuration (environment, timeouts, credentials)
[OUTPUT]: Configured reqwest client with public and signed request primitives
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::{Credentials, NonceGenerator};
use crate::http::{GeminiError, RequestSigner, Result};
use crate::types::{ApiErrorBody, RequestDescriptor};

/// Base URLs for Gemini API
const PRODUCTION_BASE_URL: &str = "https://api.gemini.com";
const SANDBOX_BASE_URL: &str = "https://api.sandbox.gemini.com";

/// Which Gemini deployment to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout for public GETs
    pub public_timeout: Duration,
    /// Whole-request timeout for signed POSTs
    pub private_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            public_timeout: Duration::from_secs(600),
            private_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("gemini-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for Gemini API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
    nonces: &'static NonceGenerator,
    config: ClientConfig,
}

impl GeminiClient {
    /// Create a client for production, or the sandbox when `sandbox` is set
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl AsRef<[u8]>,
        sandbox: bool,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(api_key, api_secret),
            Environment::from_sandbox(sandbox),
            ClientConfig::default(),
        )
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, environment.base_url())
    }

    /// Create a client against an arbitrary base URL (mock servers, proxies)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: RequestSigner::new(credentials),
            nonces: NonceGenerator::global(),
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        self.signer.credentials()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build full URL for an endpoint path
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Unauthenticated GET, body decoded as JSON
    pub async fn public_get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        debug!(endpoint, "sending public request");

        let builder = self
            .http_client
            .get(url)
            .timeout(self.config.public_timeout);
        self.send_json(builder).await
    }

    /// Signed POST. `params` become top-level fields of the payload next to
    /// `request` and a fresh `nonce`; the HTTP body stays empty.
    pub async fn private_post<P, T>(&self, endpoint: &str, params: P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        if self.credentials().is_empty() {
            return Err(GeminiError::Config(
                "API key and secret are required for private endpoints".to_string(),
            ));
        }

        let url = self.endpoint_url(endpoint)?;
        let descriptor = RequestDescriptor::new(endpoint, self.nonces.next(), params);
        let envelope = self.signer.sign_request(&descriptor)?;
        debug!(endpoint, nonce = %descriptor.nonce, "sending private request");

        let builder = self
            .http_client
            .post(url)
            .headers(envelope.headers()?)
            .timeout(self.config.private_timeout);
        self.send_json(builder).await
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

/// Classify a raw response into a typed value or a typed failure
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if let Ok(error) = serde_json::from_slice::<ApiErrorBody>(body) {
        if error.is_error() {
            warn!(
                status = status.as_u16(),
                reason = %error.reason,
                message = %error.message,
                "exchange returned error"
            );
            return Err(GeminiError::api_error(status, error.reason, error.message));
        }
    }

    if !status.is_success() {
        let message = String::from_utf8_lossy(body).trim().to_string();
        warn!(status = status.as_u16(), "request failed without error body");
        return Err(GeminiError::api_error(
            status,
            status.canonical_reason().unwrap_or("HttpError"),
            message,
        ));
    }

    serde_json::from_slice(body).map_err(|err| GeminiError::parse(err, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::from_sandbox(false).base_url(), "https://api.gemini.com");
        assert_eq!(
            Environment::from_sandbox(true).base_url(),
            "https://api.sandbox.gemini.com"
        );
    }

    #[test]
    fn test_new_selects_sandbox() {
        let client = GeminiClient::new("key", "secret", true).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.sandbox.gemini.com/");

        let client = GeminiClient::new("key", "secret", false).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.gemini.com/");
    }

    #[test]
    fn test_default_timeouts() {
        let config = ClientConfig::default();
        assert_eq!(config.public_timeout, Duration::from_secs(600));
        assert_eq!(config.private_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_decode_success() {
        let symbols: Vec<String> =
            decode_response(StatusCode::OK, br#"["btcusd","ethusd"]"#).unwrap();
        assert_eq!(symbols, vec!["btcusd", "ethusd"]);
    }

    #[test]
    fn test_decode_signature_rejection() {
        let body = br#"{"result":"error","reason":"InvalidSignature","message":"InvalidSignature"}"#;
        let err = decode_response::<Value>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_decode_error_body_with_ok_status() {
        let body = br#"{"result":"error","reason":"InsufficientFunds","message":"Not enough"}"#;
        let err = decode_response::<Value>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, GeminiError::Api { status: 200, .. }));
    }

    #[test]
    fn test_decode_non_json_body() {
        let err = decode_response::<Value>(StatusCode::OK, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, GeminiError::Parse { .. }));
    }

    #[test]
    fn test_decode_http_error_without_body() {
        let err = decode_response::<Value>(StatusCode::BAD_GATEWAY, b"").unwrap_err();
        match err {
            GeminiError::Api { status, reason, .. } => {
                assert_eq!(status, 502);
                assert_eq!(reason, "Bad Gateway");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_private_post_requires_credentials() {
        let client = GeminiClient::new("", "", true).unwrap();
        let err = client
            .private_post::<_, Value>("/v1/balances", crate::types::NoParams {})
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Config(_)));
    }
}
