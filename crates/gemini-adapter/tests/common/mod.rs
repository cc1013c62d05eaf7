/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gemini-adapter tests

#![allow(dead_code)]

use gemini_adapter::auth::sign;
use gemini_adapter::http::signature::{HEADER_APIKEY, HEADER_PAYLOAD, HEADER_SIGNATURE};
use gemini_adapter::{ClientConfig, Credentials, GeminiClient, PayloadEncoder};
use serde_json::Value;
use wiremock::{Match, MockServer, Request};

pub const API_KEY: &str = "account-24XDxpgJb4Ke8SkjrGrq";
pub const API_SECRET: &str = "4DvjUAz1UBWTHBPFW5xRhwJrYgj";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test credentials
pub fn mock_client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_config_and_base_url(
        Credentials::new(API_KEY, API_SECRET),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .headers
        .get(name.to_ascii_lowercase().as_str())
        .and_then(|value| value.to_str().ok())
}

/// Matches a correctly signed request whose payload names `endpoint`
pub struct SignedRequest {
    pub endpoint: &'static str,
}

impl Match for SignedRequest {
    fn matches(&self, request: &Request) -> bool {
        decode_signed(request)
            .and_then(|payload| payload.get("request").cloned())
            .is_some_and(|endpoint| endpoint == self.endpoint)
    }
}

/// Payload JSON of a request, or `None` if any header is missing or the
/// signature does not verify
pub fn decode_signed(request: &Request) -> Option<Value> {
    if header(request, HEADER_APIKEY)? != API_KEY {
        return None;
    }
    if header(request, "content-type")? != "text/plain" {
        return None;
    }
    if header(request, "content-length")? != "0" {
        return None;
    }
    let payload = header(request, HEADER_PAYLOAD)?;
    let signature = header(request, HEADER_SIGNATURE)?;
    if signature != sign(payload.as_bytes(), API_SECRET.as_bytes()) {
        return None;
    }
    let json = PayloadEncoder::decode(payload).ok()?;
    serde_json::from_str(&json).ok()
}
