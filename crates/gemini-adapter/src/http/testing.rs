/*
[INPUT]:  wiremock servers and recorded requests
[OUTPUT]: Clients pointed at mock servers and decoded signed payloads
[POS]:    HTTP layer - shared unit test helpers
[UPDATE]: When signed request format changes
*/

use serde_json::Value;
use wiremock::{MockServer, Request};

use crate::auth::{Credentials, sign};
use crate::http::signature::{HEADER_APIKEY, HEADER_PAYLOAD, HEADER_SIGNATURE};
use crate::http::{ClientConfig, GeminiClient, PayloadEncoder};

pub const TEST_API_KEY: &str = "account-test-key";
pub const TEST_API_SECRET: &str = "account-test-secret";

/// Client pointed at the mock server with the test credentials
pub fn mock_client(server: &MockServer) -> GeminiClient {
    GeminiClient::with_config_and_base_url(
        Credentials::new(TEST_API_KEY, TEST_API_SECRET),
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

/// Payload JSON of a request, or `None` if any header is missing or the
/// signature does not verify
pub fn decode_signed(request: &Request) -> Option<Value> {
    if header(request, HEADER_APIKEY)? != TEST_API_KEY {
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
    if signature != sign(payload.as_bytes(), TEST_API_SECRET.as_bytes()) {
        return None;
    }
    let json = PayloadEncoder::decode(payload).ok()?;
    serde_json::from_str(&json).ok()
}

/// Decode the JSON payload of a signed request, panicking unless every
/// header is present and the signature covers the payload
pub fn signed_payload(request: &Request) -> Value {
    decode_signed(request).expect("request is not a correctly signed Gemini request")
}

/// Payloads of every request the server has seen, in arrival order
pub async fn received_payloads(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == "POST")
        .map(signed_payload)
        .collect()
}
