/*
[INPUT]:  Request descriptors and HMAC signer
[OUTPUT]: Base64 payloads, signed envelopes, and X-GEMINI-* headers
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing payload encoding, signing, or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::auth::{Credentials, HmacSigner};
use crate::http::{GeminiError, Result};
use crate::types::RequestDescriptor;

pub const HEADER_APIKEY: &str = "X-GEMINI-APIKEY";
pub const HEADER_PAYLOAD: &str = "X-GEMINI-PAYLOAD";
pub const HEADER_SIGNATURE: &str = "X-GEMINI-SIGNATURE";

/// Turns a request descriptor into the text carried in `X-GEMINI-PAYLOAD`
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadEncoder;

impl PayloadEncoder {
    /// Serialize to JSON, then standard padded base64
    pub fn encode<T: Serialize>(descriptor: &T) -> Result<String> {
        let json = serde_json::to_string(descriptor)
            .map_err(|err| GeminiError::Encoding(err.to_string()))?;
        Ok(BASE64.encode(json.as_bytes()))
    }

    /// Recover the JSON text from an encoded payload
    pub fn decode(payload: &str) -> Result<String> {
        let bytes = BASE64
            .decode(payload)
            .map_err(|err| GeminiError::Encoding(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| GeminiError::Encoding(err.to_string()))
    }
}

/// Everything a private request carries, derived for a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedEnvelope {
    pub payload: String,
    pub signature: String,
    pub api_key: String,
}

impl SignedEnvelope {
    /// Headers for a private POST. The body is always empty.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        insert(&mut headers, HEADER_APIKEY, &self.api_key)?;
        insert(&mut headers, HEADER_PAYLOAD, &self.payload)?;
        insert(&mut headers, HEADER_SIGNATURE, &self.signature)?;
        Ok(headers)
    }
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|err| GeminiError::Config(format!("invalid header name {name}: {err}")))?;
    let mut value = HeaderValue::from_str(value)
        .map_err(|err| GeminiError::Config(format!("invalid value for {name}: {err}")))?;
    value.set_sensitive(true);
    headers.insert(name, value);
    Ok(())
}

/// Signs request descriptors for authenticated endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    signer: HmacSigner,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            signer: HmacSigner::new(credentials),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        self.signer.credentials()
    }

    /// Encode the descriptor and sign the encoded text
    pub fn sign_request<P: Serialize>(
        &self,
        descriptor: &RequestDescriptor<P>,
    ) -> Result<SignedEnvelope> {
        let payload = PayloadEncoder::encode(descriptor)?;
        let signature = self.signer.sign(payload.as_bytes());
        Ok(SignedEnvelope {
            payload,
            signature,
            api_key: self.signer.api_key().to_string(),
        })
    }
}
