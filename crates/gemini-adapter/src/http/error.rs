/*
[INPUT]:  Error sources (HTTP, exchange error bodies, serialization, arguments)
[OUTPUT]: Structured error types with context and classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Exchange error reasons that mean the request was not authenticated
const AUTH_REASONS: &[&str] = &[
    "InvalidSignature",
    "InvalidApiKey",
    "MissingApikeyHeader",
    "MissingPayloadHeader",
    "MissingSignatureHeader",
    "InvalidNonce",
    "InsufficientPermissions",
    "AccountNotFound",
];

/// Main error type for the Gemini adapter
#[derive(Error, Debug)]
pub enum GeminiError {
    /// Connection, TLS, or timeout failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("Failed to parse response: {source} (body: {body})")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Exchange returned an error body
    #[error("API error (status {status}, reason {reason}): {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// Exchange rejected the key, signature, or nonce
    #[error("Authentication failed ({reason}): {message}")]
    Authentication { reason: String, message: String },

    /// Caller supplied a symbol, side, or order kind we do not recognize
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Request descriptor could not be encoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Requested field is missing from the response
    #[error("Field `{field}` missing from response")]
    MissingField { field: String },

    /// Response parsed but carried a value we cannot use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeminiError {
    /// Check if the error is worth retrying. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiError::Http(err) => err.is_timeout() || err.is_connect(),
            GeminiError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, GeminiError::Http(err) if err.is_timeout())
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GeminiError::Authentication { .. })
    }

    /// Build the error for an exchange error body
    pub fn api_error(
        status: StatusCode,
        reason: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let reason = reason.into();
        let message = message.into();
        if AUTH_REASONS.contains(&reason.as_str()) {
            GeminiError::Authentication { reason, message }
        } else {
            GeminiError::Api {
                status: status.as_u16(),
                reason,
                message,
            }
        }
    }

    pub(crate) fn parse(source: serde_json::Error, body: &[u8]) -> Self {
        const EXCERPT: usize = 256;
        let text = String::from_utf8_lossy(body);
        let body = match text.char_indices().nth(EXCERPT) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.into_owned(),
        };
        GeminiError::Parse { source, body }
    }
}

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;
