/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Gemini adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner, Nonce, NonceGenerator};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Environment,
    GeminiClient,
    GeminiError,
    PayloadEncoder,
    RequestSigner,
    Result,
    SignedEnvelope,
};

// Re-export all types
pub use types::*;
