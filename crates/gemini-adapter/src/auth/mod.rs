/*
[INPUT]:  API key, API secret, and the wall clock
[OUTPUT]: Credentials, nonces, and HMAC-SHA384 signatures
[POS]:    Auth layer - primitives behind Gemini private requests
[UPDATE]: When signing algorithm or nonce strategy changes
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::{Nonce, NonceGenerator};
pub use signer::{HmacSigner, sign};
