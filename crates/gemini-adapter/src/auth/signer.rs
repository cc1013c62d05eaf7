/*
[INPUT]:  Encoded payload bytes and API secret bytes
[OUTPUT]: Lowercase hex HMAC-SHA384 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or signature encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha384;

use super::Credentials;

type HmacSha384 = Hmac<Sha384>;

/// Compute the hex-encoded HMAC-SHA384 of `payload` keyed by `secret`
pub fn sign(payload: &[u8], secret: &[u8]) -> String {
    let mut mac = HmacSha384::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// HMAC-SHA384 signer bound to one set of credentials
#[derive(Debug, Clone)]
pub struct HmacSigner {
    credentials: Credentials,
}

impl HmacSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign a message and return the lowercase hex digest
    pub fn sign(&self, message: &[u8]) -> String {
        sign(message, self.credentials.api_secret())
    }

    /// Constant-time check of a hex signature against a message
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = HmacSha384::new_from_slice(self.credentials.api_secret())
            .expect("HMAC can take key of any size");
        mac.update(message);
        mac.verify_slice(&expected).is_ok()
    }
}
