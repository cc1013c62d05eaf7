/*
[INPUT]:  API key and API secret strings
[OUTPUT]: Immutable credential pair with a redacted Debug impl
[POS]:    Auth layer - credential ownership for a single client
[UPDATE]: When credential sources or redaction rules change
*/

use std::fmt;
use std::sync::Arc;

/// API key and secret used to sign private requests.
///
/// Cloning is cheap; the secret bytes are shared, never copied out.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: Arc<[u8]>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<[u8]>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: Arc::from(api_secret.as_ref()),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Raw secret bytes. Only the signer should touch these.
    pub(crate) fn api_secret(&self) -> &[u8] {
        &self.api_secret
    }

    /// True when either half is missing, which makes private calls impossible
    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() || self.api_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
