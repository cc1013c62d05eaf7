/*
[INPUT]:  Wall-clock time in milliseconds
[OUTPUT]: Strictly increasing nonces for signed requests
[POS]:    Auth layer - replay protection for private endpoints
[UPDATE]: When nonce format or uniqueness guarantees change
*/

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Millisecond-based token sent as `nonce` in every private payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(u64);

impl Nonce {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static PROCESS_NONCES: NonceGenerator = NonceGenerator::new();

/// Issues nonces that never repeat within the process.
///
/// The value is the current time in milliseconds unless that would not
/// exceed the last issued nonce, in which case it is `last + 1`.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Generator shared by every client in the process
    pub fn global() -> &'static NonceGenerator {
        &PROCESS_NONCES
    }

    pub fn next(&self) -> Nonce {
        self.next_at(now_millis())
    }

    fn next_at(&self, now_ms: u64) -> Nonce {
        let (Ok(prev) | Err(prev)) =
            self.last
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                    Some(now_ms.max(last.saturating_add(1)))
                });
        Nonce(now_ms.max(prev.saturating_add(1)))
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}
