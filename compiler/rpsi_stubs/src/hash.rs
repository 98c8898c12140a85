//! Content hashing for the store and codec checksums.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Hash of a byte or text payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ContentHash(u64);

impl ContentHash {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        ContentHash(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Hash of a source text.
pub fn content_hash(text: &str) -> ContentHash {
    hash_bytes(text.as_bytes())
}

pub(crate) fn hash_bytes(data: &[u8]) -> ContentHash {
    let mut hasher = FxHasher::default();
    data.hash(&mut hasher);
    ContentHash(hasher.finish())
}
