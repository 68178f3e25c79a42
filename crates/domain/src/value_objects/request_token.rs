//! Per-endpoint request sequence token

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing sequence number for resolution requests
///
/// A resolved coordinate is applied only if its token is still the latest
/// one issued for the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The next token in sequence
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw sequence number
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
