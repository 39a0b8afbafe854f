//! Request-token derivation.
//!
//! The panel authenticates each request with a token derived from the
//! shared API key and the request timestamp:
//!
//! ```text
//! token = md5_hex(unix_seconds + md5_hex(api_key))
//! ```
//!
//! The timestamp and token travel together as the `request_time` and
//! `request_token` form fields, so both must come from the same instant.

use chrono::Utc;

/// Derive the authentication token for a request made at `timestamp`
/// (unix seconds).
///
/// The result is always 32 lowercase hexadecimal characters and is
/// deterministic in `(secret, timestamp)`.
#[must_use]
pub fn request_token(secret: &str, timestamp: i64) -> String {
    let inner = format!("{:x}", md5::compute(secret.as_bytes()));
    // Direct concatenation, no separator.
    let source = format!("{timestamp}{inner}");
    format!("{:x}", md5::compute(source.as_bytes()))
}

/// A timestamp/token pair for one outgoing request.
///
/// Derived fresh for every call and never reused: the token is a function
/// of the timestamp, so a cached pair would go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Unix seconds at which the token was derived.
    pub request_time: i64,
    /// Token derived from the API key and `request_time`.
    pub request_token: String,
}

impl RequestSignature {
    /// Sign with the current wall-clock time.
    #[must_use]
    pub fn now(secret: &str) -> Self {
        Self::at(secret, Utc::now().timestamp())
    }

    /// Sign at an explicit timestamp.
    #[must_use]
    pub fn at(secret: &str, timestamp: i64) -> Self {
        Self {
            request_time: timestamp,
            request_token: request_token(secret, timestamp),
        }
    }
}
