//! Typed response shapes returned by the panel API.
//!
//! The two project kinds answer with different JSON shapes. Each operation
//! knows statically which shape to expect, so the shapes are two distinct
//! types rather than one dynamically-shaped structure.

use serde::{Deserialize, Serialize};

/// Response shape for generic ("go") project operations.
///
/// Wire keys: `status`, `status_code`, `error_msg`, `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericProjectResponse {
    /// Whether the operation succeeded.
    pub status: bool,
    /// Panel-defined status code.
    pub status_code: i64,
    /// Human-readable failure message, empty on success.
    #[serde(default)]
    pub error_msg: String,
    /// Human-readable success payload, empty on failure.
    #[serde(default)]
    pub data: String,
}

impl GenericProjectResponse {
    /// The message to show a user: `data` on success, `error_msg` on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.status { &self.data } else { &self.error_msg }
    }
}

/// Response shape for Node.js project operations.
///
/// Wire keys: `code`, `msg`, `status`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeProjectResponse {
    /// Panel-defined status code.
    pub code: i64,
    /// Human-readable message for both success and failure.
    #[serde(default)]
    pub msg: String,
    /// Whether the operation succeeded.
    pub status: bool,
    /// Server-side timestamp of the operation.
    #[serde(default)]
    pub timestamp: i64,
}

impl NodeProjectResponse {
    /// The message to show a user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}
