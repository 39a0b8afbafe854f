//! API client error types.

use thiserror::Error;

/// Errors produced by the signing client.
///
/// A decoded response with `status = false` is not an error at this layer:
/// the response is returned to the caller, which inspects the flag and the
/// message field.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client configuration (bad base URL, client build failure).
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection, TLS, or timeout failure. Not retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ApiError::Config("bad scheme".into());
        assert_eq!(err.to_string(), "configuration error: bad scheme");
    }

    #[test]
    fn decode_error_from_serde() {
        let serde_err =
            serde_json::from_str::<serde_json::Value>("not json").expect_err("should fail");
        let err = ApiError::from(serde_err);
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("decode error:"));
    }
}
