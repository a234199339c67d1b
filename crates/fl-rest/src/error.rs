//! Error types for forcelink-rest.
//!
//! Every operation fails with one of four distinguishable kinds: transport
//! failure, not-found, validation with preserved field-level detail, or a
//! mapping mismatch between the expected and actual response shape. Nothing
//! is caught and suppressed; each operation is all-or-nothing.

use forcelink_client::ErrorKind;

/// Result type alias for sObject operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sObject operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-2xx status without a recognizable structured body, or a network
    /// failure. Never retried here; retry policy lives in the transport.
    #[error("transport error: {0}")]
    Transport(#[source] forcelink_client::Error),

    /// The remote reported the object type or record id as nonexistent (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// 4xx with structured field-level error detail, preserved verbatim.
    #[error("validation failed: {error_code} - {message}")]
    Validation {
        error_code: String,
        message: String,
        fields: Vec<String>,
    },

    /// Response body present but missing required fields or carrying a
    /// malformed date encoding.
    #[error("mapping error: {0}")]
    Mapping(String),
}

impl Error {
    /// Returns true if the remote reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns true for structured field-level validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Returns true for response-shape mismatches.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Error::Mapping(_))
    }
}

impl From<forcelink_client::Error> for Error {
    fn from(err: forcelink_client::Error) -> Self {
        match err.kind {
            ErrorKind::NotFound(resource) => Error::NotFound(resource),
            ErrorKind::Api {
                error_code,
                message,
                fields,
            } => Error::Validation {
                error_code,
                message,
                fields,
            },
            ErrorKind::Json(message) => Error::Mapping(message),
            kind => Error::Transport(forcelink_client::Error {
                kind,
                source: err.source,
            }),
        }
    }
}
