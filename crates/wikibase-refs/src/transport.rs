//! The transport boundary.
//!
//! This crate builds request descriptors; something else moves them over
//! the network. Implementations own authentication, retries, and response
//! decoding — none of that leaks into the encoding core.

use thiserror::Error;

/// Failure raised by a transport implementation.
///
/// Opaque to this crate: never caught, wrapped, or retried here.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Dispatches a built request and returns the decoded response.
pub trait Transport {
    /// Sends `action` with the given string-keyed parameters.
    fn send(
        &self,
        action: &'static str,
        params: Vec<(&'static str, String)>,
    ) -> Result<serde_json::Value, TransportError>;
}
