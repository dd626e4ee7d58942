//! Error types for snak validation and reference encoding.

use thiserror::Error;

use crate::model::SnakType;
use crate::transport::TransportError;

/// A value / snak-type combination that violates the snak invariant.
///
/// `value` snaks must carry a datavalue; `novalue` and `somevalue` snaks
/// must not. These errors are raised before any request descriptor is
/// built, and the caller can recover by correcting the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSnakError {
    #[error("snak type \"{snak_type}\" must not carry a datavalue")]
    UnexpectedValue { snak_type: SnakType },

    #[error("snak type \"value\" requires a datavalue")]
    MissingValue,
}

/// Top-level error for reference encoding and dispatch.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidSnak(#[from] InvalidSnakError),

    #[error("failed to encode the {field} request parameter")]
    Encode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Surfaced unchanged from the transport; never retried here.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
