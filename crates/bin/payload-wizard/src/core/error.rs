//! Error taxonomy for the wizard
//!
//! - [`DecodeError`] / [`ValidationError`]: user input, recoverable, shown inline
//! - [`WizardError`]: fatal for the session (unsupported selection, assembly
//!   failure, internal contract violation)

use payload_schema::{ActionKind, Protocol, SchemaError};
use thiserror::Error;

/// Failure to turn an address-like string into 32 bytes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode {encoding}: {reason}")]
    InvalidEncoding {
        encoding: &'static str,
        reason: String,
    },

    #[error("input is too long; max 32 bytes; got: {0}")]
    TooLong(usize),
}

/// Rejected sub-form input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error("invalid {field}: {reason}")]
    NotANumber { field: &'static str, reason: String },

    #[error("fee basis point cannot be zero")]
    Zero,

    #[error("fee basis point cannot be higher than {max}")]
    TooLarge { max: u32 },

    #[error("invalid {field}: {source}")]
    Decode {
        field: &'static str,
        #[source]
        source: DecodeError,
    },

    #[error("rejected by payload schema: {0}")]
    Schema(#[from] SchemaError),
}

/// The payload encoder refused the finalized session data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to build final payload: {0}")]
pub struct AssemblyError(#[from] pub SchemaError);

/// A selection that is listed but has no builder yet
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    #[error("action {0} is not supported yet")]
    Action(ActionKind),

    #[error("forwarding protocol {0} is not supported yet")]
    Protocol(Protocol),
}

/// Errors that end the session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("unsupported selection: {0}")]
    Unsupported(#[from] Unsupported),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("internal error: {0}")]
    Internal(String),
}
