//! error types for payload-schema

use thiserror::Error;

use crate::{ActionKind, Protocol};

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    // === action errors ===
    #[error("fee attributes must contain at least one fee entry")]
    NoFees,

    #[error("fee recipient cannot be empty")]
    EmptyRecipient,

    #[error("fee basis point cannot be zero")]
    ZeroBasisPoints,

    #[error("fee basis point cannot be higher than {max}; got {got}")]
    BasisPointsTooLarge { got: u32, max: u32 },

    #[error("attributes of type {got} do not match action {kind}")]
    AttributesMismatch { kind: ActionKind, got: ActionKind },

    #[error("no attribute validator registered for {0}")]
    NoAttributeValidator(ActionKind),

    // === forwarding errors ===
    #[error("forwarding protocol {0} is not supported")]
    UnsupportedProtocol(Protocol),

    #[error("{field} must be 32 bytes; got {len}")]
    InvalidLength { field: &'static str, len: usize },

    // === payload errors ===
    #[error("total fees of {total} basis points exceed {max}")]
    FeesExceedTotal { total: u64, max: u32 },

    #[error("unknown action id: {0}")]
    UnknownAction(String),

    #[error("unknown protocol id: {0}")]
    UnknownProtocol(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Malformed(err.to_string())
    }
}
