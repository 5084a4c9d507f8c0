//! # payload-schema
//!
//! Record types for cross-chain transfer payloads.
//!
//! A payload is an ordered list of pre-forwarding actions (fee payments, swaps)
//! followed by exactly one forwarding entry that routes the funds to their
//! destination. Every constructor here validates its own attributes, and
//! [`Payload::encode`] validates the combination before producing the
//! canonical string.
//!
//! ```text
//! pre_actions: [ ACTION_FEE, ACTION_FEE, ... ]  (run in order)
//!        │
//!        ▼
//! forwarding:    PROTOCOL_CCTP { domain, mint recipient, caller, payload }
//! ```

pub mod action;
pub mod error;
pub mod forwarding;
pub mod payload;

pub use action::{Action, ActionAttributes, ActionKind, FeeAttributes, FeeInfo, BPS_NORMALIZER};
pub use error::{Result, SchemaError};
pub use forwarding::{CctpAttributes, Forwarding, ForwardingAttributes, Protocol};
pub use payload::Payload;
