//! Payload Wizard - interactive builder for cross-chain transfer payloads
//!
//! Crux-style architecture:
//! - Core: wizard state machine, validation, payload assembly
//! - Shell: terminal UI that feeds events in and runs effects

// Core - platform agnostic
pub mod core;

// Shell implementations
pub mod shell;

// Re-exports for convenience
pub use core::{AssembledPayload, Effect, Event, ViewModel, WizardConfig, WizardCore, WizardError};
