//! Shells drive the core from a concrete front end

pub mod tui;

use crate::core::{AssembledPayload, WizardError};

/// How a session ended
#[derive(Debug)]
pub enum Outcome {
    /// Payload built; print it
    Finished(AssembledPayload),
    /// User quit
    Aborted,
    /// Unsupported selection, assembly failure, or internal error
    Failed(WizardError),
}
