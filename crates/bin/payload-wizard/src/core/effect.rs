//! Effects - requests from the core to the shell

use super::assemble::AssembledPayload;
use super::error::WizardError;

/// What the shell must do after an update
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Redraw from the current view model
    Render,

    /// Session completed; print the payload after leaving the TUI
    Finish(AssembledPayload),

    /// User quit; exit without output
    Abort,

    /// Session cannot continue
    Fatal(WizardError),
}
