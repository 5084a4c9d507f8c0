//! Core types - pure data structures with no UI dependencies

use payload_schema::{ActionKind, Protocol};

use super::action::ActionDraft;
use super::forwarding::ForwardingDraft;

/// One row of a selection screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry<T> {
    pub item: T,
    pub title: String,
    pub description: &'static str,
    /// Listed but has no builder yet
    pub supported: bool,
}

/// Choices on the action selection screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionChoice {
    Add(ActionKind),
    NoMoreActions,
}

/// Choices on the forwarding selection screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardingChoice {
    Forward(Protocol),
}

/// Which screen the wizard is on, with that screen's local state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    ActionSelection { cursor: usize },
    ActionInput(ActionDraft),
    ForwardingSelection { cursor: usize },
    ForwardingInput(ForwardingDraft),
    /// Session closed; no further mutation
    Done,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::ActionSelection { .. } => "action-selection",
            Screen::ActionInput(draft) => draft.screen_name(),
            Screen::ForwardingSelection { .. } => "forwarding-selection",
            Screen::ForwardingInput(draft) => draft.screen_name(),
            Screen::Done => "done",
        }
    }
}

/// Runtime switches handed to the core
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WizardConfig {
    /// Accept `r` in address fields as "generate a test value"
    pub test_values: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { test_values: true }
    }
}
