//! View model - everything the renderer needs, as plain data

use super::action::{list_available_action_kinds, ActionDraft};
use super::app::WizardCore;
use super::form::Form;
use super::forwarding::{list_available_protocols, ForwardingDraft};
use super::types::{CatalogEntry, Screen};

/// Snapshot of one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub title: &'static str,
    pub intro: Vec<String>,
    pub body: Body,
    pub error: Option<String>,
    pub hints: &'static str,
    /// Last known terminal size, (0, 0) until the first resize
    pub size: (u16, u16),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Selection {
        heading: &'static str,
        items: Vec<ItemView>,
        cursor: usize,
    },
    Form {
        fields: Vec<FieldView>,
        cursor_visible: bool,
    },
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub title: String,
    pub description: &'static str,
    pub supported: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub focused: bool,
}

const SELECTION_HINTS: &str = "↑/↓ to move, Enter to select, q or Esc to quit";
const FORM_HINTS: &str = "Tab/Shift+Tab to navigate fields, Enter to submit, Esc to go back, Ctrl+C to quit";

fn items<T>(entries: Vec<CatalogEntry<T>>) -> Vec<ItemView> {
    entries
        .into_iter()
        .map(|entry| ItemView {
            title: entry.title,
            description: entry.description,
            supported: entry.supported,
        })
        .collect()
}

impl ViewModel {
    pub(crate) fn build(core: &WizardCore) -> Self {
        let error = core.last_error().map(str::to_string);
        let size = core.size();

        match core.screen() {
            Screen::ActionSelection { cursor } => {
                let intro = if core.actions().is_empty() {
                    vec![
                        "Welcome! This tool helps you build payloads for cross-chain operations.".to_string(),
                        "To start, select if you want to add an action to the payload.".to_string(),
                        "Actions are optional operations that run before forwarding (e.g. fee payments).".to_string(),
                        "The selected actions run sequentially, so bear that in mind.".to_string(),
                    ]
                } else {
                    let names: Vec<_> = core.actions().iter().map(|a| a.kind().name()).collect();
                    vec![
                        "Add another action or continue to forwarding selection.".to_string(),
                        format!("Current actions: {}", names.join(", ")),
                    ]
                };
                Self {
                    title: "Payload Generator",
                    intro,
                    body: Body::Selection {
                        heading: "Select an action to add:",
                        items: items(list_available_action_kinds()),
                        cursor: *cursor,
                    },
                    error,
                    hints: SELECTION_HINTS,
                    size,
                }
            }

            Screen::ActionInput(draft) => {
                let (title, intro) = match draft {
                    ActionDraft::Fee(_) => (
                        "Configure Fee Action",
                        vec![
                            "Fee actions collect a percentage of the transferred amount.".to_string(),
                            "The recipient receives the specified basis points as a fee.".to_string(),
                        ],
                    ),
                };
                Self {
                    title,
                    intro,
                    body: form_body(draft.form()),
                    error,
                    hints: FORM_HINTS,
                    size,
                }
            }

            Screen::ForwardingSelection { cursor } => Self {
                title: "Select Forwarding Protocol",
                intro: vec![
                    "Now choose how to forward your transaction to the destination chain.".to_string(),
                    "Each protocol supports different chains and tokens.".to_string(),
                ],
                body: Body::Selection {
                    heading: "Select a protocol:",
                    items: items(list_available_protocols()),
                    cursor: *cursor,
                },
                error,
                hints: SELECTION_HINTS,
                size,
            },

            Screen::ForwardingInput(draft) => {
                let (title, intro) = match draft {
                    ForwardingDraft::Cctp(_) => (
                        "Configure CCTP Forwarding",
                        vec![
                            "CCTP enables USDC transfers across chains. Configure the destination details:".to_string(),
                            "• Domain: chain identifier (0=Ethereum, 1=Avalanche, 2=OP, 3=Arbitrum, 6=Base)".to_string(),
                            "• Mint Recipient: address that receives USDC on the destination".to_string(),
                            "• Destination Caller: address allowed to complete the mint (optional)".to_string(),
                            "• Passthrough Payload: additional data to pass through (optional)".to_string(),
                        ],
                    ),
                };
                Self {
                    title,
                    intro,
                    body: form_body(draft.form()),
                    error,
                    hints: FORM_HINTS,
                    size,
                }
            }

            Screen::Done => Self {
                title: "Payload Generator",
                intro: vec![],
                body: Body::Done,
                error,
                hints: "",
                size,
            },
        }
    }
}

fn form_body(form: &Form) -> Body {
    Body::Form {
        fields: form
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| FieldView {
                label: field.label,
                placeholder: field.placeholder,
                value: field.value.clone(),
                focused: i == form.focus(),
            })
            .collect(),
        cursor_visible: form.cursor_visible,
    }
}
