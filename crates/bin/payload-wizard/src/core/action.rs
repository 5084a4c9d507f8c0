//! Action builder
//!
//! Lists the action catalog, opens a sub-form per kind, and turns a submitted
//! draft into a validated [`Action`].

use payload_schema::{Action, ActionKind, FeeInfo};

use super::error::{Unsupported, ValidationError};
use super::form::{Form, TextField};
use super::types::{ActionChoice, CatalogEntry};
use super::validate::{validate_basis_points, validate_required, validate_u32};

/// Fixed catalog shown on the action selection screen, in display order.
/// The final entry ends action collection.
pub fn list_available_action_kinds() -> Vec<CatalogEntry<ActionChoice>> {
    let mut entries: Vec<_> = ActionKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry {
            item: ActionChoice::Add(kind),
            title: kind.name().to_string(),
            description: describe(kind),
            supported: is_supported(kind),
        })
        .collect();

    entries.push(CatalogEntry {
        item: ActionChoice::NoMoreActions,
        title: "No more actions".to_string(),
        description: "Proceed to forwarding selection",
        supported: true,
    });
    entries
}

fn describe(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Fee => "Add fee payment action",
        ActionKind::Swap => "Add token swap action",
    }
}

fn is_supported(kind: ActionKind) -> bool {
    begin_action_input(kind).is_ok()
}

/// Open the sub-form for `kind`
pub fn begin_action_input(kind: ActionKind) -> Result<ActionDraft, Unsupported> {
    match kind {
        ActionKind::Fee => Ok(ActionDraft::Fee(FeeDraft::new())),
        ActionKind::Swap => Err(Unsupported::Action(kind)),
    }
}

/// Validate a draft and build the action. Stops at the first failing check.
pub fn submit_action_input(draft: &ActionDraft) -> Result<Action, ValidationError> {
    match draft {
        ActionDraft::Fee(fee) => fee.submit(),
    }
}

/// In-progress action sub-form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionDraft {
    Fee(FeeDraft),
}

impl ActionDraft {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionDraft::Fee(_) => ActionKind::Fee,
        }
    }

    pub fn form(&self) -> &Form {
        match self {
            ActionDraft::Fee(fee) => &fee.form,
        }
    }

    pub fn form_mut(&mut self) -> &mut Form {
        match self {
            ActionDraft::Fee(fee) => &mut fee.form,
        }
    }

    pub(crate) fn screen_name(&self) -> &'static str {
        match self {
            ActionDraft::Fee(_) => "fee-input",
        }
    }
}

/// Fee action: one recipient and its share in basis points
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeDraft {
    pub form: Form,
}

impl FeeDraft {
    pub const RECIPIENT: usize = 0;
    pub const BASIS_POINTS: usize = 1;

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                TextField::new("Recipient", "Fee recipient address", 100),
                TextField::new("Basis Points", "Basis points (e.g. 100 for 1%)", 5),
            ]),
        }
    }

    fn submit(&self) -> Result<Action, ValidationError> {
        let recipient = self.form.value(Self::RECIPIENT);
        let basis_points = self.form.value(Self::BASIS_POINTS);

        validate_required(recipient, "recipient address")?;
        validate_required(basis_points, "basis points")?;

        let basis_points = validate_u32(basis_points, "basis points")?;
        validate_basis_points(basis_points)?;

        let action = Action::fee(vec![FeeInfo {
            recipient: recipient.to_string(),
            basis_points,
        }])?;
        Ok(action)
    }
}

impl Default for FeeDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payload_schema::ActionAttributes;

    fn fee_draft(recipient: &str, bps: &str) -> ActionDraft {
        let mut draft = begin_action_input(ActionKind::Fee).unwrap();
        draft.form_mut().set_value(FeeDraft::RECIPIENT, recipient);
        draft.form_mut().set_value(FeeDraft::BASIS_POINTS, bps);
        draft
    }

    #[test]
    fn test_catalog_order() {
        let entries = list_available_action_kinds();
        let items: Vec<_> = entries.iter().map(|e| e.item).collect();
        assert_eq!(
            items,
            vec![
                ActionChoice::Add(ActionKind::Fee),
                ActionChoice::Add(ActionKind::Swap),
                ActionChoice::NoMoreActions,
            ]
        );
        assert!(entries[0].supported);
        assert!(!entries[1].supported);
        assert_eq!(entries[0].title, "ACTION_FEE");
    }

    #[test]
    fn test_swap_is_unsupported() {
        assert_eq!(
            begin_action_input(ActionKind::Swap),
            Err(Unsupported::Action(ActionKind::Swap))
        );
    }

    #[test]
    fn test_fee_submit() {
        let action = submit_action_input(&fee_draft("addr1", "100")).unwrap();
        assert_eq!(action.kind(), ActionKind::Fee);
        let ActionAttributes::Fee(attrs) = action.attributes();
        assert_eq!(attrs.fees_info[0].recipient, "addr1");
        assert_eq!(attrs.fees_info[0].basis_points, 100);
    }

    #[test]
    fn test_required_checks_come_first() {
        // Empty recipient wins over a malformed basis points value
        assert_eq!(
            submit_action_input(&fee_draft("", "abc")),
            Err(ValidationError::Empty {
                field: "recipient address"
            })
        );
        assert_eq!(
            submit_action_input(&fee_draft("addr1", " ")),
            Err(ValidationError::Empty {
                field: "basis points"
            })
        );
    }

    #[test]
    fn test_basis_points_checks() {
        assert!(matches!(
            submit_action_input(&fee_draft("addr1", "1e3")),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(
            submit_action_input(&fee_draft("addr1", "0")),
            Err(ValidationError::Zero)
        );
        assert_eq!(
            submit_action_input(&fee_draft("addr1", "10001")),
            Err(ValidationError::TooLarge { max: 10_000 })
        );
    }

    #[test]
    fn test_new_draft_starts_at_first_field() {
        let draft = begin_action_input(ActionKind::Fee).unwrap();
        assert_eq!(draft.form().focus(), 0);
        assert_eq!(draft.form().fields().len(), 2);
    }
}
