//! Core application logic - the wizard state machine
//!
//! ```text
//! ActionSelection ──kind──▶ <Kind>Input ──ok──┐
//!     ▲    │                     │ err        │
//!     │    │                     └─(stay)     │
//!     └────┼──────────────────────────────────┘
//!          │ no more actions
//!          ▼
//! ForwardingSelection ──protocol──▶ <Protocol>Input ──ok──▶ Done (payload)
//!                                        │ err
//!                                        └─(stay)
//! ```
//!
//! Back from an input screen drops the draft and returns to its selection
//! screen. Quit from any screen goes straight to `Done` without a payload.

use payload_schema::{Action, Forwarding};
use tracing::{debug, error, info, warn};

use super::action::{
    begin_action_input, list_available_action_kinds, submit_action_input, ActionDraft,
};
use super::assemble::{assemble, AssembledPayload};
use super::effect::Effect;
use super::error::WizardError;
use super::event::Event;
use super::forwarding::{
    begin_forwarding_input, list_available_protocols, submit_forwarding_input, ForwardingDraft,
};
use super::form::Form;
use super::types::{ActionChoice, ForwardingChoice, Screen, WizardConfig};
use super::view::ViewModel;

/// Session state, exclusively owned by the event loop
#[derive(Clone, Debug)]
pub struct WizardCore {
    config: WizardConfig,
    screen: Screen,

    // Collected so far
    actions: Vec<Action>,
    forwarding: Option<Forwarding>,
    payload: Option<AssembledPayload>,

    last_error: Option<String>,
    size: (u16, u16),
}

impl Default for WizardCore {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

impl WizardCore {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            screen: Screen::ActionSelection { cursor: 0 },
            actions: Vec::new(),
            forwarding: None,
            payload: None,
            last_error: None,
            size: (0, 0),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Committed actions in execution order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn forwarding(&self) -> Option<&Forwarding> {
        self.forwarding.as_ref()
    }

    pub fn payload(&self) -> Option<&AssembledPayload> {
        self.payload.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn is_done(&self) -> bool {
        self.screen == Screen::Done
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel::build(self)
    }

    /// Process one event and return the effects the shell must run
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        if self.is_done() {
            return vec![];
        }

        match event {
            Event::Quit => {
                info!(screen = self.screen.name(), "session aborted by user");
                self.screen = Screen::Done;
                return vec![Effect::Abort];
            }
            Event::Resize { width, height } => {
                self.size = (width, height);
                return vec![Effect::Render];
            }
            Event::Ignored => return vec![],
            _ => {}
        }

        let before = self.screen.name();
        let screen = std::mem::replace(&mut self.screen, Screen::Done);
        let (next, effects) = match screen {
            Screen::ActionSelection { cursor } => self.on_action_selection(cursor, event),
            Screen::ActionInput(mut draft) => {
                if edit_form(draft.form_mut(), &event) {
                    (Screen::ActionInput(draft), vec![Effect::Render])
                } else if event == Event::Back {
                    info!(kind = %draft.kind(), "action input abandoned");
                    self.last_error = None;
                    (Screen::ActionSelection { cursor: 0 }, vec![Effect::Render])
                } else if event == Event::Confirm {
                    self.commit_action(draft)
                } else {
                    (Screen::ActionInput(draft), vec![])
                }
            }
            Screen::ForwardingSelection { cursor } => {
                self.on_forwarding_selection(cursor, event)
            }
            Screen::ForwardingInput(mut draft) => {
                if edit_form(draft.form_mut(), &event) {
                    (Screen::ForwardingInput(draft), vec![Effect::Render])
                } else if event == Event::Back {
                    info!(protocol = %draft.protocol(), "forwarding input abandoned");
                    self.last_error = None;
                    (Screen::ForwardingSelection { cursor: 0 }, vec![Effect::Render])
                } else if event == Event::Confirm {
                    self.commit_forwarding(draft)
                } else {
                    (Screen::ForwardingInput(draft), vec![])
                }
            }
            Screen::Done => (Screen::Done, vec![]),
        };

        if next.name() != before {
            debug!(from = before, to = next.name(), "screen changed");
        }
        self.screen = next;
        effects
    }

    fn on_action_selection(&mut self, cursor: usize, event: Event) -> (Screen, Vec<Effect>) {
        let entries = list_available_action_kinds();
        let cursor = match move_cursor(cursor, entries.len(), &event) {
            Some(moved) => return (Screen::ActionSelection { cursor: moved }, vec![Effect::Render]),
            None => cursor,
        };

        match event {
            Event::Input('q') | Event::Back => {
                info!("session aborted by user");
                (Screen::Done, vec![Effect::Abort])
            }
            Event::Confirm => {
                let Some(entry) = entries.get(cursor) else {
                    return self.fatal(WizardError::Internal(format!(
                        "action cursor {} out of range",
                        cursor
                    )));
                };

                match entry.item {
                    ActionChoice::NoMoreActions => {
                        info!(actions = self.actions.len(), "action collection finished");
                        self.last_error = None;
                        (Screen::ForwardingSelection { cursor: 0 }, vec![Effect::Render])
                    }
                    ActionChoice::Add(kind) => match begin_action_input(kind) {
                        Ok(draft) => {
                            self.last_error = None;
                            (Screen::ActionInput(draft), vec![Effect::Render])
                        }
                        Err(unsupported) => self.fatal(unsupported.into()),
                    },
                }
            }
            _ => (Screen::ActionSelection { cursor }, vec![]),
        }
    }

    fn on_forwarding_selection(&mut self, cursor: usize, event: Event) -> (Screen, Vec<Effect>) {
        let entries = list_available_protocols();
        let cursor = match move_cursor(cursor, entries.len(), &event) {
            Some(moved) => {
                return (Screen::ForwardingSelection { cursor: moved }, vec![Effect::Render])
            }
            None => cursor,
        };

        match event {
            Event::Input('q') | Event::Back => {
                info!("session aborted by user");
                (Screen::Done, vec![Effect::Abort])
            }
            Event::Confirm => {
                let Some(entry) = entries.get(cursor) else {
                    return self.fatal(WizardError::Internal(format!(
                        "protocol cursor {} out of range",
                        cursor
                    )));
                };

                let ForwardingChoice::Forward(protocol) = entry.item;
                match begin_forwarding_input(protocol) {
                    Ok(draft) => {
                        self.last_error = None;
                        (Screen::ForwardingInput(draft), vec![Effect::Render])
                    }
                    Err(unsupported) => self.fatal(unsupported.into()),
                }
            }
            _ => (Screen::ForwardingSelection { cursor }, vec![]),
        }
    }

    fn commit_action(&mut self, draft: ActionDraft) -> (Screen, Vec<Effect>) {
        match submit_action_input(&draft) {
            Ok(action) => {
                info!(kind = %action.kind(), position = self.actions.len(), "action added");
                self.actions.push(action);
                self.last_error = None;
                (Screen::ActionSelection { cursor: 0 }, vec![Effect::Render])
            }
            Err(e) => {
                warn!(kind = %draft.kind(), error = %e, "action input rejected");
                self.last_error = Some(e.to_string());
                (Screen::ActionInput(draft), vec![Effect::Render])
            }
        }
    }

    fn commit_forwarding(&mut self, draft: ForwardingDraft) -> (Screen, Vec<Effect>) {
        let forwarding = match submit_forwarding_input(&draft, &self.config) {
            Ok(forwarding) => forwarding,
            Err(e) => {
                warn!(protocol = %draft.protocol(), error = %e, "forwarding input rejected");
                self.last_error = Some(e.to_string());
                return (Screen::ForwardingInput(draft), vec![Effect::Render]);
            }
        };

        info!(protocol = %forwarding.protocol(), "forwarding set");
        let assembled = assemble(&self.actions, &forwarding);
        self.forwarding = Some(forwarding);

        match assembled {
            Ok(payload) => {
                info!(actions = self.actions.len(), "payload assembled");
                self.last_error = None;
                self.payload = Some(payload.clone());
                (Screen::Done, vec![Effect::Render, Effect::Finish(payload)])
            }
            Err(e) => self.fatal(e.into()),
        }
    }

    fn fatal(&mut self, err: WizardError) -> (Screen, Vec<Effect>) {
        error!(error = %err, "session terminated");
        self.last_error = Some(err.to_string());
        (Screen::Done, vec![Effect::Render, Effect::Fatal(err)])
    }
}

/// Apply an editing event to a form. Returns false if the event is not an edit.
fn edit_form(form: &mut Form, event: &Event) -> bool {
    match event {
        Event::Up | Event::PrevField => form.focus_prev(),
        Event::Down | Event::NextField => form.focus_next(),
        Event::Input(c) => form.input(*c),
        Event::Backspace => form.backspace(),
        Event::Tick => form.blink(),
        _ => return false,
    }
    true
}

/// New cursor position for navigation events, clamped to `len`
fn move_cursor(cursor: usize, len: usize, event: &Event) -> Option<usize> {
    match event {
        Event::Up | Event::PrevField => Some(cursor.saturating_sub(1)),
        Event::Down | Event::NextField => Some((cursor + 1).min(len.saturating_sub(1))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{Unsupported, ValidationError};
    use payload_schema::{ActionKind, Protocol};

    fn type_str(core: &mut WizardCore, s: &str) {
        for c in s.chars() {
            core.update(Event::Input(c));
        }
    }

    #[test]
    fn test_starts_in_action_selection() {
        let core = WizardCore::default();
        assert_eq!(core.screen(), &Screen::ActionSelection { cursor: 0 });
        assert!(core.actions().is_empty());
        assert!(core.forwarding().is_none());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut core = WizardCore::default();
        core.update(Event::Up);
        assert_eq!(core.screen(), &Screen::ActionSelection { cursor: 0 });
        for _ in 0..10 {
            core.update(Event::Down);
        }
        assert_eq!(core.screen(), &Screen::ActionSelection { cursor: 2 });
    }

    #[test]
    fn test_fee_action_appended() {
        let mut core = WizardCore::default();
        core.update(Event::Confirm);
        assert!(matches!(core.screen(), Screen::ActionInput(_)));

        type_str(&mut core, "addr1");
        core.update(Event::NextField);
        type_str(&mut core, "100");
        let effects = core.update(Event::Confirm);

        assert_eq!(effects, vec![Effect::Render]);
        assert_eq!(core.screen(), &Screen::ActionSelection { cursor: 0 });
        assert_eq!(core.actions().len(), 1);
        assert_eq!(core.actions()[0].kind(), ActionKind::Fee);
    }

    #[test]
    fn test_invalid_fee_keeps_draft() {
        let mut core = WizardCore::default();
        core.update(Event::Confirm);
        type_str(&mut core, "addr1");
        core.update(Event::NextField);
        type_str(&mut core, "0");
        core.update(Event::Confirm);

        assert_eq!(core.last_error(), Some(ValidationError::Zero.to_string().as_str()));
        let Screen::ActionInput(draft) = core.screen() else {
            panic!("expected fee input, got {:?}", core.screen());
        };
        assert_eq!(draft.form().value(0), "addr1");
        assert_eq!(draft.form().focus(), 1);
        assert!(core.actions().is_empty());
    }

    #[test]
    fn test_q_is_text_inside_forms() {
        let mut core = WizardCore::default();
        core.update(Event::Confirm);
        let effects = core.update(Event::Input('q'));
        assert_eq!(effects, vec![Effect::Render]);
        assert!(!core.is_done());
    }

    #[test]
    fn test_quit_from_selection() {
        let mut core = WizardCore::default();
        assert_eq!(core.update(Event::Input('q')), vec![Effect::Abort]);
        assert!(core.is_done());
        assert!(core.payload().is_none());

        // Closed sessions ignore everything
        assert!(core.update(Event::Confirm).is_empty());
    }

    #[test]
    fn test_quit_from_form() {
        let mut core = WizardCore::default();
        core.update(Event::Confirm);
        assert_eq!(core.update(Event::Quit), vec![Effect::Abort]);
        assert!(core.is_done());
    }

    #[test]
    fn test_back_from_fee_input_drops_draft() {
        let mut core = WizardCore::default();
        core.update(Event::Confirm);
        type_str(&mut core, "addr1");
        core.update(Event::NextField);
        type_str(&mut core, "100");
        core.update(Event::Confirm);
        assert_eq!(core.actions().len(), 1);

        // Half-filled second fee, then back out
        core.update(Event::Confirm);
        type_str(&mut core, "addr2");
        core.update(Event::Confirm);
        assert!(core.last_error().is_some());
        assert_eq!(core.update(Event::Back), vec![Effect::Render]);

        assert_eq!(core.screen(), &Screen::ActionSelection { cursor: 0 });
        assert_eq!(core.actions().len(), 1);
        assert_eq!(core.actions()[0].fee_basis_points(), 100);
        assert!(core.last_error().is_none());
        assert!(!core.is_done());

        // A fresh form starts empty
        core.update(Event::Confirm);
        let Screen::ActionInput(draft) = core.screen() else {
            panic!("expected fee input, got {:?}", core.screen());
        };
        assert_eq!(draft.form().value(0), "");
    }

    #[test]
    fn test_back_from_cctp_input_keeps_forwarding_unset() {
        let mut core = WizardCore::default();
        core.update(Event::Down);
        core.update(Event::Down);
        core.update(Event::Confirm);
        core.update(Event::Confirm);
        assert!(matches!(core.screen(), Screen::ForwardingInput(_)));
        type_str(&mut core, "6");

        assert_eq!(core.update(Event::Back), vec![Effect::Render]);
        assert_eq!(core.screen(), &Screen::ForwardingSelection { cursor: 0 });
        assert!(core.forwarding().is_none());
        assert!(core.payload().is_none());
        assert!(core.actions().is_empty());
    }

    #[test]
    fn test_back_on_selection_quits() {
        let mut core = WizardCore::default();
        assert_eq!(core.update(Event::Back), vec![Effect::Abort]);
        assert!(core.is_done());
    }

    #[test]
    fn test_swap_selection_is_fatal() {
        let mut core = WizardCore::default();
        core.update(Event::Down);
        let effects = core.update(Event::Confirm);
        assert_eq!(
            effects.last(),
            Some(&Effect::Fatal(WizardError::Unsupported(Unsupported::Action(
                ActionKind::Swap
            ))))
        );
        assert!(core.is_done());
    }

    #[test]
    fn test_unsupported_protocol_is_fatal() {
        let mut core = WizardCore::default();
        core.update(Event::Down);
        core.update(Event::Down);
        core.update(Event::Confirm);
        assert_eq!(core.screen(), &Screen::ForwardingSelection { cursor: 0 });

        core.update(Event::Down);
        let effects = core.update(Event::Confirm);
        assert_eq!(
            effects.last(),
            Some(&Effect::Fatal(WizardError::Unsupported(Unsupported::Protocol(
                Protocol::Ibc
            ))))
        );
    }

    #[test]
    fn test_tick_blinks_focused_field() {
        let mut core = WizardCore::default();
        assert!(core.update(Event::Tick).is_empty());

        core.update(Event::Confirm);
        core.update(Event::Tick);
        let Screen::ActionInput(draft) = core.screen() else {
            panic!("expected fee input");
        };
        assert!(!draft.form().cursor_visible);
    }

    #[test]
    fn test_resize_recorded() {
        let mut core = WizardCore::default();
        assert_eq!(
            core.update(Event::Resize {
                width: 120,
                height: 40
            }),
            vec![Effect::Render]
        );
        assert_eq!(core.size(), (120, 40));
        assert_eq!(core.view_model().size, (120, 40));
    }
}
