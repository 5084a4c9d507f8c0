//! End-to-end wizard sessions driven through the core, as the TUI would

use payload_schema::{ActionKind, Payload, Protocol};
use payload_wizard::core::{Screen, ValidationError};
use payload_wizard::{Effect, Event, WizardConfig, WizardCore, WizardError};

fn type_str(core: &mut WizardCore, s: &str) {
    for c in s.chars() {
        core.update(Event::Input(c));
    }
}

/// From action selection: open the fee form, fill it and submit
fn add_fee(core: &mut WizardCore, recipient: &str, bps: &str) -> Vec<Effect> {
    core.update(Event::Confirm);
    type_str(core, recipient);
    core.update(Event::NextField);
    type_str(core, bps);
    core.update(Event::Confirm)
}

/// From action selection: move to "No more actions" and open the CCTP form
fn open_cctp(core: &mut WizardCore) {
    core.update(Event::Down);
    core.update(Event::Down);
    core.update(Event::Confirm);
    assert_eq!(core.screen(), &Screen::ForwardingSelection { cursor: 0 });
    core.update(Event::Confirm);
    assert!(matches!(core.screen(), Screen::ForwardingInput(_)));
}

fn fill_cctp(core: &mut WizardCore, domain: &str, mint: &str, caller: &str, passthrough: &str) {
    for (i, value) in [domain, mint, caller, passthrough].into_iter().enumerate() {
        if i > 0 {
            core.update(Event::NextField);
        }
        type_str(core, value);
    }
}

fn mint_hex() -> String {
    format!("0x{}", "ab".repeat(32))
}

#[test]
fn fee_actions_keep_insertion_order() {
    let mut core = WizardCore::default();
    add_fee(&mut core, "addr1", "100");
    add_fee(&mut core, "addr2", "250");

    assert_eq!(core.screen(), &Screen::ActionSelection { cursor: 0 });
    let bps: Vec<_> = core.actions().iter().map(|a| a.fee_basis_points()).collect();
    assert_eq!(bps, vec![100, 250]);
    assert!(core.actions().iter().all(|a| a.kind() == ActionKind::Fee));
}

#[test]
fn cctp_submission_finishes_session() {
    let mut core = WizardCore::default();
    open_cctp(&mut core);
    fill_cctp(&mut core, "0", &mint_hex(), "", "");
    let effects = core.update(Event::Confirm);

    assert!(core.is_done());
    let forwarding = core.forwarding().expect("forwarding set");
    assert_eq!(forwarding.protocol(), Protocol::Cctp);
    let cctp = forwarding.cctp().expect("cctp attributes");
    assert_eq!(cctp.destination_domain, 0);
    assert_eq!(cctp.mint_recipient, [0xab; 32]);
    assert_eq!(cctp.destination_caller, None);

    let payload = core.payload().expect("payload built").clone();
    assert_eq!(effects, vec![Effect::Render, Effect::Finish(payload)]);
}

#[test]
fn empty_mint_recipient_is_rejected_inline() {
    let mut core = WizardCore::default();
    open_cctp(&mut core);
    fill_cctp(&mut core, "6", "", "", "");
    let effects = core.update(Event::Confirm);

    assert_eq!(effects, vec![Effect::Render]);
    assert!(!core.is_done());
    assert!(core.forwarding().is_none());
    let expected = ValidationError::Empty {
        field: "mint recipient",
    };
    assert_eq!(core.last_error(), Some(expected.to_string().as_str()));

    // Typed values survive the rejection
    let Screen::ForwardingInput(draft) = core.screen() else {
        panic!("expected cctp input, got {:?}", core.screen());
    };
    assert_eq!(draft.form().value(0), "6");
}

#[test]
fn payload_without_actions_decodes() {
    let mut core = WizardCore::default();
    open_cctp(&mut core);
    fill_cctp(&mut core, "6", &mint_hex(), "", "hello");
    core.update(Event::Confirm);

    let encoded = core.payload().expect("payload built").to_string();
    let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(json["orbiter"]["pre_actions"].as_array().unwrap().len(), 0);
    assert_eq!(json["orbiter"]["forwarding"]["protocol_id"], "PROTOCOL_CCTP");
    assert_eq!(
        json["orbiter"]["forwarding"]["attributes"]["destination_domain"],
        6
    );

    let decoded = Payload::decode(&encoded).unwrap();
    assert!(decoded.actions().is_empty());
    let cctp = decoded.forwarding().cctp().unwrap();
    assert_eq!(cctp.mint_recipient, [0xab; 32]);
    assert_eq!(cctp.passthrough_payload, b"hello".to_vec());
}

#[test]
fn actions_precede_forwarding_in_payload() {
    let mut core = WizardCore::default();
    add_fee(&mut core, "noble1fee", "50");
    open_cctp(&mut core);
    fill_cctp(&mut core, "3", &mint_hex(), &mint_hex(), "");
    core.update(Event::Confirm);

    let decoded = Payload::decode(core.payload().unwrap().as_str()).unwrap();
    assert_eq!(decoded.actions().len(), 1);
    assert_eq!(decoded.actions()[0].fee_basis_points(), 50);
    assert_eq!(
        decoded.forwarding().cctp().unwrap().destination_caller,
        Some([0xab; 32])
    );
}

#[test]
fn test_value_sentinel_respects_config() {
    let mut core = WizardCore::default();
    open_cctp(&mut core);
    fill_cctp(&mut core, "0", "r", "", "");
    core.update(Event::Confirm);
    assert!(core.payload().is_some());

    let mut core = WizardCore::new(WizardConfig { test_values: false });
    open_cctp(&mut core);
    fill_cctp(&mut core, "0", "r", "", "");
    core.update(Event::Confirm);
    assert!(core.payload().is_none());
    assert!(core.last_error().is_some());
}

#[test]
fn fees_over_total_fail_assembly() {
    let mut core = WizardCore::default();
    add_fee(&mut core, "addr1", "6000");
    add_fee(&mut core, "addr2", "5000");
    assert_eq!(core.actions().len(), 2);

    open_cctp(&mut core);
    fill_cctp(&mut core, "0", &mint_hex(), "", "");
    let effects = core.update(Event::Confirm);

    assert!(core.is_done());
    assert!(core.payload().is_none());
    assert!(matches!(
        effects.last(),
        Some(Effect::Fatal(WizardError::Assembly(_)))
    ));
}
