//! Payload assembler
//!
//! Hands the finalized actions and forwarding to the payload schema and
//! surfaces anything it rejects.

use std::fmt;

use payload_schema::{Action, Forwarding, Payload};
use tracing::debug;

use super::error::AssemblyError;

/// The encoded output of a completed session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledPayload {
    payload: Payload,
    encoded: String,
}

impl AssembledPayload {
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Canonical single-line encoding
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Indented rendering of the same payload
    pub fn to_pretty(&self) -> Result<String, AssemblyError> {
        Ok(self.payload.encode_pretty()?)
    }
}

impl fmt::Display for AssembledPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Combine actions (in execution order) and the forwarding into one payload
pub fn assemble(
    actions: &[Action],
    forwarding: &Forwarding,
) -> Result<AssembledPayload, AssemblyError> {
    let payload = Payload::new(actions.to_vec(), forwarding.clone());
    let encoded = payload.encode()?;
    debug!(
        actions = actions.len(),
        protocol = %forwarding.protocol(),
        bytes = encoded.len(),
        "assembled payload"
    );

    Ok(AssembledPayload { payload, encoded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use payload_schema::{ActionKind, FeeInfo, SchemaError};

    fn fee(recipient: &str, bps: u32) -> Action {
        Action::fee(vec![FeeInfo {
            recipient: recipient.to_string(),
            basis_points: bps,
        }])
        .unwrap()
    }

    fn forwarding() -> Forwarding {
        Forwarding::new_cctp(0, [3u8; 32], None, vec![]).unwrap()
    }

    #[test]
    fn test_preserves_action_order() {
        let actions = vec![fee("first", 10), fee("second", 20), fee("third", 30)];
        let assembled = assemble(&actions, &forwarding()).unwrap();

        let decoded = Payload::decode(assembled.as_str()).unwrap();
        assert_eq!(decoded.actions(), &actions[..]);
        assert!(decoded.actions().iter().all(|a| a.kind() == ActionKind::Fee));
    }

    #[test]
    fn test_rejected_combination_is_reported() {
        let actions = vec![fee("a", 9_000), fee("b", 2_000)];
        assert_eq!(
            assemble(&actions, &forwarding()),
            Err(AssemblyError(SchemaError::FeesExceedTotal {
                total: 11_000,
                max: 10_000
            }))
        );
    }

    #[test]
    fn test_pretty_matches_compact() {
        let assembled = assemble(&[], &forwarding()).unwrap();
        let pretty = assembled.to_pretty().unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(Payload::decode(&pretty).unwrap(), *assembled.payload());
        assert_eq!(assembled.to_string(), assembled.as_str());
    }
}
