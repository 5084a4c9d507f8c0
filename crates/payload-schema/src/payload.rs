//! Canonical payload encoding
//!
//! The payload is JSON wrapped in an `orbiter` envelope. Byte fields are
//! standard base64, absent optional bytes are empty strings, and attribute
//! records carry an `@type` tag naming their message type.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::{
    Action, ActionAttributes, ActionKind, CctpAttributes, FeeAttributes, FeeInfo, Forwarding,
    ForwardingAttributes, Protocol, Result, SchemaError, BPS_NORMALIZER,
};

/// Ordered actions followed by one forwarding entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    actions: Vec<Action>,
    forwarding: Forwarding,
}

impl Payload {
    pub fn new(actions: Vec<Action>, forwarding: Forwarding) -> Self {
        Self {
            actions,
            forwarding,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn forwarding(&self) -> &Forwarding {
        &self.forwarding
    }

    /// Check every entry and the combination of entries
    pub fn validate(&self) -> Result<()> {
        self.actions.iter().try_for_each(Action::validate)?;
        Forwarding::new(self.forwarding.protocol(), self.forwarding.attributes().clone())?;

        let total: u64 = self.actions.iter().map(Action::fee_basis_points).sum();
        if total > u64::from(BPS_NORMALIZER) {
            return Err(SchemaError::FeesExceedTotal {
                total,
                max: BPS_NORMALIZER,
            });
        }
        Ok(())
    }

    /// Validate and encode as a single-line JSON string
    pub fn encode(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    /// Validate and encode as indented JSON
    pub fn encode_pretty(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(&self.to_wire())?)
    }

    /// Parse and validate an encoded payload
    pub fn decode(encoded: &str) -> Result<Self> {
        let wire: WireEnvelope = serde_json::from_str(encoded)?;
        let payload = Self::from_wire(wire.orbiter)?;
        payload.validate()?;
        Ok(payload)
    }

    fn to_wire(&self) -> WireEnvelope {
        let pre_actions = self
            .actions
            .iter()
            .map(|action| WireAction {
                id: action.kind().name().to_string(),
                attributes: match action.attributes() {
                    ActionAttributes::Fee(attrs) => WireActionAttributes::Fee {
                        fees_info: attrs
                            .fees_info
                            .iter()
                            .map(|info| WireFeeInfo {
                                recipient: info.recipient.clone(),
                                basis_points: info.basis_points,
                            })
                            .collect(),
                    },
                },
            })
            .collect();

        let (attributes, passthrough_payload) = match self.forwarding.attributes() {
            ForwardingAttributes::Cctp(attrs) => (
                WireForwardingAttributes::Cctp {
                    destination_domain: attrs.destination_domain,
                    mint_recipient: STANDARD.encode(attrs.mint_recipient),
                    destination_caller: attrs
                        .destination_caller
                        .map(|caller| STANDARD.encode(caller))
                        .unwrap_or_default(),
                },
                STANDARD.encode(&attrs.passthrough_payload),
            ),
        };

        WireEnvelope {
            orbiter: WirePayload {
                pre_actions,
                forwarding: WireForwarding {
                    protocol_id: self.forwarding.protocol().name().to_string(),
                    attributes,
                    passthrough_payload,
                },
            },
        }
    }

    fn from_wire(wire: WirePayload) -> Result<Self> {
        let actions = wire
            .pre_actions
            .into_iter()
            .map(|action| {
                let kind = ActionKind::from_name(&action.id)?;
                let attributes = match action.attributes {
                    WireActionAttributes::Fee { fees_info } => {
                        ActionAttributes::Fee(FeeAttributes {
                            fees_info: fees_info
                                .into_iter()
                                .map(|info| FeeInfo {
                                    recipient: info.recipient,
                                    basis_points: info.basis_points,
                                })
                                .collect(),
                        })
                    }
                };
                Action::new(kind, attributes)
            })
            .collect::<Result<Vec<_>>>()?;

        let protocol = Protocol::from_name(&wire.forwarding.protocol_id)?;
        let passthrough_payload = decode_b64(&wire.forwarding.passthrough_payload)?;
        let attributes = match wire.forwarding.attributes {
            WireForwardingAttributes::Cctp {
                destination_domain,
                mint_recipient,
                destination_caller,
            } => ForwardingAttributes::Cctp(CctpAttributes::from_slices(
                destination_domain,
                &decode_b64(&mint_recipient)?,
                &decode_b64(&destination_caller)?,
                passthrough_payload,
            )?),
        };
        let forwarding = Forwarding::new(protocol, attributes)?;

        Ok(Self::new(actions, forwarding))
    }
}

fn decode_b64(s: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(s)
        .map_err(|e| SchemaError::Malformed(format!("invalid base64: {}", e)))
}

// ===== Wire format =====

#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    orbiter: WirePayload,
}

#[derive(Serialize, Deserialize)]
struct WirePayload {
    pre_actions: Vec<WireAction>,
    forwarding: WireForwarding,
}

#[derive(Serialize, Deserialize)]
struct WireAction {
    id: String,
    attributes: WireActionAttributes,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "@type")]
enum WireActionAttributes {
    #[serde(rename = "/noble.orbiter.controller.action.v1.FeeAttributes")]
    Fee { fees_info: Vec<WireFeeInfo> },
}

#[derive(Serialize, Deserialize)]
struct WireFeeInfo {
    recipient: String,
    basis_points: u32,
}

#[derive(Serialize, Deserialize)]
struct WireForwarding {
    protocol_id: String,
    attributes: WireForwardingAttributes,
    #[serde(default)]
    passthrough_payload: String,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "@type")]
enum WireForwardingAttributes {
    #[serde(rename = "/noble.orbiter.controller.forwarding.v1.CCTPAttributes")]
    Cctp {
        destination_domain: u32,
        mint_recipient: String,
        #[serde(default)]
        destination_caller: String,
    },
}
