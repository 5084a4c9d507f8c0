//! Forwarding builder
//!
//! Lists the protocol catalog, opens a sub-form per protocol, and turns a
//! submitted draft into the session's single [`Forwarding`].

use payload_schema::{Forwarding, Protocol};

use super::codec::{decode_address_like, decode_hex_or_base64, ADDRESS_LEN};
use super::error::{Unsupported, ValidationError};
use super::form::{Form, TextField};
use super::types::{CatalogEntry, ForwardingChoice, WizardConfig};
use super::validate::{validate_required, validate_u32};

/// Display order of the protocol catalog
const CATALOG: [Protocol; 4] = [
    Protocol::Cctp,
    Protocol::Ibc,
    Protocol::Hyperlane,
    Protocol::Internal,
];

pub fn list_available_protocols() -> Vec<CatalogEntry<ForwardingChoice>> {
    CATALOG
        .into_iter()
        .map(|protocol| CatalogEntry {
            item: ForwardingChoice::Forward(protocol),
            title: protocol.name().to_string(),
            description: describe(protocol),
            supported: begin_forwarding_input(protocol).is_ok(),
        })
        .collect()
}

fn describe(protocol: Protocol) -> &'static str {
    match protocol {
        Protocol::Cctp => "Circle's Cross-Chain Transfer Protocol (USDC transfers)",
        Protocol::Ibc => "Inter-Blockchain Communication (Cosmos ecosystem)",
        Protocol::Hyperlane => "Hyperlane interchain protocol",
        Protocol::Internal => "Transfer to an account on the local chain",
    }
}

/// Open the sub-form for `protocol`
pub fn begin_forwarding_input(protocol: Protocol) -> Result<ForwardingDraft, Unsupported> {
    match protocol {
        Protocol::Cctp => Ok(ForwardingDraft::Cctp(CctpDraft::new())),
        Protocol::Ibc | Protocol::Hyperlane | Protocol::Internal => {
            Err(Unsupported::Protocol(protocol))
        }
    }
}

/// Validate a draft and build the forwarding. Nothing is kept on failure.
pub fn submit_forwarding_input(
    draft: &ForwardingDraft,
    config: &WizardConfig,
) -> Result<Forwarding, ValidationError> {
    match draft {
        ForwardingDraft::Cctp(cctp) => cctp.submit(config),
    }
}

/// In-progress forwarding sub-form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForwardingDraft {
    Cctp(CctpDraft),
}

impl ForwardingDraft {
    pub fn protocol(&self) -> Protocol {
        match self {
            ForwardingDraft::Cctp(_) => Protocol::Cctp,
        }
    }

    pub fn form(&self) -> &Form {
        match self {
            ForwardingDraft::Cctp(cctp) => &cctp.form,
        }
    }

    pub fn form_mut(&mut self) -> &mut Form {
        match self {
            ForwardingDraft::Cctp(cctp) => &mut cctp.form,
        }
    }

    pub(crate) fn screen_name(&self) -> &'static str {
        match self {
            ForwardingDraft::Cctp(_) => "cctp-input",
        }
    }
}

/// CCTP sub-form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CctpDraft {
    pub form: Form,
}

impl CctpDraft {
    pub const DOMAIN: usize = 0;
    pub const MINT_RECIPIENT: usize = 1;
    pub const DESTINATION_CALLER: usize = 2;
    pub const PASSTHROUGH_PAYLOAD: usize = 3;

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                TextField::new("Destination Domain", "Destination domain (e.g. 0)", 10),
                TextField::new(
                    "Mint Recipient",
                    "Prefix with '0x' for hex; otherwise base64 is assumed; 'r' for a test value",
                    128,
                ),
                TextField::new(
                    "Destination Caller",
                    "Optional; '0x' hex or base64; 'r' for a test value",
                    128,
                ),
                TextField::new(
                    "Passthrough Payload",
                    "Passthrough payload (can be left empty)",
                    256,
                ),
            ]),
        }
    }

    fn submit(&self, config: &WizardConfig) -> Result<Forwarding, ValidationError> {
        let domain = self.form.value(Self::DOMAIN);
        let mint_recipient = self.form.value(Self::MINT_RECIPIENT);
        let destination_caller = self.form.value(Self::DESTINATION_CALLER);
        let passthrough = self.form.value(Self::PASSTHROUGH_PAYLOAD);

        validate_required(domain, "destination domain")?;
        let domain = validate_u32(domain, "destination domain")?;

        validate_required(mint_recipient, "mint recipient")?;
        let mint_recipient = decode_field(mint_recipient, "mint recipient", config)?;

        let destination_caller = if destination_caller.is_empty() {
            None
        } else {
            Some(decode_field(destination_caller, "destination caller", config)?)
        };

        let passthrough_payload = passthrough.as_bytes().to_vec();

        let forwarding =
            Forwarding::new_cctp(domain, mint_recipient, destination_caller, passthrough_payload)?;
        Ok(forwarding)
    }
}

impl Default for CctpDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_field(
    input: &str,
    field: &'static str,
    config: &WizardConfig,
) -> Result<[u8; ADDRESS_LEN], ValidationError> {
    let decoded = if config.test_values {
        decode_address_like(input)
    } else {
        decode_hex_or_base64(input)
    };
    decoded.map_err(|source| ValidationError::Decode { field, source })
}
