//! Forwarding entries
//!
//! Exactly one forwarding entry closes every payload and describes how the
//! remaining funds reach the destination chain.

use std::fmt;

use crate::{Result, SchemaError};

/// Recognised forwarding protocols
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    Internal,
    Cctp,
    Ibc,
    Hyperlane,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [
        Protocol::Internal,
        Protocol::Cctp,
        Protocol::Ibc,
        Protocol::Hyperlane,
    ];

    /// Canonical identifier used in the encoded payload
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Internal => "PROTOCOL_INTERNAL",
            Protocol::Cctp => "PROTOCOL_CCTP",
            Protocol::Ibc => "PROTOCOL_IBC",
            Protocol::Hyperlane => "PROTOCOL_HYPERLANE",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|protocol| protocol.name() == name)
            .ok_or_else(|| SchemaError::UnknownProtocol(name.to_string()))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Circle CCTP routing details
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CctpAttributes {
    /// CCTP domain of the destination chain (0 = Ethereum, 6 = Base, ...)
    pub destination_domain: u32,
    /// Receiver of the minted funds, left-padded to 32 bytes
    pub mint_recipient: [u8; 32],
    /// Only this address may complete the mint on the destination, if set
    pub destination_caller: Option<[u8; 32]>,
    /// Opaque bytes handed to the destination unchanged
    pub passthrough_payload: Vec<u8>,
}

impl CctpAttributes {
    /// Build from variable-length byte slices, as they appear on the wire.
    /// An empty caller slice means "no caller".
    pub fn from_slices(
        destination_domain: u32,
        mint_recipient: &[u8],
        destination_caller: &[u8],
        passthrough_payload: Vec<u8>,
    ) -> Result<Self> {
        let mint_recipient = to_word("mint recipient", mint_recipient)?;
        let destination_caller = if destination_caller.is_empty() {
            None
        } else {
            Some(to_word("destination caller", destination_caller)?)
        };

        Ok(Self {
            destination_domain,
            mint_recipient,
            destination_caller,
            passthrough_payload,
        })
    }
}

fn to_word(field: &'static str, bytes: &[u8]) -> Result<[u8; 32]> {
    bytes
        .try_into()
        .map_err(|_| SchemaError::InvalidLength {
            field,
            len: bytes.len(),
        })
}

/// Protocol-specific forwarding payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForwardingAttributes {
    Cctp(CctpAttributes),
}

impl ForwardingAttributes {
    pub fn protocol(&self) -> Protocol {
        match self {
            ForwardingAttributes::Cctp(_) => Protocol::Cctp,
        }
    }
}

/// A validated forwarding entry. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forwarding {
    protocol: Protocol,
    attributes: ForwardingAttributes,
}

impl Forwarding {
    pub fn new(protocol: Protocol, attributes: ForwardingAttributes) -> Result<Self> {
        match protocol {
            Protocol::Cctp => {}
            Protocol::Internal | Protocol::Ibc | Protocol::Hyperlane => {
                return Err(SchemaError::UnsupportedProtocol(protocol))
            }
        }
        if attributes.protocol() != protocol {
            return Err(SchemaError::UnsupportedProtocol(attributes.protocol()));
        }

        Ok(Self {
            protocol,
            attributes,
        })
    }

    /// Shorthand for a CCTP forwarding
    pub fn new_cctp(
        destination_domain: u32,
        mint_recipient: [u8; 32],
        destination_caller: Option<[u8; 32]>,
        passthrough_payload: Vec<u8>,
    ) -> Result<Self> {
        Self::new(
            Protocol::Cctp,
            ForwardingAttributes::Cctp(CctpAttributes {
                destination_domain,
                mint_recipient,
                destination_caller,
                passthrough_payload,
            }),
        )
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn attributes(&self) -> &ForwardingAttributes {
        &self.attributes
    }

    /// The CCTP attributes, if this is a CCTP forwarding
    pub fn cctp(&self) -> Option<&CctpAttributes> {
        match &self.attributes {
            ForwardingAttributes::Cctp(attrs) => Some(attrs),
        }
    }
}
