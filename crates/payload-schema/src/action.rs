//! Pre-forwarding actions
//!
//! Actions run sequentially before the forwarding step, in the order they
//! appear in the payload.

use std::fmt;

use crate::{Result, SchemaError};

/// Basis points that make up 100%.
pub const BPS_NORMALIZER: u32 = 10_000;

/// Recognised action kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fee,
    Swap,
}

impl ActionKind {
    pub const ALL: [ActionKind; 2] = [ActionKind::Fee, ActionKind::Swap];

    /// Canonical identifier used in the encoded payload
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Fee => "ACTION_FEE",
            ActionKind::Swap => "ACTION_SWAP",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SchemaError::UnknownAction(name.to_string()))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single fee payment taken from the transferred amount
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeInfo {
    pub recipient: String,
    pub basis_points: u32,
}

impl FeeInfo {
    pub fn validate(&self) -> Result<()> {
        if self.recipient.trim().is_empty() {
            return Err(SchemaError::EmptyRecipient);
        }
        if self.basis_points == 0 {
            return Err(SchemaError::ZeroBasisPoints);
        }
        if self.basis_points > BPS_NORMALIZER {
            return Err(SchemaError::BasisPointsTooLarge {
                got: self.basis_points,
                max: BPS_NORMALIZER,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeAttributes {
    pub fees_info: Vec<FeeInfo>,
}

impl FeeAttributes {
    pub fn validate(&self) -> Result<()> {
        if self.fees_info.is_empty() {
            return Err(SchemaError::NoFees);
        }
        self.fees_info.iter().try_for_each(FeeInfo::validate)
    }

    /// Sum of all fee entries, widened so it cannot overflow
    pub fn total_basis_points(&self) -> u64 {
        self.fees_info
            .iter()
            .map(|info| u64::from(info.basis_points))
            .sum()
    }
}

/// Kind-specific action payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionAttributes {
    Fee(FeeAttributes),
}

impl ActionAttributes {
    /// The action kind these attributes belong to
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionAttributes::Fee(_) => ActionKind::Fee,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            ActionAttributes::Fee(attrs) => attrs.validate(),
        }
    }
}

/// A validated action. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    attributes: ActionAttributes,
}

impl Action {
    /// Construct an action, checking that `attributes` belong to `kind` and
    /// pass that kind's validator.
    pub fn new(kind: ActionKind, attributes: ActionAttributes) -> Result<Self> {
        match kind {
            ActionKind::Fee => {}
            ActionKind::Swap => return Err(SchemaError::NoAttributeValidator(kind)),
        }

        let got = attributes.kind();
        if got != kind {
            return Err(SchemaError::AttributesMismatch { kind, got });
        }
        attributes.validate()?;

        Ok(Self { kind, attributes })
    }

    /// Shorthand for a fee action
    pub fn fee(fees_info: Vec<FeeInfo>) -> Result<Self> {
        Self::new(
            ActionKind::Fee,
            ActionAttributes::Fee(FeeAttributes { fees_info }),
        )
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn attributes(&self) -> &ActionAttributes {
        &self.attributes
    }

    /// Revalidate, used when assembling a payload
    pub fn validate(&self) -> Result<()> {
        Action::new(self.kind, self.attributes.clone()).map(|_| ())
    }

    /// Fee basis points this action takes, zero for non-fee actions
    pub fn fee_basis_points(&self) -> u64 {
        match &self.attributes {
            ActionAttributes::Fee(attrs) => attrs.total_basis_points(),
        }
    }
}
