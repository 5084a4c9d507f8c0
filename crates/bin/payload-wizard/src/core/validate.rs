//! Field validators
//!
//! Pure checks used by the sub-forms. Every failure is a [`ValidationError`],
//! which the caller surfaces inline and keeps the draft.

use payload_schema::BPS_NORMALIZER;

use super::error::ValidationError;

/// Basis points must be in (0, 10000]
pub fn validate_basis_points(bps: u32) -> Result<(), ValidationError> {
    if bps == 0 {
        return Err(ValidationError::Zero);
    }
    if bps > BPS_NORMALIZER {
        return Err(ValidationError::TooLarge {
            max: BPS_NORMALIZER,
        });
    }
    Ok(())
}

pub fn validate_required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Parse a base-10 unsigned integer that fits in `bit_width` bits
pub fn validate_uint(
    value: &str,
    bit_width: u32,
    field: &'static str,
) -> Result<u64, ValidationError> {
    let value = value.trim();
    // str::parse also takes a leading '+'
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::NotANumber {
            field,
            reason: "expected an unsigned decimal integer".to_string(),
        });
    }
    let parsed: u64 = value
        .parse()
        .map_err(|e: std::num::ParseIntError| ValidationError::NotANumber {
            field,
            reason: e.to_string(),
        })?;

    if bit_width < u64::BITS && parsed >> bit_width != 0 {
        return Err(ValidationError::NotANumber {
            field,
            reason: format!("value out of range for {}-bit unsigned integer", bit_width),
        });
    }
    Ok(parsed)
}

/// [`validate_uint`] narrowed to `u32`
pub fn validate_u32(value: &str, field: &'static str) -> Result<u32, ValidationError> {
    let parsed = validate_uint(value, u32::BITS, field)?;
    u32::try_from(parsed).map_err(|e| ValidationError::NotANumber {
        field,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required() {
        assert!(validate_required("addr1", "recipient").is_ok());
        assert_eq!(
            validate_required("   ", "recipient"),
            Err(ValidationError::Empty { field: "recipient" })
        );
    }

    #[test]
    fn test_uint_parsing() {
        assert_eq!(validate_uint("42", 32, "domain"), Ok(42));
        assert_eq!(validate_uint("4294967295", 32, "domain"), Ok(u32::MAX as u64));
        assert!(matches!(
            validate_uint("4294967296", 32, "domain"),
            Err(ValidationError::NotANumber { field: "domain", .. })
        ));
        assert!(matches!(
            validate_uint("-1", 32, "domain"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            validate_uint("+5", 32, "domain"),
            Err(ValidationError::NotANumber { field: "domain", .. })
        ));
        assert!(matches!(
            validate_uint("1.5", 32, "domain"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(validate_uint(&u64::MAX.to_string(), 64, "x"), Ok(u64::MAX));
    }

    #[test]
    fn test_u32() {
        assert_eq!(validate_u32("7", "domain"), Ok(7));
        assert!(validate_u32("abc", "domain").is_err());
    }

    #[test]
    fn test_basis_points_edges() {
        assert_eq!(validate_basis_points(0), Err(ValidationError::Zero));
        assert!(validate_basis_points(1).is_ok());
        assert!(validate_basis_points(10_000).is_ok());
        assert_eq!(
            validate_basis_points(10_001),
            Err(ValidationError::TooLarge { max: 10_000 })
        );
    }

    proptest! {
        #[test]
        fn prop_valid_basis_points(bps in 1u32..=10_000) {
            prop_assert!(validate_basis_points(bps).is_ok());
        }

        #[test]
        fn prop_oversized_basis_points(bps in 10_001u32..) {
            prop_assert_eq!(
                validate_basis_points(bps),
                Err(ValidationError::TooLarge { max: 10_000 })
            );
        }
    }
}
