//! Byte codec for address-like fields
//!
//! Inputs prefixed with `0x` are hex, anything else is standard base64. The
//! decoded bytes are left-padded with zeros to 32 bytes.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::RngCore;

use super::error::DecodeError;

/// Width of every address-like field
pub const ADDRESS_LEN: usize = 32;

/// Input that asks for a generated test value instead of decoding
pub const TEST_VALUE_SENTINEL: &str = "r";

/// What the user typed into an address-like field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressInput<'a> {
    /// The `r` shortcut
    TestValue,
    /// Hex or base64 text
    Encoded(&'a str),
}

impl<'a> AddressInput<'a> {
    pub fn parse(input: &'a str) -> Self {
        if input == TEST_VALUE_SENTINEL {
            AddressInput::TestValue
        } else {
            AddressInput::Encoded(input)
        }
    }
}

/// Decode an address-like string, honouring the test value shortcut.
///
/// `r` yields [`generate_test_value`], which is not secure randomness.
pub fn decode_address_like(input: &str) -> Result<[u8; ADDRESS_LEN], DecodeError> {
    match AddressInput::parse(input) {
        AddressInput::TestValue => Ok(generate_test_value()),
        AddressInput::Encoded(encoded) => decode_hex_or_base64(encoded),
    }
}

/// Decode hex (with `0x` prefix) or base64 into a left-padded 32-byte word
pub fn decode_hex_or_base64(input: &str) -> Result<[u8; ADDRESS_LEN], DecodeError> {
    let decoded = match strip_hex_prefix(input) {
        Some(digits) => hex::decode(digits).map_err(|e| DecodeError::InvalidEncoding {
            encoding: "hex",
            reason: e.to_string(),
        })?,
        None => STANDARD
            .decode(input)
            .map_err(|e| DecodeError::InvalidEncoding {
                encoding: "base64",
                reason: e.to_string(),
            })?,
    };

    left_pad(&decoded)
}

/// Only a lowercase `0x` marks hex; `0X..` is valid base64
fn strip_hex_prefix(input: &str) -> Option<&str> {
    input.strip_prefix("0x")
}

/// Left-pad `bytes` with zeros to 32 bytes
pub fn left_pad(bytes: &[u8]) -> Result<[u8; ADDRESS_LEN], DecodeError> {
    if bytes.len() > ADDRESS_LEN {
        return Err(DecodeError::TooLong(bytes.len()));
    }

    let mut out = [0u8; ADDRESS_LEN];
    out[ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// 32 pseudo-random bytes for filling in demo addresses.
///
/// Uses the thread-local RNG. NOT suitable for keys or anything that needs
/// to be unpredictable.
pub fn generate_test_value() -> [u8; ADDRESS_LEN] {
    let mut out = [0u8; ADDRESS_LEN];
    rand::thread_rng().fill_bytes(&mut out);
    out
}
