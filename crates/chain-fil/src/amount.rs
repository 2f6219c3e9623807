//! Token amount packing for the message wire format.
//!
//! Amounts (`Value`, `GasFeeCap`, `GasPremium`) are encoded as a sign byte
//! followed by the big-endian magnitude:
//!
//! ```text
//! 0          -> 00
//! 10         -> 00 0a
//! 100        -> 00 64
//! 1_000_000  -> 00 0f 42 40
//! ```
//!
//! Only non-negative amounts exist, so the sign byte is always `0x00`.

use num_bigint::BigUint;

use crate::error::FilError;

/// Sign byte prefixed to every packed amount.
pub const POSITIVE_SIGN: u8 = 0x00;

/// Packs a non-negative amount as `0x00 || big-endian magnitude`.
///
/// The magnitude carries no leading zero bytes, and zero has no magnitude
/// bytes at all.
pub fn pack_amount(amount: &BigUint) -> Vec<u8> {
    let mut out = vec![POSITIVE_SIGN];
    if amount.bits() > 0 {
        out.extend_from_slice(&amount.to_bytes_be());
    }
    out
}

/// Parses a base-10 amount string such as `"1000000000000000000"`.
pub fn parse_amount(decimal: &str) -> Result<BigUint, FilError> {
    if decimal.is_empty() || !decimal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FilError::InvalidAmount(format!(
            "expected a non-negative decimal integer, got {decimal:?}"
        )));
    }
    decimal
        .parse::<BigUint>()
        .map_err(|e| FilError::InvalidAmount(format!("{decimal:?}: {e}")))
}
