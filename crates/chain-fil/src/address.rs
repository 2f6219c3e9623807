//! Filecoin secp256k1 (protocol 1) address handling.
//!
//! Text form: `<network><protocol><base32(payload || checksum)>`, e.g.
//! `f1zkjru5eyb7meyvlvkwm7wfpbcdhqwt72tdpkiti`. The payload is the 20-byte
//! BLAKE2b-160 hash of the uncompressed public key and the checksum is the
//! 4-byte BLAKE2b-32 of `protocol || payload`.
//!
//! Decoding keeps only the payload. Checksum bytes are discarded without being
//! verified.

use std::sync::OnceLock;

use data_encoding::{Encoding, Specification, BASE32_NOPAD};

use crate::error::FilError;
use crate::network::FilNetwork;

/// Protocol byte for secp256k1 addresses.
pub const SECP256K1_PROTOCOL: u8 = 0x01;

/// Length of the address payload (BLAKE2b-160 of the public key).
pub const PAYLOAD_LEN: usize = 20;

/// Length of the raw binary address: protocol byte + payload.
pub const RAW_ADDRESS_LEN: usize = 1 + PAYLOAD_LEN;

const CHECKSUM_LEN: usize = 4;

const RFC4648_BASE32_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

static LENIENT_BASE32: OnceLock<Encoding> = OnceLock::new();

/// Padded RFC 4648 base-32 that accepts non-zero trailing bits. Those bits
/// fall inside the checksum, which is never verified.
fn lenient_base32() -> Result<&'static Encoding, FilError> {
    if let Some(encoding) = LENIENT_BASE32.get() {
        return Ok(encoding);
    }

    let mut alphabet = Specification::new();
    alphabet.symbols.push_str(RFC4648_BASE32_SYMBOLS);
    alphabet.padding = Some('=');
    alphabet.check_trailing_bits = false;
    let encoding = alphabet
        .encoding()
        .map_err(|e| FilError::MalformedAddress(format!("base32 alphabet: {e}")))?;
    Ok(LENIENT_BASE32.get_or_init(|| encoding))
}

/// Converts a text address into its raw 21-byte protocol form.
///
/// The first two characters (network and protocol) are dropped verbatim, so
/// only single-digit protocol codes are understood. The remainder is
/// upper-cased, padded to a base-32 block boundary and decoded; the first 20
/// bytes become the payload and `0x01` is prepended.
pub fn address_to_bytes(address: &str) -> Result<[u8; RAW_ADDRESS_LEN], FilError> {
    let payload_text = match address.char_indices().nth(2) {
        Some((idx, _)) => &address[idx..],
        None if address.chars().count() == 2 => "",
        None => {
            return Err(FilError::MalformedAddress(format!(
                "address too short: {address:?}"
            )))
        }
    };

    let mut padded = payload_text.to_ascii_uppercase();
    let pad = (8 - padded.len() % 8) % 8;
    padded.extend(std::iter::repeat('=').take(pad));

    let decoded = lenient_base32()?
        .decode(padded.as_bytes())
        .map_err(|e| FilError::MalformedAddress(format!("base32 decode failed: {e}")))?;

    if decoded.len() < PAYLOAD_LEN {
        return Err(FilError::MalformedAddress(format!(
            "expected at least {PAYLOAD_LEN} payload bytes, got {}",
            decoded.len()
        )));
    }

    let mut raw = [0u8; RAW_ADDRESS_LEN];
    raw[0] = SECP256K1_PROTOCOL;
    raw[1..].copy_from_slice(&decoded[..PAYLOAD_LEN]);
    Ok(raw)
}

/// Validates a Filecoin address string.
///
/// Returns `Ok(true)` when the payload decodes to at least 20 bytes. The
/// checksum is not verified.
pub fn validate_address(address: &str) -> Result<bool, FilError> {
    address_to_bytes(address)?;
    Ok(true)
}

/// Derives an `f1`/`t1` address from an uncompressed secp256k1 public key
/// (65 bytes, starting with 0x04).
pub fn pubkey_to_address(
    uncompressed_pubkey: &[u8; 65],
    network: FilNetwork,
) -> Result<String, FilError> {
    if uncompressed_pubkey[0] != 0x04 {
        return Err(FilError::InvalidPublicKey(
            "uncompressed key must start with 0x04".into(),
        ));
    }

    let payload = blake2b_simd::Params::new()
        .hash_length(PAYLOAD_LEN)
        .hash(uncompressed_pubkey);

    let mut checksum_input = Vec::with_capacity(RAW_ADDRESS_LEN);
    checksum_input.push(SECP256K1_PROTOCOL);
    checksum_input.extend_from_slice(payload.as_bytes());
    let checksum = blake2b_simd::Params::new()
        .hash_length(CHECKSUM_LEN)
        .hash(&checksum_input);

    let mut body = Vec::with_capacity(PAYLOAD_LEN + CHECKSUM_LEN);
    body.extend_from_slice(payload.as_bytes());
    body.extend_from_slice(checksum.as_bytes());

    Ok(format!(
        "{}{}{}",
        network.address_prefix(),
        SECP256K1_PROTOCOL,
        BASE32_NOPAD.encode(&body).to_ascii_lowercase()
    ))
}
