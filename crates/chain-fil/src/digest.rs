//! Signing digest for Filecoin messages.
//!
//! The signer does not sign the message bytes directly. It signs the
//! BLAKE2b-256 hash of the message's binary CID:
//!
//! ```text
//! h1     = blake2b-256(encoded_message)
//! cid    = 0x01 0x71 0xa0 0xe4 0x02 0x20 || h1
//! digest = blake2b-256(cid)
//! ```

/// CIDv1 prefix: version 1, dag-cbor codec (0x71), blake2b-256 multihash
/// (0xb220 as varint `a0 e4 02`), 32-byte digest length.
pub const CID_PREFIX: [u8; 6] = [0x01, 0x71, 0xa0, 0xe4, 0x02, 0x20];

/// Plain BLAKE2b with a 32-byte output (no key, salt or personalization).
fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let hash = blake2b_simd::Params::new().hash_length(32).hash(data);

    let mut result = [0u8; 32];
    result.copy_from_slice(hash.as_bytes());
    result
}

/// Returns the binary CID of an encoded message: `CID_PREFIX || blake2b-256(encoded)`.
pub fn message_cid_bytes(encoded_message: &[u8]) -> [u8; 38] {
    let mut cid = [0u8; 38];
    cid[..6].copy_from_slice(&CID_PREFIX);
    cid[6..].copy_from_slice(&blake2b_256(encoded_message));
    cid
}

/// Computes the 32-byte value that gets signed for an encoded message.
pub fn signing_digest(encoded_message: &[u8]) -> [u8; 32] {
    blake2b_256(&message_cid_bytes(encoded_message))
}
