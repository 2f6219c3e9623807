//! Recoverable secp256k1 signatures over a message signing digest.
//!
//! The signature is `r || s || recovery_byte` (65 bytes). The recovery byte
//! comes from a bounded search over the candidate ids `27..=31`: each one is
//! used to recover a public key from `(digest, r, s)`, and the first one that
//! reproduces the signer's key wins. Candidates `>= 30` compare the compressed
//! encoding of the recovered key; lower candidates compare the uncompressed one.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::FilError;

/// Recovery id candidates, tried in this order.
pub const RECOVERY_CANDIDATES: [u8; 5] = [27, 28, 29, 30, 31];

/// Offset subtracted from the winning candidate to form the recovery byte.
pub const RECOVERY_ID_BASE: u8 = 27;

/// Candidates at or above this value compare the compressed key encoding.
const COMPRESSED_CANDIDATE_MIN: u8 = 30;

/// Total length of a serialized signature.
pub const SIGNATURE_LEN: usize = 65;

/// A resolved recoverable signature.
///
/// Only [`resolve_signature`] and [`FilSignature::from_bytes`] construct one,
/// so `v` is always one of [`RECOVERY_CANDIDATES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilSignature {
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl FilSignature {
    /// Parses `r[32] || s[32] || recovery_byte`. The recovery byte must map
    /// back onto a candidate id.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LEN]) -> Result<Self, FilError> {
        let v = bytes[64]
            .checked_add(RECOVERY_ID_BASE)
            .filter(|v| RECOVERY_CANDIDATES.contains(v))
            .ok_or_else(|| {
                FilError::SerializationError(format!(
                    "recovery byte {} out of range",
                    bytes[64]
                ))
            })?;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v })
    }

    /// Big-endian `r`, zero-padded to 32 bytes.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Big-endian `s` (low-S normalized), zero-padded to 32 bytes.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// The winning candidate from [`RECOVERY_CANDIDATES`].
    pub fn v(&self) -> u8 {
        self.v
    }

    /// The trailing byte of the serialized signature: `v - 27`.
    pub fn recovery_byte(&self) -> u8 {
        self.v - RECOVERY_ID_BASE
    }

    /// Serializes as `r[32] || s[32] || recovery_byte`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.recovery_byte();
        out
    }
}

/// Signs `digest` and resolves the recovery id against `expected_public_key`.
///
/// `expected_public_key` may be a 33-byte compressed or 65-byte uncompressed
/// SEC1 key; it is normalized to the uncompressed encoding before comparison.
pub fn resolve_signature(
    digest: &[u8; 32],
    private_key: &[u8; 32],
    expected_public_key: &[u8],
) -> Result<FilSignature, FilError> {
    let expected = PublicKey::from_sec1_bytes(expected_public_key)
        .map_err(|e| FilError::InvalidPublicKey(e.to_string()))?
        .to_encoded_point(false);

    let mut key_bytes = *private_key;
    let signing_key = SigningKey::from_bytes((&key_bytes).into())
        .map_err(|e| FilError::InvalidPrivateKey(e.to_string()));
    key_bytes.zeroize();
    let signing_key = signing_key?;

    // The digest is signed as-is (RFC 6979 nonce, no further hashing).
    let signature: Signature = signing_key
        .sign_prehash(digest)
        .map_err(|e| FilError::SigningError(e.to_string()))?;
    let signature = signature.normalize_s().unwrap_or(signature);

    for v in RECOVERY_CANDIDATES {
        let Some(recovered) = recover_candidate(digest, &signature, v) else {
            continue;
        };
        let encoded = recovered.to_encoded_point(v >= COMPRESSED_CANDIDATE_MIN);
        if encoded.as_bytes() != expected.as_bytes() {
            continue;
        }

        debug!(v, recovery_byte = v - RECOVERY_ID_BASE, "resolved recovery id");

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&signature.r().to_bytes());
        s.copy_from_slice(&signature.s().to_bytes());
        return Ok(FilSignature { r, s, v });
    }

    Err(FilError::SignatureRecoveryFailed)
}

/// Recovers the public key for one candidate. Odd candidates offset from 27
/// select the odd-y point; the x coordinate is never reduced.
fn recover_candidate(digest: &[u8; 32], signature: &Signature, v: u8) -> Option<VerifyingKey> {
    let is_y_odd = (v - RECOVERY_ID_BASE) % 2 == 1;
    let recovery_id = RecoveryId::new(is_y_odd, false);
    VerifyingKey::recover_from_prehash(digest, signature, recovery_id).ok()
}
