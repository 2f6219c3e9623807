//! Signed message assembly and the end-to-end signing pipeline.
//!
//! The output mirrors the Lotus JSON form of a signed message:
//!
//! ```json
//! {
//!   "Message": { "From": "f1..", "To": "f1..", "Nonce": 1, "Value": "0",
//!                "GasLimit": 1000000, "GasFeeCap": "100", "GasPremium": "10",
//!                "Method": 0, "Params": "", "Version": 0 },
//!   "Signature": { "Type": 1, "Data": "<base64 r||s||v>" }
//! }
//! ```

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::digest::signing_digest;
use crate::error::FilError;
use crate::message::{encode_message, FilMessage};
use crate::signature::{resolve_signature, SIGNATURE_LEN};

/// Signature type tag for secp256k1 signatures.
pub const SIGNATURE_TYPE_SECP256K1: u8 = 1;

/// Message fields in their JSON form. Amounts are decimal strings and
/// params are base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageJson {
    pub from: String,
    pub to: String,
    pub nonce: u64,
    pub value: String,
    pub gas_limit: i64,
    pub gas_fee_cap: String,
    pub gas_premium: String,
    pub method: u64,
    pub params: String,
    pub version: u64,
}

impl MessageJson {
    /// Serializes the unsigned message to compact JSON.
    pub fn to_json(&self) -> Result<String, FilError> {
        serde_json::to_string(self).map_err(|e| FilError::SerializationError(e.to_string()))
    }
}

impl From<&FilMessage> for MessageJson {
    fn from(msg: &FilMessage) -> Self {
        Self {
            from: msg.from.clone(),
            to: msg.to.clone(),
            nonce: msg.nonce,
            value: msg.value.to_string(),
            gas_limit: msg.gas_limit,
            gas_fee_cap: msg.gas_fee_cap.to_string(),
            gas_premium: msg.gas_premium.to_string(),
            method: msg.method,
            params: BASE64.encode(&msg.params),
            version: msg.version,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignatureJson {
    #[serde(rename = "Type")]
    pub sig_type: u8,
    /// Base64 of the 65-byte signature.
    pub data: String,
}

/// A signed message ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignedFilTransaction {
    pub message: MessageJson,
    pub signature: SignatureJson,
}

impl SignedFilTransaction {
    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String, FilError> {
        serde_json::to_string(self).map_err(|e| FilError::SerializationError(e.to_string()))
    }

    /// Parses a signed message from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, FilError> {
        serde_json::from_str(json).map_err(|e| FilError::SerializationError(e.to_string()))
    }

    /// Decodes `Signature.Data` back into the raw 65 signature bytes.
    pub fn signature_bytes(&self) -> Result<[u8; SIGNATURE_LEN], FilError> {
        let bytes = BASE64
            .decode(&self.signature.data)
            .map_err(|e| FilError::SerializationError(format!("invalid base64: {e}")))?;
        bytes.try_into().map_err(|v: Vec<u8>| {
            FilError::SerializationError(format!(
                "expected {SIGNATURE_LEN} signature bytes, got {}",
                v.len()
            ))
        })
    }
}

/// Packages a message and its serialized signature.
pub fn assemble(msg: &FilMessage, signature: &[u8; SIGNATURE_LEN]) -> SignedFilTransaction {
    SignedFilTransaction {
        message: MessageJson::from(msg),
        signature: SignatureJson {
            sig_type: SIGNATURE_TYPE_SECP256K1,
            data: BASE64.encode(signature),
        },
    }
}

/// Signs a message with the given secp256k1 private key.
///
/// The signing process:
/// 1. CBOR-encode the message as a 10-element array.
/// 2. Hash the encoding into its CID, then hash the CID (the signing digest).
/// 3. Sign the digest and resolve the recovery id against `public_key`.
/// 4. Assemble the JSON form with the base64 signature.
pub fn sign_message(
    msg: &FilMessage,
    private_key: &[u8; 32],
    public_key: &[u8],
) -> Result<SignedFilTransaction, FilError> {
    let encoded = encode_message(msg)?;
    let digest = signing_digest(&encoded);
    debug!(
        network = ?msg.network(),
        encoded_len = encoded.len(),
        digest = %hex::encode(digest),
        "computed message signing digest"
    );

    let signature = resolve_signature(&digest, private_key, public_key)?;
    Ok(assemble(msg, &signature.to_bytes()))
}
