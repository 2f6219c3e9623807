//! String-level entry points for Filecoin signing.
//!
//! Keys arrive as hex, amounts as decimal strings, and the signed message is
//! returned as JSON. Callers own all inputs; nothing is retained between calls.

pub mod error;

use chain_fil::FilNetwork;
use crypto_utils::ZeroizingBytes;
use error::WalletError;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use tracing::debug;

/// Sign a Filecoin message and return the signed message as JSON.
///
/// `private_key_hex` is the raw 32-byte scalar. `public_key_hex` is the
/// matching SEC1 key (compressed or uncompressed) used to resolve the
/// recovery id. `value`, `gas_fee_cap` and `gas_premium` are decimal attoFIL
/// strings. Non-empty `params` appear in the JSON but are not signed over.
#[allow(clippy::too_many_arguments)]
pub fn sign_fil_transaction(
    private_key_hex: String,
    public_key_hex: String,
    from: String,
    to: String,
    nonce: u64,
    value: String,
    gas_limit: i64,
    gas_fee_cap: String,
    gas_premium: String,
    method: u64,
    params: Vec<u8>,
) -> Result<String, WalletError> {
    let key_buf = ZeroizingBytes::from_hex(&private_key_hex)?;
    let private_key = key_buf.to_array::<32>()?;
    drop(key_buf);

    let public_key = decode_public_key(&public_key_hex)?;

    let msg = chain_fil::build_message(
        &from,
        &to,
        nonce,
        chain_fil::parse_amount(&value)?,
        gas_limit,
        chain_fil::parse_amount(&gas_fee_cap)?,
        chain_fil::parse_amount(&gas_premium)?,
        method,
        params,
    )?;
    debug!(nonce, method, "signing Filecoin message");

    let signed = chain_fil::sign_message(&msg, &private_key, &public_key)?;
    Ok(signed.to_json()?)
}

/// Derive the `f1` (or `t1` when `testnet`) address for a secp256k1 public key.
pub fn fil_address_from_public_key(
    public_key_hex: String,
    testnet: bool,
) -> Result<String, WalletError> {
    let bytes = decode_public_key(&public_key_hex)?;
    let pubkey = k256::PublicKey::from_sec1_bytes(&bytes)
        .map_err(|e| WalletError::InvalidPublicKey(e.to_string()))?;

    let uncompressed = pubkey.to_encoded_point(false);
    let mut key_65 = [0u8; 65];
    key_65.copy_from_slice(uncompressed.as_bytes());

    let network = if testnet {
        FilNetwork::Testnet
    } else {
        FilNetwork::Mainnet
    };
    Ok(chain_fil::pubkey_to_address(&key_65, network)?)
}

/// Validate a Filecoin address (payload only; the checksum is not verified).
pub fn validate_fil_address(addr: String) -> Result<bool, WalletError> {
    Ok(chain_fil::validate_address(&addr)?)
}

fn decode_public_key(public_key_hex: &str) -> Result<Vec<u8>, WalletError> {
    let digits = public_key_hex
        .strip_prefix("0x")
        .or_else(|| public_key_hex.strip_prefix("0X"))
        .unwrap_or(public_key_hex);
    hex::decode(digits).map_err(|e| WalletError::InvalidPublicKey(format!("invalid hex: {e}")))
}
