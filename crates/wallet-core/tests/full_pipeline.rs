//! Cross-crate integration tests exercising the full pipeline:
//! hex keys -> message -> encode -> digest -> sign -> JSON.
//!
//! These tests use the public API of wallet_core to catch regressions at
//! crate boundaries.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use wallet_core::error::WalletError;
use wallet_core::*;

const TEST_PRIVKEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
const TEST_PUBKEY: &str = "044646ae5047316b4230d0086c8acec687f00b1cd9d1dc634f6cb358ac0a9a8ffffe77b4dd0a4bfb95851f3b7355c781dd60f8418fc8a65d14907aff47c903a559";
const TEST_PUBKEY_COMPRESSED: &str =
    "034646ae5047316b4230d0086c8acec687f00b1cd9d1dc634f6cb358ac0a9a8fff";
const TO_ADDRESS: &str = "f1aebagbafaydqqcikbmga2dqpcaireeyuokqsccy";

const GOLDEN_SIGNATURE: &str = "38754c61820bf18c2a59fe368056887f2390850ad9cd8eca938eccefb422604020286a381ca851a5a8b7a495c074ea856dcf6a5a81372cd19f1e88de69b4b80c01";
const GOLDEN_SIGNATURE_B64: &str =
    "OHVMYYIL8YwqWf42gFaIfyOQhQrZzY7Kk47M77QiYEAgKGo4HKhRpai3pJXAdOqFbc9qWoE3LNGfHojeabS4DAE=";

fn sign_golden(public_key_hex: &str, params: Vec<u8>) -> Result<String, WalletError> {
    let from = fil_address_from_public_key(public_key_hex.into(), false)?;
    sign_fil_transaction(
        TEST_PRIVKEY.into(),
        public_key_hex.into(),
        from,
        TO_ADDRESS.into(),
        1,
        "0".into(),
        1_000_000,
        "100".into(),
        "10".into(),
        0,
        params,
    )
}

// ─── FIL: key -> address -> sign -> verify ──────────────────────────

#[test]
fn fil_golden_vector() {
    let json = sign_golden(TEST_PUBKEY, Vec::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let message = &value["Message"];
    assert_eq!(message["From"], "f1zkjru5eyb7meyvlvkwm7wfpbcdhqwt72tdpkiti");
    assert_eq!(message["To"], TO_ADDRESS);
    assert_eq!(message["Nonce"], 1);
    assert_eq!(message["Value"], "0");
    assert_eq!(message["GasLimit"], 1_000_000);
    assert_eq!(message["GasFeeCap"], "100");
    assert_eq!(message["GasPremium"], "10");
    assert_eq!(message["Method"], 0);
    assert_eq!(message["Params"], "");
    assert_eq!(message["Version"], 0);

    let signature = &value["Signature"];
    assert_eq!(signature["Type"], 1);
    assert_eq!(signature["Data"], GOLDEN_SIGNATURE_B64);
}

#[test]
fn fil_signature_data_decodes_to_golden_bytes() {
    let json = sign_golden(TEST_PUBKEY, Vec::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let data = value["Signature"]["Data"].as_str().unwrap();
    let bytes = BASE64.decode(data).unwrap();
    assert_eq!(bytes.len(), 65);
    assert_eq!(hex::encode(&bytes), GOLDEN_SIGNATURE);
}

#[test]
fn fil_compressed_public_key_gives_same_output() {
    let uncompressed = sign_golden(TEST_PUBKEY, Vec::new()).unwrap();
    let compressed = sign_golden(TEST_PUBKEY_COMPRESSED, Vec::new()).unwrap();
    assert_eq!(uncompressed, compressed);
}

#[test]
fn fil_params_are_reported_but_not_signed() {
    let plain = sign_golden(TEST_PUBKEY, Vec::new()).unwrap();
    let with_params = sign_golden(TEST_PUBKEY, vec![0x01, 0x02, 0x03]).unwrap();

    let plain: serde_json::Value = serde_json::from_str(&plain).unwrap();
    let with_params: serde_json::Value = serde_json::from_str(&with_params).unwrap();

    assert_eq!(with_params["Message"]["Params"], "AQID");
    assert_eq!(plain["Signature"], with_params["Signature"]);
}

#[test]
fn fil_signing_is_idempotent() {
    let a = sign_golden(TEST_PUBKEY, Vec::new()).unwrap();
    let b = sign_golden(TEST_PUBKEY, Vec::new()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn fil_mismatched_public_key_fails() {
    // Generator point: the public key of private key 1.
    let other = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    let result = sign_fil_transaction(
        TEST_PRIVKEY.into(),
        other.into(),
        "f1zkjru5eyb7meyvlvkwm7wfpbcdhqwt72tdpkiti".into(),
        TO_ADDRESS.into(),
        1,
        "0".into(),
        1_000_000,
        "100".into(),
        "10".into(),
        0,
        Vec::new(),
    );
    assert!(matches!(result, Err(WalletError::SigningFailed(_))));
}

#[test]
fn fil_malformed_recipient_fails() {
    let result = sign_fil_transaction(
        TEST_PRIVKEY.into(),
        TEST_PUBKEY.into(),
        "f1zkjru5eyb7meyvlvkwm7wfpbcdhqwt72tdpkiti".into(),
        "f1aebagbafay".into(),
        1,
        "0".into(),
        1_000_000,
        "100".into(),
        "10".into(),
        0,
        Vec::new(),
    );
    assert!(matches!(result, Err(WalletError::InvalidAddress(_))));
}

#[test]
fn fil_large_value_is_rendered_exactly() {
    let from = fil_address_from_public_key(TEST_PUBKEY.into(), false).unwrap();
    let json = sign_fil_transaction(
        TEST_PRIVKEY.into(),
        TEST_PUBKEY.into(),
        from,
        TO_ADDRESS.into(),
        7,
        "123456789012345678901234567890".into(),
        -1,
        "100".into(),
        "10".into(),
        0,
        Vec::new(),
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Message"]["Value"], "123456789012345678901234567890");
    assert_eq!(value["Message"]["GasLimit"], -1);
}
