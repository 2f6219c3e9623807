//! Filecoin chain support for the crypto-wallet.
//!
//! This crate provides:
//! - secp256k1 (`f1`/`t1`) address decoding and derivation
//! - Token amount packing for the message wire format
//! - Canonical CBOR encoding of the 10-field message
//! - The CID-based signing digest
//! - Recoverable secp256k1 signing with recovery id resolution
//! - Assembly of the Lotus-style JSON signed message
//!
//! The CBOR leaf items are written by hand (see [`cbor`]); the message only
//! needs unsigned/negative integers and byte strings.

pub mod address;
pub mod amount;
pub mod cbor;
pub mod digest;
pub mod error;
pub mod message;
pub mod network;
pub mod signature;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_bytes, pubkey_to_address, validate_address};
pub use amount::{pack_amount, parse_amount};
pub use digest::{message_cid_bytes, signing_digest, CID_PREFIX};
pub use error::FilError;
pub use message::{build_message, encode_message, FilMessage};
pub use network::FilNetwork;
pub use signature::{resolve_signature, FilSignature, RECOVERY_CANDIDATES};
pub use transaction::{
    assemble, sign_message, MessageJson, SignedFilTransaction, SIGNATURE_TYPE_SECP256K1,
};

pub use num_bigint::BigUint;
