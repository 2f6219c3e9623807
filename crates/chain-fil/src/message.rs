//! Unsigned Filecoin messages and their canonical wire encoding.
//!
//! A message is encoded as a fixed 10-element CBOR array:
//!
//! ```text
//! 0x8a                      array(10) header
//!   version                 uint
//!   to                      bytes(21)   raw address
//!   from                    bytes(21)   raw address
//!   nonce                   uint
//!   value                   bytes       packed amount
//!   gas_limit               int
//!   gas_fee_cap             bytes       packed amount
//!   gas_premium             bytes       packed amount
//!   method                  uint
//!   params                  bytes(0)
//! ```
//!
//! Field order is part of the wire format: the signing digest is computed
//! over these bytes.

use num_bigint::BigUint;
use tracing::warn;

use crate::address;
use crate::amount::pack_amount;
use crate::cbor;
use crate::error::FilError;
use crate::network::FilNetwork;

/// CBOR header for a definite-length array of 10 items.
pub const MESSAGE_ARRAY_HEADER: u8 = 0x8a;

/// The only message version this encoder produces.
pub const MESSAGE_VERSION: u64 = 0;

/// An unsigned Filecoin message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilMessage {
    pub version: u64,
    /// Recipient address, e.g. `f1...`.
    pub to: String,
    /// Sender address, e.g. `f1...`.
    pub from: String,
    pub nonce: u64,
    /// Transfer value in attoFIL.
    pub value: BigUint,
    pub gas_limit: i64,
    pub gas_fee_cap: BigUint,
    pub gas_premium: BigUint,
    pub method: u64,
    /// Method parameters. Carried through to the JSON form but never encoded:
    /// the wire encoding always has an empty params field.
    pub params: Vec<u8>,
}

impl FilMessage {
    /// The network named by the sender's leading character, if recognized.
    /// Encoding ignores it; the raw address is the same on every network.
    pub fn network(&self) -> Option<FilNetwork> {
        FilNetwork::from_address(&self.from)
    }
}

/// Builds an unsigned message, validating both addresses.
#[allow(clippy::too_many_arguments)]
pub fn build_message(
    from: &str,
    to: &str,
    nonce: u64,
    value: BigUint,
    gas_limit: i64,
    gas_fee_cap: BigUint,
    gas_premium: BigUint,
    method: u64,
    params: Vec<u8>,
) -> Result<FilMessage, FilError> {
    address::validate_address(from)?;
    address::validate_address(to)?;

    Ok(FilMessage {
        version: MESSAGE_VERSION,
        to: to.to_string(),
        from: from.to_string(),
        nonce,
        value,
        gas_limit,
        gas_fee_cap,
        gas_premium,
        method,
        params,
    })
}

/// Encodes the message as the 10-element CBOR array shown in the module docs.
pub fn encode_message(msg: &FilMessage) -> Result<Vec<u8>, FilError> {
    let to = address::address_to_bytes(&msg.to)?;
    let from = address::address_to_bytes(&msg.from)?;

    if !msg.params.is_empty() {
        warn!(
            params_len = msg.params.len(),
            "message params are not encoded; signing with an empty params field"
        );
    }

    let mut buf = Vec::with_capacity(96);
    buf.push(MESSAGE_ARRAY_HEADER);
    cbor::write_uint(&mut buf, msg.version);
    cbor::write_bytes(&mut buf, &to);
    cbor::write_bytes(&mut buf, &from);
    cbor::write_uint(&mut buf, msg.nonce);
    cbor::write_bytes(&mut buf, &pack_amount(&msg.value));
    cbor::write_int(&mut buf, msg.gas_limit);
    cbor::write_bytes(&mut buf, &pack_amount(&msg.gas_fee_cap));
    cbor::write_bytes(&mut buf, &pack_amount(&msg.gas_premium));
    cbor::write_uint(&mut buf, msg.method);
    cbor::write_bytes(&mut buf, &[]);

    Ok(buf)
}
