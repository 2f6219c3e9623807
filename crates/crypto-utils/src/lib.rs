//! # crypto-utils
//!
//! Memory-safety helpers for secret key material handled by the signing
//! crates.

pub mod error;
pub mod zeroizing;

pub use error::CryptoError;
pub use zeroizing::ZeroizingBytes;
