use thiserror::Error;

/// Filecoin chain operation errors.
#[derive(Debug, Error)]
pub enum FilError {
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("signing error: {0}")]
    SigningError(String),

    #[error("signature recovery failed: no candidate recovery id matches the public key")]
    SignatureRecoveryFailed,

    #[error("serialization error: {0}")]
    SerializationError(String),
}
