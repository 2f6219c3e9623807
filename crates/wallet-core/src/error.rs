use chain_fil::FilError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Transaction build failed: {0}")]
    TransactionFailed(String),
}

impl From<crypto_utils::CryptoError> for WalletError {
    fn from(e: crypto_utils::CryptoError) -> Self {
        WalletError::InvalidPrivateKey(e.to_string())
    }
}

impl From<FilError> for WalletError {
    fn from(e: FilError) -> Self {
        match e {
            FilError::MalformedAddress(msg) => WalletError::InvalidAddress(msg),
            FilError::InvalidPrivateKey(msg) => WalletError::InvalidPrivateKey(msg),
            FilError::InvalidPublicKey(msg) => WalletError::InvalidPublicKey(msg),
            FilError::SignatureRecoveryFailed | FilError::SigningError(_) => {
                WalletError::SigningFailed(format!("FIL: {e}"))
            }
            other => WalletError::TransactionFailed(format!("FIL: {other}")),
        }
    }
}
