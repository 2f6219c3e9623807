use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::CryptoError;

/// A `Vec<u8>` wrapper that is zeroed when dropped.
///
/// Holds private key bytes for the duration of a single signing call.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ZeroizingBytes(Vec<u8>);

impl ZeroizingBytes {
    /// Creates a new `ZeroizingBytes` from raw bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Decodes a hex string (optionally `0x`-prefixed) into a zeroizing buffer.
    ///
    /// The error message never echoes the input.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let digits = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);
        hex::decode(digits)
            .map(Self)
            .map_err(|e| CryptoError::InvalidInput(format!("invalid hex: {e}")))
    }

    /// Copies the bytes into a fixed-size array that is also zeroed on drop.
    pub fn to_array<const N: usize>(&self) -> Result<Zeroizing<[u8; N]>, CryptoError> {
        if self.0.len() != N {
            return Err(CryptoError::InvalidKeyLength {
                expected: N,
                actual: self.0.len(),
            });
        }
        let mut out = Zeroizing::new([0u8; N]);
        out.copy_from_slice(&self.0);
        Ok(out)
    }

    /// Returns the length of the inner byte slice.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the inner byte slice is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for ZeroizingBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ZeroizingBytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl std::fmt::Debug for ZeroizingBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ZeroizingBytes([REDACTED; {}])", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_decodes() {
        let zb = ZeroizingBytes::from_hex("deadbeef").unwrap();
        assert_eq!(&*zb, &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn from_hex_accepts_prefix() {
        let a = ZeroizingBytes::from_hex("0x0102").unwrap();
        let b = ZeroizingBytes::from_hex("0X0102").unwrap();
        assert_eq!(&*a, &[1, 2]);
        assert_eq!(&*a, &*b);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(
            ZeroizingBytes::from_hex("abc"),
            Err(CryptoError::InvalidInput(_))
        ));
        assert!(matches!(
            ZeroizingBytes::from_hex("zz"),
            Err(CryptoError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_hex_error_does_not_echo_secret() {
        let err = ZeroizingBytes::from_hex("secretzz").unwrap_err();
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn to_array_exact_length() {
        let zb = ZeroizingBytes::new(vec![7u8; 32]);
        let arr = zb.to_array::<32>().unwrap();
        assert_eq!(*arr, [7u8; 32]);
    }

    #[test]
    fn to_array_wrong_length() {
        let zb = ZeroizingBytes::new(vec![7u8; 31]);
        let err = zb.to_array::<32>().unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidKeyLength {
                expected: 32,
                actual: 31
            }
        ));
    }

    #[test]
    fn len_and_is_empty() {
        let zb = ZeroizingBytes::new(vec![10, 20]);
        assert_eq!(zb.len(), 2);
        assert!(!zb.is_empty());
        assert!(ZeroizingBytes::new(vec![]).is_empty());
    }

    #[test]
    fn debug_is_redacted() {
        let zb = ZeroizingBytes::new(vec![0xAA; 4]);
        let debug = format!("{zb:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("170"));
    }

    #[test]
    fn manual_zeroize_clears() {
        let mut zb = ZeroizingBytes::new(vec![0xAA; 32]);
        zb.zeroize();
        assert!(zb.is_empty());
    }

    #[test]
    fn from_vec() {
        let zb: ZeroizingBytes = vec![0xFFu8; 8].into();
        assert_eq!(zb.len(), 8);
    }
}
