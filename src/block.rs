//! Single-block cipher used as the FF3 round function.

use aes::cipher::{Array, BlockCipherEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::common::{BLOCK_LENGTH, Error};

/// Encrypts exactly one 16-byte block under a fixed key.
///
/// Implementations must be deterministic and stateless: no chaining, no padding.
pub trait SingleBlockCipher {
    fn encrypt_block(&self, block: &mut [u8; BLOCK_LENGTH]);
}

/// AES keyed with a 128, 192 or 256-bit key, chosen by key length.
#[derive(Clone)]
pub enum AesCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesCipher {
    /// Key the cipher with `key` exactly as given.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLength` unless `key` is 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        let cipher = match key.len() {
            16 => AesCipher::Aes128(
                Aes128::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?,
            ),
            24 => AesCipher::Aes192(
                Aes192::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?,
            ),
            32 => AesCipher::Aes256(
                Aes256::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?,
            ),
            _ => return Err(Error::InvalidKeyLength),
        };
        Ok(cipher)
    }

    /// Key length in bytes.
    pub fn key_length(&self) -> usize {
        match self {
            AesCipher::Aes128(_) => 16,
            AesCipher::Aes192(_) => 24,
            AesCipher::Aes256(_) => 32,
        }
    }
}

impl SingleBlockCipher for AesCipher {
    fn encrypt_block(&self, block: &mut [u8; BLOCK_LENGTH]) {
        let mut ga_block = Array::from(*block);
        match self {
            AesCipher::Aes128(ks) => ks.encrypt_block(&mut ga_block),
            AesCipher::Aes192(ks) => ks.encrypt_block(&mut ga_block),
            AesCipher::Aes256(ks) => ks.encrypt_block(&mut ga_block),
        }
        block.copy_from_slice(ga_block.as_slice());
    }
}

impl core::fmt::Debug for AesCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AesCipher({} bits)", self.key_length() * 8)
    }
}
