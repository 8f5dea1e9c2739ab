//! FF3 format-preserving encryption (NIST SP 800-38G).
//!
//! FF3 encrypts a string of digits in radix 2 through 36 into another string
//! of digits of the same length and radix, using an 8-round Feistel network
//! with AES as the round function.
//!
//! Security properties:
//! - Ciphertext length and alphabet equal those of the plaintext
//! - Deterministic for a given (key, tweak, plaintext)
//! - The 64-bit tweak is not secret, but different tweaks give unrelated permutations
//! - No authentication
//!
//! FF3 was superseded by FF3-1 (see [`crate::ff3_1`]) after attacks on its
//! 64-bit tweak; use it for compatibility with existing ciphertext.

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::block::{AesCipher, SingleBlockCipher};
use crate::bounds::MessageBounds;
use crate::common::{Direction, Error, TWEAK_LENGTH};
use crate::context::Context;
use crate::feistel::TweakHalves;

/// FF3 cipher bound to a radix, a key and a default tweak.
#[derive(Debug, Clone)]
pub struct Ff3<C: SingleBlockCipher = AesCipher> {
    context: Context<C>,
    tweak: [u8; TWEAK_LENGTH],
}

impl Ff3<AesCipher> {
    /// Create an FF3 cipher over AES-128, AES-192 or AES-256, chosen by key length.
    ///
    /// # Arguments
    /// * `radix` - Alphabet size, 2 through 36
    /// * `key` - 16, 24 or 32 bytes
    /// * `tweak` - 8-byte default tweak
    ///
    /// # Errors
    /// `InvalidKeyLength`, `InvalidRadix`, `InvalidLengthRange` or
    /// `InvalidTweakLength`.
    pub fn new(radix: u32, key: &[u8], tweak: &[u8]) -> Result<Self, Error> {
        Self::with_cipher(radix, key, tweak, AesCipher::new)
    }
}

impl<C: SingleBlockCipher> Ff3<C> {
    /// Tweak length in bytes.
    pub const TWEAK_LENGTH: usize = TWEAK_LENGTH;

    /// Create an FF3 cipher over a caller-supplied block cipher.
    ///
    /// `keyed` is handed the key with its bytes reversed, as FF3 requires.
    pub fn with_cipher<F>(radix: u32, key: &[u8], tweak: &[u8], keyed: F) -> Result<Self, Error>
    where
        F: FnOnce(&[u8]) -> Result<C, Error>,
    {
        let context = Context::new(radix, key, MessageBounds::for_radix, keyed)?;
        let tweak = tweak
            .try_into()
            .map_err(|_| Error::InvalidTweakLength)?;
        Ok(Self { context, tweak })
    }

    pub fn radix(&self) -> u32 {
        self.context.radix()
    }

    /// Accepted message lengths, in digits.
    pub fn bounds(&self) -> MessageBounds {
        self.context.bounds()
    }

    pub fn key_length(&self) -> usize {
        self.context.key_length()
    }

    /// The default tweak.
    pub fn tweak(&self) -> &[u8; TWEAK_LENGTH] {
        &self.tweak
    }

    fn tweak_halves(&self, tweak: Option<&[u8]>) -> Result<TweakHalves, Error> {
        match tweak {
            None => Ok(TweakHalves::ff3(&self.tweak)),
            Some(t) => {
                let t: &[u8; TWEAK_LENGTH] = t.try_into().map_err(|_| Error::InvalidTweakLength)?;
                Ok(TweakHalves::ff3(t))
            }
        }
    }

    /// Encrypt plaintext digits (values below the radix) into `ciphertext`.
    ///
    /// # Arguments
    /// * `plaintext` - Digit values, length within [`Ff3::bounds`]
    /// * `tweak` - 8-byte tweak, or `None` for the default tweak
    /// * `ciphertext` - Output buffer (must be same length as plaintext)
    ///
    /// # Errors
    /// `MessageLengthOutOfBounds`, `InvalidTweakLength` or `InvalidPlaintext`.
    pub fn encrypt_digits(
        &self,
        plaintext: &[u8],
        tweak: Option<&[u8]>,
        ciphertext: &mut [u8],
    ) -> Result<(), Error> {
        let tweak = self.tweak_halves(tweak)?;
        self.context
            .process(plaintext, &tweak, ciphertext, Direction::Encrypt)
    }

    /// Decrypt ciphertext digits into `plaintext`.
    pub fn decrypt_digits(
        &self,
        ciphertext: &[u8],
        tweak: Option<&[u8]>,
        plaintext: &mut [u8],
    ) -> Result<(), Error> {
        let tweak = self.tweak_halves(tweak)?;
        self.context
            .process(ciphertext, &tweak, plaintext, Direction::Decrypt)
    }

    /// Encrypt a digit string under the default tweak.
    #[cfg(feature = "alloc")]
    pub fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        self.cipher_str(plaintext, None, Direction::Encrypt)
    }

    /// Decrypt a digit string under the default tweak.
    #[cfg(feature = "alloc")]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, Error> {
        self.cipher_str(ciphertext, None, Direction::Decrypt)
    }

    /// Encrypt a digit string under an explicit 8-byte tweak.
    #[cfg(feature = "alloc")]
    pub fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(plaintext, Some(tweak), Direction::Encrypt)
    }

    /// Decrypt a digit string under an explicit 8-byte tweak.
    #[cfg(feature = "alloc")]
    pub fn decrypt_with_tweak(&self, ciphertext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(ciphertext, Some(tweak), Direction::Decrypt)
    }

    #[cfg(feature = "alloc")]
    fn cipher_str(
        &self,
        text: &str,
        tweak: Option<&[u8]>,
        direction: Direction,
    ) -> Result<String, Error> {
        let tweak = self.tweak_halves(tweak)?;
        self.context.process_str(text, &tweak, direction)
    }
}
