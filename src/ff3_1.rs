//! FF3-1 format-preserving encryption (NIST SP 800-38G Rev. 1).
//!
//! FF3-1 is FF3 with a 56-bit tweak and a larger minimum domain
//! (`radix^minLen >= 1_000_000`). The tweak is expanded to the 64-bit form the
//! rounds consume by splitting its middle byte between the two halves; the
//! Feistel network, key handling and validation are shared with FF3.

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::block::{AesCipher, SingleBlockCipher};
use crate::bounds::MessageBounds;
use crate::common::{Direction, Error, FF3_1_TWEAK_LENGTH};
use crate::context::Context;
use crate::feistel::TweakHalves;

/// FF3-1 cipher bound to a radix, a key and a default tweak.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone)]
pub struct Ff3_1<C: SingleBlockCipher = AesCipher> {
    context: Context<C>,
    tweak: [u8; FF3_1_TWEAK_LENGTH],
}

impl Ff3_1<AesCipher> {
    /// Create an FF3-1 cipher over AES, the variant chosen by key length.
    ///
    /// # Errors
    /// `InvalidKeyLength`, `InvalidRadix`, `InvalidLengthRange` or
    /// `InvalidTweakLength` (the tweak must be 7 bytes).
    pub fn new(radix: u32, key: &[u8], tweak: &[u8]) -> Result<Self, Error> {
        Self::with_cipher(radix, key, tweak, AesCipher::new)
    }
}

impl<C: SingleBlockCipher> Ff3_1<C> {
    /// Tweak length in bytes.
    pub const TWEAK_LENGTH: usize = FF3_1_TWEAK_LENGTH;

    /// Create an FF3-1 cipher over a caller-supplied block cipher.
    pub fn with_cipher<F>(radix: u32, key: &[u8], tweak: &[u8], keyed: F) -> Result<Self, Error>
    where
        F: FnOnce(&[u8]) -> Result<C, Error>,
    {
        let context = Context::new(radix, key, MessageBounds::for_radix_ff3_1, keyed)?;
        let tweak = tweak
            .try_into()
            .map_err(|_| Error::InvalidTweakLength)?;
        Ok(Self { context, tweak })
    }

    pub fn radix(&self) -> u32 {
        self.context.radix()
    }

    pub fn bounds(&self) -> MessageBounds {
        self.context.bounds()
    }

    pub fn key_length(&self) -> usize {
        self.context.key_length()
    }

    pub fn tweak(&self) -> &[u8; FF3_1_TWEAK_LENGTH] {
        &self.tweak
    }

    fn tweak_halves(&self, tweak: Option<&[u8]>) -> Result<TweakHalves, Error> {
        let tweak: &[u8; FF3_1_TWEAK_LENGTH] = match tweak {
            None => &self.tweak,
            Some(t) => t.try_into().map_err(|_| Error::InvalidTweakLength)?,
        };
        Ok(TweakHalves::ff3_1(tweak))
    }

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

    #[cfg(feature = "alloc")]
    pub fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        self.cipher_str(plaintext, None, Direction::Encrypt)
    }

    #[cfg(feature = "alloc")]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, Error> {
        self.cipher_str(ciphertext, None, Direction::Decrypt)
    }

    #[cfg(feature = "alloc")]
    pub fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(plaintext, Some(tweak), Direction::Encrypt)
    }

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
