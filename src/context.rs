//! Validated cipher context shared by FF3 and FF3-1.
//!
//! A context binds a radix, its message bounds and a block cipher keyed with
//! the byte-reversed key. It holds no per-call state, so one context can serve
//! any number of concurrent calls.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec};

use crate::block::SingleBlockCipher;
use crate::bounds::MessageBounds;
use crate::common::{Direction, Error, KEY_LENGTHS, MAX_KEY_LENGTH};
use crate::feistel::{self, TweakHalves};
#[cfg(feature = "alloc")]
use crate::radix::{digits_from_str, digits_to_string};

#[derive(Debug, Clone)]
pub struct Context<C> {
    cipher: C,
    radix: u32,
    bounds: MessageBounds,
    key_length: usize,
}

impl<C: SingleBlockCipher> Context<C> {
    /// Validate parameters and key the block cipher.
    ///
    /// `bounds_for` derives the mode's length bounds from the radix. `keyed`
    /// receives the key with its bytes in reverse order; that reversal is part
    /// of the FF3 construction and is required to match published vectors.
    ///
    /// # Errors
    /// `InvalidKeyLength`, `InvalidRadix` or `InvalidLengthRange`, checked in
    /// that order, or whatever `keyed` reports.
    pub fn new<F>(
        radix: u32,
        key: &[u8],
        bounds_for: fn(u32) -> Result<MessageBounds, Error>,
        keyed: F,
    ) -> Result<Self, Error>
    where
        F: FnOnce(&[u8]) -> Result<C, Error>,
    {
        if !KEY_LENGTHS.contains(&key.len()) {
            return Err(Error::InvalidKeyLength);
        }
        let bounds = bounds_for(radix)?;

        let mut reversed_key = [0u8; MAX_KEY_LENGTH];
        let reversed_key = &mut reversed_key[..key.len()];
        reversed_key.copy_from_slice(key);
        reversed_key.reverse();
        let cipher = keyed(reversed_key)?;

        Ok(Self {
            cipher,
            radix,
            bounds,
            key_length: key.len(),
        })
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn bounds(&self) -> MessageBounds {
        self.bounds
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Validate a message and run the Feistel network over it.
    ///
    /// The message must be within bounds, use only digits below the radix and
    /// contain at least one nonzero digit.
    pub fn process(
        &self,
        src: &[u8],
        tweak: &TweakHalves,
        dst: &mut [u8],
        direction: Direction,
    ) -> Result<(), Error> {
        self.bounds.check(src.len())?;
        if dst.len() != src.len() {
            return Err(Error::MessageLengthOutOfBounds {
                length: dst.len(),
                min: src.len(),
                max: src.len(),
            });
        }

        if src.iter().any(|&d| d as u32 >= self.radix) {
            return Err(direction.invalid_input());
        }
        // All-zero messages are rejected for compatibility with deployed FF3
        // implementations, even though they are members of the domain.
        if src.iter().all(|&d| d == 0) {
            return Err(direction.invalid_input());
        }

        feistel::run(&self.cipher, self.radix, tweak, src, dst, direction)
    }

    /// Text form of [`Context::process`].
    #[cfg(feature = "alloc")]
    pub fn process_str(
        &self,
        text: &str,
        tweak: &TweakHalves,
        direction: Direction,
    ) -> Result<String, Error> {
        self.bounds.check(text.len())?;

        let mut digits = vec![0u8; text.len()];
        digits_from_str(text, self.radix, &mut digits).map_err(|_| direction.invalid_input())?;

        let mut output = vec![0u8; digits.len()];
        self.process(&digits, tweak, &mut output, direction)?;
        digits_to_string(&output)
    }
}
