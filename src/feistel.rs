//! The eight-round alternating Feistel network shared by FF3 and FF3-1.
//!
//! Each half of the message is carried as `NUM_radix(REV(half))`, the integer
//! value of its reversed digit string. That is the only form in which the
//! rounds ever read a half, and `REV(STR^m(c))` read back the same way is just
//! `c`, so no digit string is materialized between the first and last round.

use crate::block::SingleBlockCipher;
use crate::common::{
    BLOCK_LENGTH, Direction, Error, FF3_1_TWEAK_LENGTH, MAX_NUMERAL_BITS, NUM_ROUNDS,
    TWEAK_LENGTH, rev_block,
};
use crate::radix::{format_reversed, parse_reversed};

/// The 64-bit tweak split into the words mixed into odd and even rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweakHalves {
    /// `T_L`, used in odd rounds.
    pub left: [u8; 4],
    /// `T_R`, used in even rounds.
    pub right: [u8; 4],
}

impl TweakHalves {
    /// Split a 64-bit FF3 tweak.
    pub fn ff3(tweak: &[u8; TWEAK_LENGTH]) -> Self {
        let mut left = [0u8; 4];
        let mut right = [0u8; 4];
        left.copy_from_slice(&tweak[..4]);
        right.copy_from_slice(&tweak[4..]);
        Self { left, right }
    }

    /// Expand a 56-bit FF3-1 tweak: the middle byte is shared, its high
    /// nibble going to `T_L` and its low nibble to `T_R`.
    pub fn ff3_1(tweak: &[u8; FF3_1_TWEAK_LENGTH]) -> Self {
        let mut left = [0u8; 4];
        let mut right = [0u8; 4];
        left[..3].copy_from_slice(&tweak[..3]);
        left[3] = tweak[3] & 0xf0;
        right[..3].copy_from_slice(&tweak[4..]);
        right[3] = (tweak[3] & 0x0f) << 4;
        Self { left, right }
    }

    /// The equivalent 64-bit tweak, `T_L || T_R`.
    pub fn to_bytes(&self) -> [u8; TWEAK_LENGTH] {
        let mut out = [0u8; TWEAK_LENGTH];
        out[..4].copy_from_slice(&self.left);
        out[4..].copy_from_slice(&self.right);
        out
    }

    fn for_round(&self, round: u8) -> &[u8; 4] {
        if round % 2 == 0 {
            &self.right
        } else {
            &self.left
        }
    }
}

/// Per-call state: the numerals of the reversed halves `A` and `B`, plus the
/// moduli `radix^u` and `radix^v`.
#[derive(Debug)]
pub struct RoundState {
    a: u128,
    b: u128,
    mod_u: u128,
    mod_v: u128,
}

impl RoundState {
    fn modulus(&self, round: u8) -> u128 {
        if round % 2 == 0 {
            self.mod_u
        } else {
            self.mod_v
        }
    }

    fn encrypt_round<C: SingleBlockCipher>(
        &mut self,
        cipher: &C,
        tweak: &TweakHalves,
        round: u8,
    ) -> Result<(), Error> {
        let modulus = self.modulus(round);
        if self.a >= modulus {
            return Err(Error::InvalidIntermediateValue);
        }
        let y = round_function(cipher, tweak, round, self.b)? % modulus;
        let c = (self.a + y) % modulus;
        self.a = self.b;
        self.b = c;
        Ok(())
    }

    fn decrypt_round<C: SingleBlockCipher>(
        &mut self,
        cipher: &C,
        tweak: &TweakHalves,
        round: u8,
    ) -> Result<(), Error> {
        let modulus = self.modulus(round);
        if self.b >= modulus {
            return Err(Error::InvalidIntermediateValue);
        }
        let y = round_function(cipher, tweak, round, self.a)? % modulus;
        let c = (self.b + modulus - y) % modulus;
        self.b = self.a;
        self.a = c;
        Ok(())
    }
}

/// Compute `y = NUM(REV(CIPH(REV(P))))` for one round, where
/// `P = (W xor [round]^4) || [numeral]^12`.
fn round_function<C: SingleBlockCipher>(
    cipher: &C,
    tweak: &TweakHalves,
    round: u8,
    numeral: u128,
) -> Result<u128, Error> {
    if numeral >> MAX_NUMERAL_BITS != 0 {
        return Err(Error::InvalidIntermediateValue);
    }

    let mut p = [0u8; BLOCK_LENGTH];
    p[..4].copy_from_slice(tweak.for_round(round));
    p[3] ^= round;
    p[4..].copy_from_slice(&numeral.to_be_bytes()[4..]);

    let mut s = rev_block(&p);
    cipher.encrypt_block(&mut s);
    Ok(u128::from_be_bytes(rev_block(&s)))
}

/// Run the network over `src`, writing the result to `dst`.
///
/// `src` must already be validated: every digit below `radix` and a length
/// whose halves fit in 96 bits. Violations surface as
/// `InvalidIntermediateValue` or `InvalidDigit`. A `dst` whose length differs
/// from `src` is rejected with `MessageLengthOutOfBounds`.
pub fn run<C: SingleBlockCipher>(
    cipher: &C,
    radix: u32,
    tweak: &TweakHalves,
    src: &[u8],
    dst: &mut [u8],
    direction: Direction,
) -> Result<(), Error> {
    if dst.len() != src.len() {
        return Err(Error::MessageLengthOutOfBounds {
            length: dst.len(),
            min: src.len(),
            max: src.len(),
        });
    }

    let n = src.len();
    let u = n.div_ceil(2);
    let v = n - u;

    let pow = |e: usize| {
        (radix as u128)
            .checked_pow(e as u32)
            .ok_or(Error::InvalidIntermediateValue)
    };

    let (left, right) = src.split_at(u);
    let mut state = RoundState {
        a: parse_reversed(left, radix)?,
        b: parse_reversed(right, radix)?,
        mod_u: pow(u)?,
        mod_v: pow(v)?,
    };

    match direction {
        Direction::Encrypt => {
            for round in 0..NUM_ROUNDS {
                state.encrypt_round(cipher, tweak, round)?;
            }
        }
        Direction::Decrypt => {
            for round in (0..NUM_ROUNDS).rev() {
                state.decrypt_round(cipher, tweak, round)?;
            }
        }
    }

    let (out_a, out_b) = dst.split_at_mut(u);
    format_reversed(state.a, radix, out_a)?;
    format_reversed(state.b, radix, out_b)?;
    Ok(())
}
