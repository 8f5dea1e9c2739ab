//! Constants and the error type shared by the FF3 and FF3-1 implementations.

/// Block length of the underlying cipher in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// Accepted AES key lengths in bytes.
pub const KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Longest accepted key in bytes.
pub const MAX_KEY_LENGTH: usize = 32;

/// FF3 tweak length in bytes (64 bits).
pub const TWEAK_LENGTH: usize = 8;

/// FF3-1 tweak length in bytes (56 bits).
pub const FF3_1_TWEAK_LENGTH: usize = 7;

/// Number of Feistel rounds.
pub const NUM_ROUNDS: u8 = 8;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits `0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Bit width of the numeral carried in the low 12 bytes of a round block.
pub const MAX_NUMERAL_BITS: u32 = 96;

/// Unified error type for all FF3 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key is not 16, 24 or 32 bytes long.
    InvalidKeyLength,
    /// Radix is outside `[MIN_RADIX, MAX_RADIX]`.
    InvalidRadix,
    /// The radix admits no valid message length.
    InvalidLengthRange,
    /// Tweak has the wrong length for the mode.
    InvalidTweakLength,
    /// Message length is outside the bounds derived from the radix.
    MessageLengthOutOfBounds {
        length: usize,
        min: usize,
        max: usize,
    },
    /// Plaintext contains a symbol outside the alphabet, or is all zeros.
    InvalidPlaintext,
    /// Ciphertext contains a symbol outside the alphabet, or is all zeros.
    InvalidCiphertext,
    /// A round produced a numeral that does not fit its half.
    InvalidIntermediateValue,
    /// Radix passed to the codec is outside `[MIN_RADIX, MAX_RADIX]`.
    RadixOverflow,
    /// A digit value is out of range for the radix.
    InvalidDigit,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "key must be 16, 24 or 32 bytes"),
            Error::InvalidRadix => {
                write!(f, "radix must be between {MIN_RADIX} and {MAX_RADIX}")
            }
            Error::InvalidLengthRange => write!(f, "radix admits no valid message length"),
            Error::InvalidTweakLength => write!(f, "invalid tweak length"),
            Error::MessageLengthOutOfBounds { length, min, max } => write!(
                f,
                "message length {length} outside bounds [{min}, {max}]"
            ),
            Error::InvalidPlaintext => write!(f, "invalid plaintext"),
            Error::InvalidCiphertext => write!(f, "invalid ciphertext"),
            Error::InvalidIntermediateValue => write!(f, "invalid intermediate value"),
            Error::RadixOverflow => write!(f, "radix out of range for codec"),
            Error::InvalidDigit => write!(f, "digit out of range for radix"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Direction of cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Error reported for a malformed input message in this direction.
    pub(crate) fn invalid_input(self) -> Error {
        match self {
            Direction::Encrypt => Error::InvalidPlaintext,
            Direction::Decrypt => Error::InvalidCiphertext,
        }
    }
}

/// Reverse the byte order of a 16-byte block.
#[inline]
pub fn rev_block(block: &[u8; BLOCK_LENGTH]) -> [u8; BLOCK_LENGTH] {
    let mut out = *block;
    out.reverse();
    out
}
