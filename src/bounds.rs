//! Message length bounds derived from the radix.

use crate::common::{Error, MAX_NUMERAL_BITS, MAX_RADIX, MIN_RADIX};

/// Minimum domain size (`radix^minLen`) for FF3.
pub const FF3_MIN_DOMAIN: u128 = 100;

/// Minimum domain size (`radix^minLen`) for FF3-1.
pub const FF3_1_MIN_DOMAIN: u128 = 1_000_000;

/// Inclusive range of message lengths a context accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBounds {
    pub min_len: usize,
    pub max_len: usize,
}

impl MessageBounds {
    /// Bounds for FF3: `minLen = ceil(log_radix(100))`,
    /// `maxLen = 2 * floor(96 / log2(radix))`.
    ///
    /// # Errors
    /// `InvalidRadix` if the radix is unsupported, `InvalidLengthRange` if the
    /// derived bounds are inconsistent.
    pub fn for_radix(radix: u32) -> Result<Self, Error> {
        Self::with_min_domain(radix, FF3_MIN_DOMAIN)
    }

    /// Bounds for FF3-1, which requires `radix^minLen >= 1_000_000`.
    pub fn for_radix_ff3_1(radix: u32) -> Result<Self, Error> {
        Self::with_min_domain(radix, FF3_1_MIN_DOMAIN)
    }

    fn with_min_domain(radix: u32, min_domain: u128) -> Result<Self, Error> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Error::InvalidRadix);
        }

        let min_len = min_digits_covering(radix, min_domain);
        let max_len = 2 * max_digits_within(radix, MAX_NUMERAL_BITS);
        let limit = max_digits_within(radix, 2 * MAX_NUMERAL_BITS);

        if min_len < 2 || max_len < min_len || max_len > limit {
            return Err(Error::InvalidLengthRange);
        }
        Ok(Self { min_len, max_len })
    }

    /// Whether a message of `len` digits is accepted.
    pub const fn contains(&self, len: usize) -> bool {
        self.min_len <= len && len <= self.max_len
    }

    /// Reject lengths outside the bounds.
    pub fn check(&self, len: usize) -> Result<(), Error> {
        if self.contains(len) {
            Ok(())
        } else {
            Err(Error::MessageLengthOutOfBounds {
                length: len,
                min: self.min_len,
                max: self.max_len,
            })
        }
    }
}

/// Smallest `k` such that `radix^k >= domain`.
pub const fn min_digits_covering(radix: u32, domain: u128) -> usize {
    assert!(radix >= 2);

    let mut k = 0;
    let mut capacity: u128 = 1;
    while capacity < domain {
        capacity = capacity.saturating_mul(radix as u128);
        k += 1;
    }
    k
}

/// Largest `k` such that `radix^k <= 2^bits`, computed exactly.
///
/// `bits` must be below 256.
pub const fn max_digits_within(radix: u32, bits: u32) -> usize {
    assert!(radix >= 2 && bits < 256);

    let mut power = [1u64, 0, 0, 0];
    let mut k = 0;
    loop {
        let mut next = [0u64; 4];
        let mut carry: u128 = 0;
        let mut i = 0;
        while i < 4 {
            let t = power[i] as u128 * radix as u128 + carry;
            next[i] = t as u64;
            carry = t >> 64;
            i += 1;
        }
        if carry != 0 || exceeds_power_of_two(next, bits) {
            return k;
        }
        power = next;
        k += 1;
    }
}

// value > 2^bits, for value >= 1
const fn exceeds_power_of_two(value: [u64; 4], bits: u32) -> bool {
    let mut v = value;
    let mut i = 0;
    while i < 4 {
        if v[i] == 0 {
            v[i] = u64::MAX;
            i += 1;
        } else {
            v[i] -= 1;
            break;
        }
    }

    let mut i = 0;
    while i < 4 {
        let lo = i as u32 * 64;
        if bits <= lo {
            if v[i] != 0 {
                return true;
            }
        } else if bits < lo + 64 && v[i] >> (bits - lo) != 0 {
            return true;
        }
        i += 1;
    }
    false
}
