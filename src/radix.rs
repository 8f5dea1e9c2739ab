//! Conversion between digit strings and integers in radix 2 through 36.
//!
//! Digits are carried as values `0..radix`. Their textual form uses `0-9`
//! followed by `a-z`; parsing text is case-insensitive and formatting always
//! produces lowercase.
//!
//! FF3 reads each half of the message as the numeral of its *reversed* digit
//! string, so the `_reversed` variants are what the Feistel rounds use.

use crate::common::{Error, MAX_RADIX, MIN_RADIX};

#[cfg(feature = "alloc")]
use alloc::string::String;

const ALPHABET: &[u8; MAX_RADIX as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_radix(radix: u32) -> Result<(), Error> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::RadixOverflow)
    }
}

/// Value of an ASCII symbol in the given radix, if it is a valid digit.
pub const fn digit_value(symbol: u8, radix: u32) -> Option<u8> {
    let value = match symbol {
        b'0'..=b'9' => symbol - b'0',
        b'a'..=b'z' => symbol - b'a' + 10,
        b'A'..=b'Z' => symbol - b'A' + 10,
        _ => return None,
    };
    if (value as u32) < radix {
        Some(value)
    } else {
        None
    }
}

/// Canonical lowercase symbol for a digit value.
pub const fn digit_char(digit: u8) -> Option<u8> {
    if (digit as u32) < MAX_RADIX {
        Some(ALPHABET[digit as usize])
    } else {
        None
    }
}

/// Parse big-endian digits into an integer (`NUM_radix`).
///
/// # Errors
/// `RadixOverflow` for an unsupported radix, `InvalidDigit` if a digit is not
/// below the radix, `InvalidIntermediateValue` if the numeral exceeds 128 bits.
pub fn parse(digits: &[u8], radix: u32) -> Result<u128, Error> {
    parse_iter(digits.iter().copied(), radix)
}

/// Parse the reverse of `digits`, i.e. treat them as little-endian.
pub fn parse_reversed(digits: &[u8], radix: u32) -> Result<u128, Error> {
    parse_iter(digits.iter().rev().copied(), radix)
}

fn parse_iter(digits: impl Iterator<Item = u8>, radix: u32) -> Result<u128, Error> {
    check_radix(radix)?;

    let mut value: u128 = 0;
    for digit in digits {
        if digit as u32 >= radix {
            return Err(Error::InvalidDigit);
        }
        value = value
            .checked_mul(radix as u128)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(Error::InvalidIntermediateValue)?;
    }
    Ok(value)
}

/// Write `value` as big-endian digits, left-padded with zeros to fill `output`
/// (`STR^m_radix` with `m = output.len()`).
///
/// # Errors
/// `RadixOverflow` for an unsupported radix, `InvalidIntermediateValue` if the
/// value needs more than `output.len()` digits.
pub fn format(value: u128, radix: u32, output: &mut [u8]) -> Result<(), Error> {
    check_radix(radix)?;

    let mut remaining = value;
    for digit in output.iter_mut().rev() {
        *digit = (remaining % radix as u128) as u8;
        remaining /= radix as u128;
    }
    if remaining != 0 {
        return Err(Error::InvalidIntermediateValue);
    }
    Ok(())
}

/// Write the reverse of the zero-padded representation of `value`.
pub fn format_reversed(value: u128, radix: u32, output: &mut [u8]) -> Result<(), Error> {
    format(value, radix, output)?;
    reverse(output);
    Ok(())
}

/// Reverse a digit string in place.
#[inline]
pub fn reverse(digits: &mut [u8]) {
    digits.reverse();
}

/// Decode text into digit values, one digit per byte of `text`.
///
/// `output` must be exactly `text.len()` long, otherwise
/// `MessageLengthOutOfBounds` is returned and `output` is left untouched.
pub fn digits_from_str(text: &str, radix: u32, output: &mut [u8]) -> Result<(), Error> {
    check_radix(radix)?;
    if output.len() != text.len() {
        return Err(Error::MessageLengthOutOfBounds {
            length: output.len(),
            min: text.len(),
            max: text.len(),
        });
    }

    for (digit, &symbol) in output.iter_mut().zip(text.as_bytes()) {
        *digit = digit_value(symbol, radix).ok_or(Error::InvalidDigit)?;
    }
    Ok(())
}

/// Render digit values as lowercase text.
#[cfg(feature = "alloc")]
pub fn digits_to_string(digits: &[u8]) -> Result<String, Error> {
    digits
        .iter()
        .map(|&d| digit_char(d).map(char::from).ok_or(Error::InvalidDigit))
        .collect()
}
