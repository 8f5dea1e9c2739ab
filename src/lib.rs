//! FF3 and FF3-1 format-preserving encryption.
//!
//! This crate implements the FF3 mode of NIST SP 800-38G and its revision
//! FF3-1: an 8-round alternating Feistel network over strings of digits in
//! radix 2 through 36, with AES-128, AES-192 or AES-256 as the round function.
//!
//! # Overview
//!
//! Format-preserving encryption maps a digit string to another digit string of
//! the same length and alphabet. Typical uses:
//! - Credit card and account numbers (decimal)
//! - Identifiers stored in fixed-width columns
//! - Tokenization without schema changes
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "alloc")] {
//! use ff3::Ff3;
//!
//! let key = [
//!     0xef, 0x43, 0x59, 0xd8, 0xd5, 0x80, 0xaa, 0x4f,
//!     0x7f, 0x03, 0x6d, 0x6f, 0x04, 0xfc, 0x6a, 0x94,
//! ];
//! let tweak = [0xd8, 0xe7, 0x92, 0x0a, 0xfa, 0x33, 0x0a, 0x73];
//!
//! let cipher = Ff3::new(10, &key, &tweak).unwrap();
//! let ciphertext = cipher.encrypt("890121234567890000").unwrap();
//! assert_eq!(ciphertext, "750918814058654607");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "890121234567890000");
//! # }
//! ```
//!
//! ## Digit arrays and per-call tweaks
//!
//! ```rust
//! use ff3::Ff3;
//!
//! let cipher = Ff3::new(36, &[0u8; 32], &[0u8; 8]).unwrap();
//!
//! let plaintext = [1u8, 35, 2, 34, 3, 33];
//! let mut ciphertext = [0u8; 6];
//! cipher.encrypt_digits(&plaintext, Some(b"per-call"), &mut ciphertext).unwrap();
//! assert!(ciphertext.iter().all(|&d| d < 36));
//!
//! let mut decrypted = [0u8; 6];
//! cipher.decrypt_digits(&ciphertext, Some(b"per-call"), &mut decrypted).unwrap();
//! assert_eq!(plaintext, decrypted);
//! ```
//!
//! # Security Considerations
//!
//! - FF3 is withdrawn by NIST in favour of FF3-1; prefer [`Ff3_1`] for new data
//! - Small domains (short messages in a small radix) leak structure; keep
//!   `radix^length` large
//! - **No authentication**: the ciphertext is malleable
//! - Messages consisting only of zero digits are rejected, as in deployed FF3
//!   implementations; such a plaintext cannot be encrypted and such a
//!   ciphertext cannot be decrypted
//!
//! # Feature Flags
//!
//! - `std` (default): implements `std::error::Error`, implies `alloc`
//! - `alloc`: string-based `encrypt`/`decrypt` API
//! - Without either, the crate is `no_std` and allocation-free

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod block;
pub mod bounds;
pub mod common;
pub mod context;
pub mod feistel;
pub mod ff3;
pub mod ff3_1;
pub mod radix;

#[cfg(test)]
mod cross_check;

pub use block::{AesCipher, SingleBlockCipher};
pub use bounds::MessageBounds;
pub use common::{Direction, Error};
pub use ff3::Ff3;
pub use ff3_1::Ff3_1;
