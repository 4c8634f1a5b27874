//! # yin-encoding
//!
//! Pronounceable base-2048 numerals. Each digit carries 11 bits of
//! information rendered as a consonant-vowel-consonant syllable, so a large
//! decimal number becomes a dotted string that is easy to read aloud or
//! transcribe:
//!
//! ```text
//! 42                   ->  bib
//! 2047                 ->  yin
//! 12345678901234567890 ->  foq.ham.bit.woh.ham.bit
//! ```
//!
//! ## Pieces
//!
//! | module | role |
//! |--------|------|
//! | [`digit`] | single-digit codec: value ↔ syllable |
//! | [`chain`] | ordered digit sequences: render, parse, evaluate |
//! | [`convert`] | streaming decimal → chain conversion on a bounded accumulator |
//!
//! ## Example
//!
//! ```
//! use yin_encoding::{convert, DigitChain};
//!
//! let chain = convert("2048").unwrap();
//! assert_eq!(chain.to_string(), "bac.bab");
//!
//! // Rendered text parses back into the same digits.
//! let reparsed = DigitChain::parse("bac.bab").unwrap();
//! assert_eq!(reparsed.value_radix2048(), Some(2048));
//! ```

pub mod chain;
pub mod convert;
pub mod digit;

pub use chain::{DigitChain, Digits};
pub use convert::{convert, ConvertError, Converter};
pub use digit::{Digit, DigitError, CONSONANTS, DIGIT_BITS, DIGIT_MASK, VOWELS};
