//! Streaming decimal to base-2048 conversion.
//!
//! # Core Insight
//!
//! Horner accumulation (`acc = acc * 10 + d`) interleaved with 11-bit
//! extraction keeps the working integer at or below `2047 * 10 + 9 = 20479`,
//! so a line of any length converts with a single `u32` accumulator and no
//! arbitrary-precision arithmetic. At most one extraction can fire per input
//! character.
//!
//! # Digit ordering
//!
//! Every extracted chunk is installed as the new chain head, so the finished
//! chain runs most-recently-extracted first. When all extraction happens on
//! the final input character (always the case for values up to 20479), the
//! chain reads as a plain radix-2048 numeral, most significant digit first:
//!
//! | input  | digits   | syllables |
//! |--------|----------|-----------|
//! | `0`    | `[0]`    | `bab`     |
//! | `2047` | `[2047]` | `yin`     |
//! | `2048` | `[1, 0]` | `bac.bab` |
//!
//! For longer inputs, chunks peeled mid-stream are not rescaled by the
//! decimal steps that follow them: `100000` emits `[40, 1808]`, not the
//! positional `[48, 1696]`. The emitted sequence is this converter's own
//! numeral form; rendered output in circulation depends on it, so the
//! ordering and the mid-stream extraction points are part of the format.

use thiserror::Error;

use crate::chain::DigitChain;
use crate::digit::{Digit, DIGIT_BITS, DIGIT_MASK};

/// Errors from feeding input text to the converter.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    #[error("'{0}' is not a digit")]
    NotADigit(char),
}

/// Convert a line of decimal digits into a digit chain in one pass.
///
/// A `\n` anywhere in the input is skipped; every other non-digit character
/// fails with [`ConvertError::NotADigit`]. The empty line converts to the
/// single zero digit.
pub fn convert(text: &str) -> Result<DigitChain, ConvertError> {
    let mut converter = Converter::new();
    for c in text.chars() {
        converter.push(c)?;
    }
    Ok(converter.finish())
}

// ============================================================================
// INCREMENTAL CONVERTER
// ============================================================================

/// Converter state: the bounded accumulator plus the chain built so far.
///
/// Feed characters with [`push`](Converter::push) as they arrive, then call
/// [`finish`](Converter::finish) once the line is complete. [`convert`] is
/// the one-shot form.
#[derive(Debug, Default)]
pub struct Converter {
    acc: u32,
    chain: DigitChain,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one input character.
    pub fn push(&mut self, c: char) -> Result<(), ConvertError> {
        if c == '\n' {
            return Ok(());
        }
        let d = c.to_digit(10).ok_or(ConvertError::NotADigit(c))?;

        // acc is at most DIGIT_MASK here, so this tops out at 20479.
        self.acc = self.acc * 10 + d;

        while self.acc > DIGIT_MASK {
            self.extract();
        }
        Ok(())
    }

    /// Flush the accumulator and hand back the finished chain.
    ///
    /// The final extraction is unconditional: even a zero accumulator
    /// becomes a digit, so every input yields at least one node.
    pub fn finish(mut self) -> DigitChain {
        self.extract();
        self.chain
    }

    // Peel the low 11 bits into a new head node, keep the high remainder.
    fn extract(&mut self) {
        self.chain.push_front(Digit::from_masked(self.acc));
        self.acc >>= DIGIT_BITS;
    }
}

// ============================================================================
// TESTS
// ============================================================================
