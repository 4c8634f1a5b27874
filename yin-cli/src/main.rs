//! Line filter turning decimal integers into pronounceable numerals.
//!
//! Reads one decimal number per stdin line and writes the rendered syllable
//! chain to stdout, one line per input line. The first non-digit character
//! is fatal: a diagnostic naming the character goes to stderr and the
//! process exits with status 3.

use std::io::{self, BufRead, Write};
use std::process;

use yin_encoding::{convert, ConvertError};

/// Exit status for a line containing a non-digit character.
const BAD_INPUT_STATUS: i32 = 3;

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    BadInput(ConvertError),
}

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = process_lines(stdin.lock(), &mut out);
    let _ = out.flush();

    match result {
        Ok(()) => {}
        Err(CliError::BadInput(ConvertError::NotADigit(c))) => {
            eprintln!("Error, {} is not a digit", c);
            process::exit(BAD_INPUT_STATUS);
        }
        Err(CliError::Io(err)) => {
            eprintln!("Error, {}", err);
            process::exit(1);
        }
    }
}

/// Convert every line of `input`, writing one rendered chain per line.
///
/// Stops at the first bad line. Each line's chain is dropped before the
/// next line is read.
fn process_lines<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line.map_err(CliError::Io)?;
        let chain = convert(&line).map_err(CliError::BadInput)?;
        writeln!(output, "{}", chain).map_err(CliError::Io)?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
