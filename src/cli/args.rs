//! Command-line argument parsing for the `vitemap` binary.
//!
//! The external interface is deliberately minimal: an input path, an output
//! path, and a mode character. The entry point is [`parse_args`], which reads
//! `std::env::args()`; [`parse_args_from`] takes an explicit slice for
//! unit-testing.
//!
//! Bad usage returns an `Err` with a human-readable message, following the
//! teacher's own `anyhow`-based argument-parsing error convention.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Which direction to run the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

/// Parsed command-line arguments: an input path, an output path, and a mode.
#[derive(Debug)]
pub struct ParsedArgs {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub mode: Mode,
}

/// Parse `std::env::args()`, skipping `argv[0]`.
pub fn parse_args() -> Result<ParsedArgs> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parse an explicit argument slice (excluding the program name).
///
/// Expects exactly three arguments: `<input> <output> <c|d>`.
pub fn parse_args_from(args: &[String]) -> Result<ParsedArgs> {
    let [input, output, mode] = args else {
        return Err(anyhow!(
            "bad usage: expected exactly 3 arguments, got {} (usage: vitemap <input> <output> <c|d>)",
            args.len()
        ));
    };

    let mode = match mode.as_str() {
        "c" => Mode::Compress,
        "d" => Mode::Decompress,
        other => {
            return Err(anyhow!(
                "bad usage: mode must be 'c' or 'd', got '{}'",
                other
            ))
        }
    };

    Ok(ParsedArgs {
        input_path: PathBuf::from(input),
        output_path: PathBuf::from(output),
        mode,
    })
}
