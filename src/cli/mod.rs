//! Command-line argument parsing and display-level plumbing for the `vitemap`
//! binary.

pub mod args;
pub mod constants;
