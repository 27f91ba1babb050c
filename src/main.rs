//! Binary entry point for the `vitemap` command-line tool.
//!
//! Takes an input path, an output path, and a mode character (`c` compress,
//! `d` decompress). Reports input size, output size, ratio, and wall time on
//! success; exits non-zero on any I/O or mode error.

use std::time::Instant;

use vitemap::cli::args::{parse_args, Mode};
use vitemap::displaylevel;
use vitemap::io::{compress_file, decompress_file};

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("vitemap: {}", e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let result = match args.mode {
        Mode::Compress => compress_file(&args.input_path, &args.output_path),
        Mode::Decompress => decompress_file(&args.input_path, &args.output_path),
    };
    let elapsed = start.elapsed();

    match result {
        Ok((input_size, output_size)) => {
            let ratio = if input_size > 0 {
                100.0 * (1.0 - output_size as f64 / input_size as f64)
            } else {
                0.0
            };
            displaylevel!(
                2,
                "{} -> {} bytes ({:.1}%), {:.3}s",
                input_size,
                output_size,
                ratio,
                elapsed.as_secs_f64()
            );
        }
        Err(e) => {
            eprintln!("vitemap: {}", e);
            std::process::exit(1);
        }
    }
}
