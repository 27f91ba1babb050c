//! Thin file-driving helpers above the codec: read a whole file, run it
//! through a [`Context`] or [`decompress`], write the result.
//!
//! Equivalent in spirit to the teacher's `io` helpers that sit between the
//! CLI and the block/frame API, except there is no streaming/chunked path —
//! this codec's non-goals exclude encoding or decoding across buffer
//! boundaries, so a whole file is read into memory up front.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::{decompress, extract_sizes, Context};

/// Compress the file at `input_path`, writing the result to `output_path`.
///
/// Returns `(input_size, output_size)` in bytes.
pub fn compress_file(input_path: &Path, output_path: &Path) -> Result<(u64, u64)> {
    let data = fs::read(input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let mut ctx = Context::new(data.len() as u32)
        .with_context(|| format!("sizing context for {} bytes", data.len()))?;
    ctx.input_mut()[..data.len()].copy_from_slice(&data);
    let written = ctx
        .compress(data.len() as u32)
        .context("compressing input")?;

    fs::write(output_path, &ctx.output()[..written as usize])
        .with_context(|| format!("writing {}", output_path.display()))?;

    Ok((data.len() as u64, written as u64))
}

/// Decompress the file at `input_path`, writing the result to `output_path`.
///
/// Returns `(input_size, output_size)` in bytes, where `output_size` is the
/// semantic (pre-padding) length.
pub fn decompress_file(input_path: &Path, output_path: &Path) -> Result<(u64, u64)> {
    let compressed = fs::read(input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let sizes = extract_sizes(&compressed).context("reading stream prefix")?;
    let mut out = vec![0u8; sizes.buffer_size as usize];
    let data_size = decompress(&compressed, &mut out).context("decompressing stream")?;

    fs::write(output_path, &out[..data_size as usize])
        .with_context(|| format!("writing {}", output_path.display()))?;

    Ok((compressed.len() as u64, data_size as u64))
}
