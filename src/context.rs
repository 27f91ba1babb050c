//! Codec context: the pre-sized owning container for input, output, and
//! scratch buffers that backs repeated `compress` calls.
//!
//! Equivalent to the `Vitemap` struct and `vitemap_create` / `vitemap_compress`
//! in ViteMap's src/vite.h and src/vite.c. Decoding does not need a context
//! (see [`crate::stream::read_stream`]); it is a compression-only concern
//! because only the encoder needs a reusable scratch bucket and a sized
//! output buffer across many calls.

use std::fmt;

use crate::bucket::primitives::Bucket;
use crate::bucket::types::BUCKET_SIZE_U8;
use crate::stream::{write_stream, PREFIX_LEN};

/// Errors surfaced at the codec API boundary.
///
/// Mirrors the style of the teacher crate's frame-level error enum: a flat,
/// `Copy` enum with a hand-written [`fmt::Display`] and a blanket
/// [`std::error::Error`] impl, rather than pulling in an error-derive crate
/// for two variants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CodecError {
    /// `Context::new` was asked for an `upper_size` whose bucket-rounded
    /// sizing overflows `u32`, or `Context::compress` was called with a
    /// `size` greater than [`Context::max_input_size`].
    CapacityExceeded,
    /// The compressed stream is truncated, carries the reserved descriptor
    /// category, or the caller's output buffer is smaller than required.
    MalformedStream,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CodecError::CapacityExceeded => "input size exceeds the context's capacity",
            CodecError::MalformedStream => "compressed stream is malformed or truncated",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CodecError {}

#[inline]
fn round_up_to_bucket(size: u32) -> Result<u32, CodecError> {
    let full_buckets = size / BUCKET_SIZE_U8 as u32;
    let remainder = size % BUCKET_SIZE_U8 as u32;
    let num_buckets = full_buckets + if remainder > 0 { 1 } else { 0 };
    num_buckets
        .checked_mul(BUCKET_SIZE_U8 as u32)
        .ok_or(CodecError::CapacityExceeded)
}

/// Owns the three buffers a series of `compress` calls needs: the zero-padded
/// input, the worst-case-sized output, and a one-bucket scratch region used
/// by the sparse-inverted encoding branch.
///
/// Equivalent to `Vitemap`. There is no `destroy` — dropping a `Context`
/// releases its buffers via `Vec`'s own `Drop` impl.
pub struct Context {
    input: Vec<u8>,
    max_input_size: u32,

    output: Vec<u8>,
    max_output_size: u32,

    scratch: Bucket,
}

impl Context {
    /// Allocate a context sized for inputs up to `upper_size` bytes.
    ///
    /// `upper_size` of 0 is permitted and yields a zero-bucket context whose
    /// `compress` call produces the four-byte stream `[0, 0, 0, 0]`.
    ///
    /// Equivalent to `vitemap_create`.
    pub fn new(upper_size: u32) -> Result<Context, CodecError> {
        let max_input_size = round_up_to_bucket(upper_size)?;
        let num_buckets = max_input_size / BUCKET_SIZE_U8 as u32;

        // Worst case: every bucket raw (1 descriptor byte + 32 payload
        // bytes), plus the prefix, plus one extra bucket of tail slack for
        // the compaction primitive's overrun-write contract (see
        // `bucket::primitives::extract_and_compact` and the "Tail-overrun
        // write contract" design note).
        let per_bucket_worst_case = (1 + BUCKET_SIZE_U8) as u32;
        let max_output_size = num_buckets
            .checked_mul(per_bucket_worst_case)
            .and_then(|v| v.checked_add(PREFIX_LEN as u32))
            .and_then(|v| v.checked_add(BUCKET_SIZE_U8 as u32))
            .ok_or(CodecError::CapacityExceeded)?;

        Ok(Context {
            input: vec![0u8; max_input_size as usize],
            max_input_size,
            output: vec![0u8; max_output_size as usize],
            max_output_size,
            scratch: [0u8; BUCKET_SIZE_U8],
        })
    }

    /// Maximum input size (rounded up to the nearest bucket multiple) this
    /// context accepts.
    #[inline]
    pub fn max_input_size(&self) -> u32 {
        self.max_input_size
    }

    /// Worst-case compressed output size this context's buffer can hold.
    #[inline]
    pub fn max_output_size(&self) -> u32 {
        self.max_output_size
    }

    /// The input buffer callers write the plaintext bitmap into before
    /// calling [`Context::compress`].
    #[inline]
    pub fn input_mut(&mut self) -> &mut [u8] {
        &mut self.input
    }

    /// The output buffer `compress` writes into; valid through
    /// `output()[..n]` where `n` is `compress`'s return value.
    #[inline]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Compress the first `size` bytes of [`Context::input_mut`], writing
    /// the result into [`Context::output`]. Returns the number of valid
    /// bytes written.
    ///
    /// Equivalent to `vitemap_compress`. Returns
    /// `Err(CodecError::CapacityExceeded)` when `size` exceeds
    /// `self.max_input_size()` — the distilled spec's §9 "Open questions"
    /// elevates this from an unenforced assumption in the original source to
    /// a mandatory boundary check here.
    pub fn compress(&mut self, size: u32) -> Result<u32, CodecError> {
        if size > self.max_input_size {
            return Err(CodecError::CapacityExceeded);
        }

        // Tail bytes of the final (possibly partial) bucket beyond `size`
        // are whatever was previously written to `self.input` — callers
        // must not depend on them, per §3's padding invariant. Bucket count
        // is derived from `size`, not `self.max_input_size` — a context
        // reused for an input smaller than its bound must still emit exactly
        // `ceil(size/32)` buckets, not one bucket per byte of its capacity.
        let num_buckets = (size as usize).div_ceil(BUCKET_SIZE_U8);
        let input = &self.input[..num_buckets * BUCKET_SIZE_U8];
        let written = write_stream(input, size, &mut self.output, &mut self.scratch);
        Ok(written as u32)
    }
}
