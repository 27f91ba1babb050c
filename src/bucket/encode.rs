//! Per-bucket encoding: the decision ladder that picks sparse-positive,
//! sparse-inverted, or raw, and writes the descriptor byte plus payload.
//!
//! Equivalent to the bucket loop body inside `vitemap_compress` (ViteMap,
//! src/vite.c).

use super::primitives::{extract_and_compact, invert_256, popcount_256};
use super::types::{make_descriptor, Category, BUCKET_SIZE, BUCKET_SIZE_U8};
use crate::bucket::primitives::Bucket;

/// Encode one 256-bit bucket into `dst`, writing the descriptor byte
/// followed by its payload. Returns the number of bytes written
/// (`1 + payload_len`).
///
/// `scratch` is reused across calls to avoid a fresh allocation per bucket
/// for the sparse-inverted branch (mirrors `vm->helper_bucket` in the C
/// source).
///
/// # Panics
/// Panics if `dst` has fewer than `1 + BUCKET_SIZE_U8` bytes of room. Callers
/// size their output buffer with exactly this worst case per bucket (see
/// [`crate::context::Context`]).
pub fn encode_bucket(bucket: &Bucket, dst: &mut [u8], scratch: &mut Bucket) -> usize {
    let population = popcount_256(bucket) as usize;

    if population < BUCKET_SIZE_U8 {
        dst[0] = make_descriptor(population as u8, Category::SparsePositive);
        let written = extract_and_compact(bucket, &mut dst[1..]);
        debug_assert_eq!(written, population);
        1 + written
    } else if BUCKET_SIZE - population < BUCKET_SIZE_U8 {
        let inverted_population = BUCKET_SIZE - population;
        dst[0] = make_descriptor(inverted_population as u8, Category::SparseInverted);
        invert_256(bucket, scratch);
        let written = extract_and_compact(scratch, &mut dst[1..]);
        debug_assert_eq!(written, inverted_population);
        1 + written
    } else {
        dst[0] = make_descriptor(BUCKET_SIZE_U8 as u8, Category::Raw);
        dst[1..1 + BUCKET_SIZE_U8].copy_from_slice(bucket);
        1 + BUCKET_SIZE_U8
    }
}
