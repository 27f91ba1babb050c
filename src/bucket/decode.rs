//! Per-bucket decoding: interpret a descriptor byte and payload, reconstruct
//! exactly 256 bits into the output buffer.
//!
//! The original ViteMap C source (src/vite.c) never implements the
//! decompression half described in vite.h; this module is this crate's
//! from-scratch, spec-grounded decoder, written to the C encoder's mirror
//! image and in the house style of the rest of this module.

use super::primitives::{expand_and_scatter, invert_256, Bucket};
use super::types::{descriptor_category, descriptor_len, Category, BUCKET_SIZE_U8};
use crate::CodecError;

/// Decode one bucket starting at `compressed[0]` (the descriptor byte),
/// writing 32 bytes to `out`. Returns the number of compressed bytes
/// consumed (`1 + payload_len`).
///
/// Equivalent to one iteration of the bucket loop the distilled spec
/// describes in §4.3; there is no C original to mirror.
pub fn decode_bucket(compressed: &[u8], out: &mut Bucket) -> Result<usize, CodecError> {
    let descriptor = *compressed
        .first()
        .ok_or(CodecError::MalformedStream)?;
    let payload_len = descriptor_len(descriptor) as usize;
    let category = descriptor_category(descriptor);

    let payload_end = 1usize
        .checked_add(payload_len)
        .ok_or(CodecError::MalformedStream)?;
    let payload = compressed
        .get(1..payload_end)
        .ok_or(CodecError::MalformedStream)?;

    match category {
        Category::SparsePositive => {
            expand_and_scatter(payload, out);
            Ok(payload_end)
        }
        Category::SparseInverted => {
            expand_and_scatter(payload, out);
            let scattered = *out;
            invert_256(&scattered, out);
            Ok(payload_end)
        }
        Category::Raw => {
            if payload_len != BUCKET_SIZE_U8 {
                return Err(CodecError::MalformedStream);
            }
            out.copy_from_slice(payload);
            Ok(payload_end)
        }
        Category::Reserved => Err(CodecError::MalformedStream),
    }
}
