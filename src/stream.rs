//! Stream framing: the 4-byte length prefix plus the concatenation of
//! per-bucket encoded records that make up a compressed artifact.
//!
//! Equivalent to the prefix-writing and bucket loop in `vitemap_compress`,
//! and to `vitemap_extract_decompressed_sizes` / `vitemap_decompress`
//! (ViteMap, src/vite.c and src/vite.h) — the latter two are declared but
//! never defined in the original C source, so this port is grounded in the
//! distilled spec's §4.4 description rather than a line-for-line C mirror.

use crate::bucket::primitives::Bucket;
use crate::bucket::types::BUCKET_SIZE_U8;
use crate::bucket::{decode_bucket, encode_bucket};
use crate::CodecError;

/// Length of the little-endian `N` prefix at the start of every compressed
/// artifact.
pub const PREFIX_LEN: usize = 4;

/// `N` (the semantic, pre-padding input length) and the buffer size a caller
/// must allocate to decompress into. Returned by [`extract_sizes`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sizes {
    /// Original input length in bytes, as stored in the 4-byte prefix.
    pub data_size: u32,
    /// `ceil(data_size / 32) * 32` — the exact size of the decompressed
    /// output buffer, including any tail padding.
    pub buffer_size: u32,
}

#[inline]
fn num_buckets_for(data_size: u32) -> u32 {
    (data_size as u64).div_ceil(BUCKET_SIZE_U8 as u64) as u32
}

/// Encode `input` (already zero-padded to a multiple of 32 bytes) as a full
/// compressed stream into `dst`, given the true (pre-padding) length `size`.
///
/// Returns the number of bytes written to `dst`, including the 4-byte
/// prefix. Mirrors the body of `vitemap_compress`.
///
/// # Panics
/// Panics if `dst` is too small for the worst case (see
/// [`crate::context::Context::max_output_size`]) or if `input.len()` is not
/// a multiple of [`BUCKET_SIZE_U8`].
pub fn write_stream(input: &[u8], size: u32, dst: &mut [u8], scratch: &mut Bucket) -> usize {
    assert_eq!(input.len() % BUCKET_SIZE_U8, 0);

    dst[..PREFIX_LEN].copy_from_slice(&size.to_le_bytes());
    let mut cursor = PREFIX_LEN;

    for bucket_bytes in input.chunks_exact(BUCKET_SIZE_U8) {
        let bucket: Bucket = bucket_bytes.try_into().unwrap();
        cursor += encode_bucket(&bucket, &mut dst[cursor..], scratch);
    }

    cursor
}

/// Read the 4-byte prefix from `compressed` and compute the sizes a caller
/// needs to allocate a decompression output buffer.
///
/// Equivalent to `vitemap_extract_decompressed_sizes`.
pub fn extract_sizes(compressed: &[u8]) -> Result<Sizes, CodecError> {
    let prefix: [u8; PREFIX_LEN] = compressed
        .get(..PREFIX_LEN)
        .ok_or(CodecError::MalformedStream)?
        .try_into()
        .unwrap();
    let data_size = u32::from_le_bytes(prefix);
    let buffer_size = num_buckets_for(data_size)
        .checked_mul(BUCKET_SIZE_U8 as u32)
        .ok_or(CodecError::MalformedStream)?;
    Ok(Sizes {
        data_size,
        buffer_size,
    })
}

/// Decode a full compressed stream into `out`.
///
/// `out` must be at least `extract_sizes(compressed)?.buffer_size` bytes;
/// returns the semantic length `N`. Equivalent to `vitemap_decompress`.
pub fn read_stream(compressed: &[u8], out: &mut [u8]) -> Result<u32, CodecError> {
    let sizes = extract_sizes(compressed)?;
    if (out.len() as u64) < sizes.buffer_size as u64 {
        return Err(CodecError::MalformedStream);
    }

    let num_buckets = num_buckets_for(sizes.data_size);
    let mut cursor = PREFIX_LEN;
    for bucket_idx in 0..num_buckets as usize {
        let remaining = compressed
            .get(cursor..)
            .ok_or(CodecError::MalformedStream)?;
        let mut bucket: Bucket = [0u8; BUCKET_SIZE_U8];
        let consumed = decode_bucket(remaining, &mut bucket)?;
        cursor += consumed;

        let out_start = bucket_idx * BUCKET_SIZE_U8;
        out[out_start..out_start + BUCKET_SIZE_U8].copy_from_slice(&bucket);
    }

    Ok(sizes.data_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress_roundtrip(data: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let num_buckets = num_buckets_for(data.len() as u32) as usize;
        let mut padded = vec![0u8; num_buckets * BUCKET_SIZE_U8];
        padded[..data.len()].copy_from_slice(data);

        let max_output = PREFIX_LEN + num_buckets * (1 + BUCKET_SIZE_U8) + BUCKET_SIZE_U8;
        let mut compressed = vec![0u8; max_output];
        let mut scratch = [0u8; BUCKET_SIZE_U8];
        let written = write_stream(&padded, data.len() as u32, &mut compressed, &mut scratch);
        compressed.truncate(written);

        let sizes = extract_sizes(&compressed).unwrap();
        let mut decompressed = vec![0u8; sizes.buffer_size as usize];
        let n = read_stream(&compressed, &mut decompressed).unwrap();
        assert_eq!(n, data.len() as u32);

        (compressed, decompressed)
    }

    #[test]
    fn empty_stream_is_four_zero_bytes() {
        let (compressed, decompressed) = compress_roundtrip(&[]);
        assert_eq!(compressed, vec![0, 0, 0, 0]);
        assert!(decompressed.is_empty());
    }

    #[test]
    fn single_byte_input_round_trips() {
        let (_, decompressed) = compress_roundtrip(&[0x7F]);
        assert_eq!(&decompressed[..1], &[0x7F]);
    }

    #[test]
    fn exact_multiple_of_bucket_size_has_no_padding() {
        let data = vec![0xAAu8; BUCKET_SIZE_U8 * 3];
        let (_, decompressed) = compress_roundtrip(&data);
        assert_eq!(decompressed.len(), data.len());
        assert_eq!(decompressed, data);
    }

    #[test]
    fn hundred_identical_raw_buckets() {
        let data = vec![0xAAu8; BUCKET_SIZE_U8 * 100];
        let (compressed, decompressed) = compress_roundtrip(&data);
        assert_eq!(compressed.len(), PREFIX_LEN + 100 * (1 + BUCKET_SIZE_U8));
        assert_eq!(&compressed[..PREFIX_LEN], &3200u32.to_le_bytes());
        for bucket in compressed[PREFIX_LEN..].chunks_exact(1 + BUCKET_SIZE_U8) {
            assert_eq!(bucket[0], 0xA0);
            assert!(bucket[1..].iter().all(|&b| b == 0xAA));
        }
        assert_eq!(decompressed, data);
    }

    #[test]
    fn arbitrary_byte_sequence_round_trips() {
        let data: Vec<u8> = (0u32..777).map(|i| (i * 37 + 11) as u8).collect();
        let (_, decompressed) = compress_roundtrip(&data);
        assert_eq!(&decompressed[..data.len()], data.as_slice());
    }

    #[test]
    fn truncated_compressed_stream_is_malformed() {
        let data = vec![0xFFu8; BUCKET_SIZE_U8];
        let num_buckets = 1usize;
        let padded = data.clone();
        let max_output = PREFIX_LEN + num_buckets * (1 + BUCKET_SIZE_U8) + BUCKET_SIZE_U8;
        let mut compressed = vec![0u8; max_output];
        let mut scratch = [0u8; BUCKET_SIZE_U8];
        let written = write_stream(&padded, data.len() as u32, &mut compressed, &mut scratch);
        compressed.truncate(written - 1); // drop the last payload byte

        let sizes = extract_sizes(&compressed).unwrap();
        let mut out = vec![0u8; sizes.buffer_size as usize];
        let err = read_stream(&compressed, &mut out).unwrap_err();
        assert_eq!(err, CodecError::MalformedStream);
    }

    #[test]
    fn output_buffer_too_small_is_malformed() {
        let data = vec![0u8; BUCKET_SIZE_U8];
        let (compressed, _) = compress_roundtrip(&data);
        let mut out = vec![0u8; BUCKET_SIZE_U8 - 1];
        let err = read_stream(&compressed, &mut out).unwrap_err();
        assert_eq!(err, CodecError::MalformedStream);
    }
}
