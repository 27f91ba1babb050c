//! A bitmap compression codec: partitions a dense bitstream into fixed-width
//! 256-bit buckets and picks a per-bucket representation (sparse-positive,
//! sparse-inverted, or raw) by population count.
//!
//! See [`context::Context`] for the owning encode-side API and
//! [`stream::read_stream`] / [`decompress`] for decoding.

pub mod bucket;
pub mod cli;
pub mod context;
pub mod io;
pub mod stream;

pub use context::{CodecError, Context};
pub use stream::{extract_sizes, Sizes};

/// Decode a full compressed stream into `out`.
///
/// `out` must be at least `extract_sizes(compressed)?.buffer_size` bytes;
/// returns the semantic length `N`. Thin re-export of [`stream::read_stream`]
/// under the name the external interface documents.
pub fn decompress(compressed: &[u8], out: &mut [u8]) -> Result<u32, CodecError> {
    stream::read_stream(compressed, out)
}
