//! Bucket-level encoding primitives, encoder, and decoder.
//!
//! A bucket is a fixed 256-bit (32-byte) atomic encoding unit; see
//! [`types::BUCKET_SIZE`]. This module contains no stream framing — see
//! [`crate::stream`] for that.

pub mod decode;
pub mod encode;
pub mod primitives;
pub mod types;

pub use decode::decode_bucket;
pub use encode::encode_bucket;
pub use primitives::Bucket;
pub use types::{Category, BUCKET_SIZE, BUCKET_SIZE_U8};
