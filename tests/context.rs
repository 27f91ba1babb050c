//! Integration tests for `Context` lifecycle and capacity behavior.

use vitemap::{CodecError, Context};

#[test]
fn zero_upper_size_is_permitted() {
    let mut ctx = Context::new(0).unwrap();
    let n = ctx.compress(0).unwrap();
    assert_eq!(&ctx.output()[..n as usize], &[0, 0, 0, 0]);
}

#[test]
fn oversized_compress_call_is_rejected() {
    let mut ctx = Context::new(32).unwrap();
    let err = ctx.compress(33).unwrap_err();
    assert_eq!(err, CodecError::CapacityExceeded);
}

#[test]
fn context_is_reusable_across_many_inputs() {
    let mut ctx = Context::new(4096).unwrap();
    for round in 0u8..10 {
        let data: Vec<u8> = (0..1000).map(|i| round.wrapping_add(i as u8)).collect();
        ctx.input_mut()[..data.len()].copy_from_slice(&data);
        let n = ctx.compress(data.len() as u32).unwrap();
        assert!(n > 0);
    }
}

#[test]
fn max_output_size_covers_all_raw_worst_case() {
    let ctx = Context::new(1024).unwrap();
    // 32 buckets, every byte raw: 4 + 32*(1+32) + 32 tail slack.
    assert_eq!(ctx.max_output_size(), 4 + 32 * 33 + 32);
}
