// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for SecureBuffer.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use proptest::prelude::*;
use proptest::test_runner::TestRunner;
use serial_test::serial;

use keyward_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use keyward_util::is_slice_zeroized;

use crate::error::BufferError;
use crate::page::PageRegion;
use crate::secure_buffer::SecureBuffer;

fn hash_of(buffer: &SecureBuffer) -> u64 {
    let mut hasher = DefaultHasher::new();
    buffer.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, PartialEq)]
#[allow(dead_code)]
enum InitError {
    Buffer(BufferError),
    Refused,
}

impl From<BufferError> for InitError {
    fn from(error: BufferError) -> Self {
        Self::Buffer(error)
    }
}

// =============================================================================
// create()
// =============================================================================

#[test]
#[serial(page)]
fn test_create_runs_initializer() {
    let buffer = SecureBuffer::create(5, |bytes| {
        assert!(is_slice_zeroized(bytes));
        bytes.copy_from_slice(b"hello");
        Ok::<_, BufferError>(())
    })
    .expect("Failed to create(..)");

    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.bit_count(), 40);
    buffer.with_bytes(|bytes| assert_eq!(bytes, b"hello"));
}

#[test]
#[serial(page)]
fn test_create_zero_length() {
    let buffer = SecureBuffer::create(0, |_| Ok::<_, BufferError>(()))
        .expect("Failed to create(..)");

    assert!(buffer.is_empty());
    assert_eq!(buffer.bit_count(), 0);
    buffer.with_bytes(|bytes| assert!(bytes.is_empty()));
}

#[test]
#[serial(page)]
fn test_create_propagates_initializer_error() {
    let result = SecureBuffer::create(16, |bytes| {
        bytes.fill(0xEE);
        Err(InitError::Refused)
    });

    assert_eq!(result.err(), Some(InitError::Refused));
}

#[test]
#[serial(page)]
fn test_create_survives_panicking_initializer() {
    let result = std::panic::catch_unwind(|| {
        SecureBuffer::create(16, |bytes| -> Result<(), BufferError> {
            bytes.fill(0x11);
            panic!("initializer panicked");
        })
    });

    assert!(result.is_err());

    // The process keeps working: locked memory was released during unwinding.
    let again = SecureBuffer::create_random(16).expect("Failed to create_random(..)");
    assert_eq!(again.len(), 16);
}

#[test]
#[serial(page)]
fn test_panicking_initializer_leaves_region_wiped() {
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use crate::page::set_leak_new_regions;

    let filled_at = Cell::new(None);

    set_leak_new_regions(true);
    let result = catch_unwind(AssertUnwindSafe(|| {
        SecureBuffer::create(16, |bytes| -> Result<(), BufferError> {
            bytes.fill(0x11);
            filled_at.set(Some(bytes.as_mut_ptr()));
            panic!("initializer panicked");
        })
    }));
    set_leak_new_regions(false);

    assert!(result.is_err());

    let ptr = filled_at.get().expect("Failed to capture region pointer");
    let capacity = PageRegion::capacity_for(16).expect("Failed to capacity_for(..)");

    let all = unsafe { core::slice::from_raw_parts(ptr, capacity) };
    assert!(is_slice_zeroized(all));

    unsafe { libc::munmap(ptr as *mut libc::c_void, capacity) };
}

#[cfg(target_os = "linux")]
mod seccomp_create {
    use super::*;
    use crate::tests::utils::{block_mlock, run_test_as_subprocess};

    #[test]
    #[ignore]
    fn subprocess_test_create_fails_when_mlock_blocked() {
        block_mlock();

        let result = SecureBuffer::create_random(32);

        assert_eq!(result.err(), Some(BufferError::MemoryLockFailed));
    }

    #[test]
    #[serial(page)]
    fn test_create_fails_when_mlock_blocked() {
        let exit_code = run_test_as_subprocess(
            "tests::secure_buffer::seccomp_create::subprocess_test_create_fails_when_mlock_blocked",
        );

        assert_eq!(
            exit_code,
            Some(0),
            "Subprocess should exit cleanly after assertion"
        );
    }
}

#[test]
#[serial(page)]
fn test_create_fails_when_address_space_exhausted() {
    let mut original = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    unsafe { libc::getrlimit(libc::RLIMIT_AS, &mut original) };

    let tiny = libc::rlimit {
        rlim_cur: 0,
        rlim_max: original.rlim_max,
    };
    unsafe { libc::setrlimit(libc::RLIMIT_AS, &tiny) };

    let result = SecureBuffer::copy_from_insecure(&[1, 2, 3]);

    unsafe { libc::setrlimit(libc::RLIMIT_AS, &original) };

    assert_eq!(result.err(), Some(BufferError::AllocationFailed));
}

// =============================================================================
// create_random() / create_random_with()
// =============================================================================

#[test]
#[serial(page)]
fn test_create_random_has_requested_len() {
    let buffer = SecureBuffer::create_random(32).expect("Failed to create_random(..)");

    assert_eq!(buffer.len(), 32);
    // 2^-256 chance of a false failure.
    buffer.with_bytes(|bytes| assert!(!is_slice_zeroized(bytes)));
}

#[test]
#[serial(page)]
fn test_create_random_twice_differs() {
    let a = SecureBuffer::create_random(32).expect("Failed to create_random(..)");
    let b = SecureBuffer::create_random(32).expect("Failed to create_random(..)");

    assert_ne!(a, b);
}

#[test]
#[serial(page)]
fn test_create_random_with_failing_source() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    let result = SecureBuffer::create_random_with(32, &entropy);

    assert_eq!(result.err(), Some(BufferError::RandomGenerationFailed));
    assert_eq!(entropy.call_count(), 1);
}

#[test]
#[serial(page)]
fn test_create_random_with_constant_source() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(7));

    let buffer =
        SecureBuffer::create_random_with(8, &entropy).expect("Failed to create_random_with(..)");

    buffer.with_bytes(|bytes| assert_eq!(bytes, &[7; 8]));
}

// =============================================================================
// transfer_from() / copy_from_insecure()
// =============================================================================

#[test]
#[serial(page)]
fn test_transfer_from_wipes_source() {
    let mut source = *b"correct horse battery staple";

    let buffer = SecureBuffer::transfer_from(&mut source, true)
        .expect("Failed to transfer_from(..)");

    assert!(is_slice_zeroized(&source));
    buffer.with_bytes(|bytes| assert_eq!(bytes, b"correct horse battery staple"));
}

#[test]
#[serial(page)]
fn test_transfer_from_keeps_source() {
    let mut source = [9u8; 12];

    let buffer =
        SecureBuffer::transfer_from(&mut source, false).expect("Failed to transfer_from(..)");

    assert_eq!(source, [9u8; 12]);
    buffer.with_bytes(|bytes| assert_eq!(bytes, &[9u8; 12]));
}

#[test]
#[serial(page)]
fn test_copy_from_insecure() {
    let buffer = SecureBuffer::copy_from_insecure(b"abc")
        .expect("Failed to copy_from_insecure(..)");

    buffer.with_bytes(|bytes| assert_eq!(bytes, b"abc"));
}

// =============================================================================
// duplicate()
// =============================================================================

#[test]
#[serial(page)]
fn test_duplicate_is_equal_but_independent() {
    let original = SecureBuffer::create_random(24).expect("Failed to create_random(..)");
    let copy = original.duplicate().expect("Failed to duplicate()");

    assert_eq!(original, copy);

    let original_ptr = original.with_bytes(|bytes| bytes.as_ptr());
    let copy_ptr = copy.with_bytes(|bytes| bytes.as_ptr());
    assert_ne!(original_ptr, copy_ptr);

    drop(original);
    assert_eq!(copy.len(), 24);
}

// =============================================================================
// PartialEq / Hash / Debug
// =============================================================================

#[test]
#[serial(page)]
fn test_eq_same_content() {
    let a = SecureBuffer::copy_from_insecure(&[1, 2, 3]).expect("Failed to copy_from_insecure(..)");
    let b = SecureBuffer::copy_from_insecure(&[1, 2, 3]).expect("Failed to copy_from_insecure(..)");

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
#[serial(page)]
fn test_eq_different_content() {
    let a = SecureBuffer::copy_from_insecure(&[1, 2, 3]).expect("Failed to copy_from_insecure(..)");
    let b = SecureBuffer::copy_from_insecure(&[1, 2, 4]).expect("Failed to copy_from_insecure(..)");

    assert_ne!(a, b);
}

#[test]
#[serial(page)]
fn test_eq_different_lengths() {
    let a = SecureBuffer::copy_from_insecure(&[0, 0]).expect("Failed to copy_from_insecure(..)");
    let b = SecureBuffer::copy_from_insecure(&[0, 0, 0]).expect("Failed to copy_from_insecure(..)");

    assert_ne!(a, b);
}

#[test]
#[serial(page)]
fn test_debug_is_redacted() {
    let buffer = SecureBuffer::copy_from_insecure(b"topsecret")
        .expect("Failed to copy_from_insecure(..)");
    let rendered = format!("{:?}", buffer);

    assert!(rendered.contains("REDACTED"));
    assert!(rendered.contains("len: 9"));
    assert!(!rendered.contains("topsecret"));
}

// =============================================================================
// Drop
// =============================================================================

fn assert_zeroed_after_drop(len: usize) {
    let mut buffer = SecureBuffer::create(len, |bytes| {
        bytes.fill(0xA5);
        Ok::<_, BufferError>(())
    })
    .expect("Failed to create(..)");

    buffer.region_mut().leak_on_release();
    let (ptr, capacity) = buffer.region_mut().raw_parts();

    drop(buffer);

    let all = unsafe { core::slice::from_raw_parts(ptr, capacity) };
    assert!(is_slice_zeroized(all), "len {len} left bytes behind");

    unsafe { libc::munmap(ptr as *mut libc::c_void, capacity) };
}

#[test]
#[serial(page)]
fn test_drop_zeroes_for_various_lengths() {
    let page_size = PageRegion::page_size();

    for len in [1, 15, 16, 17, 32, page_size - 1, page_size, page_size + 1] {
        assert_zeroed_after_drop(len);
    }
}

#[test]
#[serial(page)]
fn test_arc_wipes_on_last_reference() {
    let mut buffer = SecureBuffer::create(8, |bytes| {
        bytes.fill(0x3C);
        Ok::<_, BufferError>(())
    })
    .expect("Failed to create(..)");
    buffer.region_mut().leak_on_release();
    let (ptr, capacity) = buffer.region_mut().raw_parts();

    let shared = Arc::new(buffer);
    let second = Arc::clone(&shared);

    drop(shared);
    second.with_bytes(|bytes| assert_eq!(bytes, &[0x3C; 8]));

    drop(second);
    let all = unsafe { core::slice::from_raw_parts(ptr, capacity) };
    assert!(is_slice_zeroized(all));

    unsafe { libc::munmap(ptr as *mut libc::c_void, capacity) };
}

#[test]
fn test_secure_buffer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SecureBuffer>();
}

// =============================================================================
// Properties
// =============================================================================

#[test]
#[serial(page)]
fn test_transfer_round_trip_property() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(&proptest::collection::vec(any::<u8>(), 0..512), |data| {
            let mut source = data.clone();
            let buffer = SecureBuffer::transfer_from(&mut source, true)
                .expect("Failed to transfer_from(..)");

            prop_assert!(is_slice_zeroized(&source));
            prop_assert!(buffer.with_bytes(|bytes| bytes == data.as_slice()));
            Ok(())
        })
        .expect("Failed to run(..)");
}

/// Compares mean comparison time when the first differing byte is at the start
/// vs. at the end of a 4 KiB buffer. Noisy; run manually on a quiet machine.
#[test]
#[ignore]
#[serial(page)]
fn test_eq_timing_independent_of_difference_position() {
    use std::time::Instant;

    const LEN: usize = 4096;
    const ROUNDS: usize = 20_000;

    let reference = SecureBuffer::create(LEN, |b| {
        b.fill(0x42);
        Ok::<_, BufferError>(())
    })
    .expect("Failed to create(..)");

    let differs_first = SecureBuffer::create(LEN, |b| {
        b.fill(0x42);
        b[0] = 0;
        Ok::<_, BufferError>(())
    })
    .expect("Failed to create(..)");

    let differs_last = SecureBuffer::create(LEN, |b| {
        b.fill(0x42);
        b[LEN - 1] = 0;
        Ok::<_, BufferError>(())
    })
    .expect("Failed to create(..)");

    let measure = |other: &SecureBuffer| {
        let start = Instant::now();
        for _ in 0..ROUNDS {
            assert!(!std::hint::black_box(&reference).eq(std::hint::black_box(other)));
        }
        start.elapsed().as_nanos() as f64 / ROUNDS as f64
    };

    // Warm up caches before measuring.
    measure(&differs_first);
    measure(&differs_last);

    let first = measure(&differs_first);
    let last = measure(&differs_last);
    let ratio = first.max(last) / first.min(last);

    assert!(
        ratio < 1.5,
        "comparison time depends on difference position: first={first:.1}ns last={last:.1}ns"
    );
}
