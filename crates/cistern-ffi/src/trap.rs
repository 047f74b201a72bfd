//! The `rainCollected` C entry point.

/// Volume of rain trapped above a C array of `count` heights.
///
/// Rebuilds a slice over `heights[0..count]` and forwards to
/// [`cistern_core::rain_collected`]. No allocation, no locking; safe to call
/// concurrently from any number of threads.
///
/// - `count == 0` returns 0 without reading `heights`, which may then be
///   null.
/// - A `count` wider than this platform's `usize` cannot describe a real
///   buffer and returns 0.
/// - A panic inside the kernel is contained, logged, and reported as 0.
///
/// # Safety
///
/// When `count > 0` the caller must guarantee that `heights` is non-null,
/// aligned for `int64_t`, and points to at least `count` initialized
/// values that stay alive and unmodified for the duration of the call.
/// No bounds checking is performed; violating this is undefined behavior.
///
/// ```
/// use cistern_ffi::rainCollected;
///
/// let terrain: [i64; 6] = [4, 2, 0, 3, 2, 5];
/// let volume = unsafe { rainCollected(terrain.as_ptr(), terrain.len() as u64) };
/// assert_eq!(volume, 9);
/// ```
#[no_mangle]
#[allow(unsafe_code, non_snake_case)]
pub unsafe extern "C" fn rainCollected(heights: *const i64, count: u64) -> u64 {
    ffi_guard!(0, {
        if count == 0 {
            return 0;
        }
        let Ok(len) = usize::try_from(count) else {
            return 0;
        };
        // SAFETY: heights points to `count` live i64 values per caller contract.
        let terrain = unsafe { std::slice::from_raw_parts(heights, len) };
        cistern_core::rain_collected(terrain)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cistern_test_utils::fixtures::all_cases;
    use cistern_test_utils::strategies::arb_terrain;
    use proptest::prelude::*;

    #[allow(unsafe_code)]
    fn call(heights: &[i64]) -> u64 {
        // SAFETY: pointer and length come from a live slice.
        unsafe { rainCollected(heights.as_ptr(), heights.len() as u64) }
    }

    #[test]
    fn fixtures_through_c_abi() {
        for case in all_cases() {
            assert_eq!(call(case.heights), case.expected, "fixture {}", case.name);
        }
    }

    #[test]
    fn null_with_zero_count_is_zero() {
        #[allow(unsafe_code)]
        let v = unsafe { rainCollected(std::ptr::null(), 0) };
        assert_eq!(v, 0);
    }

    #[test]
    fn count_shorter_than_buffer_reads_prefix() {
        let t = [5i64, 0, 0, 9];
        #[allow(unsafe_code)]
        let v = unsafe { rainCollected(t.as_ptr(), 3) };
        assert_eq!(v, 0);
    }

    #[test]
    fn buffer_is_not_mutated() {
        let t = vec![3i64, 0, 2, 0, 4];
        let before = t.clone();
        assert_eq!(call(&t), 7);
        assert_eq!(call(&t), 7);
        assert_eq!(t, before);
    }

    #[test]
    fn concurrent_calls_on_shared_buffer() {
        let t: Vec<i64> = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1].repeat(64);
        let expected = cistern_core::rain_collected(&t);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| call(&t))).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    proptest! {
        #[test]
        fn agrees_with_safe_kernel(t in arb_terrain()) {
            prop_assert_eq!(call(&t), cistern_core::rain_collected(&t));
        }
    }
}
