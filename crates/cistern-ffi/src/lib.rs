//! C FFI entry point for the Cistern trapped rain water kernel.
//!
//! Exposes one C-compatible symbol, [`rainCollected`], whose body rebuilds
//! a slice from the raw pointer and hands it to
//! [`cistern_core::rain_collected`]. This is the only crate in the
//! workspace that may contain `unsafe` code, and only the adapter itself
//! opts in.
//!
//! The generated header lands in `include/cistern.h`:
//!
//! ```c
//! #include <stdint.h>
//! uint64_t rainCollected(const int64_t *heights, uint64_t count);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, containing any panic so it never unwinds into C.
///
/// On panic the payload message is logged at error level and `$fallback`
/// is returned instead.
macro_rules! ffi_guard {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(v) => v,
            Err(payload) => {
                ::tracing::error!(
                    panic = $crate::panic_message(payload.as_ref()),
                    "panic contained at C boundary"
                );
                $fallback
            }
        }
    };
}

pub mod trap;

pub use trap::rainCollected;

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("static text")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static text");
    }

    #[test]
    fn panic_message_reads_string_payload() {
        let n = 3;
        let payload = std::panic::catch_unwind(|| panic!("formatted {n}")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 3");
    }

    #[test]
    fn panic_message_falls_back_for_other_payloads() {
        let payload = std::panic::catch_unwind(|| std::panic::panic_any(17u32)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "<non-string panic payload>");
    }

    #[test]
    fn ffi_guard_returns_body_value() {
        let v: u64 = ffi_guard!(0, { 41 + 1 });
        assert_eq!(v, 42);
    }

    #[test]
    fn ffi_guard_contains_panic() {
        let v: u64 = ffi_guard!(7, {
            panic!("deliberate test panic inside guard");
        });
        assert_eq!(v, 7);
    }
}
