//! Scoped suppression of registration.
//!
//! Inside a skip scope, [`DatasetRegistry::register`](crate::DatasetRegistry::register)
//! still checks for name collisions but records nothing. The flag is
//! per-thread: a scope opened on one thread never affects registrations made
//! on another.

use std::cell::Cell;
use std::marker::PhantomData;

use tracing::trace;

thread_local! {
    // Number of live guards on this thread.
    static SKIP_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Whether registration is currently suppressed on this thread.
pub fn is_registration_skipped() -> bool {
    SKIP_DEPTH.with(Cell::get) > 0
}

/// Guard returned by [`skip_registration`].
///
/// Registration stays suppressed while at least one guard is alive on the
/// thread, whatever order the guards are dropped in. Drop runs on normal
/// scope exit, on early return, and while unwinding from a panic.
#[must_use = "registration resumes as soon as the guard is dropped"]
pub struct SkipRegistrationGuard {
    // The counter is thread-local, so the guard must stay on its thread.
    _not_send: PhantomData<*const ()>,
}

impl Drop for SkipRegistrationGuard {
    fn drop(&mut self) {
        let depth = SKIP_DEPTH.with(|depth| {
            let remaining = depth.get().saturating_sub(1);
            depth.set(remaining);
            remaining
        });
        trace!(depth, "Leaving skip-registration scope");
    }
}

/// Suppress registration on this thread until the returned guard is dropped.
///
/// ```
/// use dsreg_core::skip::{is_registration_skipped, skip_registration};
///
/// {
///     let _skip = skip_registration();
///     assert!(is_registration_skipped());
/// }
/// assert!(!is_registration_skipped());
/// ```
pub fn skip_registration() -> SkipRegistrationGuard {
    let depth = SKIP_DEPTH.with(|depth| {
        let entered = depth.get() + 1;
        depth.set(entered);
        entered
    });
    trace!(depth, "Entering skip-registration scope");
    SkipRegistrationGuard {
        _not_send: PhantomData,
    }
}

/// Run `f` with registration suppressed.
pub fn with_registration_skipped<R>(f: impl FnOnce() -> R) -> R {
    let _skip = skip_registration();
    f()
}
