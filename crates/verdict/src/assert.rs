//! Assertions and guards that narrow an outcome to one variant.
//!
//! The assert functions are the programming-contract channel: they panic
//! with a fixed, generic message when code vouches for a variant that does
//! not hold. They are not a recoverable error path and nothing in this
//! crate catches them. The guard functions are runtime no-ops kept so call
//! sites can mark the point where a variant has been ruled out.
//!
//! Panicking is the whole contract of this module, so the crate-wide panic
//! lint is relaxed here and only here.

#![allow(clippy::panic)]

use std::future::Future;

use crate::outcome::Outcome;

/// One blunt instrument for every violated assertion. No custom payload.
#[track_caller]
fn contract_violation() -> ! {
    panic!("outcome assertion failed")
}

/// Assert that `outcome` is a success. Panics if it is an exception.
#[track_caller]
pub fn assert_success<S, E>(outcome: &Outcome<S, E>) {
    if !outcome.is_success() {
        contract_violation()
    }
}

/// Assert that `outcome` is an exception. Panics if it is a success.
#[track_caller]
pub fn assert_exception<S, E>(outcome: &Outcome<S, E>) {
    if !outcome.is_exception() {
        contract_violation()
    }
}

/// Assert that every exception has been handled before this point.
///
/// Identical runtime check to [`assert_success`], but states a different
/// intent: an exception reaching this call means an earlier branch was
/// required to have eliminated it and did not.
#[track_caller]
pub fn assert_exceptions_handled<S, E>(outcome: &Outcome<S, E>) {
    if !outcome.is_success() {
        contract_violation()
    }
}

/// Mark a call site where the caller vouches the outcome is a success.
///
/// Never checks and never panics; Rust has no flow-sensitive narrowing, so
/// this exists purely as call-site documentation.
#[inline]
pub const fn guard_success<S, E>(outcome: &Outcome<S, E>) {
    let _ = outcome;
}

/// Mark a call site where the caller vouches the outcome is an exception.
#[inline]
pub const fn guard_exception<S, E>(outcome: &Outcome<S, E>) {
    let _ = outcome;
}

/// Mark a call site where the caller vouches all exceptions were handled.
#[inline]
pub const fn guard_exceptions_handled<S, E>(outcome: &Outcome<S, E>) {
    let _ = outcome;
}

/// Assert success, then return the unwrapped success payload.
#[track_caller]
pub fn assert_success_and_unwrap<S, E>(outcome: Outcome<S, E>) -> S {
    outcome
        .success_payload()
        .unwrap_or_else(|| contract_violation())
}

/// Assert exception, then return the unwrapped exception payload.
#[track_caller]
pub fn assert_exception_and_unwrap<S, E>(outcome: Outcome<S, E>) -> E {
    outcome
        .exception_payload()
        .unwrap_or_else(|| contract_violation())
}

/// Await a pending outcome, assert success, and return its payload.
///
/// The pending twin of [`assert_success_and_unwrap`]: resolves to the
/// success payload or panics with the same assertion failure.
pub async fn assert_success_and_unwrap_async<S, E>(
    pending: impl Future<Output = Outcome<S, E>>,
) -> S {
    assert_success_and_unwrap(pending.await)
}

/// Await a pending outcome, assert exception, and return its payload.
pub async fn assert_exception_and_unwrap_async<S, E>(
    pending: impl Future<Output = Outcome<S, E>>,
) -> E {
    assert_exception_and_unwrap(pending.await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{exception, success};

    #[test]
    fn test_assert_success_is_silent_on_success() {
        assert_success(&success::<i32, String>(1));
    }

    #[test]
    #[should_panic(expected = "outcome assertion failed")]
    fn test_assert_success_panics_on_exception() {
        assert_success(&exception::<i32, String>("boom".into()));
    }

    #[test]
    fn test_assert_exception_is_silent_on_exception() {
        assert_exception(&exception::<i32, String>("boom".into()));
    }

    #[test]
    #[should_panic(expected = "outcome assertion failed")]
    fn test_assert_exception_panics_on_success() {
        assert_exception(&success::<i32, String>(1));
    }

    #[test]
    fn test_assert_exceptions_handled_accepts_success() {
        assert_exceptions_handled(&success::<i32, String>(1));
    }

    #[test]
    #[should_panic(expected = "outcome assertion failed")]
    fn test_assert_exceptions_handled_panics_on_surviving_exception() {
        assert_exceptions_handled(&exception::<i32, String>("unhandled".into()));
    }

    #[test]
    fn test_guards_never_panic() {
        let ok = success::<i32, String>(1);
        let err = exception::<i32, String>("boom".into());
        guard_success(&err);
        guard_exception(&ok);
        guard_exceptions_handled(&err);
    }

    #[test]
    fn test_assert_success_and_unwrap_returns_payload() {
        assert_eq!(assert_success_and_unwrap(success::<i32, String>(42)), 42);
    }

    #[test]
    #[should_panic(expected = "outcome assertion failed")]
    fn test_assert_success_and_unwrap_panics_on_exception() {
        let _ = assert_success_and_unwrap(exception::<i32, String>("boom".into()));
    }

    #[test]
    fn test_assert_exception_and_unwrap_returns_payload() {
        let unwrapped = assert_exception_and_unwrap(exception::<i32, String>("boom".into()));
        assert_eq!(unwrapped, "boom");
    }

    #[test]
    fn test_pending_success_resolves_to_payload() {
        let value = tokio_test::block_on(assert_success_and_unwrap_async(async {
            success::<&str, String>("data")
        }));
        assert_eq!(value, "data");
    }

    #[test]
    #[should_panic(expected = "outcome assertion failed")]
    fn test_pending_exception_panics() {
        let _ = tokio_test::block_on(assert_success_and_unwrap_async(async {
            exception::<i32, String>("boom".into())
        }));
    }

    #[test]
    fn test_pending_exception_unwraps_via_exception_twin() {
        let unwrapped = tokio_test::block_on(assert_exception_and_unwrap_async(async {
            exception::<i32, String>("boom".into())
        }));
        assert_eq!(unwrapped, "boom");
    }

    #[test]
    #[should_panic(expected = "outcome assertion failed")]
    fn test_pending_success_panics_in_exception_twin() {
        let _ = tokio_test::block_on(assert_exception_and_unwrap_async(async {
            success::<i32, String>(42)
        }));
    }
}
