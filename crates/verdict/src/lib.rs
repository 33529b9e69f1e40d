//! # Verdict
//!
//! Explicit success/exception outcome values - strictly functional Rust
//! with zero unwraps.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - payload access never fails by construction
//! - No `expect()` - same
//! - No `panic!()` outside the assertion layer, whose contract *is* the
//!   panic
//! - No `unsafe` - safe Rust only
//!
//! ## Two failure channels
//!
//! - **Represented failure**: an exception [`Outcome`] - plain data,
//!   inspected with `is_exception()`, propagated by returning it. Nothing
//!   unwinds.
//! - **Programming-contract violation**: the [`assert`](mod@crate::assert) layer panics with a
//!   fixed message when code vouches for a variant that does not hold.
//!   Never caught inside this crate.
//!
//! The [`adapter`] module sits on the boundary between the two: it wraps a
//! callable and converts returned errors, returned exception outcomes, and
//! panics into represented failures.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod adapter;
pub mod assert;
pub mod outcome;
pub mod parallel;

pub use adapter::{
    try_catch, try_catch_async, try_catch_async_with, try_catch_with, Caught, ErrorSink, Logging,
};
pub use assert::{
    assert_exception, assert_exception_and_unwrap, assert_exception_and_unwrap_async,
    assert_exceptions_handled, assert_success, assert_success_and_unwrap,
    assert_success_and_unwrap_async, guard_exception, guard_exceptions_handled, guard_success,
};
pub use outcome::{
    exception, is_outcome, success, ExceptionOf, IntoOutcome, Kind, Marked, Marker, Outcome,
    OutcomeTypes, PayloadOf, SuccessOf,
};
pub use parallel::process_in_parallel;
