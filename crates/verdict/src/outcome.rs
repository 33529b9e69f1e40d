//! The outcome value model: explicit success/exception values.
//!
//! An [`Outcome`] is an immutable sum value carrying a payload in either of
//! its two variants. It replaces panicking control flow with plain data:
//! producers build outcomes with [`success`] and [`exception`], consumers
//! branch on the complementary `is_success`/`is_exception` flags and read
//! the payload without any possibility of failure.
//!
//! Every outcome carries a process-wide [`Marker`] sentinel. The
//! [`is_outcome`] predicate compares tag values instead of nominal types,
//! so two independently compiled copies of this crate recognize each
//! other's values and shape-mimics are rejected.
//!
//! ## Nesting absorbs
//!
//! Building an outcome from a value that is already an outcome never
//! double-wraps: the inner value passes through unchanged and the outer
//! constructor intent is discarded. See [`IntoOutcome`],
//! [`Outcome::flatten`] and [`Outcome::flatten_exception`].

use either::Either;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tag shared by every copy of this library in the process.
const SENTINEL_TAG: u64 = u64::from_le_bytes(*b"verdict\0");

/// Opaque structural tag carried by every [`Outcome`].
///
/// Compared by value, never by type identity. Two independently
/// constructed sentinel markers are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(u64);

impl Marker {
    /// Create a marker with an arbitrary tag.
    #[must_use]
    pub const fn new(tag: u64) -> Self {
        Self(tag)
    }

    /// The process-wide sentinel identifying genuine outcomes.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self(SENTINEL_TAG)
    }
}

/// Types that expose a structural [`Marker`].
///
/// [`Outcome`] implements this with the sentinel. A type that merely mimics
/// the outcome shape can implement `Marked` too, but unless it produces the
/// sentinel tag it is not recognized by [`is_outcome`].
pub trait Marked {
    /// The structural tag of this value.
    fn marker(&self) -> Marker;
}

/// Structural predicate: is this value a genuine outcome?
///
/// True iff the value's marker equals the process-wide sentinel. This is a
/// tag comparison, deliberately not a nominal type check.
#[must_use]
pub fn is_outcome(value: &dyn Marked) -> bool {
    value.marker() == Marker::sentinel()
}

/// Which variant an [`Outcome`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Success,
    Exception,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Variant<S, E> {
    Success(S),
    Exception(E),
}

/// The outcome of an operation that may succeed or fail.
///
/// Immutable after construction: the variant flags never change and reading
/// the payload neither fails nor consumes state. `S` and `E` are the
/// success and exception payload types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<S, E> {
    marker: Marker,
    variant: Variant<S, E>,
}

/// Construct a success outcome carrying `data`.
///
/// Use a `()` or `Option` payload when the operation has no meaningful
/// value to report.
#[must_use]
pub fn success<S, E>(data: S) -> Outcome<S, E> {
    Outcome {
        marker: Marker::sentinel(),
        variant: Variant::Success(data),
    }
}

/// Construct an exception outcome carrying `data`.
#[must_use]
pub fn exception<S, E>(data: E) -> Outcome<S, E> {
    Outcome {
        marker: Marker::sentinel(),
        variant: Variant::Exception(data),
    }
}

impl<S, E> Outcome<S, E> {
    /// The variant this outcome holds.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self.variant {
            Variant::Success(_) => Kind::Success,
            Variant::Exception(_) => Kind::Exception,
        }
    }

    /// True iff this is a success outcome. Always `!is_exception()`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.variant, Variant::Success(_))
    }

    /// True iff this is an exception outcome. Always `!is_success()`.
    #[must_use]
    pub const fn is_exception(&self) -> bool {
        matches!(self.variant, Variant::Exception(_))
    }

    /// Borrow the payload, whichever variant holds it.
    ///
    /// Never fails: an exception outcome yields its exception payload on
    /// the right, it does not raise. Repeatable and side-effect free.
    #[must_use]
    pub fn payload(&self) -> Either<&S, &E> {
        match &self.variant {
            Variant::Success(data) => Either::Left(data),
            Variant::Exception(data) => Either::Right(data),
        }
    }

    /// Consume the outcome and return the payload, whichever variant holds it.
    #[must_use]
    pub fn into_payload(self) -> Either<S, E> {
        match self.variant {
            Variant::Success(data) => Either::Left(data),
            Variant::Exception(data) => Either::Right(data),
        }
    }

    /// The success payload, or `None` for an exception outcome.
    #[must_use]
    pub fn success_payload(self) -> Option<S> {
        match self.variant {
            Variant::Success(data) => Some(data),
            Variant::Exception(_) => None,
        }
    }

    /// The exception payload, or `None` for a success outcome.
    #[must_use]
    pub fn exception_payload(self) -> Option<E> {
        match self.variant {
            Variant::Success(_) => None,
            Variant::Exception(data) => Some(data),
        }
    }

    /// Transform the success payload, leaving an exception untouched.
    #[must_use]
    pub fn map_success<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T, E> {
        match self.variant {
            Variant::Success(data) => success(f(data)),
            Variant::Exception(data) => exception(data),
        }
    }

    /// Transform the exception payload, leaving a success untouched.
    #[must_use]
    pub fn map_exception<T>(self, f: impl FnOnce(E) -> T) -> Outcome<S, T> {
        match self.variant {
            Variant::Success(data) => success(data),
            Variant::Exception(data) => exception(f(data)),
        }
    }
}

impl<D> Outcome<D, D> {
    /// The canonical unwrap: return the payload regardless of variant.
    ///
    /// Available whenever both variants carry the same payload type.
    #[must_use]
    pub fn into_inner(self) -> D {
        match self.variant {
            Variant::Success(data) | Variant::Exception(data) => data,
        }
    }
}

impl<S, E> Outcome<Outcome<S, E>, E> {
    /// Absorb a nested outcome built on the success side.
    ///
    /// The inner value's variant wins: `success(exception(v)).flatten()` is
    /// an exception carrying `v`. The outer constructor intent is
    /// deliberately discarded.
    #[must_use]
    pub fn flatten(self) -> Outcome<S, E> {
        match self.variant {
            Variant::Success(inner) => inner,
            Variant::Exception(data) => exception(data),
        }
    }
}

impl<S, E> Outcome<S, Outcome<S, E>> {
    /// Absorb a nested outcome built on the exception side.
    ///
    /// Symmetric to [`Outcome::flatten`]: `exception(success(v))` flattens
    /// to a success carrying `v`.
    #[must_use]
    pub fn flatten_exception(self) -> Outcome<S, E> {
        match self.variant {
            Variant::Success(data) => success(data),
            Variant::Exception(inner) => inner,
        }
    }
}

impl<S, E> Marked for Outcome<S, E> {
    fn marker(&self) -> Marker {
        self.marker
    }
}

/// Conversion into an [`Outcome`], embodying the flattening rule.
///
/// A value that is already an outcome passes through unchanged; the
/// would-be outer wrapper never wins. A `Result` is the host's native
/// settled-operation shape: `Ok` wraps as success, `Err` — the analog of a
/// rejected pending operation — wraps as exception. An `Ok` that already
/// holds an outcome flattens instead of double-wrapping.
///
/// For a `Result<Outcome<S, E>, E>` both the plain `Result` impl and the
/// flattening impl are candidates, so call sites over that shape must
/// annotate the target outcome type for inference to pick one.
pub trait IntoOutcome<S, E> {
    /// Convert `self` into an outcome, flattening where applicable.
    fn into_outcome(self) -> Outcome<S, E>;
}

impl<S, E> IntoOutcome<S, E> for Outcome<S, E> {
    fn into_outcome(self) -> Outcome<S, E> {
        self
    }
}

impl<S, E> IntoOutcome<S, E> for Result<S, E> {
    fn into_outcome(self) -> Outcome<S, E> {
        match self {
            Ok(data) => success(data),
            Err(data) => exception(data),
        }
    }
}

impl<S, E> IntoOutcome<S, E> for Result<Outcome<S, E>, E> {
    fn into_outcome(self) -> Outcome<S, E> {
        match self {
            Ok(inner) => inner,
            Err(data) => exception(data),
        }
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        result.into_outcome()
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_payload().either(Ok, Err)
    }
}

/// Type-level extraction helpers. No runtime behavior.
pub trait OutcomeTypes {
    /// The success payload type.
    type Success;
    /// The exception payload type.
    type Exception;
}

impl<S, E> OutcomeTypes for Outcome<S, E> {
    type Success = S;
    type Exception = E;
}

/// The success payload type of an outcome type.
pub type SuccessOf<O> = <O as OutcomeTypes>::Success;

/// The exception payload type of an outcome type.
pub type ExceptionOf<O> = <O as OutcomeTypes>::Exception;

/// The raw payload type of an outcome type, whichever variant holds it.
pub type PayloadOf<O> = Either<SuccessOf<O>, ExceptionOf<O>>;

// Serialized form: {"outcome": "success" | "exception", "data": ...}.
// The marker is process state, not data; deserialization re-attaches the
// sentinel.

#[derive(Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "data")]
enum ReprRef<'a, S, E> {
    Success(&'a S),
    Exception(&'a E),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "data")]
enum Repr<S, E> {
    Success(S),
    Exception(E),
}

impl<S: Serialize, E: Serialize> Serialize for Outcome<S, E> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match &self.variant {
            Variant::Success(data) => ReprRef::<S, E>::Success(data),
            Variant::Exception(data) => ReprRef::<S, E>::Exception(data),
        }
        .serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<S, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Repr::<S, E>::deserialize(deserializer)? {
            Repr::Success(data) => success(data),
            Repr::Exception(data) => exception(data),
        })
    }
}
