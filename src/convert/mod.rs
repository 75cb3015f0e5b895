//! Cross-type conversion layer and the deferred-computation bridge.
//!
//! Conversions between the three containers are total and
//! variant-preserving: positive carries to positive, negative to negative.
//! Rather than each container importing the others' constructor namespaces,
//! every conversion goes through the small [`Disjunction`] capability trait:
//! a record of exactly two constructors, one per variant. The pairwise
//! `to_*` methods are thin wrappers over it.
//!
//! The mapping table:
//!
//! | From | To | Positive | Negative |
//! |---|---|---|---|
//! | `Maybe<T>` | `Either<(), T>` | value unchanged | `Absent` → `Left(())` |
//! | `Maybe<T>` | `Validation<(), T>` | value unchanged | `Absent` → `Failure([()])` |
//! | `Either<L, R>` | `Maybe<R>` | value unchanged | `Left` value discarded |
//! | `Either<L, R>` | `Validation<L, R>` | value unchanged | `Left(e)` → `Failure([e])` |
//! | `Validation<E, A>` | `Maybe<A>` | value unchanged | errors discarded |
//! | `Validation<E, A>` | `Either<ErrorList<E>, A>` | value unchanged | whole list becomes the single `Left` payload |
//!
//! The `Validation` → `Either` direction is lossy in arity, not in data: the
//! error sequence travels whole.
//!
//! [`Deferred`] is the boundary to the host's deferred-computation type:
//! two constructors, `resolved` and `rejected`, nothing else. Positive
//! variants resolve immediately with the payload; negative variants reject
//! immediately with theirs (`()` for `Absent`). `Result` is the degenerate
//! synchronous deferred; with the `async` feature,
//! `futures::future::Ready<Result<T, E>>` is an already-settled future.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::{Either, Maybe, Validation};
//!
//! // Round trip: positive payloads survive unchanged
//! let start = Maybe::present(1);
//! let roundtrip = start.to_validation().to_either().to_maybe();
//! assert_eq!(roundtrip, Maybe::present(1));
//!
//! // The marker becomes a singleton Failure
//! let missing: Validation<(), i32> = Maybe::of_nullable(None).to_validation();
//! assert_eq!(missing.failure_ref().unwrap().as_slice(), [()]);
//! ```

use crate::container::{Either, ErrorList, Maybe, Validation};

// =============================================================================
// The Disjunction Capability
// =============================================================================

/// A capability record for constructing a two-variant container.
///
/// This is the seam the conversion layer is written against: any type that
/// can be built from a positive payload or a negative payload qualifies,
/// and no container needs to name another to convert into it.
///
/// # Examples
///
/// ```rust
/// use monars::container::{Either, Maybe};
/// use monars::convert::Disjunction;
///
/// // A conversion written once, target chosen by the caller
/// fn report<D>(checked: bool) -> D
/// where
///     D: Disjunction<Positive = i32, Negative = ()>,
/// {
///     if checked { D::positive(7) } else { D::negative(()) }
/// }
///
/// let as_maybe: Maybe<i32> = report(true);
/// assert_eq!(as_maybe, Maybe::present(7));
///
/// let as_either: Either<(), i32> = report(false);
/// assert_eq!(as_either, Either::left(()));
/// ```
pub trait Disjunction {
    /// The payload of the positive variant.
    type Positive;
    /// The payload of the negative variant.
    type Negative;

    /// Constructs the positive variant.
    fn positive(value: Self::Positive) -> Self;

    /// Constructs the negative variant.
    fn negative(error: Self::Negative) -> Self;
}

impl<T> Disjunction for Maybe<T> {
    type Positive = T;
    type Negative = ();

    #[inline]
    fn positive(value: T) -> Self {
        Self::present(value)
    }

    #[inline]
    fn negative((): ()) -> Self {
        Self::absent()
    }
}

impl<L, R> Disjunction for Either<L, R> {
    type Positive = R;
    type Negative = L;

    #[inline]
    fn positive(value: R) -> Self {
        Self::right(value)
    }

    #[inline]
    fn negative(error: L) -> Self {
        Self::left(error)
    }
}

impl<E, A> Disjunction for Validation<E, A> {
    type Positive = A;
    type Negative = E;

    #[inline]
    fn positive(value: A) -> Self {
        Self::success(value)
    }

    /// A bare error is wrapped as a singleton list, as everywhere else.
    #[inline]
    fn negative(error: E) -> Self {
        Self::failure(error)
    }
}

// =============================================================================
// The Deferred-Computation Bridge
// =============================================================================

/// The host's deferred-computation type, seen through its two constructors.
///
/// Anything that can be produced already-resolved or already-rejected
/// satisfies this contract; the containers never inspect the deferred value
/// afterwards. The bridge is one-shot and fire-and-forget: no retries, no
/// timeouts, nothing blocks.
pub trait Deferred {
    /// The resolution payload.
    type Value;
    /// The rejection payload.
    type Reason;

    /// Produces an already-resolved deferred.
    fn resolved(value: Self::Value) -> Self;

    /// Produces an already-rejected deferred.
    fn rejected(reason: Self::Reason) -> Self;
}

impl<T, E> Deferred for Result<T, E> {
    type Value = T;
    type Reason = E;

    #[inline]
    fn resolved(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn rejected(reason: E) -> Self {
        Err(reason)
    }
}

#[cfg(feature = "async")]
impl<T, E> Deferred for futures::future::Ready<Result<T, E>> {
    type Value = T;
    type Reason = E;

    #[inline]
    fn resolved(value: T) -> Self {
        futures::future::ready(Ok(value))
    }

    #[inline]
    fn rejected(reason: E) -> Self {
        futures::future::ready(Err(reason))
    }
}

// =============================================================================
// Maybe Conversions
// =============================================================================

impl<T> Maybe<T> {
    /// Converts into any [`Disjunction`] whose negative payload is the
    /// canonical empty marker `()`.
    #[inline]
    pub fn to_disjunction<D>(self) -> D
    where
        D: Disjunction<Positive = T, Negative = ()>,
    {
        match self {
            Self::Present(value) => D::positive(value),
            Self::Absent => D::negative(()),
        }
    }

    /// Converts into an `Either`: `Present` → `Right`, `Absent` → `Left(())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::present(1).to_either(), Either::right(1));
    /// assert_eq!(Maybe::<i32>::absent().to_either(), Either::left(()));
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<(), T> {
        self.to_disjunction()
    }

    /// Converts into a `Validation`: `Present` → `Success`,
    /// `Absent` → `Failure([()])`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let failed = Maybe::<i32>::of_nullable(None).to_validation();
    /// assert_eq!(failed.failure_ref().unwrap().as_slice(), [()]);
    /// ```
    #[inline]
    pub fn to_validation(self) -> Validation<(), T> {
        self.to_disjunction()
    }

    /// Bridges into the host's deferred type: `Present` resolves with the
    /// payload, `Absent` rejects with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let settled: Result<i32, ()> = Maybe::present(1).to_deferred();
    /// assert_eq!(settled, Ok(1));
    /// ```
    #[inline]
    pub fn to_deferred<D>(self) -> D
    where
        D: Deferred<Value = T, Reason = ()>,
    {
        match self {
            Self::Present(value) => D::resolved(value),
            Self::Absent => D::rejected(()),
        }
    }
}

// =============================================================================
// Either Conversions
// =============================================================================

impl<L, R> Either<L, R> {
    /// Converts into any [`Disjunction`] with the same positive and
    /// negative payload types.
    #[inline]
    pub fn to_disjunction<D>(self) -> D
    where
        D: Disjunction<Positive = R, Negative = L>,
    {
        match self {
            Self::Right(value) => D::positive(value),
            Self::Left(error) => D::negative(error),
        }
    }

    /// Converts into a `Maybe`, discarding the `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Either, Maybe};
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// assert!(failed.to_maybe().is_absent());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Self::Right(value) => Maybe::present(value),
            Self::Left(_) => Maybe::absent(),
        }
    }

    /// Converts into a `Validation`: `Left(e)` becomes `Failure([e])`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Either, Validation};
    ///
    /// let failed: Either<&str, i32> = Either::left("boom");
    /// let validation = failed.to_validation();
    /// assert_eq!(validation.failure_ref().unwrap().as_slice(), ["boom"]);
    /// ```
    #[inline]
    pub fn to_validation(self) -> Validation<L, R> {
        self.to_disjunction()
    }

    /// Bridges into the host's deferred type: `Right` resolves, `Left`
    /// rejects with its value.
    #[inline]
    pub fn to_deferred<D>(self) -> D
    where
        D: Deferred<Value = R, Reason = L>,
    {
        match self {
            Self::Right(value) => D::resolved(value),
            Self::Left(error) => D::rejected(error),
        }
    }
}

// =============================================================================
// Validation Conversions
// =============================================================================

impl<E, A> Validation<E, A> {
    /// Converts into any [`Disjunction`] whose negative payload is the
    /// whole error list.
    #[inline]
    pub fn to_disjunction<D>(self) -> D
    where
        D: Disjunction<Positive = A, Negative = ErrorList<E>>,
    {
        match self {
            Self::Success(value) => D::positive(value),
            Self::Failure(errors) => D::negative(errors),
        }
    }

    /// Converts into a `Maybe`, discarding the accumulated errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    /// assert!(failed.to_maybe().is_absent());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::present(value),
            Self::Failure(_) => Maybe::absent(),
        }
    }

    /// Converts into an `Either` whose single `Left` payload is the whole
    /// error sequence: lossy in arity, not in data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    /// let either = failed.to_either();
    /// assert_eq!(either.left_ref().unwrap().as_slice(), ["a", "b"]);
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<ErrorList<E>, A> {
        self.to_disjunction()
    }

    /// Bridges into the host's deferred type: `Success` resolves,
    /// `Failure` rejects with the whole error list.
    #[inline]
    pub fn to_deferred<D>(self) -> D
    where
        D: Deferred<Value = A, Reason = ErrorList<E>>,
    {
        match self {
            Self::Success(value) => D::resolved(value),
            Self::Failure(errors) => D::rejected(errors),
        }
    }
}
