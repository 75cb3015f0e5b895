//! Either type - a success or a single error.
//!
//! This module provides the `Either<L, R>` type, a closed sum of exactly two
//! variants: `Right(R)` for success and `Left(L)` for failure. Unlike
//! [`Validation`](super::Validation) it never aggregates: the first `Left`
//! in a pipeline short-circuits everything after it.
//!
//! Any value is a legal payload on either side, including another container;
//! there is no implicit flattening and no absent-marker handling.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Either;
//!
//! // Creating Either values
//! let success: Either<String, i32> = Either::right(42);
//! let failure: Either<String, i32> = Either::left("parse error".to_string());
//!
//! // Pattern matching
//! match success {
//!     Either::Right(n) => println!("got {n}"),
//!     Either::Left(e) => println!("failed: {e}"),
//! }
//!
//! // Using fold to handle both cases
//! let message = failure.fold(
//!     |error| format!("error: {error}"),
//!     |value| format!("value: {value}"),
//! );
//! assert_eq!(message, "error: parse error");
//! ```

use std::fmt;

use crate::typeclass::{Alt, Applicative, Functor, Monad, TypeConstructor};

/// A success or a single error.
///
/// `Either<L, R>` is right-biased: `map`, `chain`, `filter`, and `ap`
/// operate on `Right` and return `Left` unchanged without invoking their
/// function arguments. Every operation consumes `self` and returns a new
/// container.
///
/// # Type Parameters
///
/// * `L` - The type of the error (left) value
/// * `R` - The type of the success (right) value
///
/// # Examples
///
/// ```rust
/// use monars::container::Either;
///
/// let value: Either<String, i32> = Either::right(21);
/// assert_eq!(value.map(|n| n * 2), Either::right(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Smart Constructors
    // =========================================================================

    /// Creates a `Right` holding a success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::right(42);
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a `Left` holding an error value.
    ///
    /// Any value is legal, including `()` or another container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::left("boom".to_string());
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::right(42);
    /// assert!(value.is_right());
    /// assert!(!value.is_left());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<i32, String> = Either::left(42);
    /// assert!(value.is_left());
    /// assert!(!value.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns a reference to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::right(42);
    /// assert_eq!(value.right_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(value.left_ref().map(String::as_str), Some("boom"));
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// `Left` short-circuits: it is returned unchanged and `function` is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::right(21);
    /// assert_eq!(value.map(|n| n * 2), Either::right(42));
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(failed.map(|n| n * 2), Either::left("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Alias for [`map`](Self::map), naming the side explicitly.
    #[inline]
    pub fn map_right<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map(function)
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<i32, String> = Either::left(20);
    /// assert_eq!(failed.map_left(|n| n * 2), Either::left(40));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps each side independently; exactly one function executes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<i32, String> = Either::right("hello".to_string());
    /// let result = value.bimap(|n: i32| n * 2, |s| s.len());
    /// assert_eq!(result, Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(left_function(error)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Sequences a computation that itself returns an `Either`.
    ///
    /// The result is returned as-is, never re-wrapped and never flattened.
    /// `Left` short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// fn positive(n: i32) -> Either<String, i32> {
    ///     if n > 0 {
    ///         Either::right(n)
    ///     } else {
    ///         Either::left(format!("{n} is not positive"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::<String, i32>::right(3).chain(positive), Either::right(3));
    /// assert!(Either::<String, i32>::right(-3).chain(positive).is_left());
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Keeps the right value only if the predicate holds, otherwise
    /// replaces it with a supplied left value.
    ///
    /// The supplier runs only when the predicate fails; `Left` is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let kept: Either<String, i32> = Either::right(4).filter(|n| n % 2 == 0, || "odd".to_string());
    /// assert_eq!(kept, Either::right(4));
    ///
    /// let replaced: Either<String, i32> = Either::right(3).filter(|n| n % 2 == 0, || "odd".to_string());
    /// assert_eq!(replaced, Either::left("odd".to_string()));
    /// ```
    #[inline]
    pub fn filter<P, F>(self, predicate: P, left_with: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce() -> L,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(left_with())
                }
            }
            Self::Left(error) => Self::Left(error),
        }
    }

    /// Eager form of [`filter`](Self::filter), taking the left value
    /// directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let replaced: Either<&str, i32> = Either::right(3).filter_or(|n| n % 2 == 0, "odd");
    /// assert_eq!(replaced, Either::left("odd"));
    /// ```
    #[inline]
    pub fn filter_or<P>(self, predicate: P, left_value: L) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        self.filter(predicate, || left_value)
    }

    /// Applies a wrapped function to this right value.
    ///
    /// The application happens only when both sides are `Right`; otherwise
    /// the first `Left` in argument order is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::right(41);
    /// let function: Either<String, fn(i32) -> i32> = Either::right(|n| n + 1);
    /// assert_eq!(value.ap(function), Either::right(42));
    /// ```
    #[inline]
    pub fn ap<U, F>(self, other: Either<L, F>) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match (self, other) {
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    // =========================================================================
    // Alternatives and Recovery
    // =========================================================================

    /// Returns `self` if right, otherwise the given alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(failed.alt(Either::right(2)), Either::right(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => alternative,
        }
    }

    /// Lazy form of [`alt`](Self::alt): the supplier runs only on `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// let recovered = failed.alt_with(|| Either::right(7));
    /// assert_eq!(recovered, Either::right(7));
    ///
    /// let kept: Either<String, i32> = Either::right(1);
    /// assert_eq!(kept.alt_with(|| unreachable!("never evaluated")), Either::right(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => alternative(),
        }
    }

    /// Converts `Left` into `Right` of the given value; no-op on `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(failed.recover(0), Either::right(0));
    /// ```
    #[inline]
    #[must_use]
    pub fn recover(self, value: R) -> Self {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => Self::Right(value),
        }
    }

    /// Lazy form of [`recover`](Self::recover): the function runs only on
    /// `Left` and receives the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, usize> = Either::left("boom".to_string());
    /// assert_eq!(failed.recover_with(|error| error.len()), Either::right(4));
    /// ```
    #[inline]
    #[must_use]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(error) => Self::Right(function(error)),
        }
    }

    // =========================================================================
    // Fault Boundary
    // =========================================================================

    /// Runs a fallible supplier, folding a fault into `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let parsed = Either::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Either::right(42));
    ///
    /// let failed = Either::attempt(|| "nope".parse::<i32>());
    /// assert!(failed.is_left());
    /// ```
    #[inline]
    pub fn attempt<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        match supplier() {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    /// Applies a fallible function to the right value, folding a fault into
    /// `Left`.
    ///
    /// The fault boundary covers only the supplied callable; `Left` passes
    /// through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<std::num::ParseIntError, &str> = Either::right("42");
    /// let parsed = value.checked_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed, Either::right(42));
    /// ```
    #[inline]
    pub fn checked_map<U, F>(self, throwable: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Result<U, L>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => match throwable(value) {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(error),
            },
        }
    }

    /// Runs a fallible function on the right value inside a fault boundary,
    /// folding both the existing error and a thrown fault through
    /// `left_fold`.
    ///
    /// On `Right(v)`: `throwable(v)` returning `Ok(u)` re-wraps as
    /// `Right(u)`; returning `Err(fault)` produces
    /// `Left(left_fold(None, Some(fault)))`. On `Left(l)`, `throwable`
    /// never runs and the result is `Left(left_fold(Some(l), None))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, &str> = Either::right("nope");
    /// let result: Either<String, i32> = value.checked_bimap(
    ///     |_existing, fault| fault.map_or_else(String::new, |f: std::num::ParseIntError| f.to_string()),
    ///     |s| s.parse::<i32>(),
    /// );
    /// assert!(result.is_left());
    /// ```
    #[inline]
    pub fn checked_bimap<T, U, Fault, F, G>(self, left_fold: F, throwable: G) -> Either<T, U>
    where
        F: FnOnce(Option<L>, Option<Fault>) -> T,
        G: FnOnce(R) -> Result<U, Fault>,
    {
        match self {
            Self::Left(error) => Either::Left(left_fold(Some(error), None)),
            Self::Right(value) => match throwable(value) {
                Ok(value) => Either::Right(value),
                Err(fault) => Either::Left(left_fold(None, Some(fault))),
            },
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the right value, or the given default on `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(failed.get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, default: R) -> R {
        match self {
            Self::Right(value) => value,
            Self::Left(_) => default,
        }
    }

    /// Returns the right value, or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, usize> = Either::left("boom".to_string());
    /// assert_eq!(failed.get_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Right(value) => value,
            Self::Left(error) => function(error),
        }
    }

    /// Returns the right value, or raises an error computed from the left
    /// value.
    ///
    /// # Errors
    ///
    /// Returns the computed error when this is `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let failed: Either<String, i32> = Either::left("boom".to_string());
    /// let raised = failed.get_or_raise(|error| format!("failed: {error}"));
    /// assert_eq!(raised, Err("failed: boom".to_string()));
    /// ```
    #[inline]
    pub fn get_or_raise<E, F>(self, error: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Right(value) => Ok(value),
            Self::Left(left) => Err(error(left)),
        }
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Runs the consumer with the right value, returning the container
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn tap_right<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs the consumer with the left value, returning the container
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn tap_left<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(error) = &self {
            consumer(error);
        }
        self
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<i32, String> = Either::right("hello".to_string());
    /// let result = value.fold(|n: i32| n.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => left_function(error),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<i32, String> = Either::left(42);
    /// assert_eq!(value.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Vec`: one element if right, empty otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let value: Either<String, i32> = Either::right(1);
    /// assert_eq!(value.to_vec(), vec![1]);
    /// ```
    #[inline]
    pub fn to_vec(self) -> Vec<R> {
        match self {
            Self::Right(value) => vec![value],
            Self::Left(_) => Vec::new(),
        }
    }

    // =========================================================================
    // Collection Combinators
    // =========================================================================

    /// Collects every right value, short-circuiting at the first `Left`.
    ///
    /// Values appear in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let all = Either::<String, i32>::all([Either::right(1), Either::right(2)]);
    /// assert_eq!(all, Either::right(vec![1, 2]));
    ///
    /// let stopped = Either::all([
    ///     Either::right(1),
    ///     Either::left("boom".to_string()),
    ///     Either::right(2),
    /// ]);
    /// assert_eq!(stopped, Either::left("boom".to_string()));
    /// ```
    pub fn all<I>(items: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        let iterator = items.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for item in iterator {
            match item {
                Self::Right(value) => values.push(value),
                Self::Left(error) => return Either::Left(error),
            }
        }
        Either::Right(values)
    }

    /// Returns the first `Right`, else the first `Left`, or `None` for an
    /// empty input.
    ///
    /// Unlike `Maybe::any`, the failure case reports the first error rather
    /// than an absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    ///
    /// let found = Either::any([
    ///     Either::left("a".to_string()),
    ///     Either::right(1),
    ///     Either::right(2),
    /// ]);
    /// assert_eq!(found, Some(Either::right(1)));
    ///
    /// let failed = Either::<String, i32>::any([Either::left("a".to_string())]);
    /// assert_eq!(failed, Some(Either::left("a".to_string())));
    /// ```
    pub fn any<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut first_left = None;
        for item in items {
            match item {
                right @ Self::Right(_) => return Some(right),
                left @ Self::Left(_) => {
                    if first_left.is_none() {
                        first_left = Some(left);
                    }
                }
            }
        }
        first_left
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result`: `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either`: `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}

impl<L, R> Alt for Either<L, R> {
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.alt(alternative)
    }

    #[inline]
    fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.alt_with(alternative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn right_construction() {
        let value: Either<String, i32> = Either::right(42);
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn left_construction() {
        let value: Either<String, i32> = Either::left("boom".to_string());
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn map_short_circuits_on_left() {
        let failed: Either<String, i32> = Either::left("boom".to_string());
        let result = failed.map(|_| unreachable!("mapper must not run on Left"));
        assert_eq!(result, Either::<String, i32>::left("boom".to_string()));
    }

    #[rstest]
    fn bimap_runs_exactly_one_side() {
        let value: Either<i32, i32> = Either::right(1);
        let result = value.bimap(|_| unreachable!("left side must not run"), |n| n + 1);
        assert_eq!(result, Either::<i32, i32>::right(2));
    }

    #[rstest]
    fn filter_replaces_failed_predicate_with_supplied_left() {
        let replaced: Either<String, i32> = Either::right(3).filter(|n| *n > 10, || "too small".to_string());
        assert_eq!(replaced, Either::left("too small".to_string()));
    }

    #[rstest]
    fn filter_supplier_is_lazy() {
        let kept: Either<String, i32> = Either::right(30).filter(|n| *n > 10, || unreachable!("supplier must not run"));
        assert_eq!(kept, Either::right(30));
    }

    #[rstest]
    fn checked_map_folds_the_fault_into_left() {
        let value: Either<std::num::ParseIntError, &str> = Either::right("nope");
        let result = value.checked_map(|s| s.parse::<i32>());
        assert!(result.is_left());
    }

    #[rstest]
    fn checked_bimap_on_left_folds_the_existing_error() {
        let failed: Either<String, i32> = Either::left("boom".to_string());
        let result: Either<String, i32> = failed.checked_bimap(
            |existing, fault: Option<String>| {
                assert!(fault.is_none());
                existing.unwrap_or_default()
            },
            |n| Ok(n),
        );
        assert_eq!(result, Either::left("boom".to_string()));
    }

    #[rstest]
    fn checked_bimap_on_fault_folds_with_no_existing_error() {
        let value: Either<String, &str> = Either::right("nope");
        let result: Either<String, i32> = value.checked_bimap(
            |existing, fault: Option<std::num::ParseIntError>| {
                assert!(existing.is_none());
                fault.map(|f| f.to_string()).unwrap_or_default()
            },
            |s| s.parse::<i32>(),
        );
        assert!(result.is_left());
    }

    #[rstest]
    fn recover_with_receives_the_error() {
        let failed: Either<String, usize> = Either::left("boom".to_string());
        assert_eq!(failed.recover_with(|error| error.len()), Either::right(4));
    }

    #[rstest]
    fn swap_exchanges_the_sides() {
        let value: Either<i32, String> = Either::left(42);
        assert_eq!(value.swap(), Either::<String, i32>::right(42));
    }

    #[rstest]
    fn all_short_circuits_at_the_first_left() {
        let stopped = Either::all([
            Either::right(1),
            Either::left("first".to_string()),
            Either::left("second".to_string()),
        ]);
        assert_eq!(stopped, Either::left("first".to_string()));
    }

    #[rstest]
    fn any_prefers_the_first_right() {
        let found = Either::any([
            Either::left("a".to_string()),
            Either::right(1),
            Either::right(2),
        ]);
        assert_eq!(found, Some(Either::right(1)));
    }

    #[rstest]
    fn any_reports_the_first_left_when_no_right_exists() {
        let failed = Either::<String, i32>::any([
            Either::left("first".to_string()),
            Either::left("second".to_string()),
        ]);
        assert_eq!(failed, Some(Either::left("first".to_string())));
    }

    #[rstest]
    fn any_of_empty_input_is_none() {
        assert_eq!(Either::<String, i32>::any([]), None);
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }
}
