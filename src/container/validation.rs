//! Validation type - a success or one-or-more accumulated errors.
//!
//! This module provides the `Validation<E, A>` type, a closed sum of exactly
//! two variants: `Success(A)` and `Failure(ErrorList<E>)`. It differs from
//! [`Either`](super::Either) in two respects that define its purpose:
//!
//! - The `Failure` payload is **always** a non-empty ordered sequence, even
//!   when constructed from a single error; singletons are wrapped
//!   automatically by [`Validation::failure`].
//! - [`Validation::concat`] is a semigroup over the error sequence: combining
//!   two `Failure`s concatenates their errors in evaluation order, which is
//!   how independent validations merge into one `Failure` carrying every
//!   error. `Either` has no counterpart to this.
//!
//! Everything else (`map`, `chain`, `ap`, `filter`, `alt`) short-circuits the
//! way `Either` does; only `concat` and `zip` aggregate.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Validation;
//!
//! fn validate_name(name: &str) -> Validation<String, ()> {
//!     if name.is_empty() {
//!         Validation::failure("name must not be empty".to_string())
//!     } else {
//!         Validation::success(())
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<String, ()> {
//!     if age < 0 {
//!         Validation::failure("age must not be negative".to_string())
//!     } else {
//!         Validation::success(())
//!     }
//! }
//!
//! let report = validate_name("").concat(validate_age(-1));
//! let errors = report.failure_ref().unwrap();
//! assert_eq!(errors.len(), 2);
//! ```

use smallvec::{SmallVec, smallvec};

use crate::typeclass::{Alt, Applicative, Functor, Monad, Semigroup, TypeConstructor};

use super::maybe::Maybe;

/// The ordered error sequence carried by a `Failure`.
///
/// Small error counts stay inline; validation pipelines rarely accumulate
/// more than a handful of errors.
pub type ErrorList<E> = SmallVec<[E; 4]>;

impl<E> Semigroup for ErrorList<E> {
    /// Concatenates two error sequences, left elements first.
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// A success or one-or-more accumulated errors.
///
/// `Validation<E, A>` is right-biased like the other containers: `map`,
/// `chain`, `filter`, and `ap` operate on `Success` and carry a `Failure`'s
/// error list through unchanged. Aggregation happens only through
/// [`concat`](Self::concat) and [`zip`](Self::zip).
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Examples
///
/// ```rust
/// use monars::container::Validation;
///
/// let merged = Validation::<&str, i32>::failure("e1").concat(Validation::failure("e2"));
/// assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Validation<E, A> {
    /// The success variant.
    Success(A),
    /// The failure variant; the error list is never empty.
    Failure(ErrorList<E>),
}

impl<E, A> Validation<E, A> {
    // =========================================================================
    // Smart Constructors
    // =========================================================================

    /// Creates a `Success` holding a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let value: Validation<String, i32> = Validation::success(42);
    /// assert!(value.is_success());
    /// ```
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` from a single error, wrapping it in a singleton
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failure("missing field");
    /// assert_eq!(failed.failure_ref().unwrap().as_slice(), ["missing field"]);
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(smallvec![error])
    }

    /// Creates a `Failure` from an ordered sequence of errors, stored as-is.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty: a `Failure` always carries at least
    /// one error, and an empty input is a bug in the calling code, not a
    /// domain failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failures(["too short", "no digit"]);
    /// assert_eq!(failed.failure_ref().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn failures<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let errors: ErrorList<E> = errors.into_iter().collect();
        assert!(
            !errors.is_empty(),
            "Validation::failures requires at least one error"
        );
        Self::Failure(errors)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// assert!(Validation::<&str, i32>::success(42).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// assert!(Validation::<&str, i32>::failure("boom").is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error list if this is a `Failure`.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// A `Failure` carries its error list through unchanged and `function`
    /// is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let value: Validation<String, i32> = Validation::success(21);
    /// assert_eq!(value.map(|n| n * 2), Validation::success(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Sequences a computation that itself returns a `Validation`.
    ///
    /// The result is returned as-is; a `Failure` short-circuits without
    /// invoking `function`. Chaining never aggregates; use
    /// [`concat`](Self::concat) or [`zip`](Self::zip) for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// fn even(n: i32) -> Validation<&'static str, i32> {
    ///     if n % 2 == 0 {
    ///         Validation::success(n)
    ///     } else {
    ///         Validation::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::success(4).chain(even), Validation::success(4));
    /// assert!(Validation::success(3).chain(even).is_failure());
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Keeps the success value only if the predicate holds, otherwise fails
    /// with the supplied error wrapped as a singleton list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::success(3).filter(|n| *n > 10, || "too small");
    /// assert_eq!(failed.failure_ref().unwrap().as_slice(), ["too small"]);
    /// ```
    #[inline]
    pub fn filter<P, F>(self, predicate: P, error_with: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(smallvec![error_with()])
                }
            }
            Self::Failure(errors) => Self::Failure(errors),
        }
    }

    /// Applies a wrapped function to this success value.
    ///
    /// Structural like `Either::ap`: the first `Failure` in argument order
    /// is returned unchanged. `ap` never merges error lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let value: Validation<String, i32> = Validation::success(41);
    /// let function: Validation<String, fn(i32) -> i32> = Validation::success(|n| n + 1);
    /// assert_eq!(value.ap(function), Validation::success(42));
    /// ```
    #[inline]
    pub fn ap<B, F>(self, other: Validation<E, F>) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, other) {
            (Self::Failure(errors), _) => Validation::Failure(errors),
            (_, Validation::Failure(errors)) => Validation::Failure(errors),
            (Self::Success(value), Validation::Success(function)) => {
                Validation::Success(function(value))
            }
        }
    }

    /// Maps each side independently; exactly one function executes.
    ///
    /// The failure function receives and returns the whole error list. Use
    /// [`map_errors`](Self::map_errors) to transform errors one at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{ErrorList, Validation};
    ///
    /// let failed: Validation<&str, i32> = Validation::failure("boom");
    /// let widened = failed.bimap(
    ///     |errors| errors.into_iter().map(String::from).collect::<ErrorList<String>>(),
    ///     |n| n * 2,
    /// );
    /// assert_eq!(widened.failure_ref().unwrap().as_slice(), ["boom".to_string()]);
    /// ```
    #[inline]
    pub fn bimap<E2, B, F, G>(self, failure_function: F, success_function: G) -> Validation<E2, B>
    where
        F: FnOnce(ErrorList<E>) -> ErrorList<E2>,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(success_function(value)),
            Self::Failure(errors) => Validation::Failure(failure_function(errors)),
        }
    }

    /// Transforms every accumulated error, preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    /// let mapped = failed.map_errors(str::to_uppercase);
    /// assert_eq!(mapped.failure_ref().unwrap().as_slice(), ["A", "B"]);
    /// ```
    #[inline]
    pub fn map_errors<E2, F>(self, function: F) -> Validation<E2, A>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(errors) => {
                Validation::Failure(errors.into_iter().map(function).collect())
            }
        }
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Combines two validations, concatenating `Failure` error sequences.
    ///
    /// This is the semigroup that makes `Validation` what it is:
    ///
    /// - `Success.concat(x)` is `x`
    /// - `Failure(e1).concat(Success(_))` is `Failure(e1)`
    /// - `Failure(e1).concat(Failure(e2))` is `Failure(e1 ++ e2)`, left
    ///   elements first
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let merged = Validation::<&str, i32>::success(1)
    ///     .concat(Validation::failure("e1"))
    ///     .concat(Validation::failure("e2"));
    /// assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(_), other) => other,
            (failure @ Self::Failure(_), Self::Success(_)) => failure,
            (Self::Failure(left), Self::Failure(right)) => Self::Failure(left.combine(right)),
        }
    }

    /// Combines two validations into a pair, accumulating all errors.
    ///
    /// Both must succeed for the pair to exist; error lists merge left
    /// elements first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let both = Validation::<&str, i32>::success(1).zip(Validation::success(2));
    /// assert_eq!(both, Validation::success((1, 2)));
    ///
    /// let merged = Validation::<&str, i32>::failure("e1").zip(Validation::<&str, i32>::failure("e2"));
    /// assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Self::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }

    // =========================================================================
    // Alternatives and Recovery
    // =========================================================================

    /// Returns `self` if successful, otherwise the given alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failure("boom");
    /// assert_eq!(failed.alt(Validation::success(2)), Validation::success(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Lazy form of [`alt`](Self::alt): the supplier runs only on `Failure`.
    #[inline]
    #[must_use]
    pub fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative(),
        }
    }

    /// Converts `Failure` into `Success` of the given value; no-op on
    /// `Success`.
    #[inline]
    #[must_use]
    pub fn recover(self, value: A) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::Success(value),
        }
    }

    /// Lazy form of [`recover`](Self::recover): the function runs only on
    /// `Failure` and receives the error list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, usize> = Validation::failures(["a", "b"]);
    /// assert_eq!(failed.recover_with(|errors| errors.len()), Validation::success(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(ErrorList<E>) -> A,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::Success(function(errors)),
        }
    }

    // =========================================================================
    // Fault Boundary
    // =========================================================================

    /// Runs a fallible supplier, folding a fault into a singleton `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let parsed = Validation::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Validation::success(42));
    ///
    /// let failed = Validation::attempt(|| "nope".parse::<i32>());
    /// assert_eq!(failed.failure_ref().unwrap().len(), 1);
    /// ```
    #[inline]
    pub fn attempt<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<A, E>,
    {
        match supplier() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Applies a fallible function to the success value, folding a fault
    /// into a singleton `Failure`.
    #[inline]
    pub fn checked_map<B, F>(self, throwable: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(errors),
            Self::Success(value) => match throwable(value) {
                Ok(value) => Validation::Success(value),
                Err(error) => Validation::failure(error),
            },
        }
    }

    /// Runs a fallible function on the success value inside a fault
    /// boundary, folding both the existing errors and a thrown fault
    /// through `failure_fold`; the fold result is wrapped as a singleton
    /// list.
    ///
    /// Mirrors `Either::checked_bimap` with the list-wrapping this type
    /// preserves everywhere.
    #[inline]
    pub fn checked_bimap<E2, B, Fault, F, G>(
        self,
        failure_fold: F,
        throwable: G,
    ) -> Validation<E2, B>
    where
        F: FnOnce(Option<ErrorList<E>>, Option<Fault>) -> E2,
        G: FnOnce(A) -> Result<B, Fault>,
    {
        match self {
            Self::Failure(errors) => {
                Validation::Failure(smallvec![failure_fold(Some(errors), None)])
            }
            Self::Success(value) => match throwable(value) {
                Ok(value) => Validation::Success(value),
                Err(fault) => Validation::Failure(smallvec![failure_fold(None, Some(fault))]),
            },
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the success value, or the given default on `Failure`.
    #[inline]
    pub fn get_or(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error list.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> A
    where
        F: FnOnce(ErrorList<E>) -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => function(errors),
        }
    }

    /// Returns the success value, or raises an error computed from the
    /// error list.
    ///
    /// # Errors
    ///
    /// Returns the computed error when this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let failed: Validation<&str, i32> = Validation::failure("x");
    /// let raised = failed.get_or_raise(|errors| errors[0].to_string());
    /// assert_eq!(raised, Err("x".to_string()));
    /// ```
    #[inline]
    pub fn get_or_raise<E2, F>(self, error: F) -> Result<A, E2>
    where
        F: FnOnce(ErrorList<E>) -> E2,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(error(errors)),
        }
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Runs the consumer with the success value, returning the container
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn tap_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs the consumer with the error list, returning the container
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn tap_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&ErrorList<E>),
    {
        if let Self::Failure(errors) = &self {
            consumer(errors);
        }
        self
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Vec`: one element if successful, empty otherwise.
    #[inline]
    pub fn to_vec(self) -> Vec<A> {
        match self {
            Self::Success(value) => vec![value],
            Self::Failure(_) => Vec::new(),
        }
    }

    // =========================================================================
    // Collection Combinators
    // =========================================================================

    /// Flattens every `Failure`'s error sequence from a mixed list,
    /// preserving order and skipping successes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let errors = Validation::failures_of([
    ///     Validation::<&str, i32>::failures(["a", "b"]),
    ///     Validation::success(1),
    ///     Validation::failure("c"),
    /// ]);
    /// assert_eq!(errors, vec!["a", "b", "c"]);
    /// ```
    pub fn failures_of<I>(items: I) -> Vec<E>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors = Vec::new();
        for item in items {
            if let Self::Failure(list) = item {
                errors.extend(list);
            }
        }
        errors
    }

    /// Collects every `Success` value from a mixed list, preserving order
    /// and skipping failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let values = Validation::successes_of([
    ///     Validation::<&str, i32>::success(1),
    ///     Validation::failure("a"),
    ///     Validation::success(2),
    /// ]);
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    pub fn successes_of<I>(items: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        for item in items {
            if let Self::Success(value) = item {
                values.push(value);
            }
        }
        values
    }

    /// Collects every success value, returning the **first** `Failure`
    /// as-is if any exists.
    ///
    /// `all` does not aggregate; only [`concat`](Self::concat) and
    /// [`zip`](Self::zip) merge error lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Validation;
    ///
    /// let stopped = Validation::all([
    ///     Validation::<&str, i32>::failure("first"),
    ///     Validation::failure("second"),
    /// ]);
    /// assert_eq!(stopped.failure_ref().unwrap().as_slice(), ["first"]);
    /// ```
    pub fn all<I>(items: I) -> Validation<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let iterator = items.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for item in iterator {
            match item {
                Self::Success(value) => values.push(value),
                Self::Failure(errors) => return Validation::Failure(errors),
            }
        }
        Validation::Success(values)
    }

    /// Returns the first success value as a `Maybe`, or `Absent` if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::{Maybe, Validation};
    ///
    /// let first = Validation::any([
    ///     Validation::<&str, i32>::failure("a"),
    ///     Validation::success(2),
    /// ]);
    /// assert_eq!(first, Maybe::present(2));
    /// ```
    pub fn any<I>(items: I) -> Maybe<A>
    where
        I: IntoIterator<Item = Self>,
    {
        Maybe::of_nullable(items.into_iter().find_map(|item| match item {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }))
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    /// Converts a `Result`, wrapping an `Err` as a singleton `Failure`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Validation::Success(b)) => Validation::Success(function(a, b)),
            (Self::Failure(errors), _) => Validation::Failure(errors),
            (_, Validation::Failure(errors)) => Validation::Failure(errors),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<E, B>) -> Validation<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Success(function), Validation::Success(value)) => {
                Validation::Success(function(value))
            }
            (Self::Failure(errors), _) => Validation::Failure(errors),
            (_, Validation::Failure(errors)) => Validation::Failure(errors),
        }
    }
}

impl<E, A> Monad for Validation<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        self.chain(function)
    }
}

impl<E, A> Alt for Validation<E, A> {
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

impl<E, A> Semigroup for Validation<E, A> {
    /// The aggregating combine; see [`Validation::concat`].
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn failure_wraps_a_bare_error_as_a_singleton() {
        let failed: Validation<&str, i32> = Validation::failure("boom");
        assert_eq!(failed.failure_ref().unwrap().as_slice(), ["boom"]);
    }

    #[rstest]
    fn failures_stores_the_sequence_as_is() {
        let failed: Validation<&str, i32> = Validation::failures(["a", "b", "c"]);
        assert_eq!(failed.failure_ref().unwrap().as_slice(), ["a", "b", "c"]);
    }

    #[rstest]
    #[should_panic(expected = "Validation::failures requires at least one error")]
    fn failures_of_an_empty_sequence_is_a_contract_violation() {
        let _ = Validation::<&str, i32>::failures([]);
    }

    #[rstest]
    fn map_carries_the_error_list_unchanged() {
        let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
        let mapped = failed.map(|n| n * 2);
        assert_eq!(mapped.failure_ref().unwrap().as_slice(), ["a", "b"]);
    }

    #[rstest]
    fn filter_wraps_the_bare_error_as_a_singleton_list() {
        let failed: Validation<&str, i32> = Validation::success(3).filter(|n| *n > 10, || "too small");
        assert_eq!(failed.failure_ref().unwrap().as_slice(), ["too small"]);
    }

    #[rstest]
    fn ap_returns_the_first_failure_without_merging() {
        let value: Validation<&str, i32> = Validation::failure("value side");
        let function: Validation<&str, fn(i32) -> i32> = Validation::failure("function side");
        let result = value.ap(function);
        assert_eq!(result.failure_ref().unwrap().as_slice(), ["value side"]);
    }

    #[rstest]
    fn concat_success_yields_the_other_operand() {
        let merged = Validation::<&str, i32>::success(1).concat(Validation::success(2));
        assert_eq!(merged, Validation::success(2));
    }

    #[rstest]
    fn concat_keeps_failure_over_success() {
        let merged = Validation::<&str, i32>::failure("e1").concat(Validation::success(1));
        assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1"]);
    }

    #[rstest]
    fn concat_merges_failures_left_first() {
        let merged = Validation::<&str, i32>::success(1)
            .concat(Validation::failure("e1"))
            .concat(Validation::failure("e2"));
        assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
    }

    #[rstest]
    fn zip_accumulates_both_error_lists() {
        let merged =
            Validation::<&str, i32>::failure("e1").zip(Validation::<&str, i32>::failure("e2"));
        assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
    }

    #[rstest]
    fn checked_bimap_wraps_the_fold_result_as_a_singleton() {
        let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
        let folded: Validation<usize, i32> = failed.checked_bimap(
            |existing, fault: Option<&str>| {
                assert!(fault.is_none());
                existing.map_or(0, |errors| errors.len())
            },
            Ok,
        );
        assert_eq!(folded.failure_ref().unwrap().as_slice(), [2]);
    }

    #[rstest]
    fn get_or_raise_exposes_the_error_list() {
        let failed: Validation<&str, i32> = Validation::failure("x");
        let raised = failed.get_or_raise(|errors| errors[0].to_string());
        assert_eq!(raised, Err("x".to_string()));
    }

    #[rstest]
    fn all_returns_the_first_failure_as_is() {
        let stopped = Validation::all([
            Validation::<&str, i32>::failures(["a", "b"]),
            Validation::failure("c"),
        ]);
        assert_eq!(stopped.failure_ref().unwrap().as_slice(), ["a", "b"]);
    }

    #[rstest]
    fn all_collects_in_input_order() {
        let collected = Validation::<&str, i32>::all([
            Validation::success(1),
            Validation::success(2),
        ]);
        assert_eq!(collected, Validation::success(vec![1, 2]));
    }

    #[rstest]
    fn any_returns_absent_for_all_failures() {
        let result = Validation::any([
            Validation::<&str, i32>::failure("a"),
            Validation::failure("b"),
        ]);
        assert!(result.is_absent());
    }

    #[rstest]
    fn failures_of_flattens_in_order() {
        let errors = Validation::failures_of([
            Validation::<&str, i32>::failures(["a", "b"]),
            Validation::success(1),
            Validation::failure("c"),
        ]);
        assert_eq!(errors, vec!["a", "b", "c"]);
    }
}
