//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, a closed sum of exactly two
//! variants: `Present(T)` holding a value, and `Absent` holding nothing.
//! It replaces null checks with ordinary data flow: operations act on the
//! `Present` side and short-circuit past `Absent`.
//!
//! The host's absent-marker (a null or undefined value) is represented by
//! `Option::None` and enters the type in exactly one place,
//! [`Maybe::of_nullable`]. Because `Present` takes its payload by value,
//! constructing `Present` around an absent-marker is not expressible; the
//! smart-constructor invariant is enforced at compile time.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//!
//! // Construction
//! let present = Maybe::present(42);
//! let absent: Maybe<i32> = Maybe::absent();
//! let from_nullable = Maybe::of_nullable(Some(42));
//! assert_eq!(present, from_nullable);
//!
//! // Pattern matching
//! match present {
//!     Maybe::Present(n) => println!("got {n}"),
//!     Maybe::Absent => println!("nothing"),
//! }
//!
//! // Chained transformation with a default at the boundary
//! let result = absent.map(|n| n * 2).get_or(0);
//! assert_eq!(result, 0);
//! ```

use crate::typeclass::{Alt, Alternative, Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A value that may be absent.
///
/// `Maybe<T>` is right-biased: `map`, `chain`, `filter`, and `ap` operate on
/// `Present` and return `Absent` unchanged without invoking their function
/// arguments. Every operation consumes `self` and returns a new container;
/// nothing is ever mutated in place.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
///
/// let length = Maybe::present("hello")
///     .map(str::len)
///     .filter(|n| *n > 3)
///     .get_or(0);
/// assert_eq!(length, 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Smart Constructors
    // =========================================================================

    /// Creates a `Present` holding `value`.
    ///
    /// The payload is taken by value, so an absent-marker can never reach
    /// this constructor; use [`of_nullable`](Self::of_nullable) when the
    /// input may be missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value = Maybe::present(42);
    /// assert!(value.is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Alias for [`present`](Self::present).
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::present(value)
    }

    /// Creates an `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::absent();
    /// assert!(value.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Alias for [`absent`](Self::absent).
    #[inline]
    pub const fn nothing() -> Self {
        Self::absent()
    }

    /// Creates a `Maybe` from a possibly-missing value. Never fails.
    ///
    /// `None` (the absent-marker) becomes `Absent`; everything else becomes
    /// `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::of_nullable(Some(1)), Maybe::present(1));
    /// assert!(Maybe::<i32>::of_nullable(None).is_absent());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert!(Maybe::present(1).is_present());
    /// assert!(!Maybe::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert!(Maybe::<i32>::absent().is_absent());
    /// assert!(!Maybe::present(1).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns a reference to the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value = Maybe::present(42);
    /// assert_eq!(value.present_ref(), Some(&42));
    /// assert_eq!(Maybe::<i32>::absent().present_ref(), None);
    /// ```
    #[inline]
    pub const fn present_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// `Absent` short-circuits: it is returned unchanged and `function` is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).map(|n| n * 2), Maybe::present(10));
    /// assert!(Maybe::<i32>::absent().map(|n| n * 2).is_absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a function whose result may be missing, re-wrapping through
    /// [`of_nullable`](Self::of_nullable).
    ///
    /// A mapper returning `None` collapses the result to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let parsed = Maybe::present("42").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::present(42));
    ///
    /// let failed = Maybe::present("nope").map_nullable(|s| s.parse::<i32>().ok());
    /// assert!(failed.is_absent());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Maybe::of_nullable(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Sequences a computation that itself returns a `Maybe`.
    ///
    /// The result is returned as-is, never re-wrapped and never flattened.
    /// `Absent` short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// fn first_char(s: &str) -> Maybe<char> {
    ///     Maybe::of_nullable(s.chars().next())
    /// }
    ///
    /// assert_eq!(Maybe::present("abc").chain(first_char), Maybe::present('a'));
    /// assert!(Maybe::present("").chain(first_char).is_absent());
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the payload only if the predicate holds.
    ///
    /// `Present(v)` becomes `Absent` unless `predicate(&v)` returns `true`;
    /// `Absent` is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter(|n| n % 2 == 0), Maybe::present(4));
    /// assert!(Maybe::present(3).filter(|n| n % 2 == 0).is_absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Applies a wrapped function to this payload.
    ///
    /// The application happens only when both sides are `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value = Maybe::present(41);
    /// let function = Maybe::present(|n: i32| n + 1);
    /// assert_eq!(value.ap(function), Maybe::present(42));
    ///
    /// let no_function: Maybe<fn(i32) -> i32> = Maybe::absent();
    /// assert!(Maybe::present(41).ap(no_function).is_absent());
    /// ```
    #[inline]
    pub fn ap<U, F>(self, other: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, other) {
            (Self::Present(value), Maybe::Present(function)) => Maybe::Present(function(value)),
            _ => Maybe::Absent,
        }
    }

    // =========================================================================
    // Alternatives and Recovery
    // =========================================================================

    /// Returns `self` if present, otherwise the given alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).alt(Maybe::present(2)), Maybe::present(1));
    /// assert_eq!(Maybe::absent().alt(Maybe::present(2)), Maybe::present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative,
        }
    }

    /// Lazy form of [`alt`](Self::alt): the supplier runs only on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let value = Maybe::present(1).alt_with(|| unreachable!("never evaluated"));
    /// assert_eq!(value, Maybe::present(1));
    ///
    /// let fallback = Maybe::absent().alt_with(|| Maybe::present(2));
    /// assert_eq!(fallback, Maybe::present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    /// Converts `Absent` into `Present` of the given value; no-op on
    /// `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::absent().recover(0), Maybe::present(0));
    /// assert_eq!(Maybe::present(1).recover(0), Maybe::present(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn recover(self, value: T) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => Self::Present(value),
        }
    }

    /// Lazy form of [`recover`](Self::recover): the supplier runs only on
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::absent().recover_with(|| 7), Maybe::present(7));
    /// ```
    #[inline]
    #[must_use]
    pub fn recover_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => Self::Present(supplier()),
        }
    }

    /// Recovers with a possibly-missing value, re-wrapping through
    /// [`of_nullable`](Self::of_nullable): a `None` recovery value yields
    /// `Absent` again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::absent().recover_nullable(Some(7)), Maybe::present(7));
    /// assert!(Maybe::<i32>::absent().recover_nullable(None).is_absent());
    /// ```
    #[inline]
    #[must_use]
    pub fn recover_nullable(self, value: Option<T>) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => Self::of_nullable(value),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the payload, or the given default on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).get_or(0), 1);
    /// assert_eq!(Maybe::absent().get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the payload, or the supplied default on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::absent().get_or_else(|| 6 * 7), 42);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns the payload, or raises the supplied error on `Absent`.
    ///
    /// "Raising" is rendered as returning `Err`, so the caller propagates it
    /// with `?`.
    ///
    /// # Errors
    ///
    /// Returns the supplied error when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let missing: Maybe<i32> = Maybe::absent();
    /// let raised = missing.get_or_raise(|| "no value");
    /// assert_eq!(raised, Err("no value"));
    /// ```
    #[inline]
    pub fn get_or_raise<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error()),
        }
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Runs the consumer with the payload if present, returning the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let mut seen = None;
    /// let value = Maybe::present(3).tap(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(3));
    /// assert_eq!(value, Maybe::present(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn tap<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs the consumer if absent, returning the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let mut called = false;
    /// let value: Maybe<i32> = Maybe::absent().tap_absent(|| called = true);
    /// assert!(called);
    /// assert!(value.is_absent());
    /// ```
    #[inline]
    #[must_use]
    pub fn tap_absent<F>(self, consumer: F) -> Self
    where
        F: FnOnce(),
    {
        if let Self::Absent = &self {
            consumer();
        }
        self
    }

    // =========================================================================
    // Fault Boundary
    // =========================================================================

    /// Runs a fallible supplier, folding a fault into `Absent`.
    ///
    /// This is the only place a fault is caught, and only for the supplied
    /// callable; the fault value itself is discarded (use
    /// `Either::attempt` or `Validation::attempt` to keep it).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let parsed = Maybe::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Maybe::present(42));
    ///
    /// let failed = Maybe::attempt(|| "nope".parse::<i32>());
    /// assert!(failed.is_absent());
    /// ```
    #[inline]
    pub fn attempt<E, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match supplier() {
            Ok(value) => Self::Present(value),
            Err(_) => Self::Absent,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Vec`: one element if present, empty otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).to_vec(), vec![1]);
    /// assert!(Maybe::<i32>::absent().to_vec().is_empty());
    /// ```
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Present(value) => vec![value],
            Self::Absent => Vec::new(),
        }
    }

    /// Converts into an `Option`, the absent-marker carrier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).to_option(), Some(1));
    /// assert_eq!(Maybe::<i32>::absent().to_option(), None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Collection Combinators
    // =========================================================================

    /// Collects every payload, short-circuiting at the first `Absent`.
    ///
    /// Values appear in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let all = Maybe::all([Maybe::present(1), Maybe::present(2)]);
    /// assert_eq!(all, Maybe::present(vec![1, 2]));
    ///
    /// let stopped = Maybe::all([Maybe::present(1), Maybe::absent(), Maybe::present(2)]);
    /// assert!(stopped.is_absent());
    /// ```
    pub fn all<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let iterator = items.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for item in iterator {
            match item {
                Self::Present(value) => values.push(value),
                Self::Absent => return Maybe::Absent,
            }
        }
        Maybe::Present(values)
    }

    /// Returns the first `Present`, or `Absent` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    ///
    /// let first = Maybe::any([Maybe::absent(), Maybe::present(2), Maybe::present(3)]);
    /// assert_eq!(first, Maybe::present(2));
    ///
    /// let none = Maybe::any::<[Maybe<i32>; 0]>([]);
    /// assert!(none.is_absent());
    /// ```
    pub fn any<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .find(Self::is_present)
            .unwrap_or(Self::Absent)
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Absent`, the identity of [`alt`](Maybe::alt).
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts through [`Maybe::of_nullable`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts through [`Maybe::to_option`].
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.to_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Present(function), Maybe::Present(value)) => Maybe::Present(function(value)),
            _ => Maybe::Absent,
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.chain(function)
    }
}

impl<T> Alt for Maybe<T> {
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

impl<T> Alternative for Maybe<T> {
    #[inline]
    fn empty<A>() -> Maybe<A> {
        Maybe::Absent
    }

    #[inline]
    fn optional(self) -> Maybe<Option<T>> {
        Maybe::Present(self.to_option())
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::any(alternatives)
    }
}

impl<T: Semigroup> Semigroup for Maybe<T> {
    /// Merges two `Present` payloads through their own semigroup; a lone
    /// `Present` wins over `Absent`.
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    #[inline]
    fn empty() -> Self {
        Self::Absent
    }
}
