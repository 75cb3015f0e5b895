//! Alt and Alternative type classes - choosing between containers.
//!
//! This module provides two traits:
//!
//! - [`Alt`]: the choice operation every container supports: a positive
//!   variant returns itself, a negative variant yields to the alternative.
//! - [`Alternative`]: `Alt` plus an identity element (`empty`). Only `Maybe`
//!   has an honest identity (`Absent`); `Either` and `Validation` cannot
//!   manufacture a negative payload out of nothing, so they implement `Alt`
//!   alone.
//!
//! # Laws
//!
//! All `Alt` implementations must satisfy:
//!
//! ## Positive Short-Circuit
//!
//! ```text
//! positive.alt(anything) == positive
//! ```
//!
//! ## Negative Yield
//!
//! ```text
//! negative.alt(x) == x
//! ```
//!
//! ## Associativity
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! `Alternative` additionally requires the identity laws
//! `empty.alt(x) == x` and `x.alt(empty) == x`.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Alt;
//!
//! let first: Maybe<i32> = Maybe::absent();
//! let second: Maybe<i32> = Maybe::present(42);
//! assert_eq!(first.alt(second), Maybe::present(42));
//!
//! let first = Maybe::present(1);
//! let second = Maybe::present(2);
//! assert_eq!(first.alt(second), Maybe::present(1));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;

/// A type class for choosing between two containers of the same type.
///
/// A positive variant short-circuits; a negative variant yields to the
/// alternative. The lazy form [`alt_with`](Alt::alt_with) guarantees the
/// supplier is never invoked when `self` is positive.
///
/// # Examples
///
/// ```rust
/// use monars::container::Either;
/// use monars::typeclass::Alt;
///
/// let failed: Either<String, i32> = Either::left("boom".to_string());
/// let fallback: Either<String, i32> = Either::right(7);
/// assert_eq!(failed.alt(fallback), Either::right(7));
/// ```
pub trait Alt: Functor {
    /// Combines two alternatives, returning the first positive variant.
    ///
    /// # Arguments
    ///
    /// * `alternative` - The fallback container used when `self` is negative
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Lazy form of [`alt`](Alt::alt): the supplier runs only when `self`
    /// is the negative variant.
    ///
    /// # Arguments
    ///
    /// * `alternative` - A supplier producing the fallback container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Alt;
    ///
    /// let present = Maybe::present(1);
    /// let untouched = present.alt_with(|| unreachable!("never evaluated"));
    /// assert_eq!(untouched, Maybe::present(1));
    /// ```
    #[must_use]
    fn alt_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self;
}

/// A type class for `Alt` instances with an identity element.
///
/// `empty` is both the identity of `alt` and the failure value of the
/// container. Implemented by `Maybe` only: its `Absent` variant carries no
/// payload, so an identity exists for every payload type.
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::typeclass::{Alt, Alternative};
///
/// let empty: Maybe<i32> = <Maybe<()>>::empty();
/// assert!(empty.is_absent());
/// assert_eq!(empty.alt(Maybe::present(3)), Maybe::present(3));
/// ```
pub trait Alternative: Alt + Applicative {
    /// Returns the identity element for `alt`.
    fn empty<A>() -> Self::WithType<A>;

    /// Conditionally succeeds with `()` or fails.
    ///
    /// Returns `pure(())` if the condition holds, otherwise `empty`. Useful
    /// for conditional filtering inside chained computations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::{Alternative, Functor};
    ///
    /// fn keep_positive(n: i32) -> Maybe<i32> {
    ///     <Maybe<()>>::guard(n > 0).fmap(move |()| n)
    /// }
    ///
    /// assert_eq!(keep_positive(5), Maybe::present(5));
    /// assert!(keep_positive(-3).is_absent());
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition { Self::pure(()) } else { Self::empty() }
    }

    /// Makes the computation infallible, recording success as an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Alternative;
    ///
    /// assert_eq!(Maybe::present(42).optional(), Maybe::present(Some(42)));
    /// assert_eq!(Maybe::<i32>::absent().optional(), Maybe::present(None));
    /// ```
    fn optional(self) -> Self::WithType<Option<Self::Inner>>
    where
        Self: Sized;

    /// Chooses from multiple alternatives, returning the first positive one.
    ///
    /// # Arguments
    ///
    /// * `alternatives` - An iterator of containers tried in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Alternative;
    ///
    /// let found = Maybe::choice([Maybe::absent(), Maybe::present(2), Maybe::present(3)]);
    /// assert_eq!(found, Maybe::present(2));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}
