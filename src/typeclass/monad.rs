//! Monad type class - sequencing dependent computations.
//!
//! This module provides the `Monad` trait, which extends
//! [`Applicative`](super::Applicative) with `flat_map`: sequencing a
//! computation whose next step depends on the previous payload.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(x).flat_map(f) == f(x)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 {
//!         Maybe::present(n / 2)
//!     } else {
//!         Maybe::absent()
//!     }
//! }
//!
//! assert_eq!(Maybe::present(8).flat_map(half), Maybe::present(4));
//! assert!(Maybe::present(3).flat_map(half).is_absent());
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations with dependency.
///
/// `flat_map` is the trait-level counterpart of every container's `chain`
/// operation: the negative variant short-circuits without invoking the
/// supplied function, and the result is returned as-is; never
/// re-wrapped, never flattened.
///
/// # Examples
///
/// ```rust
/// use monars::container::Either;
/// use monars::typeclass::Monad;
///
/// let value: Either<String, i32> = Either::right(5);
/// let result = value.flat_map(|n| Either::<String, i32>::right(n * 2));
/// assert_eq!(result, Either::right(10));
/// ```
pub trait Monad: Applicative {
    /// Sequences a computation that depends on the payload.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the payload to the next container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Monad;
    ///
    /// let value = Maybe::present(5);
    /// assert_eq!(
    ///     value.flat_map(|n| Maybe::present(n + 1)),
    ///     Maybe::present(6)
    /// );
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map), matching the standard
    /// library's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences a computation, discarding the current payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Monad;
    ///
    /// let first = Maybe::present(1);
    /// let second = Maybe::present("two");
    /// assert_eq!(first.then(second), Maybe::present("two"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
