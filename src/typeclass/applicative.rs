//! Applicative type class - applying functions within containers.
//!
//! This module provides the `Applicative` trait, which extends
//! [`Functor`](super::Functor) with the ability to:
//!
//! - Lift a plain value into a container (`pure`)
//! - Combine two independent containers (`map2`, `product`)
//! - Apply a wrapped function to a wrapped value (`apply`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let value: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(value, Maybe::present(42));
//!
//! // Combining two containers
//! let first = Maybe::present(1);
//! let second = Maybe::present(2);
//! assert_eq!(first.map2(second, |a, b| a + b), Maybe::present(3));
//! ```

use super::functor::Functor;

/// A type class for functors that support lifting and combination.
///
/// `Applicative` extends `Functor` with `pure` (lifting a value into the
/// container) and `map2`/`apply` (combining independent containers). For the
/// disjunction containers, combination short-circuits: the first negative
/// variant encountered in argument order is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use monars::container::Either;
/// use monars::typeclass::Applicative;
///
/// let first: Either<String, i32> = Either::right(2);
/// let second: Either<String, i32> = Either::right(3);
/// assert_eq!(first.map2(second, |a, b| a * b), Either::right(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the container's positive variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let value: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(value, Maybe::present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// Both containers must be positive for `function` to run; otherwise the
    /// first negative variant in argument order is returned.
    ///
    /// # Arguments
    ///
    /// * `other` - The second container
    /// * `function` - A function combining both payloads
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let first = Maybe::present(1);
    /// let second = Maybe::present(2);
    /// assert_eq!(first.map2(second, |a, b| a + b), Maybe::present(3));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a wrapped function to a wrapped value.
    ///
    /// `self` holds the function; `other` holds the argument. Both must be
    /// positive for the application to happen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let function = Maybe::present(|n: i32| n + 1);
    /// let value = Maybe::present(41);
    /// assert_eq!(function.apply(value), Maybe::present(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two containers into a pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Applicative;
    ///
    /// let first = Maybe::present(1);
    /// let second = Maybe::present("one");
    /// assert_eq!(first.product(second), Maybe::present((1, "one")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two containers, keeping the left payload.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two containers, keeping the right payload.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}
