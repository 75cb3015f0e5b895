//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their positive payload while preserving the
//! container's structure. Every container in this crate is right-biased, so
//! mapping acts on `Present`/`Right`/`Success` and leaves the negative
//! variant untouched without invoking the supplied function.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::present(5);
//! let transformed: Maybe<String> = present.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::present("5".to_string()));
//!
//! // The absent variant is preserved and the function never runs.
//! let absent: Maybe<i32> = Maybe::absent();
//! let transformed: Maybe<String> = absent.fmap(|n| n.to_string());
//! assert!(transformed.is_absent());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their payload.
///
/// `Functor` is the root of the shared operation contract: every container
/// implements it, and [`Applicative`](super::Applicative) and
/// [`Monad`](super::Monad) build on it.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use monars::container::Either;
/// use monars::typeclass::Functor;
///
/// let value: Either<String, i32> = Either::right(5);
/// let doubled = value.fmap(|n| n * 2);
/// assert_eq!(doubled, Either::right(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the positive payload.
    ///
    /// The negative variant short-circuits: it is returned unchanged and
    /// `function` is never invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the payload
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Functor;
    ///
    /// let value: Maybe<i32> = Maybe::present(5);
    /// assert_eq!(value.fmap(|n| n * 2), Maybe::present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Maybe;
    /// use monars::typeclass::Functor;
    ///
    /// let value: Maybe<i32> = Maybe::present(5);
    /// assert_eq!(value.replace("replaced"), Maybe::present("replaced"));
    ///
    /// let absent: Maybe<i32> = Maybe::absent();
    /// assert!(absent.replace("replaced").is_absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, replacing it with `()`.
    ///
    /// Useful when only the variant matters, not the value it carries.
    /// Equivalent to `replace(())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::container::Either;
    /// use monars::typeclass::Functor;
    ///
    /// let value: Either<String, i32> = Either::right(5);
    /// assert_eq!(value.void(), Either::right(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
