//! Monoid type class - semigroup with an identity element.
//!
//! This module provides the `Monoid` trait for semigroups that have an
//! identity element. `Maybe` is the container-side instance: `Absent` is the
//! identity, and combination merges payloads through their own semigroup.
//!
//! # Laws
//!
//! All `Monoid` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! Monoid::empty().combine(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.combine(Monoid::empty()) == x
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monars::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let total = Vec::combine_all([vec![1], vec![2, 3], vec![]]);
//! assert_eq!(total, vec![1, 2, 3]);
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// Monoid::empty().combine(x) == x
/// x.combine(Monoid::empty()) == x
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value in the iterator, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monars::typeclass::Monoid;
    ///
    /// let combined = String::combine_all(["a".to_string(), "b".to_string()]);
    /// assert_eq!(combined, "ab");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

impl Monoid for () {
    fn empty() -> Self {}
}
