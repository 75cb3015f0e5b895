//! The three algebraic container types.
//!
//! - [`Maybe`]: a value or nothing (`Present` / `Absent`)
//! - [`Either`]: a success or one error (`Right` / `Left`)
//! - [`Validation`]: a success or many accumulated errors
//!   (`Success` / `Failure`)
//!
//! All three are closed sum types with exactly two variants, created only
//! through smart constructors, immutable once built, and right-biased: the
//! positive variant is the one `map`/`chain` operate through. They share the
//! operation contract in [`crate::typeclass`] and convert losslessly into one
//! another through [`crate::convert`].
//!
//! # Choosing a container
//!
//! | You have | Use |
//! |---|---|
//! | a value that may be missing, no reason attached | [`Maybe`] |
//! | a computation with one failure mode at a time | [`Either`] |
//! | independent checks whose failures should all be reported | [`Validation`] |
//!
//! # Examples
//!
//! ```rust
//! use monars::container::{Either, Maybe, Validation};
//!
//! let present = Maybe::present(1);
//! let right: Either<String, i32> = Either::right(1);
//! let success: Validation<String, i32> = Validation::success(1);
//!
//! assert_eq!(present.map(|n| n + 1), Maybe::present(2));
//! assert_eq!(right.map(|n| n + 1), Either::right(2));
//! assert_eq!(success.map(|n| n + 1), Validation::success(2));
//! ```

pub mod either;
pub mod maybe;
pub mod validation;

pub use either::Either;
pub use maybe::Maybe;
pub use validation::{ErrorList, Validation};

// The containers are plain values: freely aliasable for reads and safe to
// move across threads whenever their payloads are.
static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone, PartialEq);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone, PartialEq);
static_assertions::assert_impl_all!(Validation<String, i32>: Send, Sync, Clone, PartialEq);
