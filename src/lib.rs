//! # monars
//!
//! Law-governed algebraic container types for Rust.
//!
//! ## Overview
//!
//! This library provides three closed, two-variant container types and the
//! algebraic machinery around them:
//!
//! - **`Maybe<T>`**: a value or nothing (`Present` / `Absent`)
//! - **`Either<L, R>`**: a success or one failure (`Right` / `Left`)
//! - **`Validation<E, A>`**: a success or many accumulated failures
//!   (`Success` / `Failure` over a non-empty error list)
//!
//! All three share one operation contract of functor, applicative, monad,
//! alt, and (for `Validation`) semigroup, expressed as traits in
//! [`typeclass`] and verified against the algebraic laws by property tests.
//! They convert losslessly into one another through [`convert`], and every
//! instance operation is mirrored by a right-curried free function in
//! [`facade`], container last, so pipelines compose left-to-right.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the operation-contract traits
//! - `container`: the three container types
//! - `convert`: cross-type conversions and the deferred bridge
//! - `facade`: the curried free-function surface
//! - `compose`: the `curry2!`/`curry3!` macros
//! - `async`: `to_deferred` into already-settled futures
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use monars::container::{Maybe, Validation};
//!
//! // Short-circuiting optional flow
//! let shouted = Maybe::present("hello")
//!     .map(str::to_uppercase)
//!     .filter(|s| !s.is_empty())
//!     .get_or_else(|| "...".to_string());
//! assert_eq!(shouted, "HELLO");
//!
//! // Aggregating every failure instead of stopping at the first
//! let report = Validation::<&str, ()>::success(())
//!     .concat(Validation::failure("name is empty"))
//!     .concat(Validation::failure("age is negative"));
//! assert_eq!(report.failure_ref().unwrap().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, the operation-contract traits, and the
/// conversion seams. The facade modules are deliberately left out: their
/// functions are meant to be called qualified (`maybe::map`, `either::alt`).
///
/// # Usage
///
/// ```rust
/// use monars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "container")]
    pub use crate::container::{Either, ErrorList, Maybe, Validation};

    #[cfg(feature = "convert")]
    pub use crate::convert::{Deferred, Disjunction};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "facade")]
pub mod facade;

#[cfg(feature = "compose")]
pub mod compose;
