//! Type class traits shared by the container types.
//!
//! This module provides the operation contract that all three containers
//! implement. Correctness here is defined by algebraic laws rather than by
//! ad hoc behavior: every implementation is verified against the laws in the
//! `tests/*_laws.rs` suites.
//!
//! - [`Functor`]: mapping over the positive payload
//! - [`Applicative`]: lifting values and combining independent containers
//! - [`Monad`]: sequencing computations with dependency
//! - [`Alt`] / [`Alternative`]: choosing between alternatives
//! - [`Semigroup`]: associative combination (error aggregation)
//! - [`Monoid`]: semigroup with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. This crate uses
//! Generic Associated Types through [`TypeConstructor`] to emulate them,
//! which is what lets the traits above be written once for `Maybe<_>`,
//! `Either<L, _>`, and `Validation<E, _>` alike.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::{Maybe, Validation};
//! use monars::typeclass::{Monad, Semigroup};
//!
//! // Sequencing through the shared contract
//! let chained = Maybe::present(2).flat_map(|n| Maybe::present(n * 10));
//! assert_eq!(chained, Maybe::present(20));
//!
//! // Aggregation is the Validation semigroup
//! let merged = Validation::<&str, ()>::failure("a").combine(Validation::failure("b"));
//! assert_eq!(merged.failure_ref().unwrap().as_slice(), ["a", "b"]);
//! ```

mod alternative;
mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use alternative::{Alt, Alternative};
pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
