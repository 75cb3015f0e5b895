//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for the operation-contract traits
//! shared by the three container types. Rust has no native Higher-Kinded
//! Types; we cannot write a trait that abstracts over `Maybe<_>` and
//! `Either<E, _>` as type constructors directly. [`TypeConstructor`] uses
//! Generic Associated Types to work around this limitation.
//!
//! # Example
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::typeclass::TypeConstructor;
//!
//! fn swap_payload_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numeric: Maybe<i32> = Maybe::present(42);
//! let textual: Maybe<String> = swap_payload_type(numeric);
//! assert!(textual.is_absent());
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types using Generic Associated Types,
/// allowing the operation-contract traits ([`Functor`](super::Functor),
/// [`Applicative`](super::Applicative), [`Monad`](super::Monad)) to be
/// written once and implemented by every container.
///
/// # Associated Types
///
/// - `Inner`: the payload type the constructor is currently applied to.
///   For `Maybe<i32>` this is `i32`; for `Either<L, R>` it is `R` (the
///   containers are right-biased, so the positive payload is the inner type).
/// - `WithType<B>`: the same constructor applied to a different payload.
///   For `Either<L, R>`, `WithType<B>` is `Either<L, B>`: the negative side
///   is carried along unchanged, exactly as it is by every right-biased
///   operation.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The payload type this constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different payload type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures the result is
    /// itself a valid type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
