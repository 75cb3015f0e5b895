//! Free-function façade over the container types.
//!
//! For every instance method `m(a1, .., aN)` on a container `c`, the
//! matching module here exposes a standalone function such that
//!
//! ```text
//! m(a1)(..)(aN)(c) == c.m(a1, .., aN)
//! ```
//!
//! Each function is right-curried (arguments in the method's order, the
//! container always last), so call sites compose left-to-right in
//! pipelines and partial applications can be named and reused. The
//! returned closures are ordinary values; the [`curry2!`](crate::curry2)
//! and [`curry3!`](crate::curry3) macros provide the same shape for
//! arbitrary user functions.
//!
//! Each module also carries the collection combinators for its type:
//! `each` (ordered visiting with early stop at the first negative
//! variant), `lift` (mapping a function through every container's own
//! `map`), and `all`/`any`.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::facade::maybe;
//!
//! // Progressive application: name the partial, reuse it
//! let double = maybe::map(|n: i32| n * 2);
//! assert_eq!(double(Maybe::present(21)), Maybe::present(42));
//!
//! // Fully saturated, container last
//! assert_eq!(maybe::get_or(0)(Maybe::absent()), 0);
//! ```

pub mod either;
pub mod maybe;
pub mod validation;
