//! Function composition utilities.
//!
//! This module provides the partial-application primitive consumed by the
//! free-function facade: the [`curry2!`](crate::curry2) and
//! [`curry3!`](crate::curry3) macros, which convert arbitrary
//! multi-argument functions into curried form. Invoked with fewer than all
//! arguments, a curried function returns a function awaiting the remainder;
//! argument order is preserved, and full saturation produces the same
//! result as one direct call.
//!
//! # Examples
//!
//! ```rust
//! use monars::curry2;
//!
//! fn join(separator: &str, parts: Vec<&str>) -> String {
//!     parts.join(separator)
//! }
//!
//! let with_comma = curry2!(join)(", ");
//! assert_eq!(with_comma(vec!["a", "b"]), "a, b");
//! ```

mod curry_macro;
