//! The curry macro family for converting multi-argument functions to curried form.
//!
//! Currying transforms a function that takes multiple arguments into a
//! sequence of functions, each taking a single argument. This is the
//! primitive behind the free-function facade's shape: a curried function
//! applied one argument at a time, producing the same result as one full
//! invocation, in the same argument order.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function and
//! arguments across multiple closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused
//! - Arguments that don't implement `Copy` to work correctly
//!
//! Note: The returned closures implement `Fn`, so a partial application can
//! be saturated repeatedly with different final arguments.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and
/// returns another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types must implement [`Clone`] (for reusability of partial
///   applications)
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use monars::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Partial application
///
/// ```
/// use monars::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given a function `f(a, b, c) -> d`, returns nested closures that take one
/// argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use monars::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let curried = curry3!(clamp);
/// let percent = curried(0)(100);
///
/// assert_eq!(percent(120), 100);
/// assert_eq!(percent(-5), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}
