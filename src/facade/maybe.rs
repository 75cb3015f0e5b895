//! Curried free functions mirroring every `Maybe` operation.
//!
//! The container is always the last argument; everything before it is
//! partially appliable. `maybe::map(f)(c)` is `c.map(f)`, and each partial
//! stage is an ordinary closure that can be named, stored, and reused.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Maybe;
//! use monars::facade::maybe;
//!
//! let parse = maybe::map_nullable(|s: &str| s.parse::<i32>().ok());
//! assert_eq!(parse(Maybe::present("42")), Maybe::present(42));
//! ```

use crate::container::Maybe;

// =============================================================================
// Mapping Operations
// =============================================================================

/// Curried [`Maybe::map`]: `map(f)(c) == c.map(f)`.
pub fn map<T, U, F>(function: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    move |container| container.map(function)
}

/// Curried [`Maybe::map_nullable`].
pub fn map_nullable<T, U, F>(function: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> Option<U>,
{
    move |container| container.map_nullable(function)
}

/// Curried [`Maybe::chain`].
pub fn chain<T, U, F>(function: F) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    move |container| container.chain(function)
}

/// Curried [`Maybe::filter`].
pub fn filter<T, P>(predicate: P) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    move |container| container.filter(predicate)
}

/// Curried [`Maybe::ap`]: the wrapped function comes first.
pub fn ap<T, U, F>(other: Maybe<F>) -> impl FnOnce(Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    move |container| container.ap(other)
}

// =============================================================================
// Alternatives and Recovery
// =============================================================================

/// Curried [`Maybe::alt`].
pub fn alt<T>(alternative: Maybe<T>) -> impl FnOnce(Maybe<T>) -> Maybe<T> {
    move |container| container.alt(alternative)
}

/// Curried [`Maybe::alt_with`].
pub fn alt_with<T, F>(alternative: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce() -> Maybe<T>,
{
    move |container| container.alt_with(alternative)
}

/// Curried [`Maybe::recover`].
pub fn recover<T>(value: T) -> impl FnOnce(Maybe<T>) -> Maybe<T> {
    move |container| container.recover(value)
}

/// Curried [`Maybe::recover_with`].
pub fn recover_with<T, F>(supplier: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    move |container| container.recover_with(supplier)
}

/// Curried [`Maybe::recover_nullable`].
pub fn recover_nullable<T>(value: Option<T>) -> impl FnOnce(Maybe<T>) -> Maybe<T> {
    move |container| container.recover_nullable(value)
}

// =============================================================================
// Unwrapping
// =============================================================================

/// Curried [`Maybe::get_or`].
pub fn get_or<T>(default: T) -> impl FnOnce(Maybe<T>) -> T {
    move |container| container.get_or(default)
}

/// Curried [`Maybe::get_or_else`].
pub fn get_or_else<T, F>(supplier: F) -> impl FnOnce(Maybe<T>) -> T
where
    F: FnOnce() -> T,
{
    move |container| container.get_or_else(supplier)
}

/// Curried [`Maybe::get_or_raise`].
pub fn get_or_raise<T, E, F>(error: F) -> impl FnOnce(Maybe<T>) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    move |container| container.get_or_raise(error)
}

// =============================================================================
// Hooks
// =============================================================================

/// Curried [`Maybe::tap`].
pub fn tap<T, F>(consumer: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce(&T),
{
    move |container| container.tap(consumer)
}

/// Curried [`Maybe::tap_absent`].
pub fn tap_absent<T, F>(consumer: F) -> impl FnOnce(Maybe<T>) -> Maybe<T>
where
    F: FnOnce(),
{
    move |container| container.tap_absent(consumer)
}

// =============================================================================
// Conversions
// =============================================================================

/// Free-function form of [`Maybe::to_vec`].
pub fn to_vec<T>(container: Maybe<T>) -> Vec<T> {
    container.to_vec()
}

/// Free-function form of [`Maybe::to_option`].
pub fn to_option<T>(container: Maybe<T>) -> Option<T> {
    container.to_option()
}

/// Free-function form of [`Maybe::to_either`].
pub fn to_either<T>(container: Maybe<T>) -> crate::container::Either<(), T> {
    container.to_either()
}

/// Free-function form of [`Maybe::to_validation`].
pub fn to_validation<T>(container: Maybe<T>) -> crate::container::Validation<(), T> {
    container.to_validation()
}

/// Free-function form of [`Maybe::to_deferred`].
pub fn to_deferred<T, D>(container: Maybe<T>) -> D
where
    D: crate::convert::Deferred<Value = T, Reason = ()>,
{
    container.to_deferred()
}

// =============================================================================
// Collection Combinators
// =============================================================================

/// Visits every present payload in order, stopping at the first `Absent`.
///
/// Returns the input list unreduced, so calls can be chained.
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::facade::maybe;
///
/// let items = [Maybe::present(1), Maybe::absent(), Maybe::present(3)];
/// let mut seen = Vec::new();
/// maybe::each(|n| seen.push(*n), &items);
/// assert_eq!(seen, vec![1]); // stopped at the Absent
/// ```
pub fn each<'a, T, F>(mut iteratee: F, items: &'a [Maybe<T>]) -> &'a [Maybe<T>]
where
    F: FnMut(&T),
{
    for item in items {
        match item {
            Maybe::Present(value) => iteratee(value),
            Maybe::Absent => break,
        }
    }
    items
}

/// Maps a function through every container's own `map`, returning the new
/// containers.
///
/// # Examples
///
/// ```rust
/// use monars::container::Maybe;
/// use monars::facade::maybe;
///
/// let doubled = maybe::lift(|n: i32| n * 2, [Maybe::present(1), Maybe::absent()]);
/// assert_eq!(doubled, vec![Maybe::present(2), Maybe::absent()]);
/// ```
pub fn lift<T, U, F, I>(mut function: F, items: I) -> Vec<Maybe<U>>
where
    F: FnMut(T) -> U,
    I: IntoIterator<Item = Maybe<T>>,
{
    items
        .into_iter()
        .map(|container| container.map(&mut function))
        .collect()
}

/// Free-function form of [`Maybe::all`].
pub fn all<T, I>(items: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Maybe::all(items)
}

/// Free-function form of [`Maybe::any`].
pub fn any<T, I>(items: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Maybe::any(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn curried_map_equals_instance_map() {
        let container = Maybe::present(21);
        assert_eq!(map(|n: i32| n * 2)(container), container.map(|n| n * 2));
    }

    #[rstest]
    fn partial_application_can_be_named_and_reused() {
        let double = map(|n: i32| n * 2);
        assert_eq!(double(Maybe::present(3)), Maybe::present(6));
    }

    #[rstest]
    fn each_stops_at_the_first_absent() {
        let items = [Maybe::present(1), Maybe::absent(), Maybe::present(3)];
        let mut seen = Vec::new();
        let returned = each(|n| seen.push(*n), &items);
        assert_eq!(seen, vec![1]);
        assert_eq!(returned.len(), 3);
    }

    #[rstest]
    fn lift_preserves_absent_holes() {
        let lifted = lift(|n: i32| n + 1, [Maybe::present(1), Maybe::absent()]);
        assert_eq!(lifted, vec![Maybe::present(2), Maybe::absent()]);
    }
}
