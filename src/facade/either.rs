//! Curried free functions mirroring every `Either` operation.
//!
//! The container is always the last argument. Multi-argument operations
//! curry one argument at a time in the method's order:
//! `either::filter(pred)(left_with)(c)` is `c.filter(pred, left_with)`.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Either;
//! use monars::facade::either;
//!
//! let ensure_even = either::filter(|n: &i32| n % 2 == 0)(|| "odd");
//! assert_eq!(ensure_even(Either::right(3)), Either::left("odd"));
//! ```

use crate::container::Either;

// =============================================================================
// Mapping Operations
// =============================================================================

/// Curried [`Either::map`]: `map(f)(c) == c.map(f)`.
pub fn map<L, R, U, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<L, U>
where
    F: FnOnce(R) -> U,
{
    move |container| container.map(function)
}

/// Curried [`Either::map_right`], an explicit alias of [`map`].
pub fn map_right<L, R, U, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<L, U>
where
    F: FnOnce(R) -> U,
{
    move |container| container.map_right(function)
}

/// Curried [`Either::map_left`].
pub fn map_left<L, R, T, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<T, R>
where
    F: FnOnce(L) -> T,
{
    move |container| container.map_left(function)
}

/// Curried [`Either::bimap`]: `bimap(f)(g)(c) == c.bimap(f, g)`.
pub fn bimap<L, R, T, U, F, G>(
    left_function: F,
) -> impl FnOnce(G) -> Box<dyn FnOnce(Either<L, R>) -> Either<T, U>>
where
    F: FnOnce(L) -> T + 'static,
    G: FnOnce(R) -> U + 'static,
{
    move |right_function| Box::new(move |container| container.bimap(left_function, right_function))
}

/// Curried [`Either::chain`].
pub fn chain<L, R, U, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<L, U>
where
    F: FnOnce(R) -> Either<L, U>,
{
    move |container| container.chain(function)
}

/// Curried [`Either::filter`]: `filter(pred)(left_with)(c) == c.filter(pred, left_with)`.
pub fn filter<L, R, P, F>(
    predicate: P,
) -> impl FnOnce(F) -> Box<dyn FnOnce(Either<L, R>) -> Either<L, R>>
where
    P: FnOnce(&R) -> bool + 'static,
    F: FnOnce() -> L + 'static,
    L: 'static,
    R: 'static,
{
    move |left_with| Box::new(move |container| container.filter(predicate, left_with))
}

/// Curried [`Either::filter_or`], the eager form of [`filter`].
pub fn filter_or<L, R, P>(
    predicate: P,
) -> impl FnOnce(L) -> Box<dyn FnOnce(Either<L, R>) -> Either<L, R>>
where
    P: FnOnce(&R) -> bool + 'static,
    L: 'static,
    R: 'static,
{
    move |left_value| Box::new(move |container| container.filter_or(predicate, left_value))
}

/// Curried [`Either::ap`]: the wrapped function comes first.
pub fn ap<L, R, U, F>(other: Either<L, F>) -> impl FnOnce(Either<L, R>) -> Either<L, U>
where
    F: FnOnce(R) -> U,
{
    move |container| container.ap(other)
}

// =============================================================================
// Alternatives and Recovery
// =============================================================================

/// Curried [`Either::alt`].
pub fn alt<L, R>(alternative: Either<L, R>) -> impl FnOnce(Either<L, R>) -> Either<L, R> {
    move |container| container.alt(alternative)
}

/// Curried [`Either::alt_with`].
pub fn alt_with<L, R, F>(alternative: F) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    F: FnOnce() -> Either<L, R>,
{
    move |container| container.alt_with(alternative)
}

/// Curried [`Either::recover`].
pub fn recover<L, R>(value: R) -> impl FnOnce(Either<L, R>) -> Either<L, R> {
    move |container| container.recover(value)
}

/// Curried [`Either::recover_with`].
pub fn recover_with<L, R, F>(function: F) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    F: FnOnce(L) -> R,
{
    move |container| container.recover_with(function)
}

// =============================================================================
// Fault Boundary
// =============================================================================

/// Curried [`Either::checked_map`].
pub fn checked_map<L, R, U, F>(throwable: F) -> impl FnOnce(Either<L, R>) -> Either<L, U>
where
    F: FnOnce(R) -> Result<U, L>,
{
    move |container| container.checked_map(throwable)
}

/// Curried [`Either::checked_bimap`]:
/// `checked_bimap(left_fold)(throwable)(c) == c.checked_bimap(left_fold, throwable)`.
pub fn checked_bimap<L, R, T, U, Fault, F, G>(
    left_fold: F,
) -> impl FnOnce(G) -> Box<dyn FnOnce(Either<L, R>) -> Either<T, U>>
where
    F: FnOnce(Option<L>, Option<Fault>) -> T + 'static,
    G: FnOnce(R) -> Result<U, Fault> + 'static,
    L: 'static,
    R: 'static,
    T: 'static,
    U: 'static,
{
    move |throwable| Box::new(move |container| container.checked_bimap(left_fold, throwable))
}

// =============================================================================
// Unwrapping
// =============================================================================

/// Curried [`Either::get_or`].
pub fn get_or<L, R>(default: R) -> impl FnOnce(Either<L, R>) -> R {
    move |container| container.get_or(default)
}

/// Curried [`Either::get_or_else`].
pub fn get_or_else<L, R, F>(function: F) -> impl FnOnce(Either<L, R>) -> R
where
    F: FnOnce(L) -> R,
{
    move |container| container.get_or_else(function)
}

/// Curried [`Either::get_or_raise`].
pub fn get_or_raise<L, R, E, F>(error: F) -> impl FnOnce(Either<L, R>) -> Result<R, E>
where
    F: FnOnce(L) -> E,
{
    move |container| container.get_or_raise(error)
}

// =============================================================================
// Hooks, Fold, and Swap
// =============================================================================

/// Curried [`Either::tap_right`].
pub fn tap_right<L, R, F>(consumer: F) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    F: FnOnce(&R),
{
    move |container| container.tap_right(consumer)
}

/// Curried [`Either::tap_left`].
pub fn tap_left<L, R, F>(consumer: F) -> impl FnOnce(Either<L, R>) -> Either<L, R>
where
    F: FnOnce(&L),
{
    move |container| container.tap_left(consumer)
}

/// Curried [`Either::fold`]: `fold(f)(g)(c) == c.fold(f, g)`.
pub fn fold<L, R, T, F, G>(
    left_function: F,
) -> impl FnOnce(G) -> Box<dyn FnOnce(Either<L, R>) -> T>
where
    F: FnOnce(L) -> T + 'static,
    G: FnOnce(R) -> T + 'static,
    L: 'static,
    R: 'static,
    T: 'static,
{
    move |right_function| Box::new(move |container| container.fold(left_function, right_function))
}

/// Free-function form of [`Either::swap`].
pub fn swap<L, R>(container: Either<L, R>) -> Either<R, L> {
    container.swap()
}

// =============================================================================
// Conversions
// =============================================================================

/// Free-function form of [`Either::to_vec`].
pub fn to_vec<L, R>(container: Either<L, R>) -> Vec<R> {
    container.to_vec()
}

/// Free-function form of [`Either::to_maybe`].
pub fn to_maybe<L, R>(container: Either<L, R>) -> crate::container::Maybe<R> {
    container.to_maybe()
}

/// Free-function form of [`Either::to_validation`].
pub fn to_validation<L, R>(container: Either<L, R>) -> crate::container::Validation<L, R> {
    container.to_validation()
}

/// Free-function form of [`Either::to_deferred`].
pub fn to_deferred<L, R, D>(container: Either<L, R>) -> D
where
    D: crate::convert::Deferred<Value = R, Reason = L>,
{
    container.to_deferred()
}

// =============================================================================
// Collection Combinators
// =============================================================================

/// Visits every right payload in order, stopping at the first `Left`.
///
/// Returns the input list unreduced, so calls can be chained.
///
/// # Examples
///
/// ```rust
/// use monars::container::Either;
/// use monars::facade::either;
///
/// let items = [
///     Either::<&str, i32>::right(1),
///     Either::left("stop"),
///     Either::right(3),
/// ];
/// let mut seen = Vec::new();
/// either::each(|n| seen.push(*n), &items);
/// assert_eq!(seen, vec![1]);
/// ```
pub fn each<'a, L, R, F>(mut iteratee: F, items: &'a [Either<L, R>]) -> &'a [Either<L, R>]
where
    F: FnMut(&R),
{
    for item in items {
        match item {
            Either::Right(value) => iteratee(value),
            Either::Left(_) => break,
        }
    }
    items
}

/// Maps a function through every container's own `map`, returning the new
/// containers.
pub fn lift<L, R, U, F, I>(mut function: F, items: I) -> Vec<Either<L, U>>
where
    F: FnMut(R) -> U,
    I: IntoIterator<Item = Either<L, R>>,
{
    items
        .into_iter()
        .map(|container| container.map(&mut function))
        .collect()
}

/// Free-function form of [`Either::all`].
pub fn all<L, R, I>(items: I) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    Either::all(items)
}

/// Free-function form of [`Either::any`].
pub fn any<L, R, I>(items: I) -> Option<Either<L, R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    Either::any(items)
}
