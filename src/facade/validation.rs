//! Curried free functions mirroring every `Validation` operation.
//!
//! The container is always the last argument. The aggregating operations
//! (`concat`, `zip`) curry their right operand first, so a chain of
//! independent validations reads in evaluation order.
//!
//! # Examples
//!
//! ```rust
//! use monars::container::Validation;
//! use monars::facade::validation;
//!
//! let merge = validation::concat(Validation::<&str, ()>::failure("late"));
//! let merged = merge(Validation::failure("early"));
//! assert_eq!(merged.failure_ref().unwrap().as_slice(), ["early", "late"]);
//! ```

use crate::container::{ErrorList, Maybe, Validation};

// =============================================================================
// Mapping Operations
// =============================================================================

/// Curried [`Validation::map`]: `map(f)(c) == c.map(f)`.
pub fn map<E, A, B, F>(function: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, B>
where
    F: FnOnce(A) -> B,
{
    move |container| container.map(function)
}

/// Curried [`Validation::map_errors`].
pub fn map_errors<E, E2, A, F>(function: F) -> impl FnOnce(Validation<E, A>) -> Validation<E2, A>
where
    F: FnMut(E) -> E2,
{
    move |container| container.map_errors(function)
}

/// Curried [`Validation::bimap`]: `bimap(f)(g)(c) == c.bimap(f, g)`.
pub fn bimap<E, E2, A, B, F, G>(
    failure_function: F,
) -> impl FnOnce(G) -> Box<dyn FnOnce(Validation<E, A>) -> Validation<E2, B>>
where
    F: FnOnce(ErrorList<E>) -> ErrorList<E2> + 'static,
    G: FnOnce(A) -> B + 'static,
    E: 'static,
    E2: 'static,
    A: 'static,
    B: 'static,
{
    move |success_function| {
        Box::new(move |container| container.bimap(failure_function, success_function))
    }
}

/// Curried [`Validation::chain`].
pub fn chain<E, A, B, F>(function: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, B>
where
    F: FnOnce(A) -> Validation<E, B>,
{
    move |container| container.chain(function)
}

/// Curried [`Validation::filter`]:
/// `filter(pred)(error_with)(c) == c.filter(pred, error_with)`.
pub fn filter<E, A, P, F>(
    predicate: P,
) -> impl FnOnce(F) -> Box<dyn FnOnce(Validation<E, A>) -> Validation<E, A>>
where
    P: FnOnce(&A) -> bool + 'static,
    F: FnOnce() -> E + 'static,
    E: 'static,
    A: 'static,
{
    move |error_with| Box::new(move |container| container.filter(predicate, error_with))
}

/// Curried [`Validation::ap`]: the wrapped function comes first.
pub fn ap<E, A, B, F>(other: Validation<E, F>) -> impl FnOnce(Validation<E, A>) -> Validation<E, B>
where
    F: FnOnce(A) -> B,
{
    move |container| container.ap(other)
}

// =============================================================================
// Aggregation
// =============================================================================

/// Curried [`Validation::concat`]: `concat(other)(c) == c.concat(other)`.
pub fn concat<E, A>(
    other: Validation<E, A>,
) -> impl FnOnce(Validation<E, A>) -> Validation<E, A> {
    move |container| container.concat(other)
}

/// Curried [`Validation::zip`].
pub fn zip<E, A, B>(
    other: Validation<E, B>,
) -> impl FnOnce(Validation<E, A>) -> Validation<E, (A, B)> {
    move |container| container.zip(other)
}

// =============================================================================
// Alternatives and Recovery
// =============================================================================

/// Curried [`Validation::alt`].
pub fn alt<E, A>(alternative: Validation<E, A>) -> impl FnOnce(Validation<E, A>) -> Validation<E, A> {
    move |container| container.alt(alternative)
}

/// Curried [`Validation::alt_with`].
pub fn alt_with<E, A, F>(alternative: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, A>
where
    F: FnOnce() -> Validation<E, A>,
{
    move |container| container.alt_with(alternative)
}

/// Curried [`Validation::recover`].
pub fn recover<E, A>(value: A) -> impl FnOnce(Validation<E, A>) -> Validation<E, A> {
    move |container| container.recover(value)
}

/// Curried [`Validation::recover_with`].
pub fn recover_with<E, A, F>(function: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, A>
where
    F: FnOnce(ErrorList<E>) -> A,
{
    move |container| container.recover_with(function)
}

// =============================================================================
// Fault Boundary
// =============================================================================

/// Curried [`Validation::checked_map`].
pub fn checked_map<E, A, B, F>(throwable: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, B>
where
    F: FnOnce(A) -> Result<B, E>,
{
    move |container| container.checked_map(throwable)
}

/// Curried [`Validation::checked_bimap`]:
/// `checked_bimap(failure_fold)(throwable)(c) == c.checked_bimap(failure_fold, throwable)`.
pub fn checked_bimap<E, E2, A, B, Fault, F, G>(
    failure_fold: F,
) -> impl FnOnce(G) -> Box<dyn FnOnce(Validation<E, A>) -> Validation<E2, B>>
where
    F: FnOnce(Option<ErrorList<E>>, Option<Fault>) -> E2 + 'static,
    G: FnOnce(A) -> Result<B, Fault> + 'static,
    E: 'static,
    E2: 'static,
    A: 'static,
    B: 'static,
{
    move |throwable| Box::new(move |container| container.checked_bimap(failure_fold, throwable))
}

// =============================================================================
// Unwrapping
// =============================================================================

/// Curried [`Validation::get_or`].
pub fn get_or<E, A>(default: A) -> impl FnOnce(Validation<E, A>) -> A {
    move |container| container.get_or(default)
}

/// Curried [`Validation::get_or_else`].
pub fn get_or_else<E, A, F>(function: F) -> impl FnOnce(Validation<E, A>) -> A
where
    F: FnOnce(ErrorList<E>) -> A,
{
    move |container| container.get_or_else(function)
}

/// Curried [`Validation::get_or_raise`].
pub fn get_or_raise<E, E2, A, F>(error: F) -> impl FnOnce(Validation<E, A>) -> Result<A, E2>
where
    F: FnOnce(ErrorList<E>) -> E2,
{
    move |container| container.get_or_raise(error)
}

// =============================================================================
// Hooks
// =============================================================================

/// Curried [`Validation::tap_success`].
pub fn tap_success<E, A, F>(consumer: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, A>
where
    F: FnOnce(&A),
{
    move |container| container.tap_success(consumer)
}

/// Curried [`Validation::tap_failure`].
pub fn tap_failure<E, A, F>(consumer: F) -> impl FnOnce(Validation<E, A>) -> Validation<E, A>
where
    F: FnOnce(&ErrorList<E>),
{
    move |container| container.tap_failure(consumer)
}

// =============================================================================
// Conversions
// =============================================================================

/// Free-function form of [`Validation::to_vec`].
pub fn to_vec<E, A>(container: Validation<E, A>) -> Vec<A> {
    container.to_vec()
}

/// Free-function form of [`Validation::to_maybe`].
pub fn to_maybe<E, A>(container: Validation<E, A>) -> Maybe<A> {
    container.to_maybe()
}

/// Free-function form of [`Validation::to_either`].
pub fn to_either<E, A>(container: Validation<E, A>) -> crate::container::Either<ErrorList<E>, A> {
    container.to_either()
}

/// Free-function form of [`Validation::to_deferred`].
pub fn to_deferred<E, A, D>(container: Validation<E, A>) -> D
where
    D: crate::convert::Deferred<Value = A, Reason = ErrorList<E>>,
{
    container.to_deferred()
}

// =============================================================================
// Collection Combinators
// =============================================================================

/// Visits every success payload in order, stopping at the first `Failure`.
///
/// Returns the input list unreduced, so calls can be chained.
///
/// # Examples
///
/// ```rust
/// use monars::container::Validation;
/// use monars::facade::validation;
///
/// let items = [
///     Validation::<&str, i32>::success(1),
///     Validation::failure("stop"),
///     Validation::success(3),
/// ];
/// let mut seen = Vec::new();
/// validation::each(|n| seen.push(*n), &items);
/// assert_eq!(seen, vec![1]);
/// ```
pub fn each<'a, E, A, F>(
    mut iteratee: F,
    items: &'a [Validation<E, A>],
) -> &'a [Validation<E, A>]
where
    F: FnMut(&A),
{
    for item in items {
        match item {
            Validation::Success(value) => iteratee(value),
            Validation::Failure(_) => break,
        }
    }
    items
}

/// Maps a function through every container's own `map`, returning the new
/// containers.
pub fn lift<E, A, B, F, I>(mut function: F, items: I) -> Vec<Validation<E, B>>
where
    F: FnMut(A) -> B,
    I: IntoIterator<Item = Validation<E, A>>,
{
    items
        .into_iter()
        .map(|container| container.map(&mut function))
        .collect()
}

/// Free-function form of [`Validation::all`].
pub fn all<E, A, I>(items: I) -> Validation<E, Vec<A>>
where
    I: IntoIterator<Item = Validation<E, A>>,
{
    Validation::all(items)
}

/// Free-function form of [`Validation::any`].
pub fn any<E, A, I>(items: I) -> Maybe<A>
where
    I: IntoIterator<Item = Validation<E, A>>,
{
    Validation::any(items)
}

/// Free-function form of [`Validation::failures_of`].
pub fn failures_of<E, A, I>(items: I) -> Vec<E>
where
    I: IntoIterator<Item = Validation<E, A>>,
{
    Validation::failures_of(items)
}

/// Free-function form of [`Validation::successes_of`].
pub fn successes_of<E, A, I>(items: I) -> Vec<A>
where
    I: IntoIterator<Item = Validation<E, A>>,
{
    Validation::successes_of(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn curried_concat_equals_instance_concat() {
        let merged = concat(Validation::<&str, ()>::failure("late"))(Validation::failure("early"));
        assert_eq!(merged.failure_ref().unwrap().as_slice(), ["early", "late"]);
    }

    #[rstest]
    fn curried_filter_saturates_one_argument_at_a_time() {
        let with_predicate = filter(|n: &i32| *n > 10);
        let saturated = with_predicate(|| "too small");
        let failed = saturated(Validation::success(3));
        assert_eq!(failed.failure_ref().unwrap().as_slice(), ["too small"]);
    }

    #[rstest]
    fn each_stops_at_the_first_failure() {
        let items = [
            Validation::<&str, i32>::success(1),
            Validation::failure("stop"),
            Validation::success(3),
        ];
        let mut seen = Vec::new();
        each(|n| seen.push(*n), &items);
        assert_eq!(seen, vec![1]);
    }

    #[rstest]
    fn lift_preserves_failures_untouched() {
        let lifted = lift(
            |n: i32| n + 1,
            [Validation::<&str, i32>::success(1), Validation::failure("e")],
        );
        assert_eq!(lifted[0], Validation::success(2));
        assert_eq!(lifted[1].failure_ref().unwrap().as_slice(), ["e"]);
    }
}
