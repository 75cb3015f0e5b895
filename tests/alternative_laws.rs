//! Property-based tests for Alt and Alternative laws.
//!
//! Verifies for all three containers:
//!
//! - a negative variant `.alt(positive)` returns the positive unchanged
//! - a positive variant `.alt(anything)` returns itself unchanged
//! - `alt` is associative
//!
//! and for `Maybe`, the Alternative identity laws around `empty`.

#![cfg(feature = "container")]

use monars::container::{Either, Maybe, Validation};
use monars::typeclass::{Alt, Alternative};
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::of_nullable)
}

fn any_either() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

fn any_validation() -> impl Strategy<Value = Validation<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::success),
        prop::collection::vec(any::<String>(), 1..4).prop_map(Validation::failures),
    ]
}

// Dispatches through the shared contract rather than the inherent methods,
// so the trait implementations themselves are under test.
fn alt_through_the_contract<C: Alt>(first: C, second: C) -> C {
    Alt::alt(first, second)
}

// =============================================================================
// Alt Laws
// =============================================================================

proptest! {
    /// Negative yields: Absent.alt(x) == x.
    #[test]
    fn prop_maybe_negative_yields(alternative in any_maybe()) {
        let result = Maybe::absent().alt(alternative.clone());
        prop_assert_eq!(result, alternative);
    }

    /// Positive short-circuits: Present(v).alt(anything) == Present(v).
    #[test]
    fn prop_maybe_positive_short_circuits(value in any::<i32>(), alternative in any_maybe()) {
        let result = Maybe::present(value).alt(alternative);
        prop_assert_eq!(result, Maybe::present(value));
    }

    /// Associativity for Maybe.
    #[test]
    fn prop_maybe_alt_associative(a in any_maybe(), b in any_maybe(), c in any_maybe()) {
        let left = a.clone().alt(b.clone()).alt(c.clone());
        let right = a.alt(b.alt(c));
        prop_assert_eq!(left, right);
    }

    /// Negative yields for Either.
    #[test]
    fn prop_either_negative_yields(error in any::<String>(), alternative in any_either()) {
        let result = Either::left(error).alt(alternative.clone());
        prop_assert_eq!(result, alternative);
    }

    /// Positive short-circuits for Either.
    #[test]
    fn prop_either_positive_short_circuits(value in any::<i32>(), alternative in any_either()) {
        let result = Either::right(value).alt(alternative);
        prop_assert_eq!(result, Either::<String, i32>::right(value));
    }

    /// Associativity for Either.
    #[test]
    fn prop_either_alt_associative(a in any_either(), b in any_either(), c in any_either()) {
        let left = a.clone().alt(b.clone()).alt(c.clone());
        let right = a.alt(b.alt(c));
        prop_assert_eq!(left, right);
    }

    /// Negative yields for Validation.
    #[test]
    fn prop_validation_negative_yields(
        errors in prop::collection::vec(any::<String>(), 1..4),
        alternative in any_validation()
    ) {
        let result = Validation::failures(errors).alt(alternative.clone());
        prop_assert_eq!(result, alternative);
    }

    /// Positive short-circuits for Validation.
    #[test]
    fn prop_validation_positive_short_circuits(value in any::<i32>(), alternative in any_validation()) {
        let result = Validation::success(value).alt(alternative);
        prop_assert_eq!(result, Validation::<String, i32>::success(value));
    }

    /// Associativity for Validation.
    #[test]
    fn prop_validation_alt_associative(
        a in any_validation(),
        b in any_validation(),
        c in any_validation()
    ) {
        let left = a.clone().alt(b.clone()).alt(c.clone());
        let right = a.alt(b.alt(c));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Trait Dispatch
// =============================================================================

proptest! {
    /// The trait implementations agree with the inherent operations.
    #[test]
    fn prop_trait_alt_agrees_with_inherent_alt(
        m1 in any_maybe(), m2 in any_maybe(),
        e1 in any_either(), e2 in any_either(),
        v1 in any_validation(), v2 in any_validation()
    ) {
        prop_assert_eq!(alt_through_the_contract(m1.clone(), m2.clone()), m1.alt(m2));
        prop_assert_eq!(alt_through_the_contract(e1.clone(), e2.clone()), e1.alt(e2));
        prop_assert_eq!(alt_through_the_contract(v1.clone(), v2.clone()), v1.alt(v2));
    }
}

// =============================================================================
// Lazy Alternatives
// =============================================================================

proptest! {
    /// alt_with agrees with alt on every input.
    #[test]
    fn prop_maybe_alt_with_agrees_with_alt(value in any_maybe(), alternative in any_maybe()) {
        let eager = value.clone().alt(alternative.clone());
        let lazy = value.alt_with(move || alternative);
        prop_assert_eq!(eager, lazy);
    }
}

// =============================================================================
// Alternative Identity Laws (Maybe)
// =============================================================================

proptest! {
    /// empty.alt(x) == x.
    #[test]
    fn prop_maybe_empty_is_left_identity(value in any_maybe()) {
        let empty: Maybe<i32> = <Maybe<()>>::empty();
        prop_assert_eq!(empty.alt(value.clone()), value);
    }

    /// x.alt(empty) == x.
    #[test]
    fn prop_maybe_empty_is_right_identity(value in any_maybe()) {
        let empty: Maybe<i32> = <Maybe<()>>::empty();
        prop_assert_eq!(value.clone().alt(empty), value);
    }

    /// choice returns the first positive element.
    #[test]
    fn prop_maybe_choice_is_first_present(values in prop::collection::vec(any_maybe(), 0..8)) {
        let expected = values.iter().find(|v| v.is_present()).cloned().unwrap_or(Maybe::absent());
        let result = Maybe::choice(values);
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Alternative Derived Operations (Maybe)
// =============================================================================

#[test]
fn guard_gates_on_the_condition() {
    assert_eq!(<Maybe<()>>::guard(true), Maybe::present(()));
    assert!(<Maybe<()>>::guard(false).is_absent());
}

#[test]
fn optional_makes_the_computation_infallible() {
    assert_eq!(Maybe::present(1).optional(), Maybe::present(Some(1)));
    assert_eq!(Maybe::<i32>::absent().optional(), Maybe::present(None));
}
