//! Integration tests for the cross-type conversion layer.
//!
//! Conversions are total and variant-preserving: positive payloads survive
//! every hop unchanged, negative payloads collapse to each type's canonical
//! marker (`Absent`, `Left(())`, `Failure([()])`). The suite also pins the
//! deferred-computation bridge and the end-to-end scenarios the three types
//! are designed around.

#![cfg(feature = "convert")]

use monars::container::{Either, ErrorList, Maybe, Validation};
use monars::convert::{Deferred, Disjunction};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Pairwise Conversions
// =============================================================================

#[rstest]
fn present_becomes_right_and_success() {
    assert_eq!(Maybe::present(1).to_either(), Either::right(1));
    assert_eq!(Maybe::present(1).to_validation(), Validation::success(1));
}

#[rstest]
fn absent_becomes_left_unit() {
    assert_eq!(Maybe::<i32>::absent().to_either(), Either::left(()));
}

#[rstest]
fn absent_becomes_a_singleton_unit_failure() {
    let failed = Maybe::<i32>::of_nullable(None).to_validation();
    assert_eq!(failed.failure_ref().unwrap().as_slice(), [()]);
}

#[rstest]
fn right_becomes_present_and_success() {
    let value: Either<String, i32> = Either::right(1);
    assert_eq!(value.clone().to_maybe(), Maybe::present(1));
    assert_eq!(value.to_validation(), Validation::success(1));
}

#[rstest]
fn left_value_is_discarded_by_to_maybe() {
    let failed: Either<String, i32> = Either::left("discarded".to_string());
    assert!(failed.to_maybe().is_absent());
}

#[rstest]
fn left_becomes_a_singleton_failure() {
    let failed: Either<&str, i32> = Either::left("boom");
    assert_eq!(
        failed.to_validation().failure_ref().unwrap().as_slice(),
        ["boom"]
    );
}

#[rstest]
fn success_becomes_present_and_right() {
    let value: Validation<&str, i32> = Validation::success(1);
    assert_eq!(value.clone().to_maybe(), Maybe::present(1));
    assert!(value.to_either().is_right());
}

#[rstest]
fn failure_sequence_travels_whole_into_the_left_payload() {
    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let either = failed.to_either();
    // Lossy arity, not lossy data: one Left holding the whole sequence.
    assert_eq!(either.left_ref().unwrap().as_slice(), ["a", "b"]);
}

// =============================================================================
// Round Trips
// =============================================================================

proptest! {
    /// Positive payloads survive the validation -> either -> maybe loop.
    #[test]
    fn prop_roundtrip_preserves_positive_payloads(value in any::<i32>()) {
        let roundtrip = Maybe::present(value).to_validation().to_either().to_maybe();
        prop_assert_eq!(roundtrip, Maybe::present(value));
    }

}

/// Negative payloads collapse to the canonical empty marker.
#[test]
fn roundtrip_collapses_negative_payloads() {
    let roundtrip = Maybe::<i32>::absent().to_validation().to_either().to_maybe();
    assert!(roundtrip.is_absent());
}

// =============================================================================
// The Disjunction Capability
// =============================================================================

#[rstest]
fn a_conversion_can_choose_its_target_through_the_capability() {
    fn check<D>(passed: bool) -> D
    where
        D: Disjunction<Positive = i32, Negative = ()>,
    {
        if passed { D::positive(1) } else { D::negative(()) }
    }

    let as_maybe: Maybe<i32> = check(true);
    let as_either: Either<(), i32> = check(true);
    let as_validation: Validation<(), i32> = check(false);

    assert_eq!(as_maybe, Maybe::present(1));
    assert_eq!(as_either, Either::right(1));
    assert_eq!(as_validation.failure_ref().unwrap().as_slice(), [()]);
}

// =============================================================================
// The Deferred Bridge
// =============================================================================

#[rstest]
fn positive_variants_resolve_with_their_payload() {
    let settled: Result<i32, ()> = Maybe::present(1).to_deferred();
    assert_eq!(settled, Ok(1));

    let settled: Result<i32, String> = Either::<String, i32>::right(2).to_deferred();
    assert_eq!(settled, Ok(2));

    let settled: Result<i32, ErrorList<&str>> =
        Validation::<&str, i32>::success(3).to_deferred();
    assert_eq!(settled, Ok(3));
}

#[rstest]
fn negative_variants_reject_with_their_payload() {
    let settled: Result<i32, ()> = Maybe::<i32>::absent().to_deferred();
    assert_eq!(settled, Err(()));

    let settled: Result<i32, String> =
        Either::<String, i32>::left("boom".to_string()).to_deferred();
    assert_eq!(settled, Err("boom".to_string()));

    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let settled: Result<i32, ErrorList<&str>> = failed.to_deferred();
    assert_eq!(settled.unwrap_err().as_slice(), ["a", "b"]);
}

#[rstest]
fn a_custom_deferred_implementation_satisfies_the_contract() {
    enum Settled<T, E> {
        Resolved(T),
        Rejected(E),
    }

    impl<T, E> Deferred for Settled<T, E> {
        type Value = T;
        type Reason = E;

        fn resolved(value: T) -> Self {
            Self::Resolved(value)
        }

        fn rejected(reason: E) -> Self {
            Self::Rejected(reason)
        }
    }

    let settled: Settled<i32, ()> = Maybe::present(1).to_deferred();
    assert!(matches!(settled, Settled::Resolved(1)));

    let settled: Settled<i32, ()> = Maybe::<i32>::absent().to_deferred();
    assert!(matches!(settled, Settled::Rejected(())));
}

#[cfg(feature = "async")]
#[rstest]
fn the_bridge_produces_already_settled_futures() {
    use futures::future::Ready;

    let settled: Ready<Result<i32, ()>> = Maybe::present(1).to_deferred();
    assert_eq!(futures::executor::block_on(settled), Ok(1));

    let settled: Ready<Result<i32, String>> =
        Either::<String, i32>::left("boom".to_string()).to_deferred();
    assert_eq!(
        futures::executor::block_on(settled),
        Err("boom".to_string())
    );
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[rstest]
fn collecting_optional_values_short_circuits_on_the_first_gap() {
    assert_eq!(
        Maybe::all([Maybe::present(1), Maybe::present(2)]),
        Maybe::present(vec![1, 2])
    );
    assert!(Maybe::all([Maybe::present(1), Maybe::absent(), Maybe::present(2)]).is_absent());
}

#[rstest]
fn independent_validations_aggregate_every_error() {
    let merged = Validation::<&str, i32>::success(1)
        .concat(Validation::failure("e1"))
        .concat(Validation::failure("e2"));
    assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
}

#[rstest]
fn the_first_usable_either_wins() {
    let found = Either::any([
        Either::left("a".to_string()),
        Either::right(1),
        Either::right(2),
    ]);
    assert_eq!(found, Some(Either::right(1)));
}

#[rstest]
fn raising_from_a_failure_surfaces_the_first_error_message() {
    let raised = Validation::<&str, i32>::failure("x").get_or_raise(|errors| errors[0].to_string());
    assert_eq!(raised.unwrap_err(), "x");
}

#[rstest]
fn a_missing_nullable_ends_as_a_singleton_unit_failure() {
    let failed = Maybe::<i32>::of_nullable(None).to_validation();
    assert_eq!(failed.failure_ref().unwrap().as_slice(), [()]);
}
