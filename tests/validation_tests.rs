//! Unit tests for the Validation<E, A> type.
//!
//! Validation represents a success or one-or-more accumulated errors:
//! - `Success(A)`: the success value
//! - `Failure(ErrorList<E>)`: a non-empty ordered error sequence
//!
//! The suite pins down the two properties that distinguish Validation from
//! Either: the failure payload is always a list (singletons are wrapped),
//! and `concat`/`zip` aggregate errors while everything else short-circuits.

#![cfg(feature = "container")]

use monars::container::{Maybe, Validation};
use monars::typeclass::Semigroup;
use rstest::rstest;

// =============================================================================
// Smart Constructors
// =============================================================================

#[rstest]
fn success_holds_the_value() {
    let value: Validation<String, i32> = Validation::success(42);
    assert!(value.is_success());
    assert_eq!(value.success_ref(), Some(&42));
}

#[rstest]
fn failure_wraps_a_bare_error_in_a_singleton_sequence() {
    let failed: Validation<&str, i32> = Validation::failure("boom");
    assert_eq!(failed.failure_ref().unwrap().as_slice(), ["boom"]);
}

#[rstest]
fn failures_stores_an_ordered_sequence_as_is() {
    let failed: Validation<&str, i32> = Validation::failures(["a", "b", "c"]);
    assert_eq!(failed.failure_ref().unwrap().as_slice(), ["a", "b", "c"]);
}

#[rstest]
#[should_panic(expected = "Validation::failures requires at least one error")]
fn failures_rejects_an_empty_sequence() {
    let _ = Validation::<&str, i32>::failures([]);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_preserves_the_error_list_exactly() {
    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let mapped = failed.map(|n| n * 2);
    assert_eq!(mapped.failure_ref().unwrap().as_slice(), ["a", "b"]);
}

#[rstest]
fn chain_short_circuits_without_aggregating() {
    let mut invoked = false;
    let failed: Validation<&str, i32> = Validation::failure("boom");
    let result = failed.chain(|n| {
        invoked = true;
        Validation::<&str, i32>::failure("later").map(|_| n)
    });
    assert_eq!(result.failure_ref().unwrap().as_slice(), ["boom"]);
    assert!(!invoked);
}

#[rstest]
fn filter_wraps_the_supplied_bare_error_as_a_singleton_list() {
    let failed: Validation<&str, i32> = Validation::success(3).filter(|n| *n > 10, || "too small");
    assert_eq!(failed.failure_ref().unwrap().as_slice(), ["too small"]);
}

#[rstest]
fn ap_returns_the_first_failure_without_merging() {
    let value: Validation<&str, i32> = Validation::failure("value side");
    let function: Validation<&str, fn(i32) -> i32> = Validation::failure("function side");
    let result = value.ap(function);
    assert_eq!(result.failure_ref().unwrap().as_slice(), ["value side"]);
}

#[rstest]
fn bimap_maps_the_whole_error_list() {
    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let doubled = failed.bimap(
        |errors| errors.into_iter().flat_map(|e| [e, e]).collect(),
        |n| n,
    );
    assert_eq!(doubled.failure_ref().unwrap().as_slice(), ["a", "a", "b", "b"]);
}

#[rstest]
fn map_errors_transforms_each_error_in_place() {
    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let mapped = failed.map_errors(str::to_uppercase);
    assert_eq!(mapped.failure_ref().unwrap().as_slice(), ["A", "B"]);
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn concat_success_yields_the_other_operand() {
    let merged = Validation::<&str, i32>::success(1).concat(Validation::success(2));
    assert_eq!(merged, Validation::success(2));

    let merged = Validation::<&str, i32>::success(1).concat(Validation::failure("e"));
    assert!(merged.is_failure());
}

#[rstest]
fn concat_failure_absorbs_success() {
    let merged = Validation::<&str, i32>::failure("e1").concat(Validation::success(1));
    assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1"]);
}

#[rstest]
fn concat_merges_error_sequences_in_evaluation_order() {
    let merged = Validation::<&str, i32>::success(1)
        .concat(Validation::failure("e1"))
        .concat(Validation::failure("e2"));
    assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
}

#[rstest]
fn combine_is_concat() {
    let left: Validation<&str, i32> = Validation::failure("e1");
    let right: Validation<&str, i32> = Validation::failure("e2");
    assert_eq!(
        left.clone().combine(right.clone()),
        left.concat(right)
    );
}

#[rstest]
fn zip_pairs_successes_and_merges_failures() {
    let both = Validation::<&str, i32>::success(1).zip(Validation::success("two"));
    assert_eq!(both, Validation::success((1, "two")));

    let merged =
        Validation::<&str, i32>::failure("e1").zip(Validation::<&str, i32>::failure("e2"));
    assert_eq!(merged.failure_ref().unwrap().as_slice(), ["e1", "e2"]);
}

// =============================================================================
// Alternatives and Recovery
// =============================================================================

#[rstest]
fn alt_yields_to_the_alternative_on_failure() {
    let failed: Validation<&str, i32> = Validation::failure("boom");
    assert_eq!(failed.alt(Validation::success(2)), Validation::success(2));
}

#[rstest]
fn alt_with_is_lazy() {
    let value: Validation<&str, i32> = Validation::success(1);
    let result = value.alt_with(|| panic!("supplier must not run"));
    assert_eq!(result, Validation::success(1));
}

#[rstest]
fn recover_with_receives_the_whole_error_list() {
    let failed: Validation<&str, usize> = Validation::failures(["a", "b"]);
    assert_eq!(failed.recover_with(|errors| errors.len()), Validation::success(2));
}

// =============================================================================
// Fault Boundary
// =============================================================================

#[rstest]
fn attempt_folds_a_fault_into_a_singleton_failure() {
    let failed = Validation::attempt(|| "x".parse::<i32>());
    assert_eq!(failed.failure_ref().unwrap().len(), 1);
}

#[rstest]
fn checked_map_wraps_the_fault_as_a_singleton() {
    let value: Validation<std::num::ParseIntError, &str> = Validation::success("x");
    let failed = value.checked_map(|s| s.parse::<i32>());
    assert_eq!(failed.failure_ref().unwrap().len(), 1);
}

#[rstest]
fn checked_bimap_folds_existing_errors_into_a_singleton() {
    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let folded: Validation<usize, i32> = failed.checked_bimap(
        |existing, fault: Option<&str>| {
            assert!(fault.is_none());
            existing.map_or(0, |errors| errors.len())
        },
        Ok,
    );
    assert_eq!(folded.failure_ref().unwrap().as_slice(), [2]);
}

// =============================================================================
// Unwrapping
// =============================================================================

#[rstest]
fn get_or_family_unwraps_with_defaults() {
    let failed: Validation<&str, i32> = Validation::failure("boom");
    assert_eq!(failed.clone().get_or(0), 0);
    assert_eq!(failed.get_or_else(|errors| errors.len() as i32), 1);
}

#[rstest]
fn get_or_raise_builds_the_error_from_the_list() {
    let failed: Validation<&str, i32> = Validation::failure("x");
    let raised = failed.get_or_raise(|errors| errors[0].to_string());
    assert_eq!(raised, Err("x".to_string()));
}

// =============================================================================
// Hooks
// =============================================================================

#[rstest]
fn tap_failure_sees_the_error_list_unchanged() {
    let mut seen = 0;
    let failed: Validation<&str, i32> = Validation::failures(["a", "b"]);
    let unchanged = failed.tap_failure(|errors| seen = errors.len());
    assert_eq!(seen, 2);
    assert_eq!(unchanged.failure_ref().unwrap().len(), 2);
}

// =============================================================================
// Collection Combinators
// =============================================================================

#[rstest]
fn failures_of_flattens_every_error_sequence_in_order() {
    let errors = Validation::failures_of([
        Validation::<&str, i32>::failures(["a", "b"]),
        Validation::success(1),
        Validation::failure("c"),
    ]);
    assert_eq!(errors, vec!["a", "b", "c"]);
}

#[rstest]
fn successes_of_collects_in_order_skipping_failures() {
    let values = Validation::successes_of([
        Validation::<&str, i32>::success(1),
        Validation::failure("a"),
        Validation::success(2),
    ]);
    assert_eq!(values, vec![1, 2]);
}

#[rstest]
fn all_returns_the_first_failure_as_is_without_merging() {
    let stopped = Validation::all([
        Validation::<&str, i32>::failures(["a", "b"]),
        Validation::failure("c"),
    ]);
    assert_eq!(stopped.failure_ref().unwrap().as_slice(), ["a", "b"]);
}

#[rstest]
fn all_collects_successes_in_order() {
    let collected = Validation::<&str, i32>::all([Validation::success(1), Validation::success(2)]);
    assert_eq!(collected, Validation::success(vec![1, 2]));
}

#[rstest]
fn any_returns_the_first_success_as_a_maybe() {
    let found = Validation::any([
        Validation::<&str, i32>::failure("a"),
        Validation::success(2),
        Validation::success(3),
    ]);
    assert_eq!(found, Maybe::present(2));
}

#[rstest]
fn any_of_no_successes_is_absent() {
    let found = Validation::any([
        Validation::<&str, i32>::failure("a"),
        Validation::failure("b"),
    ]);
    assert!(found.is_absent());
}

#[rstest]
fn any_of_an_empty_input_is_absent() {
    let found = Validation::<&str, i32>::any([]);
    assert!(found.is_absent());
}
