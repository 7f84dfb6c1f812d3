//! Sort engine tests.
//!
//! Stability under duplicate keys, direction inversion semantics,
//! mixed-type tie handling, and purity of the input sequence.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridpane::sort::sort_order;
use gridpane::{Row, SortDirection, SortState};

fn people() -> Vec<Row> {
    vec![
        Row::new(10).field("name", "Ada").field("dept", "eng"),
        Row::new(11).field("name", "Bob").field("dept", "ops"),
        Row::new(12).field("name", "Cyd").field("dept", "eng"),
        Row::new(13).field("name", "Dee").field("dept", "ops"),
        Row::new(14).field("name", "Eli").field("dept", "eng"),
    ]
}

// =============================================================================
// STABILITY
// =============================================================================

#[test]
fn test_ties_keep_source_order_ascending() {
    let rows = people();
    let order = sort_order(&rows, &SortState::by("dept", SortDirection::Ascending)).unwrap();
    // "eng" group first, original relative order inside the group.
    assert_eq!(order, vec![0, 2, 4, 1, 3]);
}

#[test]
fn test_descending_reverses_groups_not_ties() {
    let rows = people();
    let order = sort_order(&rows, &SortState::by("dept", SortDirection::Descending)).unwrap();
    // "ops" group first now, but 1 still precedes 3 and 0 still
    // precedes 2 and 4: the comparison is inverted, not the sequence.
    assert_eq!(order, vec![1, 3, 0, 2, 4]);
}

#[test]
fn test_all_equal_is_identity_both_directions() {
    let rows: Vec<Row> = (0..8).map(|i| Row::new(i).field("k", 7i64)).collect();
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let order = sort_order(&rows, &SortState::by("k", direction)).unwrap();
        assert_eq!(
            order,
            (0..8usize).collect::<Vec<_>>(),
            "all-ties must be the identity permutation ({direction:?})"
        );
    }
}

// =============================================================================
// TYPE HANDLING
// =============================================================================

#[test]
fn test_mixed_types_tie_against_each_other() {
    let rows = vec![
        Row::new(0).field("v", "text"),
        Row::new(1).field("v", 5i64),
        Row::new(2), // absent
        Row::new(3).field("v", 1i64),
    ];
    let mut order = sort_order(&rows, &SortState::by("v", SortDirection::Ascending)).unwrap();
    // Cross-type pairs all tie, so the comparator is not a total order;
    // the contract is only that the result is a lossless permutation.
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_uniform_numeric_column_sorts_fully() {
    let rows = vec![
        Row::new(0).field("v", 5i64),
        Row::new(1).field("v", 1i64),
        Row::new(2).field("v", 3i64),
    ];
    let order = sort_order(&rows, &SortState::by("v", SortDirection::Ascending)).unwrap();
    assert_eq!(order, vec![1, 2, 0]);
}

#[test]
fn test_unsorted_state_has_no_permutation() {
    let rows = people();
    assert_eq!(sort_order(&rows, &SortState::unsorted()), None);
}

// =============================================================================
// PURITY
// =============================================================================

#[test]
fn test_input_rows_untouched() {
    let rows = people();
    let before = rows.clone();
    let _ = sort_order(&rows, &SortState::by("name", SortDirection::Descending));
    assert_eq!(rows, before, "sorting must not mutate the input");
}

#[test]
fn test_permutation_is_complete() {
    let rows = people();
    let mut order = sort_order(&rows, &SortState::by("name", SortDirection::Ascending)).unwrap();
    order.sort_unstable();
    assert_eq!(
        order,
        (0..rows.len()).collect::<Vec<_>>(),
        "result must be a permutation of all indices"
    );
}
