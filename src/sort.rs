//! Stable sorting of rows into a display permutation.
//!
//! Sorting never touches the rows themselves: the result is a
//! permutation of indices into the caller's sequence, so source order
//! and row identity survive every sort. The engine memoizes the
//! permutation and re-invokes this only when the rows or the sort state
//! actually changed.

use crate::types::{Row, SortDirection, SortState};

/// Compute the display permutation for `rows` under `state`.
///
/// `None` means "no sort applied": display order is input order and no
/// permutation needs to exist. Otherwise the result is a stable ordering
/// of `0..rows.len()` by each row's value at the sort key — equal (or
/// incomparable) values keep their original relative order, in both
/// directions, because descending inverts the comparison outcome rather
/// than the input sequence.
#[must_use]
pub fn sort_order(rows: &[Row], state: &SortState) -> Option<Vec<usize>> {
    let key = state.key.as_deref()?;

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = match (rows.get(a), rows.get(b)) {
            (Some(ra), Some(rb)) => ra.get(key).grid_cmp(rb.get(key)),
            _ => std::cmp::Ordering::Equal,
        };
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    Some(order)
}
