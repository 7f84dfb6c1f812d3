//! Column layout tests.
//!
//! Tests for structural reset, resize flooring, width-preserving
//! reorder, and the resize/drag gesture lifecycle.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridpane::{
    ColumnLayout, ColumnSpec, GridConfig, GridError, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH,
};
use test_case::test_case;

fn layout(keys: &[&str]) -> ColumnLayout {
    let specs = keys.iter().map(|k| ColumnSpec::new(*k)).collect();
    ColumnLayout::new(specs, &GridConfig::default())
}

fn keys(layout: &ColumnLayout) -> Vec<&str> {
    layout.columns().iter().map(|c| c.key.as_str()).collect()
}

// =============================================================================
// STRUCTURAL RESET
// =============================================================================

#[test]
fn test_set_columns_resets_widths_and_order() {
    let mut layout = layout(&["a", "b", "c"]);
    layout.resize_by(1, 200.0).unwrap();
    layout.reorder(0, 2).unwrap();

    layout.set_columns(vec![
        ColumnSpec::new("a"),
        ColumnSpec::new("b"),
        ColumnSpec::new("c"),
    ]);

    assert_eq!(keys(&layout), vec!["a", "b", "c"], "order back to input");
    assert!(
        layout
            .columns()
            .iter()
            .all(|c| c.width == DEFAULT_COLUMN_WIDTH),
        "every width back to the default"
    );
}

#[test]
fn test_set_columns_accepts_empty() {
    let mut layout = layout(&["a"]);
    layout.set_columns(Vec::new());
    assert!(layout.is_empty());
    assert_eq!(
        layout.resize_by(0, 10.0),
        Err(GridError::IndexOutOfRange { index: 0, len: 0 })
    );
}

// =============================================================================
// RESIZE
// =============================================================================

#[test_case(10.0, 160.0; "grow")]
#[test_case(-10.0, 140.0; "shrink")]
#[test_case(-100.0, MIN_COLUMN_WIDTH; "clamp to floor")]
#[test_case(-10_000.0, MIN_COLUMN_WIDTH; "far below floor")]
fn test_resize_by_floors_at_minimum(delta: f32, expected: f32) {
    let mut layout = layout(&["a"]);
    layout.resize_by(0, delta).unwrap();
    assert_eq!(layout.columns()[0].width, expected);
}

#[test]
fn test_resize_by_out_of_range_reports() {
    let mut layout = layout(&["a", "b"]);
    assert_eq!(
        layout.resize_by(2, 10.0),
        Err(GridError::IndexOutOfRange { index: 2, len: 2 })
    );
    // State untouched by the rejected mutation.
    assert!(layout
        .columns()
        .iter()
        .all(|c| c.width == DEFAULT_COLUMN_WIDTH));
}

#[test]
fn test_resize_gesture_applies_deltas_against_base() {
    let mut layout = layout(&["a", "b"]);
    layout.resize_start(1);
    layout.resize_move(30.0);
    layout.resize_move(50.0);
    layout.resize_end();

    // Deltas are absolute against the gesture-start width, not cumulative.
    assert_eq!(layout.columns()[1].width, DEFAULT_COLUMN_WIDTH + 50.0);
}

#[test]
fn test_resize_gesture_floor_mid_drag_then_recover() {
    let mut layout = layout(&["a"]);
    layout.resize_start(0);
    layout.resize_move(-500.0);
    assert_eq!(layout.columns()[0].width, MIN_COLUMN_WIDTH);

    // Dragging back out recovers because the base was captured at start.
    layout.resize_move(-20.0);
    assert_eq!(layout.columns()[0].width, DEFAULT_COLUMN_WIDTH - 20.0);
    layout.resize_end();
}

#[test]
fn test_resize_gesture_on_bad_index_is_inert() {
    let mut layout = layout(&["a"]);
    layout.resize_start(5);
    layout.resize_move(100.0);
    layout.resize_end();
    assert_eq!(layout.columns()[0].width, DEFAULT_COLUMN_WIDTH);
}

// =============================================================================
// REORDER
// =============================================================================

#[test]
fn test_reorder_shifts_intervening_columns() {
    let mut layout = layout(&["a", "b", "c", "d"]);
    layout.reorder(0, 2).unwrap();
    assert_eq!(keys(&layout), vec!["b", "c", "a", "d"]);

    layout.reorder(3, 0).unwrap();
    assert_eq!(keys(&layout), vec!["d", "b", "c", "a"]);
}

#[test]
fn test_reorder_same_index_is_identity() {
    let mut layout = layout(&["a", "b", "c"]);
    layout.resize_by(0, 25.0).unwrap();
    let before: Vec<_> = layout.columns().to_vec();

    for i in 0..3 {
        layout.reorder(i, i).unwrap();
    }
    assert_eq!(layout.columns(), &before[..], "from == to changes nothing");
}

#[test]
fn test_reorder_out_of_range_reports_and_leaves_state() {
    let mut layout = layout(&["a", "b"]);
    assert_eq!(
        layout.reorder(2, 0),
        Err(GridError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        layout.reorder(0, 2),
        Err(GridError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(keys(&layout), vec!["a", "b"]);
}

#[test]
fn test_reorder_keeps_width_attached_to_moved_column() {
    let mut layout = layout(&["a", "b", "c"]);
    layout.resize_by(0, 50.0).unwrap(); // a = 200
    layout.resize_by(2, -50.0).unwrap(); // c = 100

    layout.reorder(0, 2).unwrap(); // b, c, a

    let widths: Vec<f32> = layout.columns().iter().map(|c| c.width).collect();
    assert_eq!(
        widths,
        vec![150.0, 100.0, 200.0],
        "widths must travel with their columns, not their slots"
    );

    // A resize after the drag targets the column now at that position.
    layout.resize_by(2, 10.0).unwrap();
    assert_eq!(layout.columns()[2].key, "a");
    assert_eq!(layout.columns()[2].width, 210.0);
}

// =============================================================================
// DRAG GESTURE
// =============================================================================

#[test]
fn test_drag_drop_reorders() {
    let mut layout = layout(&["a", "b", "c"]);
    layout.drag_start(2);
    layout.drop_at(0);
    assert_eq!(keys(&layout), vec!["c", "a", "b"]);
}

#[test]
fn test_drop_on_self_is_a_noop() {
    let mut layout = layout(&["a", "b"]);
    layout.drag_start(1);
    layout.drop_at(1);
    assert_eq!(keys(&layout), vec!["a", "b"]);
}

#[test]
fn test_drag_cancel_abandons_without_reorder() {
    let mut layout = layout(&["a", "b"]);
    layout.drag_start(0);
    layout.drag_cancel();
    layout.drop_at(1);
    assert_eq!(keys(&layout), vec!["a", "b"], "cancelled drag cannot drop");
}

#[test]
fn test_drop_consumes_the_gesture() {
    let mut layout = layout(&["a", "b", "c"]);
    layout.drag_start(0);
    layout.drop_at(2);
    layout.drop_at(0); // stale drop, no active drag
    assert_eq!(keys(&layout), vec!["b", "c", "a"]);
}

#[test]
fn test_drag_source_tracks_the_gesture() {
    let mut layout = layout(&["a", "b", "c"]);
    assert_eq!(layout.drag_source(), None);

    layout.drag_start(1);
    assert_eq!(layout.drag_source(), Some(1));

    layout.drop_at(0);
    assert_eq!(layout.drag_source(), None, "drop consumes the drag");

    layout.drag_start(5); // out of range, ignored
    assert_eq!(layout.drag_source(), None);
}
