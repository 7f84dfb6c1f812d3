//! Viewport window calculation.
//!
//! Given a scroll position and viewport geometry, computes the minimal
//! contiguous range of row positions that must be materialized. Cost is
//! O(window size) and independent of the total row count — the property
//! that lets the grid hold tens of thousands of rows behind a
//! fixed-height viewport.

use serde::{Deserialize, Serialize};

/// Extra rows materialized past the visible range (default).
pub const OVERSCAN: usize = 2;

/// Viewport geometry pushed in by the rendering collaborator on layout
/// and scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Vertical scroll position in pixels, ≥ 0.
    pub scroll_offset: f32,
    /// Height of the scroll container in pixels, ≥ 0.
    pub container_height: f32,
    /// Uniform row height in pixels, > 0.
    pub row_height: f32,
}

impl ViewportState {
    /// Create a viewport state. Negative offsets/heights are clamped to
    /// zero and the row height to a 1px minimum, so later window math
    /// never divides by zero.
    #[must_use]
    pub fn new(scroll_offset: f32, container_height: f32, row_height: f32) -> Self {
        Self {
            scroll_offset: scroll_offset.max(0.0),
            container_height: container_height.max(0.0),
            row_height: row_height.max(1.0),
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// One materialized row position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    /// Index into the currently sorted row sequence.
    pub row_index: usize,
    /// Absolute y offset of the row's top edge within the scroll content.
    pub offset_top: f32,
}

/// The contiguous range of rows currently materialized for display.
///
/// Derived on demand, never stored: any input change recomputes it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWindow {
    /// First materialized row index.
    pub start_index: usize,
    /// One past the last materialized row index; `end_index ≤ row_count`.
    pub end_index: usize,
    /// Full scroll content height (`row_count * row_height`), used by
    /// renderers to size the scrollable area.
    pub total_height: f32,
    /// Materialized positions, one per row in `start_index..end_index`.
    pub entries: Vec<RowSlot>,
}

impl VisibleWindow {
    /// An empty window (zero rows).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            total_height: 0.0,
            entries: Vec::new(),
        }
    }

    /// Number of materialized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no rows are materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the visible window for `row_count` rows under the given
/// viewport, with `overscan` extra rows past the trailing edge.
///
/// A scroll offset beyond the content (possible after a row-count
/// shrink) clamps the start back so an empty tail is never produced.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_window(row_count: usize, viewport: &ViewportState, overscan: usize) -> VisibleWindow {
    let row_height = viewport.row_height.max(1.0);

    if row_count == 0 {
        return VisibleWindow::empty();
    }

    let total_height = row_count as f32 * row_height;

    let raw_start = (viewport.scroll_offset.max(0.0) / row_height).floor() as usize;
    let visible_count = (viewport.container_height.max(0.0) / row_height).ceil() as usize;

    // Over-scroll clamp: never start past the last full screen of rows.
    let start_index = raw_start.min(row_count.saturating_sub(visible_count));
    let end_index = row_count.min(start_index + visible_count + overscan);

    let mut entries = Vec::with_capacity(end_index - start_index);
    for row_index in start_index..end_index {
        entries.push(RowSlot {
            row_index,
            offset_top: row_index as f32 * row_height,
        });
    }

    VisibleWindow {
        start_index,
        end_index,
        total_height,
        entries,
    }
}
