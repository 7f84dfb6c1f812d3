//! Column layout: order, widths, and the resize/drag gestures that
//! mutate them.
//!
//! Gestures are explicit state held here (start captures a base value,
//! moves apply intermediate updates, end finalizes) rather than
//! listeners attached per interaction. An aborted gesture — a release
//! that never arrives — simply leaves the last applied value; there is
//! no partially-applied state to unwind.

use log::{debug, trace};

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::types::{Column, ColumnSpec};

/// In-flight resize gesture: the column and its width at gesture start.
/// Deltas are applied against the base, not the running width, so the
/// column tracks the pointer instead of accelerating away from it.
#[derive(Debug, Clone, Copy)]
struct ResizeGesture {
    index: usize,
    base_width: f32,
}

/// In-flight column drag: the index the drag started from.
#[derive(Debug, Clone, Copy)]
struct DragGesture {
    from: usize,
}

/// Ordered runtime columns with their pixel widths.
///
/// Order is the vec order: positions are contiguous by construction and
/// a reorder moves the whole [`Column`] (width included), so width never
/// detaches from the column it belongs to.
#[derive(Debug)]
pub struct ColumnLayout {
    columns: Vec<Column>,
    default_width: f32,
    min_width: f32,
    resize: Option<ResizeGesture>,
    drag: Option<DragGesture>,
}

impl ColumnLayout {
    /// Build the runtime layout from caller specs.
    #[must_use]
    pub fn new(specs: Vec<ColumnSpec>, config: &GridConfig) -> Self {
        let mut layout = Self {
            columns: Vec::new(),
            default_width: config.default_column_width,
            min_width: config.min_column_width,
            resize: None,
            drag: None,
        };
        layout.set_columns(specs);
        layout
    }

    /// Structural reset: replace the column set, discarding widths and
    /// order. Every width returns to the default and positions follow
    /// input order. Cancels any in-flight gesture.
    pub fn set_columns(&mut self, specs: Vec<ColumnSpec>) {
        debug!("column reset: {} columns", specs.len());
        self.columns = specs
            .into_iter()
            .map(|spec| {
                let mut col = Column::from(spec);
                col.width = self.default_width;
                col
            })
            .collect();
        self.resize = None;
        self.drag = None;
    }

    /// The ordered runtime columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the column set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column at a position, if in range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Position of the column with the given field key.
    #[must_use]
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    // -------------------------------------------------------------------
    // Strict mutations
    // -------------------------------------------------------------------

    /// Resize a column by a pixel delta against its current width,
    /// flooring at the minimum width. Strict: an out-of-range index is
    /// reported, not ignored.
    pub fn resize_by(&mut self, index: usize, delta: f32) -> Result<()> {
        let min_width = self.min_width;
        let len = self.columns.len();
        let col = self
            .columns
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, len })?;
        col.width = (col.width + delta).max(min_width);
        Ok(())
    }

    /// Move the column at `from` to position `to`, shifting the columns
    /// in between. Width travels with the moved column. `from == to` is
    /// an accepted no-op; an out-of-range index is reported.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.columns.len();
        if from >= len {
            return Err(GridError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(GridError::IndexOutOfRange { index: to, len });
        }
        if from == to {
            return Ok(());
        }
        let col = self.columns.remove(from);
        debug!("reorder column '{}': {from} -> {to}", col.key);
        self.columns.insert(to, col);
        Ok(())
    }

    // -------------------------------------------------------------------
    // Resize gesture
    // -------------------------------------------------------------------

    /// Begin a resize gesture on a column, capturing its current width
    /// as the base for subsequent deltas. Out-of-range indices are
    /// ignored; starting a new gesture replaces any active one.
    pub fn resize_start(&mut self, index: usize) {
        self.resize = self.columns.get(index).map(|col| ResizeGesture {
            index,
            base_width: col.width,
        });
    }

    /// Apply an intermediate resize update: `max(min, base + delta)`.
    /// Each update is a fully applied state — an aborted gesture leaves
    /// the last one in place. No-op without an active gesture.
    pub fn resize_move(&mut self, delta: f32) {
        let Some(gesture) = self.resize else {
            return;
        };
        let min_width = self.min_width;
        if let Some(col) = self.columns.get_mut(gesture.index) {
            col.width = (gesture.base_width + delta).max(min_width);
            trace!("resize column {} -> {}px", gesture.index, col.width);
        }
    }

    /// Finalize the resize gesture. The last applied width stands.
    pub fn resize_end(&mut self) {
        self.resize = None;
    }

    // -------------------------------------------------------------------
    // Drag (reorder) gesture
    // -------------------------------------------------------------------

    /// Begin dragging a column header. Out-of-range indices are ignored.
    pub fn drag_start(&mut self, index: usize) {
        self.drag = (index < self.columns.len()).then_some(DragGesture { from: index });
    }

    /// Drop the dragged column at a target position. No-op when no drag
    /// is active, the target is out of range, or the column is dropped
    /// on itself.
    pub fn drop_at(&mut self, target: usize) {
        let Some(gesture) = self.drag.take() else {
            return;
        };
        if target < self.columns.len() {
            // Indices were validated; reorder cannot fail here.
            let _ = self.reorder(gesture.from, target);
        }
    }

    /// Abandon the drag without reordering.
    pub fn drag_cancel(&mut self) {
        self.drag = None;
    }

    /// Source index of the active drag, if one is in flight. Hosts use
    /// this to render a drop-target preview during drag-over.
    #[must_use]
    pub fn drag_source(&self) -> Option<usize> {
        self.drag.map(|g| g.from)
    }
}
