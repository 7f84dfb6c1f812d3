//! The grid engine: composition root wiring column layout, sorting,
//! viewport windowing, and focus into one consistent snapshot.
//!
//! Single-threaded and synchronous: every public operation runs to
//! completion before the next one is accepted, and derived state (the
//! sort permutation, the visible window) is always consistent with the
//! inputs by the time an operation returns. The sort permutation is
//! memoized — it is recomputed inside the mutations that can change it
//! (row replacement, sort change, edit) and left untouched by scroll,
//! focus, and column gestures.

use log::{debug, trace};

use crate::config::{BlurPolicy, GridConfig};
use crate::error::{GridError, Result};
use crate::focus::{Bounds, CellPos, FocusState, NavKey};
use crate::layout::ColumnLayout;
use crate::sort::sort_order;
use crate::types::{Column, ColumnSpec, Row, SortDirection, SortState, Value};
use crate::window::{compute_window, RowSlot, ViewportState, VisibleWindow};

/// Focused cell as exposed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCell {
    /// Index into the currently sorted row sequence.
    pub row: usize,
    /// Index into the currently ordered column sequence.
    pub col: usize,
    /// Whether the cell is in edit mode.
    pub editing: bool,
}

/// One consistent view of the grid, recomputed from current inputs on
/// every call. Renderers read this each cycle to decide what to paint.
#[derive(Debug)]
pub struct Snapshot<'a> {
    /// Columns in display order with current widths.
    pub ordered_columns: &'a [Column],
    /// The rows to materialize and where to place them.
    pub window: VisibleWindow,
    /// Focused cell, if any.
    pub focus: Option<FocusCell>,
}

/// Headless grid engine. One instance per rendered grid.
#[derive(Debug)]
pub struct GridEngine {
    rows: Vec<Row>,
    layout: ColumnLayout,
    sort_state: SortState,
    viewport: ViewportState,
    focus: FocusState,
    config: GridConfig,
    /// Memoized display permutation; `None` while unsorted.
    order: Option<Vec<usize>>,
    /// Last value pushed from the renderer's edit field, used when the
    /// blur policy commits on click-away.
    pending_edit: Option<String>,
}

impl GridEngine {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new(specs: Vec<ColumnSpec>, rows: Vec<Row>) -> Self {
        Self::with_config(specs, rows, GridConfig::default())
    }

    /// Create an engine with explicit configuration.
    #[must_use]
    pub fn with_config(specs: Vec<ColumnSpec>, rows: Vec<Row>, config: GridConfig) -> Self {
        let layout = ColumnLayout::new(specs, &config);
        Self {
            rows,
            layout,
            sort_state: SortState::unsorted(),
            viewport: ViewportState::default(),
            focus: FocusState::Unfocused,
            config,
            order: None,
            pending_edit: None,
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            rows: self.rows.len(),
            cols: self.layout.len(),
        }
    }

    fn resort(&mut self) {
        self.order = sort_order(&self.rows, &self.sort_state);
        self.focus.clamp(self.bounds());
    }

    // -------------------------------------------------------------------
    // Data inputs
    // -------------------------------------------------------------------

    /// Replace the row set. The sort permutation is recomputed and focus
    /// re-clamped; a collapse to zero rows unfocuses.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        debug!("row set replaced: {} rows", rows.len());
        self.rows = rows;
        self.resort();
    }

    /// Structural reset: replace the column set, discarding widths and
    /// order (see [`ColumnLayout::set_columns`]). A sort keyed on a
    /// column absent from the new set is cleared. Distinct from a
    /// reorder gesture by API shape — a reorder preserves widths, a
    /// reset deliberately does not.
    pub fn set_columns(&mut self, specs: Vec<ColumnSpec>) {
        self.layout.set_columns(specs);
        let stale_sort = self
            .sort_state
            .key
            .as_deref()
            .is_some_and(|key| self.layout.position_of(key).is_none());
        if stale_sort {
            self.sort_state = SortState::unsorted();
        }
        self.resort();
    }

    /// Current rows in caller order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.layout.columns()
    }

    /// Look up a row by stable id.
    #[must_use]
    pub fn row_by_id(&self, id: u64) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// The row at a display position (after sorting).
    #[must_use]
    pub fn display_row(&self, display_index: usize) -> Option<&Row> {
        match &self.order {
            Some(order) => order
                .get(display_index)
                .and_then(|&source| self.rows.get(source)),
            None => self.rows.get(display_index),
        }
    }

    // -------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------

    /// Current sort state.
    #[must_use]
    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    /// Sort by a column key. The key must name a column; the `sortable`
    /// flag gates header interaction ([`Self::toggle_sort`]), not this
    /// programmatic entry point.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) -> Result<()> {
        if self.layout.position_of(key).is_none() {
            return Err(GridError::InvalidColumnKey(key.to_string()));
        }
        debug!("sort by '{key}' {direction:?}");
        self.sort_state = SortState::by(key, direction);
        self.resort();
        Ok(())
    }

    /// Header-click sorting: first click sorts ascending, a second click
    /// on the same column flips the direction. Non-sortable columns and
    /// out-of-range indices are ignored. Returns the new sort state when
    /// one was applied.
    pub fn toggle_sort(&mut self, col_index: usize) -> Option<SortState> {
        let col = self.layout.column(col_index)?;
        if !col.sortable {
            return None;
        }
        let direction = match &self.sort_state.key {
            Some(key) if *key == col.key => self.sort_state.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.sort_state = SortState::by(col.key.clone(), direction);
        self.resort();
        Some(self.sort_state.clone())
    }

    /// Remove the sort; rows return to caller order.
    pub fn clear_sort(&mut self) {
        self.sort_state = SortState::unsorted();
        self.resort();
    }

    // -------------------------------------------------------------------
    // Viewport inputs
    // -------------------------------------------------------------------

    /// Replace the whole viewport state (layout event).
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = ViewportState::new(
            viewport.scroll_offset,
            viewport.container_height,
            viewport.row_height,
        );
    }

    /// Scroll event from the renderer.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        trace!("scroll -> {offset}px");
        self.viewport.scroll_offset = offset.max(0.0);
    }

    /// Container resize event from the renderer.
    pub fn set_container_height(&mut self, height: f32) {
        self.viewport.container_height = height.max(0.0);
    }

    /// Current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    // -------------------------------------------------------------------
    // Column gestures (forwarded to the layout)
    // -------------------------------------------------------------------

    /// Begin a header resize gesture.
    pub fn resize_start(&mut self, index: usize) {
        self.layout.resize_start(index);
    }

    /// Intermediate resize update (pointer delta from gesture start).
    pub fn resize_move(&mut self, delta: f32) {
        self.layout.resize_move(delta);
    }

    /// Finalize the resize gesture.
    pub fn resize_end(&mut self) {
        self.layout.resize_end();
    }

    /// Begin dragging a column header.
    pub fn drag_start(&mut self, index: usize) {
        self.layout.drag_start(index);
    }

    /// Drop the dragged header at a target position.
    pub fn drop_at(&mut self, target: usize) {
        self.layout.drop_at(target);
        // Column count is unchanged by a reorder, but focus column
        // identity is positional and the contract is uniform re-clamp.
        self.focus.clamp(self.bounds());
    }

    /// Abandon the drag without reordering.
    pub fn drag_cancel(&mut self) {
        self.layout.drag_cancel();
    }

    /// Source index of the active header drag, for drop-target previews.
    #[must_use]
    pub fn drag_source(&self) -> Option<usize> {
        self.layout.drag_source()
    }

    /// Strict resize by delta; out-of-range indices are reported.
    pub fn resize_column(&mut self, index: usize, delta: f32) -> Result<()> {
        self.layout.resize_by(index, delta)
    }

    /// Strict reorder; out-of-range indices are reported.
    pub fn reorder_columns(&mut self, from: usize, to: usize) -> Result<()> {
        self.layout.reorder(from, to)?;
        self.focus.clamp(self.bounds());
        Ok(())
    }

    // -------------------------------------------------------------------
    // Focus and editing
    // -------------------------------------------------------------------

    /// Pointer click on a cell (display indices). Focuses the cell from
    /// any state. An active edit is resolved by the blur policy first:
    /// `Discard` drops the pending value, `Commit` applies it before
    /// focus moves.
    pub fn click(&mut self, row: usize, col: usize) {
        if self.focus.is_editing() {
            match self.config.blur_policy {
                BlurPolicy::Discard => {}
                BlurPolicy::Commit => {
                    if let Some(pending) = self.pending_edit.take() {
                        // A failed commit (stale position) degrades to a
                        // discard; focus still moves.
                        let _ = self.commit_edit(&pending);
                    }
                }
            }
        }
        self.pending_edit = None;
        self.focus.click(row, col, self.bounds());
    }

    /// Arrow-key navigation; clamps at the grid edges, never wraps.
    /// Ignored while unfocused or editing.
    pub fn arrow_key(&mut self, key: NavKey) {
        self.focus.arrow(key, self.bounds());
    }

    /// Enter key: begin editing the focused cell when its column is
    /// editable; otherwise a no-op.
    pub fn enter_key(&mut self) {
        let Some(CellPos { col, .. }) = self.focus.pos() else {
            return;
        };
        if self.focus.is_editing() {
            return;
        }
        let editable = self.layout.column(col).is_some_and(|c| c.editable);
        if editable {
            self.focus.begin_edit();
            self.pending_edit = None;
        }
    }

    /// Escape key: cancel an active edit, discarding the pending value.
    pub fn escape_key(&mut self) {
        self.pending_edit = None;
        self.focus.end_edit();
    }

    /// Mirror of the renderer's edit-field content, consulted when the
    /// blur policy commits on click-away.
    pub fn update_edit_value(&mut self, value: &str) {
        if self.focus.is_editing() {
            self.pending_edit = Some(value.to_string());
        }
    }

    /// Commit the active edit with the given raw input. The target row
    /// is resolved by stable id before any mutation, so the commit lands
    /// on the right row even if a sort moved it since the edit began.
    /// Returns to `Focused` at the same cell position. No-op when not
    /// editing.
    pub fn commit_edit(&mut self, value: &str) -> Result<()> {
        let FocusState::Editing(pos) = self.focus else {
            return Ok(());
        };
        let key = self
            .layout
            .column(pos.col)
            .map(|c| c.key.clone())
            .ok_or(GridError::IndexOutOfRange {
                index: pos.col,
                len: self.layout.len(),
            })?;
        let id = self
            .display_row(pos.row)
            .map(|r| r.id)
            .ok_or(GridError::IndexOutOfRange {
                index: pos.row,
                len: self.rows.len(),
            })?;
        self.apply_edit(id, &key, Value::from_input(value))?;
        self.pending_edit = None;
        self.focus.end_edit();
        Ok(())
    }

    /// The single row-mutation entry point. Looks the row up by stable
    /// id — never by visible index — replaces one field value on it, and
    /// recomputes the sorted view. All other rows are untouched.
    pub fn apply_edit(&mut self, row_id: u64, key: &str, value: Value) -> Result<()> {
        if self.layout.position_of(key).is_none() {
            return Err(GridError::InvalidColumnKey(key.to_string()));
        }
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == row_id)
            .ok_or(GridError::StructuralMismatch(row_id))?;
        debug!("edit row {row_id} field '{key}'");
        row.set(key, value);
        self.resort();
        Ok(())
    }

    /// Explicit deselection.
    pub fn clear_focus(&mut self) {
        self.pending_edit = None;
        self.focus.clear();
    }

    /// Current focus as exposed to renderers.
    #[must_use]
    pub fn focus(&self) -> Option<FocusCell> {
        self.focus.pos().map(|pos| FocusCell {
            row: pos.row,
            col: pos.col,
            editing: self.focus.is_editing(),
        })
    }

    // -------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------

    /// One consistent view of the grid: ordered columns, the visible
    /// window for the current viewport, and focus. Recomputed from
    /// current inputs on every call; no partial state is observable.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            ordered_columns: self.layout.columns(),
            window: compute_window(self.rows.len(), &self.viewport, self.config.overscan),
            focus: self.focus(),
        }
    }

    /// The materialized rows with their placements: each visible slot
    /// paired with the row that occupies it after sorting.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<(RowSlot, &Row)> {
        let window = compute_window(self.rows.len(), &self.viewport, self.config.overscan);
        window
            .entries
            .iter()
            .filter_map(|slot| self.display_row(slot.row_index).map(|row| (*slot, row)))
            .collect()
    }
}
