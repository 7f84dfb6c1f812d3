//! Selection and edit state machine.
//!
//! Tracks the focused cell and whether it is in edit mode. Positions are
//! indices into the *currently sorted* row sequence and *currently
//! ordered* column sequence, not stable identities: focus follows screen
//! position across a sort. Structural changes re-clamp the position
//! instead of dropping it; only a collapse to zero rows or columns
//! clears focus.

use log::trace;

/// A focused cell position (sorted-row index, ordered-column index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    /// Index into the currently sorted row sequence.
    pub row: usize,
    /// Index into the currently ordered column sequence.
    pub col: usize,
}

/// Arrow-key navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move focus one row up.
    Up,
    /// Move focus one row down.
    Down,
    /// Move focus one column left.
    Left,
    /// Move focus one column right.
    Right,
}

/// Current grid dimensions, used for clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
}

impl Bounds {
    /// True when no cell exists to focus.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    fn clamp(&self, pos: CellPos) -> CellPos {
        CellPos {
            row: pos.row.min(self.rows.saturating_sub(1)),
            col: pos.col.min(self.cols.saturating_sub(1)),
        }
    }
}

/// The selection/edit states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// No cell focused. Initial state.
    #[default]
    Unfocused,
    /// A cell is focused, not editing.
    Focused(CellPos),
    /// The focused cell is in edit mode.
    Editing(CellPos),
}

impl FocusState {
    /// The focused position, if any.
    #[must_use]
    pub fn pos(&self) -> Option<CellPos> {
        match self {
            FocusState::Unfocused => None,
            FocusState::Focused(pos) | FocusState::Editing(pos) => Some(*pos),
        }
    }

    /// True while in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, FocusState::Editing(_))
    }

    /// Pointer click on a cell: focus it from any state. An active edit
    /// is abandoned here; whether its pending value was committed first
    /// is the engine's blur-policy decision, made before calling this.
    pub fn click(&mut self, row: usize, col: usize, bounds: Bounds) {
        if bounds.is_degenerate() {
            *self = FocusState::Unfocused;
            return;
        }
        *self = FocusState::Focused(bounds.clamp(CellPos { row, col }));
    }

    /// Arrow-key navigation. Moves only from `Focused`: `Unfocused` has
    /// nothing to move and `Editing` owns the keystrokes. Edges clamp,
    /// never wrap.
    pub fn arrow(&mut self, key: NavKey, bounds: Bounds) {
        let FocusState::Focused(pos) = *self else {
            return;
        };
        let moved = match key {
            NavKey::Up => CellPos {
                row: pos.row.saturating_sub(1),
                ..pos
            },
            NavKey::Down => CellPos {
                row: pos.row + 1,
                ..pos
            },
            NavKey::Left => CellPos {
                col: pos.col.saturating_sub(1),
                ..pos
            },
            NavKey::Right => CellPos {
                col: pos.col + 1,
                ..pos
            },
        };
        *self = FocusState::Focused(bounds.clamp(moved));
    }

    /// Enter edit mode on the focused cell. No-op unless `Focused`;
    /// column editability is checked by the engine before calling.
    pub fn begin_edit(&mut self) {
        if let FocusState::Focused(pos) = *self {
            trace!("begin edit at ({}, {})", pos.row, pos.col);
            *self = FocusState::Editing(pos);
        }
    }

    /// Leave edit mode, returning focus to the same cell. Used by both
    /// commit and cancel. No-op unless `Editing`.
    pub fn end_edit(&mut self) {
        if let FocusState::Editing(pos) = *self {
            *self = FocusState::Focused(pos);
        }
    }

    /// Re-clamp after a structural change (sort applied, columns
    /// reordered or reset, rows replaced). A collapse to zero rows or
    /// columns unfocuses; otherwise the position clamps into range and
    /// edit mode survives.
    pub fn clamp(&mut self, bounds: Bounds) {
        if bounds.is_degenerate() {
            *self = FocusState::Unfocused;
            return;
        }
        match *self {
            FocusState::Unfocused => {}
            FocusState::Focused(pos) => *self = FocusState::Focused(bounds.clamp(pos)),
            FocusState::Editing(pos) => *self = FocusState::Editing(bounds.clamp(pos)),
        }
    }

    /// Explicit deselection.
    pub fn clear(&mut self) {
        *self = FocusState::Unfocused;
    }
}
