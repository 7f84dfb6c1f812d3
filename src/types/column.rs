//! Column definitions.
//!
//! Callers describe columns with [`ColumnSpec`]; the engine owns the
//! runtime [`Column`] copies, which add the mutable pixel width. Width
//! lives *inside* the column so a reorder moves width and definition as
//! one unit — keeping them in parallel arrays is how resize gestures end
//! up landing on the wrong column after a drag.

use serde::{Deserialize, Serialize};

/// Default width applied on construction and on structural reset.
pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;

/// Columns never shrink below this, no matter the resize delta.
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Caller-supplied column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Field name this column reads from each row.
    pub key: String,
    /// Display label for the header cell.
    pub header: String,
    /// Whether header interaction may sort by this column.
    pub sortable: bool,
    /// Whether cells in this column accept in-place edits.
    pub editable: bool,
}

impl ColumnSpec {
    /// Create a spec with the header defaulting to the key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            header: key.clone(),
            key,
            sortable: false,
            editable: false,
        }
    }

    /// Builder-style header label.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Builder-style sortable flag.
    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Builder-style editable flag.
    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

/// Engine-owned runtime column: the spec plus a mutable pixel width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Field name this column reads from each row.
    pub key: String,
    /// Display label for the header cell.
    pub header: String,
    /// Whether header interaction may sort by this column.
    pub sortable: bool,
    /// Whether cells in this column accept in-place edits.
    pub editable: bool,
    /// Current width in pixels, always ≥ [`MIN_COLUMN_WIDTH`].
    pub width: f32,
}

impl From<ColumnSpec> for Column {
    fn from(spec: ColumnSpec) -> Self {
        Self {
            key: spec.key,
            header: spec.header,
            sortable: spec.sortable,
            editable: spec.editable,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }
}
