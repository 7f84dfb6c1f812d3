//! gridpane - headless engine for a virtualized data grid
//!
//! Decides everything a grid renderer needs except the pixels:
//! - Which rows are materialized for the current scroll position
//!   (windowing with overscan, O(visible) per interaction)
//! - What order rows appear in (stable single-column sort)
//! - Where focus sits and whether it is editing (keyboard + pointer
//!   state machine with clamp-on-structural-change)
//! - Column order and widths under drag and resize gestures
//!
//! The rendering collaborator pushes inputs in (rows, column specs,
//! scroll/layout geometry, logical pointer and keyboard events) and
//! reads [`GridEngine::snapshot`] back out each cycle.
//!
//! # Usage
//!
//! ```
//! use gridpane::{ColumnSpec, GridEngine, Row, ViewportState};
//!
//! let columns = vec![
//!     ColumnSpec::new("name").header("Name").sortable(true).editable(true),
//!     ColumnSpec::new("age").header("Age").sortable(true),
//! ];
//! let rows = vec![
//!     Row::new(1).field("name", "Ada").field("age", 36i64),
//!     Row::new(2).field("name", "Grace").field("age", 45i64),
//! ];
//!
//! let mut grid = GridEngine::new(columns, rows);
//! grid.set_viewport(ViewportState::new(0.0, 600.0, 40.0));
//!
//! let snapshot = grid.snapshot();
//! assert_eq!(snapshot.window.start_index, 0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod focus;
pub mod layout;
pub mod sort;
pub mod types;
pub mod window;

pub use config::{BlurPolicy, GridConfig};
pub use engine::{FocusCell, GridEngine, Snapshot};
pub use error::{GridError, Result};
pub use focus::{Bounds, CellPos, FocusState, NavKey};
pub use layout::ColumnLayout;
pub use types::{
    Column, ColumnSpec, Row, SortDirection, SortState, Value, DEFAULT_COLUMN_WIDTH,
    MIN_COLUMN_WIDTH,
};
pub use window::{compute_window, RowSlot, ViewportState, VisibleWindow, OVERSCAN};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
