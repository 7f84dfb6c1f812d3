//! Core data model: values, rows, columns, sort state.

mod column;
mod row;
mod sort;
mod value;

pub use column::{Column, ColumnSpec, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use row::Row;
pub use sort::{SortDirection, SortState};
pub use value::Value;
