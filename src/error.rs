//! Structured error types for gridpane.
//!
//! Every condition here is recoverable: the engine clamps or no-ops where
//! a safe default exists, and reports an error with state unchanged where
//! it does not. Nothing in this crate aborts the process.

/// All errors that can occur while mutating or querying the grid engine.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    /// An index outside the current row or column bounds was given to an
    /// operation with no safe clamping default.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The bound it was checked against.
        len: usize,
    },

    /// An edit or sort named a column key absent from the column set.
    #[error("unknown column key: {0}")]
    InvalidColumnKey(String),

    /// An edit named a row id that matches no known row.
    #[error("no row with id {0}")]
    StructuralMismatch(u64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
