//! Sort state.

use serde::{Deserialize, Serialize};

/// Direction of an applied sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Flip the direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The currently applied sort. `key == None` means no sort: rows appear
/// in the order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Field name to sort by, or none.
    pub key: Option<String>,
    /// Direction; ignored while `key` is none.
    pub direction: SortDirection,
}

impl SortState {
    /// Sort by a key in the given direction.
    #[must_use]
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// The unsorted state.
    #[must_use]
    pub fn unsorted() -> Self {
        Self::default()
    }
}
