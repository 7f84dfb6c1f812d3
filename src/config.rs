//! Engine configuration.

use crate::types::{DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

/// What happens to an in-progress edit when focus is clicked away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurPolicy {
    /// Drop the pending value silently.
    #[default]
    Discard,
    /// Commit the pending value before moving focus.
    Commit,
}

/// Tunables for a grid engine instance.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Extra rows materialized beyond the visible range to mask
    /// scroll-induced pop-in.
    pub overscan: usize,
    /// Width assigned to every column on construction and on structural
    /// reset.
    pub default_column_width: f32,
    /// Floor applied to every resize.
    pub min_column_width: f32,
    /// Click-away behavior for an active edit.
    pub blur_policy: BlurPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            overscan: 2,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            blur_policy: BlurPolicy::default(),
        }
    }
}
