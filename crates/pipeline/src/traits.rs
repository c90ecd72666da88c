//! Core trait for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable filters to
//! be applied to the perk working set.

use crate::state::FilterState;
use catalog::PerkRecord;

/// Core trait for filtering perks.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<PerkRecord> and return a filtered Vec,
///   preserving the relative order of survivors
/// - There is no error path: any filter state yields a (possibly empty)
///   result, never a failure
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to the working set.
    ///
    /// An inactive filter — one whose criterion is unset in `state` —
    /// returns its input unchanged.
    ///
    /// # Arguments
    /// * `perks` - The perks to filter (takes ownership)
    /// * `state` - Current user-entered filter criteria
    fn apply(&self, perks: Vec<PerkRecord>, state: &FilterState) -> Vec<PerkRecord>;
}
