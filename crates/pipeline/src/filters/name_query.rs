//! Filter for the free-text name search box.
//!
//! This is the filter behind the "Enter perk name..." input: every
//! keystroke replaces the query and the visible set is recomputed.

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::PerkRecord;

/// Keeps perks whose title contains the name query, case-insensitively.
///
/// ## Algorithm
/// 1. Empty query: inactive, pass the working set through unchanged
/// 2. Case-fold query and title with `to_lowercase`
/// 3. Keep titles containing the folded query as a substring
///
/// Substring, not prefix or whole-word: "offee" matches "Coffee Perk".
/// The query is not trimmed, so an all-whitespace query matches literally.
pub struct NameQueryFilter;

impl Filter for NameQueryFilter {
    fn name(&self) -> &str {
        "NameQueryFilter"
    }

    fn apply(&self, perks: Vec<PerkRecord>, state: &FilterState) -> Vec<PerkRecord> {
        if state.name_query().is_empty() {
            return perks;
        }

        let needle = state.name_query().to_lowercase();
        perks
            .into_iter()
            .filter(|perk| perk.title.to_lowercase().contains(&needle))
            .collect()
    }
}
