//! The FilterPipeline derives the visible subset from the filter state.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the
//! VisibleResult value derived from each computation.

use crate::filters::{MerchantFilter, NameQueryFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::PerkRecord;
use tracing;

/// The derived view of a collection after filtering.
///
/// Never stored — recomputed fresh on every read. `count` always equals
/// `items.len()`: it is fixed at construction and never tracked
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleResult {
    pub items: Vec<PerkRecord>,
    pub count: usize,
}

impl VisibleResult {
    /// Wrap surviving records, deriving the count.
    pub fn from_items(items: Vec<PerkRecord>) -> Self {
        let count = items.len();
        Self { items, count }
    }

    /// The inert result used while no collection is available.
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }
}

/// Chains multiple filters together into a processing pipeline.
///
/// A record is visible iff every filter keeps it (logical AND); filters
/// run in insertion order and the relative order of survivors matches the
/// input collection (stable, no re-sort).
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NameQueryFilter)
///     .add_filter(MerchantFilter);
///
/// let visible = pipeline.compute_visible(catalog.perks(), &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the working set.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the final working set
    pub fn apply(&self, perks: Vec<PerkRecord>, state: &FilterState) -> Vec<PerkRecord> {
        let mut current = perks;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Compute the visible subset of `perks` under `state`.
    ///
    /// Pure and deterministic: identical inputs yield an identical result,
    /// with no side effects — safe to call on every keystroke or selection
    /// change. An empty collection or zero surviving records yields an
    /// empty result with count 0; that is not an error.
    pub fn compute_visible(&self, perks: &[PerkRecord], state: &FilterState) -> VisibleResult {
        VisibleResult::from_items(self.apply(perks.to_vec(), state))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard directory pipeline: name search AND merchant selection.
pub fn directory_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(NameQueryFilter)
        .add_filter(MerchantFilter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MerchantSelector;

    fn perk(id: &str, title: &str, merchant: &str) -> PerkRecord {
        PerkRecord {
            id: id.to_string(),
            title: title.to_string(),
            merchant: merchant.to_string(),
        }
    }

    fn sample() -> Vec<PerkRecord> {
        vec![
            perk("p1", "Coffee Perk", "Cafe X"),
            perk("p2", "Book Discount", "Bookstore Y"),
            perk("p3", "Coffee Refill", "Bookstore Y"),
        ]
    }

    #[test]
    fn test_empty_pipeline_passes_everything() {
        let pipeline = FilterPipeline::new();

        let result = pipeline.compute_visible(&sample(), &FilterState::new());
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_count_always_matches_items_len() {
        let pipeline = directory_pipeline();
        let perks = sample();

        let mut state = FilterState::new();
        for query in ["", "coffee", "book", "no such perk"] {
            state.set_name_query(query);
            let result = pipeline.compute_visible(&perks, &state);
            assert_eq!(result.count, result.items.len());
        }
    }

    #[test]
    fn test_empty_query_returns_collection_in_order() {
        let pipeline = directory_pipeline();
        let perks = sample();

        let result = pipeline.compute_visible(&perks, &FilterState::new());
        assert_eq!(result.items, perks);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let pipeline = directory_pipeline();
        let mut state = FilterState::new();
        state.set_name_query("coffee");
        state.set_merchant(MerchantSelector::Only("Bookstore Y".to_string()));

        let result = pipeline.compute_visible(&sample(), &state);

        // Only "Coffee Refill" passes both predicates
        assert_eq!(result.count, 1);
        assert_eq!(result.items[0].id, "p3");
    }

    #[test]
    fn test_surviving_order_is_stable() {
        let pipeline = directory_pipeline();
        let mut state = FilterState::new();
        state.set_name_query("coffee");

        let result = pipeline.compute_visible(&sample(), &state);
        let ids: Vec<_> = result.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn test_compute_visible_is_idempotent() {
        let pipeline = directory_pipeline();
        let perks = sample();
        let mut state = FilterState::new();
        state.set_name_query("coffee");

        let first = pipeline.compute_visible(&perks, &state);
        let second = pipeline.compute_visible(&perks, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collection_yields_empty_result() {
        let pipeline = directory_pipeline();
        let mut state = FilterState::new();
        state.set_name_query("anything");

        let result = pipeline.compute_visible(&[], &state);
        assert!(result.items.is_empty());
        assert_eq!(result.count, 0);
    }
}
