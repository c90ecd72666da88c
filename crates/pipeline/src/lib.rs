//! Pipeline for deriving the visible perk subset from filter state.
//!
//! This crate provides:
//! - FilterState, the user-entered criteria (name query + merchant selector)
//! - Filter trait and implementations for perk filtering
//! - FilterPipeline for composing filters and computing the VisibleResult
//!
//! ## Architecture
//! The pipeline derives the visible set in stages:
//! 1. NameQueryFilter keeps titles containing the query (case-insensitive)
//! 2. MerchantFilter keeps records of the selected merchant (exact match)
//! 3. The surviving records and their count form the VisibleResult
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterState, MerchantSelector, directory_pipeline};
//!
//! let pipeline = directory_pipeline();
//!
//! let mut state = FilterState::new();
//! state.set_name_query("coffee");
//!
//! let visible = pipeline.compute_visible(catalog.perks(), &state);
//! println!("Showing {} perks", visible.count);
//! ```

pub mod engine;
pub mod filters;
pub mod state;
pub mod traits;

// Re-export main types
pub use engine::{FilterPipeline, VisibleResult, directory_pipeline};
pub use state::{FilterState, MerchantSelector};
pub use traits::Filter;
