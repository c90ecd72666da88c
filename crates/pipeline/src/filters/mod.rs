//! Filter implementations for the directory pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod merchant;
pub mod name_query;

// Re-export for convenience
pub use merchant::MerchantFilter;
pub use name_query::NameQueryFilter;
