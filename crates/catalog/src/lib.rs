//! # Catalog Crate
//!
//! This crate holds the perk directory's domain model and the validation
//! that guards its boundary.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RawPerk, PerkRecord, Catalog)
//! - **validate**: Turn a fetched payload into a validated Catalog
//! - **error**: Error types for payload validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{validate, RawPerk};
//!
//! let raw = vec![RawPerk::new("p1", "Coffee Perk", "Cafe X")];
//! let catalog = validate::build_catalog(raw)?;
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.get("p1").unwrap().merchant, "Cafe X");
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, PerkId, PerkRecord, RawPerk};
