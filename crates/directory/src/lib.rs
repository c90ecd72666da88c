//! Directory crate for the Perk Explorer engine.
//!
//! This crate contains the loader and the page composition that
//! coordinate fetching, filtering, and status reporting for the perk
//! directory.

pub mod loader;
pub mod page;

pub use loader::{LoadStatus, Loader};
pub use page::{DirectoryPage, PageStatus};
