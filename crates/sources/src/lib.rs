//! # Sources Crate
//!
//! This crate implements the fetch boundary of the perk directory.
//!
//! ## Components
//!
//! ### PerkSource trait
//! The single asynchronous operation the engine consumes: fetch the full
//! public perk set, or fail. Transport details live behind the trait.
//!
//! ### JsonFileSource
//! Reads a JSON array of raw perks from disk. The end-to-end transport for
//! the CLI and integration tests.
//!
//! ### FixtureSource
//! In-memory records with injectable delay and failure, for deterministic
//! tests and demos.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{JsonFileSource, PerkSource};
//!
//! let source = JsonFileSource::new("data/perks.json");
//! let raw = source.fetch_all().await?;
//!
//! println!("Fetched {} raw perks", raw.len());
//! ```

// Public modules
pub mod fixture;
pub mod json_file;
pub mod traits;

// Re-export commonly used types
pub use fixture::FixtureSource;
pub use json_file::JsonFileSource;
pub use traits::PerkSource;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::RawPerk;

    #[tokio::test]
    async fn test_sources_share_the_trait_seam() {
        let fixtures: Vec<Box<dyn PerkSource>> = vec![
            Box::new(FixtureSource::new(vec![RawPerk::new(
                "p1",
                "Coffee Perk",
                "Cafe X",
            )])),
            Box::new(FixtureSource::failing("boom")),
        ];

        assert_eq!(fixtures[0].name(), "FixtureSource");
        assert!(fixtures[0].fetch_all().await.is_ok());
        assert!(fixtures[1].fetch_all().await.is_err());
    }
}
