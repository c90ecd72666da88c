//! Source backed by a JSON file on disk.
//!
//! The file holds a JSON array of raw perk objects. This is the
//! workspace's own end-to-end transport, used by the CLI and tests; an
//! HTTP-backed implementation plugs in at the same trait without touching
//! the loader.

use anyhow::{Context, Result};
use async_trait::async_trait;
use catalog::RawPerk;
use std::path::PathBuf;
use tracing::debug;

use crate::traits::PerkSource;

/// Reads a JSON array of raw perks from a file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given dataset path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PerkSource for JsonFileSource {
    fn name(&self) -> &str {
        "JsonFileSource"
    }

    async fn fetch_all(&self) -> Result<Vec<RawPerk>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read perk data from {}", self.path.display()))?;

        let perks: Vec<RawPerk> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Invalid perk payload in {}", self.path.display()))?;

        debug!(
            "Fetched {} raw perks from {}",
            perks.len(),
            self.path.display()
        );
        Ok(perks)
    }
}
