//! Core domain types for the perk directory.
//!
//! This module defines the record shapes exchanged between the fetch
//! boundary, the catalog, and the filter pipeline:
//! - `RawPerk`: the wire shape as received from a source, fields optional
//! - `PerkRecord`: the validated, immutable perk
//! - `Catalog`: the ordered, read-only collection with an id index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a perk within a catalog
pub type PerkId = String;

// =============================================================================
// Perk Records
// =============================================================================

/// Wire shape of a perk as served by a source, before validation.
///
/// Every field is optional because the payload is untrusted until
/// `validate::build_catalog` has checked it once at the load boundary.
/// Unknown extra fields in the payload are ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPerk {
    pub id: Option<PerkId>,
    pub title: Option<String>,
    pub merchant: Option<String>,
}

impl RawPerk {
    /// Convenience constructor for fixtures and tests.
    pub fn new(
        id: impl Into<PerkId>,
        title: impl Into<String>,
        merchant: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            merchant: Some(merchant.into()),
        }
    }
}

/// A validated perk record.
///
/// Invariants, enforced once by `validate::build_catalog`:
/// - `id` is unique within its catalog
/// - `title` and `merchant` are non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkRecord {
    pub id: PerkId,
    /// Display name; matched case-insensitively by the name filter
    pub title: String,
    /// Owning organization; matched exactly by the merchant filter
    pub merchant: String,
}

// =============================================================================
// Catalog - The In-Memory Collection
// =============================================================================

/// The full perk collection held in memory after a successful load.
///
/// Owned by the loader and read-only downstream. Records keep the order
/// they were received in (no implicit sort); the id index provides O(1)
/// lookups on top of that order.
#[derive(Debug)]
pub struct Catalog {
    perks: Vec<PerkRecord>,
    id_index: HashMap<PerkId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            perks: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// Append a perk, rejecting duplicate ids.
    pub fn insert_perk(&mut self, perk: PerkRecord) -> crate::error::Result<()> {
        if self.id_index.contains_key(&perk.id) {
            return Err(crate::error::CatalogError::DuplicateId {
                id: perk.id.clone(),
            });
        }
        self.id_index.insert(perk.id.clone(), self.perks.len());
        self.perks.push(perk);
        Ok(())
    }

    /// Get a perk by id
    pub fn get(&self, id: &str) -> Option<&PerkRecord> {
        self.id_index.get(id).map(|&i| &self.perks[i])
    }

    /// All perks, in the order received from the source
    pub fn perks(&self) -> &[PerkRecord] {
        &self.perks
    }

    /// Distinct merchant names, in first-appearance order.
    ///
    /// Feeds the merchant select control's option set.
    pub fn merchants(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.perks
            .iter()
            .map(|perk| perk.merchant.as_str())
            .filter(|merchant| seen.insert(*merchant))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.perks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
