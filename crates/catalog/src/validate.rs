//! Validation of raw perk payloads.
//!
//! Sources hand over `RawPerk` values exactly as deserialized; this module
//! checks them once, at the load boundary, so downstream consumers never
//! re-check fields at read sites.
//!
//! A payload is validated as a whole: the first invalid record or duplicate
//! id fails the build and no partial catalog is produced.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, PerkRecord, RawPerk};

fn require(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String> {
    let value = value.ok_or(CatalogError::MissingField { index, field })?;
    if value.is_empty() {
        return Err(CatalogError::EmptyField { index, field });
    }
    Ok(value)
}

/// Validate a single raw perk.
///
/// `index` is the record's position in the fetched payload, used for error
/// context.
pub fn validate_perk(index: usize, raw: RawPerk) -> Result<PerkRecord> {
    let id = require(raw.id, index, "id")?;
    let title = require(raw.title, index, "title")?;
    let merchant = require(raw.merchant, index, "merchant")?;

    Ok(PerkRecord {
        id,
        title,
        merchant,
    })
}

/// Build a catalog from a fetched payload.
///
/// Record order is preserved as received; ids must be unique across the
/// payload.
pub fn build_catalog(raw: Vec<RawPerk>) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for (index, record) in raw.into_iter().enumerate() {
        let perk = validate_perk(index, record)?;
        catalog.insert_perk(perk)?;
    }

    Ok(catalog)
}
