//! The fetch boundary for perk data.

use anyhow::Result;
use async_trait::async_trait;
use catalog::RawPerk;

/// A source of the full public perk set.
///
/// One call, one transport operation: fetch everything, or fail. Retry,
/// timeout, and caching policy belong to the transport behind the
/// implementation, not to this boundary. Payload order must be preserved
/// as served by the backend.
///
/// ## Design Note
/// - `Send + Sync` allows sources to be driven from any runtime context
/// - Records come back as `RawPerk`; validation happens once, in the loader
#[async_trait]
pub trait PerkSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch the entire perk payload.
    ///
    /// # Returns
    /// * `Ok(Vec<RawPerk>)` - The raw records, order as served
    /// * `Err` - Any transport or decoding failure
    async fn fetch_all(&self) -> Result<Vec<RawPerk>>;
}
