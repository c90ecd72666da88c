//! Load lifecycle for the perk catalog.
//!
//! One loader, one fetch attempt: the status moves from `Pending` to
//! exactly one of `Ready` or `Failed`, and a new load requires a new
//! loader (the page remount in the surrounding application).

use anyhow::Error;
use catalog::{Catalog, validate};
use sources::PerkSource;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Tri-state lifecycle of the catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch not yet completed; the collection is empty
    Pending,
    /// Fetch and validation succeeded; the collection is populated
    Ready,
    /// Fetch or validation failed; the reason is ready for display
    Failed(String),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready)
    }

    /// The failure reason, if the load failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Fetches the perk catalog exactly once per page lifetime.
///
/// The caller keeps a clone of the cancellation token and triggers it on
/// teardown: a fetch result arriving after cancellation is discarded
/// without touching loader state.
pub struct Loader<S> {
    source: S,
    cancel: CancellationToken,
    status: LoadStatus,
    catalog: Catalog,
    attempted: bool,
}

impl<S: PerkSource> Loader<S> {
    pub fn new(source: S, cancel: CancellationToken) -> Self {
        Self {
            source,
            cancel,
            status: LoadStatus::Pending,
            catalog: Catalog::new(),
            attempted: false,
        }
    }

    /// Drive the single fetch attempt.
    ///
    /// Re-invocations are no-ops returning the current status: while the
    /// first call is in flight the status still reads `Pending`, and once
    /// `Ready` or `Failed` the outcome is final for this loader. Errors
    /// are captured into `Failed`, never propagated to the caller.
    pub async fn load(&mut self) -> &LoadStatus {
        if self.attempted {
            return &self.status;
        }
        self.attempted = true;

        info!("Fetching perk catalog from {}", self.source.name());
        let fetched = tokio::select! {
            // Cancellation wins over a fetch that is also ready
            biased;
            _ = self.cancel.cancelled() => {
                info!("Catalog load cancelled, fetch abandoned");
                return &self.status;
            }
            fetched = self.source.fetch_all() => fetched,
        };

        // The token can flip between fetch completion and this point; a
        // torn-down page must not observe a state change.
        if self.cancel.is_cancelled() {
            info!("Catalog load cancelled on arrival, result discarded");
            return &self.status;
        }

        match fetched.and_then(|raw| validate::build_catalog(raw).map_err(Error::from)) {
            Ok(catalog) => {
                info!("Catalog ready: {} perks", catalog.len());
                self.catalog = catalog;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                warn!("Catalog load failed: {:#}", err);
                self.status = LoadStatus::Failed(format!("{:#}", err));
            }
        }

        &self.status
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The loaded collection; empty unless the status is `Ready`.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
