//! Deterministic in-memory source for tests and demos.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use catalog::RawPerk;
use std::time::Duration;

use crate::traits::PerkSource;

/// In-memory perk source with injectable latency and failure.
///
/// The deterministic stand-in for a real transport: hand it the records a
/// backend would serve, or a failure reason, and drive the loader against
/// it. `with_delay` keeps the fetch in flight long enough for pending-state
/// and cancellation tests.
pub struct FixtureSource {
    perks: Vec<RawPerk>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl FixtureSource {
    /// A source that serves the given records.
    pub fn new(perks: Vec<RawPerk>) -> Self {
        Self {
            perks,
            failure: None,
            delay: None,
        }
    }

    /// A source whose fetch fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            perks: Vec::new(),
            failure: Some(reason.into()),
            delay: None,
        }
    }

    /// Delay the fetch outcome (builder pattern).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PerkSource for FixtureSource {
    fn name(&self) -> &str {
        "FixtureSource"
    }

    async fn fetch_all(&self) -> Result<Vec<RawPerk>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(reason) => Err(anyhow!("{}", reason)),
            None => Ok(self.perks.clone()),
        }
    }
}
