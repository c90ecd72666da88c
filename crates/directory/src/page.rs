//! # Directory Page Engine
//!
//! This module coordinates the perk directory page:
//! 1. Load the catalog once through a `PerkSource`
//! 2. Hold the user's filter criteria
//! 3. Derive the visible subset and its count on every read
//! 4. Expose status, summary text, and merchant options for rendering
//!
//! The presentation layer reads `status`, `visible`, `summary`, and
//! `merchant_options`, and writes `set_name_query` / `set_merchant` on
//! user input. Nothing here renders; this is the state the renderer
//! consumes.

use pipeline::{FilterPipeline, FilterState, MerchantSelector, VisibleResult, directory_pipeline};
use sources::PerkSource;
use tokio_util::sync::CancellationToken;

use crate::loader::{LoadStatus, Loader};

/// Page-level view of the load lifecycle.
///
/// Derived from `LoadStatus`: the page leaves `Loading` exactly once,
/// when the loader completes, and never transitions again. While
/// `Loading` or `Error` the result list and summary are suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Loaded,
    Error(String),
}

/// The directory page engine: loader + filter state + filter pipeline.
pub struct DirectoryPage<S> {
    loader: Loader<S>,
    filter_state: FilterState,
    pipeline: FilterPipeline,
}

impl<S: PerkSource> DirectoryPage<S> {
    /// Create a page around a source.
    ///
    /// The caller keeps a clone of `cancel` and triggers it when the page
    /// is torn down; a fetch completing afterwards is discarded.
    pub fn new(source: S, cancel: CancellationToken) -> Self {
        Self {
            loader: Loader::new(source, cancel),
            filter_state: FilterState::new(),
            pipeline: directory_pipeline(),
        }
    }

    /// Drive the catalog fetch. Safe to call more than once; only the
    /// first call fetches.
    pub async fn load(&mut self) -> PageStatus {
        self.loader.load().await;
        self.status()
    }

    /// Current page state, derived from the load status.
    pub fn status(&self) -> PageStatus {
        match self.loader.status() {
            LoadStatus::Pending => PageStatus::Loading,
            LoadStatus::Ready => PageStatus::Loaded,
            LoadStatus::Failed(reason) => PageStatus::Error(reason.clone()),
        }
    }

    /// Replace the name query; the next `visible()` read reflects it.
    pub fn set_name_query(&mut self, text: impl Into<String>) {
        self.filter_state.set_name_query(text);
    }

    /// Replace the merchant selector; the next `visible()` read reflects it.
    pub fn set_merchant(&mut self, selector: MerchantSelector) {
        self.filter_state.set_merchant(selector);
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    /// The visible subset under the current filters.
    ///
    /// Inert unless the page is `Loaded`: while loading or failed the
    /// pipeline is not invoked and the result is empty. While `Loaded`,
    /// the result is recomputed fresh from (catalog, filter state) on
    /// every call.
    pub fn visible(&self) -> VisibleResult {
        if !self.loader.status().is_ready() {
            return VisibleResult::empty();
        }
        self.pipeline
            .compute_visible(self.loader.catalog().perks(), &self.filter_state)
    }

    /// Summary line for the rendered page ("Showing N perks").
    ///
    /// `None` while the result list is suppressed (loading or failed), so
    /// the presentation layer renders no count text at all in those
    /// states. Zero matches is not an error: the summary still renders
    /// "Showing 0 perks".
    pub fn summary(&self) -> Option<String> {
        if !self.loader.status().is_ready() {
            return None;
        }
        let count = self.visible().count;
        let noun = if count == 1 { "perk" } else { "perks" };
        Some(format!("Showing {} {}", count, noun))
    }

    /// Option set for the merchant select control: the all-merchants
    /// sentinel followed by each distinct merchant in catalog order.
    pub fn merchant_options(&self) -> Vec<MerchantSelector> {
        let mut options = vec![MerchantSelector::All];
        options.extend(
            self.loader
                .catalog()
                .merchants()
                .into_iter()
                .map(|merchant| MerchantSelector::Only(merchant.to_string())),
        );
        options
    }
}
