//! Catalog and site context for Ship Yourself Cards.
//!
//! The catalog is loaded once by the root component and shared read-only
//! with every page through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! if let CatalogState::Ready(catalog) = catalog() { ... }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use shipcards_core::{Catalog, DeckConfig, DeepLinkRequest, SiteConfig};

use crate::LaunchOptions;

/// Failure text shown in place of the deck
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load card data. Please try again later.";

/// Read-only catalog handle. Two handles are equal when they share the
/// same catalog, which is all props comparison needs.
#[derive(Clone, Debug)]
pub struct SharedCatalog(pub Arc<Catalog>);

impl PartialEq for SharedCatalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Loading state of the catalog
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(SharedCatalog),
    /// Load failed; pages show [`LOAD_ERROR_MESSAGE`] over an empty catalog
    Failed(SharedCatalog),
}

impl CatalogState {
    pub fn failed() -> Self {
        CatalogState::Failed(SharedCatalog(Arc::new(Catalog::empty())))
    }
}

/// Shared card queued from the command line, taken by the first page that
/// can open it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingLink(pub Option<DeepLinkRequest>);

/// Get the launch options parsed in `main`.
pub fn get_launch_options() -> LaunchOptions {
    crate::launch_options()
}

/// Hook to access the catalog loading state.
pub fn use_catalog() -> Signal<CatalogState> {
    use_context::<Signal<CatalogState>>()
}

/// Hook to access the published site settings (share link origin, name).
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the deck timings and shuffle size.
pub fn use_deck_config() -> DeckConfig {
    use_context::<DeckConfig>()
}

/// Hook to access the pending startup link.
pub fn use_pending_link() -> Signal<PendingLink> {
    use_context::<Signal<PendingLink>>()
}
