//! Ship Yourself Cards Core Library
//!
//! Card catalog, deck navigation and link building for the Ship Yourself
//! career flashcards.
//!
//! ## Overview
//!
//! The deck is a set of categories, each holding an ordered list of cards
//! with a front (title, subtitle) and a back (bullet points, quote). Readers
//! page through one category at a time or draw a shuffled sample from all of
//! them, flip cards over, and share a deep link that reopens the exact card.
//!
//! Nothing here depends on a UI toolkit: the desktop app drives a
//! [`DeckNavigator`] and renders whatever state it reports.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use shipcards_core::{Catalog, DeckNavigator, DeepLinkRequest};
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut deck = DeckNavigator::new(catalog);
//!
//! deck.apply_deep_link(&DeepLinkRequest::from_query("category=mindset&cardId=mindset-3"));
//! assert_eq!(deck.current_index(), 2);
//!
//! deck.next();
//! // ... 500 ms later
//! deck.tick();
//! ```

pub mod catalog;
pub mod clock;
pub mod config;
pub mod deeplink;
pub mod error;
pub mod flip;
pub mod navigation;
pub mod preview;
pub mod share;
pub mod types;

// Re-exports
pub use catalog::{fetch_catalog, Catalog, CatalogSource};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DeckConfig, SiteConfig};
pub use deeplink::{DeepLinkRequest, DeepLinkResolution, DeepLinkWatcher};
pub use error::{CatalogError, CatalogResult};
pub use flip::{CardFace, FlipSelection, FlipTransition, FLIP_TRANSITION};
pub use navigation::{
    DeckNavigator, Direction, DragGesture, NavigationState, RenderWindow, SelectorEvent,
    SwipeOutcome, Viewport,
};
pub use preview::{MetaTags, PreviewParams};
pub use share::{CopyConfirmation, ShareDestination, ShareLink, ShareLinkBuilder, SharePayload};
pub use types::*;
