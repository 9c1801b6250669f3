//! Deep links: `?category=<id>&cardId=<id>` query strings that reopen a
//! specific card.
//!
//! An unknown category or card is not an error. Stale and mistyped links
//! fall back to the default view without telling the user.

use std::fmt;

use tracing::debug;
use url::{form_urlencoded, Url};

use crate::catalog::Catalog;
use crate::types::{CardId, CategoryId};

pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_CARD_ID: &str = "cardId";

/// Query parameters naming a card to open
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeepLinkRequest {
    pub category_id: Option<CategoryId>,
    pub card_id: Option<CardId>,
}

impl DeepLinkRequest {
    pub fn for_card(category_id: CategoryId, card_id: CardId) -> Self {
        Self {
            category_id: Some(category_id),
            card_id: Some(card_id),
        }
    }

    /// Parse a query string, with or without its leading `?`.
    ///
    /// Unrecognized parameters are ignored; blank values count as absent;
    /// the first occurrence of a repeated parameter wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut request = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                PARAM_CATEGORY if request.category_id.is_none() => {
                    request.category_id = Some(CategoryId::new(value));
                }
                PARAM_CARD_ID if request.card_id.is_none() => {
                    request.card_id = Some(CardId::new(value));
                }
                _ => {}
            }
        }
        request
    }

    /// Parse a full URL, a path with a query (`/cards?...`) or a bare query
    pub fn from_url(link: &str) -> Self {
        match Url::parse(link) {
            Ok(url) => Self::from_query(url.query().unwrap_or_default()),
            Err(_) => match link.split_once('?') {
                Some((_, query)) => Self::from_query(query),
                None => Self::from_query(link),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.card_id.is_none()
    }

    /// Resolve against the catalog.
    pub fn resolve(&self, catalog: &Catalog) -> DeepLinkResolution {
        let Some(category_id) = &self.category_id else {
            return DeepLinkResolution::Ignored;
        };

        let Some(category) = catalog.category(category_id) else {
            debug!("Deep link names unknown category {}, ignoring", category_id);
            return DeepLinkResolution::Ignored;
        };

        let index = self
            .card_id
            .as_ref()
            .and_then(|card_id| catalog.find_card(category_id, card_id))
            .map(|(index, _)| index);

        match index {
            Some(index) => DeepLinkResolution::Card {
                category: category.id.clone(),
                index,
            },
            None => {
                if let Some(card_id) = &self.card_id {
                    debug!(
                        "Deep link card {} not in category {}, opening first card",
                        card_id, category_id
                    );
                }
                DeepLinkResolution::Category {
                    category: category.id.clone(),
                }
            }
        }
    }
}

/// Serializes back to a query string (no leading `?`)
impl fmt::Display for DeepLinkRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category_id) = &self.category_id {
            serializer.append_pair(PARAM_CATEGORY, category_id.as_str());
        }
        if let Some(card_id) = &self.card_id {
            serializer.append_pair(PARAM_CARD_ID, card_id.as_str());
        }
        f.write_str(&serializer.finish())
    }
}

impl From<&str> for DeepLinkRequest {
    fn from(query: &str) -> Self {
        Self::from_query(query)
    }
}

/// Outcome of resolving a [`DeepLinkRequest`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeepLinkResolution {
    /// No category, or one the catalog does not have
    Ignored,
    /// Known category, card absent or unknown: open its first card
    Category { category: CategoryId },
    /// Known category and card
    Card { category: CategoryId, index: usize },
}

impl DeepLinkResolution {
    pub fn category(&self) -> Option<&CategoryId> {
        match self {
            DeepLinkResolution::Ignored => None,
            DeepLinkResolution::Category { category } | DeepLinkResolution::Card { category, .. } => {
                Some(category)
            }
        }
    }

    /// Index to open, when the link resolved to a category
    pub fn index(&self) -> Option<usize> {
        match self {
            DeepLinkResolution::Ignored => None,
            DeepLinkResolution::Category { .. } => Some(0),
            DeepLinkResolution::Card { index, .. } => Some(*index),
        }
    }
}

/// Tracks the last query a page applied so the same link is not re-applied
/// on every render, while a changed URL still is.
#[derive(Clone, Debug, Default)]
pub struct DeepLinkWatcher {
    last: Option<DeepLinkRequest>,
}

impl DeepLinkWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `request`; returns it when it differs from the previous one
    pub fn observe(&mut self, request: &DeepLinkRequest) -> Option<DeepLinkRequest> {
        if self.last.as_ref() == Some(request) {
            return None;
        }
        self.last = Some(request.clone());
        Some(request.clone())
    }
}
