//! Content catalog: categories, their cards and per-card reading links.
//!
//! A [`Catalog`] is built once at startup, either from the compiled-in table
//! or from CSV, and is read-only afterwards. Components share it through an
//! `Arc` instead of reaching for module-level statics.

pub mod csv;
mod source;

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CatalogResult;
use crate::types::{Card, CardId, Category, CategoryId, DisplayCard, ResourceLink};

pub use source::{fetch_catalog, CatalogSource};

/// The published deck, compiled into the binary
const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

#[derive(Deserialize)]
struct CatalogTable {
    categories: Vec<Category>,
    #[serde(default)]
    resource_links: Vec<ResourceLinkEntry>,
}

#[derive(Deserialize)]
struct ResourceLinkEntry {
    card_id: CardId,
    #[serde(flatten)]
    link: ResourceLink,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    /// Display cards per category, parallel to `categories`
    decks: Vec<Vec<DisplayCard>>,
    resource_links: HashMap<CardId, ResourceLink>,
}

impl Catalog {
    /// Build a catalog, dropping links that point at cards it does not hold
    pub fn new(
        categories: Vec<Category>,
        links: impl IntoIterator<Item = (CardId, ResourceLink)>,
    ) -> Self {
        let decks = categories
            .iter()
            .map(|category| {
                category
                    .cards
                    .iter()
                    .map(|card| DisplayCard::from_category(card, category))
                    .collect()
            })
            .collect();

        let mut catalog = Self {
            categories,
            decks,
            resource_links: HashMap::new(),
        };

        for (card_id, link) in links {
            if catalog.contains_card(&card_id) {
                catalog.resource_links.insert(card_id, link);
            } else {
                warn!("Dropping resource link for unknown card {}", card_id);
            }
        }

        debug!(
            "Catalog ready: {} categories, {} cards, {} resource links",
            catalog.categories.len(),
            catalog.card_count(),
            catalog.resource_links.len()
        );
        catalog
    }

    /// Catalog with no categories, shown when loading failed
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in deck
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let table: CatalogTable = serde_json::from_str(json)?;
        let links = table
            .resource_links
            .into_iter()
            .map(|entry| (entry.card_id, entry.link));
        Ok(Self::new(table.categories, links))
    }

    pub fn from_csv(text: &str) -> CatalogResult<Self> {
        let rows = csv::parse_rows(text)?;
        Ok(Self::new(
            csv::rows_to_categories(&rows),
            std::iter::empty::<(CardId, ResourceLink)>(),
        ))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.categories.iter().map(|c| c.cards.len()).sum()
    }

    /// First category, selected when no deep link says otherwise
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn category_index(&self, id: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| &c.id == id)
    }

    /// Display cards of a category; empty for unknown ids
    pub fn deck(&self, id: &CategoryId) -> &[DisplayCard] {
        self.category_index(id)
            .map(|index| self.decks[index].as_slice())
            .unwrap_or(&[])
    }

    /// Every card of every category, each tagged with its origin category
    pub fn card_pool(&self) -> impl Iterator<Item = &DisplayCard> {
        self.decks.iter().flatten()
    }

    /// Position and card of `card_id` inside `category_id`
    pub fn find_card(&self, category_id: &CategoryId, card_id: &CardId) -> Option<(usize, &Card)> {
        let category = self.category(category_id)?;
        let index = category.position_of(card_id)?;
        Some((index, &category.cards[index]))
    }

    pub fn resource_link(&self, card_id: &CardId) -> Option<&ResourceLink> {
        self.resource_links.get(card_id)
    }

    fn contains_card(&self, card_id: &CardId) -> bool {
        self.categories
            .iter()
            .any(|category| category.position_of(card_id).is_some())
    }
}
