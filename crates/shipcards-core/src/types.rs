//! Core types for Ship Yourself Cards

use serde::{Deserialize, Serialize};

/// Identifier of a category (e.g. `mindset`)
///
/// Used as the `category` query parameter of deep links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a card, formatted `<category>-<n>` with `n` starting at 1
///
/// Unique within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the id of the `position`-th card (1-based) of a category slug
    pub fn synthesize(category_slug: &str, position: usize) -> Self {
        Self(format!("{}-{}", category_slug, position))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single flashcard
///
/// The front shows `title` and `subtitle`; the back lists the bullet points
/// and the optional quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Display name of the category this card was authored under
    pub category: String,
    pub title: String,
    pub subtitle: String,
    pub background_color: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<String>,
}

/// An ordered group of cards sharing a name and accent color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Hex accent color, e.g. `#EF3F35`
    pub color: String,
    pub cards: Vec<Card>,
}

impl Category {
    /// Zero-based position of a card within this category
    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }
}

/// Further reading attached to a card ("Go Deeper")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

/// A card ready to render, with the color and category name it is shown in
///
/// In category mode these come from the selected category; in shuffle mode
/// they come from the category the card was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub card: Card,
    pub display_color: String,
    pub display_category_name: String,
    pub origin_category: CategoryId,
}

impl DisplayCard {
    pub fn from_category(card: &Card, category: &Category) -> Self {
        Self {
            card: card.clone(),
            display_color: category.color.clone(),
            display_category_name: category.name.clone(),
            origin_category: category.id.clone(),
        }
    }

    pub fn id(&self) -> &CardId {
        &self.card.id
    }
}
