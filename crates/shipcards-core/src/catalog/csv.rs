//! CSV catalog format.
//!
//! One row per card with the columns
//! `Category, Card Title, Card Subtitle, Background Color, Tactical Moves,
//! Words of Wisdom, Quote Attribution`. Rows are grouped by `Category` in
//! order of first appearance.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Card, CardId, Category, CategoryId};

pub const COL_CATEGORY: &str = "Category";
pub const COL_TITLE: &str = "Card Title";
pub const COL_SUBTITLE: &str = "Card Subtitle";
pub const COL_BACKGROUND: &str = "Background Color";
pub const COL_TACTICAL_MOVES: &str = "Tactical Moves";
pub const COL_WISDOM: &str = "Words of Wisdom";
pub const COL_ATTRIBUTION: &str = "Quote Attribution";

const REQUIRED_COLUMNS: [&str; 2] = [COL_CATEGORY, COL_TITLE];

pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const FALLBACK_CATEGORY_COLOR: &str = "#454545";

/// Accent colors of the published categories, keyed by display name
const CATEGORY_PALETTE: [(&str, &str); 7] = [
    ("Mindset + Resilience", "#EF3F35"),
    ("Networking Moves", "#2D26EB"),
    ("Being a Super IC", "#00619D"),
    ("Interview Gameplans", "#8A3E16"),
    ("Storytelling + Brand", "#B63839"),
    ("Offer + Negotiation", "#3B7865"),
    ("Power-Ups", "#6E34C8"),
];

/// Accent color for a category name, if it is one of the published ones
pub fn palette_color(category_name: &str) -> Option<&'static str> {
    CATEGORY_PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category_name.trim()))
        .map(|(_, color)| *color)
}

/// One data row, addressed by header name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    fields: HashMap<String, String>,
}

impl CsvRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Field value with blank treated as absent
    fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Parse CSV text into rows keyed by the header record.
///
/// Quoted fields may contain commas, `""` escapes and line breaks. Blank
/// records are skipped and every field is trimmed. Rows shorter than the
/// header simply lack the trailing columns.
pub fn parse_rows(text: &str) -> CatalogResult<Vec<CsvRow>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(CatalogError::EmptyCsv);
    }

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(CatalogError::MissingColumn(required.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(CsvRow { fields });
    }

    debug!("Parsed {} CSV rows with {} columns", rows.len(), headers.len());
    Ok(rows)
}

/// Lowercase and join whitespace-separated words with `-`
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Split the `Tactical Moves` field into bullet points on `-`
pub fn split_tactical_moves(field: &str) -> Vec<String> {
    field
        .split('-')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group rows into categories, synthesizing card ids as `<slug>-<n>`.
pub fn rows_to_categories(rows: &[CsvRow]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for (line, row) in rows.iter().enumerate() {
        let Some(name) = row.non_empty(COL_CATEGORY) else {
            warn!("Skipping CSV row {} without a category", line + 2);
            continue;
        };

        let index = *by_name.entry(name.to_string()).or_insert_with(|| {
            let color = palette_color(name).unwrap_or(FALLBACK_CATEGORY_COLOR);
            categories.push(Category {
                id: CategoryId::new(slug(name)),
                name: name.to_string(),
                color: color.to_string(),
                cards: Vec::new(),
            });
            categories.len() - 1
        });

        let category = &mut categories[index];
        let card = Card {
            id: CardId::synthesize(category.id.as_str(), category.cards.len() + 1),
            category: name.to_string(),
            title: row.get(COL_TITLE).unwrap_or_default().trim().to_string(),
            subtitle: row.get(COL_SUBTITLE).unwrap_or_default().trim().to_string(),
            background_color: row
                .non_empty(COL_BACKGROUND)
                .unwrap_or(DEFAULT_BACKGROUND)
                .to_string(),
            bullet_points: row
                .get(COL_TACTICAL_MOVES)
                .map(split_tactical_moves)
                .unwrap_or_default(),
            quote: row.non_empty(COL_WISDOM).map(str::to_string),
            quote_author: row.non_empty(COL_ATTRIBUTION).map(str::to_string),
        };
        category.cards.push(card);
    }

    categories
}
