//! Where the catalog comes from at startup.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::Catalog;
use crate::error::{CatalogError, CatalogResult};

/// Origin of the card table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// Table compiled into the binary
    #[default]
    Builtin,
    /// CSV file on disk
    CsvFile(PathBuf),
    /// CSV served over HTTP(S)
    Remote(String),
}

impl CatalogSource {
    /// Load the catalog once. There is no retry; callers show an error and
    /// fall back to [`Catalog::empty`].
    pub async fn load(&self) -> CatalogResult<Catalog> {
        let result = match self {
            CatalogSource::Builtin => Catalog::builtin(),
            CatalogSource::CsvFile(path) => Catalog::load_csv_file(path).await,
            CatalogSource::Remote(url) => fetch_catalog(url).await,
        };

        match &result {
            Ok(catalog) => info!(
                "Loaded {} cards in {} categories from {:?}",
                catalog.card_count(),
                catalog.categories().len(),
                self
            ),
            Err(e) => error!("Error loading card data from {:?}: {}", self, e),
        }
        result
    }
}

impl Catalog {
    pub async fn load_csv_file(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        Catalog::from_csv(&text)
    }
}

/// Fetch a CSV catalog over HTTP
pub async fn fetch_catalog(url: &str) -> CatalogResult<Catalog> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus(status.as_u16()));
    }
    let text = response.text().await?;
    Catalog::from_csv(&text)
}
