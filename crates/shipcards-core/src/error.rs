//! Error types for Ship Yourself Cards

use thiserror::Error;

/// Errors raised while loading the content catalog or rendering previews
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Request to the catalog source failed before a response arrived
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Catalog source answered with a non-success status
    #[error("Failed to fetch CSV: {0}")]
    HttpStatus(u16),

    /// Reading a local catalog file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The compiled-in catalog table could not be decoded
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV text is malformed or not valid UTF-8
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV header row lacks a column every card needs
    #[error("CSV is missing required column: {0}")]
    MissingColumn(String),

    /// The CSV text had no header row at all
    #[error("CSV contains no rows")]
    EmptyCsv,

    /// Encoding the social preview raster failed
    #[error("Image error: {0}")]
    Image(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Fetch(err.to_string())
    }
}

impl From<image::ImageError> for CatalogError {
    fn from(err: image::ImageError) -> Self {
        CatalogError::Image(err.to_string())
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
