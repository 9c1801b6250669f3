#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{ensure, Context as _};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use shipcards_core::config::{DEFAULT_SITE_URL, SHUFFLE_SIZE};
use shipcards_core::{CatalogSource, DeckConfig, DeepLinkRequest, SiteConfig};
use tracing_subscriber::EnvFilter;

/// Launch options, set once from the command line
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// Everything the app needs from the command line
#[derive(Clone, Debug, Default)]
pub struct LaunchOptions {
    pub source: CatalogSource,
    pub site: SiteConfig,
    pub deck: DeckConfig,
    /// Shared card to open instead of the landing page
    pub initial_link: Option<DeepLinkRequest>,
}

/// Get the launch options (set from command line or default)
pub fn launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// Ship Yourself Cards - career flashcards for designers
#[derive(Parser, Debug)]
#[command(name = "shipcards-desktop")]
#[command(about = "Ship Yourself Cards - Field notes for designers redesigning their careers")]
struct Args {
    /// Load cards from a CSV export instead of the built-in deck
    #[arg(long, conflicts_with = "catalog_url")]
    csv: Option<PathBuf>,

    /// Fetch the CSV export from a URL
    #[arg(long)]
    catalog_url: Option<String>,

    /// Open a shared card link (full URL or `category=..&cardId=..`)
    #[arg(short, long)]
    link: Option<String>,

    /// Origin used for share links and preview images
    #[arg(long, default_value = DEFAULT_SITE_URL)]
    site_url: String,

    /// Number of cards drawn in shuffle mode
    #[arg(long, default_value_t = SHUFFLE_SIZE)]
    shuffle_size: usize,
}

impl Args {
    fn into_launch_options(self) -> anyhow::Result<LaunchOptions> {
        let source = match (self.csv, self.catalog_url) {
            (Some(path), _) => {
                ensure!(path.is_file(), "CSV file not found: {}", path.display());
                CatalogSource::CsvFile(path)
            }
            (None, Some(url)) => CatalogSource::Remote(url),
            (None, None) => CatalogSource::Builtin,
        };

        ensure!(
            self.site_url.starts_with("http://") || self.site_url.starts_with("https://"),
            "--site-url must be an http(s) origin, got {}",
            self.site_url
        );

        ensure!(self.shuffle_size > 0, "--shuffle-size must be at least 1");
        let deck = DeckConfig {
            shuffle_size: self.shuffle_size,
            ..DeckConfig::default()
        };

        let initial_link = self
            .link
            .map(|link| DeepLinkRequest::from_url(&link))
            .filter(|request| !request.is_empty());

        Ok(LaunchOptions {
            source,
            site: SiteConfig::with_base_url(self.site_url),
            deck,
            initial_link,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = Args::parse()
        .into_launch_options()
        .context("invalid launch arguments")?;

    tracing::info!(
        "Starting with catalog {:?}, site {}",
        options.source,
        options.site.base_url
    );
    if let Some(link) = &options.initial_link {
        tracing::info!("Opening shared card {}", link);
    }

    let _ = LAUNCH_OPTIONS.set(options);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(shipcards_core::config::SITE_NAME)
            .with_inner_size(LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
