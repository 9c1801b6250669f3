//! Tunables for the deck and the published site.

/// Timer durations must be at least as long as the CSS transitions they
/// stand in for, or the lock releases while a slide is still on screen.
pub const SLIDE_DURATION_MS: u64 = 500;
pub const FADE_DURATION_MS: u64 = 300;
pub const FLIP_DURATION_MS: u64 = 600;
pub const COPY_CONFIRMATION_MS: u64 = 2_000;

pub const SHUFFLE_SIZE: usize = 8;
pub const SWIPE_THRESHOLD_PX: f64 = 80.0;
/// Pointer travel beyond which a press is a drag rather than a tap
pub const DRAG_SLOP_PX: f64 = 6.0;
/// Widest viewport still treated as narrow (single card) layout
pub const NARROW_MAX_WIDTH_PX: f64 = 768.0;
pub const WIDE_WINDOW_SIZE: usize = 5;
/// Cards visible side by side in the wide carousel strip
pub const WIDE_VISIBLE_CARDS: usize = 3;

pub const DEFAULT_SITE_URL: &str = "https://shipyourselfcards.com";
pub const SITE_NAME: &str = "Ship Yourself Cards";
pub const SITE_TAGLINE: &str = "Field Notes for Designers Redesigning Their Careers";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckConfig {
    pub slide_ms: u64,
    pub fade_ms: u64,
    pub shuffle_size: usize,
    pub swipe_threshold_px: f64,
    pub wide_window: usize,
    pub wide_visible: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            slide_ms: SLIDE_DURATION_MS,
            fade_ms: FADE_DURATION_MS,
            shuffle_size: SHUFFLE_SIZE,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            wide_window: WIDE_WINDOW_SIZE,
            wide_visible: WIDE_VISIBLE_CARDS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin that canonical card links and preview images hang off
    pub base_url: String,
    pub site_name: String,
    pub tagline: String,
}

impl SiteConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_URL.to_string(),
            site_name: SITE_NAME.to_string(),
            tagline: SITE_TAGLINE.to_string(),
        }
    }
}
