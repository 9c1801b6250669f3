//! Color constants shared between Rust-drawn marks and the stylesheet.

/// Landing page accent, also `--mint` in the stylesheet
pub const MINT: &str = "#A5F3C9";
/// Header logo ink, also `--text-primary`
pub const INK: &str = "#111111";
