//! Colors and global styles for Ship Yourself Cards.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
