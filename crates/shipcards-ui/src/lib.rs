//! Ship Yourself Cards UI Components
//!
//! Dioxus building blocks shared by the deck and landing pages. Components
//! here hold no state of their own beyond what is passed in as props; the
//! page that renders them owns the navigator and the catalog.
//!
//! ## Look
//!
//! - **White cards on `#F8F8F8`**, thin grey borders, 16px radius
//! - **Category accents** come from the catalog and are applied inline
//! - **Selected state** is a grey fill rather than a color change, so every
//!   category reads the same in the selector

pub mod components;

pub use components::*;
