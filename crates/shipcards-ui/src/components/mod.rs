//! Reusable UI components
//!
//! Class names match the global stylesheet of the desktop app.

mod button;
mod category_selector;
mod deck_arrows;

pub use button::*;
pub use category_selector::*;
pub use deck_arrows::*;
