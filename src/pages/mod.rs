//! Page components for Ship Yourself Cards.

mod cards;
mod landing;

pub use cards::Cards;
pub use landing::Landing;
