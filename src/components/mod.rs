//! UI Components for Ship Yourself Cards.
//!
//! Page-level pieces that know about the deck; the stateless building
//! blocks live in `shipcards-ui`.

mod card_deck;
mod card_view;
mod head_tags;
mod nav_header;
mod share_menu;

pub use card_deck::{settle_later, CardDeck};
pub use card_view::CardView;
pub use head_tags::HeadTags;
pub use nav_header::{Logo, NavHeader};
pub use share_menu::ShareButton;
