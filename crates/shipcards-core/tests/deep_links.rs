//! Deep links and share links against the published catalog
//!
//! A card shared from the deck must reopen on exactly that card, and links
//! the catalog cannot honor must leave the reader where they were.

use std::sync::Arc;

use proptest::prelude::*;
use shipcards_core::share::share_text;
use shipcards_core::{
    Catalog, CategoryId, DeckNavigator, DeepLinkRequest, DeepLinkResolution, ManualClock,
    ShareDestination, ShareLinkBuilder,
};

fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap())
}

fn navigator() -> (DeckNavigator, ManualClock) {
    let clock = ManualClock::new();
    let nav = DeckNavigator::with_clock(builtin(), Arc::new(clock.clone())).with_seed(11);
    (nav, clock)
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_mindset_three_opens_third_card() {
    let (mut nav, _) = navigator();
    let resolution = nav.apply_deep_link(&DeepLinkRequest::from_url(
        "https://shipyourselfcards.com/cards?category=mindset&cardId=mindset-3",
    ));

    assert_eq!(
        resolution,
        DeepLinkResolution::Card {
            category: CategoryId::new("mindset"),
            index: 2
        }
    );
    assert_eq!(nav.category_id(), Some(&CategoryId::new("mindset")));
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.current_card().unwrap().card.title, "Stay in the Arena");
}

#[test]
fn test_unknown_category_leaves_view_unchanged() {
    let (mut nav, clock) = navigator();
    nav.set_category(&CategoryId::new("interviewing"));
    nav.next();
    clock.advance(500);
    nav.tick();

    let resolution = nav.apply_deep_link(&DeepLinkRequest::from_query("?category=unknown"));
    assert_eq!(resolution, DeepLinkResolution::Ignored);
    assert_eq!(nav.category_id(), Some(&CategoryId::new("interviewing")));
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn test_known_category_unknown_card_opens_first_card() {
    let (mut nav, _) = navigator();
    nav.apply_deep_link(&DeepLinkRequest::from_query("category=networking&cardId=networking-42"));
    assert_eq!(nav.category_id(), Some(&CategoryId::new("networking")));
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn test_card_only_link_is_ignored() {
    let (mut nav, _) = navigator();
    let resolution = nav.apply_deep_link(&DeepLinkRequest::from_query("cardId=storytelling-4"));
    assert_eq!(resolution, DeepLinkResolution::Ignored);
    assert_eq!(nav.category_id(), Some(&CategoryId::new("mindset")));
}

// ============================================================================
// Share Text
// ============================================================================

#[test]
fn test_negotiation_share_text_is_curated() {
    assert_eq!(
        share_text(&CategoryId::new("negotiation"), "anything"),
        "Negotiating isn't just about salary — it's about designing your future. 📈 Smart strategies I'm picking up from Ship Yourself Cards."
    );
}

#[test]
fn test_unknown_category_share_text_mentions_title() {
    let text = share_text(&CategoryId::new("csv-only"), "Ship It Friday");
    assert!(text.contains("Ship It Friday"));
}

// ============================================================================
// Round Trip
// ============================================================================

fn card_strategy() -> impl Strategy<Value = (CategoryId, usize)> {
    let positions: Vec<(CategoryId, usize)> = builtin()
        .categories()
        .iter()
        .flat_map(|c| (0..c.cards.len()).map(move |i| (c.id.clone(), i)))
        .collect();
    prop::sample::select(positions)
}

proptest! {
    /// Every card's canonical URL resolves back to its category and index
    #[test]
    fn canonical_url_round_trips((category_id, index) in card_strategy()) {
        let catalog = builtin();
        let category = catalog.category(&category_id).unwrap();
        let card = &category.cards[index];

        let payload = ShareLinkBuilder::new("https://shipyourselfcards.com")
            .build(card, &category.id, &category.color);
        prop_assert_eq!(payload.links.len(), ShareDestination::ALL.len());

        let (mut nav, _) = navigator();
        nav.apply_deep_link(&DeepLinkRequest::from_url(&payload.canonical_url));
        prop_assert_eq!(nav.category_id(), Some(&category_id));
        prop_assert_eq!(nav.current_index(), index);
        prop_assert_eq!(nav.current_card().unwrap().id(), &card.id);
    }

    /// Arbitrary ids survive query serialization
    #[test]
    fn query_serialization_round_trips(
        category in "[a-zA-Z0-9 +&=%-]{1,20}",
        card in "[a-zA-Z0-9 +&=%-]{1,20}",
    ) {
        prop_assume!(!category.trim().is_empty() && !card.trim().is_empty());
        prop_assume!(category.trim() == category && card.trim() == card);

        let request = DeepLinkRequest::for_card(CategoryId::new(category), card.as_str().into());
        let parsed = DeepLinkRequest::from_query(&request.to_string());
        prop_assert_eq!(parsed, request);
    }
}
