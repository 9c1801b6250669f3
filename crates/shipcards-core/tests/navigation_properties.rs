//! Property-based tests for deck navigation
//!
//! Uses proptest to drive a navigator through random operation sequences
//! and check the index, lock, flip and shuffle invariants.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use shipcards_core::{
    Catalog, CategoryId, DeckNavigator, ManualClock, SwipeOutcome, Viewport,
};

fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap())
}

fn navigator(seed: u64) -> (DeckNavigator, ManualClock) {
    let clock = ManualClock::new();
    let nav = DeckNavigator::with_clock(builtin(), Arc::new(clock.clone())).with_seed(seed);
    (nav, clock)
}

fn settle(nav: &mut DeckNavigator, clock: &ManualClock) {
    if let Some(ms) = nav.remaining_ms() {
        clock.advance(ms);
    }
    nav.tick();
}

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = CategoryId> {
    let ids: Vec<CategoryId> = builtin().categories().iter().map(|c| c.id.clone()).collect();
    prop::sample::select(ids)
}

/// Operations a reader can perform on the deck
#[derive(Debug, Clone)]
enum DeckOp {
    Next,
    Prev,
    Flip(usize),
    Select(CategoryId),
    ToggleShuffle,
    Swipe(f64),
    Viewport(bool),
    Wait(u64),
}

fn deck_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<DeckOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(DeckOp::Next),
            3 => Just(DeckOp::Prev),
            2 => (0..12usize).prop_map(DeckOp::Flip),
            1 => category_strategy().prop_map(DeckOp::Select),
            1 => Just(DeckOp::ToggleShuffle),
            1 => (-200.0..200.0f64).prop_map(DeckOp::Swipe),
            1 => any::<bool>().prop_map(DeckOp::Viewport),
            3 => (0..700u64).prop_map(DeckOp::Wait),
        ],
        0..max_ops,
    )
}

fn apply(nav: &mut DeckNavigator, clock: &ManualClock, op: &DeckOp) {
    match op {
        DeckOp::Next => {
            nav.next();
        }
        DeckOp::Prev => {
            nav.prev();
        }
        DeckOp::Flip(i) => {
            nav.flip(*i);
        }
        DeckOp::Select(id) => {
            nav.set_category(id);
        }
        DeckOp::ToggleShuffle => {
            nav.toggle_shuffle();
        }
        DeckOp::Swipe(dx) => {
            nav.swipe(*dx);
        }
        DeckOp::Viewport(wide) => {
            nav.set_viewport(if *wide { Viewport::Wide } else { Viewport::Narrow });
        }
        DeckOp::Wait(ms) => {
            clock.advance(*ms);
            nav.tick();
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Selecting a category and stepping forward i times lands on card i
    #[test]
    fn next_reaches_every_index(category in category_strategy(), steps in 0..8usize) {
        let (mut nav, clock) = navigator(1);
        prop_assert!(nav.set_category(&category));

        for _ in 0..steps {
            prop_assert!(nav.next());
            settle(&mut nav, &clock);
        }

        let catalog = builtin();
        let expected = &catalog.category(&category).unwrap().cards[steps];
        prop_assert_eq!(nav.current_index(), steps);
        prop_assert_eq!(&nav.active_cards()[steps].card, expected);
        prop_assert_eq!(&nav.current_card().unwrap().card, expected);
    }

    /// Input while a slide is in flight changes nothing
    #[test]
    fn animation_lock_swallows_input(presses in prop::collection::vec(any::<bool>(), 1..10)) {
        let (mut nav, clock) = navigator(2);
        nav.next();
        settle(&mut nav, &clock);
        prop_assert!(nav.next());

        let before = nav.state().clone();
        for forward in presses {
            let accepted = if forward { nav.next() } else { nav.prev() };
            prop_assert!(!accepted);
        }
        prop_assert_eq!(nav.state(), &before);
    }

    /// Any operation sequence keeps the index in range and at most one card flipped
    #[test]
    fn invariants_hold_under_random_ops(ops in deck_ops_strategy(60), seed in any::<u64>()) {
        let (mut nav, clock) = navigator(seed);

        for op in &ops {
            apply(&mut nav, &clock, op);

            let len = nav.active_cards().len();
            prop_assert!(nav.current_index() < len.max(1));
            if let Some(flipped) = nav.state().flipped_index() {
                prop_assert!(flipped < len);
            }
            prop_assert!(nav.visible_window().len() <= 5);
            prop_assert_eq!(nav.is_animating(), nav.remaining_ms().is_some());
        }
    }

    /// Flipping k, k again, then j
    #[test]
    fn flip_toggles_and_moves(k in 0..8usize, j in 0..8usize) {
        prop_assume!(k != j);
        let (mut nav, _) = navigator(3);

        nav.flip(k);
        prop_assert_eq!(nav.state().flipped_index(), Some(k));
        nav.flip(k);
        prop_assert_eq!(nav.state().flipped_index(), None);
        nav.flip(k);
        nav.flip(j);
        prop_assert_eq!(nav.state().flipped_index(), Some(j));
    }

    /// A shuffle draws distinct cards, each in its origin category's colors
    #[test]
    fn shuffle_draws_distinct_annotated_cards(seed in any::<u64>()) {
        let catalog = builtin();
        let (mut nav, _) = navigator(seed);
        nav.set_shuffle_mode(true);

        let cards = nav.active_cards();
        prop_assert_eq!(cards.len(), 8);

        let ids: HashSet<_> = cards.iter().map(|c| c.id().clone()).collect();
        prop_assert_eq!(ids.len(), 8);

        for card in cards {
            let origin = catalog.category(&card.origin_category).unwrap();
            prop_assert_eq!(&card.display_color, &origin.color);
            prop_assert_eq!(&card.display_category_name, &origin.name);
            prop_assert!(origin.position_of(card.id()).is_some());
        }
    }

    /// Leaving shuffle mode restores the selected category untouched
    #[test]
    fn unshuffle_restores_category(category in category_strategy(), seed in any::<u64>()) {
        let (mut nav, clock) = navigator(seed);
        nav.set_category(&category);
        let before = nav.active_cards().to_vec();

        nav.set_shuffle_mode(true);
        settle(&mut nav, &clock);
        nav.set_shuffle_mode(false);

        prop_assert_eq!(nav.active_cards(), before.as_slice());
        prop_assert_eq!(nav.category_id(), Some(&category));
        prop_assert_eq!(nav.current_index(), 0);
    }

    /// Short swipes snap back; wide viewports ignore swipes entirely
    #[test]
    fn short_swipes_snap_back(dx in -79.9..79.9f64) {
        let (mut nav, clock) = navigator(4);
        nav.next();
        settle(&mut nav, &clock);

        prop_assert_eq!(nav.swipe(dx), SwipeOutcome::SnapBack);
        prop_assert!(!nav.is_animating());

        nav.set_viewport(Viewport::Wide);
        prop_assert_eq!(nav.swipe(dx * 10.0), SwipeOutcome::Ignored);
        prop_assert_eq!(nav.current_index(), 1);
    }
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn next_is_noop_at_last_card_and_prev_at_first() {
    let (mut nav, clock) = navigator(5);
    assert!(!nav.prev());
    assert_eq!(nav.current_index(), 0);

    while nav.next() {
        settle(&mut nav, &clock);
    }
    assert_eq!(nav.current_index(), 7);
    assert!(!nav.next());
    assert!(!nav.is_animating());
}

#[test]
fn wide_viewport_stops_three_from_the_end() {
    let (mut nav, clock) = navigator(6);
    nav.set_viewport(Viewport::Wide);

    let mut steps = 0;
    while nav.next() {
        settle(&mut nav, &clock);
        steps += 1;
        assert!(nav.visible_window().len() <= 5);
    }
    assert_eq!(steps, 5);
    assert!(nav.current_index() + 3 >= nav.active_cards().len());
    assert!(!nav.can_go_next());

    // Narrowing the viewport lets the reader continue
    nav.set_viewport(Viewport::Narrow);
    assert!(nav.can_go_next());
}
