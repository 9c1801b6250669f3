//! Card Deck Component
//!
//! Narrow layouts show the current card with a stacked-card backdrop, arrows
//! below and drag-to-swipe. Wide layouts show a carousel strip with arrows
//! either side. Slides and fades run on CSS transitions whose durations match
//! the navigator's timers; [`settle_later`] calls `tick` once they elapse.

use std::time::Duration;

use dioxus::prelude::*;
use shipcards_core::{
    DeckNavigator, Direction, DragGesture, ShareLinkBuilder, SwipeOutcome, Viewport,
};
use shipcards_ui::{ArrowSide, DeckArrow, DeckArrows};

use crate::components::CardView;
use crate::context::use_site_config;

pub const CARD_WIDTH_PX: f64 = 366.0;
pub const CARD_GAP_PX: f64 = 16.0;
const CARD_TOTAL_WIDTH_PX: f64 = CARD_WIDTH_PX + CARD_GAP_PX;

/// Settle the in-flight slide or fade once its deadline has passed
pub fn settle_later(mut deck: Signal<DeckNavigator>) {
    let Some(ms) = deck.peek().remaining_ms() else {
        return;
    };
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        if deck.write().tick() {
            tracing::debug!("Deck settled at {}", deck.peek().current_index());
        }
    });
}

/// Horizontal offset of the card at `index` in the wide strip
fn strip_offset(index: usize, anchor: usize) -> f64 {
    (index as f64 - anchor as f64) * CARD_TOTAL_WIDTH_PX
}

/// Index the strip is centered on: the slide target while animating
fn strip_anchor(current: usize, direction: Direction, animating: bool) -> usize {
    match (animating, direction) {
        (true, Direction::Left) => current + 1,
        (true, Direction::Right) => current.saturating_sub(1),
        _ => current,
    }
}

/// Whether a click on a card is a tap. The click that trails a narrow
/// swipe or snap-back is not; wide layouts have no drag.
fn accepts_tap(viewport: Viewport, drag: &DragGesture) -> bool {
    !(viewport.is_narrow() && drag.was_drag())
}

#[component]
pub fn CardDeck(deck: Signal<DeckNavigator>) -> Element {
    let site = use_site_config();
    let mut drag = use_signal(DragGesture::new);

    let on_next = move |_| {
        if deck.write().next() {
            settle_later(deck);
        }
    };
    let on_prev = move |_| {
        if deck.write().prev() {
            settle_later(deck);
        }
    };
    let on_flip = move |index: usize| {
        if !accepts_tap(deck.peek().viewport(), &drag.peek()) {
            tracing::debug!("Ignoring click after drag on card {}", index);
            return;
        }
        deck.write().flip(index);
    };

    let nav = deck.read();
    let state = nav.state();
    let builder = ShareLinkBuilder::new(site.base_url.clone());
    let catalog = nav.catalog().clone();
    let window = nav.visible_window();
    let can_prev = nav.can_go_prev();
    let can_next = nav.can_go_next();
    let viewport = nav.viewport();
    let fading = state.is_animating && state.direction == Direction::None;

    // Everything the cards need, detached from the read guard
    let cards: Vec<_> = window
        .iter()
        .map(|(index, card)| {
            let share = builder.build(&card.card, &card.origin_category, &card.display_color);
            let link = catalog.resource_link(card.id()).cloned();
            let key = format!("{}-{}", index, card.id());
            (key, index, card.clone(), state.flip.face(index), link, share)
        })
        .collect();

    let slide_class = match (state.is_animating, state.direction) {
        (true, Direction::Left) => "slide-out-left",
        (true, Direction::Right) => "slide-out-right",
        _ => "slide-in",
    };
    let anchor = strip_anchor(state.current_index, state.direction, state.is_animating);
    let current = state.current_index;
    let empty = cards.is_empty();
    drop(nav);

    if empty {
        return rsx! {
            div { class: "deck-status", "No cards to show." }
        };
    }

    let stage_class = if fading { "deck-stage fading" } else { "deck-stage" };

    match viewport {
        Viewport::Narrow => {
            let offset = drag.read().offset();
            let drag_style = if drag.read().is_active() {
                format!("transform: translateX({}px); transition: none;", offset)
            } else {
                String::new()
            };
            let backdrop = cards[0].2.card.background_color.clone();

            rsx! {
                div { class: "{stage_class} narrow",
                    div {
                        class: "deck-single",
                        onpointerdown: move |evt| drag.write().begin(evt.client_coordinates().x),
                        onpointermove: move |evt| {
                            if drag.peek().is_active() {
                                drag.write().update(evt.client_coordinates().x);
                            }
                        },
                        onpointerup: move |_| {
                            let displacement = drag.write().end();
                            let outcome = deck.write().swipe(displacement);
                            match outcome {
                                SwipeOutcome::Next | SwipeOutcome::Prev => settle_later(deck),
                                SwipeOutcome::SnapBack | SwipeOutcome::Ignored => {}
                            }
                        },
                        onpointerleave: move |_| {
                            if drag.peek().is_active() {
                                drag.write().end();
                            }
                        },
                        div { class: "card-stack card-stack-2", style: "background-color: {backdrop};" }
                        div { class: "card-stack card-stack-1", style: "background-color: {backdrop};" }
                        for (key, index, card, face, link, share) in cards {
                            div {
                                key: "{key}",
                                class: "deck-slot {slide_class}",
                                style: "{drag_style}",
                                CardView { card, index, face, resource_link: link, share, on_flip }
                            }
                        }
                    }
                    DeckArrows { can_prev, can_next, on_prev, on_next }
                }
            }
        }
        Viewport::Wide => {
            let strip_style = format!("width: {}px;", CARD_TOTAL_WIDTH_PX * 3.0);
            let slots: Vec<_> = cards
                .into_iter()
                .map(|(key, index, card, face, link, share)| {
                    let style = format!(
                        "width: {}px; transform: translateX({}px);",
                        CARD_WIDTH_PX,
                        strip_offset(index, anchor)
                    );
                    let class = if index == current { "deck-slot current" } else { "deck-slot" };
                    (key, class, style, index, card, face, link, share)
                })
                .collect();

            rsx! {
                div { class: "{stage_class} wide",
                    DeckArrow { side: ArrowSide::Left, enabled: can_prev, onclick: on_prev, class: "arrow-outside-left".to_string() }
                    div { class: "deck-strip", style: "{strip_style}",
                        for (key, class, style, index, card, face, link, share) in slots {
                            div { key: "{key}", class: "{class}", style: "{style}",
                                CardView { card, index, face, resource_link: link, share, on_flip }
                            }
                        }
                    }
                    DeckArrow { side: ArrowSide::Right, enabled: can_next, onclick: on_next, class: "arrow-outside-right".to_string() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_anchor_follows_slide_target() {
        assert_eq!(strip_anchor(2, Direction::Left, true), 3);
        assert_eq!(strip_anchor(2, Direction::Right, true), 1);
        assert_eq!(strip_anchor(0, Direction::Right, true), 0);
        assert_eq!(strip_anchor(2, Direction::Left, false), 2);
        assert_eq!(strip_anchor(2, Direction::None, true), 2);
    }

    #[test]
    fn click_after_swipe_does_not_flip() {
        let mut drag = DragGesture::new();
        drag.begin(300.0);
        drag.update(180.0);
        drag.end();
        assert!(!accepts_tap(Viewport::Narrow, &drag));
        // Stale drag state never blocks the wide layout
        assert!(accepts_tap(Viewport::Wide, &drag));

        drag.begin(120.0);
        drag.end();
        assert!(accepts_tap(Viewport::Narrow, &drag));
    }

    #[test]
    fn strip_offsets_are_card_widths() {
        assert_eq!(strip_offset(3, 3), 0.0);
        assert_eq!(strip_offset(4, 3), CARD_TOTAL_WIDTH_PX);
        assert_eq!(strip_offset(2, 3), -CARD_TOTAL_WIDTH_PX);
    }
}
