//! Cards page - the deck, the category selector and deep-link handling.
//!
//! The page owns the [`DeckNavigator`]. Components below it render the
//! navigator's state and report clicks back; nothing else mutates it.

use dioxus::prelude::*;
use shipcards_core::{
    DeckNavigator, DeepLinkRequest, DeepLinkResolution, DeepLinkWatcher, MetaTags, SelectorEvent,
    Viewport,
};
use shipcards_ui::CategorySelector;

use crate::components::{settle_later, CardDeck, HeadTags, NavHeader};
use crate::context::{
    use_catalog, use_deck_config, use_site_config, CatalogState, SharedCatalog, LOAD_ERROR_MESSAGE,
};

/// Cards page component.
///
/// Waits for the catalog, then hands it to the deck. A failed load still
/// renders the page chrome with an error in place of the cards.
#[component]
pub fn Cards(query: DeepLinkRequest) -> Element {
    let catalog = use_catalog();

    match catalog() {
        CatalogState::Loading => rsx! {
            main { class: "cards-page",
                NavHeader {}
                div { class: "deck-status", "Loading cards..." }
            }
        },
        CatalogState::Ready(catalog) => rsx! {
            DeckPage { catalog, query, load_failed: false }
        },
        CatalogState::Failed(catalog) => rsx! {
            DeckPage { catalog, query, load_failed: true }
        },
    }
}

#[component]
fn DeckPage(catalog: SharedCatalog, query: DeepLinkRequest, load_failed: bool) -> Element {
    let site = use_site_config();
    let deck_config = use_deck_config();
    let mut deck = use_signal(|| DeckNavigator::new(catalog.0.clone()).with_config(deck_config));
    let mut watcher = use_signal(DeepLinkWatcher::new);

    // Re-apply whenever the route's query changes
    use_effect(use_reactive!(|query| {
        if let Some(request) = watcher.write().observe(&query) {
            match deck.write().apply_deep_link(&request) {
                DeepLinkResolution::Ignored if !request.is_empty() => {
                    tracing::debug!("Deep link {} did not resolve, keeping current view", request);
                }
                DeepLinkResolution::Ignored => {}
                resolution => {
                    tracing::info!("Opened deep link {:?}", resolution);
                }
            }
        }
    }));

    let page_url = if query.is_empty() {
        format!("{}/cards", site.base_url)
    } else {
        format!("{}/cards?{}", site.base_url, query)
    };
    let tags = MetaTags::for_request(&catalog.0, &query, &site, &page_url)
        .unwrap_or_else(|| MetaTags::site_default(&site, &page_url));

    let nav = deck.read();
    let categories = catalog.0.categories().to_vec();
    let selected = nav.highlighted_category().cloned();
    let is_shuffle_mode = nav.is_shuffle_mode();
    let scrollable = nav.viewport().is_narrow();
    drop(nav);

    let on_selector = move |event: SelectorEvent| {
        let changed = deck.write().handle_selector(&event);
        if changed {
            settle_later(deck);
        }
    };

    rsx! {
        HeadTags { tags }
        main {
            class: "cards-page",
            onresize: move |evt| {
                if let Ok(size) = evt.get_content_box_size() {
                    deck.write().set_viewport(Viewport::from_width(size.width));
                }
            },
            NavHeader {}
            div { class: "cards-body",
                if load_failed {
                    div { class: "deck-status error", "{LOAD_ERROR_MESSAGE}" }
                } else {
                    div { class: "deck-area",
                        CardDeck { deck }
                    }
                }
                div { class: "selector-area",
                    CategorySelector {
                        categories,
                        selected,
                        is_shuffle_mode,
                        scrollable,
                        on_event: on_selector,
                    }
                }
            }
        }
    }
}
