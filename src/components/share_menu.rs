//! Share Menu Component
//!
//! The "Share" affordance on a card front and the panel it opens: a preview
//! of the social image, one link per destination and a copy box for the
//! card's deep link. Clicks inside never reach the card, so sharing does not
//! flip it.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;
use shipcards_core::config::COPY_CONFIRMATION_MS;
use shipcards_core::preview::render_png;
use shipcards_core::{
    Clock, CopyConfirmation, DisplayCard, PreviewParams, SharePayload, SystemClock,
};
use shipcards_ui::CloseButton;

/// Characters of the link shown before it is cut off
const DISPLAY_URL_CHARS: usize = 30;

/// Render the card's social image as a `data:` URL for the preview thumbnail
fn preview_data_url(card: &DisplayCard) -> Option<String> {
    let params = PreviewParams::for_card(
        &card.card,
        &card.display_category_name,
        &card.display_color,
    );
    match render_png(&params) {
        Ok(bytes) => Some(format!("data:image/png;base64,{}", STANDARD.encode(bytes))),
        Err(e) => {
            tracing::warn!("Preview render failed for {}: {}", card.id(), e);
            None
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[component]
pub fn ShareButton(payload: SharePayload, card: DisplayCard) -> Element {
    let mut open = use_signal(|| false);
    let color = payload.color.clone();

    rsx! {
        div {
            class: "share-anchor",
            onclick: move |evt| evt.stop_propagation(),
            button {
                class: "share-btn",
                style: "color: {color};",
                "aria-label": "Share this card",
                onclick: move |evt| {
                    evt.stop_propagation();
                    open.toggle();
                },
                span { "Share" }
                svg {
                    width: "20",
                    height: "20",
                    view_box: "0 0 20 20",
                    fill: "none",
                    path { d: "M14.5 12L19 7.5L14.5 3", stroke: "currentColor", stroke_width: "1.5", stroke_linecap: "round" }
                    path { d: "M16 18H1.75A.75.75 0 0 1 1 17.25V6", stroke: "currentColor", stroke_width: "1.5", stroke_linecap: "round" }
                    path { d: "M5 14.25A9 9 0 0 1 13.75 7.5H19", stroke: "currentColor", stroke_width: "1.5", stroke_linecap: "round" }
                }
            }
            if open() {
                ShareMenu { payload, card, on_close: move |_| open.set(false) }
            }
        }
    }
}

#[component]
pub fn ShareMenu(payload: SharePayload, card: DisplayCard, on_close: EventHandler<()>) -> Element {
    let clock = use_hook(SystemClock::new);
    let mut confirmation = use_signal(CopyConfirmation::new);
    let preview = use_hook(|| preview_data_url(&card));

    let canonical_url = payload.canonical_url.clone();
    let copy_clock = clock.clone();
    let on_copy = move |evt: MouseEvent| {
        evt.stop_propagation();
        let now = copy_clock.now_ms();
        confirmation.write().record(copy_to_clipboard(&canonical_url), now);
        tracing::debug!("Copied {}", canonical_url);

        let clock = copy_clock.clone();
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(COPY_CONFIRMATION_MS)).await;
            if !confirmation.peek().is_visible(clock.now_ms()) {
                confirmation.write().reset();
            }
        });
    };

    let copied = confirmation.read().is_visible(clock.now_ms());
    let display_url = payload.display_url(DISPLAY_URL_CHARS);

    rsx! {
        div { class: "share-menu",
            div { class: "share-menu-header",
                h3 { "Share this card" }
                CloseButton { onclick: move |_| on_close.call(()) }
            }
            if let Some(src) = preview {
                img { class: "share-preview", src: "{src}", alt: "Preview of {card.card.title}" }
            }
            div { class: "share-links",
                for link in payload.links.iter() {
                    a {
                        key: "{link.destination.label()}",
                        class: "share-link",
                        href: "{link.url}",
                        target: "_blank",
                        onclick: move |evt| evt.stop_propagation(),
                        span { class: "share-link-icon", "{link.destination.label().chars().next().unwrap_or('?')}" }
                        span { class: "share-link-label", "{link.destination.label()}" }
                    }
                }
            }
            div { class: "share-copy",
                div { class: "share-url", title: "{payload.canonical_url}", "{display_url}" }
                button {
                    class: "btn-ghost share-copy-btn",
                    onclick: on_copy,
                    if copied { "\u{2713} Copied" } else { "Copy" }
                }
            }
        }
    }
}
