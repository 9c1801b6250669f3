//! Card View Component
//!
//! One flashcard with a 3-D flip. The front shows the category, title and
//! subtitle with the share affordance; the back lists the tactical moves,
//! the optional reading link and the quote.

use dioxus::prelude::*;
use shipcards_core::{CardFace, DisplayCard, ResourceLink, SharePayload, FLIP_TRANSITION};

use crate::components::ShareButton;

#[derive(Props, Clone, PartialEq)]
pub struct CardViewProps {
    pub card: DisplayCard,
    /// Position in the active deck, reported back on flip
    pub index: usize,
    pub face: CardFace,
    #[props(!optional)]
    pub resource_link: Option<ResourceLink>,
    pub share: SharePayload,
    pub on_flip: EventHandler<usize>,
}

#[component]
pub fn CardView(props: CardViewProps) -> Element {
    let card = &props.card.card;
    let color = props.card.display_color.clone();
    let index = props.index;
    let on_flip = props.on_flip;

    let inner_style = format!(
        "transform: {}; transition: {};",
        FLIP_TRANSITION.transform(props.face),
        FLIP_TRANSITION.css()
    );
    let shell_class = if props.face.is_back() { "card-shell flipped" } else { "card-shell" };
    let face_style = format!("background-color: {}; color: {};", card.background_color, color);

    let quote_line = card.quote.as_ref().map(|quote| match &card.quote_author {
        Some(author) => format!("\"{}\" \u{2014} {}", quote, author),
        None => format!("\"{}\"", quote),
    });

    rsx! {
        div { class: "{shell_class}",
            div {
                class: "card-inner",
                style: "{inner_style}",
                onclick: move |_| on_flip.call(index),

                // Front
                div { class: "card-face card-front", style: "{face_style}",
                    div { class: "card-front-top",
                        h3 { class: "card-category", "{props.card.display_category_name}" }
                        span { class: "card-dot", style: "background-color: {color};" }
                    }
                    div { class: "card-front-body",
                        h2 { class: "card-title", "{card.title}" }
                        p { class: "card-subtitle", "{card.subtitle}" }
                    }
                    ShareButton {
                        payload: props.share.clone(),
                        card: props.card.clone(),
                    }
                }

                // Back
                div { class: "card-face card-back", style: "{face_style}",
                    h3 { class: "card-back-title", "{card.title}" }
                    ul { class: "card-bullets",
                        for (i, point) in card.bullet_points.iter().enumerate() {
                            li { key: "{i}",
                                span { class: "bullet-dot", style: "background-color: {color};" }
                                span { "{point}" }
                            }
                        }
                    }
                    if let Some(link) = &props.resource_link {
                        div { class: "card-section",
                            h4 { "Go Deeper" }
                            a {
                                class: "card-link",
                                href: "{link.url}",
                                target: "_blank",
                                onclick: move |evt| evt.stop_propagation(),
                                "{link.title} \u{2192}"
                            }
                        }
                    }
                    if let Some(quote) = quote_line {
                        div { class: "card-section",
                            h4 { "Words of Wisdom" }
                            p { class: "card-quote", "{quote}" }
                        }
                    }
                }
            }
        }
    }
}
