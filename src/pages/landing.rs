//! Landing page - entry point to the deck.
//!
//! A shared card passed on the command line skips straight to the deck.

use dioxus::prelude::*;
use shipcards_core::{DeepLinkRequest, MetaTags};
use shipcards_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{HeadTags, Logo};
use crate::context::{use_pending_link, use_site_config};
use crate::theme::colors::MINT;

const AUTHOR_SITE: &str = "https://www.lanceshields.design";

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let mut pending_link = use_pending_link();
    let site = use_site_config();

    // Forward a startup link to the deck once
    use_effect(move || {
        let link = pending_link.write().0.take();
        if let Some(query) = link {
            tracing::info!("Forwarding startup link to the deck: {}", query);
            navigator.replace(Route::Cards { query });
        }
    });

    let explore = move |_| {
        navigator.push(Route::Cards {
            query: DeepLinkRequest::default(),
        });
    };

    let tags = MetaTags::site_default(&site, &site.base_url);

    rsx! {
        HeadTags { tags }
        main { class: "landing",
            div { class: "landing-inner",
                div { class: "landing-logo",
                    Logo { color: MINT.to_string(), size: 120 }
                }

                header { class: "landing-header",
                    p { class: "landing-welcome", "Welcome to" }
                    h1 { class: "landing-title", "{site.site_name}" }
                    p { class: "landing-tagline", "{site.tagline}" }
                }

                section { class: "landing-copy",
                    p {
                        "You've got the skills."
                        br {}
                        "Now design your next move."
                    }
                    p {
                        "Explore practical, tactical cards to build momentum, "
                        "tell your story, and launch what's next."
                    }
                }

                Button {
                    variant: ButtonVariant::Outline,
                    class: "landing-cta".to_string(),
                    onclick: explore,
                    "Explore the Cards"
                }

                footer { class: "landing-credit",
                    p { "Created by Lance Shields" }
                    p {
                        a { href: AUTHOR_SITE, target: "_blank", "lanceshields.design" }
                    }
                }
            }
        }
    }
}
