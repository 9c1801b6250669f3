//! Document title and social card tags.

use dioxus::prelude::*;
use shipcards_core::MetaTags;

#[component]
pub fn HeadTags(tags: MetaTags) -> Element {
    rsx! {
        document::Title { "{tags.title}" }
        document::Meta { name: "description", content: "{tags.description}" }
        document::Meta { property: "og:title", content: "{tags.title}" }
        document::Meta { property: "og:description", content: "{tags.description}" }
        document::Meta { property: "og:image", content: "{tags.image_url}" }
        document::Meta { property: "og:url", content: "{tags.page_url}" }
        document::Meta { name: "twitter:card", content: MetaTags::TWITTER_CARD }
        document::Meta { name: "twitter:title", content: "{tags.title}" }
        document::Meta { name: "twitter:description", content: "{tags.description}" }
        document::Meta { name: "twitter:image", content: "{tags.image_url}" }
    }
}
