//! Navigation Header Component
//!
//! Logo and site name on the left, menu button on the right. The menu is a
//! slide-in panel of links about the project and its author.

use dioxus::prelude::*;
use shipcards_core::config::SITE_NAME;
use shipcards_ui::CloseButton;

use crate::app::Route;
use crate::theme::colors::INK;

/// A link in the slide-in menu
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuLink {
    pub title: &'static str,
    pub href: &'static str,
}

impl MenuLink {
    /// `mailto:` links stay in the app; everything else opens externally
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const MENU_LINKS: [MenuLink; 6] = [
    MenuLink {
        title: "Ship Yourself Article",
        href: "https://www.linkedin.com/pulse/ship-yourself-how-designers-creating-new-careers-lance-shields-60mec/",
    },
    MenuLink {
        title: "Making of App",
        href: "https://www.lanceshields.design/research",
    },
    MenuLink {
        title: "About me",
        href: "https://www.lanceshields.design/about",
    },
    MenuLink {
        title: "Me on Linkedin",
        href: "https://www.linkedin.com/in/lanceshields/",
    },
    MenuLink {
        title: "My substack",
        href: "https://designamplified.substack.com/",
    },
    MenuLink {
        title: "Hire me",
        href: "mailto:lance@lanceshields.design",
    },
];

/// Stacked-cards mark
#[component]
pub fn Logo(color: String, #[props(default = 30)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 40 40",
            fill: "none",
            rect { x: "9", y: "4", width: "22", height: "30", rx: "3", fill: "{color}", opacity: "0.45", transform: "rotate(-10 20 19)" }
            rect { x: "9", y: "6", width: "22", height: "30", rx: "3", fill: "{color}" }
        }
    }
}

/// Header bar shown above the deck
#[component]
pub fn NavHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-brand", to: Route::Landing {},
                Logo { color: INK.to_string() }
                span { class: "nav-title", "{SITE_NAME}" }
            }
            button {
                class: "icon-btn menu-btn",
                "aria-label": "Open menu",
                onclick: move |_| menu_open.set(true),
                span { class: "menu-bar" }
                span { class: "menu-bar" }
                span { class: "menu-bar" }
            }
        }
        NavigationMenu { open: menu_open(), on_close: move |_| menu_open.set(false) }
    }
}

#[component]
pub fn NavigationMenu(open: bool, on_close: EventHandler<()>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "menu-backdrop", onclick: move |_| on_close.call(()) }
        nav { class: "menu-panel",
            div { class: "menu-panel-header",
                span { class: "menu-panel-title", "Menu" }
                CloseButton { onclick: move |_| on_close.call(()) }
            }
            ul { class: "menu-links",
                for link in MENU_LINKS.iter() {
                    li { key: "{link.title}",
                        a {
                            href: link.href,
                            target: if link.is_external() { "_blank" } else { "" },
                            onclick: move |_| on_close.call(()),
                            "{link.title}"
                        }
                    }
                }
            }
        }
    }
}
