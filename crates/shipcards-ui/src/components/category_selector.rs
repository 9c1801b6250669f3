//! Category Selector Component
//!
//! A row of category pills followed by a shuffle pill. The selector keeps no
//! state: it renders the highlight it is given and reports clicks as
//! [`SelectorEvent`]s.

use dioxus::prelude::*;
use shipcards_core::{Category, CategoryId, SelectorEvent};

use super::button::class_list;

/// Break a category name over two lines for the fixed-width pills.
///
/// Names with a `+` break before it, single words stay whole, anything else
/// splits at the middle word.
pub fn format_category_name(name: &str) -> String {
    if name.contains('+') {
        return name.replacen('+', "\n+", 1);
    }

    let words: Vec<&str> = name.split(' ').collect();
    if words.len() == 1 {
        return name.to_string();
    }
    let middle = words.len() / 2;
    format!("{}\n{}", words[..middle].join(" "), words[middle..].join(" "))
}

#[derive(Clone, PartialEq, Props)]
pub struct CategorySelectorProps {
    pub categories: Vec<Category>,
    /// Highlighted category; `None` while shuffling
    pub selected: Option<CategoryId>,
    pub is_shuffle_mode: bool,
    /// Stack pills in a scrollable row instead of wrapping them
    #[props(default = false)]
    pub scrollable: bool,
    pub on_event: EventHandler<SelectorEvent>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategorySelector {
///         categories: catalog.categories().to_vec(),
///         selected: deck.read().highlighted_category().cloned(),
///         is_shuffle_mode: deck.read().is_shuffle_mode(),
///         on_event: move |event| { deck.write().handle_selector(&event); }
///     }
/// }
/// ```
#[component]
pub fn CategorySelector(props: CategorySelectorProps) -> Element {
    let on_event = props.on_event;
    let row_class = if props.scrollable {
        "category-selector scrollable"
    } else {
        "category-selector"
    };
    let shuffle_class = class_list("pill shuffle-pill", props.is_shuffle_mode.then_some("selected"));

    rsx! {
        div {
            class: "{row_class}",
            role: "radiogroup",
            "aria-label": "Card categories",
            for category in props.categories.iter() {
                {
                    let is_selected =
                        !props.is_shuffle_mode && props.selected.as_ref() == Some(&category.id);
                    let label = format_category_name(&category.name);
                    let select = SelectorEvent::Select(category.id.clone());
                    rsx! {
                        button {
                            key: "{category.id}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_event.call(select.clone()),
                            "{label}"
                        }
                    }
                }
            }
            button {
                class: "{shuffle_class}",
                "aria-pressed": if props.is_shuffle_mode { "true" } else { "false" },
                onclick: move |_| on_event.call(SelectorEvent::ToggleShuffle),
                span { class: "shuffle-icon", "\u{21C4}" }
                "Shuffle"
            }
        }
    }
}
