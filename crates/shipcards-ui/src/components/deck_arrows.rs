//! Deck navigation arrows
//!
//! Solid triangles in `#454545`. A disabled arrow fades to 30% and swallows
//! clicks.

use dioxus::prelude::*;

const ARROW_FILL: &str = "#454545";
const LEFT_PATH: &str = "M0 13.5L23.25 26.92L23.25 0.08L0 13.5Z";
const RIGHT_PATH: &str = "M24 13.5L0.75 26.92L0.75 0.08L24 13.5Z";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowSide {
    Left,
    Right,
}

impl ArrowSide {
    fn path(self) -> &'static str {
        match self {
            ArrowSide::Left => LEFT_PATH,
            ArrowSide::Right => RIGHT_PATH,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ArrowSide::Left => "Previous card",
            ArrowSide::Right => "Next card",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct DeckArrowProps {
    pub side: ArrowSide,
    pub enabled: bool,
    pub onclick: EventHandler<()>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn DeckArrow(props: DeckArrowProps) -> Element {
    let mut class = super::button::class_list("deck-arrow", props.class.as_deref());
    if !props.enabled {
        class.push_str(" disabled");
    }
    let enabled = props.enabled;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": props.side.label(),
            "aria-disabled": if enabled { "false" } else { "true" },
            onclick: move |_| {
                if enabled {
                    props.onclick.call(());
                }
            },
            svg {
                width: "24",
                height: "27",
                view_box: "0 0 24 27",
                fill: "none",
                path { d: props.side.path(), fill: ARROW_FILL }
            }
        }
    }
}

/// Previous/next pair shown under the card on narrow layouts
#[derive(Clone, PartialEq, Props)]
pub struct DeckArrowsProps {
    pub can_prev: bool,
    pub can_next: bool,
    pub on_prev: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

#[component]
pub fn DeckArrows(props: DeckArrowsProps) -> Element {
    rsx! {
        div {
            class: "deck-arrows",
            DeckArrow { side: ArrowSide::Left, enabled: props.can_prev, onclick: props.on_prev }
            DeckArrow { side: ArrowSide::Right, enabled: props.can_next, onclick: props.on_next }
        }
    }
}
