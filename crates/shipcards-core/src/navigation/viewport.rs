use crate::config::NARROW_MAX_WIDTH_PX;
use crate::types::DisplayCard;

/// Layout class of the deck
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    /// One card at a time, arrows below, swipe enabled
    #[default]
    Narrow,
    /// Horizontal carousel strip with several cards in view
    Wide,
}

impl Viewport {
    pub fn from_width(width_px: f64) -> Self {
        if width_px <= NARROW_MAX_WIDTH_PX {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Viewport::Narrow
    }
}

/// The slice of the deck that is materialized for rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderWindow<'a> {
    /// Deck index of `cards[0]`
    pub start: usize,
    pub cards: &'a [DisplayCard],
}

impl<'a> RenderWindow<'a> {
    pub fn empty() -> Self {
        Self { start: 0, cards: &[] }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards paired with their deck index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a DisplayCard)> {
        let start = self.start;
        self.cards.iter().enumerate().map(move |(i, card)| (start + i, card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(768.0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(769.0), Viewport::Wide);
    }
}
