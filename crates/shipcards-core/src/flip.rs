//! Card flip state and its transition contract.
//!
//! Only one card of a deck may show its back at a time. Flipping is driven
//! by clicks on the card body and is independent of the navigation lock.

use crate::config::FLIP_DURATION_MS;

/// Which side of a card is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFace {
    /// Title and subtitle
    #[default]
    Front,
    /// Bullet points, reading link and quote
    Back,
}

impl CardFace {
    pub fn is_back(self) -> bool {
        self == CardFace::Back
    }

    /// Y-axis rotation of the card body
    pub fn rotate_y_deg(self) -> u16 {
        match self {
            CardFace::Front => 0,
            CardFace::Back => 180,
        }
    }

    /// Vertical lift applied while the back is showing
    pub fn lift_px(self) -> i16 {
        match self {
            CardFace::Front => 0,
            CardFace::Back => -20,
        }
    }
}

/// The at-most-one flipped card of a deck
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipSelection(Option<usize>);

impl FlipSelection {
    pub fn new() -> Self {
        Self(None)
    }

    /// Flip `index`; flipping it again returns it to the front, flipping a
    /// different card moves the selection there.
    pub fn toggle(&mut self, index: usize) {
        self.0 = if self.0 == Some(index) { None } else { Some(index) };
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn flipped(&self) -> Option<usize> {
        self.0
    }

    pub fn face(&self, index: usize) -> CardFace {
        if self.0 == Some(index) {
            CardFace::Back
        } else {
            CardFace::Front
        }
    }
}

/// Timing of the 3-D flip
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipTransition {
    pub duration_ms: u64,
    /// Cubic bezier control points
    pub easing: [f32; 4],
}

pub const FLIP_TRANSITION: FlipTransition = FlipTransition {
    duration_ms: FLIP_DURATION_MS,
    easing: [0.16, 1.0, 0.3, 1.0],
};

impl FlipTransition {
    /// CSS `transition` value for the card body
    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.easing;
        format!(
            "transform {}ms cubic-bezier({}, {}, {}, {})",
            self.duration_ms, x1, y1, x2, y2
        )
    }

    /// CSS `transform` for a face
    pub fn transform(&self, face: CardFace) -> String {
        format!(
            "rotateY({}deg) translateY({}px)",
            face.rotate_y_deg(),
            face.lift_px()
        )
    }
}
