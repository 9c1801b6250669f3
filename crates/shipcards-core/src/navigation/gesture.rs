//! Horizontal drag tracking for the narrow layout.

use crate::config::DRAG_SLOP_PX;

/// What a released swipe did to the deck
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Prev,
    /// Too short, blocked by an animation or at the end of the deck
    SnapBack,
    /// Swipes are not handled on this viewport
    Ignored,
}

/// Pointer drag in progress.
///
/// The browser still delivers `click` after a press that moved, so the
/// gesture remembers whether the last press travelled past
/// [`DRAG_SLOP_PX`] until the next one begins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragGesture {
    origin_x: Option<f64>,
    offset: f64,
    dragged: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64) {
        self.origin_x = Some(x);
        self.offset = 0.0;
        self.dragged = false;
    }

    /// Move the pointer; returns the live offset to translate the card by
    pub fn update(&mut self, x: f64) -> f64 {
        if let Some(origin) = self.origin_x {
            self.offset = x - origin;
            if self.offset.abs() > DRAG_SLOP_PX {
                self.dragged = true;
            }
        }
        self.offset
    }

    /// Release; returns the total displacement (negative is leftwards)
    pub fn end(&mut self) -> f64 {
        let displacement = if self.origin_x.is_some() { self.offset } else { 0.0 };
        self.origin_x = None;
        self.offset = 0.0;
        displacement
    }

    /// Whether the current or last press moved far enough to be a drag;
    /// its trailing click must not count as a tap
    pub fn was_drag(&self) -> bool {
        self.dragged
    }

    pub fn is_active(&self) -> bool {
        self.origin_x.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}
