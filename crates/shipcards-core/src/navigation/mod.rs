//! Deck navigation state machine.
//!
//! A [`DeckNavigator`] owns everything the deck view needs to know: which
//! category (or shuffled sample) is showing, the current index, the flipped
//! card and whether a slide or fade is in flight. Time never advances on its
//! own. Transitions are recorded as deadlines on the injected [`Clock`] and
//! settled by [`DeckNavigator::tick`], which the UI calls after sleeping for
//! [`DeckNavigator::remaining_ms`].
//!
//! ```text
//!            next / prev                      deadline passed + tick
//!   Idle ───────────────────▶ Animating ───────────────────────────▶ Idle
//!    ▲  set_shuffle_mode (fade)   │  set_category cancels the slide
//!    └────────────────────────────┘
//! ```

mod gesture;
mod viewport;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

pub use gesture::{DragGesture, SwipeOutcome};
pub use viewport::{RenderWindow, Viewport};

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::config::DeckConfig;
use crate::deeplink::{DeepLinkRequest, DeepLinkResolution};
use crate::flip::FlipSelection;
use crate::types::{Category, CategoryId, DisplayCard};

/// Direction the deck slides in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Cards move left, revealing the next card
    Left,
    /// Cards move right, revealing the previous card
    Right,
    #[default]
    None,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub current_index: usize,
    pub flip: FlipSelection,
    pub direction: Direction,
    pub is_animating: bool,
    pub is_shuffle_mode: bool,
    pub shuffled_cards: Vec<DisplayCard>,
}

impl NavigationState {
    pub fn flipped_index(&self) -> Option<usize> {
        self.flip.flipped()
    }
}

/// Events emitted by the category selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorEvent {
    Select(CategoryId),
    ToggleShuffle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Slide { target: usize, due_ms: u64 },
    Fade { due_ms: u64 },
}

impl Transition {
    fn due_ms(&self) -> u64 {
        match self {
            Transition::Slide { due_ms, .. } | Transition::Fade { due_ms } => *due_ms,
        }
    }
}

pub struct DeckNavigator {
    catalog: Arc<Catalog>,
    clock: Arc<dyn Clock>,
    config: DeckConfig,
    rng: StdRng,
    category: Option<CategoryId>,
    viewport: Viewport,
    state: NavigationState,
    transition: Option<Transition>,
    /// Index a deep link asked for, consumed by the next matching `set_category`
    pending_index: Option<(CategoryId, usize)>,
}

impl DeckNavigator {
    /// Navigator over `catalog`, opened on its first category
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_clock(catalog, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(catalog: Arc<Catalog>, clock: Arc<dyn Clock>) -> Self {
        let category = catalog.default_category().map(|c| c.id.clone());
        Self {
            catalog,
            clock,
            config: DeckConfig::default(),
            rng: StdRng::from_os_rng(),
            category,
            viewport: Viewport::default(),
            state: NavigationState::default(),
            transition: None,
            pending_index: None,
        }
    }

    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = config;
        self
    }

    /// Make shuffles reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn is_shuffle_mode(&self) -> bool {
        self.state.is_shuffle_mode
    }

    /// The selected category, kept while shuffling so turning shuffle off
    /// returns to it
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref().and_then(|id| self.catalog.category(id))
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    /// Category the selector should highlight; none while shuffling
    pub fn highlighted_category(&self) -> Option<&CategoryId> {
        if self.state.is_shuffle_mode {
            None
        } else {
            self.category.as_ref()
        }
    }

    /// Cards currently being navigated: the shuffled sample in shuffle mode,
    /// otherwise the selected category's deck
    pub fn active_cards(&self) -> &[DisplayCard] {
        if self.state.is_shuffle_mode {
            &self.state.shuffled_cards
        } else {
            match &self.category {
                Some(id) => self.catalog.deck(id),
                None => &[],
            }
        }
    }

    pub fn current_card(&self) -> Option<&DisplayCard> {
        self.active_cards().get(self.state.current_index)
    }

    pub fn can_go_next(&self) -> bool {
        let lookahead = match self.viewport {
            Viewport::Narrow => 1,
            Viewport::Wide => self.config.wide_visible,
        };
        self.state.current_index + lookahead < self.active_cards().len()
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.current_index > 0
    }

    pub fn next(&mut self) -> bool {
        self.tick();
        if self.state.is_animating || !self.can_go_next() {
            debug!(
                "next ignored at {} (animating: {})",
                self.state.current_index, self.state.is_animating
            );
            return false;
        }
        self.begin_slide(self.state.current_index + 1, Direction::Left);
        true
    }

    pub fn prev(&mut self) -> bool {
        self.tick();
        if self.state.is_animating || !self.can_go_prev() {
            debug!(
                "prev ignored at {} (animating: {})",
                self.state.current_index, self.state.is_animating
            );
            return false;
        }
        self.begin_slide(self.state.current_index - 1, Direction::Right);
        true
    }

    fn begin_slide(&mut self, target: usize, direction: Direction) {
        let due_ms = self.clock.now_ms() + self.config.slide_ms;
        self.state.direction = direction;
        self.state.is_animating = true;
        self.transition = Some(Transition::Slide { target, due_ms });
        debug!("Sliding {:?} to {}", direction, target);
    }

    /// Settle an expired transition. Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        if self.clock.now_ms() < transition.due_ms() {
            return false;
        }

        if let Transition::Slide { target, .. } = transition {
            self.state.current_index = target;
            self.state.flip.clear();
        }
        self.transition = None;
        self.state.is_animating = false;
        true
    }

    /// Milliseconds until the in-flight transition can be settled
    pub fn remaining_ms(&self) -> Option<u64> {
        self.transition
            .map(|t| t.due_ms().saturating_sub(self.clock.now_ms()))
    }

    /// Toggle the flip of the card at `index`. Not blocked by animations.
    pub fn flip(&mut self, index: usize) -> bool {
        if index >= self.active_cards().len() {
            debug!("flip ignored, index {} out of range", index);
            return false;
        }
        self.state.flip.toggle(index);
        true
    }

    /// Switch to `id`, leaving shuffle mode. Unknown ids are ignored.
    pub fn set_category(&mut self, id: &CategoryId) -> bool {
        if self.catalog.category(id).is_none() {
            debug!("Ignoring unknown category {}", id);
            return false;
        }

        let index = match self.pending_index.take() {
            Some((pending, index)) if &pending == id => index,
            _ => 0,
        };

        self.category = Some(id.clone());
        self.transition = None;
        self.state = NavigationState::default();

        let len = self.active_cards().len();
        self.state.current_index = if len == 0 { 0 } else { index.min(len - 1) };
        info!("Category {} at card {}", id, self.state.current_index);
        true
    }

    /// Enter or leave shuffle mode. Requesting the current mode does nothing.
    pub fn set_shuffle_mode(&mut self, on: bool) -> bool {
        if on == self.state.is_shuffle_mode {
            return false;
        }

        self.state.shuffled_cards = if on { self.draw_shuffle() } else { Vec::new() };
        self.state.is_shuffle_mode = on;
        self.state.current_index = 0;
        self.state.flip.clear();
        self.state.direction = Direction::None;
        self.state.is_animating = true;
        self.transition = Some(Transition::Fade {
            due_ms: self.clock.now_ms() + self.config.fade_ms,
        });
        info!(
            "Shuffle mode {} ({} cards)",
            if on { "on" } else { "off" },
            self.active_cards().len()
        );
        true
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.set_shuffle_mode(!self.state.is_shuffle_mode)
    }

    /// Sample without replacement from every category
    fn draw_shuffle(&mut self) -> Vec<DisplayCard> {
        let pool: Vec<&DisplayCard> = self.catalog.card_pool().collect();
        let amount = self.config.shuffle_size.min(pool.len());
        rand::seq::index::sample(&mut self.rng, pool.len(), amount)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect()
    }

    pub fn handle_selector(&mut self, event: &SelectorEvent) -> bool {
        match event {
            SelectorEvent::Select(id) => self.set_category(id),
            SelectorEvent::ToggleShuffle => self.toggle_shuffle(),
        }
    }

    /// Open the card a deep link names. The resolved index survives the
    /// category switch it triggers.
    pub fn apply_deep_link(&mut self, request: &DeepLinkRequest) -> DeepLinkResolution {
        let resolution = request.resolve(&self.catalog);
        if let (Some(category), Some(index)) = (resolution.category(), resolution.index()) {
            self.pending_index = Some((category.clone(), index));
            let category = category.clone();
            self.set_category(&category);
        }
        resolution
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            debug!("Viewport {:?}", viewport);
            self.viewport = viewport;
        }
    }

    /// Apply a released drag of `displacement` px (negative is leftwards)
    pub fn swipe(&mut self, displacement: f64) -> SwipeOutcome {
        if !self.viewport.is_narrow() {
            return SwipeOutcome::Ignored;
        }
        let threshold = self.config.swipe_threshold_px;
        if displacement <= -threshold && self.next() {
            SwipeOutcome::Next
        } else if displacement >= threshold && self.prev() {
            SwipeOutcome::Prev
        } else {
            SwipeOutcome::SnapBack
        }
    }

    /// Cards to materialize: only the current one on narrow viewports, a
    /// window around it on wide ones
    pub fn visible_window(&self) -> RenderWindow<'_> {
        let cards = self.active_cards();
        if cards.is_empty() {
            return RenderWindow::empty();
        }
        let current = self.state.current_index.min(cards.len() - 1);
        match self.viewport {
            Viewport::Narrow => RenderWindow {
                start: current,
                cards: &cards[current..=current],
            },
            Viewport::Wide => {
                let start = current.saturating_sub(1);
                let end = (start + self.config.wide_window).min(cards.len());
                RenderWindow {
                    start,
                    cards: &cards[start..end],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::types::CardId;

    fn navigator() -> (DeckNavigator, ManualClock) {
        let clock = ManualClock::new();
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let nav = DeckNavigator::with_clock(catalog, Arc::new(clock.clone())).with_seed(7);
        (nav, clock)
    }

    fn settle(nav: &mut DeckNavigator, clock: &ManualClock) {
        if let Some(ms) = nav.remaining_ms() {
            clock.advance(ms);
        }
        nav.tick();
    }

    // ============================================================================
    // Sliding
    // ============================================================================

    #[test]
    fn opens_on_first_category() {
        let (nav, _) = navigator();
        assert_eq!(nav.category_id(), Some(&CategoryId::new("mindset")));
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.active_cards().len(), 8);
        assert!(!nav.is_animating());
    }

    #[test]
    fn index_changes_when_slide_settles() {
        let (mut nav, clock) = navigator();
        nav.flip(0);

        assert!(nav.next());
        assert!(nav.is_animating());
        assert_eq!(nav.state().direction, Direction::Left);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.remaining_ms(), Some(500));

        clock.advance(499);
        assert!(!nav.tick());
        assert_eq!(nav.current_index(), 0);

        clock.advance(1);
        assert!(nav.tick());
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.state().flipped_index(), None);
        assert!(!nav.is_animating());
        assert_eq!(nav.remaining_ms(), None);
    }

    #[test]
    fn lock_rejects_input_while_sliding() {
        let (mut nav, clock) = navigator();
        assert!(nav.next());
        assert!(!nav.next());
        assert!(!nav.prev());
        settle(&mut nav, &clock);
        assert_eq!(nav.current_index(), 1);

        assert!(nav.prev());
        assert_eq!(nav.state().direction, Direction::Right);
        settle(&mut nav, &clock);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn next_settles_expired_slide_first() {
        let (mut nav, clock) = navigator();
        nav.next();
        clock.advance(600);
        assert!(nav.next());
        settle(&mut nav, &clock);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn bounds_are_respected() {
        let (mut nav, clock) = navigator();
        assert!(!nav.can_go_prev());
        assert!(!nav.prev());
        for _ in 0..7 {
            assert!(nav.next());
            settle(&mut nav, &clock);
        }
        assert_eq!(nav.current_index(), 7);
        assert!(!nav.can_go_next());
        assert!(!nav.next());
    }

    // ============================================================================
    // Categories and deep links
    // ============================================================================

    #[test]
    fn set_category_resets_and_cancels_slide() {
        let (mut nav, clock) = navigator();
        nav.next();
        assert!(nav.set_category(&CategoryId::new("networking")));
        assert!(!nav.is_animating());
        clock.advance(1_000);
        assert!(!nav.tick());
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.current_card().unwrap().id().as_str(), "networking-1");
    }

    #[test]
    fn unknown_category_is_ignored() {
        let (mut nav, clock) = navigator();
        nav.next();
        settle(&mut nav, &clock);
        assert!(!nav.set_category(&CategoryId::new("nope")));
        assert_eq!(nav.category_id(), Some(&CategoryId::new("mindset")));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn deep_link_index_survives_category_switch() {
        let (mut nav, _) = navigator();
        let resolution =
            nav.apply_deep_link(&DeepLinkRequest::from_query("category=negotiation&cardId=negotiation-5"));
        assert_eq!(resolution.index(), Some(4));
        assert_eq!(nav.category_id(), Some(&CategoryId::new("negotiation")));
        assert_eq!(nav.current_index(), 4);
        assert_eq!(nav.current_card().unwrap().id(), &CardId::new("negotiation-5"));

        // A later manual switch starts at the top again
        nav.set_category(&CategoryId::new("mindset"));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn deep_link_leaves_shuffle_mode() {
        let (mut nav, _) = navigator();
        nav.set_shuffle_mode(true);
        nav.apply_deep_link(&DeepLinkRequest::from_query("category=wildcards&cardId=wildcards-2"));
        assert!(!nav.is_shuffle_mode());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn unresolved_deep_link_changes_nothing() {
        let (mut nav, _) = navigator();
        nav.flip(3);
        let before = nav.state().clone();
        let resolution = nav.apply_deep_link(&DeepLinkRequest::from_query("category=unknown"));
        assert_eq!(resolution, DeepLinkResolution::Ignored);
        assert_eq!(nav.state(), &before);
        assert_eq!(nav.category_id(), Some(&CategoryId::new("mindset")));
    }

    // ============================================================================
    // Shuffle
    // ============================================================================

    #[test]
    fn shuffle_fades_and_restores() {
        let (mut nav, clock) = navigator();
        nav.set_category(&CategoryId::new("storytelling"));
        let original: Vec<_> = nav.active_cards().to_vec();

        assert!(nav.handle_selector(&SelectorEvent::ToggleShuffle));
        assert!(nav.is_shuffle_mode());
        assert!(nav.is_animating());
        assert_eq!(nav.remaining_ms(), Some(300));
        assert_eq!(nav.highlighted_category(), None);
        assert_eq!(nav.active_cards().len(), 8);
        settle(&mut nav, &clock);
        assert!(!nav.is_animating());

        assert!(!nav.set_shuffle_mode(true));
        assert!(nav.toggle_shuffle());
        assert_eq!(nav.active_cards(), original.as_slice());
        assert_eq!(nav.highlighted_category(), Some(&CategoryId::new("storytelling")));
    }

    #[test]
    fn shuffle_is_reproducible_with_seed() {
        let (mut a, _) = navigator();
        let (mut b, _) = navigator();
        a.set_shuffle_mode(true);
        b.set_shuffle_mode(true);
        assert_eq!(a.active_cards(), b.active_cards());
    }

    #[test]
    fn configured_shuffle_size_is_drawn() {
        let (nav, _) = navigator();
        let mut nav = nav.with_config(DeckConfig {
            shuffle_size: 3,
            ..DeckConfig::default()
        });
        nav.set_shuffle_mode(true);
        assert_eq!(nav.active_cards().len(), 3);
        assert_eq!(nav.config().shuffle_size, 3);
    }

    #[test]
    fn shuffle_on_small_catalog_takes_everything() {
        let json = r##"{"categories":[{"id":"a","name":"A","color":"#000000","cards":[
            {"id":"a-1","category":"A","title":"One","subtitle":"","background_color":"#FFFFFF"},
            {"id":"a-2","category":"A","title":"Two","subtitle":"","background_color":"#FFFFFF"}]}]}"##;
        let catalog = Arc::new(Catalog::from_json(json).unwrap());
        let mut nav = DeckNavigator::new(catalog).with_seed(1);
        nav.set_shuffle_mode(true);
        assert_eq!(nav.active_cards().len(), 2);
    }

    // ============================================================================
    // Flip, viewport and swipe
    // ============================================================================

    #[test]
    fn flip_ignores_lock_and_range() {
        let (mut nav, _) = navigator();
        nav.next();
        assert!(nav.flip(0));
        assert_eq!(nav.state().flipped_index(), Some(0));
        assert!(!nav.flip(8));
        assert_eq!(nav.state().flipped_index(), Some(0));
    }

    #[test]
    fn wide_window_and_lookahead() {
        let (mut nav, clock) = navigator();
        nav.set_viewport(Viewport::Wide);

        let window = nav.visible_window();
        assert_eq!(window.start, 0);
        assert_eq!(window.len(), 5);

        for _ in 0..5 {
            assert!(nav.next());
            settle(&mut nav, &clock);
        }
        assert_eq!(nav.current_index(), 5);
        assert!(!nav.can_go_next());

        let window = nav.visible_window();
        assert_eq!(window.start, 4);
        assert_eq!(window.len(), 4);
        assert_eq!(window.iter().next().unwrap().0, 4);
    }

    #[test]
    fn narrow_window_is_single_card() {
        let (mut nav, clock) = navigator();
        nav.next();
        settle(&mut nav, &clock);
        let window = nav.visible_window();
        assert_eq!(window.start, 1);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn swipes() {
        let (mut nav, clock) = navigator();
        assert_eq!(nav.swipe(-40.0), SwipeOutcome::SnapBack);
        assert_eq!(nav.swipe(-80.0), SwipeOutcome::Next);
        assert_eq!(nav.swipe(-200.0), SwipeOutcome::SnapBack);
        settle(&mut nav, &clock);
        assert_eq!(nav.swipe(120.0), SwipeOutcome::Prev);
        settle(&mut nav, &clock);
        assert_eq!(nav.swipe(120.0), SwipeOutcome::SnapBack);

        nav.set_viewport(Viewport::Wide);
        assert_eq!(nav.swipe(-300.0), SwipeOutcome::Ignored);
        assert!(!nav.is_animating());
    }

    #[test]
    fn empty_catalog_is_inert() {
        let mut nav = DeckNavigator::new(Arc::new(Catalog::empty()));
        assert!(nav.category().is_none());
        assert!(nav.active_cards().is_empty());
        assert!(nav.current_card().is_none());
        assert!(!nav.next());
        assert!(!nav.flip(0));
        assert!(nav.visible_window().is_empty());
    }
}
