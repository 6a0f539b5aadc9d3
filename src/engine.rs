use std::rc::Rc;

use raylib::prelude::*;
use tracing::info;

use crate::content::ContentView;
use crate::deck::Deck;
use crate::geometry::Rect;
use crate::render::Renderer;

/// The parent screen: owns the deck, pages through it and draws the
/// content view every frame.
pub struct OnboardingEngine {
    deck: Rc<Deck>,
    content: ContentView,
    renderer: Renderer,

    animated: bool,
    autoplay: Option<f32>,
    display_timer: f32,
}

impl OnboardingEngine {
    pub fn new(deck: Deck, bounds: Rect, animated: bool, autoplay: Option<f32>) -> Self {
        let deck = Rc::new(deck);
        let content = ContentView::new(deck.len(), bounds, &deck).with_timing(deck.transition);
        Self {
            deck,
            content,
            renderer: Renderer::default(),
            animated,
            autoplay,
            display_timer: 0.0,
        }
    }

    pub fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.renderer.preload(rl, thread, &self.deck);
        info!(items = self.deck.len(), "onboarding ready");
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.content.set_bounds(bounds);
    }

    fn show(&mut self, index: usize) {
        if index == self.content.current_index() {
            return;
        }
        self.display_timer = 0.0;
        self.content.current_item(index, self.animated);
    }

    pub fn next(&mut self) {
        let last = self.content.items_count().saturating_sub(1);
        self.show((self.content.current_index() + 1).min(last));
    }

    pub fn previous(&mut self) {
        self.show(self.content.current_index().saturating_sub(1));
    }

    pub fn first(&mut self) {
        self.show(0);
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(interval) = self.autoplay {
            self.display_timer += dt;
            if self.display_timer >= interval {
                // Wrap around at the end of the deck
                let next = (self.content.current_index() + 1) % self.content.items_count().max(1);
                self.show(next);
                self.display_timer = 0.0;
            }
        }

        self.content.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let bounds = self.content.bounds();
        for view in self.content.subviews() {
            self.renderer.draw_item(d, view, bounds);
        }
    }
}
