//! The transition controller: keeps one current item view and swaps it
//! for a freshly built one with a show/hide animation pair.

mod animation;
mod state;

use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::geometry::Rect;
use crate::item::{ItemId, ItemInfo, ItemView};

pub use animation::{Transition, TransitionTiming};
pub use state::ItemPhase;

/// Supplies per-index content to a [`ContentView`].
pub trait OnboardingDelegate {
    fn item_at(&self, index: usize) -> Option<ItemInfo>;

    /// Called after a view has been filled from [`item_at`](Self::item_at),
    /// for per-item tweaks. Not called when `item_at` returned `None`.
    fn configure_item(&self, _item: &mut ItemView, _index: usize) {}
}

#[derive(Debug)]
struct Current {
    view: ItemView,
    show: Option<Transition>,
}

/// A previously current view, still attached until its hide completes.
///
/// A show still running when the view was replaced is dropped; the hide
/// starts from wherever the show had got to.
#[derive(Debug)]
pub struct Outgoing {
    view: ItemView,
    hide: Transition,
    completed: bool,
}

impl Outgoing {
    pub fn view(&self) -> &ItemView {
        &self.view
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn advance(&mut self, dt: f32) {
        let (alpha, offset) = self.hide.apply(dt);
        self.view.set_presentation(alpha, offset);
        self.completed = self.hide.has_completed();
    }
}

pub struct ContentView {
    bounds: Rect,
    items_count: usize,
    delegate: Weak<dyn OnboardingDelegate>,
    timing: TransitionTiming,

    current: Current,
    outgoing: VecDeque<Outgoing>,
}

impl ContentView {
    /// Builds the container with item 0 already displayed.
    ///
    /// `items_count` is informational; range checks belong to the delegate.
    pub fn new<D: OnboardingDelegate + 'static>(items_count: usize, bounds: Rect, delegate: &Rc<D>) -> Self {
        let delegate: Weak<D> = Rc::downgrade(delegate);
        let delegate: Weak<dyn OnboardingDelegate> = delegate;
        let view = build_item(&delegate, 0);
        Self {
            bounds,
            items_count,
            delegate,
            timing: TransitionTiming::default(),
            current: Current { view, show: None },
            outgoing: VecDeque::new(),
        }
    }

    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Makes `index` the current item and starts the transition.
    ///
    /// Returns as soon as both animations are scheduled; `current()` already
    /// reflects `index`. With `animated == false` the new view is shown at
    /// rest and the old one is detached on the spot.
    pub fn current_item(&mut self, index: usize, animated: bool) -> ItemId {
        let mut view = build_item(&self.delegate, index);
        let id = view.id();

        let show = if animated {
            let show = Transition::show(&self.timing);
            let (alpha, offset) = show.initial();
            view.set_presentation(alpha, offset);
            Some(show)
        } else {
            None
        };

        let previous = std::mem::replace(&mut self.current, Current { view, show });
        if animated {
            let hide = Transition::hide(&self.timing, previous.view.alpha(), previous.view.stack_offset());
            debug!(index = previous.view.index(), item = %previous.view.id(), "hiding item");
            self.outgoing.push_back(Outgoing {
                view: previous.view,
                hide,
                completed: false,
            });
        } else {
            debug!(index = previous.view.index(), item = %previous.view.id(), "item detached");
        }

        id
    }

    /// Advances every running animation by `dt` seconds and detaches the
    /// outgoing views whose hide finished. Returns the detached ids, oldest
    /// first.
    pub fn update(&mut self, dt: f32) -> Vec<ItemId> {
        if let Some(show) = self.current.show.as_mut() {
            let (alpha, offset) = show.apply(dt);
            self.current.view.set_presentation(alpha, offset);
            if show.has_completed() {
                self.current.show = None;
            }
        }

        for outgoing in self.outgoing.iter_mut() {
            outgoing.advance(dt);
        }

        self.detach_completed()
    }

    /// Jumps every running animation to its end state and detaches all
    /// outgoing views.
    pub fn finish_transitions(&mut self) -> Vec<ItemId> {
        if let Some(mut show) = self.current.show.take() {
            let (alpha, offset) = show.finish();
            self.current.view.set_presentation(alpha, offset);
        }
        for outgoing in self.outgoing.iter_mut() {
            let (alpha, offset) = outgoing.hide.finish();
            outgoing.view.set_presentation(alpha, offset);
            outgoing.completed = true;
        }
        self.detach_completed()
    }

    fn detach_completed(&mut self) -> Vec<ItemId> {
        let mut detached = Vec::new();
        self.outgoing.retain(|outgoing| {
            if outgoing.completed {
                debug!(index = outgoing.view.index(), item = %outgoing.view.id(), "item detached");
                detached.push(outgoing.view.id());
            }
            !outgoing.completed
        });
        detached
    }

    pub fn current(&self) -> &ItemView {
        &self.current.view
    }

    pub fn current_index(&self) -> usize {
        self.current.view.index()
    }

    /// Views pending detach, oldest first.
    pub fn outgoing(&self) -> impl Iterator<Item = &Outgoing> {
        self.outgoing.iter()
    }

    /// Attached views in drawing order: outgoing views oldest first, then the
    /// current view on top.
    pub fn subviews(&self) -> impl Iterator<Item = &ItemView> {
        self.outgoing
            .iter()
            .map(|outgoing| &outgoing.view)
            .chain(std::iter::once(&self.current.view))
    }

    pub fn is_attached(&self, id: ItemId) -> bool {
        self.subviews().any(|view| view.id() == id)
    }

    pub fn phase(&self, id: ItemId) -> Option<ItemPhase> {
        if self.current.view.id() == id {
            return Some(match self.current.show {
                Some(_) => ItemPhase::Showing,
                None => ItemPhase::Displayed,
            });
        }
        self.outgoing
            .iter()
            .any(|outgoing| outgoing.view.id() == id)
            .then_some(ItemPhase::Hiding)
    }

    pub fn is_animating(&self) -> bool {
        self.current.show.is_some() || !self.outgoing.is_empty()
    }

    pub fn items_count(&self) -> usize {
        self.items_count
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Every attached view is pinned to the container, so this re-pins all
    /// of them.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

fn build_item(delegate: &Weak<dyn OnboardingDelegate>, index: usize) -> ItemView {
    let mut view = ItemView::new(index);
    debug!(index, item = %view.id(), "item attached");

    let Some(delegate) = delegate.upgrade() else {
        return view;
    };
    let Some(info) = delegate.item_at(index) else {
        debug!(index, "no content for item");
        return view;
    };

    view.apply(info);
    trace!(index, "configuring item");
    delegate.configure_item(&mut view, index);
    view
}
