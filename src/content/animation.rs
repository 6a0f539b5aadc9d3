use std::fmt;

use raylib::ease;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::ease::Easing;

/// Durations and travel shared by every show/hide pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    pub show_duration: f32,
    pub hide_duration: f32,
    pub offset: f32,
    pub easing: Easing,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            show_duration: SHOW_DURATION,
            hide_duration: HIDE_DURATION,
            offset: DY_OFFSET_ANIMATION,
            easing: Easing::EaseOut,
        }
    }
}

/// Opacity and stack offset animated together on one item view.
///
/// Both values are driven by raylib tweens; the transition keeps its own
/// clock so completion is exact and zero-length transitions land at once.
pub struct Transition {
    alpha: ease::Tween,
    offset: ease::Tween,
    from: (f32, f32),
    to: (f32, f32),
    duration: f32,
    elapsed: f32,
}

impl Transition {
    fn new(easing: Easing, from: (f32, f32), to: (f32, f32), duration: f32) -> Self {
        let duration = duration.max(0.0);
        Self {
            alpha: ease::Tween::new(easing.easer(), from.0, to.0, duration),
            offset: ease::Tween::new(easing.easer(), from.1, to.1, duration),
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Fade in while rising from `offset` below the resting position.
    pub fn show(timing: &TransitionTiming) -> Self {
        Self::new(timing.easing, (0.0, timing.offset), (1.0, 0.0), timing.show_duration)
    }

    /// Fade out while rising `offset` above wherever the view currently is.
    pub fn hide(timing: &TransitionTiming, from_alpha: f32, from_offset: f32) -> Self {
        Self::new(
            timing.easing,
            (from_alpha, from_offset),
            (0.0, from_offset - timing.offset),
            timing.hide_duration,
        )
    }

    /// Starting `(alpha, offset)` pair.
    pub fn initial(&self) -> (f32, f32) {
        self.from
    }

    /// Advances by `dt` seconds and returns the new `(alpha, offset)`.
    pub fn apply(&mut self, dt: f32) -> (f32, f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let values = (self.alpha.apply(dt), self.offset.apply(dt));
        if self.has_completed() { self.to } else { values }
    }

    pub fn finish(&mut self) -> (f32, f32) {
        self.elapsed = self.elapsed.max(self.duration);
        self.to
    }

    pub fn has_completed(&self) -> bool {
        self.elapsed >= self.duration
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_starts_transparent_and_below() {
        let show = Transition::show(&TransitionTiming::default());
        assert_eq!(show.initial(), (0.0, DY_OFFSET_ANIMATION));
    }

    #[test]
    fn show_lands_opaque_and_centered() {
        let mut show = Transition::show(&TransitionTiming::default());
        show.apply(0.4);
        assert!(!show.has_completed());
        assert_eq!(show.apply(0.4), (1.0, 0.0));
        assert!(show.has_completed());
    }

    #[test]
    fn hide_rises_from_current_position() {
        let timing = TransitionTiming::default();
        let mut hide = Transition::hide(&timing, 0.6, 30.0);
        assert_eq!(hide.initial(), (0.6, 30.0));
        let (alpha, offset) = hide.finish();
        assert_eq!(alpha, 0.0);
        assert_eq!(offset, 30.0 - DY_OFFSET_ANIMATION);
    }

    #[test]
    fn hide_is_shorter_than_show() {
        let timing = TransitionTiming::default();
        let mut show = Transition::show(&timing);
        let mut hide = Transition::hide(&timing, 1.0, 0.0);
        show.apply(HIDE_DURATION);
        hide.apply(HIDE_DURATION);
        assert!(hide.has_completed());
        assert!(!show.has_completed());
    }

    #[test]
    fn zero_duration_lands_on_the_first_frame() {
        let timing = TransitionTiming {
            hide_duration: 0.0,
            ..TransitionTiming::default()
        };
        let mut hide = Transition::hide(&timing, 1.0, 0.0);
        assert!(hide.has_completed());
        assert_eq!(hide.apply(0.0), (0.0, -DY_OFFSET_ANIMATION));
    }

    #[test]
    fn show_is_partway_before_its_duration() {
        let mut show = Transition::show(&TransitionTiming::default());
        let (alpha, offset) = show.apply(0.2);
        assert!(alpha > 0.0 && alpha < 1.0);
        assert!(offset > 0.0 && offset < DY_OFFSET_ANIMATION);
    }
}
