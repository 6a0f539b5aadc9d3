//! Named easing curves for deck files, mapped onto raylib's easers.
//!
//! Every curve has raylib's easer signature `(t, b, c, d)`: elapsed time,
//! start value, change, and duration. They can be handed straight to
//! [`raylib::ease::Tween::new`].

use raylib::ease;
use serde::{Deserialize, Serialize};

/// Easer with raylib's `(t, b, c, d)` signature.
pub type Easer = fn(f32, f32, f32, f32) -> f32;

/// Timing curve used by show and hide transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    CubicOut,
    /// `cubic-bezier(0, 0, 0.58, 1)`, the platform "ease out" curve.
    #[default]
    EaseOut,
}

impl Easing {
    pub fn easer(self) -> Easer {
        match self {
            Easing::Linear => ease::linear_none,
            Easing::CubicOut => ease::cubic_out,
            Easing::EaseOut => ease_out,
        }
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    pub fn evaluate(self, t: f32) -> f32 {
        (self.easer())(t.clamp(0.0, 1.0), 0.0, 1.0, 1.0)
    }
}

/// CSS `ease-out`, in raylib's easer form.
pub fn ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    b + c * cubic_bezier(0.0, 0.0, 0.58, 1.0, t / d)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson on x(t) = progress, then read y at that t
    let mut t = progress;
    for _ in 0..8 {
        let x = bezier(x1, x2, t) - progress;
        if x.abs() < 1e-6 {
            break;
        }
        let dx = bezier_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    bezier(y1, y2, t)
}

// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn ease_out_boundaries_and_shape() {
        let ease = Easing::EaseOut;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Fast start, slow end
        assert!(ease.evaluate(0.25) > 0.25);
        assert!(ease.evaluate(0.5) > 0.5);
        assert!(ease.evaluate(0.25) < ease.evaluate(0.5));
        assert!(ease.evaluate(0.5) < ease.evaluate(0.75));
    }

    #[test]
    fn named_curves_use_raylib_easers() {
        assert!(approx_eq(Easing::CubicOut.evaluate(0.5), 0.875));
        assert!(approx_eq(Easing::Linear.evaluate(0.3), 0.3));
    }

    #[test]
    fn evaluate_clamps_input() {
        assert!(approx_eq(Easing::EaseOut.evaluate(-1.0), 0.0));
        assert!(approx_eq(Easing::EaseOut.evaluate(2.0), 1.0));
    }

    #[test]
    fn ease_out_scales_to_start_change_and_duration() {
        assert!(approx_eq(ease_out(0.0, 110.0, -110.0, 0.8), 110.0));
        assert!(approx_eq(ease_out(0.8, 110.0, -110.0, 0.8), 0.0));
        assert!(approx_eq(ease_out(0.0, 1.0, -1.0, 0.0), 0.0));
    }

    #[test]
    fn ease_out_drives_a_raylib_tween() {
        let mut tween = ease::Tween::new(Easing::EaseOut.easer(), 0.0, 10.0, 1.0);
        let halfway = tween.apply(0.5);
        assert!(halfway > 5.0 && halfway < 10.0);
    }
}
