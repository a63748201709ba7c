// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use arrayvec::ArrayVec;

use crate::common;
use crate::{Line, Point, Vec2};

/// The default sampling step for fixed-step arc length rectification.
pub const DEFAULT_ARCLEN_STEP: f64 = 0.1;

/// The default sampling step for distance-to-parameter travel.
pub const DEFAULT_TRAVEL_STEP: f64 = 1.0 / 16.0;

/// The maximum number of extrema a curve in this crate can have.
pub const MAX_EXTREMA: usize = 4;

// Tuning of the two-phase nearest-point search. These values are load
// bearing: curve fitting in existing network editors was calibrated against
// exactly this sampling density, so changing them changes which `t` a query
// settles on.
const NEAREST_CHORDS: usize = 16;
const NEAREST_REFINE_ROUNDS: usize = 4;
const NEAREST_START_PRECISION: f64 = 1.0 / 32.0;

/// The nearest position on a curve to some point.
#[derive(Clone, Copy, Debug)]
pub struct Nearest {
    /// The square of the distance from the nearest position on the curve
    /// to the given point.
    pub distance_sq: f64,
    /// The param location of the nearest position on the curve.
    pub t: f64,
}

/// A curve parametrized by a scalar.
///
/// The parameter is generally in the range [0..1]; values outside that
/// range extrapolate via the same polynomial formulas rather than erroring.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;
}

/// A differentiable parametrized curve.
pub trait ParamCurveDeriv: ParamCurve {
    /// The derivative of the curve at parameter `t`.
    ///
    /// The result is un-normalized; its magnitude is the parametric speed.
    fn deriv_at(&self, t: f64) -> Vec2;

    /// The normalized tangent at `t`, going from start to end.
    ///
    /// Produces `NaN`s where the derivative vanishes.
    #[inline]
    fn tangent(&self, t: f64) -> Vec2 {
        self.deriv_at(t).normalize()
    }

    /// The unit normal at `t`.
    ///
    /// `left` selects the side relative to the direction of travel: the
    /// right normal is the clockwise quarter turn of the tangent, the left
    /// normal its negation.
    #[inline]
    fn normal(&self, t: f64, left: bool) -> Vec2 {
        let n = self.tangent(t).turn_neg_90();
        if left {
            -n
        } else {
            n
        }
    }
}

/// A parametrized curve that can have its arc length measured.
///
/// Both methods use fixed-step sampling, so the cost is O(1/step) and
/// deterministic, and accuracy is bounded by `step` rather than by an
/// accuracy parameter. Curves with a cheap straight-line classification
/// override them to return exact results for straight runs.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve, by summing chords at `step` spacing.
    ///
    /// An accumulated length approximately zero collapses to exactly 0.
    /// [`DEFAULT_ARCLEN_STEP`] is the conventional step.
    fn arclen(&self, step: f64) -> f64 {
        fixed_step_arclen(self, step)
    }

    /// Solve for the parameter at arc length `distance` from the start.
    ///
    /// The inverse of [`arclen`], by the same fixed-step walk: once the
    /// remaining distance lands inside a chord, the parameter is
    /// interpolated linearly within that step. Monotonic non-decreasing in
    /// `distance`; a distance of zero or less (within [`common::EPSILON`])
    /// returns 0. [`DEFAULT_TRAVEL_STEP`] is the conventional step.
    ///
    /// [`arclen`]: Self::arclen
    fn travel(&self, distance: f64, step: f64) -> f64 {
        fixed_step_travel(self, distance, step)
    }
}

/// A parametrized curve that reports the nearest point.
pub trait ParamCurveNearest: ParamCurve {
    /// Find the position on the curve nearest the given point.
    ///
    /// The default is a two-phase search: a coarse pass over 16 uniform
    /// chords keeps the best chord-local fraction, then four rounds of
    /// bracket refinement move the parameter toward the closer side while
    /// halving the bracket. It converges to a local minimum; for
    /// gently-curving road geometry that is the global one.
    fn nearest(&self, p: Point) -> Nearest {
        let mut best = Nearest {
            distance_sq: f64::MAX,
            t: 0.0,
        };
        let mut prev = self.eval(0.0);
        for i in 1..=NEAREST_CHORDS {
            let point = self.eval(i as f64 / NEAREST_CHORDS as f64);
            let chord = Line::new(prev, point).nearest(p);
            if chord.distance_sq < best.distance_sq {
                best.distance_sq = chord.distance_sq;
                best.t = ((i - 1) as f64 + chord.t) / NEAREST_CHORDS as f64;
            }
            prev = point;
        }

        let mut t = best.t;
        let mut precision = NEAREST_START_PRECISION;
        for _ in 0..NEAREST_REFINE_ROUNDS {
            let below = self.eval((t - precision).max(0.0));
            let at = self.eval(t);
            let above = self.eval((t + precision).min(1.0));
            let before = Line::new(below, at).nearest(p);
            let after = Line::new(at, above).nearest(p);
            t = if before.distance_sq >= after.distance_sq {
                (t + precision * after.t).min(1.0)
            } else {
                (t - precision * (1.0 - before.t)).max(0.0)
            };
            precision *= 0.5;
        }
        Nearest {
            distance_sq: self.eval(t).distance_squared(p),
            t,
        }
    }
}

/// A parametrized curve that reports its axis-aligned extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the extrema of the curve.
    ///
    /// Only extrema within the interior of the curve count; the parameter
    /// values are in ascending order. The x/y extent of the curve over
    /// [0..1] is spanned by its endpoints plus the positions at these
    /// parameters.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA>;
}

pub(crate) fn fixed_step_arclen<C: ParamCurve>(curve: &C, step: f64) -> f64 {
    let mut length = 0.0;
    let mut prev = curve.eval(0.0);
    let mut t = step;
    while t < 1.0 {
        let p = curve.eval(t);
        length += (p - prev).hypot();
        prev = p;
        t += step;
    }
    length += (curve.eval(1.0) - prev).hypot();
    if common::approx_eq(length, 0.0, common::EPSILON) {
        return 0.0;
    }
    length
}

pub(crate) fn fixed_step_travel<C: ParamCurve>(curve: &C, distance: f64, step: f64) -> f64 {
    if distance <= common::EPSILON {
        return 0.0;
    }
    let mut remaining = distance;
    let mut prev = curve.eval(0.0);
    let mut t = step;
    while t < 1.0 {
        let p = curve.eval(t);
        let len = (p - prev).hypot();
        if remaining > len - common::EPSILON {
            remaining -= len;
            prev = p;
            t += step;
        } else {
            // The target lands inside this chord.
            return t - step + (remaining / len) * step;
        }
    }
    t.min(1.0)
}
