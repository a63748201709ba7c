// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting cubic segments between oriented endpoints.

use arrayvec::ArrayVec;

use crate::common;
use crate::param_curve::{fixed_step_arclen, fixed_step_travel, DEFAULT_TRAVEL_STEP, MAX_EXTREMA};
use crate::{
    ControlPoint, CubicBez, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema,
    ParamCurveNearest, Point, Vec2,
};

/// Fraction of the endpoint separation used for handle placement.
const OFFSET_RATIO: f64 = 0.3;

/// Tangent alignment threshold for the straight classification.
const STRAIGHT_DOT: f64 = 0.999;

/// A cubic Bézier segment fitted between two oriented endpoints.
///
/// The two interior handles are derived once by [`fit`]: proportional to the
/// endpoint separation, clamped against the crossing of the two tangent
/// lines so that near-parallel tangents cannot fling a handle far past the
/// segment. The fields are private because the handles are derived state;
/// changing an endpoint means fitting a new curve.
///
/// [`fit`]: FittedCubic::fit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedCubic {
    start: ControlPoint,
    end: ControlPoint,
    bez: CubicBez,
}

/// Chord length when the endpoints describe a straight run.
///
/// Straight means the directions point almost exactly at each other and the
/// start direction is aligned with the chord.
fn straight_chord(start: ControlPoint, end: ControlPoint) -> Option<f64> {
    let chord = end.point - start.point;
    let distance = chord.hypot();
    let facing = start.dir.dot(end.dir);
    let along = start.dir.dot(chord);
    (facing < -STRAIGHT_DOT && along > STRAIGHT_DOT * distance).then_some(distance)
}

impl FittedCubic {
    /// Fit a cubic between two oriented endpoints.
    ///
    /// By convention both directions point *into* the curve: `end.dir` is
    /// the tangent the curve arrives against, so a straight west-to-east
    /// run has `start.dir = (1, 0)` and `end.dir = (-1, 0)`.
    ///
    /// Handle placement, with `d` the endpoint separation:
    /// 1. a straight run puts both handles at `0.3 d` along each endpoint's
    ///    own direction;
    /// 2. otherwise, when the tangent rays cross at offsets `(u, v)`, each
    ///    offset is clamped to `[0.1 d, d]` and the handles go to
    ///    `min(u, 0.3 (u + v))` and `min(v, 0.3 (u + v))`, which keeps
    ///    tight turns proportional without overshooting toward a remote
    ///    crossing;
    /// 3. parallel non-straight tangents fall back to `0.3 d`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirbez::{ControlPoint, FittedCubic, ParamCurveArclen, Vec2};
    ///
    /// let seg = FittedCubic::fit(
    ///     ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
    ///     ControlPoint::new((10.0, 0.0), Vec2::new(-1.0, 0.0)),
    /// );
    /// assert!(seg.is_straight());
    /// assert_eq!(seg.arclen(dirbez::DEFAULT_ARCLEN_STEP), 10.0);
    /// ```
    pub fn fit(start: ControlPoint, end: ControlPoint) -> FittedCubic {
        let distance = (end.point - start.point).hypot();
        let (b, c);
        if straight_chord(start, end).is_some() {
            b = start.point + start.dir * (distance * OFFSET_RATIO);
            c = end.point + end.dir * (distance * OFFSET_RATIO);
        } else if start.dir.dot(end.dir) >= -STRAIGHT_DOT {
            match start.intersect_params(end, common::EPSILON) {
                Some((u, v)) => {
                    let u = u.clamp(distance * 0.1, distance);
                    let v = v.clamp(distance * 0.1, distance);
                    let spread = u + v;
                    b = start.point + start.dir * u.min(spread * OFFSET_RATIO);
                    c = end.point + end.dir * v.min(spread * OFFSET_RATIO);
                }
                None => {
                    b = start.point + start.dir * (distance * OFFSET_RATIO);
                    c = end.point + end.dir * (distance * OFFSET_RATIO);
                }
            }
        } else {
            // Nearly opposite tangents that are not aligned with the chord,
            // e.g. a U-turn.
            b = start.point + start.dir * (distance * OFFSET_RATIO);
            c = end.point + end.dir * (distance * OFFSET_RATIO);
        }
        FittedCubic {
            start,
            end,
            bez: CubicBez::new(start.point, b, c, end.point),
        }
    }

    /// The oriented start point.
    #[inline]
    pub fn start(&self) -> ControlPoint {
        self.start
    }

    /// The oriented end point.
    #[inline]
    pub fn end(&self) -> ControlPoint {
        self.end
    }

    /// The underlying four-point curve.
    #[inline]
    pub fn cubic(&self) -> CubicBez {
        self.bez
    }

    /// The mirrored curve, endpoints swapped.
    ///
    /// The endpoint directions are kept as supplied; a caller traversing
    /// the joint from the other side passes already-reversed control
    /// points.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> FittedCubic {
        FittedCubic {
            start: self.end,
            end: self.start,
            bez: self.bez.reversed(),
        }
    }

    /// Whether the endpoints describe a straight run.
    #[inline]
    pub fn is_straight(&self) -> bool {
        straight_chord(self.start, self.end).is_some()
    }

    /// Position and tangent at `t`, packaged as a control point.
    ///
    /// Fast for t = 0, t = 1 and straight runs, where the endpoint
    /// directions are reused instead of evaluating the polynomial. Note the
    /// t = 1 result carries the travel direction, the reverse of the
    /// supplied `end.dir`.
    pub fn at(&self, t: f64) -> ControlPoint {
        if common::approx_eq(t, 0.0, common::EPSILON) || self.is_straight() {
            self.start
        } else if common::approx_eq(t, 1.0, common::EPSILON) {
            self.end.reversed()
        } else {
            ControlPoint::new(self.bez.eval(t), self.bez.deriv_at(t))
        }
    }

    /// Normal and tangent at `t` in one call, both normalized.
    ///
    /// `left` is relative to the direction of travel, as in
    /// [`ParamCurveDeriv::normal`]. Fast for t = 0 or t = 1.
    pub fn normal_tangent(&self, t: f64, left: bool) -> (Vec2, Vec2) {
        let tangent = if common::approx_eq(t, 0.0, common::EPSILON) || self.is_straight() {
            self.start.dir
        } else if common::approx_eq(t, 1.0, common::EPSILON) {
            -self.end.dir
        } else {
            self.tangent(t)
        };
        let mut normal = tangent.turn_neg_90();
        if left {
            normal = -normal;
        }
        (normal, tangent)
    }

    /// Position and tangent at arc length `distance` from the start.
    pub fn travel_point(&self, distance: f64) -> ControlPoint {
        if self.is_straight() {
            return ControlPoint {
                point: self.start.point + self.start.dir * distance,
                dir: self.start.dir,
            };
        }
        let t = self.travel(distance, DEFAULT_TRAVEL_STEP);
        ControlPoint::new(self.bez.eval(t), self.bez.deriv_at(t))
    }
}

impl ParamCurve for FittedCubic {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.bez.eval(t)
    }
}

impl ParamCurveDeriv for FittedCubic {
    #[inline]
    fn deriv_at(&self, t: f64) -> Vec2 {
        self.bez.deriv_at(t)
    }
}

impl ParamCurveArclen for FittedCubic {
    fn arclen(&self, step: f64) -> f64 {
        if let Some(length) = straight_chord(self.start, self.end) {
            return length;
        }
        fixed_step_arclen(self, step)
    }

    fn travel(&self, distance: f64, step: f64) -> f64 {
        if distance <= common::EPSILON {
            return 0.0;
        }
        if let Some(length) = straight_chord(self.start, self.end) {
            return distance / length;
        }
        fixed_step_travel(self, distance, step)
    }
}

impl ParamCurveNearest for FittedCubic {}

impl ParamCurveExtrema for FittedCubic {
    #[inline]
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        self.bez.extrema()
    }
}
