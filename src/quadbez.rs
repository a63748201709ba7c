// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional quadratic Bézier segments.

use arrayvec::ArrayVec;

use crate::common;
use crate::param_curve::{fixed_step_arclen, fixed_step_travel, DEFAULT_TRAVEL_STEP, MAX_EXTREMA};
use crate::{
    ControlPoint, CubicBez, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema,
    ParamCurveNearest, Point, Vec2,
};

/// A quadratic Bézier segment between two oriented endpoints.
///
/// The middle control point is derived, not free: [`fit`] places it where
/// the two endpoint tangent lines cross, falling back to the chord midpoint
/// when the tangents are parallel, so a defined curve exists for every pair
/// of endpoints. Because the middle point is derived the fields are
/// private; changing an endpoint means fitting a new curve.
///
/// Evaluating at t = 0 and t = 1 reproduces the endpoint positions exactly.
///
/// [`fit`]: QuadBez::fit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBez {
    start: ControlPoint,
    end: ControlPoint,
    mid: Point,
}

impl QuadBez {
    /// Fit a quadratic between two oriented endpoints.
    ///
    /// Total over all inputs: parallel tangents fall back to the chord
    /// midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirbez::{ControlPoint, ParamCurve, Point, QuadBez, Vec2};
    ///
    /// // A corner turn: east out of the origin, arriving southbound.
    /// let q = QuadBez::fit(
    ///     ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
    ///     ControlPoint::new((10.0, 10.0), Vec2::new(0.0, -1.0)),
    /// );
    /// assert_eq!(q.mid(), Point::new(10.0, 0.0));
    /// assert_eq!(q.eval(0.0), Point::new(0.0, 0.0));
    /// assert_eq!(q.eval(1.0), Point::new(10.0, 10.0));
    /// ```
    pub fn fit(start: ControlPoint, end: ControlPoint) -> QuadBez {
        let mid = match start.intersect(end, common::EPSILON) {
            Some(crossing) => crossing,
            None => start.point.midpoint(end.point),
        };
        QuadBez { start, end, mid }
    }

    /// Create a quadratic from three raw points, deriving the endpoint
    /// directions from the control polygon legs.
    ///
    /// Coincident neighboring points leave a direction of `NaN`s.
    pub fn from_points(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
    ) -> QuadBez {
        let (p0, p1, p2) = (p0.into(), p1.into(), p2.into());
        QuadBez {
            start: ControlPoint::new(p0, p1 - p0),
            end: ControlPoint::new(p2, p2 - p1),
            mid: p1,
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

    /// The derived middle control point.
    #[inline]
    pub fn mid(&self) -> Point {
        self.mid
    }

    /// Whether the derived middle point sits on the chord, making the
    /// curve a straight segment.
    ///
    /// Straight segments are special-cased by the arc length and travel
    /// queries, which also avoids dividing by a near-zero tangent
    /// magnitude at the flat spot.
    #[inline]
    pub fn is_linear(&self) -> bool {
        (self.end.point - self.mid).approx_eq(self.mid - self.start.point, common::EPSILON)
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this
    /// quadratic.
    pub fn raise(&self) -> CubicBez {
        let p0 = self.start.point;
        let p2 = self.end.point;
        CubicBez::new(
            p0,
            p0 + (self.mid - p0) * (2.0 / 3.0),
            p2 + (self.mid - p2) * (2.0 / 3.0),
            p2,
        )
    }

    /// Position and tangent at `t`, packaged as a control point.
    #[inline]
    pub fn at(&self, t: f64) -> ControlPoint {
        ControlPoint::new(self.eval(t), self.deriv_at(t))
    }

    /// Position and unit normal at `t`, packaged as a control point.
    ///
    /// `left` is relative to the direction of travel, as in
    /// [`ParamCurveDeriv::normal`].
    #[inline]
    pub fn normal_at(&self, t: f64, left: bool) -> ControlPoint {
        ControlPoint {
            point: self.eval(t),
            dir: self.normal(t, left),
        }
    }

    /// Normal and tangent at `t` in one call, both normalized.
    ///
    /// Fast for t = 0 or t = 1, where no evaluation is needed.
    pub fn normal_tangent(&self, t: f64, left: bool) -> (Vec2, Vec2) {
        let tangent = self.tangent(t);
        let mut normal = tangent.turn_neg_90();
        if left {
            normal = -normal;
        }
        (normal, tangent)
    }

    /// Position and tangent at arc length `distance` from the start.
    ///
    /// Straight segments walk the start direction exactly; otherwise the
    /// distance is converted to a parameter by [`travel`] with the default
    /// step.
    ///
    /// [`travel`]: ParamCurveArclen::travel
    pub fn travel_point(&self, distance: f64) -> ControlPoint {
        if self.is_linear() {
            return ControlPoint {
                point: self.start.point + self.start.dir * distance,
                dir: self.start.dir,
            };
        }
        self.at(self.travel(distance, DEFAULT_TRAVEL_STEP))
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let p0 = self.start.point.to_vec2();
        let p1 = self.mid.to_vec2();
        let p2 = self.end.point.to_vec2();
        let mt = 1.0 - t;
        (p0 * (mt * mt) + (p1 * (mt * 2.0) + p2 * t) * t).to_point()
    }
}

impl ParamCurveDeriv for QuadBez {
    #[inline]
    fn deriv_at(&self, t: f64) -> Vec2 {
        (self.mid - self.start.point) * (2.0 * (1.0 - t))
            + (self.end.point - self.mid) * (2.0 * t)
    }
}

impl ParamCurveArclen for QuadBez {
    fn arclen(&self, step: f64) -> f64 {
        if self.is_linear() {
            return (self.end.point - self.start.point).hypot();
        }
        fixed_step_arclen(self, step)
    }

    fn travel(&self, distance: f64, step: f64) -> f64 {
        if distance <= common::EPSILON {
            return 0.0;
        }
        if self.is_linear() {
            return distance / (self.end.point - self.start.point).hypot();
        }
        fixed_step_travel(self, distance, step)
    }
}

impl ParamCurveNearest for QuadBez {}

impl ParamCurveExtrema for QuadBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let d0 = self.mid - self.start.point;
        let d1 = self.end.point - self.mid;
        let dd = d1 - d0;
        for (d0, dd) in [(d0.x, dd.x), (d0.y, dd.y)] {
            if dd != 0.0 {
                let t = -d0 / dd;
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        if result.len() == 2 && result[0] > result[1] {
            result.swap(0, 1);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_curve::DEFAULT_ARCLEN_STEP;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    fn corner() -> QuadBez {
        QuadBez::fit(
            ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
            ControlPoint::new((10.0, 10.0), Vec2::new(0.0, -1.0)),
        )
    }

    #[test]
    fn endpoints_reproduced_exactly() {
        let q = QuadBez::fit(
            ControlPoint::new((3.1, 4.1), Vec2::new(1.0, 2.0)),
            ControlPoint::new((5.3, 5.8), Vec2::new(-1.0, 1.0)),
        );
        assert_eq!(q.eval(0.0), Point::new(3.1, 4.1));
        assert_eq!(q.eval(1.0), Point::new(5.3, 5.8));
    }

    #[test]
    fn parallel_tangents_fall_back_to_midpoint() {
        let q = QuadBez::fit(
            ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
            ControlPoint::new((10.0, 0.0), Vec2::new(-1.0, 0.0)),
        );
        assert_eq!(q.mid(), Point::new(5.0, 0.0));
        assert!(q.is_linear());
        assert!((q.arclen(DEFAULT_ARCLEN_STEP) - 10.0).abs() < 1e-12);
        assert_near(q.eval(0.5), Point::new(5.0, 0.0), 1e-12);
    }

    #[test]
    fn corner_turn() {
        // Genuine corner: the tangent lines cross at (10, 0), away from
        // both endpoints.
        let q = corner();
        assert_eq!(q.mid(), Point::new(10.0, 0.0));
        assert_eq!(q.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(q.eval(1.0), Point::new(10.0, 10.0));
        assert!(!q.is_linear());
    }

    #[test]
    fn perpendicular_tangents_crossing_at_the_start() {
        // East out of the origin, arriving southbound at (0, 10): the
        // tangent lines cross exactly at the start point, so the derived
        // middle collapses onto it and the curve runs up the y axis with a
        // slow start.
        let q = QuadBez::fit(
            ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
            ControlPoint::new((0.0, 10.0), Vec2::new(0.0, -1.0)),
        );
        assert_eq!(q.mid(), Point::new(0.0, 0.0));
        assert_eq!(q.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(q.eval(1.0), Point::new(0.0, 10.0));
        assert!(!q.is_linear());

        // (0, 5) lies on the curve, so the nearest hit is (nearly) exact.
        let nearest = q.nearest(Point::new(0.0, 5.0));
        let hit = q.eval(nearest.t);
        assert!(nearest.distance_sq < 1e-6);
        assert!(hit.approx_eq(Point::new(0.0, 5.0), 1e-2));
    }

    #[test]
    fn from_points_derives_directions() {
        let q = QuadBez::from_points((0.0, 0.0), (5.0, 0.0), (5.0, 5.0));
        assert_eq!(q.start().dir, Vec2::new(1.0, 0.0));
        assert_eq!(q.end().dir, Vec2::new(0.0, 1.0));
        assert_eq!(q.mid(), Point::new(5.0, 0.0));
    }

    #[test]
    fn deriv_matches_finite_difference() {
        let q = corner();
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = q.eval(t);
            let p1 = q.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = q.deriv_at(t);
            // The forward difference carries an error of |f''| * delta / 2,
            // around 1.4e-5 for a ten-meter corner.
            assert!((d - d_approx).hypot() < delta * 20.0);
        }
    }

    #[test]
    fn travel_is_monotonic() {
        let q = corner();
        let total = q.arclen(DEFAULT_ARCLEN_STEP);
        let mut last = 0.0;
        for i in 0..=20 {
            let d = total * (i as f64) / 20.0;
            let t = q.travel(d, DEFAULT_TRAVEL_STEP);
            assert!(t >= last, "travel went backwards at distance {d}");
            last = t;
        }
        assert_eq!(q.travel(0.0, DEFAULT_TRAVEL_STEP), 0.0);
        assert_eq!(q.travel(-3.0, DEFAULT_TRAVEL_STEP), 0.0);
    }

    #[test]
    fn travel_point_on_linear() {
        let q = QuadBez::fit(
            ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
            ControlPoint::new((10.0, 0.0), Vec2::new(-1.0, 0.0)),
        );
        let cp = q.travel_point(4.0);
        assert_near(cp.point, Point::new(4.0, 0.0), 1e-12);
        assert_eq!(cp.dir, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn nearest_is_idempotent_on_curve_points() {
        let q = corner();
        for &t0 in &[0.25, 0.5, 0.75] {
            let nearest = q.nearest(q.eval(t0));
            // Within the refinement tolerance: 4 halvings from 1/32.
            assert!(
                (nearest.t - t0).abs() < 1.0 / 32.0,
                "t = {} for t0 = {t0}",
                nearest.t
            );
            assert!(nearest.distance_sq < 1e-2);
        }
    }

    #[test]
    fn normals_are_sideways() {
        let q = corner();
        for &t in &[0.0, 0.3, 0.7, 1.0] {
            let (normal, tangent) = q.normal_tangent(t, false);
            assert!(normal.dot(tangent).abs() < 1e-9);
            assert_eq!(q.normal_at(t, true).dir, -normal);
        }
    }

    #[test]
    fn raise_preserves_the_curve() {
        let q = corner();
        let c = q.raise();
        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert_near(q.eval(t), c.eval(t), 1e-12);
        }
    }

    #[test]
    fn extrema_of_a_parabola() {
        // y = x² over [-1, 1] has its single extremum at the vertex.
        let q = QuadBez::from_points((-1.0, 1.0), (0.0, -1.0), (1.0, 1.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-12);
        assert!(q.deriv_at(extrema[0]).y.abs() < 1e-9);
    }
}
