// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{ControlPoint, Nearest, ParamCurve, ParamCurveNearest, Point, Vec2};

/// A line through two points.
///
/// Evaluated as a curve ([`eval`], [`nearest`]) it is the finite segment
/// from `p0` to `p1`; the remaining queries treat it as the infinite line
/// through both points.
///
/// [`eval`]: ParamCurve::eval
/// [`nearest`]: ParamCurveNearest::nearest
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The length of the segment.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The midpoint of the line.
    ///
    /// This is the same as calling [`Point::midpoint`] with
    /// the endpoints of this line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// This line as an oriented point at `p0`.
    ///
    /// The direction is normalized, so the result has `NaN`s when the two
    /// points coincide.
    #[inline]
    pub fn to_control_point(self) -> ControlPoint {
        ControlPoint::new(self.p0, self.p1 - self.p0)
    }

    /// Computes the point where two lines, extended to infinity, would
    /// cross.
    ///
    /// `None` when the lines are parallel within `eps`.
    pub fn crossing_point(self, other: Line, eps: f64) -> Option<Point> {
        self.to_control_point()
            .intersect(other.to_control_point(), eps)
    }

    /// Squared distance from `p` to this line, extended to infinity.
    #[inline]
    pub fn distance_squared(self, p: Point) -> f64 {
        self.to_control_point().distance_squared(p)
    }

    /// Is this line [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl From<(Point, Vec2)> for Line {
    #[inline(always)]
    fn from((origin, displacement): (Point, Vec2)) -> Self {
        Line::new(origin, origin + displacement)
    }
}

impl From<ControlPoint> for Line {
    #[inline(always)]
    fn from(cp: ControlPoint) -> Self {
        cp.to_line()
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }
}

impl ParamCurveNearest for Line {
    /// Exact projection onto the segment, clamped to its endpoints.
    #[inline]
    fn nearest(&self, p: Point) -> Nearest {
        let d = self.p1 - self.p0;
        let v = p - self.p0;

        // Projection parameter of `p` onto s(t) = (1 - t) * p0 + t * p1.
        // This is infinite or NaN when the segment has zero length; the
        // clamp below sends those to 0.
        let t = d.dot(v) / d.hypot2();
        let t = t.max(0.).min(1.);

        let distance_sq = (v - t * d).hypot2();
        Nearest { distance_sq, t }
    }
}
