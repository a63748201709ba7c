// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriented curve endpoints.

use crate::common::approx_eq;
use crate::{Line, Point, Vec2};

/// A point with a unit direction: an oriented curve endpoint.
///
/// This is the vocabulary type handed to the curve-fitting constructors by
/// network-topology code: the position of a segment join plus the tangent
/// the curve must leave it with. A control point can equally be read as the
/// infinite line through `point` along `dir`, which is how the intersection
/// and projection queries below treat it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint {
    /// The position of the endpoint.
    pub point: Point,
    /// The unit tangent direction. Kept normalized by the constructor; the
    /// projection queries assume it.
    pub dir: Vec2,
}

impl ControlPoint {
    /// Create a new control point, normalizing `dir`.
    ///
    /// `dir` must be nonzero; a zero direction normalizes to `NaN`s. Use
    /// [`Vec2::try_normalize`] first when the input is not trusted.
    #[inline]
    pub fn new(point: impl Into<Point>, dir: Vec2) -> ControlPoint {
        ControlPoint {
            point: point.into(),
            dir: dir.normalize(),
        }
    }

    /// The same point looking the opposite way.
    ///
    /// Used when traversing a curve from the far end.
    #[inline]
    pub fn reversed(self) -> ControlPoint {
        ControlPoint {
            point: self.point,
            dir: -self.dir,
        }
    }

    /// Rotate the direction 90 degrees counter-clockwise, point unchanged.
    #[inline]
    pub fn turned_90(self) -> ControlPoint {
        ControlPoint {
            point: self.point,
            dir: self.dir.turn_90(),
        }
    }

    /// Rotate the direction 90 degrees clockwise, point unchanged.
    #[inline]
    pub fn turned_neg_90(self) -> ControlPoint {
        ControlPoint {
            point: self.point,
            dir: self.dir.turn_neg_90(),
        }
    }

    /// Where the infinite lines through `self` and `other` cross.
    ///
    /// Returns `None` when the directions are parallel (or anti-parallel)
    /// within `eps`, so a caller can never mistake a placeholder for a real
    /// crossing.
    pub fn intersect(self, other: ControlPoint, eps: f64) -> Option<Point> {
        let det = self.dir.cross(other.dir);
        if approx_eq(det, 0.0, eps) {
            // The lines are parallel.
            return None;
        }
        let det1 = self.point.to_vec2().cross(self.dir);
        let det2 = other.point.to_vec2().cross(other.dir);
        Some(((self.dir * det2 - other.dir * det1) / det).to_point())
    }

    /// Signed distances along each direction to the crossing of the two
    /// infinite lines.
    ///
    /// Returns `(u, v)` such that `self.point + self.dir * u` equals
    /// `other.point + other.dir * v`, or `None` for parallel directions
    /// within `eps`. Since directions are unit length the parameters are
    /// plain distances; either can be negative when the crossing lies
    /// behind its endpoint.
    pub fn intersect_params(self, other: ControlPoint, eps: f64) -> Option<(f64, f64)> {
        let det = self.dir.cross(other.dir);
        if approx_eq(det, 0.0, eps) {
            return None;
        }
        let d = other.point - self.point;
        Some((d.cross(other.dir) / det, d.cross(self.dir) / det))
    }

    /// Project `p` onto the infinite line through this control point.
    #[inline]
    pub fn closest_point(self, p: Point) -> Point {
        debug_assert!(
            self.dir.is_normalized(crate::common::EPSILON),
            "projection needs a unit direction"
        );
        let along = (p - self.point).dot(self.dir);
        self.point + self.dir * along
    }

    /// Squared distance from `p` to the infinite line through this control
    /// point.
    #[inline]
    pub fn distance_squared(self, p: Point) -> f64 {
        debug_assert!(
            self.dir.is_normalized(crate::common::EPSILON),
            "projection needs a unit direction"
        );
        let ap = p - self.point;
        let along = ap.dot(self.dir);
        ap.hypot2() - along * along
    }

    /// The infinite line through this control point, as a [`Line`].
    #[inline]
    pub fn to_line(self) -> Line {
        Line::new(self.point, self.point + self.dir)
    }
}

/// A point with two independent unit directions.
///
/// Used where a joint carries two tangent families, e.g. the two sides of
/// an asymmetric junction. The two [`ControlPoint`] views share the point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleControlPoint {
    /// The shared position.
    pub point: Point,
    /// The first unit direction.
    pub dir1: Vec2,
    /// The second unit direction.
    pub dir2: Vec2,
}

impl DoubleControlPoint {
    /// Create a new double control point, normalizing both directions.
    ///
    /// The same nonzero-direction precondition as [`ControlPoint::new`]
    /// applies to both directions.
    #[inline]
    pub fn new(point: impl Into<Point>, dir1: Vec2, dir2: Vec2) -> DoubleControlPoint {
        DoubleControlPoint {
            point: point.into(),
            dir1: dir1.normalize(),
            dir2: dir2.normalize(),
        }
    }

    /// The first tangent family as a control point.
    #[inline]
    pub fn control_point1(self) -> ControlPoint {
        ControlPoint {
            point: self.point,
            dir: self.dir1,
        }
    }

    /// The second tangent family as a control point.
    #[inline]
    pub fn control_point2(self) -> ControlPoint {
        ControlPoint {
            point: self.point,
            dir: self.dir2,
        }
    }

    /// The same point with both directions negated.
    #[inline]
    pub fn reversed(self) -> DoubleControlPoint {
        DoubleControlPoint {
            point: self.point,
            dir1: -self.dir1,
            dir2: -self.dir2,
        }
    }

    /// Rotate both directions 90 degrees counter-clockwise.
    #[inline]
    pub fn turned_90(self) -> DoubleControlPoint {
        DoubleControlPoint {
            point: self.point,
            dir1: self.dir1.turn_90(),
            dir2: self.dir2.turn_90(),
        }
    }

    /// Rotate both directions 90 degrees clockwise.
    #[inline]
    pub fn turned_neg_90(self) -> DoubleControlPoint {
        DoubleControlPoint {
            point: self.point,
            dir1: self.dir1.turn_neg_90(),
            dir2: self.dir2.turn_neg_90(),
        }
    }

    /// Squared distance from `p` to the nearer of the two infinite lines.
    #[inline]
    pub fn distance_squared(self, p: Point) -> f64 {
        let d1 = self.control_point1().distance_squared(p);
        let d2 = self.control_point2().distance_squared(p);
        d1.min(d2)
    }

    /// Distance from `p` to the nearer of the two infinite lines.
    #[inline]
    pub fn distance(self, p: Point) -> f64 {
        self.distance_squared(p).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EPSILON;

    #[test]
    fn normalizes_on_construction() {
        let cp = ControlPoint::new((1.0, 2.0), Vec2::new(0.0, -3.0));
        assert_eq!(cp.dir, Vec2::new(0.0, -1.0));
        assert!(cp.dir.is_normalized(EPSILON));
    }

    #[test]
    fn reverse_roundtrip() {
        let cp = ControlPoint::new((4.0, -1.0), Vec2::new(3.0, 4.0));
        let back = cp.reversed().reversed();
        assert_eq!(back.point, cp.point);
        assert!(back.dir.approx_eq(cp.dir, 1e-12));
    }

    #[test]
    fn perpendicular_intersection() {
        // A horizontal line through the origin and a vertical line through
        // (3, 7) cross at (3, 0).
        let a = ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0));
        let b = ControlPoint::new((3.0, 7.0), Vec2::new(0.0, -1.0));
        let crossing = a.intersect(b, EPSILON).unwrap();
        assert!(crossing.approx_eq(Point::new(3.0, 0.0), 1e-9));

        let (u, v) = a.intersect_params(b, EPSILON).unwrap();
        assert!((u - 3.0).abs() < 1e-9);
        assert!((v - 7.0).abs() < 1e-9);
        assert!(a.point.lerp(a.point + a.dir, u).approx_eq(crossing, 1e-9));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = ControlPoint::new((0.0, 5.0), Vec2::new(1.0, 1.0));
        assert_eq!(a.intersect(b, EPSILON), None);
        // Anti-parallel is parallel too.
        assert_eq!(a.intersect(b.reversed(), EPSILON), None);
        assert_eq!(a.intersect_params(b, EPSILON), None);
    }

    #[test]
    fn intersection_behind_the_endpoint() {
        // Crossing lies against the start direction: u comes out negative.
        let a = ControlPoint::new((0.0, 0.0), Vec2::new(-1.0, 0.0));
        let b = ControlPoint::new((3.0, 7.0), Vec2::new(0.0, -1.0));
        let (u, v) = a.intersect_params(b, EPSILON).unwrap();
        assert!((u + 3.0).abs() < 1e-9);
        assert!((v - 7.0).abs() < 1e-9);
    }

    #[test]
    fn line_projection() {
        let cp = ControlPoint::new((0.0, 2.0), Vec2::new(1.0, 0.0));
        let p = Point::new(5.0, 6.0);
        assert!(cp.closest_point(p).approx_eq(Point::new(5.0, 2.0), 1e-12));
        assert!((cp.distance_squared(p) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn double_control_point_views() {
        let dcp = DoubleControlPoint::new((1.0, 1.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 5.0));
        assert_eq!(dcp.control_point1().dir, Vec2::new(1.0, 0.0));
        assert_eq!(dcp.control_point2().dir, Vec2::new(0.0, 1.0));
        assert_eq!(dcp.control_point1().point, dcp.control_point2().point);

        let back = dcp.reversed().reversed();
        assert!(back.dir1.approx_eq(dcp.dir1, 1e-12));
        assert!(back.dir2.approx_eq(dcp.dir2, 1e-12));

        // (4, 2) is 1 away from the horizontal line and 3 from the vertical.
        let p = Point::new(4.0, 2.0);
        assert!((dcp.distance_squared(p) - 1.0).abs() < 1e-9);
        assert!((dcp.distance(p) - 1.0).abs() < 1e-9);
    }
}
