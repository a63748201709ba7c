// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::param_curve::MAX_EXTREMA;
use crate::{
    ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema, ParamCurveNearest, Point,
    Vec2,
};

/// A single cubic Bézier segment.
///
/// Four free control points; this is the raw evaluator underneath
/// [`FittedCubic`], which is where the interior points get derived from
/// oriented endpoints.
///
/// [`FittedCubic`]: crate::FittedCubic
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first interior control point.
    pub p1: Point,
    /// The second interior control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The same curve traversed in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> CubicBez {
        CubicBez {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }

    /// Is this curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this curve [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let p0 = self.p0.to_vec2();
        let p1 = self.p1.to_vec2();
        let p2 = self.p2.to_vec2();
        let p3 = self.p3.to_vec2();
        let mt = 1.0 - t;
        (p0 * (mt * mt * mt) + (p1 * (mt * mt * 3.0) + (p2 * (mt * 3.0) + p3 * t) * t) * t)
            .to_point()
    }
}

impl ParamCurveDeriv for CubicBez {
    #[inline]
    fn deriv_at(&self, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * mt * mt)
            + (self.p2 - self.p1) * (6.0 * mt * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }
}

impl ParamCurveArclen for CubicBez {}

impl ParamCurveNearest for CubicBez {}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        fn one_coord(result: &mut ArrayVec<f64, MAX_EXTREMA>, d0: f64, d1: f64, d2: f64) {
            let a = d0 - 2.0 * d1 + d2;
            let b = 2.0 * (d1 - d0);
            let c = d0;
            for &t in &solve_quadratic(c, b, a) {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        one_coord(&mut result, d0.x, d1.x, d2.x);
        one_coord(&mut result, d0.y, d1.y, d2.y);
        result.sort_unstable_by(f64::total_cmp);
        result
    }
}
