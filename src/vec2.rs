// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::common::approx_eq;
use crate::Point;

/// A 2D vector.
///
/// This is intended primarily for a vector in the mathematical sense, but it
/// can be interpreted as a translation, and converted to and from a
/// [`Point`] (vector relative to the origin).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The vector (0, 0).
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    /// Create a new vector.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Convert this vector into a [`Point`].
    #[inline(always)]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product of two vectors.
    ///
    /// This is the planar determinant `x1 * y2 - y1 * x2`, the 2D stand-in
    /// for a cross product. It is signed so that `(1, 0) × (0, 1) = 1`.
    ///
    /// The following relations hold:
    ///
    /// `u.cross(v) = -v.cross(u)`
    ///
    /// `v.cross(v) = 0.0`
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Magnitude of vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirbez::Vec2;
    /// let v = Vec2::new(3.0, 4.0);
    /// assert_eq!(v.hypot(), 5.0);
    /// ```
    #[inline]
    pub fn hypot(self) -> f64 {
        // Avoid f64::hypot as it calls a slow library function.
        self.hypot2().sqrt()
    }

    /// Magnitude squared of vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirbez::Vec2;
    /// let v = Vec2::new(3.0, 4.0);
    /// assert_eq!(v.hypot2(), 25.0);
    /// ```
    #[inline]
    pub fn hypot2(self) -> f64 {
        self.dot(self)
    }

    /// Angle of vector.
    ///
    /// If the vector is interpreted as a complex number, this is the
    /// argument. The angle is expressed in radians.
    #[inline]
    pub fn atan2(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The signed angle from `self` to `other`, in radians.
    ///
    /// The result is in (-π, π] and is positive when `other` lies
    /// counter-clockwise of `self`. The arguments are not interchangeable;
    /// swapping them negates the result. Neither vector needs to be
    /// normalized.
    #[inline]
    pub fn angle_to(self, other: Vec2) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// The unsigned angle between `self` and `other`, in radians.
    ///
    /// The result is in [0, π] and the arguments are interchangeable.
    #[inline]
    pub fn angle_between(self, other: Vec2) -> f64 {
        let magnitude = (self.hypot2() * other.hypot2()).sqrt();
        (self.dot(other) / magnitude).acos()
    }

    /// A unit vector of the given angle.
    ///
    /// With `th` at zero, the result is the positive X unit vector, and at
    /// π/2, it is the positive Y unit vector. The angle is expressed in
    /// radians.
    #[inline]
    pub fn from_angle(th: f64) -> Vec2 {
        let (th_sin, th_cos) = th.sin_cos();
        Vec2 {
            x: th_cos,
            y: th_sin,
        }
    }

    /// Linearly interpolate between two vectors.
    #[inline]
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        self + t * (other - self)
    }

    /// Returns a vector of [magnitude] 1.0 with the same angle as `self`;
    /// i.e. a unit/direction vector.
    ///
    /// This produces `NaN` values when the magnitude is `0`; use
    /// [`try_normalize`] when the input is not known to be nonzero.
    ///
    /// [magnitude]: Self::hypot
    /// [`try_normalize`]: Self::try_normalize
    #[inline]
    pub fn normalize(self) -> Vec2 {
        self / self.hypot()
    }

    /// Checked variant of [`normalize`], returning `None` for the zero
    /// vector instead of producing `NaN`s.
    ///
    /// [`normalize`]: Self::normalize
    #[inline]
    pub fn try_normalize(self) -> Option<Vec2> {
        let length = self.hypot();
        if length == 0.0 {
            return None;
        }
        Some(self / length)
    }

    /// Whether this vector has magnitude 1 within `eps`.
    #[inline]
    pub fn is_normalized(self, eps: f64) -> bool {
        approx_eq(self.hypot(), 1.0, eps)
    }

    /// Approximate equality within `eps`.
    ///
    /// The comparison is on the squared magnitude of the difference, so the
    /// test region is a disc of radius `eps` around `other`.
    #[inline]
    pub fn approx_eq(self, other: Vec2, eps: f64) -> bool {
        (self - other).hypot2() < eps * eps
    }

    /// Turn by 90 degrees counter-clockwise.
    ///
    /// [`turn_90`] and [`turn_neg_90`] are mutual inverses and preserve the
    /// magnitude exactly; no normalization happens inside a turn. The
    /// following relations hold:
    ///
    /// `u.dot(v) = u.cross(v.turn_90())`
    ///
    /// `u.cross(v) = u.turn_90().dot(v)`
    ///
    /// [`turn_90`]: Self::turn_90
    /// [`turn_neg_90`]: Self::turn_neg_90
    #[inline]
    pub fn turn_90(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Turn by 90 degrees clockwise.
    ///
    /// The inverse of [`turn_90`].
    ///
    /// [`turn_90`]: Self::turn_90
    #[inline]
    pub fn turn_neg_90(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Is this `Vec2` [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this `Vec2` [`NaN`]?
    ///
    /// [`NaN`]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Vec2 {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline(always)]
    fn from(v: Vec2) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        *self = Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        *self = Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: f64) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = Vec2 {
            x: self.x * other,
            y: self.y * other,
        };
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        other * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    /// Note: division by a scalar is implemented by multiplying by the
    /// reciprocal.
    ///
    /// This is more efficient but has different roundoff behavior than
    /// division.
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: f64) -> Vec2 {
        self * other.recip()
    }
}

impl DivAssign<f64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        self.mul_assign(other.recip());
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "𝐯=(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vec2> for mint::Vector2<f64> {
    #[inline(always)]
    fn from(p: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vec2 {
    #[inline(always)]
    fn from(p: mint::Vector2<f64>) -> Vec2 {
        Vec2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn display() {
        let v = Vec2::new(1.2332421, 532.10721213123);
        let s = format!("{v:.2}");
        assert_eq!(s.as_str(), "𝐯=(1.23, 532.11)");
    }

    #[test]
    fn cross_sign() {
        let v = Vec2::new(1., 0.).cross(Vec2::new(0., 1.));
        assert_eq!(v, 1.);
    }

    #[test]
    fn turns() {
        let u = Vec2::new(0.1, 0.2);
        let turned = u.turn_90();
        // These should be exactly equal by IEEE rules, might fail
        // in fastmath conditions.
        assert_eq!(u.hypot(), turned.hypot());
        assert_eq!(turned.turn_neg_90(), u);
        assert_eq!(u.turn_neg_90().turn_90(), u);
        const EPSILON: f64 = 1e-12;
        assert!((u.atan2() + FRAC_PI_2 - turned.atan2()).abs() < EPSILON);
    }

    #[test]
    fn angles() {
        const EPSILON: f64 = 1e-12;
        let right = Vec2::new(1., 0.);
        let up = Vec2::new(0., 1.);
        assert!((right.angle_to(up) - FRAC_PI_2).abs() < EPSILON);
        assert!((up.angle_to(right) + FRAC_PI_2).abs() < EPSILON);
        // Exactly opposite vectors land on the +π end of the range.
        assert!((right.angle_to(-right) - PI).abs() < EPSILON);
        assert!((right.angle_between(up) - FRAC_PI_2).abs() < EPSILON);
        assert!((up.angle_between(right) - FRAC_PI_2).abs() < EPSILON);
        // angle_between works on un-normalized input.
        assert!((Vec2::new(5., 0.).angle_between(Vec2::new(0., 0.25)) - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn normalize_checked() {
        assert_eq!(Vec2::ZERO.try_normalize(), None);
        let v = Vec2::new(3.0, -4.0).try_normalize().unwrap();
        assert!(v.is_normalized(1e-12));
        assert!(Vec2::ZERO.normalize().is_nan());
    }
}
