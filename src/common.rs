// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations.

use arrayvec::ArrayVec;

/// The shared tolerance for approximate geometric comparisons.
///
/// Repeated normalization and rotation leave floating-point drift in
/// directions and positions, so downstream geometry compares against a
/// tolerance instead of testing exact equality. Routines that take an `eps`
/// parameter accept a per-call tolerance; this value is the conventional
/// choice.
pub const EPSILON: f64 = 1e-3;

/// Symmetric interval comparison of two scalars.
///
/// Returns `true` when `a` and `b` differ by strictly less than `eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    let diff = a - b;
    diff > -eps && diff < eps
}

/// Is `x` a power of two?
#[inline]
pub const fn is_pow2(x: u64) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Is `x` a positive power of two?
///
/// Negative values are never powers of two.
#[inline]
pub const fn is_pow2_signed(x: i64) -> bool {
    x > 0 && x & (x - 1) == 0
}

/// Find real roots of a quadratic equation.
///
/// Returns values of x for which c0 + c1 x + c2 x² = 0. When the quadratic
/// coefficient is zero or nearly so, the linear equation is solved instead.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as a linear equation.
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            // The equation is degenerate; pick a root arbitrarily.
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1;
    if !arg.is_finite() {
        // Likely overflow computing the discriminant; one root is near
        // -sc1, the other near -sc0 / sc1.
        root1 = -sc1;
    } else if arg < 0.0 {
        return result;
    } else if arg == 0.0 {
        result.push(-0.5 * sc1);
        return result;
    } else {
        // See https://math.stackexchange.com/questions/866331
        root1 = -0.5 * (sc1 + arg.sqrt().copysign(sc1));
    }
    let root2 = sc0 / root1;
    if root2.is_finite() {
        // Sort just to be friendly and make results deterministic.
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}
