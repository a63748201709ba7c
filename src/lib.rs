// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D directional curves for road and rail network editors.
//!
//! Dirbez contains the geometry kernel behind drawing smooth road or track
//! connections between two arbitrary oriented endpoints. Its vocabulary
//! type is the [`ControlPoint`] — a point plus a unit tangent direction —
//! and its two fitting routines turn a pair of control points into a
//! quadratic ([`QuadBez`]) or cubic ([`FittedCubic`]) Bézier segment with
//! all interior control points derived. The `ParamCurve*` traits then
//! answer the queries placement and hit-testing code needs: position,
//! tangent and normal at a parameter, arc length, distance-based travel,
//! and closest point.
//!
//! The numerical routines are fixed-step — bounded sample counts and
//! refinement rounds rather than adaptive subdivision — so every query has
//! deterministic cost, which is what an editor running them per frame
//! wants. Degenerate inputs (parallel tangents, straight runs) fall back to
//! well-defined values instead of failing; the only sharp edge is
//! normalizing a zero vector, which is documented on [`Vec2::normalize`]
//! and guarded by [`Vec2::try_normalize`].
//!
//! # Examples
//!
//! Join two oriented road endpoints with a smooth cubic and walk it:
//!
//! ```
//! use dirbez::{
//!     ControlPoint, FittedCubic, ParamCurveArclen, Point, Vec2, DEFAULT_ARCLEN_STEP,
//! };
//!
//! // Both directions point into the curve: east out of the start, west
//! // out of the end.
//! let a = ControlPoint::new(Point::new(0.0, 0.0), Vec2::new(1.0, 0.0));
//! let b = ControlPoint::new(Point::new(10.0, 0.0), Vec2::new(-1.0, 0.0));
//!
//! let seg = FittedCubic::fit(a, b);
//! assert!(seg.is_straight());
//! assert_eq!(seg.arclen(DEFAULT_ARCLEN_STEP), 10.0);
//!
//! // A point-and-tangent 4 meters down the segment, e.g. for placing a
//! // lamp post.
//! let lamp = seg.travel_point(4.0);
//! assert_eq!(lamp.point, Point::new(4.0, 0.0));
//! ```
//!
//! Hit-test a corner turn:
//!
//! ```
//! use dirbez::{ControlPoint, ParamCurve, ParamCurveNearest, Point, QuadBez, Vec2};
//!
//! let q = QuadBez::fit(
//!     ControlPoint::new(Point::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
//!     ControlPoint::new(Point::new(10.0, 10.0), Vec2::new(0.0, -1.0)),
//! );
//! let hit = q.nearest(Point::new(8.0, 2.0));
//! // (8, 2) sits well under a meter away from the middle of the turn.
//! assert!(hit.distance_sq < 1.0);
//! assert!(q.eval(hit.t).distance(Point::new(8.0, 2.0)) < 1.0);
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `mint`: Enable `From`/`Into` conversion of dirbez and [mint][] types,
//!   enabling interoperability with other graphics libraries.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the
//!   plain value types.
//!
//! [mint]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]

pub mod common;
mod control_point;
mod cubicbez;
mod fit;
mod line;
mod param_curve;
mod point;
mod quadbez;
mod vec2;

pub use crate::control_point::{ControlPoint, DoubleControlPoint};
pub use crate::cubicbez::CubicBez;
pub use crate::fit::FittedCubic;
pub use crate::line::Line;
pub use crate::param_curve::{
    Nearest, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema, ParamCurveNearest,
    DEFAULT_ARCLEN_STEP, DEFAULT_TRAVEL_STEP, MAX_EXTREMA,
};
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::vec2::Vec2;
