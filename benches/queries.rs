// Copyright 2025 the Dirbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the fixed-step curve queries.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use dirbez::{
    ControlPoint, FittedCubic, ParamCurveArclen, ParamCurveNearest, Point, QuadBez, Vec2,
    DEFAULT_ARCLEN_STEP, DEFAULT_TRAVEL_STEP,
};

fn corner_quad() -> QuadBez {
    QuadBez::fit(
        ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
        ControlPoint::new((10.0, 10.0), Vec2::new(0.0, -1.0)),
    )
}

fn corner_cubic() -> FittedCubic {
    FittedCubic::fit(
        ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0)),
        ControlPoint::new((10.0, 10.0), Vec2::new(0.0, -1.0)),
    )
}

fn bench_fit(cc: &mut Criterion) {
    let a = ControlPoint::new((0.0, 0.0), Vec2::new(1.0, 0.0));
    let b = ControlPoint::new((10.0, 10.0), Vec2::new(0.0, -1.0));
    cc.bench_function("cubic fit", |bb| {
        bb.iter(|| FittedCubic::fit(black_box(a), black_box(b)));
    });
    cc.bench_function("quadratic fit", |bb| {
        bb.iter(|| QuadBez::fit(black_box(a), black_box(b)));
    });
}

fn bench_arclen(cc: &mut Criterion) {
    let q = corner_quad();
    let c = corner_cubic();
    cc.bench_function("quadratic arclen", |bb| {
        bb.iter(|| black_box(&q).arclen(DEFAULT_ARCLEN_STEP));
    });
    cc.bench_function("cubic arclen", |bb| {
        bb.iter(|| black_box(&c).arclen(DEFAULT_ARCLEN_STEP));
    });
}

fn bench_travel(cc: &mut Criterion) {
    let c = corner_cubic();
    cc.bench_function("cubic travel", |bb| {
        bb.iter(|| black_box(&c).travel(black_box(7.5), DEFAULT_TRAVEL_STEP));
    });
}

fn bench_nearest(cc: &mut Criterion) {
    let q = corner_quad();
    let c = corner_cubic();
    let p = Point::new(8.0, 2.0);
    cc.bench_function("quadratic nearest", |bb| {
        bb.iter(|| black_box(&q).nearest(black_box(p)));
    });
    cc.bench_function("cubic nearest", |bb| {
        bb.iter(|| black_box(&c).nearest(black_box(p)));
    });
}

criterion_group!(benches, bench_fit, bench_arclen, bench_travel, bench_nearest);
criterion_main!(benches);
