//! Point arithmetic benchmarks

use anycurve::{CurveParameters, ProjectivePoint, Uint, hex_uint, named};
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use std::sync::Arc;

fn test_scalar_x() -> Uint {
    hex_uint("519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464")
}

fn test_scalar_y() -> Uint {
    hex_uint("0f56db78ca460b055c500064824bed999a25aaf48ebb519ac201537b85479813")
}

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Arc<CurveParameters>) {
    let p = curve.generator();
    let q = p.double();
    group.bench_function("add", |b| b.iter(|| p.add(&q)));
}

fn bench_point_double<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &Arc<CurveParameters>,
) {
    let p = curve.generator();
    group.bench_function("double", |b| b.iter(|| p.double()));
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Arc<CurveParameters>) {
    let p = curve.generator();
    let k = curve.reduce_scalar(&test_scalar_x()).to_uint();
    group.bench_function("point-scalar mul", |b| b.iter(|| p.multiply(&k)));
    group.bench_function("point-scalar mul (vartime)", |b| {
        b.iter(|| p.multiply_unsafe(&k))
    });
}

fn bench_lincomb<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &Arc<CurveParameters>) {
    let p = curve.generator();
    let q = p.double();
    let a = curve.reduce_scalar(&test_scalar_x()).to_uint();
    let b = curve.reduce_scalar(&test_scalar_y()).to_uint();
    group.bench_function("lincomb", |bench| {
        bench.iter(|| ProjectivePoint::lincomb_unsafe(&p, &a, &q, &b))
    });
}

fn bench_point_decode<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &Arc<CurveParameters>,
) {
    let bytes = curve.generator().double().to_bytes(true);
    group.bench_function("decode compressed", |b| {
        b.iter(|| ProjectivePoint::from_bytes(curve, &bytes))
    });
}

fn bench_point(c: &mut Criterion) {
    for definition in [
        named::secp256k1_definition,
        named::secp521r1_definition,
        named::ed25519_definition,
    ] {
        let curve = CurveParameters::new(definition()).unwrap();
        let mut group = c.benchmark_group(format!("{} point operations", curve.name()));
        bench_point_add(&mut group, &curve);
        bench_point_double(&mut group, &curve);
        bench_point_mul(&mut group, &curve);
        bench_lincomb(&mut group, &curve);
        bench_point_decode(&mut group, &curve);
        group.finish();
    }
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
