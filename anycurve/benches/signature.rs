//! Signature and key agreement benchmarks

use anycurve::{Curve, HashFunction, named};
use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;

const SEED: [u8; 32] = hex!("519b423d715f8b581f4fa8ee59f4771a5b44c8130b4e3eacca54a56dda72b464");
const MSG: &[u8] = b"benchmark message";

/// Private key of the width the curve expects, derived from `SEED`.
fn private_key<D: HashFunction>(curve: &Curve<D>) -> Vec<u8> {
    SEED.iter()
        .copied()
        .cycle()
        .take(curve.private_key_len())
        .enumerate()
        // Leading zero keeps the key below the order on every curve.
        .map(|(i, b)| if i == 0 { 0 } else { b })
        .collect()
}

fn bench_sign<M: Measurement, D: HashFunction>(group: &mut BenchmarkGroup<'_, M>, curve: &Curve<D>) {
    let sk = private_key(curve);
    group.bench_function("sign", |b| b.iter(|| curve.sign(MSG, &sk)));
}

fn bench_verify<M: Measurement, D: HashFunction>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &Curve<D>,
) {
    let sk = private_key(curve);
    let pk = curve.get_public_key(&sk, true).unwrap();
    let sig = curve.sign(MSG, &sk).unwrap();
    group.bench_function("verify", |b| b.iter(|| curve.verify(sig.as_ref(), MSG, &pk)));
}

fn bench_shared_secret<M: Measurement, D: HashFunction>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &Curve<D>,
) {
    let sk = private_key(curve);
    let pk = curve.get_public_key(&sk, true).unwrap();
    group.bench_function("shared secret", |b| {
        b.iter(|| curve.get_shared_secret(&sk, &pk))
    });
}

fn bench_curve<D: HashFunction>(c: &mut Criterion, curve: &Curve<D>) {
    let mut group = c.benchmark_group(curve.name());
    bench_sign(&mut group, curve);
    bench_verify(&mut group, curve);
    bench_shared_secret(&mut group, curve);
    group.finish();
}

fn bench_signatures(c: &mut Criterion) {
    bench_curve(c, &named::secp256r1().unwrap());
    bench_curve(c, &named::secp256k1().unwrap());
    bench_curve(c, &named::secp384r1().unwrap());
    bench_curve(c, &named::ed25519().unwrap());
}

criterion_group!(benches, bench_signatures);
criterion_main!(benches);
