#![no_main]
// Targets: every curve in `anycurve::named`
use anycurve::{ByteOrder, CurveParameters, ProjectivePoint, named};
use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, LazyLock};

static CURVES: LazyLock<Vec<Arc<CurveParameters>>> = LazyLock::new(|| {
    named::ALL
        .iter()
        .filter_map(|definition| CurveParameters::new(definition()).ok())
        .collect()
});

fn test_group(p1: &ProjectivePoint, p2: &ProjectivePoint, scalar: &[u8]) {
    let curve = p1.curve();
    let s = curve.reduce_scalar_bytes(scalar, ByteOrder::BigEndian);

    // Addition and doubling are consistent
    assert_eq!(p1.double(), p1.add(p1).unwrap());

    // Negation
    let sum = p1.add(p2).unwrap();
    assert!(bool::from(sum.add(&-&sum).unwrap().is_identity()));
    assert_eq!(sum.subtract(p2).unwrap(), *p1);

    // Distributivity of scalar multiplication
    let sp = p1.multiply_unsafe(&s.to_uint()).unwrap();
    assert_eq!(sp.double(), p1.multiply_unsafe(&(s + s).to_uint()).unwrap());

    if !bool::from(s.is_zero()) {
        assert_eq!(p1.multiply(&s.to_uint()).unwrap(), sp);
    }

    // Cofactor clearing lands in the prime order subgroup
    assert!(bool::from(p1.clear_cofactor().is_torsion_free()));
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let (lens, body) = data.split_at(2);

    for curve in CURVES.iter() {
        let g = curve.generator();
        let split = usize::from(lens[0]).min(body.len());
        let (a, rest) = body.split_at(split);
        let split = usize::from(lens[1]).min(rest.len());
        let (b, scalar) = rest.split_at(split);

        let p1 = ProjectivePoint::from_bytes(curve, a).unwrap_or_else(|_| g.clone());
        let p2 = ProjectivePoint::from_bytes(curve, b).unwrap_or_else(|_| g.double());

        // Successful decodings re-encode to the same point
        for compress in [true, false] {
            let decoded = ProjectivePoint::from_bytes(curve, &p1.to_bytes(compress)).unwrap();
            assert_eq!(decoded, p1);
        }

        test_group(&p1, &p2, scalar);
    }
});
