#![no_main]
// Targets: scalar and base fields of every curve in `anycurve::named`
use anycurve::{ByteOrder, CurveParameters, Error, Scalar, dynfield::FieldElement, named};
use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, LazyLock};

static CURVES: LazyLock<Vec<Arc<CurveParameters>>> = LazyLock::new(|| {
    named::ALL
        .iter()
        .filter_map(|definition| CurveParameters::new(definition()).ok())
        .collect()
});

fn test_scalars(s1: Scalar, s2: Scalar, s3: Scalar) {
    // Associativity
    assert_eq!(s1 + (s2 + s3), (s1 + s2) + s3);
    assert_eq!(s1 * (s2 * s3), (s1 * s2) * s3);

    // Commutativity
    assert_eq!(s1 + s2, s2 + s1);
    assert_eq!(s1 * s2, s2 * s1);

    // Distributivity
    assert_eq!(s1 * (s2 + s3), s1 * s2 + s1 * s3);

    // Inverse
    assert!(bool::from((s1 + (-s1)).is_zero()));
    assert_eq!(s1 - s1, s1 + (-s1));
    match s1.invert() {
        Ok(inv) => assert_eq!(inv * s1 * s2, s2),
        Err(err) => {
            assert_eq!(err, Error::NotInvertible);
            assert!(bool::from(s1.is_zero()));
        }
    }
    assert_eq!(s1.square(), s1 * s1);
}

fn test_field(curve: &CurveParameters, fe: FieldElement) {
    let field = curve.field();
    let square = fe.square();

    let root = Option::<FieldElement>::from(field.sqrt(&square)).unwrap();
    assert_eq!(root.square(), square);

    let bytes = field.encode(&fe, ByteOrder::LittleEndian);
    assert_eq!(
        Option::<FieldElement>::from(field.decode(&bytes, ByteOrder::LittleEndian)),
        Some(fe)
    );
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let third = data.len() / 3;
    let (a, rest) = data.split_at(third);
    let (b, c) = rest.split_at(third);

    for curve in CURVES.iter() {
        let s1 = curve.reduce_scalar_bytes(a, ByteOrder::BigEndian);
        let s2 = curve.reduce_scalar_bytes(b, ByteOrder::LittleEndian);
        let s3 = curve.reduce_scalar_bytes(c, ByteOrder::BigEndian);
        test_scalars(s1, s2, s3);

        // Canonical scalars are accepted, reduced ones compare equal
        assert_eq!(curve.scalar(&s1.to_uint()).unwrap(), s1);
        assert!(curve.scalar(curve.order()).is_err());

        test_field(curve, curve.field().reduce_bytes(c, ByteOrder::BigEndian));
    }
});
