//! Named curves.
//!
//! Each curve has a `*_definition()` returning its [`CurveDefinition`] and a constructor
//! binding it to its customary hash function: SHA-256 for the 256-bit and smaller short
//! Weierstrass curves, SHA-384 and SHA-512 for P-384 and P-521, SHA-512 for the twisted
//! Edwards curves.

use crate::{Curve, CurveDefinition, CurveShape, Result, create_curve, minus};
use dynfield::{Uint, hex_uint};
use sha2::{Sha256, Sha384, Sha512};

/// Definitions of every curve in this module.
pub const ALL: [fn() -> CurveDefinition; 11] = [
    secp192r1_definition,
    secp224r1_definition,
    secp256r1_definition,
    secp384r1_definition,
    secp521r1_definition,
    secp256k1_definition,
    bn254_definition,
    pallas_definition,
    vesta_definition,
    ed25519_definition,
    jubjub_definition,
];

const P192: Uint = hex_uint("fffffffffffffffffffffffffffffffeffffffffffffffff");
const P224: Uint = hex_uint("ffffffffffffffffffffffffffffffff000000000000000000000001");
const P256: Uint = hex_uint("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
const P384: Uint = hex_uint(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
);
const P521: Uint = hex_uint(
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
);
const SECP256K1_P: Uint =
    hex_uint("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
const BN254_P: Uint =
    hex_uint("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");
const PALLAS_P: Uint =
    hex_uint("40000000000000000000000000000000224698fc094cf91b992d30ed00000001");
const VESTA_P: Uint =
    hex_uint("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001");
const ED25519_P: Uint =
    hex_uint("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");
const BLS12_381_R: Uint =
    hex_uint("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");

/// NIST P-192.
pub fn secp192r1_definition() -> CurveDefinition {
    CurveDefinition {
        name: "secp192r1",
        shape: CurveShape::ShortWeierstrass {
            a: minus(&P192, 3),
            b: hex_uint("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        },
        p: P192,
        n: hex_uint("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        h: 1,
        gx: hex_uint("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        gy: hex_uint("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    }
}

/// NIST P-192 with SHA-256.
pub fn secp192r1() -> Result<Curve<Sha256>> {
    create_curve(secp192r1_definition())
}

/// NIST P-224.
pub fn secp224r1_definition() -> CurveDefinition {
    CurveDefinition {
        name: "secp224r1",
        shape: CurveShape::ShortWeierstrass {
            a: minus(&P224, 3),
            b: hex_uint("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        },
        p: P224,
        n: hex_uint("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        h: 1,
        gx: hex_uint("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        gy: hex_uint("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    }
}

/// NIST P-224 with SHA-256.
pub fn secp224r1() -> Result<Curve<Sha256>> {
    create_curve(secp224r1_definition())
}

/// NIST P-256.
pub fn secp256r1_definition() -> CurveDefinition {
    CurveDefinition {
        name: "secp256r1",
        shape: CurveShape::ShortWeierstrass {
            a: minus(&P256, 3),
            b: hex_uint("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        },
        p: P256,
        n: hex_uint("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        h: 1,
        gx: hex_uint("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        gy: hex_uint("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    }
}

/// NIST P-256 with SHA-256.
pub fn secp256r1() -> Result<Curve<Sha256>> {
    create_curve(secp256r1_definition())
}

/// NIST P-384.
pub fn secp384r1_definition() -> CurveDefinition {
    CurveDefinition {
        name: "secp384r1",
        shape: CurveShape::ShortWeierstrass {
            a: minus(&P384, 3),
            b: hex_uint(
                "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
            ),
        },
        p: P384,
        n: hex_uint(
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
        ),
        h: 1,
        gx: hex_uint(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        ),
        gy: hex_uint(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
        ),
    }
}

/// NIST P-384 with SHA-384.
pub fn secp384r1() -> Result<Curve<Sha384>> {
    create_curve(secp384r1_definition())
}

/// NIST P-521.
pub fn secp521r1_definition() -> CurveDefinition {
    CurveDefinition {
        name: "secp521r1",
        shape: CurveShape::ShortWeierstrass {
            a: minus(&P521, 3),
            b: hex_uint(
                "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
            ),
        },
        p: P521,
        n: hex_uint(
            "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
        ),
        h: 1,
        gx: hex_uint(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        ),
        gy: hex_uint(
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
        ),
    }
}

/// NIST P-521 with SHA-512.
pub fn secp521r1() -> Result<Curve<Sha512>> {
    create_curve(secp521r1_definition())
}

/// secp256k1, the Koblitz curve `y² = x³ + 7`.
pub fn secp256k1_definition() -> CurveDefinition {
    CurveDefinition {
        name: "secp256k1",
        shape: CurveShape::ShortWeierstrass {
            a: Uint::ZERO,
            b: Uint::from_u64(7),
        },
        p: SECP256K1_P,
        n: hex_uint("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        h: 1,
        gx: hex_uint("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        gy: hex_uint("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    }
}

/// secp256k1 with SHA-256.
pub fn secp256k1() -> Result<Curve<Sha256>> {
    create_curve(secp256k1_definition())
}

/// BN254 (alt_bn128), `y² = x³ + 3` with generator `(1, 2)`.
pub fn bn254_definition() -> CurveDefinition {
    CurveDefinition {
        name: "bn254",
        shape: CurveShape::ShortWeierstrass {
            a: Uint::ZERO,
            b: Uint::from_u64(3),
        },
        p: BN254_P,
        n: hex_uint("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"),
        h: 1,
        gx: Uint::ONE,
        gy: Uint::from_u64(2),
    }
}

/// BN254 with SHA-256.
pub fn bn254() -> Result<Curve<Sha256>> {
    create_curve(bn254_definition())
}

/// Pallas, `y² = x³ + 5` over the scalar field of Vesta.
pub fn pallas_definition() -> CurveDefinition {
    CurveDefinition {
        name: "pallas",
        shape: CurveShape::ShortWeierstrass {
            a: Uint::ZERO,
            b: Uint::from_u64(5),
        },
        p: PALLAS_P,
        n: VESTA_P,
        h: 1,
        gx: minus(&PALLAS_P, 1),
        gy: Uint::from_u64(2),
    }
}

/// Pallas with SHA-256.
pub fn pallas() -> Result<Curve<Sha256>> {
    create_curve(pallas_definition())
}

/// Vesta, `y² = x³ + 5` over the scalar field of Pallas.
pub fn vesta_definition() -> CurveDefinition {
    CurveDefinition {
        name: "vesta",
        shape: CurveShape::ShortWeierstrass {
            a: Uint::ZERO,
            b: Uint::from_u64(5),
        },
        p: VESTA_P,
        n: PALLAS_P,
        h: 1,
        gx: minus(&VESTA_P, 1),
        gy: Uint::from_u64(2),
    }
}

/// Vesta with SHA-256.
pub fn vesta() -> Result<Curve<Sha256>> {
    create_curve(vesta_definition())
}

/// edwards25519, `-x² + y² = 1 - (121665/121666)x²y²`.
pub fn ed25519_definition() -> CurveDefinition {
    CurveDefinition {
        name: "ed25519",
        shape: CurveShape::TwistedEdwards {
            a: minus(&ED25519_P, 1),
            d: hex_uint("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3"),
        },
        p: ED25519_P,
        n: hex_uint("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"),
        h: 8,
        gx: hex_uint("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
        gy: hex_uint("6666666666666666666666666666666666666666666666666666666666666658"),
    }
}

/// Ed25519: edwards25519 with SHA-512.
pub fn ed25519() -> Result<Curve<Sha512>> {
    create_curve(ed25519_definition())
}

/// Jubjub, `-x² + y² = 1 - (10240/10241)x²y²` over the scalar field of BLS12-381.
pub fn jubjub_definition() -> CurveDefinition {
    CurveDefinition {
        name: "jubjub",
        shape: CurveShape::TwistedEdwards {
            a: minus(&BLS12_381_R, 1),
            d: hex_uint("2a9318e74bfa2b48f5fd9207e6bd7fd4292d7f6d37579d2601065fd6d6343eb1"),
        },
        p: BLS12_381_R,
        n: hex_uint("0e7db4ea6533afa906673b0101343b00a6682093ccc81082d0970e5ed6f72cb7"),
        h: 8,
        gx: hex_uint("11dafe5d23e1218086a365b99fbf3d3be72f6afd7d1f72623e6b071492d1122b"),
        gy: hex_uint("1d523cf1ddab1a1793132e78c866c0c33e26ba5cc220fed7cc3f870e59d292aa"),
    }
}

/// Jubjub with SHA-512.
pub fn jubjub() -> Result<Curve<Sha512>> {
    create_curve(jubjub_definition())
}
