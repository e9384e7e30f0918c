//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{Error, FieldElement, LIMBS, PrimeField, Result, Uint};
use bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Upper bound on the candidates tried when searching for a quadratic non-residue.
const MAX_NON_RESIDUE_CANDIDATE: u64 = 1 << 12;

/// Square root algorithms, with the constants each one needs for a particular modulus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Algorithm {
    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    Atkins {
        /// `(q - 5) / 8`
        exp: Uint,
    },

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks {
        /// `(q + 1) / 4`
        exp: Uint,
    },

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks {
        /// `q - 1 = 2^s * t` with `t` odd.
        s: u32,
        /// `(t - 1) / 2`
        t_minus_1_over_2: Uint,
        /// `z^t` for a non-residue `z`: a primitive `2^s`-th root of unity.
        root_of_unity: Uint,
    },
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    pub(crate) fn for_modulus(p: &Uint, params: &DynResidueParams<LIMBS>) -> Result<Self> {
        let low = p.as_words()[0];

        if low & 3 == 3 {
            Ok(Self::Shanks {
                exp: p.wrapping_add(&Uint::ONE).shr_vartime(2),
            })
        } else if low & 7 == 5 {
            Ok(Self::Atkins {
                exp: p.wrapping_sub(&Uint::from_u64(5)).shr_vartime(3),
            })
        } else {
            let p_minus_1 = p.wrapping_sub(&Uint::ONE);
            let s = p_minus_1.trailing_zeros();
            let t = p_minus_1.shr_vartime(s);
            let root_of_unity = non_residue(&p_minus_1, params)?
                .pow_bounded_exp(&t, t.bits_vartime())
                .retrieve();

            Ok(Self::TonelliShanks {
                s: s as u32,
                t_minus_1_over_2: t.wrapping_sub(&Uint::ONE).shr_vartime(1),
                root_of_unity,
            })
        }
    }

    /// Returns the square root of `x` mod p, or `None` if no square root exists.
    pub(crate) fn sqrt(&self, field: &PrimeField, x: &FieldElement) -> CtOption<FieldElement> {
        match self {
            Self::Atkins { exp } => sqrt_atkins(field, x, exp),
            Self::Shanks { exp } => sqrt_shanks(x, exp),
            Self::TonelliShanks {
                s,
                t_minus_1_over_2,
                root_of_unity,
            } => sqrt_tonelli_shanks(field, x, *s, t_minus_1_over_2, root_of_unity),
        }
    }
}

/// Atkins algorithm for `q ≡ 5 (mod 8)`.
///
/// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
fn sqrt_atkins(field: &PrimeField, x: &FieldElement, mod_minus_5_over_8: &Uint) -> CtOption<FieldElement> {
    let two = field.from_u64(2);
    let t = two.pow(mod_minus_5_over_8);
    let a1 = x.pow(mod_minus_5_over_8);
    let a0 = (a1.square() * x).square();
    let b = t * a1;
    let ab = *x * b;
    let i = two * ab * b;
    let root = ab * (i - field.one());
    CtOption::new(root, !a0.ct_eq(&-field.one()) & root.square().ct_eq(x))
}

/// Shanks algorithm for `q ≡ 3 (mod 4)`.
///
/// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
/// `self^((q + 1) / 4) (mod q)`.
///
/// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
fn sqrt_shanks(x: &FieldElement, mod_plus_1_over_4: &Uint) -> CtOption<FieldElement> {
    let root = x.pow(mod_plus_1_over_4);
    CtOption::new(root, root.square().ct_eq(x))
}

/// Tonelli-Shanks algorithm works for every odd prime.
///
/// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
fn sqrt_tonelli_shanks(
    field: &PrimeField,
    x: &FieldElement,
    s: u32,
    t_minus_1_over_2: &Uint,
    root_of_unity: &Uint,
) -> CtOption<FieldElement> {
    let one = field.one();
    let w = x.pow(t_minus_1_over_2);

    let mut v = s;
    let mut r = *x * w;
    let mut b = r * w;
    let mut z = field.reduce(root_of_unity);

    for max_v in (1..=s).rev() {
        let mut k = 1;
        let mut tmp = b.square();
        let mut j_less_than_v = Choice::from(1);

        for j in 2..max_v {
            let tmp_is_one = tmp.ct_eq(&one);
            let squared = FieldElement::conditional_select(&tmp, &z, tmp_is_one).square();
            tmp = FieldElement::conditional_select(&squared, &tmp, tmp_is_one);
            let new_z = FieldElement::conditional_select(&z, &squared, tmp_is_one);
            j_less_than_v &= !j.ct_eq(&v);
            k = u32::conditional_select(&j, &k, tmp_is_one);
            z = FieldElement::conditional_select(&z, &new_z, j_less_than_v);
        }

        let result = r * z;
        r = FieldElement::conditional_select(&result, &r, b.ct_eq(&one));
        z = z.square();
        b *= z;
        v = k;
    }

    CtOption::new(r, r.square().ct_eq(x))
}

/// Find the smallest quadratic non-residue `z ≥ 2` by Euler's criterion.
fn non_residue(
    p_minus_1: &Uint,
    params: &DynResidueParams<LIMBS>,
) -> Result<DynResidue<LIMBS>> {
    let half = p_minus_1.shr_vartime(1);
    let minus_one = DynResidue::one(*params).neg();

    (2..MAX_NON_RESIDUE_CANDIDATE)
        .map(|n| DynResidue::new(&Uint::from_u64(n), *params))
        .find(|z| z.pow_bounded_exp(&half, half.bits_vartime()) == minus_one)
        .ok_or(Error)
}
