//! Scalar multiplication strategies shared by both curve families.

use alloc::vec::Vec;
use dynfield::{
    Uint,
    bigint::Word,
    subtle::{Choice, ConditionallySelectable},
};

/// Window width for variable-time multiplication.
const WNAF_WIDTH: usize = 5;

/// Group law of one curve family, parameterized by its curve equation.
///
/// Implementations must use complete formulas: `add` and `double` are valid for every pair of
/// inputs, including the identity and equal points.
pub(crate) trait GroupLaw: Copy + ConditionallySelectable {
    /// Curve constants used by the formulas.
    type Equation;

    /// Neutral element.
    fn identity(eq: &Self::Equation) -> Self;

    /// Returns `self + rhs`.
    fn add(&self, rhs: &Self, eq: &Self::Equation) -> Self;

    /// Returns `self + self`.
    fn double(&self, eq: &Self::Equation) -> Self;

    /// Returns `-self`.
    fn neg(&self) -> Self;
}

/// Multiply `point` by `k` in constant time with respect to `k`.
///
/// Uses a 4-bit fixed window over the low `bits` bits of `k`; the sequence of point operations
/// and memory accesses depends only on `bits`.
pub(crate) fn mul<G: GroupLaw>(point: &G, k: &Uint, bits: usize, eq: &G::Equation) -> G {
    let mut pc = [G::identity(eq); 16];
    pc[1] = *point;

    for i in 2..16 {
        pc[i] = if i % 2 == 0 {
            pc[i / 2].double(eq)
        } else {
            pc[i - 1].add(point, eq)
        };
    }

    let words = k.as_words();
    let word_bits = Word::BITS as usize;
    let mut q = G::identity(eq);
    let mut pos = bits.div_ceil(4).max(1) * 4 - 4;

    loop {
        let slot = ((words[pos / word_bits] >> (pos % word_bits)) & 0xf) as usize;

        let mut t = G::identity(eq);

        for (i, entry) in pc.iter().enumerate().skip(1) {
            t.conditional_assign(
                entry,
                Choice::from(((slot ^ i).wrapping_sub(1) >> 8) as u8 & 1),
            );
        }

        q = q.add(&t, eq);

        if pos == 0 {
            break;
        }

        q = q.double(eq).double(eq).double(eq).double(eq);
        pos -= 4;
    }

    q
}

/// Multiply `point` by a public scalar `k` using a width-5 NAF.
///
/// Running time depends on `k`.
pub(crate) fn mul_vartime<G: GroupLaw>(point: &G, k: &Uint, eq: &G::Equation) -> G {
    lincomb_vartime(&[(*point, *k)], eq)
}

/// Compute `Σ kᵢ·Pᵢ` for public scalars, sharing the doublings between all terms.
pub(crate) fn lincomb_vartime<G: GroupLaw>(terms: &[(G, Uint)], eq: &G::Equation) -> G {
    let recoded: Vec<(Vec<G>, Vec<i8>)> = terms
        .iter()
        .map(|(point, k)| (odd_multiples(point, eq), wnaf(k, WNAF_WIDTH)))
        .collect();

    let len = recoded.iter().map(|(_, digits)| digits.len()).max().unwrap_or(0);
    let mut q = G::identity(eq);

    for i in (0..len).rev() {
        q = q.double(eq);

        for (table, digits) in &recoded {
            match digits.get(i).copied().unwrap_or(0) {
                0 => {}
                d if d > 0 => q = q.add(&table[(d as usize) / 2], eq),
                d => q = q.add(&table[(-d as usize) / 2].neg(), eq),
            }
        }
    }

    q
}

/// `[P, 3P, 5P, ..., (2^(w-1) - 1)P]`
fn odd_multiples<G: GroupLaw>(point: &G, eq: &G::Equation) -> Vec<G> {
    let count = 1 << (WNAF_WIDTH - 2);
    let double = point.double(eq);
    let mut table = Vec::with_capacity(count);
    table.push(*point);

    for i in 1..count {
        let next = table[i - 1].add(&double, eq);
        table.push(next);
    }

    table
}

/// Width-`w` non-adjacent form of `k`, least significant digit first.
///
/// Every non-zero digit is odd and lies in `(-2^(w-1), 2^(w-1))`, and any `w` consecutive
/// digits contain at most one non-zero digit.
fn wnaf(k: &Uint, w: usize) -> Vec<i8> {
    let window = 1u64 << w;
    let half = window >> 1;
    let mut k = *k;
    let mut digits = Vec::with_capacity(k.bits_vartime() + 1);

    while k != Uint::ZERO {
        let digit = if k.as_words()[0] & 1 == 1 {
            let low = (k.as_words()[0] as u64) & (window - 1);
            if low >= half {
                k = k.wrapping_add(&Uint::from_u64(window - low));
                low as i8 - window as i8
            } else {
                k = k.wrapping_sub(&Uint::from_u64(low));
                low as i8
            }
        } else {
            0
        };

        digits.push(digit);
        k = k.shr_vartime(1);
    }

    digits
}
