//! Prime field parameters chosen at runtime.

use crate::{
    ByteOrder, Error, FieldBytes, FieldElement, LIMBS, MAX_MODULUS_BITS, Result, Uint,
    sqrt::Algorithm, uint_from_bytes,
};
use bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use subtle::{Choice, ConstantTimeLess, CtOption};

/// A prime field `GF(p)` whose modulus is supplied at runtime.
///
/// Constructing a field precomputes the Montgomery parameters and the constants of the
/// square root algorithm best suited to the modulus. The struct is `Copy` and never mutated,
/// so it can be shared freely between threads.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimeField {
    params: DynResidueParams<LIMBS>,
    bits: usize,
    pub(crate) sqrt: Algorithm,
}

impl PrimeField {
    /// Create a new prime field with the given modulus.
    ///
    /// The modulus must be odd, at least 3 and at most [`MAX_MODULUS_BITS`] bits wide.
    /// Primality is not checked.
    pub fn new(modulus: &Uint) -> Result<Self> {
        let bits = modulus.bits_vartime();
        let is_odd = modulus.as_words()[0] & 1 == 1;

        if !is_odd || *modulus < Uint::from_u64(3) || bits > MAX_MODULUS_BITS {
            return Err(Error);
        }

        let params = DynResidueParams::new(modulus);
        let sqrt = Algorithm::for_modulus(modulus, &params)?;

        Ok(Self { params, bits, sqrt })
    }

    /// Modulus `p` of this field.
    pub fn modulus(&self) -> &Uint {
        self.params.modulus()
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Width in bytes of a serialized field element.
    pub fn byte_len(&self) -> usize {
        self.bits.div_ceil(8)
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_residue(DynResidue::zero(self.params))
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement::from_residue(DynResidue::one(self.params))
    }

    /// Field element for a small integer, reduced mod `p`.
    pub fn from_u64(&self, n: u64) -> FieldElement {
        self.reduce(&Uint::from_u64(n))
    }

    /// Field element for an integer of any size, reduced mod `p`.
    pub fn reduce(&self, n: &Uint) -> FieldElement {
        FieldElement::from_residue(DynResidue::new(n, self.params))
    }

    /// Field element for an integer which must already be in canonical form, i.e. `< p`.
    pub fn from_uint(&self, n: &Uint) -> CtOption<FieldElement> {
        CtOption::new(self.reduce(n), n.ct_lt(self.modulus()))
    }

    /// Decode a canonical field element of exactly [`PrimeField::byte_len`] bytes.
    pub fn decode(&self, bytes: &[u8], order: ByteOrder) -> CtOption<FieldElement> {
        if bytes.len() != self.byte_len() {
            return CtOption::new(self.zero(), Choice::from(0));
        }

        match uint_from_bytes(bytes, order) {
            Some(n) => self.from_uint(&n),
            None => CtOption::new(self.zero(), Choice::from(0)),
        }
    }

    /// Encode a field element as [`PrimeField::byte_len`] bytes.
    pub fn encode(&self, element: &FieldElement, order: ByteOrder) -> FieldBytes {
        FieldBytes::new(&element.to_uint(), self.byte_len(), order)
    }

    /// Interpret a bytestring of any length as an integer and reduce it mod `p`.
    ///
    /// Runs in time that depends only on the length of the input.
    pub fn reduce_bytes(&self, bytes: &[u8], order: ByteOrder) -> FieldElement {
        let radix = self.from_u64(256);
        let fold = |acc: FieldElement, byte: &u8| acc * radix + self.from_u64(u64::from(*byte));

        match order {
            ByteOrder::BigEndian => bytes.iter().fold(self.zero(), fold),
            ByteOrder::LittleEndian => bytes.iter().rev().fold(self.zero(), fold),
        }
    }

    /// Square root of `element`, or `None` if it is a quadratic non-residue.
    pub fn sqrt(&self, element: &FieldElement) -> CtOption<FieldElement> {
        self.sqrt.sqrt(self, element)
    }

    /// Returns `true` if `element` belongs to this field.
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.residue().params() == &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::PrimeField;
    use crate::{ByteOrder, MAX_MODULUS_BITS, Uint, hex_uint};
    use hex_literal::hex;

    const P256: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

    #[test]
    fn rejects_bad_moduli() {
        assert!(PrimeField::new(&Uint::from_u64(10)).is_err());
        assert!(PrimeField::new(&Uint::from_u64(1)).is_err());
        assert!(PrimeField::new(&Uint::ZERO).is_err());
        assert!(PrimeField::new(&Uint::MAX).is_err());
        assert!(PrimeField::new(&Uint::ONE.shl_vartime(MAX_MODULUS_BITS).wrapping_add(&Uint::ONE)).is_err());
    }

    #[test]
    fn sizes() {
        let field = PrimeField::new(&hex_uint(P256)).unwrap();
        assert_eq!(field.bits(), 256);
        assert_eq!(field.byte_len(), 32);

        let small = PrimeField::new(&Uint::from_u64(23)).unwrap();
        assert_eq!(small.bits(), 5);
        assert_eq!(small.byte_len(), 1);
    }

    #[test]
    fn decode_rejects_non_canonical() {
        let field = PrimeField::new(&hex_uint(P256)).unwrap();
        let modulus = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
        assert!(bool::from(field.decode(&modulus, ByteOrder::BigEndian).is_none()));

        let minus_one = hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe");
        let decoded = field.decode(&minus_one, ByteOrder::BigEndian).unwrap();
        assert_eq!(decoded, -field.one());
        assert_eq!(field.encode(&decoded, ByteOrder::BigEndian).as_ref(), &minus_one);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let field = PrimeField::new(&hex_uint(P256)).unwrap();
        assert!(bool::from(field.decode(&[1u8; 31], ByteOrder::BigEndian).is_none()));
        assert!(bool::from(field.decode(&[1u8; 33], ByteOrder::BigEndian).is_none()));
    }

    #[test]
    fn reduce_bytes_wide_input() {
        let field = PrimeField::new(&Uint::from_u64(1_000_003)).unwrap();
        let bytes = hex!("0102030405060708090a0b0c0d0e0f10");
        let expected = u128::from_be_bytes(bytes) % 1_000_003;

        assert_eq!(
            field.reduce_bytes(&bytes, ByteOrder::BigEndian),
            field.from_u64(expected as u64)
        );

        let mut reversed = bytes;
        reversed.reverse();
        assert_eq!(
            field.reduce_bytes(&reversed, ByteOrder::LittleEndian),
            field.from_u64(expected as u64)
        );
    }

    #[test]
    fn little_endian_round_trip() {
        let field = PrimeField::new(&Uint::from_u64(65_537)).unwrap();
        let x = field.from_u64(0x1234);
        let bytes = field.encode(&x, ByteOrder::LittleEndian);
        assert_eq!(bytes.as_ref(), &[0x34, 0x12, 0x00]);
        assert_eq!(field.decode(&bytes, ByteOrder::LittleEndian).unwrap(), x);
    }
}
