//! Conversions between [`Uint`] and bytestrings of arbitrary width.

use crate::{ByteOrder, Uint};
use bigint::Word;
use core::{fmt, ops::Deref};

const WORD_BYTES: usize = Word::BITS as usize / 8;

/// Parse a big endian hex string of any length up to 144 digits into a [`Uint`].
///
/// Intended for curve tables written as constants.
///
/// # Panics
/// - if the string is longer than the capacity of [`Uint`]
/// - if the string contains a non-hex character
pub const fn hex_uint(hex: &str) -> Uint {
    let bytes = hex.as_bytes();
    assert!(bytes.len() <= Uint::BYTES * 2, "hex string too long");

    let mut words = [0 as Word; Uint::LIMBS];
    let mut i = 0;

    while i < bytes.len() {
        let digit = match bytes[bytes.len() - 1 - i] {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c @ b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("invalid hex digit"),
        };
        let bit = i * 4;
        words[bit / Word::BITS as usize] |= (digit as Word) << (bit % Word::BITS as usize);
        i += 1;
    }

    Uint::from_words(words)
}

/// Decode an unsigned integer from a bytestring of at most [`Uint::BYTES`] bytes.
///
/// Returns `None` if the input is too long.
pub fn uint_from_bytes(bytes: &[u8], order: ByteOrder) -> Option<Uint> {
    if bytes.len() > Uint::BYTES {
        return None;
    }

    let mut buf = [0u8; Uint::BYTES];
    Some(match order {
        ByteOrder::BigEndian => {
            buf[Uint::BYTES - bytes.len()..].copy_from_slice(bytes);
            Uint::from_be_slice(&buf)
        }
        ByteOrder::LittleEndian => {
            buf[..bytes.len()].copy_from_slice(bytes);
            Uint::from_le_slice(&buf)
        }
    })
}

/// Encode the low `out.len()` bytes of `x` into `out`.
///
/// Bytes of `x` above the width of `out` are discarded.
pub fn uint_to_bytes(x: &Uint, out: &mut [u8], order: ByteOrder) {
    let words = x.as_words();
    let len = out.len();

    for i in 0..len.min(Uint::BYTES) {
        let byte = (words[i / WORD_BYTES] >> (8 * (i % WORD_BYTES))) as u8;
        match order {
            ByteOrder::BigEndian => out[len - 1 - i] = byte,
            ByteOrder::LittleEndian => out[i] = byte,
        }
    }

    for i in Uint::BYTES..len {
        match order {
            ByteOrder::BigEndian => out[len - 1 - i] = 0,
            ByteOrder::LittleEndian => out[i] = 0,
        }
    }
}

/// Serialized field element with the width of its field.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct FieldBytes {
    bytes: [u8; Uint::BYTES],
    len: usize,
}

impl FieldBytes {
    pub(crate) fn new(x: &Uint, len: usize, order: ByteOrder) -> Self {
        let mut bytes = [0u8; Uint::BYTES];
        uint_to_bytes(x, &mut bytes[..len], order);
        Self { bytes, len }
    }
}

impl AsRef<[u8]> for FieldBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Deref for FieldBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_ref()
    }
}

impl fmt::Debug for FieldBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldBytes(")?;
        for byte in self.as_ref() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
