//! Fixed-width share encoding
//!
//! A share travels as exactly [`SHARE_LEN`] bytes:
//!
//! ```text
//! index (1 byte) || value (128 bytes, big-endian unsigned, zero-padded on the left)
//! ```
//!
//! Front ends print the same bytes as one `0x`-prefixed hex line per share.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigUint;
//! use shamir_bigint::codec::{Share, SHARE_LEN};
//! use shamir_bigint::domain::ShareIndex;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = Share::new(ShareIndex::new(3)?, BigUint::from(0xbeefu32))?;
//!
//! let bytes = share.marshal();
//! assert_eq!(bytes.len(), SHARE_LEN);
//! assert_eq!(bytes[0], 3);
//! assert_eq!(&bytes[SHARE_LEN - 2..], &[0xbe, 0xef]);
//!
//! let decoded = Share::unmarshal(&bytes)?;
//! assert_eq!(share, decoded);
//!
//! let line = share.to_hex();
//! assert!(line.starts_with("0x03"));
//! assert_eq!(Share::from_hex(&line)?, share);
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::domain::ShareIndex;
use crate::error::CodecError;
use crate::field::ELEMENT_BYTES;

/// Width of the value field in bits
pub const VALUE_BITS: u64 = (ELEMENT_BYTES * 8) as u64;

/// Total encoded length of one share
pub const SHARE_LEN: usize = 1 + ELEMENT_BYTES;

/// Prefix used by the hex line format
pub const HEX_PREFIX: &str = "0x";

/// One point `(index, value)` on a secret-encoding polynomial
///
/// The value always fits in the 128-byte wire field, so encoding never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    value: BigUint,
}

impl Share {
    /// Creates a share, checking that the value fits the wire format
    ///
    /// # Errors
    /// Returns [`CodecError::ValueOutOfRange`] if `value` needs more than 1024 bits
    pub fn new(index: ShareIndex, value: BigUint) -> Result<Self, CodecError> {
        let bits = value.bits();
        if bits > VALUE_BITS {
            return Err(CodecError::ValueOutOfRange { bits });
        }
        Ok(Self { index, value })
    }

    /// Wraps a value already reduced modulo P, which always fits the wire format
    pub(crate) fn from_field_element(index: ShareIndex, value: BigUint) -> Self {
        debug_assert!(crate::field::contains(&value));
        Self { index, value }
    }

    /// The x coordinate of this share
    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    /// The y coordinate of this share
    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Encodes the share as `index || value`
    #[must_use]
    pub fn marshal(&self) -> [u8; SHARE_LEN] {
        let mut out = [0u8; SHARE_LEN];
        out[0] = *self.index;

        let value = Zeroizing::new(self.value.to_bytes_be());
        // BigUint::to_bytes_be yields [0] for zero; the padding already covers it
        out[SHARE_LEN - value.len()..].copy_from_slice(&value);
        out
    }

    /// Decodes a share from exactly [`SHARE_LEN`] bytes
    ///
    /// # Errors
    /// Returns [`CodecError::MalformedShare`] on any other length and
    /// [`CodecError::ZeroIndex`] if the index byte is 0
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != SHARE_LEN {
            return Err(CodecError::MalformedShare { len: bytes.len() });
        }

        let index = ShareIndex::new(bytes[0]).map_err(|_| CodecError::ZeroIndex)?;
        let value = BigUint::from_bytes_be(&bytes[1..]);

        Ok(Self { index, value })
    }

    /// Encodes the share as a `0x`-prefixed hex line
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = Zeroizing::new(self.marshal());
        format!("{HEX_PREFIX}{}", hex::encode(&*bytes))
    }

    /// Decodes a share from a hex line
    ///
    /// Surrounding whitespace and the `0x` prefix are optional.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidHex`] for non-hex input, otherwise the
    /// same errors as [`Share::unmarshal`]
    pub fn from_hex(line: &str) -> Result<Self, CodecError> {
        let bytes = Zeroizing::new(hex::decode(strip_hex_prefix(line))?);
        Self::unmarshal(&bytes)
    }
}

/// Trims whitespace and an optional `0x`/`0X` prefix from a hex line
#[must_use]
pub fn strip_hex_prefix(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(HEX_PREFIX)
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    fn index(value: u8) -> ShareIndex {
        ShareIndex::new(value).unwrap()
    }

    #[test]
    fn test_marshal_layout() {
        let share = Share::new(index(1), BigUint::from(0x0102u32)).unwrap();
        let bytes = share.marshal();

        assert_eq!(bytes[0], 1);
        assert!(bytes[1..SHARE_LEN - 2].iter().all(|&b| b == 0));
        assert_eq!(bytes[SHARE_LEN - 2], 0x01);
        assert_eq!(bytes[SHARE_LEN - 1], 0x02);
    }

    #[test]
    fn test_marshal_zero_value() {
        let share = Share::new(index(7), BigUint::zero()).unwrap();
        let bytes = share.marshal();

        assert_eq!(bytes[0], 7);
        assert!(bytes[1..].iter().all(|&b| b == 0));
        assert_eq!(Share::unmarshal(&bytes).unwrap(), share);
    }

    #[test]
    fn test_marshal_max_value() {
        let max = (BigUint::one() << VALUE_BITS) - 1u32;
        let share = Share::new(index(255), max).unwrap();
        let bytes = share.marshal();

        assert!(bytes.iter().all(|&b| b == 0xff));
        assert_eq!(Share::unmarshal(&bytes).unwrap(), share);
    }

    #[test]
    fn test_new_rejects_oversized_value() {
        let too_big = BigUint::one() << VALUE_BITS;
        let result = Share::new(index(1), too_big);
        assert!(matches!(
            result,
            Err(CodecError::ValueOutOfRange { bits: 1025 })
        ));
    }

    #[test]
    fn test_unmarshal_rejects_wrong_length() {
        for len in [0, 1, SHARE_LEN - 1, SHARE_LEN + 1, 2 * SHARE_LEN] {
            let bytes = vec![1u8; len];
            assert!(matches!(
                Share::unmarshal(&bytes),
                Err(CodecError::MalformedShare { len: l }) if l == len
            ));
        }
    }

    #[test]
    fn test_unmarshal_rejects_zero_index() {
        let bytes = [0u8; SHARE_LEN];
        assert!(matches!(
            Share::unmarshal(&bytes),
            Err(CodecError::ZeroIndex)
        ));
    }

    #[test]
    fn test_hex_line_round_trip() {
        let share = Share::new(index(42), BigUint::from(123_456_789u64)).unwrap();
        let line = share.to_hex();

        assert!(line.starts_with("0x2a"));
        assert_eq!(line.len(), 2 + 2 * SHARE_LEN);
        assert_eq!(Share::from_hex(&line).unwrap(), share);
        assert_eq!(Share::from_hex(&format!("  {line}\n")).unwrap(), share);
        assert_eq!(Share::from_hex(&line[2..]).unwrap(), share);
    }

    #[test]
    fn test_from_hex_rejects_bad_hex() {
        assert!(matches!(
            Share::from_hex("0xzz"),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_short_line() {
        assert!(matches!(
            Share::from_hex("0x01ff"),
            Err(CodecError::MalformedShare { len: 2 })
        ));
    }

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix(" 0xabc "), "abc");
        assert_eq!(strip_hex_prefix("0XABC"), "ABC");
        assert_eq!(strip_hex_prefix("abc"), "abc");
    }
}
