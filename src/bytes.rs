//! Byte helpers: hex conversion, big-endian integers, concatenation
//!
//! `number_to_bytes` and `number_to_min_bytes` have different overflow
//! policies. The first writes a fixed width and silently drops high-order
//! bits; the second produces the canonical minimal encoding.

use crate::error::Result;

/// Decode a hex string, with or without a `0x`/`0X` prefix.
///
/// Digits are case-insensitive. Odd length or a non-hex digit is a
/// [`InteropError::Decode`](crate::InteropError::Decode).
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    Ok(hex::decode(digits)?)
}

/// Render bytes as uppercase hex, optionally `0x`-prefixed
pub fn bytes_to_hex(bytes: &[u8], with_prefix: bool) -> String {
    let digits = hex::encode_upper(bytes);
    if with_prefix {
        format!("0x{}", digits)
    } else {
        digits
    }
}

/// Encode `num` into exactly `length` big-endian bytes.
///
/// Bits that do not fit are discarded. Callers only pass values already
/// known to fit (e.g. a validated chain type or a length <= 255).
pub fn number_to_bytes(num: u128, length: usize) -> Vec<u8> {
    let mut out = vec![0u8; length];
    let mut rest = num;
    for byte in out.iter_mut().rev() {
        *byte = (rest & 0xff) as u8;
        rest >>= 8;
    }
    out
}

/// Encode `num` into the fewest big-endian bytes with no leading zero.
///
/// Zero encodes to an empty sequence, meaning "no chain reference".
pub fn number_to_min_bytes(num: u128) -> Vec<u8> {
    let width = (u128::BITS - num.leading_zeros()).div_ceil(8) as usize;
    number_to_bytes(num, width)
}

/// Interpret big-endian bytes as an unsigned integer.
///
/// Returns `None` when the value does not fit in a `u128`.
pub fn bytes_to_number(bytes: &[u8]) -> Option<u128> {
    let significant = match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => return Some(0),
    };
    if significant.len() > 16 {
        return None;
    }
    Some(
        significant
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
    )
}

/// Concatenate byte sequences in order
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InteropError;

    #[test]
    fn test_hex_to_bytes_prefixes() {
        assert_eq!(hex_to_bytes("0xdeadBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("0XDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex_to_bytes("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_to_bytes_rejects_malformed() {
        assert!(matches!(
            hex_to_bytes("0xabc"),
            Err(InteropError::Decode(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            hex_to_bytes("0xzz"),
            Err(InteropError::Decode(
                hex::FromHexError::InvalidHexCharacter { c: 'z', .. }
            ))
        ));
        // Only a single prefix is stripped
        assert!(hex_to_bytes("0x0x00").is_err());
    }

    #[test]
    fn test_bytes_to_hex_uppercase() {
        assert_eq!(bytes_to_hex(&[0xab, 0x01], true), "0xAB01");
        assert_eq!(bytes_to_hex(&[0xab, 0x01], false), "AB01");
        assert_eq!(bytes_to_hex(&[], true), "0x");
    }

    #[test]
    fn test_hex_roundtrip() {
        let samples: [&[u8]; 4] = [&[], &[0x00], &[0xff, 0x10, 0x00], &[0xd8; 20]];
        for bytes in samples {
            assert_eq!(hex_to_bytes(&bytes_to_hex(bytes, false)).unwrap(), bytes);
            assert_eq!(hex_to_bytes(&bytes_to_hex(bytes, true)).unwrap(), bytes);
        }
    }

    #[test]
    fn test_number_to_bytes_fixed_width() {
        assert_eq!(number_to_bytes(1, 2), vec![0x00, 0x01]);
        assert_eq!(number_to_bytes(0xffff, 2), vec![0xff, 0xff]);
        assert_eq!(number_to_bytes(20, 1), vec![0x14]);
        assert_eq!(number_to_bytes(0, 0), Vec::<u8>::new());
    }

    #[test]
    fn test_number_to_bytes_truncates() {
        assert_eq!(number_to_bytes(0x1_0001, 2), vec![0x00, 0x01]);
        assert_eq!(number_to_bytes(0x1234, 1), vec![0x34]);
    }

    #[test]
    fn test_number_to_bytes_wider_than_u128() {
        let out = number_to_bytes(u128::MAX, 18);
        assert_eq!(&out[..2], &[0, 0]);
        assert!(out[2..].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_number_to_min_bytes() {
        assert_eq!(number_to_min_bytes(0), Vec::<u8>::new());
        assert_eq!(number_to_min_bytes(1), vec![0x01]);
        assert_eq!(number_to_min_bytes(137), vec![0x89]);
        assert_eq!(number_to_min_bytes(255), vec![0xff]);
        assert_eq!(number_to_min_bytes(256), vec![0x01, 0x00]);
        assert_eq!(number_to_min_bytes(42161), vec![0xa4, 0xb1]);
        assert_eq!(number_to_min_bytes(u128::MAX), vec![0xff; 16]);
    }

    #[test]
    fn test_number_to_min_bytes_has_no_leading_zero() {
        for n in [1u128, 0x80, 0x100, 0xffff, 0x1_0000, 11_155_111, u64::MAX as u128] {
            let bytes = number_to_min_bytes(n);
            assert_ne!(bytes[0], 0, "leading zero for {}", n);
            assert_eq!(bytes_to_number(&bytes), Some(n));
        }
    }

    #[test]
    fn test_bytes_to_number() {
        assert_eq!(bytes_to_number(&[]), Some(0));
        assert_eq!(bytes_to_number(&[0x00, 0x00, 0x01]), Some(1));
        assert_eq!(bytes_to_number(&[0xa4, 0xb1]), Some(42161));
        assert_eq!(bytes_to_number(&[0x01; 17]), None);
        // Leading zeros do not count against the width
        let mut padded = vec![0u8; 4];
        padded.extend_from_slice(&[0xff; 16]);
        assert_eq!(bytes_to_number(&padded), Some(u128::MAX));
    }

    #[test]
    fn test_concat_bytes() {
        assert_eq!(concat_bytes(&[&[1, 2], &[], &[3]]), vec![1, 2, 3]);
        assert_eq!(concat_bytes(&[]), Vec::<u8>::new());
    }
}
