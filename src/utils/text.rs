//! # Host Text Conversion
//!
//! The codec works on UTF-16 code units. These helpers move between that model and
//! Rust's scalar-value based `str`/`String`.

use crate::error::{CodecError, Result};

/// Split `s` into UTF-16 code units; characters outside the BMP become surrogate pairs.
pub fn to_code_units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Join code units into a `String`, failing on the first unpaired surrogate.
pub fn from_code_units(units: &[u16]) -> Result<String> {
    let mut out = String::with_capacity(units.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                offset += ch.len_utf16();
            }
            Err(_) => return Err(CodecError::InvalidUtf16 { offset }),
        }
    }
    Ok(out)
}

/// Join code units into a `String`, replacing unpaired surrogates with U+FFFD.
pub fn from_code_units_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_supplementary_char_becomes_pair() {
        assert_eq!(to_code_units("a\u{10437}"), vec![0x0061, 0xD801, 0xDC37]);
    }

    #[test]
    fn test_strict_round_trip() {
        let s = "héllo \u{4E16}\u{754C} \u{1F600}\u{0}";
        assert_eq!(from_code_units(&to_code_units(s)).unwrap(), s);
    }

    #[test]
    fn test_unpaired_surrogate_offset() {
        match from_code_units(&[0x0041, 0xD83D, 0xDE00, 0xDC00]) {
            Err(CodecError::InvalidUtf16 { offset }) => assert_eq!(offset, 3),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            from_code_units(&[0xD800]),
            Err(CodecError::InvalidUtf16 { offset: 0 })
        ));
    }

    #[test]
    fn test_lossy_replaces_surrogates() {
        assert_eq!(from_code_units_lossy(&[0x0041, 0xDC00]), "A\u{FFFD}");
    }
}
