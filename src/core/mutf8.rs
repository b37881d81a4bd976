//! # Modified UTF-8
//!
//! The length-prefixed text format of the legacy data stream.
//!
//! Text is modelled as a sequence of UTF-16 code units, not Unicode scalar values.
//! Each code unit is encoded on its own, so a surrogate pair becomes two 3-byte
//! sequences and no 4-byte form ever appears.
//!
//! ## Encoding Rules
//! ```text
//! 0x0001..=0x007F   0xxxxxxx
//! 0x0000, 0x0080..=0x07FF   110xxxxx 10xxxxxx
//! 0x0800..=0xFFFF   1110xxxx 10xxxxxx 10xxxxxx
//! ```
//!
//! ## Wire Format
//! ```text
//! [Length(2, big-endian)] [Body(Length)]
//! ```
//! The length counts encoded bytes, not code units, and may not exceed 65535.

use crate::config::{LENGTH_PREFIX_SIZE, MAX_TEXT_LENGTH};
use crate::error::constants::{
    ERR_INVALID_CONTINUATION, ERR_INVALID_LEAD_BYTE, ERR_PARTIAL_CHARACTER,
};
use crate::error::{CodecError, Result};
use tracing::debug;

/// Number of body bytes `unit` occupies once encoded.
#[inline]
pub fn unit_len(unit: u16) -> usize {
    match unit {
        0x0001..=0x007F => 1,
        0x0000 | 0x0080..=0x07FF => 2,
        _ => 3,
    }
}

/// Encoded body length of `units`, excluding the 2-byte prefix.
pub fn encoded_len(units: &[u16]) -> usize {
    units.iter().map(|&u| unit_len(u)).sum()
}

/// Append the encoded body of `units` to `out` without any length check or prefix.
fn encode_body(units: &[u16], out: &mut Vec<u8>) {
    for &c in units {
        match c {
            0x0001..=0x007F => out.push(c as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | ((c >> 6) & 0x1F) as u8);
                out.push(0x80 | (c & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | ((c >> 12) & 0x0F) as u8);
                out.push(0x80 | ((c >> 6) & 0x3F) as u8);
                out.push(0x80 | (c & 0x3F) as u8);
            }
        }
    }
}

/// Append the length prefix and encoded body of `units` to `out`.
///
/// `limit` caps the body length and is itself clamped to [`MAX_TEXT_LENGTH`].
/// When the body would be longer, [`CodecError::LengthExceeded`] is returned and
/// `out` is left untouched.
pub fn encode_into_with_limit(units: &[u16], out: &mut Vec<u8>, limit: usize) -> Result<()> {
    let len = encoded_len(units);
    if len > limit.min(MAX_TEXT_LENGTH) {
        debug!(encoded_len = len, limit, "Rejecting oversized text");
        return Err(CodecError::LengthExceeded(len));
    }

    out.reserve(LENGTH_PREFIX_SIZE + len);
    // len <= MAX_TEXT_LENGTH, so the cast cannot truncate
    out.extend_from_slice(&(len as u16).to_be_bytes());
    encode_body(units, out);
    Ok(())
}

/// Append the length prefix and encoded body of `units` to `out`.
pub fn encode_into(units: &[u16], out: &mut Vec<u8>) -> Result<()> {
    encode_into_with_limit(units, out, MAX_TEXT_LENGTH)
}

/// Encode `units` into a fresh prefixed buffer.
pub fn encode(units: &[u16]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(units, &mut out)?;
    Ok(out)
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Decode an encoded body (no length prefix) back into code units.
///
/// Offsets in [`CodecError::MalformedInput`] point at the lead byte of the
/// offending sequence.
pub fn decode(body: &[u8]) -> Result<Vec<u16>> {
    // every form spends at least one byte per code unit
    let mut units = Vec::with_capacity(body.len());
    let mut pos = 0;

    while pos < body.len() {
        let lead = body[pos];
        match lead >> 4 {
            0..=7 => {
                units.push(u16::from(lead));
                pos += 1;
            }
            12 | 13 => {
                let Some(&c2) = body.get(pos + 1) else {
                    return Err(malformed(pos, ERR_PARTIAL_CHARACTER));
                };
                if !is_continuation(c2) {
                    return Err(malformed(pos, ERR_INVALID_CONTINUATION));
                }
                units.push((u16::from(lead & 0x1F) << 6) | u16::from(c2 & 0x3F));
                pos += 2;
            }
            14 => {
                let (Some(&c2), Some(&c3)) = (body.get(pos + 1), body.get(pos + 2)) else {
                    return Err(malformed(pos, ERR_PARTIAL_CHARACTER));
                };
                if !is_continuation(c2) || !is_continuation(c3) {
                    return Err(malformed(pos, ERR_INVALID_CONTINUATION));
                }
                units.push(
                    (u16::from(lead & 0x0F) << 12)
                        | (u16::from(c2 & 0x3F) << 6)
                        | u16::from(c3 & 0x3F),
                );
                pos += 3;
            }
            _ => return Err(malformed(pos, ERR_INVALID_LEAD_BYTE)),
        }
    }

    Ok(units)
}

fn malformed(offset: usize, reason: &'static str) -> CodecError {
    debug!(offset, reason, "Malformed modified UTF-8");
    CodecError::malformed(offset, reason)
}
