//! # Fixed-Width Primitives
//!
//! Big-endian encoding for the fixed-size wire types.
//!
//! ## Wire Format
//! ```text
//! bool     1 byte   0x00 = false, anything else = true (written as 0x01)
//! u8/i8    1 byte
//! u16/i16  2 bytes  big-endian (also used for 16-bit char code units)
//! u32/i32  4 bytes  big-endian
//! u64/i64  8 bytes  big-endian
//! f32      4 bytes  big-endian IEEE-754 bit pattern
//! f64      8 bytes  big-endian IEEE-754 bit pattern
//! ```
//!
//! Signed and unsigned types of the same width share a layout. Floats travel as raw
//! bit patterns, so NaN payloads survive a round trip unchanged.

use crate::core::stream::{ByteSink, ByteSource};
use crate::error::Result;

/// A value with a fixed big-endian wire representation
pub trait FixedWidth: Sized + Copy {
    /// Number of bytes on the wire
    const WIDTH: usize;

    /// Write exactly `WIDTH` bytes to `sink`.
    fn write_be<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<()>;

    /// Read exactly `WIDTH` bytes from `source`.
    fn read_be<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self>;
}

macro_rules! impl_fixed_width_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn write_be<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<()> {
                    sink.write_all_bytes(&self.to_be_bytes())
                }

                #[inline]
                fn read_be<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    source.read_exact_bytes(&mut buf)?;
                    Ok(<$ty>::from_be_bytes(buf))
                }
            }
        )*
    };
}

impl_fixed_width_int!(u8, i8, u16, i16, u32, i32, u64, i64);

// Floats go through their bit patterns rather than any numeric conversion
macro_rules! impl_fixed_width_float {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = <$bits as FixedWidth>::WIDTH;

                #[inline]
                fn write_be<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<()> {
                    self.to_bits().write_be(sink)
                }

                #[inline]
                fn read_be<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
                    <$bits>::read_be(source).map(<$ty>::from_bits)
                }
            }
        )*
    };
}

impl_fixed_width_float!(f32 => u32, f64 => u64);

impl FixedWidth for bool {
    const WIDTH: usize = 1;

    fn write_be<S: ByteSink + ?Sized>(self, sink: &mut S) -> Result<()> {
        u8::from(self).write_be(sink)
    }

    fn read_be<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
        u8::read_be(source).map(|b| b != 0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::error::CodecError;

    fn encode<T: FixedWidth>(v: T) -> Vec<u8> {
        let mut out = Vec::new();
        v.write_be(&mut out).expect("write to Vec");
        assert_eq!(out.len(), T::WIDTH);
        out
    }

    #[test]
    fn test_widths() {
        assert_eq!(bool::WIDTH, 1);
        assert_eq!(i8::WIDTH, 1);
        assert_eq!(u16::WIDTH, 2);
        assert_eq!(i32::WIDTH, 4);
        assert_eq!(f32::WIDTH, 4);
        assert_eq!(u64::WIDTH, 8);
        assert_eq!(f64::WIDTH, 8);
    }

    #[test]
    fn test_big_endian_layout() {
        assert_eq!(encode(0x0102u16), vec![0x01, 0x02]);
        assert_eq!(encode(-2i16), vec![0xFF, 0xFE]);
        assert_eq!(encode(0xDEADBEEFu32), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(
            encode(0x0102030405060708i64),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_signed_shares_unsigned_layout() {
        assert_eq!(encode(-1i32), encode(u32::MAX));
        let mut src: &[u8] = &[0x80, 0x00];
        assert_eq!(i16::read_be(&mut src).unwrap(), i16::MIN);
    }

    #[test]
    fn test_float_bit_patterns() {
        assert_eq!(encode(f32::from_bits(0x7FC0_0000)), vec![0x7F, 0xC0, 0x00, 0x00]);
        assert_eq!(encode(1.0f64), vec![0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode(-0.0f32), vec![0x80, 0, 0, 0]);
    }

    #[test]
    fn test_nan_payload_survives() {
        let nan = f64::from_bits(0x7FF8_0000_DEAD_BEEF);
        let bytes = encode(nan);
        let back = f64::read_be(&mut bytes.as_slice()).unwrap();
        assert_eq!(back.to_bits(), 0x7FF8_0000_DEAD_BEEF);
    }

    #[test]
    fn test_bool_encoding() {
        assert_eq!(encode(true), vec![0x01]);
        assert_eq!(encode(false), vec![0x00]);
        for b in [0x01u8, 0x02, 0x7F, 0xFF] {
            assert!(bool::read_be(&mut &[b][..]).unwrap());
        }
        assert!(!bool::read_be(&mut &[0u8][..]).unwrap());
    }

    #[test]
    fn test_short_read_is_not_zero_filled() {
        let mut src: &[u8] = &[0x01, 0x02, 0x03];
        match u32::read_be(&mut src) {
            Err(CodecError::ShortRead { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
