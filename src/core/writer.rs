//! # Data Writer
//!
//! The encoding half of the codec: typed values in, big-endian bytes out.
//!
//! ## Usage
//! ```rust
//! use data_stream_codec::core::writer::DataWriter;
//!
//! let mut writer = DataWriter::new(Vec::new());
//! writer.write_bool(true)?;
//! writer.write_i32(-2)?;
//! writer.write_str("hi")?;
//! assert_eq!(
//!     writer.into_inner(),
//!     vec![0x01, 0xFF, 0xFF, 0xFF, 0xFE, 0x00, 0x02, b'h', b'i']
//! );
//! # Ok::<(), data_stream_codec::error::CodecError>(())
//! ```

use crate::config::{TextConfig, MAX_TEXT_LENGTH};
use crate::core::mutf8;
use crate::core::primitive::FixedWidth;
use crate::core::stream::ByteSink;
use crate::error::Result;
use crate::utils::text::to_code_units;
use tracing::trace;

/// Big-endian encoder over a byte sink
///
/// A writer holds no state between calls apart from the sink itself. It is not meant to
/// be shared between threads; use one writer per stream.
#[derive(Debug)]
pub struct DataWriter<W> {
    inner: W,
    max_text_length: usize,
}

impl<W: ByteSink> DataWriter<W> {
    /// Wrap `inner` with the full 65535-byte text limit.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            max_text_length: MAX_TEXT_LENGTH,
        }
    }

    /// Wrap `inner` with a tighter text limit. Values above 65535 are clamped.
    pub fn with_max_text_length(inner: W, max_text_length: usize) -> Self {
        Self {
            inner,
            max_text_length: max_text_length.min(MAX_TEXT_LENGTH),
        }
    }

    /// Wrap `inner` using the limits from `config`.
    pub fn with_config(inner: W, config: &TextConfig) -> Self {
        Self::with_max_text_length(inner, config.max_text_length)
    }

    /// Write any fixed-width value.
    #[inline]
    pub fn write<T: FixedWidth>(&mut self, value: T) -> Result<()> {
        value.write_be(&mut self.inner)
    }

    /// Write `0x01` for true, `0x00` for false.
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write(v)
    }

    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write(v)
    }

    pub fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write(v)
    }

    pub fn write_u16(&mut self, v: u16) -> Result<()> {
        self.write(v)
    }

    pub fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write(v)
    }

    /// Write a single UTF-16 code unit, big-endian.
    pub fn write_char(&mut self, unit: u16) -> Result<()> {
        self.write(unit)
    }

    pub fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write(v)
    }

    pub fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write(v)
    }

    pub fn write_u64(&mut self, v: u64) -> Result<()> {
        self.write(v)
    }

    pub fn write_i64(&mut self, v: i64) -> Result<()> {
        self.write(v)
    }

    /// Write the IEEE-754 bit pattern of `v`.
    pub fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write(v)
    }

    /// Write the IEEE-754 bit pattern of `v`.
    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        self.write(v)
    }

    /// Write length-prefixed modified UTF-8 text.
    ///
    /// The whole frame is assembled before anything reaches the sink, so a
    /// [`LengthExceeded`](crate::error::CodecError::LengthExceeded) error leaves the
    /// stream untouched.
    pub fn write_utf(&mut self, units: &[u16]) -> Result<()> {
        let mut frame = Vec::new();
        mutf8::encode_into_with_limit(units, &mut frame, self.max_text_length)?;
        trace!(units = units.len(), bytes = frame.len(), "Writing text frame");
        self.inner.write_all_bytes(&frame)
    }

    /// Write a Rust string as length-prefixed modified UTF-8 via its UTF-16 form.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_utf(&to_code_units(s))
    }

    /// Write raw bytes with no framing.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all_bytes(bytes)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush_bytes()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::error::CodecError;
    use std::io::{self, Write};

    /// Accepts `budget` bytes, then fails every write.
    struct Limited {
        written: Vec<u8>,
        budget: usize,
    }

    impl Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mixed_sequence() {
        let mut w = DataWriter::new(Vec::new());
        w.write_bool(false).unwrap();
        w.write_u16(0xABCD).unwrap();
        w.write_char(0x00E9).unwrap();
        w.write_f32(f32::from_bits(0x7FC0_0000)).unwrap();
        w.write_i8(-1).unwrap();
        assert_eq!(
            w.into_inner(),
            vec![0x00, 0xAB, 0xCD, 0x00, 0xE9, 0x7F, 0xC0, 0x00, 0x00, 0xFF]
        );
    }

    #[test]
    fn test_char_is_big_endian() {
        let mut w = DataWriter::new(Vec::new());
        w.write_char(0x4E2D).unwrap();
        assert_eq!(w.into_inner(), vec![0x4E, 0x2D]);
    }

    #[test]
    fn test_write_str_uses_utf16_units() {
        let mut w = DataWriter::new(Vec::new());
        w.write_str("\u{0}\u{1F600}").unwrap();
        assert_eq!(
            w.into_inner(),
            vec![0x00, 0x08, 0xC0, 0x80, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]
        );
    }

    #[test]
    fn test_length_exceeded_writes_nothing() {
        let mut w = DataWriter::new(Vec::new());
        w.write_u8(7).unwrap();
        let text = vec![0x0100u16; 32_768]; // 65536 bytes
        assert!(matches!(
            w.write_utf(&text),
            Err(CodecError::LengthExceeded(65_536))
        ));
        assert_eq!(w.into_inner(), vec![7]);
    }

    #[test]
    fn test_configured_limit() {
        let config = TextConfig {
            max_text_length: 4,
        };
        let mut w = DataWriter::with_config(Vec::new(), &config);
        w.write_str("abcd").unwrap();
        assert!(matches!(
            w.write_str("\u{4E2D}\u{4E2D}"),
            Err(CodecError::LengthExceeded(6))
        ));
        assert_eq!(w.get_ref().len(), 6);
    }

    #[test]
    fn test_limit_is_clamped() {
        let w = DataWriter::with_max_text_length(Vec::<u8>::new(), usize::MAX);
        assert_eq!(w.max_text_length, MAX_TEXT_LENGTH);
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut w = DataWriter::new(Limited {
            written: Vec::new(),
            budget: 3,
        });
        w.write_u16(1).unwrap();
        let err = w.write_u32(2).unwrap_err();
        assert!(matches!(err, CodecError::Io(ref e) if e.kind() == io::ErrorKind::WriteZero));
    }

    #[test]
    fn test_raw_bytes_pass_through() {
        let mut w = DataWriter::new(Vec::new());
        w.write_bytes(&[1, 2, 3]).unwrap();
        w.flush().unwrap();
        w.get_mut().push(4);
        assert_eq!(w.into_inner(), vec![1, 2, 3, 4]);
    }
}
