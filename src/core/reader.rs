//! # Data Reader
//!
//! The decoding half of the codec: big-endian bytes in, typed values out.
//!
//! Every read either returns a complete value or an error; a short stream is reported
//! as [`CodecError::ShortRead`] and never padded with zeros.
//!
//! ## Usage
//! ```rust
//! use data_stream_codec::core::reader::DataReader;
//!
//! let bytes = [0x01, 0x00, 0x05, b'H', b'e', b'l', b'l', b'o'];
//! let mut reader = DataReader::new(&bytes[..]);
//! assert!(reader.read_bool()?);
//! assert_eq!(reader.read_string()?, "Hello");
//! # Ok::<(), data_stream_codec::error::CodecError>(())
//! ```

use crate::config::{TextConfig, MAX_TEXT_LENGTH};
use crate::core::mutf8;
use crate::core::primitive::FixedWidth;
use crate::core::stream::ByteSource;
use crate::error::{CodecError, Result};
use crate::utils::text::from_code_units;
use tracing::{debug, trace};

/// Big-endian decoder over a byte source
///
/// Like [`DataWriter`](crate::core::writer::DataWriter), a reader is a single-stream,
/// single-thread object.
#[derive(Debug)]
pub struct DataReader<R> {
    inner: R,
    max_text_length: usize,
}

impl<R: ByteSource> DataReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            max_text_length: MAX_TEXT_LENGTH,
        }
    }

    /// Reject text frames whose length prefix exceeds `max_text_length`.
    pub fn with_max_text_length(inner: R, max_text_length: usize) -> Self {
        Self {
            inner,
            max_text_length: max_text_length.min(MAX_TEXT_LENGTH),
        }
    }

    pub fn with_config(inner: R, config: &TextConfig) -> Self {
        Self::with_max_text_length(inner, config.max_text_length)
    }

    /// Read any fixed-width value.
    #[inline]
    pub fn read<T: FixedWidth>(&mut self) -> Result<T> {
        T::read_be(&mut self.inner)
    }

    /// Any nonzero byte reads as true.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read()
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read()
    }

    /// Read a single big-endian UTF-16 code unit.
    pub fn read_char(&mut self) -> Result<u16> {
        self.read()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read()
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read()
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read()
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read()
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read()
    }

    /// Read length-prefixed modified UTF-8 text as UTF-16 code units.
    pub fn read_utf(&mut self) -> Result<Vec<u16>> {
        let len = usize::from(self.read_u16()?);
        if len > self.max_text_length {
            debug!(len, limit = self.max_text_length, "Rejecting oversized text frame");
            return Err(CodecError::LengthExceeded(len));
        }

        let mut body = vec![0u8; len];
        self.inner.read_exact_bytes(&mut body)?;
        let units = mutf8::decode(&body)?;
        trace!(bytes = len, units = units.len(), "Read text frame");
        Ok(units)
    }

    /// Read length-prefixed text and convert it to a `String`.
    ///
    /// Fails with [`CodecError::InvalidUtf16`] if the text holds an unpaired surrogate;
    /// use [`read_utf`](Self::read_utf) to get the raw code units instead.
    pub fn read_string(&mut self) -> Result<String> {
        let units = self.read_utf()?;
        from_code_units(&units)
    }

    /// Read exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.inner.read_exact_bytes(&mut buf)?;
        Ok(buf)
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
