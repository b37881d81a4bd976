//! # Text Framing Codec
//!
//! `tokio_util` codec for streams made of back-to-back length-prefixed text values.
//!
//! The decoder waits until a whole frame is buffered, then splits it off and decodes
//! it. Partial frames stay in the buffer untouched.

use crate::config::{TextConfig, LENGTH_PREFIX_SIZE, MAX_TEXT_LENGTH};
use crate::core::mutf8;
use crate::error::{CodecError, Result};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

/// Frames modified UTF-8 text over a byte stream
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    max_text_length: usize,
}

impl TextCodec {
    pub fn new() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
        }
    }

    pub fn with_max_text_length(max_text_length: usize) -> Self {
        Self {
            max_text_length: max_text_length.min(MAX_TEXT_LENGTH),
        }
    }

    pub fn with_config(config: &TextConfig) -> Self {
        Self::with_max_text_length(config.max_text_length)
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for TextCodec {
    type Item = Vec<u16>;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if src.len() < LENGTH_PREFIX_SIZE {
            return Ok(None);
        }

        let len = usize::from(u16::from_be_bytes([src[0], src[1]]));
        if len > self.max_text_length {
            debug!(len, limit = self.max_text_length, "Rejecting oversized text frame");
            return Err(CodecError::LengthExceeded(len));
        }

        let frame_len = LENGTH_PREFIX_SIZE + len;
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        let mut frame = src.split_to(frame_len);
        frame.advance(LENGTH_PREFIX_SIZE);
        let units = mutf8::decode(&frame)?;
        trace!(bytes = len, units = units.len(), "Decoded text frame");
        Ok(Some(units))
    }
}

impl<'a> Encoder<&'a [u16]> for TextCodec {
    type Error = CodecError;

    fn encode(&mut self, units: &'a [u16], dst: &mut BytesMut) -> Result<()> {
        let len = mutf8::encoded_len(units);
        if len > self.max_text_length {
            debug!(len, limit = self.max_text_length, "Rejecting oversized text");
            return Err(CodecError::LengthExceeded(len));
        }

        let mut frame = Vec::with_capacity(LENGTH_PREFIX_SIZE + len);
        mutf8::encode_into(units, &mut frame)?;
        dst.reserve(frame.len());
        dst.put_slice(&frame);
        Ok(())
    }
}

impl Encoder<Vec<u16>> for TextCodec {
    type Error = CodecError;

    fn encode(&mut self, units: Vec<u16>, dst: &mut BytesMut) -> Result<()> {
        Encoder::<&[u16]>::encode(self, &units, dst)
    }
}
