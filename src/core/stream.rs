//! # Byte Streams
//!
//! The minimal stream contract the codec depends on: a source that fills a buffer
//! completely or fails, and a sink that writes every byte or fails.
//!
//! Any [`std::io::Read`] is a [`ByteSource`] and any [`std::io::Write`] is a
//! [`ByteSink`]. No seeking, buffering, or framing is assumed.

use crate::error::{CodecError, Result};
use std::io::{self, Read, Write};

/// Source of bytes with "read exactly N or fail" semantics
pub trait ByteSource {
    /// Fill `buf` completely.
    ///
    /// Returns [`CodecError::ShortRead`] if the stream ends first; the contents of
    /// `buf` are unspecified in that case.
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Sink of bytes with "write all or fail" semantics
pub trait ByteSink {
    /// Write every byte of `bytes`.
    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flush anything the sink has buffered.
    fn flush_bytes(&mut self) -> Result<()>;
}

impl<R: Read + ?Sized> ByteSource for R {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(CodecError::ShortRead {
                        expected: buf.len(),
                        actual: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CodecError::Io(e)),
            }
        }
        Ok(())
    }
}

impl<W: Write + ?Sized> ByteSink for W {
    fn write_all_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_all(bytes).map_err(CodecError::Io)
    }

    fn flush_bytes(&mut self) -> Result<()> {
        self.flush().map_err(CodecError::Io)
    }
}
