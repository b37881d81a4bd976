//! # Error Types
//!
//! Error handling for the data stream codec.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`CodecError`]. Errors are terminal for the call that raised them; nothing is
//! retried internally.
//!
//! ## Error Categories
//! - **I/O Errors**: failures from the underlying byte stream, passed through unchanged
//! - **Short Reads**: the stream ended before a fixed-width or length-prefixed field was complete
//! - **Malformed Input**: text bytes that break the modified-UTF-8 grammar
//! - **Length Limits**: text whose encoded form does not fit the 16-bit length prefix
//!
//! ## Example Usage
//! ```rust
//! use data_stream_codec::core::reader::DataReader;
//! use data_stream_codec::error::CodecError;
//!
//! let mut reader = DataReader::new(&[0x00u8][..]);
//! match reader.read_u16() {
//!     Err(CodecError::ShortRead { expected, actual }) => {
//!         assert_eq!((expected, actual), (2, 1));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Static error messages shared by the decoder paths.
pub mod constants {
    pub const ERR_INVALID_LEAD_BYTE: &str = "invalid lead byte";
    pub const ERR_INVALID_CONTINUATION: &str = "continuation byte does not start with 0b10";
    pub const ERR_PARTIAL_CHARACTER: &str = "partial character at end";
}

// CodecError is the single error type for all encode/decode operations
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("Malformed input around byte {offset}: {reason}")]
    MalformedInput { offset: usize, reason: &'static str },

    #[error("Encoded text length {0} exceeds maximum")]
    LengthExceeded(usize),

    #[error("Unpaired surrogate at code unit {offset}")]
    InvalidUtf16 { offset: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CodecError {
    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        CodecError::MalformedInput { offset, reason }
    }

    /// True for errors caused by the byte stream ending early.
    pub fn is_short_read(&self) -> bool {
        matches!(self, CodecError::ShortRead { .. })
    }
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
