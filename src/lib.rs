//! # Data Stream Codec
//!
//! Reads and writes the big-endian binary data stream of a legacy platform: fixed-width
//! integers, IEEE-754 floats, booleans, 16-bit chars, and length-prefixed modified
//! UTF-8 text.
//!
//! ## Quick Start
//! ```rust
//! use data_stream_codec::{DataReader, DataWriter};
//!
//! let mut writer = DataWriter::new(Vec::new());
//! writer.write_str("Hello World")?;
//! writer.write_f64(313.37)?;
//!
//! let bytes = writer.into_inner();
//! let mut reader = DataReader::new(bytes.as_slice());
//! assert_eq!(reader.read_string()?, "Hello World");
//! assert_eq!(reader.read_f64()?, 313.37);
//! # Ok::<(), data_stream_codec::CodecError>(())
//! ```
//!
//! Text is handled as UTF-16 code units ([`DataWriter::write_utf`],
//! [`DataReader::read_utf`]); the `str` conveniences convert at the edge.

#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::codec::TextCodec;
pub use crate::core::primitive::FixedWidth;
pub use crate::core::reader::DataReader;
pub use crate::core::stream::{ByteSink, ByteSource};
pub use crate::core::writer::DataWriter;
pub use crate::error::{CodecError, Result};
