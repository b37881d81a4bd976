//! # Core Codec Components
//!
//! Byte-stream plumbing, fixed-width primitives, and the modified UTF-8 text format.
//!
//! ## Components
//! - **Stream**: read-exact / write-all abstraction over `std::io`
//! - **Primitive**: big-endian fixed-width values
//! - **Mutf8**: the text encoding algorithm
//! - **Writer / Reader**: typed encoder and decoder over a stream
//! - **Codec**: Tokio codec for framing text over byte streams
//!
//! ## Wire Format
//! ```text
//! fixed-width:  [Value(1|2|4|8, big-endian)]
//! text:         [Length(2, big-endian)] [Modified UTF-8(Length)]
//! ```

pub mod codec;
pub mod mutf8;
pub mod primitive;
pub mod reader;
pub mod stream;
pub mod writer;
