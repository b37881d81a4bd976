//! # Utility Modules
//!
//! Supporting pieces that sit outside the wire codec proper.
//!
//! ## Components
//! - **Text**: conversion between Rust strings and UTF-16 code units
//! - **Logging**: structured logging configuration

pub mod logging;
pub mod text;

pub use text::{from_code_units, from_code_units_lossy, to_code_units};
