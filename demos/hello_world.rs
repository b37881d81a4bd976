//! Example: Writing and reading a string through the data stream codec
//!
//! Writes "Hello World" as length-prefixed modified UTF-8 into an in-memory buffer,
//! reads it back, and prints it.
//!
//! Run with: `cargo run --example hello_world`

use data_stream_codec::config::CodecConfig;
use data_stream_codec::utils::logging::init_logging;
use data_stream_codec::{DataReader, DataWriter};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CodecConfig::from_env()?;
    config.validate_strict()?;
    init_logging(&config.logging)?;

    let mut writer = DataWriter::with_config(Vec::new(), &config.text);
    writer.write_str("Hello World")?;
    let bytes = writer.into_inner();
    info!(bytes = bytes.len(), "Encoded text");
    println!("Wire bytes: {:02X?}", bytes);

    let mut reader = DataReader::with_config(bytes.as_slice(), &config.text);
    let text = reader.read_string()?;
    println!("{text}");

    Ok(())
}
