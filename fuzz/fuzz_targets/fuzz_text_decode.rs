#![no_main]

use data_stream_codec::DataReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Length prefix + arbitrary body: must error or decode, never panic
    let mut reader = DataReader::new(data);
    while reader.read_utf().is_ok() {}
});
