#![no_main]

use data_stream_codec::core::mutf8;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();

    if let Ok(encoded) = mutf8::encode(&units) {
        let decoded = mutf8::decode(&encoded[2..]).expect("encoder output must decode");
        assert_eq!(decoded, units);
    }
});
