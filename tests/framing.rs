//! Integration tests for the text framing codec
//!
//! Drives `TextCodec` through `tokio_util::codec::{FramedRead, FramedWrite}` over an
//! in-memory duplex pipe, plus incremental buffer fills like a slow network would give.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use bytes::BytesMut;
use data_stream_codec::utils::{from_code_units, to_code_units};
use data_stream_codec::{CodecError, DataWriter, TextCodec};
use futures::{SinkExt, StreamExt};
use tokio_util::codec::{Decoder, Encoder, FramedRead, FramedWrite};

#[tokio::test]
async fn test_framed_round_trip_over_duplex() {
    let (client, server) = tokio::io::duplex(64);
    let messages = ["hello", "", "\u{0}null\u{0}", "\u{4E16}\u{754C}", "\u{1F980} crab"];

    let writer = tokio::spawn(async move {
        let mut sink = FramedWrite::new(client, TextCodec::new());
        for msg in messages {
            sink.send(to_code_units(msg)).await.unwrap();
        }
    });

    let mut stream = FramedRead::new(server, TextCodec::new());
    let mut received = Vec::new();
    while let Some(frame) = stream.next().await {
        received.push(from_code_units(&frame.unwrap()).unwrap());
    }
    writer.await.unwrap();

    assert_eq!(received, messages);
}

#[tokio::test]
async fn test_framed_read_surfaces_malformed_frame() {
    let (mut client, server) = tokio::io::duplex(64);
    tokio::spawn(async move {
        use tokio::io::AsyncWriteExt;
        client.write_all(&[0x00, 0x02, 0xC2, 0x41]).await.unwrap();
    });

    let mut stream = FramedRead::new(server, TextCodec::new());
    let err = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput { offset: 0, .. }));
}

#[test]
fn test_incremental_buffer_fill() {
    let mut codec = TextCodec::new();
    let mut full = BytesMut::new();
    codec.encode(to_code_units("slow \u{00E9}"), &mut full).unwrap();

    let mut buffer = BytesMut::new();
    for (i, byte) in full.iter().enumerate() {
        buffer.extend_from_slice(&[*byte]);
        let result = codec.decode(&mut buffer).expect("Should not error");

        if i < full.len() - 1 {
            assert!(result.is_none());
            assert_eq!(buffer.len(), i + 1);
        } else {
            assert_eq!(result, Some(to_code_units("slow \u{00E9}")));
            assert!(buffer.is_empty());
        }
    }
}

#[test]
fn test_codec_matches_writer_bytes() {
    let text = to_code_units("same \u{0} bytes \u{FFFF}");

    let mut codec = TextCodec::new();
    let mut framed = BytesMut::new();
    codec.encode(text.as_slice(), &mut framed).unwrap();

    let mut writer = DataWriter::new(Vec::new());
    writer.write_utf(&text).unwrap();

    assert_eq!(&framed[..], writer.get_ref().as_slice());
}

#[test]
fn test_oversized_prefix_rejected_before_body_arrives() {
    let mut codec = TextCodec::with_max_text_length(1024);
    let mut buffer = BytesMut::from(&[0x10, 0x00][..]);
    assert!(matches!(
        codec.decode(&mut buffer),
        Err(CodecError::LengthExceeded(4096))
    ));
}
