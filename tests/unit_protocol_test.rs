use bytes::{Bytes, BytesMut};
use slistdb::core::protocol::{RespFrame, RespFrameCodec};
use slistdb::core::{Command, SlistDBError};
use tokio_util::codec::{Decoder, Encoder};

fn decode_all(input: &[u8]) -> Vec<RespFrame> {
    let mut codec = RespFrameCodec;
    let mut buf = BytesMut::from(input);
    let mut frames = Vec::new();
    while let Some(frame) = codec.decode(&mut buf).unwrap() {
        frames.push(frame);
    }
    frames
}

#[test]
fn test_decode_simple_types() {
    assert_eq!(
        decode_all(b"+OK\r\n"),
        vec![RespFrame::SimpleString("OK".to_string())]
    );
    assert_eq!(
        decode_all(b"-ERR boom\r\n"),
        vec![RespFrame::Error("ERR boom".to_string())]
    );
    assert_eq!(decode_all(b":42\r\n"), vec![RespFrame::Integer(42)]);
    assert_eq!(
        decode_all(b"$5\r\nhello\r\n"),
        vec![RespFrame::BulkString(Bytes::from_static(b"hello"))]
    );
    assert_eq!(decode_all(b"$-1\r\n"), vec![RespFrame::Null]);
    assert_eq!(decode_all(b"*-1\r\n"), vec![RespFrame::NullArray]);
}

#[test]
fn test_decode_command_array() {
    let frames = decode_all(b"*3\r\n$5\r\nSLADD\r\n$1\r\nk\r\n$2\r\ns1\r\n");
    assert_eq!(
        frames,
        vec![RespFrame::Array(vec![
            RespFrame::BulkString(Bytes::from_static(b"SLADD")),
            RespFrame::BulkString(Bytes::from_static(b"k")),
            RespFrame::BulkString(Bytes::from_static(b"s1")),
        ])]
    );
}

#[test]
fn test_decode_waits_for_complete_frame() {
    let mut codec = RespFrameCodec;
    let mut buf = BytesMut::from(&b"$5\r\nhel"[..]);
    assert_eq!(codec.decode(&mut buf).unwrap(), None);
    buf.extend_from_slice(b"lo\r\n");
    assert_eq!(
        codec.decode(&mut buf).unwrap(),
        Some(RespFrame::BulkString(Bytes::from_static(b"hello")))
    );
}

#[test]
fn test_decode_rejects_unknown_prefix() {
    let mut codec = RespFrameCodec;
    let mut buf = BytesMut::from(&b"?what\r\n"[..]);
    assert!(matches!(
        codec.decode(&mut buf),
        Err(SlistDBError::SyntaxError)
    ));
}

#[test]
fn test_encode_decode_roundtrip() {
    let frame = RespFrame::Array(vec![
        RespFrame::SimpleString("OK".to_string()),
        RespFrame::Integer(-7),
        RespFrame::BulkString(Bytes::from_static(b"payload")),
        RespFrame::Null,
    ]);
    let mut codec = RespFrameCodec;
    let mut buf = BytesMut::new();
    codec.encode(frame.clone(), &mut buf).unwrap();
    assert_eq!(codec.decode(&mut buf).unwrap(), Some(frame));
    assert!(buf.is_empty());
}

#[test]
fn test_command_dispatch_is_case_insensitive() {
    let frame = RespFrame::Array(vec![
        RespFrame::BulkString(Bytes::from_static(b"SlCaRd")),
        RespFrame::BulkString(Bytes::from_static(b"k")),
    ]);
    let command = Command::try_from(frame).unwrap();
    assert_eq!(command.name(), "slcard");
}

#[test]
fn test_command_dispatch_rejects_unknown_name() {
    let frame = RespFrame::Array(vec![RespFrame::BulkString(Bytes::from_static(b"NOPE"))]);
    let err = Command::try_from(frame).unwrap_err();
    assert!(matches!(err, SlistDBError::UnknownCommand(name) if name == "nope"));
}

#[test]
fn test_command_dispatch_rejects_non_array() {
    let err = Command::try_from(RespFrame::Integer(1)).unwrap_err();
    assert!(matches!(err, SlistDBError::ProtocolError(_)));
}
