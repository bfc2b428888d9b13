//! Integration coverage for the `h2seq_testing` helpers.

use std::io;

use h2seq::{CONNECTION_PREFACE, FrameSequence, FrameType};
use h2seq_testing::{
    RawFrame,
    decode_frames,
    drive_with_sequence,
    drive_with_sequence_with_capacity,
    strip_preface,
    write_sequence,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};

async fn echo(mut server: DuplexStream) {
    let mut input = Vec::new();
    let _ = server.read_to_end(&mut input).await;
    let _ = server.write_all(&input).await;
}

async fn boom(_server: DuplexStream) {
    panic!("boom");
}

#[test]
fn decode_frames_rejects_trailing_bytes() {
    let err = decode_frames(&[0, 0, 4, 0, 0, 0, 0, 0, 1, 1, 2])
        .expect_err("truncated payload should fail");
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(err.to_string().contains("bytes remaining"));
}

#[test]
fn decode_frames_reports_reserved_bit() {
    let frames = decode_frames(&[0, 0, 0, 0x8, 0, 0x80, 0, 0, 0x05]).expect("one frame");
    let frame: &RawFrame = &frames[0];
    assert_eq!(frame.kind(), Some(FrameType::WindowUpdate));
    assert_eq!(frame.stream_id, 5);
    assert!(frame.reserved);
    assert_eq!(frame.wire_len(), 9);
}

#[test]
fn strip_preface_requires_the_full_preface() {
    let mut bytes = CONNECTION_PREFACE.to_vec();
    bytes.push(0xaa);
    assert_eq!(strip_preface(&bytes), Some(&[0xaa][..]));
    assert_eq!(strip_preface(&bytes[1..]), None);
}

#[tokio::test]
async fn drive_replays_the_serialized_sequence() -> io::Result<()> {
    let mut seq = FrameSequence::new();
    seq.client_preface().ping(9).data(1, "abc", true, None);
    let expected = seq
        .serialize()
        .map_err(|err| io::Error::other(err.to_string()))?;

    let out = drive_with_sequence(echo, &seq).await?;
    assert_eq!(out, expected.to_vec());
    Ok(())
}

#[tokio::test]
async fn small_duplex_buffers_still_deliver_everything() -> io::Result<()> {
    let mut seq = FrameSequence::new();
    seq.data(1, vec![7u8; 1000], false, None);

    let out = drive_with_sequence_with_capacity(echo, &seq, 16).await?;
    assert_eq!(out.len(), 9 + 1000);
    Ok(())
}

#[tokio::test]
async fn encode_failures_surface_before_driving() {
    let mut seq = FrameSequence::new();
    seq.rst_stream(u32::MAX, h2seq::ErrorCode::Cancel);

    let err = drive_with_sequence(echo, &seq)
        .await
        .expect_err("invalid stream id should fail");
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(err.to_string().contains("frame #0 (RST_STREAM)"));
}

#[tokio::test]
async fn server_panics_become_errors() {
    let mut seq = FrameSequence::new();
    seq.ping(1);

    let err = drive_with_sequence(boom, &seq)
        .await
        .expect_err("panicking server should fail");
    assert!(err.to_string().starts_with("server task failed: boom"));
}

#[tokio::test]
async fn write_sequence_writes_raw_bytes() -> io::Result<()> {
    let mut seq = FrameSequence::new();
    seq.settings_ack();

    let mut out = Vec::new();
    write_sequence(&mut out, &seq).await?;
    assert_eq!(out, [0, 0, 0, 0x4, 0x1, 0, 0, 0, 0]);
    Ok(())
}
