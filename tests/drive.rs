//! Replaying sequences into an in-memory server.

use std::io;

use h2seq::{FrameSequence, FrameType, frame::flags};
use h2seq_testing::{decode_frames, drive_with_sequence, strip_preface};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tracing_test::traced_test;

/// Reads the client's frames and answers every PING with a PING ACK.
async fn ping_responder(mut server: DuplexStream) {
    let mut input = Vec::new();
    if server.read_to_end(&mut input).await.is_err() {
        return;
    }
    let Some(body) = strip_preface(&input) else {
        return;
    };
    let Ok(frames) = decode_frames(body) else {
        return;
    };

    let mut reply = FrameSequence::new();
    reply.server_preface();
    for frame in frames {
        if frame.kind() == Some(FrameType::Ping) && !frame.has_flags(flags::ACK) {
            let id = u64::from_be_bytes(frame.payload[..8].try_into().unwrap_or([0; 8]));
            reply.ping_ack(id);
        }
    }
    if let Ok(bytes) = reply.serialize() {
        let _ = server.write_all(&bytes).await;
    }
}

async fn exploding_responder(_server: DuplexStream) {
    panic!("responder exploded");
}

#[tokio::test]
async fn server_sees_the_sequence_as_peer_input() -> io::Result<()> {
    let mut seq = FrameSequence::new();
    seq.client_preface().ping(7).ping(8).settings_ack();

    let out = drive_with_sequence(ping_responder, &seq).await?;
    let frames = decode_frames(&out)?;

    let acks: Vec<&[u8]> = frames
        .iter()
        .filter(|f| f.kind() == Some(FrameType::Ping))
        .map(|f| f.payload.as_ref())
        .collect();
    assert_eq!(frames[0].kind(), Some(FrameType::Settings));
    assert_eq!(acks, [&7u64.to_be_bytes()[..], &8u64.to_be_bytes()[..]]);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn server_panic_is_logged() {
    let mut seq = FrameSequence::new();
    seq.client_preface();

    let result = drive_with_sequence(exploding_responder, &seq).await;

    assert!(result.is_err());
    assert!(logs_contain("server task panicked"));
    assert!(logs_contain("responder exploded"));
}
