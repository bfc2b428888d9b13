//! Log output emitted while serializing sequences.

use h2seq::{ErrorCode, FrameSequence};
use h2seq_testing::{LoggerHandle, logger};
use rstest::rstest;

#[rstest]
fn serialize_logs_a_summary(mut logger: LoggerHandle) {
    let mut seq = FrameSequence::new();
    seq.client_preface().ping(1).data(1, "abc", true, None);
    let bytes = seq.serialize().expect("encode");

    let summary = format!("serialized 3 frames (24 preface bytes, {} total)", bytes.len());
    assert!(
        logger.contains(log::Level::Debug, &summary),
        "summary debug record not found"
    );
}

#[rstest]
fn serialize_traces_each_frame(mut logger: LoggerHandle) {
    let mut seq = FrameSequence::new();
    seq.ping(1).rst_stream(5, ErrorCode::Cancel);
    seq.serialize().expect("encode");

    let traced = logger.drain(log::Level::Trace);
    assert_eq!(traced.len(), 2);
    assert!(traced[0].contains("frame #0 (PING) on stream 0: 17 bytes"));
    assert!(traced[1].contains("frame #1 (RST_STREAM) on stream 5: 13 bytes"));
}

#[rstest]
fn encode_failure_is_logged_as_a_warning(mut logger: LoggerHandle) {
    let mut seq = FrameSequence::new();
    seq.ping(1).data(1, "abc", false, Some(999));
    seq.serialize().expect_err("padding should be rejected");

    assert!(
        logger.contains(log::Level::Warn, "frame #1 (DATA) failed to encode"),
        "warning record not found"
    );
}
