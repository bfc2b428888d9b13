//! Canonical error and result types for the crate.
//!
//! Appending to a [`FrameSequence`](crate::sequence::FrameSequence) never
//! fails. Failures come from the encoder when an intent carries a field the
//! wire format cannot represent, and are reported against the frame that
//! carried it.

use thiserror::Error;

use crate::frame::StreamId;

/// Field values the frame encoder cannot write.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A stream identifier used the reserved high bit.
    #[error("stream id {stream_id:#x} does not fit in 31 bits")]
    StreamIdOutOfRange { stream_id: StreamId },

    /// The frame payload exceeds the 24-bit length field.
    #[error("frame payload of {len} bytes exceeds max length {max}")]
    PayloadTooLarge { len: usize, max: usize },

    /// DATA padding must cover the Pad Length octet and at most 255 more.
    #[error("padding length {padding_len} outside 1..=256")]
    PaddingOutOfRange { padding_len: usize },
}

/// A queued frame failed to encode during serialization.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("failed to encode frame #{index} ({frame}): {source}")]
pub struct SequenceError {
    /// Zero-based position of the failing frame in the sequence.
    pub index: usize,
    /// Frame kind, as reported by [`FrameIntent::name`](crate::frame::FrameIntent::name).
    pub frame: &'static str,
    #[source]
    pub source: EncodeError,
}

/// Result alias used by serialization entry points.
pub type Result<T> = std::result::Result<T, SequenceError>;
