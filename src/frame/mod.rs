//! HTTP/2 frame vocabulary: frame types, flags, error codes and the
//! [`FrameIntent`] sum type queued by
//! [`FrameSequence`](crate::sequence::FrameSequence).

pub mod error_code;
pub mod intent;
pub mod types;

pub use error_code::ErrorCode;
pub use intent::{FrameIntent, Setting, settings_id};
pub use types::{FRAME_HEADER_LEN, FrameType, StreamId, flags};
