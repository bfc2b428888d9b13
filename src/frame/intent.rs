//! Frames queued for serialization.
//!
//! Each [`FrameIntent`] variant carries exactly the fields its frame type
//! needs. [`FrameIntent::Unknown`] is the escape hatch for byte patterns the
//! well-formed variants refuse to express, such as a HEADERS frame lacking
//! END_HEADERS.

use bytes::Bytes;

use super::{ErrorCode, StreamId};
use crate::header::Header;

/// A single SETTINGS parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Setting {
    pub id: u16,
    pub value: u32,
}

impl Setting {
    #[must_use]
    pub const fn new(id: u16, value: u32) -> Self { Self { id, value } }
}

/// SETTINGS parameter identifiers from RFC 9113 §6.5.2.
pub mod settings_id {
    pub const HEADER_TABLE_SIZE: u16 = 0x1;
    pub const ENABLE_PUSH: u16 = 0x2;
    pub const MAX_CONCURRENT_STREAMS: u16 = 0x3;
    pub const INITIAL_WINDOW_SIZE: u16 = 0x4;
    pub const MAX_FRAME_SIZE: u16 = 0x5;
    pub const MAX_HEADER_LIST_SIZE: u16 = 0x6;
    /// RFC 8441 extended CONNECT.
    pub const ENABLE_CONNECT_PROTOCOL: u16 = 0x8;
}

/// A frame waiting to be encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameIntent<'a> {
    Data {
        stream_id: StreamId,
        payload: Bytes,
        fin: bool,
        /// Total padding octets, Pad Length field included.
        padding_len: Option<usize>,
    },
    RstStream {
        stream_id: StreamId,
        error_code: ErrorCode,
    },
    Settings {
        values: Vec<Setting>,
        ack: bool,
    },
    Ping {
        id: u64,
        ack: bool,
    },
    GoAway {
        last_good_stream_id: StreamId,
        error_code: ErrorCode,
        debug_data: Bytes,
    },
    /// A complete header block, compressed with the serializing framer's
    /// shared HPACK context.
    Headers {
        stream_id: StreamId,
        headers: Vec<Header<'a>>,
        fin: bool,
    },
    /// A pre-encoded header block fragment.
    Continuation {
        stream_id: StreamId,
        end_headers: bool,
        fragment: Bytes,
    },
    WindowUpdate {
        stream_id: StreamId,
        delta: i32,
    },
    Priority {
        stream_id: StreamId,
        parent_stream_id: StreamId,
        weight: u16,
        exclusive: bool,
    },
    /// Raw type, flags and payload written verbatim.
    Unknown {
        stream_id: StreamId,
        frame_type: u8,
        flags: u8,
        payload: Bytes,
    },
}

impl FrameIntent<'_> {
    /// Short name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Data { .. } => "DATA",
            Self::RstStream { .. } => "RST_STREAM",
            Self::Settings { .. } => "SETTINGS",
            Self::Ping { .. } => "PING",
            Self::GoAway { .. } => "GOAWAY",
            Self::Headers { .. } => "HEADERS",
            Self::Continuation { .. } => "CONTINUATION",
            Self::WindowUpdate { .. } => "WINDOW_UPDATE",
            Self::Priority { .. } => "PRIORITY",
            Self::Unknown { .. } => "UNKNOWN",
        }
    }

    /// Stream the frame is addressed to. Connection-level frames report 0.
    #[must_use]
    pub const fn stream_id(&self) -> StreamId {
        match self {
            Self::Settings { .. } | Self::Ping { .. } | Self::GoAway { .. } => 0,
            Self::Data { stream_id, .. }
            | Self::RstStream { stream_id, .. }
            | Self::Headers { stream_id, .. }
            | Self::Continuation { stream_id, .. }
            | Self::WindowUpdate { stream_id, .. }
            | Self::Priority { stream_id, .. }
            | Self::Unknown { stream_id, .. } => *stream_id,
        }
    }
}
