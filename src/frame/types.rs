//! Frame type identifiers and flag bits.

/// HTTP/2 stream identifier. Only the low 31 bits are representable on the
/// wire.
pub type StreamId = u32;

/// Length of the fixed frame header: 24-bit length, type, flags and stream id.
pub const FRAME_HEADER_LEN: usize = 9;

/// Mask selecting the 31 stream-identifier bits of a frame header field.
pub(crate) const STREAM_ID_MASK: u32 = 0x7fff_ffff;

/// Frame types defined by RFC 9113 plus the METADATA extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrameType {
    Data = 0x0,
    Headers = 0x1,
    Priority = 0x2,
    RstStream = 0x3,
    Settings = 0x4,
    PushPromise = 0x5,
    Ping = 0x6,
    GoAway = 0x7,
    WindowUpdate = 0x8,
    Continuation = 0x9,
    /// Extension frame carrying an HPACK-encoded metadata block.
    Metadata = 0x4d,
}

impl FrameType {
    /// Return the on-wire type octet.
    #[must_use]
    pub const fn to_wire(self) -> u8 { self as u8 }

    /// Map a wire octet back to a known frame type.
    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        Some(match value {
            0x0 => Self::Data,
            0x1 => Self::Headers,
            0x2 => Self::Priority,
            0x3 => Self::RstStream,
            0x4 => Self::Settings,
            0x5 => Self::PushPromise,
            0x6 => Self::Ping,
            0x7 => Self::GoAway,
            0x8 => Self::WindowUpdate,
            0x9 => Self::Continuation,
            0x4d => Self::Metadata,
            _ => return None,
        })
    }
}

impl From<FrameType> for u8 {
    fn from(value: FrameType) -> Self { value.to_wire() }
}

/// Flag bits. Several share a value and differ only by frame type.
pub mod flags {
    /// DATA, HEADERS: last frame the sender will send on the stream.
    pub const END_STREAM: u8 = 0x1;
    /// SETTINGS, PING: acknowledgement.
    pub const ACK: u8 = 0x1;
    /// HEADERS, CONTINUATION: the header block ends in this frame.
    pub const END_HEADERS: u8 = 0x4;
    /// METADATA: the metadata block ends in this frame.
    pub const END_METADATA: u8 = 0x4;
    /// DATA, HEADERS: a Pad Length field precedes the payload.
    pub const PADDED: u8 = 0x8;
    /// HEADERS: stream dependency and weight precede the block.
    pub const PRIORITY: u8 = 0x20;
}
