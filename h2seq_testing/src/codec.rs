//! Frame and header-block readers for asserting on serialized sequences.
//!
//! [`RawFrameCodec`] implements [`tokio_util::codec::Decoder`] so it can sit
//! on a `FramedRead` as well as decode a finished buffer via
//! [`decode_frames`]. It performs no validation beyond the length prefix;
//! malformed fixtures decode as-is.

use std::io;

use bytes::{Buf, Bytes, BytesMut};
use h2seq::{
    CONNECTION_PREFACE,
    FrameType,
    StreamId,
    byte_order::{read_network_u24, read_network_u32},
    frame::FRAME_HEADER_LEN,
};
use tokio_util::codec::Decoder;

/// Decoded `(name, value)` pairs.
pub type HeaderList = Vec<(Vec<u8>, Vec<u8>)>;

/// One frame split out of a byte stream, fields as they appeared on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFrame {
    pub frame_type: u8,
    pub flags: u8,
    /// Stream identifier with the reserved bit masked off.
    pub stream_id: StreamId,
    /// Whether the reserved bit was set.
    pub reserved: bool,
    pub payload: Bytes,
}

impl RawFrame {
    /// Known frame type, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<FrameType> { FrameType::from_wire(self.frame_type) }

    /// Whether every bit of `mask` is set.
    #[must_use]
    pub const fn has_flags(&self, mask: u8) -> bool { self.flags & mask == mask }

    /// Size of this frame on the wire.
    #[must_use]
    pub fn wire_len(&self) -> usize { FRAME_HEADER_LEN + self.payload.len() }
}

/// Splits an HTTP/2 byte stream into [`RawFrame`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawFrameCodec;

impl Decoder for RawFrameCodec {
    type Item = RawFrame;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(header) = src.get(..FRAME_HEADER_LEN) else {
            return Ok(None);
        };
        let len = usize::try_from(read_network_u24([header[0], header[1], header[2]]))
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "frame too large"))?;
        if src.len() < FRAME_HEADER_LEN + len {
            src.reserve(FRAME_HEADER_LEN + len - src.len());
            return Ok(None);
        }

        let frame_type = src[3];
        let flags = src[4];
        let raw_stream_id = read_network_u32([src[5], src[6], src[7], src[8]]);
        src.advance(FRAME_HEADER_LEN);
        let payload = src.split_to(len).freeze();

        Ok(Some(RawFrame {
            frame_type,
            flags,
            stream_id: raw_stream_id & 0x7fff_ffff,
            reserved: raw_stream_id & 0x8000_0000 != 0,
            payload,
        }))
    }
}

/// Decode every frame in `bytes`.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidData`] if bytes remain that do not form a
/// complete frame.
///
/// ```rust
/// use h2seq_testing::decode_frames;
///
/// let frames = decode_frames(&[0, 0, 1, 0, 1, 0, 0, 0, 1, 42]).expect("one frame");
/// assert_eq!(frames[0].payload.as_ref(), &[42]);
/// ```
pub fn decode_frames(bytes: &[u8]) -> io::Result<Vec<RawFrame>> {
    let mut codec = RawFrameCodec;
    let mut buf = BytesMut::from(bytes);
    let mut frames = Vec::new();
    while let Some(frame) = codec.decode(&mut buf)? {
        frames.push(frame);
    }
    if !buf.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} bytes remaining after last frame", buf.len()),
        ));
    }
    Ok(frames)
}

/// Return the bytes after the client connection preface, or `None` if
/// `bytes` does not start with it.
#[must_use]
pub fn strip_preface(bytes: &[u8]) -> Option<&[u8]> { bytes.strip_prefix(CONNECTION_PREFACE) }

/// Decode one header block with a fresh HPACK context.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidData`] if the block is not valid HPACK.
pub fn decode_header_block(block: &[u8]) -> io::Result<HeaderList> {
    HeaderBlockDecoder::new().decode(block)
}

/// HPACK decoder that keeps its dynamic table across blocks, mirroring a
/// peer reading every header block of one connection.
pub struct HeaderBlockDecoder {
    inner: fluke_hpack::Decoder<'static>,
}

impl HeaderBlockDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Decoder::new(),
        }
    }

    /// Decode the next block.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidData`] if the block is not valid HPACK
    /// in the current context.
    pub fn decode(&mut self, block: &[u8]) -> io::Result<HeaderList> {
        self.inner.decode(block).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("header block decode failed: {err:?}"),
            )
        })
    }
}

impl Default for HeaderBlockDecoder {
    fn default() -> Self { Self::new() }
}
