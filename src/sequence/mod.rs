//! Fluent builder for scripted HTTP/2 frame sequences.
//!
//! [`FrameSequence`] queues frames in call order and serializes them into
//! one contiguous buffer that a test feeds to the system under test as if a
//! peer had sent it. Nothing is validated while appending, so sequences may
//! be deliberately malformed: negative window updates, HEADERS frames
//! without END_HEADERS, frames on stream 0 that must not be there.
//!
//! ```
//! use h2seq::{FrameSequence, frame::ErrorCode};
//!
//! let bytes = FrameSequence::new()
//!     .client_preface()
//!     .headers(1, [(":method", "GET"), (":path", "/")], false, false)
//!     .data(1, "hello", true, None)
//!     .rst_stream(1, ErrorCode::Cancel)
//!     .serialize()
//!     .expect("sequence should encode");
//! assert!(bytes.starts_with(h2seq::CONNECTION_PREFACE));
//! ```

use bytes::{Bytes, BytesMut};
use log::{debug, trace, warn};

use crate::{
    error::{Result, SequenceError},
    frame::{ErrorCode, FrameIntent, FrameType, Setting, StreamId, flags},
    framer::Framer,
    header::{HeaderRep, to_headers},
    hpack::encode_uncompressed,
};

/// Octets a client sends before its first frame (RFC 9113 §3.4).
pub const CONNECTION_PREFACE: &[u8] = b"PRI * HTTP/2.0\r\n\r\nSM\r\n\r\n";

/// Header name wrapping the payload of a METADATA frame.
pub const METADATA_HEADER_NAME: &str = "example-payload";

/// Ordered list of frames plus an optional connection preface.
///
/// Append methods return `&mut Self` so calls chain. The queue order is the
/// wire order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSequence<'a> {
    preface: Option<&'static [u8]>,
    frames: Vec<FrameIntent<'a>>,
}

impl<'a> FrameSequence<'a> {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Queued frames, in wire order.
    #[must_use]
    pub fn frames(&self) -> &[FrameIntent<'a>] { &self.frames }

    /// Bytes emitted before the first frame, if any.
    #[must_use]
    pub fn preface(&self) -> Option<&'static [u8]> { self.preface }

    /// Queue an arbitrary frame intent.
    pub fn push(&mut self, intent: FrameIntent<'a>) -> &mut Self {
        self.frames.push(intent);
        self
    }

    /// Emit the client connection preface followed by an empty SETTINGS
    /// frame.
    pub fn client_preface(&mut self) -> &mut Self {
        self.preface = Some(CONNECTION_PREFACE);
        self.settings([])
    }

    /// Emit the empty SETTINGS frame a server opens its connection with.
    pub fn server_preface(&mut self) -> &mut Self { self.settings([]) }

    /// Queue a DATA frame.
    ///
    /// `padding_len` counts every padding octet including the Pad Length
    /// field; the encoder accepts `1..=256`.
    pub fn data(
        &mut self,
        stream_id: StreamId,
        payload: impl AsRef<[u8]>,
        fin: bool,
        padding_len: Option<usize>,
    ) -> &mut Self {
        self.push(FrameIntent::Data {
            stream_id,
            payload: Bytes::copy_from_slice(payload.as_ref()),
            fin,
            padding_len,
        })
    }

    /// Queue an RST_STREAM frame.
    pub fn rst_stream(&mut self, stream_id: StreamId, error_code: ErrorCode) -> &mut Self {
        self.push(FrameIntent::RstStream {
            stream_id,
            error_code,
        })
    }

    /// Queue one SETTINGS frame carrying `values` in order, duplicates
    /// included.
    pub fn settings(&mut self, values: impl IntoIterator<Item = Setting>) -> &mut Self {
        self.push(FrameIntent::Settings {
            values: values.into_iter().collect(),
            ack: false,
        })
    }

    /// Queue an empty SETTINGS frame with the ACK flag.
    pub fn settings_ack(&mut self) -> &mut Self {
        self.push(FrameIntent::Settings {
            values: Vec::new(),
            ack: true,
        })
    }

    /// Queue a PING frame.
    pub fn ping(&mut self, id: u64) -> &mut Self { self.push(FrameIntent::Ping { id, ack: false }) }

    /// Queue a PING frame with the ACK flag.
    pub fn ping_ack(&mut self, id: u64) -> &mut Self { self.push(FrameIntent::Ping { id, ack: true }) }

    /// Queue a GOAWAY frame. `payload` is copied into the frame as debug data.
    pub fn goaway(
        &mut self,
        last_good_stream_id: StreamId,
        error_code: ErrorCode,
        payload: impl AsRef<[u8]>,
    ) -> &mut Self {
        self.push(FrameIntent::GoAway {
            last_good_stream_id,
            error_code,
            debug_data: Bytes::copy_from_slice(payload.as_ref()),
        })
    }

    /// Queue a header block for `stream_id`.
    ///
    /// Without `add_continuation` a single HEADERS frame is queued; its
    /// block is compressed at serialize time with the framer's shared HPACK
    /// context, so identical header lists may encode differently depending
    /// on what preceded them.
    ///
    /// With `add_continuation` the list is encoded now, with compression
    /// disabled, and the block is cut at `len / 2`. The first half goes out
    /// as a raw HEADERS-typed frame whose flags carry only END_STREAM (never
    /// END_HEADERS) and the second half as a CONTINUATION frame with
    /// END_HEADERS. The cut ignores field boundaries.
    pub fn headers<I, N, V>(
        &mut self,
        stream_id: StreamId,
        headers: I,
        fin: bool,
        add_continuation: bool,
    ) -> &mut Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<HeaderRep<'a>>,
        V: Into<HeaderRep<'a>>,
    {
        let headers = to_headers(headers);
        if !add_continuation {
            return self.push(FrameIntent::Headers {
                stream_id,
                headers,
                fin,
            });
        }

        let (first, second) = split_block(encode_uncompressed(&headers));
        self.push(FrameIntent::Unknown {
            stream_id,
            frame_type: FrameType::Headers.to_wire(),
            flags: if fin { flags::END_STREAM } else { 0 },
            payload: first,
        });
        self.push(FrameIntent::Continuation {
            stream_id,
            end_headers: true,
            fragment: second,
        })
    }

    /// Queue a WINDOW_UPDATE frame. Negative deltas are written as their
    /// two's complement bit pattern.
    pub fn window_update(&mut self, stream_id: StreamId, delta: i32) -> &mut Self {
        self.push(FrameIntent::WindowUpdate { stream_id, delta })
    }

    /// Queue a PRIORITY frame. `weight` is clamped to `1..=256`.
    pub fn priority(
        &mut self,
        stream_id: StreamId,
        parent_stream_id: StreamId,
        weight: u16,
        exclusive: bool,
    ) -> &mut Self {
        self.push(FrameIntent::Priority {
            stream_id,
            parent_stream_id,
            weight,
            exclusive,
        })
    }

    /// Queue a METADATA extension frame carrying `payload` as the value of a
    /// single uncompressed header named [`METADATA_HEADER_NAME`].
    pub fn metadata(&mut self, stream_id: StreamId, payload: impl AsRef<[u8]>) -> &mut Self {
        let block = encode_uncompressed(&[(
            HeaderRep::from(METADATA_HEADER_NAME),
            HeaderRep::borrowed(payload.as_ref()),
        )]);
        self.push(FrameIntent::Unknown {
            stream_id,
            frame_type: FrameType::Metadata.to_wire(),
            flags: flags::END_METADATA,
            payload: block,
        })
    }

    /// Serialize the preface and every queued frame with a fresh
    /// [`Framer`].
    ///
    /// Repeated calls produce identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError`] identifying the first frame the encoder
    /// rejected.
    pub fn serialize(&self) -> Result<Bytes> { self.serialize_with(&mut Framer::default()) }

    /// Serialize with a caller-owned [`Framer`], continuing whatever HPACK
    /// context it already holds.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError`] identifying the first frame the encoder
    /// rejected.
    pub fn serialize_with(&self, framer: &mut Framer) -> Result<Bytes> {
        let preface = self.preface.unwrap_or_default();
        let mut out = BytesMut::with_capacity(preface.len());
        out.extend_from_slice(preface);

        for (index, intent) in self.frames.iter().enumerate() {
            let written = framer.serialize_frame(intent, &mut out).map_err(|source| {
                warn!("frame #{index} ({}) failed to encode: {source}", intent.name());
                SequenceError {
                    index,
                    frame: intent.name(),
                    source,
                }
            })?;
            trace!(
                "encoded frame #{index} ({}) on stream {}: {written} bytes",
                intent.name(),
                intent.stream_id()
            );
        }

        debug!(
            "serialized {} frames ({} preface bytes, {} total)",
            self.frames.len(),
            preface.len(),
            out.len()
        );
        Ok(out.freeze())
    }
}

/// Cut `block` at `len / 2`; for odd lengths the first half is the shorter.
fn split_block(mut block: Bytes) -> (Bytes, Bytes) {
    let second = block.split_off(block.len() / 2);
    (block, second)
}
