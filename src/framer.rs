//! Binary frame encoder.
//!
//! [`Framer`] writes one [`FrameIntent`] at a time into a caller-supplied
//! buffer. It owns the HPACK encoder used for
//! [`FrameIntent::Headers`], so every HEADERS frame serialized through the
//! same framer shares one compression context.

use bytes::{BufMut, BytesMut};

use crate::{
    byte_order::{
        MAX_U24,
        write_network_i32,
        write_network_u16,
        write_network_u24,
        write_network_u32,
        write_network_u64,
    },
    config::FramerConfig,
    error::EncodeError,
    frame::{FRAME_HEADER_LEN, FrameIntent, FrameType, Setting, StreamId, flags, types::STREAM_ID_MASK},
    header::Header,
    hpack::HpackEncoder,
};

/// Largest DATA padding, Pad Length octet included.
const MAX_PADDING_LEN: usize = 256;

/// Bit marking an exclusive dependency in a PRIORITY frame.
const EXCLUSIVE_BIT: u32 = 0x8000_0000;

/// Encodes frame intents into HTTP/2 wire bytes.
#[derive(Debug)]
pub struct Framer {
    config: FramerConfig,
    hpack: HpackEncoder,
}

impl Framer {
    /// Create a framer with a fresh header compression context.
    #[must_use]
    pub fn new(config: FramerConfig) -> Self {
        Self {
            config,
            hpack: HpackEncoder::new(config.compression),
        }
    }

    /// Return the configuration this framer was built with.
    #[must_use]
    pub const fn config(&self) -> &FramerConfig { &self.config }

    /// Append the wire encoding of `intent` to `dst` and return the number of
    /// bytes written.
    ///
    /// On error `dst` is left as it was on entry. The HPACK context may still
    /// have advanced if the failing frame was a HEADERS frame.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if a stream identifier sets the reserved bit,
    /// a payload exceeds the 24-bit length field, or DATA padding falls
    /// outside `1..=256`.
    pub fn serialize_frame(
        &mut self,
        intent: &FrameIntent<'_>,
        dst: &mut BytesMut,
    ) -> Result<usize, EncodeError> {
        let start = dst.len();
        let result = self.write_intent(intent, dst);
        if result.is_err() {
            dst.truncate(start);
        }
        result.map(|()| dst.len() - start)
    }

    fn write_intent(&mut self, intent: &FrameIntent<'_>, dst: &mut BytesMut) -> Result<(), EncodeError> {
        match intent {
            FrameIntent::Data {
                stream_id,
                payload,
                fin,
                padding_len,
            } => write_data(dst, *stream_id, payload, *fin, *padding_len),
            FrameIntent::RstStream {
                stream_id,
                error_code,
            } => write_frame(
                dst,
                FrameType::RstStream.to_wire(),
                0,
                *stream_id,
                &write_network_u32(error_code.to_wire()),
            ),
            FrameIntent::Settings { values, ack } => write_settings(dst, values, *ack),
            FrameIntent::Ping { id, ack } => write_frame(
                dst,
                FrameType::Ping.to_wire(),
                if *ack { flags::ACK } else { 0 },
                0,
                &write_network_u64(*id),
            ),
            FrameIntent::GoAway {
                last_good_stream_id,
                error_code,
                debug_data,
            } => {
                check_stream_id(*last_good_stream_id)?;
                let mut payload = Vec::with_capacity(8 + debug_data.len());
                payload.extend_from_slice(&write_network_u32(*last_good_stream_id));
                payload.extend_from_slice(&write_network_u32(error_code.to_wire()));
                payload.extend_from_slice(debug_data);
                write_frame(dst, FrameType::GoAway.to_wire(), 0, 0, &payload)
            }
            FrameIntent::Headers {
                stream_id,
                headers,
                fin,
            } => self.write_headers(dst, *stream_id, headers, *fin),
            FrameIntent::Continuation {
                stream_id,
                end_headers,
                fragment,
            } => write_frame(
                dst,
                FrameType::Continuation.to_wire(),
                if *end_headers { flags::END_HEADERS } else { 0 },
                *stream_id,
                fragment,
            ),
            FrameIntent::WindowUpdate { stream_id, delta } => write_frame(
                dst,
                FrameType::WindowUpdate.to_wire(),
                0,
                *stream_id,
                &write_network_i32(*delta),
            ),
            FrameIntent::Priority {
                stream_id,
                parent_stream_id,
                weight,
                exclusive,
            } => {
                check_stream_id(*parent_stream_id)?;
                let dependency = if *exclusive {
                    parent_stream_id | EXCLUSIVE_BIT
                } else {
                    *parent_stream_id
                };
                let mut payload = [0u8; 5];
                payload[..4].copy_from_slice(&write_network_u32(dependency));
                payload[4] = wire_weight(*weight);
                write_frame(dst, FrameType::Priority.to_wire(), 0, *stream_id, &payload)
            }
            FrameIntent::Unknown {
                stream_id,
                frame_type,
                flags,
                payload,
            } => write_frame(dst, *frame_type, *flags, *stream_id, payload),
        }
    }

    /// Encode a header block with the shared context, spilling into
    /// CONTINUATION frames when it exceeds the configured fragment limit.
    fn write_headers(
        &mut self,
        dst: &mut BytesMut,
        stream_id: StreamId,
        headers: &[Header<'_>],
        fin: bool,
    ) -> Result<(), EncodeError> {
        check_stream_id(stream_id)?;
        let block = self.hpack.encode(headers);
        let end_stream = if fin { flags::END_STREAM } else { 0 };
        let limit = self.config.max_header_fragment.get();

        if block.len() <= limit {
            return write_frame(
                dst,
                FrameType::Headers.to_wire(),
                end_stream | flags::END_HEADERS,
                stream_id,
                &block,
            );
        }

        let mut chunks = block.chunks(limit).peekable();
        let mut frame_type = FrameType::Headers.to_wire();
        let mut frame_flags = end_stream;
        while let Some(chunk) = chunks.next() {
            if chunks.peek().is_none() {
                frame_flags |= flags::END_HEADERS;
            }
            write_frame(dst, frame_type, frame_flags, stream_id, chunk)?;
            frame_type = FrameType::Continuation.to_wire();
            frame_flags = 0;
        }
        Ok(())
    }
}

impl Default for Framer {
    fn default() -> Self { Self::new(FramerConfig::default()) }
}

fn check_stream_id(stream_id: StreamId) -> Result<(), EncodeError> {
    if stream_id & !STREAM_ID_MASK == 0 {
        Ok(())
    } else {
        Err(EncodeError::StreamIdOutOfRange { stream_id })
    }
}

/// Write the 9-octet frame header followed by `payload`.
fn write_frame(
    dst: &mut BytesMut,
    frame_type: u8,
    frame_flags: u8,
    stream_id: StreamId,
    payload: &[u8],
) -> Result<(), EncodeError> {
    check_stream_id(stream_id)?;
    let len = payload_len(payload.len())?;
    dst.reserve(FRAME_HEADER_LEN + payload.len());
    dst.put_slice(&write_network_u24(len));
    dst.put_u8(frame_type);
    dst.put_u8(frame_flags);
    dst.put_slice(&write_network_u32(stream_id));
    dst.put_slice(payload);
    Ok(())
}

fn payload_len(len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len)
        .ok()
        .filter(|len| *len <= MAX_U24)
        .ok_or(EncodeError::PayloadTooLarge {
            len,
            max: MAX_U24 as usize,
        })
}

fn write_data(
    dst: &mut BytesMut,
    stream_id: StreamId,
    data: &[u8],
    fin: bool,
    padding_len: Option<usize>,
) -> Result<(), EncodeError> {
    let mut frame_flags = if fin { flags::END_STREAM } else { 0 };
    let Some(padding_len) = padding_len else {
        return write_frame(dst, FrameType::Data.to_wire(), frame_flags, stream_id, data);
    };
    if !(1..=MAX_PADDING_LEN).contains(&padding_len) {
        return Err(EncodeError::PaddingOutOfRange { padding_len });
    }

    frame_flags |= flags::PADDED;
    let trailing = padding_len - 1;
    let mut payload = Vec::with_capacity(padding_len + data.len());
    payload.push(u8::try_from(trailing).map_err(|_| EncodeError::PaddingOutOfRange { padding_len })?);
    payload.extend_from_slice(data);
    payload.resize(payload.len() + trailing, 0);
    write_frame(dst, FrameType::Data.to_wire(), frame_flags, stream_id, &payload)
}

fn write_settings(dst: &mut BytesMut, values: &[Setting], ack: bool) -> Result<(), EncodeError> {
    let mut payload = Vec::with_capacity(values.len() * 6);
    for setting in values {
        payload.extend_from_slice(&write_network_u16(setting.id));
        payload.extend_from_slice(&write_network_u32(setting.value));
    }
    write_frame(
        dst,
        FrameType::Settings.to_wire(),
        if ack { flags::ACK } else { 0 },
        0,
        &payload,
    )
}

/// Clamp `weight` into `1..=256` and store it as `weight - 1`.
fn wire_weight(weight: u16) -> u8 {
    let clamped = weight.clamp(1, 256) - 1;
    u8::try_from(clamped).unwrap_or(u8::MAX)
}
