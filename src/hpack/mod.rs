//! Header-block encoding.
//!
//! [`HpackEncoder`] turns a header list into an HPACK block in one of two
//! modes. With compression enabled it wraps a [`fluke_hpack::Encoder`] whose
//! dynamic table persists between calls, so a block's bytes depend on every
//! block the same encoder produced before it. With compression disabled every
//! field is written as a raw literal that never touches the dynamic table,
//! which keeps the output a pure function of the header list and safe to cut
//! at any byte offset.

mod literal;

use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::{config::HeaderCompression, header::Header};

enum Mode {
    Compressed(Box<fluke_hpack::Encoder<'static>>),
    Literal,
}

/// Header-compression codec used by [`Framer`](crate::framer::Framer) and
/// [`FrameSequence`](crate::sequence::FrameSequence).
pub struct HpackEncoder {
    mode: Mode,
}

impl HpackEncoder {
    /// Create an encoder with a fresh compression context.
    #[must_use]
    pub fn new(compression: HeaderCompression) -> Self {
        let mode = match compression {
            HeaderCompression::Enabled => Mode::Compressed(Box::new(fluke_hpack::Encoder::new())),
            HeaderCompression::Disabled => Mode::Literal,
        };
        Self { mode }
    }

    /// Return the mode this encoder was created with.
    #[must_use]
    pub fn compression(&self) -> HeaderCompression {
        match self.mode {
            Mode::Compressed(_) => HeaderCompression::Enabled,
            Mode::Literal => HeaderCompression::Disabled,
        }
    }

    /// Encode `headers` into a new block.
    pub fn encode(&mut self, headers: &[Header<'_>]) -> Bytes {
        let mut dst = BytesMut::new();
        self.encode_into(headers, &mut dst);
        dst.freeze()
    }

    /// Append the encoded block for `headers` to `dst`.
    pub fn encode_into(&mut self, headers: &[Header<'_>], dst: &mut BytesMut) {
        match &mut self.mode {
            Mode::Compressed(encoder) => {
                let block =
                    encoder.encode(headers.iter().map(|(name, value)| (name.as_bytes(), value.as_bytes())));
                dst.extend_from_slice(&block);
            }
            Mode::Literal => {
                for (name, value) in headers {
                    literal::encode_literal_field(name.as_bytes(), value.as_bytes(), dst);
                }
            }
        }
    }
}

impl Default for HpackEncoder {
    fn default() -> Self { Self::new(HeaderCompression::DEFAULT) }
}

impl fmt::Debug for HpackEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HpackEncoder")
            .field("compression", &self.compression())
            .finish_non_exhaustive()
    }
}

/// Encode `headers` with a fresh compression-disabled encoder.
///
/// ```
/// use h2seq::{header::to_headers, hpack::encode_uncompressed};
///
/// let block = encode_uncompressed(&to_headers([("a", "b")]));
/// assert_eq!(&block[..], &[0x00, 0x01, b'a', 0x01, b'b']);
/// ```
#[must_use]
pub fn encode_uncompressed(headers: &[Header<'_>]) -> Bytes {
    HpackEncoder::new(HeaderCompression::Disabled).encode(headers)
}

#[cfg(test)]
mod tests;
