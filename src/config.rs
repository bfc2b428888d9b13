//! Encoder configuration.
//!
//! [`HeaderCompression`] selects how header blocks are produced and
//! [`FramerConfig`] bundles it with the frame-size limits used by
//! [`Framer`](crate::framer::Framer).

use std::num::NonZeroUsize;

/// Header-block encoding modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderCompression {
    /// Stateful HPACK with a dynamic table that evolves across blocks.
    #[default]
    Enabled,
    /// Literal fields only; output depends on nothing but the header list.
    Disabled,
}

impl HeaderCompression {
    /// The library default (currently [`HeaderCompression::Enabled`]).
    pub const DEFAULT: HeaderCompression = HeaderCompression::Enabled;

    /// Whether blocks may reference encoder state.
    #[must_use]
    pub const fn is_enabled(self) -> bool { matches!(self, Self::Enabled) }
}

/// Default cap on the header block octets placed in one HEADERS or
/// CONTINUATION frame; matches the protocol's initial SETTINGS_MAX_FRAME_SIZE.
pub const DEFAULT_MAX_HEADER_FRAGMENT: NonZeroUsize = match NonZeroUsize::new(16_384) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Settings for a [`Framer`](crate::framer::Framer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramerConfig {
    /// Encoding used for [`FrameIntent::Headers`](crate::frame::FrameIntent::Headers).
    pub compression: HeaderCompression,
    /// Largest header block fragment written into a single frame before the
    /// remainder spills into CONTINUATION frames.
    pub max_header_fragment: NonZeroUsize,
}

impl FramerConfig {
    /// Replace the header compression mode.
    #[must_use]
    pub const fn with_compression(mut self, compression: HeaderCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Replace the header fragment limit.
    #[must_use]
    pub const fn with_max_header_fragment(mut self, limit: NonZeroUsize) -> Self {
        self.max_header_fragment = limit;
        self
    }
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            compression: HeaderCompression::DEFAULT,
            max_header_fragment: DEFAULT_MAX_HEADER_FRAGMENT,
        }
    }
}
