//! Utilities for reading and replaying `h2seq` frame sequences in tests.
//!
//! The core crate only writes bytes. These helpers split them back into
//! frames, decode header blocks, and push a serialized sequence through a
//! `tokio::io::duplex` stream into a server under test.
//!
//! ```rust
//! use h2seq::FrameSequence;
//! use h2seq_testing::{decode_frames, strip_preface};
//!
//! let bytes = FrameSequence::new()
//!     .client_preface()
//!     .data(1, "abc", true, None)
//!     .serialize()
//!     .expect("sequence should encode");
//! let frames = decode_frames(strip_preface(&bytes).expect("preface")).expect("frames");
//! assert_eq!(frames.len(), 2);
//! ```

pub mod codec;
pub mod drive;
pub mod logging;

pub use codec::{
    HeaderBlockDecoder,
    HeaderList,
    RawFrame,
    RawFrameCodec,
    decode_frames,
    decode_header_block,
    strip_preface,
};
pub use drive::{drive_with_sequence, drive_with_sequence_with_capacity, write_sequence};
pub use logging::{LoggerHandle, logger};
