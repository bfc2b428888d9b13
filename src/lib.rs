//! Public API for the `h2seq` library.
//!
//! This crate builds scripted HTTP/2 frame sequences for tests. A
//! [`FrameSequence`] queues frames in call order and serializes them, with
//! the connection preface when requested, into one byte buffer to feed to
//! the system under test as peer input.

pub mod byte_order;
pub mod config;
pub mod error;
pub mod frame;
pub mod framer;
pub mod header;
pub mod hpack;
pub mod sequence;

pub use config::{FramerConfig, HeaderCompression};
pub use error::{EncodeError, Result, SequenceError};
pub use frame::{ErrorCode, FrameIntent, FrameType, Setting, StreamId};
pub use framer::Framer;
pub use header::{Header, HeaderRep, to_headers};
pub use hpack::HpackEncoder;
pub use sequence::{CONNECTION_PREFACE, FrameSequence, METADATA_HEADER_NAME};
