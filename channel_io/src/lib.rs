//! Bounded-memory stream windowing and duplication over byte channels.
//!
//! Four decorators, each wrapping channels it does not own:
//!
//! - [`HeadReader`]: expose only the first N bytes of a channel.
//! - [`TailExtractor`]: the last N bytes of a channel of unknown length,
//!   in one forward pass, without buffering the whole stream.
//! - [`TeeReader`]: duplicate every byte read from a source into a sink.
//! - [`TeeWriter`]: duplicate every byte written to a target into a copy.
//!
//! Memory use is bounded by the window and scratch sizes regardless of the
//! total stream length.

pub mod head;
pub mod tail;
pub mod tee_reader;
pub mod tee_writer;

pub use head::HeadReader;
pub use tail::{TailExtractor, DEFAULT_BUFFER_MAX};
pub use tee_reader::TeeReader;
pub use tee_writer::TeeWriter;
