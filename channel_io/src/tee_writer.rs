//! Duplicate bytes into a copy channel as they are written to a target.
//!
//! # Example
//!
//! ```
//! use byte_channel::{ByteChannel, MemChannel};
//! use channel_io::TeeWriter;
//!
//! let mut tee = TeeWriter::new(MemChannel::new(), MemChannel::new());
//! tee.write(b"payload").unwrap();
//! ```

use std::io;

use byte_channel::{best_effort, write_all, ByteChannel, ChannelError};

/// A writing decorator that mirrors every buffer into a copy channel.
///
/// The target is written first; the copy write is attempted unconditionally
/// afterward, so a failing target does not starve the copy. The caller sees
/// the target's outcome; a copy failure is logged and swallowed.
pub struct TeeWriter<T: ByteChannel, C: ByteChannel> {
    target: T,
    copy: C,
    closed: bool,
}

impl<T: ByteChannel, C: ByteChannel> TeeWriter<T, C> {
    #[must_use]
    pub fn new(target: T, copy: C) -> Self {
        Self {
            target,
            copy,
            closed: false,
        }
    }
}

impl<T: ByteChannel, C: ByteChannel> ByteChannel for TeeWriter<T, C> {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ChannelError> {
        Err(ChannelError::Unsupported("read on a tee writer"))
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ChannelError> {
        // Try the target, then always attempt the copy.
        let primary = write_all(&mut self.target, buf);
        best_effort("tee copy write", write_all(&mut self.copy, buf));
        primary.map(|()| buf.len())
    }

    fn flush(&mut self) -> Result<(), ChannelError> {
        let primary = self.target.flush();
        best_effort("tee copy flush", self.copy.flush());
        primary
    }

    /// Best-effort release of the target, then the copy.
    ///
    /// Each step is attempted independently; a failure is logged and does
    /// not prevent the next step or surface to the caller.
    fn close(&mut self) -> Result<(), ChannelError> {
        if !self.closed {
            self.closed = true;
            best_effort("tee target flush", self.target.flush());
            best_effort("tee target close", self.target.close());
            best_effort("tee copy flush", self.copy.flush());
            best_effort("tee copy close", self.copy.close());
        }
        Ok(())
    }
}

impl<T: ByteChannel, C: ByteChannel> Drop for TeeWriter<T, C> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl<T: ByteChannel, C: ByteChannel> io::Write for TeeWriter<T, C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ByteChannel::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        ByteChannel::flush(self).map_err(io::Error::from)
    }
}
