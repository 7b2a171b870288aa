//! Expose only the first N bytes of a channel.
//!
//! # Example
//!
//! ```
//! use byte_channel::{ByteChannel, MemChannel};
//! use channel_io::HeadReader;
//!
//! let source = MemChannel::from_vec(b"Hello, World!".to_vec());
//! let mut head = HeadReader::new(source, 5);
//!
//! let mut buf = [0u8; 16];
//! let n = head.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"Hello");
//! assert_eq!(head.read(&mut buf).unwrap(), 0);
//! ```

use std::io::{self, SeekFrom};

use byte_channel::{best_effort, ByteChannel, ChannelError};

/// A read-only window over the first `limit` bytes of a channel.
///
/// Once `limit` bytes have been served, every further read reports
/// end-of-stream, whether or not the wrapped channel has more. A wrapped
/// channel shorter than `limit` reaches its natural end-of-stream first,
/// which is propagated unchanged.
///
/// Seeking moves the cursor within the window; the target is clamped into
/// `[0, limit]`, so the cursor can never leave the window. The wrapped
/// channel must itself be seekable for `seek` to succeed.
pub struct HeadReader<C: ByteChannel> {
    inner: C,
    limit: u64,
    processed: u64,
    closed: bool,
}

impl<C: ByteChannel> HeadReader<C> {
    /// Wrap `inner`, exposing only its first `limit` bytes.
    ///
    /// `limit = 0` yields end-of-stream on the first read.
    #[must_use]
    pub fn new(inner: C, limit: u64) -> Self {
        Self {
            inner,
            limit,
            processed: 0,
            closed: false,
        }
    }

    /// Bytes already served out of the window.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// The window size this reader was created with.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<C: ByteChannel> ByteChannel for HeadReader<C> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        if self.closed || self.processed >= self.limit {
            return Ok(0);
        }
        let remaining = self.limit - self.processed;
        #[allow(clippy::cast_possible_truncation)]
        let cap = buf.len().min(remaining.min(usize::MAX as u64) as usize);
        let n = self.inner.read(&mut buf[..cap])?;
        self.processed += n as u64;
        Ok(n)
    }

    /// The window is read-only.
    fn write(&mut self, _buf: &[u8]) -> Result<usize, ChannelError> {
        Err(ChannelError::Unsupported("write on a head window"))
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ChannelError> {
        let requested = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(delta) => i128::from(self.processed) + i128::from(delta),
            SeekFrom::End(delta) => i128::from(self.limit) + i128::from(delta),
        };
        // Clamp into the window: never before its start, never past `limit`.
        let target = requested.clamp(0, i128::from(self.limit));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let target = target as u64;
        let reached = self.inner.seek(SeekFrom::Start(target))?;
        self.processed = reached.min(self.limit);
        Ok(self.processed)
    }

    /// No-op on a read-only window.
    fn flush(&mut self) -> Result<(), ChannelError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), ChannelError> {
        if !self.closed {
            self.closed = true;
            best_effort("head window source close", self.inner.close());
        }
        Ok(())
    }
}

impl<C: ByteChannel> Drop for HeadReader<C> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl<C: ByteChannel> io::Read for HeadReader<C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        ByteChannel::read(self, buf).map_err(io::Error::from)
    }
}

impl<C: ByteChannel> io::Seek for HeadReader<C> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        ByteChannel::seek(self, pos).map_err(io::Error::from)
    }
}
