//! Duplicate bytes into a sink as they are read from a source.
//!
//! # Example
//!
//! ```
//! use byte_channel::{ByteChannel, MemChannel};
//! use channel_io::TeeReader;
//!
//! let source = MemChannel::from_vec(vec![1, 2, 3, 4, 5]);
//! let mut tee = TeeReader::new(source, MemChannel::new());
//!
//! let mut buf = [0u8; 8];
//! let n = tee.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], &[1, 2, 3, 4, 5]);
//! ```

use std::io::{self, SeekFrom};

use byte_channel::{best_effort, write_all, ByteChannel, ChannelError};

/// A reading decorator that copies every byte it serves into a sink.
///
/// Each read delegates to the source; the bytes it returned are drained
/// into the sink before the call returns, so the sink holds them in exactly
/// read order. The caller always sees the source's own result: a sink
/// failure is logged and swallowed, it never alters the returned count.
///
/// Seeks go to the source only; the sink is not informed, so tee semantics
/// cover forward sequential reads.
pub struct TeeReader<S: ByteChannel, K: ByteChannel> {
    source: S,
    sink: K,
    closed: bool,
}

impl<S: ByteChannel, K: ByteChannel> TeeReader<S, K> {
    #[must_use]
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            closed: false,
        }
    }
}

impl<S: ByteChannel, K: ByteChannel> ByteChannel for TeeReader<S, K> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        let n = self.source.read(buf)?;
        if n > 0 {
            best_effort("tee sink write", write_all(&mut self.sink, &buf[..n]));
        }
        Ok(n)
    }

    /// The sink is not informed of seeks.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ChannelError> {
        self.source.seek(pos)
    }

    fn write(&mut self, _buf: &[u8]) -> Result<usize, ChannelError> {
        Err(ChannelError::Unsupported("write on a tee reader"))
    }

    fn flush(&mut self) -> Result<(), ChannelError> {
        best_effort("tee sink flush", self.sink.flush());
        Ok(())
    }

    /// Best-effort release of the source, then the sink.
    ///
    /// Each step is attempted independently; a failure is logged and does
    /// not prevent the next step or surface to the caller.
    fn close(&mut self) -> Result<(), ChannelError> {
        if !self.closed {
            self.closed = true;
            best_effort("tee source flush", self.source.flush());
            best_effort("tee source close", self.source.close());
            best_effort("tee sink flush", self.sink.flush());
            best_effort("tee sink close", self.sink.close());
        }
        Ok(())
    }
}

impl<S: ByteChannel, K: ByteChannel> Drop for TeeReader<S, K> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl<S: ByteChannel, K: ByteChannel> io::Read for TeeReader<S, K> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        ByteChannel::read(self, buf).map_err(io::Error::from)
    }
}
