//! Adapters lifting `std::io` readers and writers into [`ByteChannel`].
//!
//! # Example
//!
//! ```
//! use byte_channel::{ByteChannel, ReadChannel};
//!
//! let mut channel = ReadChannel::new(&b"data"[..]);
//! let mut buf = [0u8; 8];
//! let n = channel.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"data");
//! ```

use std::io::{Read, Write};

use crate::channel::ByteChannel;
use crate::error::ChannelError;

/// A read-only channel over any [`std::io::Read`] value.
///
/// The inner reader is dropped on `close`; reads after close report
/// end-of-stream.
#[derive(Debug)]
pub struct ReadChannel<R> {
    inner: Option<R>,
}

impl<R: Read> ReadChannel<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner: Some(inner) }
    }

    /// Take the inner reader back out, if the channel is still open.
    #[must_use]
    pub fn into_inner(mut self) -> Option<R> {
        self.inner.take()
    }
}

impl<R: Read> ByteChannel for ReadChannel<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(0);
        };
        inner.read(buf).map_err(ChannelError::Io)
    }

    fn close(&mut self) -> Result<(), ChannelError> {
        self.inner = None;
        Ok(())
    }
}

/// A write-only channel over any [`std::io::Write`] value.
///
/// `close` flushes and then drops the inner writer; writes after close
/// report `Ok(0)`.
#[derive(Debug)]
pub struct WriteChannel<W: Write> {
    inner: Option<W>,
}

impl<W: Write> WriteChannel<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self { inner: Some(inner) }
    }

    /// Take the inner writer back out, if the channel is still open.
    #[must_use]
    pub fn into_inner(mut self) -> Option<W> {
        self.inner.take()
    }
}

impl<W: Write> ByteChannel for WriteChannel<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, ChannelError> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(0);
        };
        inner.write(buf).map_err(ChannelError::Io)
    }

    fn flush(&mut self) -> Result<(), ChannelError> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(());
        };
        inner.flush().map_err(ChannelError::Io)
    }

    fn close(&mut self) -> Result<(), ChannelError> {
        if let Some(mut inner) = self.inner.take() {
            inner.flush().map_err(ChannelError::Io)?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for WriteChannel<W> {
    fn drop(&mut self) {
        crate::release::best_effort("write channel close", self.close());
    }
}
