//! A growable in-memory channel.
//!
//! # Example
//!
//! ```
//! use byte_channel::{ByteChannel, MemChannel};
//!
//! let mut channel = MemChannel::new();
//! channel.write(b"abc").unwrap();
//! channel.seek(std::io::SeekFrom::Start(0)).unwrap();
//!
//! let mut buf = [0u8; 8];
//! let n = channel.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"abc");
//! ```

use std::io::{self, SeekFrom};

use crate::channel::ByteChannel;
use crate::error::ChannelError;

/// An in-memory byte channel: a cursor over a growable `Vec<u8>`.
///
/// Supports the full capability: read, write, seek, flush, close. Writes
/// overwrite at the cursor and extend the buffer past the end, like a file.
/// A cursor placed past the end with `seek` zero-fills the gap on the next
/// write.
///
/// After `close`, reads report end-of-stream and writes report `Ok(0)`;
/// the content stays available through [`MemChannel::into_inner`].
#[derive(Debug, Default)]
pub struct MemChannel {
    data: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl MemChannel {
    /// Create a new empty channel with the cursor at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a channel over existing content, cursor at offset 0.
    #[must_use]
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data,
            pos: 0,
            closed: false,
        }
    }

    /// Current cursor offset from the start.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos as u64
    }

    /// Total content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the channel holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the channel and return its content.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Content as a slice, independent of the cursor.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ByteChannel for MemChannel {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        if self.closed || self.pos >= self.data.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ChannelError> {
        if self.closed {
            return Ok(0);
        }
        if self.pos > self.data.len() {
            self.data.resize(self.pos, 0);
        }
        let overlap = buf.len().min(self.data.len() - self.pos);
        self.data[self.pos..self.pos + overlap].copy_from_slice(&buf[..overlap]);
        self.data.extend_from_slice(&buf[overlap..]);
        self.pos += buf.len();
        Ok(buf.len())
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ChannelError> {
        let (base, delta) = match pos {
            SeekFrom::Start(offset) => {
                self.pos = usize::try_from(offset).map_err(|_| {
                    ChannelError::Io(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "seek offset too large",
                    ))
                })?;
                return Ok(self.pos as u64);
            }
            SeekFrom::Current(delta) => (self.pos as i64, delta),
            SeekFrom::End(delta) => (self.data.len() as i64, delta),
        };
        let target = base.checked_add(delta).filter(|t| *t >= 0).ok_or_else(|| {
            ChannelError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before the start of the channel",
            ))
        })?;
        #[allow(clippy::cast_sign_loss)]
        {
            self.pos = target as usize;
        }
        Ok(self.pos as u64)
    }

    fn flush(&mut self) -> Result<(), ChannelError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), ChannelError> {
        self.closed = true;
        Ok(())
    }
}

impl io::Read for MemChannel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        ByteChannel::read(self, buf).map_err(io::Error::from)
    }
}

impl io::Write for MemChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ByteChannel::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        ByteChannel::flush(self).map_err(io::Error::from)
    }
}

impl io::Seek for MemChannel {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        ByteChannel::seek(self, pos).map_err(io::Error::from)
    }
}
