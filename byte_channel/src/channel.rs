//! The byte channel capability.
//!
//! A [`ByteChannel`] is an opened readable or writable byte stream: a file, a
//! memory buffer, a socket. Channels follow POSIX conventions: `read`
//! returns the number of bytes read and `Ok(0)` means end-of-stream, `write`
//! returns the number of bytes accepted, which may be less than the buffer
//! length.
//!
//! Optional operations (`read`, `write`, `seek`) default to
//! [`ChannelError::Unsupported`], so an implementation only provides the
//! subset it actually supports. `flush` and `close` default to no-ops.
//!
//! # Example
//!
//! ```
//! use byte_channel::{ByteChannel, MemChannel};
//!
//! let mut channel = MemChannel::from_vec(b"hello".to_vec());
//! let mut buf = [0u8; 3];
//! let n = channel.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"hel");
//! ```

use std::io::SeekFrom;

use crate::error::ChannelError;

pub trait ByteChannel {
    /// Read up to `buf.len()` bytes into `buf`.
    ///
    /// Returns the number of bytes read; `Ok(0)` means end-of-stream.
    /// A channel may return fewer bytes than requested.
    ///
    /// # Errors
    /// Returns [`ChannelError::Unsupported`] if the channel is not readable,
    /// or [`ChannelError::Io`] on an underlying failure.
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ChannelError> {
        Err(ChannelError::Unsupported("read"))
    }

    /// Write up to `buf.len()` bytes from `buf`.
    ///
    /// Returns the number of bytes accepted, which may be less than
    /// `buf.len()`. Use [`write_all`] to drain a whole buffer.
    ///
    /// # Errors
    /// Returns [`ChannelError::Unsupported`] if the channel is not writable,
    /// or [`ChannelError::Io`] on an underlying failure.
    fn write(&mut self, _buf: &[u8]) -> Result<usize, ChannelError> {
        Err(ChannelError::Unsupported("write"))
    }

    /// Move the cursor and return the new offset from the start.
    ///
    /// # Errors
    /// Returns [`ChannelError::Unsupported`] if the channel is not seekable.
    fn seek(&mut self, _pos: SeekFrom) -> Result<u64, ChannelError> {
        Err(ChannelError::Unsupported("seek"))
    }

    /// Push any buffered bytes down to the underlying destination.
    ///
    /// # Errors
    /// Returns [`ChannelError::Io`] on an underlying failure.
    fn flush(&mut self) -> Result<(), ChannelError> {
        Ok(())
    }

    /// Release the channel.
    ///
    /// Can be called multiple times; calls after the first are no-ops.
    ///
    /// # Errors
    /// Returns [`ChannelError::Io`] if releasing fails.
    fn close(&mut self) -> Result<(), ChannelError> {
        Ok(())
    }
}

/// Drain the whole buffer into the channel.
///
/// Loops over partial writes. A channel that accepts zero bytes while data
/// remains is treated as broken.
///
/// # Errors
/// Returns the channel's error, or [`ChannelError::Io`] with
/// [`std::io::ErrorKind::WriteZero`] if the channel stops accepting bytes.
pub fn write_all<C: ByteChannel + ?Sized>(
    channel: &mut C,
    buf: &[u8],
) -> Result<(), ChannelError> {
    let mut written = 0;
    while written < buf.len() {
        let n = channel.write(&buf[written..])?;
        if n == 0 {
            return Err(ChannelError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "channel accepted zero bytes",
            )));
        }
        written += n;
    }
    Ok(())
}
