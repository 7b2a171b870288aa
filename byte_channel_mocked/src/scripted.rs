//! A readable channel with scripted chunk sizes and error injection.
//!
//! Real sources return fewer bytes per call than requested, at arbitrary
//! points. `ScriptedChannel` reproduces that: each read serves at most the
//! next size from the script, cycling through the script until the data is
//! exhausted. A read failure can be injected after a chosen number of
//! calls.
//!
//! # Example
//! ```
//! use byte_channel::ByteChannel;
//! use byte_channel_mocked::ScriptedChannel;
//!
//! let mut channel = ScriptedChannel::new(b"abcdef".to_vec(), &[4]);
//! let mut buf = [0u8; 16];
//! assert_eq!(channel.read(&mut buf).unwrap(), 4);
//! assert_eq!(channel.read(&mut buf).unwrap(), 2);
//! ```

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use byte_channel::{ByteChannel, ChannelError};

#[derive(Debug)]
pub struct ScriptedChannel {
    data: Vec<u8>,
    pos: usize,
    script: Vec<usize>,
    next_chunk: usize,
    fail_after_reads: Option<usize>,
    reads: Rc<Cell<usize>>,
    closed: bool,
}

impl ScriptedChannel {
    /// Create a channel over `data` serving chunks of the scripted sizes.
    ///
    /// An empty script means "serve as much as requested".
    #[must_use]
    pub fn new(data: Vec<u8>, script: &[usize]) -> Self {
        Self {
            data,
            pos: 0,
            script: script.to_vec(),
            next_chunk: 0,
            fail_after_reads: None,
            reads: Rc::new(Cell::new(0)),
            closed: false,
        }
    }

    /// Make the channel fail with an injected I/O error once `calls`
    /// successful reads have been served.
    #[must_use]
    pub fn fail_after_reads(mut self, calls: usize) -> Self {
        self.fail_after_reads = Some(calls);
        self
    }

    /// A clonable probe counting read calls, usable after the channel has
    /// been moved into a decorator.
    #[must_use]
    pub fn read_count_probe(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.reads)
    }

    /// Whether `close` has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ByteChannel for ScriptedChannel {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        if let Some(limit) = self.fail_after_reads {
            if self.reads.get() >= limit {
                return Err(ChannelError::Io(io::Error::other("injected read failure")));
            }
        }
        self.reads.set(self.reads.get() + 1);
        if self.closed || self.pos >= self.data.len() {
            return Ok(0);
        }
        let mut n = buf.len().min(self.data.len() - self.pos);
        if !self.script.is_empty() {
            n = n.min(self.script[self.next_chunk % self.script.len()]);
            self.next_chunk += 1;
        }
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn close(&mut self) -> Result<(), ChannelError> {
        self.closed = true;
        Ok(())
    }
}
