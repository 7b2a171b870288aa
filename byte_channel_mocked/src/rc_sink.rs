//! A writable channel that stores written data for later inspection.
//!
//! Decorators take their sinks by value, so a test cannot look inside the
//! sink afterwards. `RcSink` is clonable: keep one clone, give the other to
//! the decorator, and inspect the shared state when done. Failures can be
//! injected per operation.
//!
//! # Example
//! ```
//! use byte_channel::ByteChannel;
//! use byte_channel_mocked::RcSink;
//!
//! let sink = RcSink::new();
//! let mut handle = sink.clone();
//! handle.write(b"Hello, world!").unwrap();
//! assert_eq!(sink.data(), b"Hello, world!");
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use byte_channel::{ByteChannel, ChannelError};

#[derive(Default)]
struct SinkState {
    data: Vec<u8>,
    flushes: usize,
    closes: usize,
    fail_writes: bool,
    fail_flush: bool,
    fail_close: bool,
}

#[derive(Clone, Default)]
pub struct RcSink {
    state: Rc<RefCell<SinkState>>,
}

impl RcSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.state.borrow().data.clone()
    }

    /// Number of flush calls seen.
    #[must_use]
    pub fn flushes(&self) -> usize {
        self.state.borrow().flushes
    }

    /// Number of close calls seen.
    #[must_use]
    pub fn closes(&self) -> usize {
        self.state.borrow().closes
    }

    /// Make every following write fail with an injected I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    /// Make every following flush fail with an injected I/O error.
    pub fn fail_flush(&self, fail: bool) {
        self.state.borrow_mut().fail_flush = fail;
    }

    /// Make every following close fail with an injected I/O error.
    pub fn fail_close(&self, fail: bool) {
        self.state.borrow_mut().fail_close = fail;
    }
}

impl ByteChannel for RcSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, ChannelError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(ChannelError::Io(io::Error::other("injected write failure")));
        }
        state.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), ChannelError> {
        let mut state = self.state.borrow_mut();
        state.flushes += 1;
        if state.fail_flush {
            return Err(ChannelError::Io(io::Error::other("injected flush failure")));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), ChannelError> {
        let mut state = self.state.borrow_mut();
        state.closes += 1;
        if state.fail_close {
            return Err(ChannelError::Io(io::Error::other("injected close failure")));
        }
        Ok(())
    }
}
