//! Error types for channel operations.

use std::fmt;
use std::io;

/// Errors that can occur on a byte channel.
#[derive(Debug)]
pub enum ChannelError {
    /// Invalid construction parameters, detected before any I/O
    Config(String),

    /// The channel does not support the named operation
    Unsupported(&'static str),

    /// An underlying I/O failure, propagated unchanged
    Io(io::Error),
}

impl ChannelError {
    /// Whether this is an [`ChannelError::Unsupported`] error.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Invalid channel configuration: {msg}"),
            Self::Unsupported(op) => write!(f, "Operation not supported by the channel: {op}"),
            Self::Io(e) => write!(f, "Channel failure: {e}"),
        }
    }
}

impl std::error::Error for ChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) | Self::Unsupported(_) => None,
        }
    }
}

impl From<io::Error> for ChannelError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ChannelError> for io::Error {
    fn from(e: ChannelError) -> Self {
        match e {
            ChannelError::Io(e) => e,
            ChannelError::Unsupported(op) => io::Error::new(io::ErrorKind::Unsupported, op),
            ChannelError::Config(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
        }
    }
}
