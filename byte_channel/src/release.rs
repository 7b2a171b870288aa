//! Best-effort release of channel resources.
//!
//! Decorators own buffers but not the channels they wrap; on close they try
//! to release everything they were given, and a failure in one step must not
//! prevent the attempt on the next. Routing every such step through
//! [`best_effort`] keeps the swallow policy in one place and leaves a log
//! trail instead of silent empty error arms.

use crate::error::ChannelError;

/// Run one release step, swallowing its failure.
///
/// Returns `Some` on success. On failure, logs the error at warn level with
/// the step name and returns `None`.
pub fn best_effort<T>(what: &str, result: Result<T, ChannelError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("best-effort release: {what} failed: {err}");
            None
        }
    }
}
