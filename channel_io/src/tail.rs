//! Extract the last N bytes of a channel in one forward pass.
//!
//! The source may be unseekable and of unknown, possibly unbounded length;
//! memory use stays at O(`buffer_max` + `count`). The source is drained
//! chunk by chunk into a scratch buffer, and a sliding window keeps exactly
//! the trailing bytes seen so far.
//!
//! # Example
//!
//! ```
//! use byte_channel::MemChannel;
//! use channel_io::TailExtractor;
//!
//! let source = MemChannel::from_vec((0u8..100).collect());
//! let tail = TailExtractor::with_buffer_max(source, 10, 16).unwrap();
//! let result = tail.extract().unwrap();
//! assert_eq!(result.as_slice(), &(90u8..100).collect::<Vec<u8>>()[..]);
//! ```

use byte_channel::{best_effort, ByteChannel, ChannelError, MemChannel};

/// Default scratch buffer capacity, in bytes.
pub const DEFAULT_BUFFER_MAX: usize = 16384;

/// The sliding tail window: the trailing `valid` bytes seen so far.
///
/// `absorb` is a pure state step over one chunk, so the classification
/// logic is testable without any channel.
struct TailWindow {
    window: Vec<u8>,
    valid: usize,
}

impl TailWindow {
    fn new(count: usize) -> Self {
        Self {
            window: vec![0; count],
            valid: 0,
        }
    }

    /// Fold one chunk of freshly read bytes into the window.
    ///
    /// A chunk shorter than both the scratch capacity and the window is
    /// merged behind the bytes already held, shifting out the oldest bytes
    /// if the total would exceed the window. Any larger chunk can supply
    /// the whole tail by itself, so it overwrites the window with its
    /// trailing bytes and prior history is discarded.
    fn absorb(&mut self, chunk: &[u8], buffer_max: usize) {
        let read = chunk.len();
        let count = self.window.len();
        if read == 0 || count == 0 {
            return;
        }
        if read < buffer_max && read < count {
            if self.valid > 0 {
                let total = self.valid + read;
                if total > count {
                    let shift = total - count;
                    self.window.copy_within(shift..self.valid, 0);
                    self.valid -= shift;
                }
            }
            self.window[self.valid..self.valid + read].copy_from_slice(chunk);
            self.valid += read;
        } else {
            let keep = count.min(read);
            self.window[..keep].copy_from_slice(&chunk[read - keep..]);
            self.valid = keep;
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.window;
        bytes.truncate(self.valid);
        bytes
    }
}

/// Single-pass extractor of the last `count` bytes of a channel.
///
/// Created over a source channel, consumed by [`TailExtractor::extract`],
/// which drains the source and returns the tail as a fresh [`MemChannel`]
/// positioned at offset 0.
#[derive(Debug)]
pub struct TailExtractor<C> {
    source: C,
    count: usize,
    buffer_max: usize,
}

impl<C: ByteChannel> TailExtractor<C> {
    /// Create an extractor with the default scratch capacity
    /// ([`DEFAULT_BUFFER_MAX`]).
    ///
    /// # Errors
    /// Returns [`ChannelError::Config`] if `count` exceeds the default
    /// scratch capacity.
    pub fn new(source: C, count: usize) -> Result<Self, ChannelError> {
        Self::with_buffer_max(source, count, DEFAULT_BUFFER_MAX)
    }

    /// Create an extractor with an explicit scratch capacity.
    ///
    /// The check happens here, before any I/O is attempted.
    ///
    /// # Errors
    /// Returns [`ChannelError::Config`] if `buffer_max < count` or
    /// `buffer_max == 0`.
    pub fn with_buffer_max(
        source: C,
        count: usize,
        buffer_max: usize,
    ) -> Result<Self, ChannelError> {
        if buffer_max == 0 {
            return Err(ChannelError::Config(
                "scratch capacity must be positive".to_string(),
            ));
        }
        if buffer_max < count {
            return Err(ChannelError::Config(format!(
                "scratch capacity {buffer_max} is smaller than the tail window {count}"
            )));
        }
        Ok(Self {
            source,
            count,
            buffer_max,
        })
    }

    /// Drain the source and return its last `count` bytes.
    ///
    /// If the source holds fewer than `count` bytes, the result is the
    /// whole source; `count = 0` yields an empty channel. The source is
    /// released best-effort once drained.
    ///
    /// # Errors
    /// A read error from the source is propagated unmodified; there are no
    /// retries.
    pub fn extract(mut self) -> Result<MemChannel, ChannelError> {
        let mut window = TailWindow::new(self.count);
        let mut scratch = vec![0u8; self.buffer_max];
        loop {
            let read = match self.source.read(&mut scratch) {
                Ok(n) => n,
                Err(err) => {
                    best_effort("tail source close", self.source.close());
                    return Err(err);
                }
            };
            if read == 0 {
                break;
            }
            window.absorb(&scratch[..read], self.buffer_max);
        }
        best_effort("tail source close", self.source.close());
        log::debug!(
            "tail window ready: {} of {} requested bytes",
            window.valid,
            self.count
        );
        Ok(MemChannel::from_vec(window.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::TailWindow;

    fn suffix(data: &[u8], count: usize) -> Vec<u8> {
        let start = data.len().saturating_sub(count);
        data[start..].to_vec()
    }

    fn feed(data: &[u8], chunk_sizes: &[usize], count: usize, buffer_max: usize) -> Vec<u8> {
        let mut window = TailWindow::new(count);
        let mut offset = 0;
        let mut sizes = chunk_sizes.iter().copied().cycle();
        while offset < data.len() {
            let size = sizes.next().unwrap().min(data.len() - offset).min(buffer_max);
            window.absorb(&data[offset..offset + size], buffer_max);
            offset += size;
        }
        window.into_bytes()
    }

    #[test]
    fn small_chunks_merge_into_the_suffix() {
        let data: Vec<u8> = (0..40).collect();
        assert_eq!(feed(&data, &[7], 10, 16), suffix(&data, 10));
    }

    #[test]
    fn full_chunk_overwrites_history() {
        let data: Vec<u8> = (0..100).collect();
        assert_eq!(feed(&data, &[16], 10, 16), suffix(&data, 10));
    }

    #[test]
    fn invariant_holds_after_every_chunk() {
        let data: Vec<u8> = (0u8..=255).collect();
        let count = 13;
        let buffer_max = 17;
        let mut window = TailWindow::new(count);
        let mut seen = 0;
        for chunk_size in [1, 17, 3, 12, 13, 5, 17, 1, 1, 16, 9] {
            let end = (seen + chunk_size).min(data.len());
            window.absorb(&data[seen..end], buffer_max);
            seen = end;
            assert_eq!(window.valid, count.min(seen), "valid after {seen} bytes");
            assert_eq!(
                &window.window[..window.valid],
                &suffix(&data[..seen], count)[..],
                "window content after {seen} bytes"
            );
        }
    }

    #[test]
    fn irregular_chunkings_agree_with_the_suffix() {
        let data: Vec<u8> = (0..90).map(|i| (i * 37) as u8).collect();
        for chunk_sizes in [&[1][..], &[2, 5][..], &[11][..], &[6, 1, 9, 2][..]] {
            for count in [0, 1, 7, 11, 89, 90, 91] {
                let buffer_max = count.max(11);
                assert_eq!(
                    feed(&data, chunk_sizes, count, buffer_max),
                    suffix(&data, count),
                    "chunks {chunk_sizes:?}, count {count}"
                );
            }
        }
    }

    #[test]
    fn zero_window_stays_empty() {
        let data: Vec<u8> = (0..32).collect();
        assert_eq!(feed(&data, &[5], 0, 8), Vec::<u8>::new());
    }
}
