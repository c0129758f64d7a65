//! Diagnostic hooks for inspecting the window ring.
//!
//! A reader never prints or logs on its own. Callers that want to watch the
//! ring evolve inject a [`DiagnosticSink`]; it receives a [`RingSnapshot`]
//! after every produced window.
//!
//! - [`DiagnosticSink`] - Receives ring snapshots (closures work too)
//! - [`LogSink`] - Forwards snapshots to the `log` facade
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use windowrs::{RingSnapshot, WindowReader};
//!
//! let mut seen = Vec::new();
//! let mut reader = WindowReader::rolling(Cursor::new(vec![0u8, 1, 2, 3]), 3)?
//!     .with_diagnostics(move |snapshot: &RingSnapshot<'_>| {
//!         println!("{}", snapshot);
//!     });
//!
//! let mut buf = [0u8; 3];
//! while reader.read_window(&mut buf)? > 0 {
//!     seen.push(buf);
//! }
//! assert_eq!(seen.len(), 2);
//! # Ok::<(), windowrs::WindowError>(())
//! ```

use std::fmt;

/// Log target used by [`LogSink`].
pub const RING_LOG_TARGET: &str = "windowrs::ring";

/// A borrowed view of the ring right after a window was produced.
///
/// The bytes are split in two because the ring may wrap; concatenating
/// `head` and `tail` gives the window oldest first.
#[derive(Debug, Clone, Copy)]
pub struct RingSnapshot<'a> {
    /// Zero-based index of the window in the stream.
    pub window_index: u64,
    /// Stream offset of the first byte in the window.
    pub offset: u64,
    /// First (oldest) part of the window.
    pub head: &'a [u8],
    /// Wrapped remainder of the window, possibly empty.
    pub tail: &'a [u8],
}

impl RingSnapshot<'_> {
    /// Number of valid bytes in the ring.
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// Returns true if the ring holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the window bytes oldest first.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.head.iter().chain(self.tail.iter()).copied()
    }

    /// Copies the window into a new `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().collect()
    }
}

impl fmt::Display for RingSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "window #{} @ {} :: Ring: [",
            self.window_index, self.offset
        )?;
        for (i, byte) in self.bytes().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", byte)?;
        }
        write!(f, "]")
    }
}

/// Receives a snapshot of the ring after every produced window.
pub trait DiagnosticSink {
    /// Called once per produced window.
    fn record(&mut self, snapshot: &RingSnapshot<'_>);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&RingSnapshot<'_>),
{
    fn record(&mut self, snapshot: &RingSnapshot<'_>) {
        self(snapshot)
    }
}

/// Sink that writes each snapshot through the `log` facade.
///
/// Records go to the [`RING_LOG_TARGET`] target at the configured level
/// (`Debug` by default), so they can be filtered independently of the
/// caller's own logs.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    level: log::Level,
}

impl LogSink {
    /// Creates a sink logging at `level`.
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }

    /// Returns the level records are emitted at.
    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl DiagnosticSink for LogSink {
    fn record(&mut self, snapshot: &RingSnapshot<'_>) {
        log::log!(target: RING_LOG_TARGET, self.level, "{}", snapshot);
    }
}
