//! Synchronous windowing API.
//!
//! - [`WindowReader`] - Reads one window per call from a [`std::io::Read`] source
//! - [`Windows`] - Iterator that yields owned [`Window`]s
//! - [`Windower`] - Holds a configuration and builds readers or slices buffers
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use windowrs::WindowReader;
//!
//! let data: Vec<u8> = (0..9).collect();
//! let mut reader = WindowReader::rolling(Cursor::new(data), 3)?;
//!
//! let mut buf = [0u8; 3];
//! assert_eq!(reader.read_window(&mut buf)?, 3);
//! assert_eq!(buf, [0, 1, 2]);
//! assert_eq!(reader.read_window(&mut buf)?, 3);
//! assert_eq!(buf, [1, 2, 3]);
//! # Ok::<(), windowrs::WindowError>(())
//! ```

use std::io::{self, BufReader, Read};
use std::iter::FusedIterator;

use bytes::Bytes;

use super::engine::WindowEngine;
use crate::config::WindowConfig;
use crate::diag::DiagnosticSink;
use crate::error::WindowError;
use crate::window::Window;

/// Capacity of the buffered adapter placed in front of every source.
pub const READ_BUFFER_SIZE: usize = 8 * 1024;

/// A reader that turns a byte stream into fixed-size, possibly overlapping windows.
///
/// Each call to [`read_window`](WindowReader::read_window) yields the next
/// window: the first call pulls a whole window from the source, later calls
/// pull one step and slide. When the stream ends mid-step the last window is
/// shorter than the window size. After that every call returns `Ok(0)`.
///
/// The source is wrapped in a [`BufReader`], so small pulls stay cheap.
///
/// `WindowReader` also implements [`std::io::Read`] with the same
/// semantics, with [`WindowError::ShortBuffer`] surfacing as
/// [`io::ErrorKind::InvalidInput`].
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use windowrs::WindowReader;
///
/// let data: Vec<u8> = (0..10).collect();
/// let mut reader = WindowReader::stepping(Cursor::new(data), 4, 3)?;
///
/// let mut buf = [0u8; 4];
/// let mut lens = Vec::new();
/// loop {
///     let n = reader.read_window(&mut buf)?;
///     if n == 0 {
///         break;
///     }
///     lens.push(n);
/// }
/// assert_eq!(lens, vec![4, 4, 4]);
/// # Ok::<(), windowrs::WindowError>(())
/// ```
#[derive(Debug)]
pub struct WindowReader<R> {
    reader: BufReader<R>,
    engine: WindowEngine,
}

impl<R: Read> WindowReader<R> {
    /// Creates a reader from an already validated configuration.
    pub fn new(reader: R, config: WindowConfig) -> Self {
        Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, reader),
            engine: WindowEngine::new(config),
        }
    }

    /// Creates a reader whose windows advance by `step_size` bytes.
    ///
    /// # Errors
    ///
    /// See [`WindowConfig::stepping`].
    pub fn stepping(reader: R, window_size: usize, step_size: usize) -> Result<Self, WindowError> {
        Ok(Self::new(
            reader,
            WindowConfig::stepping(window_size, step_size)?,
        ))
    }

    /// Creates a reader whose windows advance by one byte.
    ///
    /// # Errors
    ///
    /// See [`WindowConfig::rolling`].
    pub fn rolling(reader: R, window_size: usize) -> Result<Self, WindowError> {
        Ok(Self::new(reader, WindowConfig::rolling(window_size)?))
    }

    /// Installs a sink that sees the ring after every produced window.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + Send + 'static) -> Self {
        self.engine.set_sink(Box::new(sink));
        self
    }

    /// Reads the next window into `dest`.
    ///
    /// Returns the window length, or `Ok(0)` once the windows are exhausted.
    /// Only the first returned bytes of `dest` are written.
    ///
    /// # Errors
    ///
    /// - [`WindowError::ShortBuffer`] if `dest` is smaller than the window
    ///   size. Nothing is pulled from the source and no state changes.
    /// - [`WindowError::Io`] if the source fails. Bytes pulled before the
    ///   failure are kept, so calling again resumes the same window.
    pub fn read_window(&mut self, dest: &mut [u8]) -> Result<usize, WindowError> {
        let needed = self.engine.config().window_size();
        if dest.len() < needed {
            return Err(WindowError::ShortBuffer {
                needed,
                actual: dest.len(),
            });
        }

        if self.pull()? == 0 {
            return Ok(0);
        }
        Ok(self.engine.copy_window(dest))
    }

    /// Pulls from the source until the next window is complete.
    fn pull(&mut self) -> Result<usize, WindowError> {
        if self.engine.is_exhausted() {
            return Ok(0);
        }

        let mut eof = false;
        while !self.engine.is_pull_complete() {
            match self.reader.read(self.engine.spare()) {
                Ok(0) => {
                    eof = true;
                    break;
                }
                Ok(n) => self.engine.advance(n),
                Err(e) => return Err(WindowError::Io(e)),
            }
        }

        Ok(self.engine.commit(eof))
    }

    /// Converts the reader into an iterator of owned windows.
    pub fn windows(self) -> Windows<R> {
        Windows { inner: self }
    }
}

impl<R> WindowReader<R> {
    /// Returns the configuration.
    pub fn config(&self) -> &WindowConfig {
        self.engine.config()
    }

    /// Returns the window size.
    pub fn window_size(&self) -> usize {
        self.engine.config().window_size()
    }

    /// Returns the step size.
    pub fn step_size(&self) -> usize {
        self.engine.config().step_size()
    }

    /// Returns how many windows have been produced so far.
    pub fn windows_produced(&self) -> u64 {
        self.engine.produced()
    }

    /// Returns the stream offset of the most recent window.
    pub fn window_offset(&self) -> Option<u64> {
        self.engine.window_offset()
    }

    /// Returns true once the reader has reported end-of-stream.
    pub fn is_exhausted(&self) -> bool {
        self.engine.is_exhausted()
    }

    /// Returns a copy of the most recent window.
    pub fn current_window(&self) -> Option<Window> {
        self.engine.window()
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        self.reader.get_ref()
    }
}

impl<R: Read> Read for WindowReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_window(buf).map_err(io::Error::from)
    }
}

/// An iterator over the windows of a reader.
///
/// Yields `Err` when the source fails; iteration may continue afterwards and
/// resumes the interrupted window. Once `None` is returned it is returned
/// forever.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use windowrs::WindowReader;
///
/// let reader = WindowReader::stepping(Cursor::new(b"abcdefg".to_vec()), 3, 2)?;
/// let windows = reader.windows().collect::<Result<Vec<_>, _>>()?;
///
/// let data: Vec<&[u8]> = windows.iter().map(|w| &w.data[..]).collect();
/// assert_eq!(data, vec![&b"abc"[..], &b"cde"[..], &b"efg"[..]]);
/// # Ok::<(), windowrs::WindowError>(())
/// ```
#[derive(Debug)]
pub struct Windows<R> {
    inner: WindowReader<R>,
}

impl<R> Windows<R> {
    /// Returns the reader driving this iterator.
    pub fn reader(&self) -> &WindowReader<R> {
        &self.inner
    }

    /// Converts back into the reader.
    pub fn into_reader(self) -> WindowReader<R> {
        self.inner
    }
}

impl<R: Read> Iterator for Windows<R> {
    type Item = Result<Window, WindowError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.pull() {
            Ok(0) => None,
            Ok(_) => self.inner.engine.window().map(Ok),
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: Read> FusedIterator for Windows<R> {}

/// Holds a window configuration and applies it to sources.
///
/// # Example
///
/// ```
/// use windowrs::{WindowConfig, Windower};
///
/// let windower = Windower::new(WindowConfig::chunking(4)?);
/// let windows = windower.window_bytes(&b"0123456789"[..]);
///
/// assert_eq!(windows.len(), 3);
/// assert_eq!(&windows[2].data[..], b"89");
/// # Ok::<(), windowrs::WindowError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Windower {
    config: WindowConfig,
}

impl Windower {
    /// Creates a windower with the given configuration.
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Creates a [`WindowReader`] over `reader`.
    pub fn reader<R: Read>(&self, reader: R) -> WindowReader<R> {
        WindowReader::new(reader, self.config)
    }

    /// Creates a [`Windows`] iterator over `reader`.
    pub fn windows<R: Read>(&self, reader: R) -> Windows<R> {
        self.reader(reader).windows()
    }

    /// Windows an in-memory buffer.
    ///
    /// Produces exactly the windows a [`WindowReader`] would, but every
    /// window shares the input allocation instead of being copied.
    pub fn window_bytes(&self, data: impl Into<Bytes>) -> Vec<Window> {
        let data = data.into();
        let window = self.config.window_size();
        let step = self.config.step_size();

        let mut windows = Vec::new();
        let mut start = 0usize;
        let mut prev_end = 0usize;

        while start < data.len() {
            let end = (start + window).min(data.len());
            if end <= prev_end {
                break;
            }
            windows.push(Window::new(data.slice(start..end), start as u64));
            prev_end = end;
            start += step;
        }

        windows
    }
}
