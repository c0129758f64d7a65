//! The Window type - one contiguous range of the input stream.

use bytes::Bytes;
use std::fmt;

/// A window of stream bytes together with where it starts in the stream.
///
/// Every window but the last has exactly the configured window size; the last
/// one may be shorter when the stream ends mid-window.
///
/// # Example
///
/// ```
/// use windowrs::Window;
/// use bytes::Bytes;
///
/// let window = Window::new(Bytes::from_static(b"abc"), 6);
///
/// assert_eq!(window.len(), 3);
/// assert_eq!(window.range(), 6..9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Window {
    /// The window bytes, oldest first.
    pub data: Bytes,

    /// Offset of the first byte in the original stream.
    pub offset: u64,
}

impl Window {
    /// Creates a window starting at `offset`.
    pub fn new(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
        }
    }

    /// Returns the number of bytes in the window.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the window has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the window data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the start offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the covered stream range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Returns true if this window is shorter than `window_size`.
    ///
    /// Only the trailing window of a stream can be partial.
    pub fn is_partial(&self, window_size: usize) -> bool {
        self.data.len() < window_size
    }

    /// Consumes the window and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Window {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({} bytes @ {})", self.len(), self.offset)
    }
}
