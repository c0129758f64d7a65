//! Configuration for windowing behavior.
//!
//! - [`WindowConfig`] - Validated window size and step size
//!
//! # Example
//!
//! ```
//! use windowrs::WindowConfig;
//!
//! // Every byte position starts a new 32-byte window
//! let rolling = WindowConfig::rolling(32)?;
//! assert_eq!(rolling.step_size(), 1);
//!
//! // Overlapping windows that advance by 4 bytes
//! let stepping = WindowConfig::stepping(16, 4)?;
//!
//! // Disjoint chunks
//! let chunking = WindowConfig::chunking(4096)?;
//! assert_eq!(chunking.window_size(), chunking.step_size());
//!
//! # Ok::<(), windowrs::WindowError>(())
//! ```

use crate::error::WindowError;

/// Window and step size for a window reader.
///
/// Constraint: `1 <= step_size <= window_size`. A step larger than the window
/// would skip bytes between windows, so it is rejected.
///
/// The only way to obtain a `WindowConfig` is through one of the validating
/// constructors, so a reader built from it never needs to re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowConfig {
    window_size: usize,
    step_size: usize,
}

impl WindowConfig {
    /// Creates a stepping configuration.
    ///
    /// The step is checked first: `step_size == 0` fails with
    /// [`WindowError::ZeroStepSize`] even when the window is zero as well.
    ///
    /// # Errors
    ///
    /// - [`WindowError::ZeroStepSize`] if `step_size == 0`
    /// - [`WindowError::DisjointWindow`] if `step_size > window_size`
    pub fn stepping(window_size: usize, step_size: usize) -> Result<Self, WindowError> {
        if step_size == 0 {
            return Err(WindowError::ZeroStepSize);
        }

        if step_size > window_size {
            return Err(WindowError::DisjointWindow {
                window_size,
                step_size,
            });
        }

        Ok(Self {
            window_size,
            step_size,
        })
    }

    /// Creates a rolling configuration (step of one byte).
    ///
    /// Same as `WindowConfig::stepping(window_size, 1)`, except that a zero
    /// window reports [`WindowError::ZeroWindowSize`].
    pub fn rolling(window_size: usize) -> Result<Self, WindowError> {
        if window_size == 0 {
            return Err(WindowError::ZeroWindowSize);
        }
        Self::stepping(window_size, 1)
    }

    /// Creates a chunking configuration where consecutive windows do not overlap.
    pub fn chunking(window_size: usize) -> Result<Self, WindowError> {
        if window_size == 0 {
            return Err(WindowError::ZeroWindowSize);
        }
        Self::stepping(window_size, window_size)
    }

    /// Returns the window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the step size.
    pub fn step_size(&self) -> usize {
        self.step_size
    }

    /// Returns true if each window starts one byte after the previous one.
    pub fn is_rolling(&self) -> bool {
        self.step_size == 1
    }

    /// Returns true if consecutive windows do not overlap.
    pub fn is_chunking(&self) -> bool {
        self.step_size == self.window_size
    }

    /// Returns how many windows a stream of `len` bytes produces.
    ///
    /// A stream shorter than the window yields a single short window; an
    /// empty stream yields none. Otherwise the count is
    /// `ceil((len - window) / step) + 1`.
    pub fn window_count(&self, len: u64) -> u64 {
        let window = self.window_size as u64;
        let step = self.step_size as u64;

        if len == 0 {
            return 0;
        }
        if len <= window {
            return 1;
        }
        (len - window).div_ceil(step) + 1
    }
}
