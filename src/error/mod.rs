//! Error types for windowrs.

use std::fmt;
use std::io;

/// Errors that can occur while configuring or driving a window reader.
#[derive(Debug)]
pub enum WindowError {
    /// The underlying source failed with something other than end-of-stream.
    Io(io::Error),

    /// The window size was zero.
    ZeroWindowSize,

    /// The step size was zero.
    ZeroStepSize,

    /// The step was larger than the window, so bytes would be skipped.
    DisjointWindow {
        /// The configured window size.
        window_size: usize,
        /// The configured step size.
        step_size: usize,
    },

    /// The destination buffer cannot hold a full window.
    ShortBuffer {
        /// Bytes required (the window size).
        needed: usize,
        /// Bytes offered by the caller.
        actual: usize,
    },
}

impl WindowError {
    /// Returns true for errors raised while validating a configuration.
    ///
    /// These are never produced by a read call and are not fixed by retrying.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WindowError::ZeroWindowSize
                | WindowError::ZeroStepSize
                | WindowError::DisjointWindow { .. }
        )
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::Io(e) => write!(f, "io error: {}", e),
            WindowError::ZeroWindowSize => {
                write!(f, "invalid config: window size cannot be zero")
            }
            WindowError::ZeroStepSize => write!(f, "invalid config: step size cannot be zero"),
            WindowError::DisjointWindow {
                window_size,
                step_size,
            } => write!(
                f,
                "invalid config: step size {} is larger than window size {}",
                step_size, window_size
            ),
            WindowError::ShortBuffer { needed, actual } => {
                write!(f, "short buffer: {} bytes (need {})", actual, needed)
            }
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WindowError {
    fn from(e: io::Error) -> Self {
        WindowError::Io(e)
    }
}

impl From<WindowError> for io::Error {
    fn from(e: WindowError) -> Self {
        match e {
            WindowError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: WindowError = io_err.into();
        assert!(matches!(err, WindowError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_into_io_error_keeps_source_kind() {
        let err = WindowError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_short_buffer_into_io_error() {
        let err = WindowError::ShortBuffer {
            needed: 5,
            actual: 3,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("short buffer"));
    }

    #[test]
    fn test_display() {
        let err = WindowError::DisjointWindow {
            window_size: 2,
            step_size: 3,
        };
        assert!(err.to_string().contains("larger than window size 2"));
        assert!(WindowError::ZeroWindowSize.to_string().contains("window size"));
        assert!(WindowError::ZeroStepSize.to_string().contains("step size"));
    }

    #[test]
    fn test_is_config_error() {
        assert!(WindowError::ZeroWindowSize.is_config_error());
        assert!(WindowError::ZeroStepSize.is_config_error());
        assert!(
            WindowError::DisjointWindow {
                window_size: 1,
                step_size: 2
            }
            .is_config_error()
        );
        assert!(
            !WindowError::ShortBuffer {
                needed: 2,
                actual: 1
            }
            .is_config_error()
        );
        assert!(!WindowError::Io(io::Error::other("x")).is_config_error());
    }
}
