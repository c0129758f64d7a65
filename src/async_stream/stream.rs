//! Async stream adapter for windowing.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use windowrs::{window_async, WindowConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), windowrs::WindowError> {
//!     let mut stream = window_async(reader, WindowConfig::rolling(32)?);
//!
//!     while let Some(window) = stream.next().await {
//!         let window = window?;
//!         println!("{}", window);
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_core::stream::FusedStream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::WindowConfig;
use crate::diag::DiagnosticSink;
use crate::error::WindowError;
use crate::reader::WindowEngine;
use crate::window::Window;

pin_project! {
    /// A stream that yields windows from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// The reader is polled directly with reads no larger than one step (one
    /// window for the first pull), so wrapping it in a buffered reader pays
    /// off for small steps.
    ///
    /// A source error is yielded as `Err`; polling again resumes the
    /// interrupted window. After the stream ends it stays ended.
    pub struct WindowStream<R> {
        #[pin]
        reader: R,
        engine: WindowEngine,
    }
}

impl<R> WindowStream<R> {
    /// Creates a new window stream from an async reader.
    pub fn new(reader: R, config: WindowConfig) -> Self {
        Self {
            reader,
            engine: WindowEngine::new(config),
        }
    }

    /// Installs a sink that sees the ring after every produced window.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + Send + 'static) -> Self {
        self.engine.set_sink(Box::new(sink));
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &WindowConfig {
        self.engine.config()
    }

    /// Returns how many windows have been produced so far.
    pub fn windows_produced(&self) -> u64 {
        self.engine.produced()
    }
}

impl<R: AsyncRead> Stream for WindowStream<R> {
    type Item = Result<Window, WindowError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if this.engine.is_exhausted() {
            return Poll::Ready(None);
        }

        let mut eof = false;
        while !this.engine.is_pull_complete() {
            match this.reader.as_mut().poll_read(cx, this.engine.spare()) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => return Poll::Ready(Some(Err(WindowError::Io(e)))),
                Poll::Ready(Ok(0)) => {
                    eof = true;
                    break;
                }
                Poll::Ready(Ok(n)) => this.engine.advance(n),
            }
        }

        if this.engine.commit(eof) == 0 {
            return Poll::Ready(None);
        }
        Poll::Ready(this.engine.window().map(Ok))
    }
}

impl<R: AsyncRead> FusedStream for WindowStream<R> {
    fn is_terminated(&self) -> bool {
        self.engine.is_exhausted()
    }
}

/// Creates a window stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use windowrs::{window_async, WindowConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = window_async(tokio_reader.compat(), WindowConfig::rolling(64)?);
/// ```
pub fn window_async<R: AsyncRead>(reader: R, config: WindowConfig) -> WindowStream<R> {
    WindowStream::new(reader, config)
}
