//! windowrs
//!
//! Fixed-size, possibly overlapping byte windows over a stream.
//!
//! `windowrs` turns any byte source into a sequence of windows of a configured
//! size that advance by a configured step:
//!
//! - step == window: disjoint chunks
//! - step == 1: a rolling view, one window per byte position (rolling hashes,
//!   pattern scanning)
//! - anything in between: overlapping stepping windows
//!
//! When the stream ends mid-window the last window is shorter than the window
//! size. After that the reader reports end-of-stream forever.
//!
//! The crate intentionally:
//! - does NOT interpret window contents (no hashing, no boundary detection)
//! - does NOT manage concurrency
//! - does NOT own the source's lifecycle
//!
//! It only does one thing: **Read bytes → yield windows**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use windowrs::{WindowError, WindowReader};
//!
//! fn main() -> Result<(), WindowError> {
//!     let file = File::open("data.bin")?;
//!     let mut reader = WindowReader::stepping(file, 64, 16)?;
//!
//!     let mut buf = [0u8; 64];
//!     loop {
//!         let n = reader.read_window(&mut buf)?;
//!         if n == 0 {
//!             break;
//!         }
//!         println!("window of {} bytes", n);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
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
//!         println!("window {} @ {}", window.len(), window.offset);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod diag;
mod error;
mod reader;
mod window;

mod buffer; // internal ring
mod util;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use config::WindowConfig;
pub use diag::{DiagnosticSink, LogSink, RING_LOG_TARGET, RingSnapshot};
pub use error::WindowError;
pub use reader::{READ_BUFFER_SIZE, WindowReader, Windower, Windows};
pub use window::Window;

#[cfg(feature = "async-io")]
pub use async_stream::{WindowStream, window_async};
