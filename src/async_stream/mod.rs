//! Async streaming support for windowing.
//!
//! This module provides asynchronous windowing using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! - [`window_async`] - Creates an async stream of windows from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{WindowStream, window_async};
