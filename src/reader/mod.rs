//! Windowing engine for processing byte streams.
//!
//! - [`WindowReader`] - Stateful reader yielding one window per call
//! - [`Windows`] - Iterator of owned windows
//! - [`Windower`] - Configuration holder, also windows in-memory buffers

mod engine;
mod iter;

#[cfg(feature = "async-io")]
pub(crate) use engine::WindowEngine;
pub use iter::{READ_BUFFER_SIZE, WindowReader, Windower, Windows};
