//! Window types.
//!
//! - [`Window`] - One window of stream bytes with its stream offset

mod data;

pub use data::Window;
