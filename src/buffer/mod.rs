//! Internal buffer management.
//!
//! This module provides the fixed-capacity ring that holds the bytes of the
//! most recently produced window. It is an implementation detail and not part
//! of the public API.

mod ring;

pub(crate) use ring::WindowRing;
