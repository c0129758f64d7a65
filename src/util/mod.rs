//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use bytes::{BufMut, Bytes, BytesMut};

/// Joins the two halves of a wrapped ring into one contiguous `Bytes`.
pub(crate) fn join_segments(a: &[u8], b: &[u8]) -> Bytes {
    let mut joined = BytesMut::with_capacity(a.len() + b.len());
    joined.put_slice(a);
    joined.put_slice(b);
    joined.freeze()
}
