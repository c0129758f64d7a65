//! Fixed-capacity byte ring for the current window.
//!
//! # Invariants
//! - `len <= capacity` and `head < capacity`.
//! - The valid bytes, oldest first, start at `head` and may wrap around the
//!   end of the backing `Vec`; `segments()` returns them as up to two slices.

/// Ring holding at most `capacity` bytes in stream order.
pub(crate) struct WindowRing {
    buf: Vec<u8>,
    head: usize,
    len: usize,
}

impl WindowRing {
    /// Creates an empty ring.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "WindowRing capacity must be > 0");
        Self {
            buf: vec![0u8; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Number of valid bytes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends bytes at the newest end.
    ///
    /// Once the ring is full every appended byte overwrites the oldest one.
    pub(crate) fn push_slice(&mut self, data: &[u8]) {
        let cap = self.buf.len();

        if data.len() >= cap {
            self.buf.copy_from_slice(&data[data.len() - cap..]);
            self.head = 0;
            self.len = cap;
            return;
        }

        for &byte in data {
            if self.len < cap {
                let tail = (self.head + self.len) % cap;
                self.buf[tail] = byte;
                self.len += 1;
            } else {
                self.buf[self.head] = byte;
                self.head = (self.head + 1) % cap;
            }
        }
    }

    /// Forgets the `n` oldest bytes (clamped to `len`).
    pub(crate) fn drop_front(&mut self, n: usize) {
        let n = n.min(self.len);
        self.head = (self.head + n) % self.buf.len();
        self.len -= n;
    }

    /// Returns the valid bytes as up to two slices in stream order.
    pub(crate) fn segments(&self) -> (&[u8], &[u8]) {
        if self.len == 0 {
            return (&[], &[]);
        }
        let cap = self.buf.len();
        let start = self.head;
        if self.len <= cap - start {
            (&self.buf[start..start + self.len], &[])
        } else {
            let first = cap - start;
            (&self.buf[start..], &self.buf[..self.len - first])
        }
    }

    /// Copies the valid bytes into `dest` oldest first, returning the count.
    ///
    /// `dest` must hold at least `len()` bytes.
    pub(crate) fn copy_to(&self, dest: &mut [u8]) -> usize {
        let (a, b) = self.segments();
        dest[..a.len()].copy_from_slice(a);
        dest[a.len()..a.len() + b.len()].copy_from_slice(b);
        a.len() + b.len()
    }
}
