//! Windowing state machine shared by the sync reader and the async stream.
//!
//! The engine never touches a source itself. A driver asks for the slice it
//! should fill ([`WindowEngine::spare`]), reports how much it got
//! ([`WindowEngine::advance`]), and finally calls [`WindowEngine::commit`]
//! once the pull is complete or the source reported end-of-stream.
//!
//! Phases: `Filling` (first window) → `Sliding` → `Exhausted`. A short final
//! window is produced on the way into `Exhausted`.
//!
//! Bytes pulled during a call are staged outside the ring and only committed
//! together, so a source error in the middle of a pull leaves the ring
//! holding the previous window and the next attempt resumes where the failed
//! one stopped.

use std::fmt;

use crate::buffer::WindowRing;
use crate::config::WindowConfig;
use crate::diag::{DiagnosticSink, RingSnapshot};
use crate::util::join_segments;
use crate::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Filling,
    Sliding,
    Exhausted,
}

pub(crate) struct WindowEngine {
    config: WindowConfig,
    ring: WindowRing,
    staged: Vec<u8>,
    filled: usize,
    phase: Phase,
    offset: u64,
    produced: u64,
    sink: Option<Box<dyn DiagnosticSink + Send>>,
}

impl WindowEngine {
    pub(crate) fn new(config: WindowConfig) -> Self {
        let window_size = config.window_size();
        Self {
            config,
            ring: WindowRing::with_capacity(window_size),
            staged: vec![0u8; window_size],
            filled: 0,
            phase: Phase::Filling,
            offset: 0,
            produced: 0,
            sink: None,
        }
    }

    pub(crate) fn set_sink(&mut self, sink: Box<dyn DiagnosticSink + Send>) {
        self.sink = Some(sink);
    }

    pub(crate) fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    pub(crate) fn produced(&self) -> u64 {
        self.produced
    }

    /// Offset of the current window, `None` before the first one.
    pub(crate) fn window_offset(&self) -> Option<u64> {
        (self.produced > 0).then_some(self.offset)
    }

    /// Bytes this pull must gather: the whole window first, a step afterwards.
    fn request(&self) -> usize {
        match self.phase {
            Phase::Filling => self.config.window_size(),
            Phase::Sliding => self.config.step_size(),
            Phase::Exhausted => 0,
        }
    }

    /// The part of the staging area still waiting for source bytes.
    pub(crate) fn spare(&mut self) -> &mut [u8] {
        let end = self.request();
        &mut self.staged[self.filled..end]
    }

    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.filled + n <= self.request());
        self.filled += n;
    }

    pub(crate) fn is_pull_complete(&self) -> bool {
        self.filled == self.request()
    }

    /// Turns the staged bytes into the next window and returns its length.
    ///
    /// `eof` is true when the source reported end-of-stream during the pull.
    /// A return of 0 means there are no more windows; the engine is then
    /// exhausted for good.
    pub(crate) fn commit(&mut self, eof: bool) -> usize {
        let pulled = std::mem::take(&mut self.filled);

        match self.phase {
            Phase::Exhausted => return 0,
            _ if pulled == 0 => {
                self.phase = Phase::Exhausted;
                return 0;
            }
            Phase::Filling => {
                self.ring.push_slice(&self.staged[..pulled]);
            }
            Phase::Sliding => {
                let step = self.config.step_size();
                self.ring.push_slice(&self.staged[..pulled]);
                // The step was cut short by end-of-stream: the window still
                // starts `step` bytes after the previous one.
                if pulled < step {
                    self.ring.drop_front(step - pulled);
                }
                self.offset += step as u64;
            }
        }

        self.phase = if eof { Phase::Exhausted } else { Phase::Sliding };
        self.produced += 1;

        if let Some(sink) = self.sink.as_mut() {
            let (head, tail) = self.ring.segments();
            sink.record(&RingSnapshot {
                window_index: self.produced - 1,
                offset: self.offset,
                head,
                tail,
            });
        }

        self.ring.len()
    }

    /// Copies the current window into `dest`, which must fit a full window.
    pub(crate) fn copy_window(&self, dest: &mut [u8]) -> usize {
        self.ring.copy_to(dest)
    }

    /// The current window, `None` before the first one.
    pub(crate) fn window(&self) -> Option<Window> {
        if self.produced == 0 || self.ring.is_empty() {
            return None;
        }
        let (head, tail) = self.ring.segments();
        Some(Window::new(join_segments(head, tail), self.offset))
    }
}

impl fmt::Debug for WindowEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowEngine")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("valid", &self.ring.len())
            .field("staged", &self.filled)
            .field("offset", &self.offset)
            .field("produced", &self.produced)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds `data` in pieces of at most `piece` bytes and collects every window.
    fn drive(config: WindowConfig, data: &[u8], piece: usize) -> Vec<Window> {
        let mut engine = WindowEngine::new(config);
        let mut pos = 0;
        let mut windows = Vec::new();

        loop {
            let mut eof = false;
            while !engine.is_pull_complete() {
                let spare = engine.spare();
                let n = spare.len().min(piece).min(data.len() - pos);
                if n == 0 {
                    eof = true;
                    break;
                }
                spare[..n].copy_from_slice(&data[pos..pos + n]);
                pos += n;
                engine.advance(n);
            }
            if engine.commit(eof) == 0 {
                return windows;
            }
            windows.extend(engine.window());
        }
    }

    #[test]
    fn test_rolling_windows() {
        let data: Vec<u8> = (0..9).collect();
        let windows = drive(WindowConfig::rolling(3).unwrap(), &data, 1);

        assert_eq!(windows.len(), 7);
        for (i, window) in windows.iter().enumerate() {
            assert_eq!(window.offset, i as u64);
            assert_eq!(&window.data[..], &data[i..i + 3]);
        }
    }

    #[test]
    fn test_short_final_step() {
        let data: Vec<u8> = (0..11).collect();
        let windows = drive(WindowConfig::stepping(4, 3).unwrap(), &data, 64);

        let ranges: Vec<_> = windows.iter().map(|w| w.range()).collect();
        assert_eq!(ranges, vec![0..4, 3..7, 6..10, 9..11]);
        assert_eq!(&windows[3].data[..], &[9, 10]);
    }

    #[test]
    fn test_short_first_window() {
        let windows = drive(WindowConfig::rolling(5).unwrap(), b"ab", 64);
        assert_eq!(windows.len(), 1);
        assert_eq!(&windows[0].data[..], b"ab");
    }

    #[test]
    fn test_exhausted_is_terminal() {
        let mut engine = WindowEngine::new(WindowConfig::rolling(2).unwrap());
        assert_eq!(engine.commit(true), 0);
        assert!(engine.is_exhausted());
        assert_eq!(engine.commit(true), 0);
        assert_eq!(engine.commit(false), 0);
        assert!(engine.window().is_none());
        assert_eq!(engine.window_offset(), None);
    }

    #[test]
    fn test_sink_sees_every_window() {
        use std::sync::{Arc, Mutex};

        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);

        let mut engine = WindowEngine::new(WindowConfig::rolling(2).unwrap());
        engine.set_sink(Box::new(move |s: &RingSnapshot<'_>| {
            captured.lock().unwrap().push(s.to_string());
        }));

        engine.spare().copy_from_slice(&[1, 2]);
        engine.advance(2);
        assert_eq!(engine.commit(false), 2);

        engine.spare().copy_from_slice(&[3]);
        engine.advance(1);
        assert_eq!(engine.commit(false), 2);

        assert_eq!(
            *lines.lock().unwrap(),
            vec![
                "window #0 @ 0 :: Ring: [1, 2]".to_string(),
                "window #1 @ 1 :: Ring: [2, 3]".to_string(),
            ]
        );
    }
}
