//! Splice event id allocation.

use std::sync::atomic::{AtomicU32, Ordering};

/// Default first event id handed out by a fresh sequence.
pub const DEFAULT_INITIAL_EVENT_ID: u32 = 100_023;

/// Monotonic source of splice event ids.
///
/// `next` is a single atomic fetch-and-increment, so concurrent callers never
/// observe the same id. The counter wraps at `u32::MAX`.
#[derive(Debug)]
pub struct EventIdSequence {
    next: AtomicU32,
}

impl EventIdSequence {
    /// Creates a sequence whose first id is `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            next: AtomicU32::new(seed),
        }
    }

    /// Returns the current value and advances the counter.
    pub fn next(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }

    /// Overwrites the counter.
    pub fn reset(&self, seed: u32) {
        self.next.store(seed, Ordering::Relaxed);
    }
}

impl Default for EventIdSequence {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_EVENT_ID)
    }
}
