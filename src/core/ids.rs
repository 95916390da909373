use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source for work orders. An explicit object rather than a
/// process-wide global so tests can run isolated generators with known
/// starting values.
///
/// `next_id` is a single atomic fetch-and-increment: under concurrent
/// construction every caller observes a distinct id and the sequence has no
/// gaps above the starting value.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
