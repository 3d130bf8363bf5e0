use crate::domain::ports::TrackingSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// First tracking number handed out by a fresh counter.
pub const FIRST_TRACKING: u64 = 101;

/// Sequential tracking numbers: 101, 102, 103, ...
#[derive(Debug)]
pub struct TrackingCounter {
    next: AtomicU64,
}

impl TrackingCounter {
    pub const fn new() -> Self {
        Self::starting_at(FIRST_TRACKING)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// The number the next call to `next_tracking` will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for TrackingCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingSource for TrackingCounter {
    fn next_tracking(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

// Lives for the whole process; never reset.
static GLOBAL: TrackingCounter = TrackingCounter::new();

/// The process-wide counter used by `Item::new`.
pub fn global() -> &'static TrackingCounter {
    &GLOBAL
}
