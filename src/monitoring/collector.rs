/*!
 * Event Collector
 * Buffers table events until the reporter drains them
 */

use super::events::{Event, Payload};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Buffering event collector
///
/// Shared as `Arc<Collector>` between the table that emits and the
/// reporter that drains.
#[derive(Debug, Default)]
pub struct Collector {
    buffer: Mutex<Vec<Event>>,
    seq: AtomicU64,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an event with the payload's default severity
    #[inline]
    pub fn emit(&self, payload: Payload) {
        let event = Event {
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            severity: payload.severity(),
            payload,
        };
        self.buffer.lock().push(event);
    }

    /// Take every buffered event, oldest first
    pub fn drain(&self) -> Vec<Event> {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Total events emitted over the collector's lifetime
    pub fn emitted(&self) -> u64 {
        self.seq.load(Ordering::Relaxed)
    }
}
