// SPDX-License-Identifier: MPL-2.0
//! Diagnostic trace for the console.
//!
//! Every handler reports what it did as a [`TraceEvent`]. The event is
//! forwarded to `tracing` (target `rover_console::trace`) and kept in a
//! memory-bounded [`CircularBuffer`] so the UI can show recent activity.

mod buffer;
mod events;

pub use buffer::{trace_capacity_bounds, CircularBuffer, TraceCapacity};
pub use events::{TraceEntry, TraceEvent};

/// Bounded, time-stamped record of handler activity.
#[derive(Debug, Clone)]
pub struct TraceLog {
    entries: CircularBuffer<TraceEntry>,
}

impl TraceLog {
    #[must_use]
    pub fn new(capacity: TraceCapacity) -> Self {
        Self {
            entries: CircularBuffer::new(capacity),
        }
    }

    /// Emits `event` through `tracing` and stores it.
    pub fn record(&mut self, event: TraceEvent) {
        if event.is_warning() {
            tracing::warn!(target: "rover_console::trace", "{event}");
        } else {
            tracing::info!(target: "rover_console::trace", "{event}");
        }
        self.entries.push(TraceEntry::new(event));
    }

    /// Stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.entries.iter().map(|entry| &entry.event)
    }

    /// Up to `count` most recent entries, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceEntry> {
        let mut recent: Vec<_> = self.entries.iter().rev().take(count).collect();
        recent.reverse();
        recent
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new(TraceCapacity::default())
    }
}
