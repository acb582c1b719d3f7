//! # Debounce
//!
//! Collapses a burst of calls into the single most recent one, delivered
//! once `window` has passed with no further calls.
//!
//! ```text
//! call("m")  call("mi")  call("min")            poll() → Some("min")
//!    │          │           │                      │
//! ───┴──────────┴───────────┴──────── window ──────┴──▶ time
//!               (each call resets the deadline)
//! ```
//!
//! The debouncer owns no timer or thread. Callers pass `now` in and drive
//! delivery by polling, which keeps it usable from a synchronous event loop
//! and trivially testable with synthetic instants.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a call. Replaces any pending value and restarts the window.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// Returns the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Deliver the pending value immediately, regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Time left until the pending value fires (zero if overdue, None if idle).
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}
