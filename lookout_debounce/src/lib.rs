// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_debounce --heading-base-level=0

//! Lookout Debounce: host-pumped debounce primitives.
//!
//! This crate provides [`Debounce`], a small timestamp-driven state machine
//! that rate-limits a stream of values with **leading**, **trailing**, and
//! **max-wait** edges:
//!
//! - The first value of a burst fires immediately (leading edge).
//! - Values arriving while the window is open coalesce; only the newest is
//!   kept.
//! - Once no value has arrived for the settle interval, the kept value fires
//!   (trailing edge). A burst of one fires the leading edge only.
//! - Under a sustained burst, a fire happens at least once per max-wait
//!   interval, so consumers are never starved by continuous input.
//!
//! There are no threads and no timers here. The host owns time: it passes a
//! timestamp into every call and is expected to pump [`Debounce::poll`]
//! regularly (typically once per frame). Deadlines are computed lazily from
//! the recorded timestamps, so sparse polling fires late rather than wrong.
//!
//! ## Minimal example
//!
//! ```rust
//! use lookout_debounce::Debounce;
//!
//! // Fire on the first value, then at most once per 100 ticks while values
//! // keep arriving, with a hard cap of 200 ticks between fires.
//! let mut debounce = Debounce::new(100, 200);
//!
//! // The first call in an idle window fires immediately (leading edge).
//! assert_eq!(debounce.call("a", 0), Some("a"));
//!
//! // Calls inside the window coalesce; the newest value wins.
//! assert_eq!(debounce.call("b", 30), None);
//! assert_eq!(debounce.call("c", 60), None);
//!
//! // The host pumps time; once the burst settles, the last value fires.
//! assert_eq!(debounce.poll(100), None); // still within the settle window
//! assert_eq!(debounce.poll(160), Some("c"));
//! ```
//!
//! ## Design notes
//!
//! - Timestamps are plain `u64` ticks in a caller-chosen unit (milliseconds
//!   are typical). They are expected to be monotonically non-decreasing;
//!   the machine saturates rather than panics if they are not.
//! - A value returned from [`Debounce::call`], [`Debounce::poll`], or
//!   [`Debounce::flush`] is a *fire*: the caller must deliver it. The
//!   machine never delivers the same value twice.
//! - If the host stops polling, pending trailing values are superseded by
//!   later calls instead of firing; the next call past a deadline fires at
//!   call time with its own value.
//! - A settle interval of `0` disables coalescing entirely; every call
//!   fires.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

/// Rate-limits a stream of values with leading, trailing, and max-wait edges.
///
/// `Debounce` is a passive state machine: it never fires on its own. The
/// host feeds values in via [`Debounce::call`] and pumps deadlines via
/// [`Debounce::poll`], both with caller-supplied timestamps. Each method
/// returns `Some(value)` when that value should be acted on *now*.
///
/// The window lifecycle:
///
/// 1. Idle. The next call fires immediately and opens a window.
/// 2. Open. Calls coalesce into a single pending value. The trailing
///    deadline is the last call plus the settle interval, capped by the
///    last fire plus the max-wait interval.
/// 3. A poll at or past the deadline fires the pending value (or closes
///    the window silently if nothing arrived after the leading fire).
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    settle: u64,
    max_wait: u64,
    last_call: u64,
    last_fire: u64,
    armed: bool,
    called: bool,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    /// Creates a debounce with the given settle and max-wait intervals.
    ///
    /// `max_wait` is raised to `settle` if smaller, since the trailing edge
    /// can never fire sooner than the settle interval allows.
    #[must_use]
    pub fn new(settle: u64, max_wait: u64) -> Self {
        Self {
            settle,
            max_wait: max_wait.max(settle),
            last_call: 0,
            last_fire: 0,
            armed: false,
            called: false,
            pending: None,
        }
    }

    /// Returns the settle interval in ticks.
    #[must_use]
    pub fn settle(&self) -> u64 {
        self.settle
    }

    /// Returns the max-wait interval in ticks.
    #[must_use]
    pub fn max_wait(&self) -> u64 {
        self.max_wait
    }

    /// Feeds a value in at time `now`, firing it if an edge is due.
    ///
    /// Returns `Some(value)` for a leading-edge fire (first call of a burst)
    /// or when the max-wait deadline has been reached by this call. Returns
    /// `None` when the value was stored as the pending trailing value,
    /// replacing any previously pending one.
    pub fn call(&mut self, value: T, now: u64) -> Option<T> {
        let due = self.due(now);
        self.pending = Some(value);
        self.called = true;
        self.last_call = now;
        if due {
            // Leading edge when idle; max-wait (or overdue) fire otherwise.
            self.armed = true;
            self.last_fire = now;
            return self.pending.take();
        }
        self.armed = true;
        None
    }

    /// Pumps deadlines at time `now`, firing the pending value if one is due.
    ///
    /// Returns `Some(value)` for a trailing-edge fire. Past the deadline
    /// with nothing pending, the window closes silently and `None` is
    /// returned; the next call will fire a fresh leading edge.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if !self.armed || !self.due(now) {
            return None;
        }
        self.armed = false;
        let fired = self.pending.take();
        if fired.is_some() {
            self.last_fire = now;
        }
        fired
    }

    /// Fires the pending value immediately, regardless of deadlines.
    ///
    /// Closes the window. Returns `None` if no window is open or nothing is
    /// pending.
    pub fn flush(&mut self, now: u64) -> Option<T> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        let fired = self.pending.take();
        if fired.is_some() {
            self.last_fire = now;
        }
        fired
    }

    /// Discards the pending value and resets the machine to its initial state.
    ///
    /// Unlike [`Debounce::flush`], nothing fires. The next call fires a
    /// leading edge as if the machine were freshly created.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.called = false;
        self.pending = None;
        self.last_call = 0;
        self.last_fire = 0;
    }

    /// Returns `true` while a window is open.
    ///
    /// Note that an open window does not imply a value is pending: after a
    /// leading fire with no further calls, the window stays open until its
    /// deadline passes, then closes silently.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.armed
    }

    /// Returns `true` if a trailing value is waiting to fire.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the next deadline the host should poll at, if a window is open.
    ///
    /// Hosts that schedule wakeups (instead of polling every frame) can use
    /// this to sleep until the earliest of the trailing and max-wait edges.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.armed.then(|| {
            core::cmp::min(
                self.last_call.saturating_add(self.settle),
                self.last_fire.saturating_add(self.max_wait),
            )
        })
    }

    /// An edge is due when the machine has never fired, the settle interval
    /// has elapsed since the last call, or the max-wait interval has elapsed
    /// since the last fire.
    fn due(&self, now: u64) -> bool {
        !self.called
            || now.saturating_sub(self.last_call) >= self.settle
            || now.saturating_sub(self.last_fire) >= self.max_wait
    }
}
