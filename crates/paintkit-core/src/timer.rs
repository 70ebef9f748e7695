//! Retrigger timers on the cooperative event loop.
//!
//! Nothing here blocks or spawns. Sessions ask the surface for a timer and
//! get back a [`RetriggerToken`]; the host calls
//! [`crate::surface::PaintSurface::run_timers`] and every due token is handed
//! back to the active session. A session cancels by forgetting its token: a
//! token that is no longer the session's current one is ignored when it fires.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

// Use web-time on WASM, std::time otherwise
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Identifies one scheduled retrigger. Generations increase monotonically
/// per surface, so a stale token never equals a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RetriggerToken(u64);

impl RetriggerToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    due: Instant,
    token: RetriggerToken,
}

/// Pending retriggers ordered by due time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_generation: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a new token to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> RetriggerToken {
        self.next_generation += 1;
        let token = RetriggerToken(self.next_generation);
        self.pending.push(PendingTimer {
            due: now + delay,
            token,
        });
        token
    }

    /// Remove and return every token due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<RetriggerToken> {
        let mut due: Vec<PendingTimer> = Vec::new();
        self.pending.retain(|timer| {
            if timer.due <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|timer| (timer.due, timer.token));
        due.into_iter().map(|timer| timer.token).collect()
    }

    /// When the earliest pending timer is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|timer| timer.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
