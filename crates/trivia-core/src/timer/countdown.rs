//! Countdown timer implementation.
//!
//! The countdown is a tick-driven state machine. It does not own a thread or
//! an interval - the caller invokes `tick()` once per period (see
//! [`crate::runner`] for the event-loop driver).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Stopped | Expired)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = CountdownTimer::new(60);
//! timer.start();
//! // Once per second:
//! if let Some(Event::TimerExpired { .. }) = timer.tick() { /* auto-submit */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

pub const DEFAULT_TIME_LIMIT_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    /// Halted by its owner before reaching zero.
    Stopped,
    /// Reached zero. Terminal.
    Expired,
}

/// Whole-second countdown.
///
/// `remaining_secs` only ever goes down, by exactly one per running tick, and
/// never below zero. Expiry is reported once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    state: TimerState,
    initial_secs: u64,
    remaining_secs: u64,
}

impl CountdownTimer {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            state: TimerState::Idle,
            initial_secs,
            remaining_secs: initial_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn initial_secs(&self) -> u64 {
        self.initial_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.initial_secs - self.remaining_secs
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down. Only meaningful from `Idle`.
    ///
    /// A zero-length countdown expires on start, so its owner is never left
    /// waiting on a tick that cannot fire.
    pub fn start(&mut self) -> Option<Event> {
        if self.state != TimerState::Idle {
            return None;
        }
        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            return Some(Event::TimerExpired { at: Utc::now() });
        }
        self.state = TimerState::Running;
        Some(Event::TimerStarted {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Halt future ticks. Calling it again, or after expiry, does nothing.
    pub fn stop(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Running => {
                self.state = TimerState::Stopped;
                Some(Event::TimerStopped {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Stopped | TimerState::Expired => None,
        }
    }

    /// Advance one period. Returns `Some(Event::TimerExpired)` on the tick
    /// that reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            return Some(Event::TimerExpired { at: Utc::now() });
        }
        None
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}
