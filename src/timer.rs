//! Cancelable one-shot timer used to model the page-turn animation delay.
//!
//! A [`CommitTimer`] holds at most one armed deadline. Each arm hands out a
//! fresh [`TimerHandle`]; cancelling or re-arming bumps the generation so a
//! handle from an earlier arm can never fire.

use std::time::{Duration, Instant};

/// Identifies one arm of a [`CommitTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
}

impl TimerHandle {
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: TimerHandle,
    started: Instant,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct CommitTimer {
    armed: Option<Armed>,
    generation: u64,
}

impl CommitTimer {
    pub const fn new() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }

    /// Arms the timer to fire `delay` after `now`, replacing any earlier arm.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        self.generation = self.generation.wrapping_add(1);
        let handle = TimerHandle {
            generation: self.generation,
        };

        self.armed = Some(Armed {
            handle,
            started: now,
            deadline: now.checked_add(delay).unwrap_or(now),
        });

        handle
    }

    /// Disarms the timer. Returns the handle that was pending, if any.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        let armed = self.armed.take()?;
        self.generation = self.generation.wrapping_add(1);
        Some(armed.handle)
    }

    /// Fires the timer if its deadline has passed, consuming the arm.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<TimerHandle> {
        let armed = self.armed?;
        if now < armed.deadline {
            return None;
        }

        self.armed = None;
        Some(armed.handle)
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|armed| armed.deadline.saturating_duration_since(now))
    }

    /// Linear fraction of the armed interval that has elapsed, in `[0, 1]`.
    pub fn elapsed_fraction(&self, now: Instant) -> Option<f32> {
        let armed = self.armed?;
        let total = armed.deadline.saturating_duration_since(armed.started);
        if total.is_zero() {
            return Some(1.0);
        }

        let elapsed = now.saturating_duration_since(armed.started);
        Some((elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0))
    }
}
