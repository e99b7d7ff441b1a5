//! Named timers for the interaction layer.
//!
//! Timestamps are monotonic offsets from an arbitrary origin (usually the
//! start of the session). Cooldowns and intervals fire when the elapsed time
//! is strictly greater than their window; holds complete when the elapsed
//! time reaches the hold duration.

use std::time::Duration;

/// Gate that opens once `period` has passed since the last trigger.
#[derive(Clone, Debug)]
pub struct Cooldown {
    period: Duration,
    last: Option<Duration>,
}

impl Cooldown {
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    pub fn ready(&self, now: Duration) -> bool {
        match self.last {
            Some(last) => now.saturating_sub(last) > self.period,
            None => true,
        }
    }

    pub fn trigger(&mut self, now: Duration) {
        self.last = Some(now);
    }

    pub fn last(&self) -> Option<Duration> {
        self.last
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoldProgress {
    /// Held for less than the hold duration; `fraction` is in [0, 1).
    Holding { fraction: f32 },
    Complete,
}

/// Continuous-hold detector. The first `update` starts the clock.
#[derive(Clone, Debug)]
pub struct HoldTimer {
    hold: Duration,
    started: Option<Duration>,
}

impl HoldTimer {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            started: None,
        }
    }

    pub fn update(&mut self, now: Duration) -> HoldProgress {
        let started = *self.started.get_or_insert(now);
        let held = now.saturating_sub(started);
        if held >= self.hold {
            HoldProgress::Complete
        } else {
            HoldProgress::Holding {
                fraction: held.as_secs_f32() / self.hold.as_secs_f32().max(f32::EPSILON),
            }
        }
    }

    pub fn reset(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

/// Periodic trigger used for autonomous cycling.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    interval: Duration,
    last: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Duration::ZERO,
        }
    }

    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }

    /// Returns true (and restarts) once more than `interval` has elapsed.
    pub fn update(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last) > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Progress toward the next firing, clamped to [0, 1].
    pub fn fraction(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.last).as_secs_f32();
        (elapsed / self.interval.as_secs_f32().max(f32::EPSILON)).clamp(0.0, 1.0)
    }
}
