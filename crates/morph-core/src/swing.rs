//! Lateral swing detection from wrist motion.
//!
//! A velocity-gated debouncer: the wrist position is tracked every frame,
//! but an event only fires for a large enough frame-to-frame jump, and then
//! not again until the debounce window has passed.

use crate::constants::{SWING_DEBOUNCE, SWING_MIN_DISTANCE};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwingEvent {
    #[default]
    None,
    SwingLeft,
    SwingRight,
}

impl fmt::Display for SwingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SwingEvent::None => "none",
            SwingEvent::SwingLeft => "swing left",
            SwingEvent::SwingRight => "swing right",
        })
    }
}

#[derive(Clone, Debug)]
pub struct SwingDetector {
    debounce: Duration,
    min_distance: f32,
    last_x: Option<f32>,
    last_event: Duration,
}

impl Default for SwingDetector {
    fn default() -> Self {
        Self::new(SWING_DEBOUNCE, SWING_MIN_DISTANCE)
    }
}

impl SwingDetector {
    pub fn new(debounce: Duration, min_distance: f32) -> Self {
        Self {
            debounce,
            min_distance,
            last_x: None,
            last_event: Duration::ZERO,
        }
    }

    pub fn update(&mut self, wrist_x: f32, now: Duration) -> SwingEvent {
        let Some(last_x) = self.last_x.replace(wrist_x) else {
            self.last_event = now;
            return SwingEvent::None;
        };
        let dx = wrist_x - last_x;
        let dt = now.saturating_sub(self.last_event);
        if dt > self.debounce && dx.abs() > self.min_distance {
            self.last_event = now;
            if dx < 0.0 {
                SwingEvent::SwingLeft
            } else {
                SwingEvent::SwingRight
            }
        } else {
            SwingEvent::None
        }
    }

    pub fn last_x(&self) -> Option<f32> {
        self.last_x
    }
}
