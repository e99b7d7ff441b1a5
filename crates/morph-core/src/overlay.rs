//! Informational per-frame data for the on-screen overlay.

use crate::controller::ActiveGesture;
use crate::state::DisplayMode;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayInfo {
    pub mode: DisplayMode,
    pub selected_photo: Option<usize>,
    pub photo_count: usize,
    pub active_gesture: ActiveGesture,
    /// Progress toward the next autonomous photo change, when autoplay runs.
    pub cycle_fraction: Option<f32>,
}

impl fmt::Display for OverlayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode)?;
        if let Some(i) = self.selected_photo {
            write!(f, " {}/{}", i + 1, self.photo_count)?;
        } else {
            write!(f, " ({} photos)", self.photo_count)?;
        }
        write!(f, " | {}", self.active_gesture)?;
        if let Some(frac) = self.cycle_fraction {
            write!(f, " | next in {:.0}%", (1.0 - frac) * 100.0)?;
        }
        Ok(())
    }
}
