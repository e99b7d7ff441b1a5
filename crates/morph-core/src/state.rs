//! Mutable state shared between the controller, the generator and the animator.
//!
//! None of these types touch platform APIs. Buffers are allocated once and
//! reused for the lifetime of the engine.

use crate::constants::{
    AUTO_CYCLE_INTERVAL, MANUAL_CHANGE_COOLDOWN, POINTING_HOLD, SMOOTHING_ALPHA,
};
use crate::error::{MorphError, Result};
use crate::settings::Settings;
use crate::timer::{Cooldown, HoldTimer, IntervalTimer};
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Shape,
    ViewPhoto,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayMode::Shape => "shape",
            DisplayMode::ViewPhoto => "photos",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShapeSelector {
    #[default]
    Sphere,
    Heart,
    Firework,
}

impl ShapeSelector {
    pub const ALL: [ShapeSelector; 3] = [Self::Sphere, Self::Heart, Self::Firework];

    pub fn next(self) -> Self {
        match self {
            Self::Sphere => Self::Heart,
            Self::Heart => Self::Firework,
            Self::Firework => Self::Sphere,
        }
    }
}

impl fmt::Display for ShapeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeSelector::Sphere => "sphere",
            ShapeSelector::Heart => "heart",
            ShapeSelector::Firework => "firework",
        })
    }
}

impl FromStr for ShapeSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sphere" => Ok(Self::Sphere),
            "heart" => Ok(Self::Heart),
            "firework" => Ok(Self::Firework),
            other => Err(format!("unknown shape {other:?}")),
        }
    }
}

/// What unused particle slots do when a photo has fewer points than particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PhotoFill {
    /// Slots past the photo's point count collapse to the origin in black.
    #[default]
    Collapse,
    /// Photo points are reused cyclically to fill every slot.
    Wrap,
}

/// Orientation owned by the animator. `angle` is the spin about the
/// vertical axis; the tilt direction is re-rolled at each near-edge crossing.
#[derive(Clone, Debug)]
pub struct RotationState {
    pub angle: f32,
    pub last_side_factor: f32,
    pub tilt_direction: f32,
    /// x = tilt, y = spin, z = roll.
    pub euler: Vec3,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            last_side_factor: 0.0,
            tilt_direction: 1.0,
            euler: Vec3::ZERO,
        }
    }
}

/// Interaction state owned by the controller.
///
/// `selected_photo` is `None` when nothing is selected (always the case in
/// shape mode); otherwise it is reduced modulo the photo count before use.
#[derive(Clone, Debug)]
pub struct InteractionState {
    pub mode: DisplayMode,
    pub shape: ShapeSelector,
    pub color: Vec3,
    pub selected_photo: Option<usize>,
    pub auto_cycling: bool,
    pub rotation_paused: bool,
    pub cycle_timer: IntervalTimer,
    pub manual_change: Cooldown,
    pub pointing_hold: HoldTimer,
}

impl InteractionState {
    pub fn new(shape: ShapeSelector, color: Vec3) -> Self {
        Self {
            mode: DisplayMode::Shape,
            shape,
            color,
            selected_photo: None,
            auto_cycling: false,
            rotation_paused: false,
            cycle_timer: IntervalTimer::new(AUTO_CYCLE_INTERVAL),
            manual_change: Cooldown::new(MANUAL_CHANGE_COOLDOWN),
            pointing_hold: HoldTimer::new(POINTING_HOLD),
        }
    }

    /// Selected photo reduced modulo `photo_count`, or `None` outside photo mode.
    pub fn selected_index(&self, photo_count: usize) -> Option<usize> {
        match (self.mode, self.selected_photo) {
            (DisplayMode::ViewPhoto, Some(i)) if photo_count > 0 => Some(i % photo_count),
            _ => None,
        }
    }
}

/// Live and target particle buffers, `3 * count` floats each.
#[derive(Clone, Debug)]
pub struct ParticleBuffers {
    count: usize,
    pub current_position: Vec<f32>,
    pub target_position: Vec<f32>,
    pub current_color: Vec<f32>,
    pub target_color: Vec<f32>,
}

impl ParticleBuffers {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(MorphError::InvalidParticleCount);
        }
        let len = count * 3;
        Ok(Self {
            count,
            current_position: vec![0.0; len],
            target_position: vec![0.0; len],
            current_color: vec![0.0; len],
            target_color: vec![0.0; len],
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mutable view of the targets, handed to the generator.
    pub fn targets_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.target_position, &mut self.target_color)
    }
}

/// Runtime engine parameters.
#[derive(Clone, Debug)]
pub struct EngineParams {
    pub particle_count: usize,
    pub seed: u64,
    pub smoothing: f32,
    pub photo_fill: PhotoFill,
    pub settings: Settings,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            particle_count: crate::constants::DEFAULT_PARTICLE_COUNT,
            seed: 42,
            smoothing: SMOOTHING_ALPHA,
            photo_fill: PhotoFill::default(),
            settings: Settings::default(),
        }
    }
}
