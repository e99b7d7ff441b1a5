//! Per-frame particle integration and rotation kinematics.

use crate::constants::{
    NEAR_EDGE_THRESHOLD, PHOTO_SPIN_BASE, PHOTO_SPIN_MIN_FACTOR, PHOTO_SPIN_SIDE_GAIN,
    ROLL_AMPLITUDE, ROLL_FREQUENCY, SHAPE_SPIN_SPEED, TILT_AMPLITUDE, TILT_FREQUENCY,
};
use crate::state::{DisplayMode, ParticleBuffers, RotationState};
use glam::Vec3;
use rand::prelude::*;

/// `current += (target - current) * alpha` for every scalar.
///
/// A convex combination for alpha in [0, 1], so it never overshoots.
#[inline]
pub fn smooth_toward(current: &mut [f32], target: &[f32], alpha: f32) {
    for (c, t) in current.iter_mut().zip(target) {
        *c += (*t - *c) * alpha;
    }
}

/// How edge-on the view is: 0 facing the camera, 1 edge-on.
#[inline]
pub fn side_factor(angle: f32) -> f32 {
    angle.sin().abs()
}

pub struct ParticleAnimator {
    alpha: f32,
    rng: StdRng,
}

impl ParticleAnimator {
    pub fn new(alpha: f32, seed: u64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One rendered frame. Smoothing always runs; rotation only when not paused.
    pub fn tick(
        &mut self,
        buffers: &mut ParticleBuffers,
        rotation: &mut RotationState,
        mode: DisplayMode,
        rotation_paused: bool,
    ) {
        smooth_toward(
            &mut buffers.current_position,
            &buffers.target_position,
            self.alpha,
        );
        smooth_toward(&mut buffers.current_color, &buffers.target_color, self.alpha);

        if !rotation_paused {
            self.rotate(rotation, mode);
        }
    }

    fn rotate(&mut self, rotation: &mut RotationState, mode: DisplayMode) {
        match mode {
            DisplayMode::ViewPhoto => {
                let side = side_factor(rotation.angle);
                if side >= NEAR_EDGE_THRESHOLD && rotation.last_side_factor < NEAR_EDGE_THRESHOLD {
                    rotation.tilt_direction = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                }
                rotation.last_side_factor = side;

                let speed =
                    PHOTO_SPIN_BASE * (PHOTO_SPIN_MIN_FACTOR + PHOTO_SPIN_SIDE_GAIN * side);
                rotation.angle += speed;

                let a = rotation.angle;
                rotation.euler = Vec3::new(
                    TILT_AMPLITUDE * rotation.tilt_direction * (TILT_FREQUENCY * a).sin(),
                    a,
                    ROLL_AMPLITUDE * (ROLL_FREQUENCY * a).sin(),
                );
            }
            DisplayMode::Shape => {
                rotation.angle += SHAPE_SPIN_SPEED;
                rotation.euler = Vec3::new(0.0, rotation.angle, 0.0);
            }
        }
    }
}
