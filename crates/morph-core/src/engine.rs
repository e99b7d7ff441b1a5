//! The owned context tying the pipeline together.
//!
//! One `frame` call runs the fixed per-frame order: classify both hands,
//! feed the right wrist to its swing detector, arbitrate, regenerate
//! targets if a transition asked for it, then animate. All mutation happens
//! on the caller's thread.

use crate::animator::ParticleAnimator;
use crate::controller::{ActiveGesture, FrameInput, InteractionController};
use crate::error::Result;
use crate::gesture::{classify, StaticGesture};
use crate::hand::{find_side, Hand, Handedness};
use crate::overlay::OverlayInfo;
use crate::photo::{PhotoSet, PointCloud};
use crate::settings::{clamp_point_size, Settings};
use crate::shapes::{MorphRequest, MorphTargetGenerator};
use crate::state::{
    DisplayMode, EngineParams, InteractionState, ParticleBuffers, RotationState, ShapeSelector,
};
use crate::swing::{SwingDetector, SwingEvent};
use glam::Vec3;
use std::time::Duration;

/// What the render sink needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    /// `3 * count` floats, xyz per particle.
    pub positions: &'a [f32],
    /// `3 * count` floats, rgb per particle.
    pub colors: &'a [f32],
    /// x = tilt, y = spin, z = roll, in radians.
    pub rotation: Vec3,
    pub point_size: f32,
}

impl RenderFrame<'_> {
    /// Positions as raw bytes for a vertex buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.colors)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub left: StaticGesture,
    pub right: StaticGesture,
    pub swing: SwingEvent,
    pub active: ActiveGesture,
    pub regenerated: bool,
}

pub struct MorphEngine {
    controller: InteractionController,
    generator: MorphTargetGenerator,
    animator: ParticleAnimator,
    buffers: ParticleBuffers,
    rotation: RotationState,
    photos: PhotoSet,
    firework: Option<PointCloud>,
    right_swing: SwingDetector,
    /// Timestamp of the latest frame.
    now: Duration,
    point_size: f32,
    last_active: ActiveGesture,
}

impl MorphEngine {
    pub fn new(params: EngineParams) -> Result<Self> {
        let buffers = ParticleBuffers::new(params.particle_count)?;
        // Separate streams so target sampling does not shift tilt choices.
        let animator_seed = params.seed ^ 0x9E37_79B9_7F4A_7C15;
        let mut engine = Self {
            controller: InteractionController::new(params.settings.shape, params.settings.color),
            generator: MorphTargetGenerator::new(params.seed, params.photo_fill),
            animator: ParticleAnimator::new(params.smoothing, animator_seed),
            buffers,
            rotation: RotationState::default(),
            photos: PhotoSet::new(),
            firework: None,
            right_swing: SwingDetector::default(),
            now: Duration::ZERO,
            point_size: clamp_point_size(params.settings.point_size),
            last_active: ActiveGesture::None,
        };
        engine.regenerate();
        Ok(engine)
    }

    pub fn frame(&mut self, hands: &[Hand], now: Duration) -> FrameReport {
        self.now = now;
        let left = find_side(hands, Handedness::Left)
            .map(classify)
            .unwrap_or_default();
        let right_hand = find_side(hands, Handedness::Right);
        let right = right_hand.map(classify).unwrap_or_default();
        let swing = match right_hand {
            Some(hand) => self.right_swing.update(hand.wrist().x, now),
            None => SwingEvent::None,
        };

        let input = FrameInput {
            left,
            right,
            swing,
            now,
        };
        let outcome = self.controller.update(&input, self.photos.len());
        if outcome.regenerate {
            self.regenerate();
        }

        let state = self.controller.state();
        let (mode, paused) = (state.mode, state.rotation_paused);
        self.animator
            .tick(&mut self.buffers, &mut self.rotation, mode, paused);
        self.last_active = outcome.active;

        FrameReport {
            left,
            right,
            swing,
            active: outcome.active,
            regenerated: outcome.regenerate,
        }
    }

    fn regenerate(&mut self) {
        let state = self.controller.state();
        let photo = state
            .selected_index(self.photos.len())
            .and_then(|i| self.photos.get_wrapped(i));
        let request = MorphRequest {
            mode: state.mode,
            shape: state.shape,
            color: state.color,
            photo,
            firework: self.firework.as_ref(),
        };
        let (positions, colors) = self.buffers.targets_mut();
        self.generator.generate(&request, positions, colors);
    }

    /// Swap in a freshly loaded photo batch.
    pub fn replace_photos(&mut self, photos: PhotoSet) {
        log::info!("[photos] {} loaded", photos.len());
        self.photos = photos;
        if self.controller.photos_replaced(self.photos.len(), self.now) {
            self.regenerate();
        }
    }

    pub fn set_firework_cloud(&mut self, cloud: PointCloud) {
        log::info!("[photos] firework reference ready ({} points)", cloud.len());
        self.firework = Some(cloud);
        let state = self.controller.state();
        if state.mode == DisplayMode::Shape && state.shape == ShapeSelector::Firework {
            self.regenerate();
        }
    }

    pub fn set_shape(&mut self, shape: ShapeSelector) {
        if self.controller.set_shape(shape) {
            self.regenerate();
        }
    }

    pub fn set_color(&mut self, color: Vec3) {
        if self.controller.set_color(color) {
            self.regenerate();
        }
    }

    pub fn set_point_size(&mut self, size: f32) {
        self.point_size = clamp_point_size(size);
    }

    pub fn settings(&self) -> Settings {
        let state = self.controller.state();
        Settings {
            shape: state.shape,
            color: state.color,
            point_size: self.point_size,
        }
    }

    pub fn render_frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            positions: &self.buffers.current_position,
            colors: &self.buffers.current_color,
            rotation: self.rotation.euler,
            point_size: self.point_size,
        }
    }

    pub fn overlay(&self, now: Duration) -> OverlayInfo {
        let count = self.photos.len();
        OverlayInfo {
            mode: self.controller.state().mode,
            selected_photo: self.controller.state().selected_index(count),
            photo_count: count,
            active_gesture: self.last_active,
            cycle_fraction: self.controller.cycle_fraction(now, count),
        }
    }

    pub fn state(&self) -> &InteractionState {
        self.controller.state()
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }

    pub fn photos(&self) -> &PhotoSet {
        &self.photos
    }

    pub fn generations(&self) -> u64 {
        self.generator.generations()
    }
}
