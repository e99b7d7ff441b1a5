//! Morph target generation.
//!
//! Rewrites every particle's target position and color for the current
//! mode. This is expensive for large fields and must only run on discrete
//! state transitions, never per frame.

use crate::constants::{
    FIREWORK_DEPTH_JITTER, FIREWORK_EXTENT, HEART_DEPTH_JITTER, HEART_JITTER_MAX,
    HEART_JITTER_MIN, HEART_SCALE, PHOTO_DEPTH_JITTER, PHOTO_EXTENT, SPHERE_MAX_RADIUS,
};
use crate::photo::{Photo, PointCloud};
use crate::state::{DisplayMode, PhotoFill, ShapeSelector};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Everything a target generation depends on.
#[derive(Clone, Copy, Debug)]
pub struct MorphRequest<'a> {
    pub mode: DisplayMode,
    pub shape: ShapeSelector,
    pub color: Vec3,
    /// The selected photo, already resolved modulo the photo count.
    pub photo: Option<&'a Photo>,
    /// Firework reference cloud, absent until loaded.
    pub firework: Option<&'a PointCloud>,
}

pub struct MorphTargetGenerator {
    rng: StdRng,
    fill: PhotoFill,
    generations: u64,
}

impl MorphTargetGenerator {
    pub fn new(seed: u64, fill: PhotoFill) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fill,
            generations: 0,
        }
    }

    /// Number of completed `generate` calls.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn generate(&mut self, request: &MorphRequest<'_>, positions: &mut [f32], colors: &mut [f32]) {
        debug_assert_eq!(positions.len(), colors.len());
        self.generations += 1;

        if let (DisplayMode::ViewPhoto, Some(photo)) = (request.mode, request.photo) {
            self.fill_photo(photo, positions, colors);
            return;
        }

        let rng = &mut self.rng;
        match request.shape {
            ShapeSelector::Sphere => fill_shape(positions, || sphere_point(rng)),
            ShapeSelector::Heart => fill_shape(positions, || heart_point(rng)),
            ShapeSelector::Firework => match request.firework.filter(|c| !c.is_empty()) {
                Some(cloud) => fill_shape(positions, || firework_point(rng, cloud)),
                // reference set not loaded yet
                None => fill_shape(positions, || sphere_point(rng)),
            },
        }
        fill_color(colors, request.color);
    }

    fn fill_photo(&mut self, photo: &Photo, positions: &mut [f32], colors: &mut [f32]) {
        let m = photo.len();
        for (i, (pos, col)) in positions
            .chunks_exact_mut(3)
            .zip(colors.chunks_exact_mut(3))
            .enumerate()
        {
            let source = match self.fill {
                PhotoFill::Collapse => photo.points.get(i),
                PhotoFill::Wrap if m > 0 => photo.points.get(i % m),
                PhotoFill::Wrap => None,
            };
            match source {
                Some(p) => {
                    let z = self.rng.gen_range(-PHOTO_DEPTH_JITTER..=PHOTO_DEPTH_JITTER);
                    pos.copy_from_slice(&[p.x * PHOTO_EXTENT, p.y * PHOTO_EXTENT, z]);
                    col.copy_from_slice(&[p.r, p.g, p.b]);
                }
                None => {
                    pos.fill(0.0);
                    col.fill(0.0);
                }
            }
        }
    }
}

fn fill_shape(positions: &mut [f32], mut point: impl FnMut() -> Vec3) {
    for pos in positions.chunks_exact_mut(3) {
        pos.copy_from_slice(&point().to_array());
    }
}

fn fill_color(colors: &mut [f32], color: Vec3) {
    for col in colors.chunks_exact_mut(3) {
        col.copy_from_slice(&color.to_array());
    }
}

pub fn sphere_point(rng: &mut impl Rng) -> Vec3 {
    let r = rng.gen_range(0.0..SPHERE_MAX_RADIUS);
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(-1.0f32..=1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

pub fn heart_point(rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen_range(0.0..TAU);
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let r = rng.gen_range(HEART_JITTER_MIN..HEART_JITTER_MAX) * HEART_SCALE;
    let z = rng.gen_range(-HEART_DEPTH_JITTER..=HEART_DEPTH_JITTER);
    Vec3::new(x * r, y * r, z)
}

pub fn firework_point(rng: &mut impl Rng, cloud: &PointCloud) -> Vec3 {
    let z = rng.gen_range(-FIREWORK_DEPTH_JITTER..=FIREWORK_DEPTH_JITTER);
    match cloud.points.choose(rng) {
        Some(p) => Vec3::new(p.x * FIREWORK_EXTENT, p.y * FIREWORK_EXTENT, z),
        None => Vec3::new(0.0, 0.0, z),
    }
}
