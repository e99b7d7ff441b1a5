//! Externally settable configuration values.

use crate::constants::{DEFAULT_POINT_SIZE, DEFAULT_SHAPE_COLOR, MAX_POINT_SIZE, MIN_POINT_SIZE};
use crate::error::{MorphError, Result};
use crate::state::ShapeSelector;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub shape: ShapeSelector,
    pub color: Vec3,
    /// Rendering only; never affects particle data.
    pub point_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape: ShapeSelector::Sphere,
            color: Vec3::from(DEFAULT_SHAPE_COLOR),
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

#[inline]
pub fn clamp_point_size(size: f32) -> f32 {
    size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
}

/// Parse `#rrggbb` (leading `#` optional) into a [0, 1] RGB vector.
pub fn parse_hex_color(text: &str) -> Result<Vec3> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MorphError::InvalidColor(text.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| MorphError::InvalidColor(text.to_string()))
    };
    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}
