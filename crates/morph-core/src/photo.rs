//! Point-sampled photographs and reference point clouds.

use crate::constants::{ALPHA_THRESHOLD, SAMPLE_STEP};
use crate::error::{MorphError, Result};

/// One opaque sample: position in roughly [-0.5, 0.5] (y up) and color in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhotoPoint {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Ordered opaque samples of one image. Also used for the Firework reference set.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub points: Vec<PhotoPoint>,
}

pub type Photo = PointCloud;

impl PointCloud {
    pub fn new(points: Vec<PhotoPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered photos. Grows by `push` during a loading session and is replaced
/// wholesale once a batch completes.
#[derive(Clone, Debug, Default)]
pub struct PhotoSet {
    photos: Vec<Photo>,
}

impl PhotoSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Lookup with the index reduced modulo the current length.
    pub fn get_wrapped(&self, index: usize) -> Option<&Photo> {
        if self.photos.is_empty() {
            None
        } else {
            self.photos.get(index % self.photos.len())
        }
    }
}

impl FromIterator<Photo> for PhotoSet {
    fn from_iter<I: IntoIterator<Item = Photo>>(iter: I) -> Self {
        Self {
            photos: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SampleOptions {
    /// Pixel stride in both directions.
    pub step: usize,
    /// Pixels with alpha strictly above this are kept.
    pub alpha_threshold: u8,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            step: SAMPLE_STEP,
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}

/// Threshold an RGBA8 image into a point cloud.
///
/// Coordinates are normalized by the larger side so aspect ratio is kept,
/// centred on the origin, with y pointing up.
pub fn sample_rgba(
    width: usize,
    height: usize,
    rgba: &[u8],
    options: &SampleOptions,
) -> Result<PointCloud> {
    if width == 0 || height == 0 {
        return Err(MorphError::EmptyImage);
    }
    if rgba.len() != width * height * 4 {
        return Err(MorphError::PixelBufferSize {
            width,
            height,
            len: rgba.len(),
        });
    }
    let step = options.step.max(1);
    let span = width.max(height) as f32;
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);

    let mut points = Vec::new();
    for py in (0..height).step_by(step) {
        for px in (0..width).step_by(step) {
            let i = (py * width + px) * 4;
            let px_rgba = &rgba[i..i + 4];
            if px_rgba[3] <= options.alpha_threshold {
                continue;
            }
            points.push(PhotoPoint {
                x: (px as f32 - cx) / span,
                y: (cy - py as f32) / span,
                r: px_rgba[0] as f32 / 255.0,
                g: px_rgba[1] as f32 / 255.0,
                b: px_rgba[2] as f32 / 255.0,
            });
        }
    }
    Ok(PointCloud::new(points))
}
