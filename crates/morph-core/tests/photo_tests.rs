// Tests for RGBA thresholding and the photo collection.

use morph_core::*;

fn image(width: usize, height: usize, pixel: impl Fn(usize, usize) -> [u8; 4]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&pixel(x, y));
        }
    }
    rgba
}

const EVERY_PIXEL: SampleOptions = SampleOptions {
    step: 1,
    alpha_threshold: ALPHA_THRESHOLD,
};

#[test]
fn rejects_empty_and_mismatched_buffers() {
    assert_eq!(
        sample_rgba(0, 4, &[], &SampleOptions::default()).unwrap_err(),
        MorphError::EmptyImage
    );
    assert_eq!(
        sample_rgba(2, 2, &[0; 15], &SampleOptions::default()).unwrap_err(),
        MorphError::PixelBufferSize {
            width: 2,
            height: 2,
            len: 15
        }
    );
}

#[test]
fn keeps_only_pixels_above_alpha_threshold() {
    let rgba = image(4, 1, |x, _| match x {
        0 => [255, 0, 0, 255],
        1 => [0, 255, 0, 129],
        2 => [0, 0, 255, 128],
        _ => [255, 255, 255, 0],
    });
    let cloud = sample_rgba(4, 1, &rgba, &EVERY_PIXEL).unwrap();
    assert_eq!(cloud.len(), 2);
    assert_eq!((cloud.points[0].r, cloud.points[0].g), (1.0, 0.0));
    assert_eq!((cloud.points[1].r, cloud.points[1].g), (0.0, 1.0));
}

#[test]
fn coordinates_are_centred_with_y_up_and_aspect_kept() {
    let rgba = image(8, 4, |_, _| [10, 20, 30, 255]);
    let cloud = sample_rgba(8, 4, &rgba, &EVERY_PIXEL).unwrap();
    assert_eq!(cloud.len(), 32);

    let top_left = cloud.points[0];
    assert_eq!(top_left.x, -0.5);
    assert_eq!(top_left.y, 0.25);

    // Row-major order: the first pixel of the second row sits lower.
    let below = cloud.points[8];
    assert_eq!(below.x, -0.5);
    assert!(below.y < top_left.y);

    for p in &cloud.points {
        assert!((-0.5..0.5).contains(&p.x));
        assert!(p.y > -0.25 && p.y <= 0.25);
    }
}

#[test]
fn stride_skips_pixels_in_both_directions() {
    let rgba = image(10, 10, |_, _| [0, 0, 0, 255]);
    let cloud = sample_rgba(10, 10, &rgba, &SampleOptions::default()).unwrap();
    assert_eq!(cloud.len(), 25);

    let coarse = SampleOptions {
        step: 3,
        ..SampleOptions::default()
    };
    assert_eq!(sample_rgba(10, 10, &rgba, &coarse).unwrap().len(), 16);
}

#[test]
fn fully_transparent_image_yields_empty_cloud() {
    let rgba = image(6, 6, |_, _| [255, 255, 255, 0]);
    let cloud = sample_rgba(6, 6, &rgba, &EVERY_PIXEL).unwrap();
    assert!(cloud.is_empty());
}

#[test]
fn photo_set_lookup_wraps() {
    let mut set = PhotoSet::new();
    assert!(set.get_wrapped(0).is_none());
    for n in 1..=3 {
        set.push(PointCloud::new(vec![PhotoPoint::default(); n]));
    }
    assert_eq!(set.len(), 3);
    assert_eq!(set.get_wrapped(1).map(PointCloud::len), Some(2));
    assert_eq!(set.get_wrapped(4).map(PointCloud::len), Some(2));
    assert_eq!(set.get_wrapped(300).map(PointCloud::len), Some(1));
}
