//! Static per-frame gesture classification.
//!
//! Each finger is considered extended when its tip lies farther from the
//! wrist than its proximal joint, measured in the image plane. There is no
//! smoothing here; temporal stability is the controller's job.

use crate::constants::POINTING_THRESHOLD;
use crate::hand::{Hand, FINGER_JOINTS, INDEX_PIP, INDEX_TIP};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StaticGesture {
    #[default]
    None,
    OpenPalm,
    Fist,
    Pointing,
    IndexNext,
    IndexPrevious,
}

impl fmt::Display for StaticGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StaticGesture::None => "none",
            StaticGesture::OpenPalm => "open palm",
            StaticGesture::Fist => "fist",
            StaticGesture::Pointing => "pointing",
            StaticGesture::IndexNext => "index next",
            StaticGesture::IndexPrevious => "index previous",
        };
        f.write_str(name)
    }
}

/// Extension flags for (index, middle, ring, pinky).
pub fn finger_extension(hand: &Hand) -> [bool; 4] {
    let wrist = hand.wrist().truncate();
    FINGER_JOINTS.map(|(tip, pip)| {
        let d_tip = hand.point(tip).truncate().distance(wrist);
        let d_pip = hand.point(pip).truncate().distance(wrist);
        d_tip > d_pip
    })
}

#[inline]
pub fn classify(hand: &Hand) -> StaticGesture {
    classify_with(hand, POINTING_THRESHOLD)
}

/// Classify with an explicit pointing threshold. `|dx| <= threshold` is
/// always `Pointing`; the boundary is inclusive.
pub fn classify_with(hand: &Hand, pointing_threshold: f32) -> StaticGesture {
    match finger_extension(hand) {
        [true, true, true, true] => StaticGesture::OpenPalm,
        [false, false, false, false] => StaticGesture::Fist,
        [true, false, false, false] => {
            // Mirrored feed: a tip left of its joint reads as "previous".
            let dx = hand.point(INDEX_TIP).x - hand.point(INDEX_PIP).x;
            if dx.abs() <= pointing_threshold {
                StaticGesture::Pointing
            } else if dx < 0.0 {
                StaticGesture::IndexPrevious
            } else {
                StaticGesture::IndexNext
            }
        }
        _ => StaticGesture::None,
    }
}
