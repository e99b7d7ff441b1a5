//! Detector-facing hand types.
//!
//! A hand is the fixed 21-point skeletal model produced by the external
//! landmark detector, in normalized camera-frame coordinates. The core only
//! reads these; it never validates or repairs them.

use crate::constants::LANDMARK_COUNT;
use glam::Vec3;
use smallvec::SmallVec;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// (tip, proximal joint) pairs for index, middle, ring and pinky.
pub const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
    Unknown,
}

#[derive(Clone, Debug)]
pub struct Hand {
    pub landmarks: [Vec3; LANDMARK_COUNT],
    pub side: Handedness,
}

/// Hands reported by the detector for one frame (zero, one or two).
pub type Hands = SmallVec<[Hand; 2]>;

impl Hand {
    pub fn new(landmarks: [Vec3; LANDMARK_COUNT], side: Handedness) -> Self {
        Self { landmarks, side }
    }

    #[inline]
    pub fn wrist(&self) -> Vec3 {
        self.landmarks[WRIST]
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.landmarks[index]
    }
}

/// First hand carrying the given label. Unlabelled hands never match.
pub fn find_side(hands: &[Hand], side: Handedness) -> Option<&Hand> {
    if side == Handedness::Unknown {
        return None;
    }
    hands.iter().find(|h| h.side == side)
}
