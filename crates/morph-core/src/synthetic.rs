//! Synthetic hands for simulation and tests.
//!
//! Builds anatomically ordered 21-point hands, fingers pointing up the image
//! (decreasing y), that classify as the requested pose.

use crate::constants::LANDMARK_COUNT;
use crate::gesture::StaticGesture;
use crate::hand::{
    Hand, Handedness, FINGER_JOINTS, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};
use glam::Vec3;

const WRIST_Y: f32 = 0.8;
const MCP_Y: f32 = 0.6;
const PIP_Y: f32 = 0.5;
const DIP_Y: f32 = 0.42;
const EXTENDED_TIP_Y: f32 = 0.35;
const CURLED_TIP_Y: f32 = 0.62;
const FINGER_SPREAD: [f32; 4] = [-0.06, -0.02, 0.02, 0.06];
const INDEX_LEAN: f32 = 0.1; // tip offset for directional points

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    OpenPalm,
    Fist,
    Pointing,
    IndexNext,
    IndexPrevious,
    /// Index and middle up; classifies as no gesture.
    Victory,
}

impl Pose {
    /// The gesture this pose is built to classify as.
    pub fn expected(self) -> StaticGesture {
        match self {
            Pose::OpenPalm => StaticGesture::OpenPalm,
            Pose::Fist => StaticGesture::Fist,
            Pose::Pointing => StaticGesture::Pointing,
            Pose::IndexNext => StaticGesture::IndexNext,
            Pose::IndexPrevious => StaticGesture::IndexPrevious,
            Pose::Victory => StaticGesture::None,
        }
    }

    fn extended(self) -> [bool; 4] {
        match self {
            Pose::OpenPalm => [true; 4],
            Pose::Fist => [false; 4],
            Pose::Pointing | Pose::IndexNext | Pose::IndexPrevious => [true, false, false, false],
            Pose::Victory => [true, true, false, false],
        }
    }

    fn index_lean(self) -> f32 {
        match self {
            Pose::IndexNext => INDEX_LEAN,
            Pose::IndexPrevious => -INDEX_LEAN,
            _ => 0.0,
        }
    }
}

/// A hand in `pose` with its wrist at horizontal position `wrist_x`.
pub fn hand(pose: Pose, side: Handedness, wrist_x: f32) -> Hand {
    let mut landmarks = [Vec3::ZERO; LANDMARK_COUNT];
    landmarks[WRIST] = Vec3::new(wrist_x, WRIST_Y, 0.0);

    let thumb_x = wrist_x - 0.08;
    landmarks[THUMB_CMC] = Vec3::new(thumb_x, 0.75, 0.0);
    landmarks[THUMB_MCP] = Vec3::new(thumb_x - 0.02, 0.7, 0.0);
    landmarks[THUMB_IP] = Vec3::new(thumb_x - 0.03, 0.66, 0.0);
    landmarks[THUMB_TIP] = Vec3::new(thumb_x - 0.04, 0.62, 0.0);

    for (finger, &(tip, pip)) in FINGER_JOINTS.iter().enumerate() {
        let x = wrist_x + FINGER_SPREAD[finger];
        let extended = pose.extended()[finger];
        let lean = if finger == 0 { pose.index_lean() } else { 0.0 };
        let (dip_y, tip_y) = if extended {
            (DIP_Y, EXTENDED_TIP_Y)
        } else {
            (PIP_Y + 0.04, CURLED_TIP_Y)
        };
        // MCP, PIP, DIP, TIP are consecutive indices.
        landmarks[pip - 1] = Vec3::new(x, MCP_Y, 0.0);
        landmarks[pip] = Vec3::new(x, PIP_Y, 0.0);
        landmarks[pip + 1] = Vec3::new(x + lean * 0.5, dip_y, 0.0);
        landmarks[tip] = Vec3::new(x + lean, tip_y, 0.0);
    }

    Hand::new(landmarks, side)
}
