//! Keyboard-driven stand-in for the hand detector.
//!
//! Keys set a pose per hand; the engine sees ordinary 21-point landmark
//! sets built by `morph_core::synthetic` and classifies them like camera
//! input. Arrow keys jerk the right wrist sideways to produce swings.

use morph_core::synthetic::{hand, Pose};
use morph_core::{Handedness, Hands};

const LEFT_WRIST_X: f32 = 0.3;
const RIGHT_REST_X: f32 = 0.6;
const SWING_JERK: f32 = 0.12; // per key press, above the swing distance
const WRIST_RETURN_SPEED: f32 = 0.004; // per frame, well below the swing distance

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    Left(Option<Pose>),
    Right(Option<Pose>),
    Jerk(f32),
    CycleShape,
    CyclePalette,
    PointSize(f32),
    Quit,
}

/// Map a character key to a simulator command.
#[inline]
pub fn sim_input_for_key(key: &str) -> Option<SimInput> {
    match key {
        "z" | "Z" => Some(SimInput::Left(Some(Pose::OpenPalm))),
        "x" | "X" => Some(SimInput::Left(Some(Pose::Fist))),
        "c" | "C" => Some(SimInput::Left(None)),
        "f" | "F" => Some(SimInput::Right(Some(Pose::Fist))),
        "p" | "P" => Some(SimInput::Right(Some(Pose::Pointing))),
        "o" | "O" => Some(SimInput::Right(Some(Pose::OpenPalm))),
        "h" | "H" => Some(SimInput::Right(None)),
        "s" | "S" => Some(SimInput::CycleShape),
        "k" | "K" => Some(SimInput::CyclePalette),
        "+" | "=" => Some(SimInput::PointSize(1.25)),
        "-" | "_" => Some(SimInput::PointSize(0.8)),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct KeyboardHands {
    left: Option<Pose>,
    right: Option<Pose>,
    right_x: f32,
}

impl Default for KeyboardHands {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            right_x: RIGHT_REST_X,
        }
    }
}

impl KeyboardHands {
    /// Apply the hand-related part of `input`; other commands are ignored.
    pub fn apply(&mut self, input: SimInput) {
        match input {
            SimInput::Left(pose) => self.left = pose,
            SimInput::Right(pose) => self.right = pose,
            SimInput::Jerk(dx) => {
                // A swing needs a visible right hand.
                self.right.get_or_insert(Pose::OpenPalm);
                self.right_x = (self.right_x + dx).clamp(0.0, 1.0);
            }
            _ => {}
        }
    }

    /// The hands visible this frame. Also eases the right wrist back to rest.
    pub fn frame(&mut self) -> Hands {
        let mut hands = Hands::new();
        if let Some(pose) = self.left {
            hands.push(hand(pose, Handedness::Left, LEFT_WRIST_X));
        }
        if let Some(pose) = self.right {
            hands.push(hand(pose, Handedness::Right, self.right_x));
        }
        let back = RIGHT_REST_X - self.right_x;
        self.right_x += back.clamp(-WRIST_RETURN_SPEED, WRIST_RETURN_SPEED);
        hands
    }

    pub fn swing_jerk(left: bool) -> SimInput {
        SimInput::Jerk(if left { -SWING_JERK } else { SWING_JERK })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_core::{classify, SwingDetector, SwingEvent, SWING_MIN_DISTANCE};
    use std::time::Duration;

    #[test]
    fn keys_map_in_either_case() {
        assert_eq!(sim_input_for_key("z"), sim_input_for_key("Z"));
        assert_eq!(sim_input_for_key("h"), Some(SimInput::Right(None)));
        assert_eq!(sim_input_for_key("q"), None);
    }

    #[test]
    fn poses_reach_the_classifier() {
        let mut sim = KeyboardHands::default();
        assert!(sim.frame().is_empty());
        sim.apply(SimInput::Left(Some(Pose::OpenPalm)));
        sim.apply(SimInput::Right(Some(Pose::Fist)));
        let hands = sim.frame();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].side, Handedness::Left);
        assert_eq!(classify(&hands[0]), Pose::OpenPalm.expected());
        assert_eq!(classify(&hands[1]), Pose::Fist.expected());
    }

    #[test]
    fn jerk_produces_one_swing_and_drifts_back_quietly() {
        assert!(SWING_JERK > SWING_MIN_DISTANCE);
        let mut sim = KeyboardHands::default();
        let mut detector = SwingDetector::default();
        let wrist = |hands: &Hands| hands[0].wrist().x;

        let t0 = Duration::from_millis(1_000);
        sim.apply(SimInput::Right(Some(Pose::OpenPalm)));
        detector.update(wrist(&sim.frame()), t0);
        sim.apply(KeyboardHands::swing_jerk(false));
        let swung = detector.update(wrist(&sim.frame()), t0 + Duration::from_millis(300));
        assert_eq!(swung, SwingEvent::SwingRight);

        for i in 0..100u64 {
            let now = t0 + Duration::from_millis(600 + i * 300);
            assert_eq!(detector.update(wrist(&sim.frame()), now), SwingEvent::None);
        }
    }
}
