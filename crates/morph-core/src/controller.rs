//! Gesture arbitration.
//!
//! Turns the per-frame gesture labels of both hands, plus the right-hand
//! swing event, into mode, selection and rotation-pause transitions. Rules
//! run in a fixed order each frame:
//!
//! 1. left hand: open palm enters photo mode, fist returns to shape mode
//! 2. right swing: manual photo navigation behind a cooldown
//! 3. right static gesture: fist pauses, a held point selects, anything
//!    else resumes
//!
//! followed by autonomous cycling. The first rule to produce a label owns
//! the frame's reported gesture.

use crate::constants::FIST_ACCENT_COLOR;
use crate::gesture::StaticGesture;
use crate::state::{DisplayMode, InteractionState, ShapeSelector};
use crate::swing::SwingEvent;
use crate::timer::HoldProgress;
use glam::Vec3;
use std::fmt;
use std::time::Duration;

/// The single gesture reported to the overlay for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ActiveGesture {
    #[default]
    None,
    /// Left open palm: photo mode.
    ViewPhotos,
    /// Left fist: shape mode.
    ShapeMode,
    /// Right swing; `applied` is false while the manual cooldown holds it back.
    Swing { direction: SwingEvent, applied: bool },
    /// Right fist.
    Paused,
    /// Right point held for `fraction` of the hold duration.
    Holding { fraction: f32 },
    /// Right point held long enough to select.
    Selected,
}

impl fmt::Display for ActiveGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveGesture::None => f.write_str("-"),
            ActiveGesture::ViewPhotos => f.write_str("open palm: photos"),
            ActiveGesture::ShapeMode => f.write_str("fist: shape"),
            ActiveGesture::Swing { direction, applied: true } => write!(f, "{direction}"),
            ActiveGesture::Swing { direction, applied: false } => {
                write!(f, "{direction} (cooldown)")
            }
            ActiveGesture::Paused => f.write_str("fist: paused"),
            ActiveGesture::Holding { fraction } => {
                write!(f, "hold {:.0}%", (fraction * 100.0).clamp(0.0, 100.0))
            }
            ActiveGesture::Selected => f.write_str("selected"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub left: StaticGesture,
    pub right: StaticGesture,
    pub swing: SwingEvent,
    pub now: Duration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerOutcome {
    pub active: ActiveGesture,
    /// Targets must be regenerated before the next animation tick.
    pub regenerate: bool,
}

pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new(shape: ShapeSelector, color: Vec3) -> Self {
        Self {
            state: InteractionState::new(shape, color),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn update(&mut self, input: &FrameInput, photo_count: usize) -> ControllerOutcome {
        let now = input.now;
        let mut label: Option<ActiveGesture> = None;
        let mut regenerate = false;

        match input.left {
            StaticGesture::OpenPalm
                if photo_count > 0 && self.state.mode != DisplayMode::ViewPhoto =>
            {
                self.enter_photos(now, photo_count);
                label = Some(ActiveGesture::ViewPhotos);
                regenerate = true;
            }
            StaticGesture::Fist if self.state.mode != DisplayMode::Shape => {
                self.enter_shape();
                label = Some(ActiveGesture::ShapeMode);
                regenerate = true;
            }
            // Holding the mode gesture after the switch leaves the label to later rules.
            _ => {}
        }

        if self.state.mode == DisplayMode::ViewPhoto
            && photo_count > 1
            && input.swing != SwingEvent::None
        {
            let applied = self.state.manual_change.ready(now);
            if applied {
                let delta = match input.swing {
                    SwingEvent::SwingLeft => -1,
                    _ => 1,
                };
                let index = self.step_selection(delta, photo_count);
                self.state.manual_change.trigger(now);
                self.state.cycle_timer.reset(now);
                regenerate = true;
                log::debug!("[swing] {} -> photo {}", input.swing, index);
            } else {
                log::debug!("[swing] {} ignored during cooldown", input.swing);
            }
            label.get_or_insert(ActiveGesture::Swing {
                direction: input.swing,
                applied,
            });
        }

        let right_label = self.apply_right(input.right, now, photo_count);

        if self.state.mode == DisplayMode::ViewPhoto
            && self.state.auto_cycling
            && photo_count > 1
            && self.state.cycle_timer.update(now)
        {
            // Autoplay always walks backward through the set.
            let index = self.step_selection(-1, photo_count);
            regenerate = true;
            log::debug!("[cycle] auto -> photo {}", index);
        }

        ControllerOutcome {
            active: label.or(right_label).unwrap_or_default(),
            regenerate,
        }
    }

    fn apply_right(
        &mut self,
        gesture: StaticGesture,
        now: Duration,
        photo_count: usize,
    ) -> Option<ActiveGesture> {
        match gesture {
            StaticGesture::Fist => {
                self.pause();
                self.state.pointing_hold.reset();
                Some(ActiveGesture::Paused)
            }
            StaticGesture::Pointing => match self.state.pointing_hold.update(now) {
                HoldProgress::Complete => {
                    if !self.state.rotation_paused {
                        log::info!("[select] pointing held, rotation paused");
                    }
                    self.pause();
                    Some(ActiveGesture::Selected)
                }
                HoldProgress::Holding { fraction } => Some(ActiveGesture::Holding { fraction }),
            },
            _ => {
                self.state.pointing_hold.reset();
                self.state.rotation_paused = false;
                if self.state.mode == DisplayMode::ViewPhoto
                    && photo_count > 1
                    && !self.state.auto_cycling
                {
                    self.state.auto_cycling = true;
                    self.state.cycle_timer.reset(now);
                }
                None
            }
        }
    }

    fn pause(&mut self) {
        self.state.rotation_paused = true;
        self.state.auto_cycling = false;
    }

    fn enter_photos(&mut self, now: Duration, photo_count: usize) {
        let state = &mut self.state;
        state.mode = DisplayMode::ViewPhoto;
        state.selected_photo = Some(state.selected_photo.unwrap_or(0));
        state.auto_cycling = true;
        state.cycle_timer.reset(now);
        log::info!("[mode] -> photos ({} loaded)", photo_count);
    }

    fn enter_shape(&mut self) {
        let state = &mut self.state;
        state.mode = DisplayMode::Shape;
        state.selected_photo = None;
        state.auto_cycling = false;
        state.shape = ShapeSelector::Heart;
        state.color = Vec3::from(FIST_ACCENT_COLOR);
        log::info!("[mode] -> shape ({})", state.shape);
    }

    /// Move the selection by `delta` with wraparound and return the new index.
    fn step_selection(&mut self, delta: isize, photo_count: usize) -> usize {
        let current = self.state.selected_photo.unwrap_or(0) % photo_count;
        let next = (current as isize + delta).rem_euclid(photo_count as isize) as usize;
        self.state.selected_photo = Some(next);
        next
    }

    /// Returns true when the change requires new targets.
    pub fn set_shape(&mut self, shape: ShapeSelector) -> bool {
        self.state.shape = shape;
        self.state.mode == DisplayMode::Shape
    }

    /// Returns true when the change requires new targets.
    pub fn set_color(&mut self, color: Vec3) -> bool {
        self.state.color = color;
        self.state.mode == DisplayMode::Shape
    }

    /// Re-derive the selection after the photo set was replaced and restart the
    /// autoplay clock. Returns true when the displayed targets depend on the
    /// photo set.
    pub fn photos_replaced(&mut self, photo_count: usize, now: Duration) -> bool {
        if self.state.mode != DisplayMode::ViewPhoto {
            return false;
        }
        if photo_count == 0 {
            let state = &mut self.state;
            state.mode = DisplayMode::Shape;
            state.selected_photo = None;
            state.auto_cycling = false;
            log::info!("[mode] photo set emptied, back to shape");
        } else {
            self.state.selected_photo = self.state.selected_photo.map(|i| i % photo_count);
            self.state.cycle_timer.reset(now);
        }
        true
    }

    /// Progress toward the next autonomous step, when autoplay is active.
    pub fn cycle_fraction(&self, now: Duration, photo_count: usize) -> Option<f32> {
        let state = &self.state;
        (state.mode == DisplayMode::ViewPhoto && state.auto_cycling && photo_count > 1)
            .then(|| state.cycle_timer.fraction(now))
    }
}
