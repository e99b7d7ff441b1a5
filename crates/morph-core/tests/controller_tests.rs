// Tests for gesture arbitration: mode changes, swing navigation, hold-to-select
// and autonomous cycling.

use glam::Vec3;
use morph_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn input(left: StaticGesture, right: StaticGesture, swing: SwingEvent, now: Duration) -> FrameInput {
    FrameInput {
        left,
        right,
        swing,
        now,
    }
}

fn idle(now: Duration) -> FrameInput {
    input(StaticGesture::None, StaticGesture::None, SwingEvent::None, now)
}

fn controller() -> InteractionController {
    InteractionController::new(ShapeSelector::Sphere, Vec3::splat(0.5))
}

/// Controller already in photo mode at t = 1s with `count` photos.
fn in_photo_mode(count: usize) -> InteractionController {
    let mut c = controller();
    let out = c.update(
        &input(StaticGesture::OpenPalm, StaticGesture::None, SwingEvent::None, ms(1_000)),
        count,
    );
    assert!(out.regenerate);
    assert_eq!(c.state().mode, DisplayMode::ViewPhoto);
    c
}

#[test]
fn open_palm_without_photos_is_a_no_op() {
    let mut c = controller();
    let out = c.update(
        &input(StaticGesture::OpenPalm, StaticGesture::None, SwingEvent::None, ms(0)),
        0,
    );
    assert_eq!(c.state().mode, DisplayMode::Shape);
    assert!(!out.regenerate);
    assert_eq!(out.active, ActiveGesture::None);
}

#[test]
fn open_palm_enters_photo_mode_with_first_photo() {
    let mut c = controller();
    let out = c.update(
        &input(StaticGesture::OpenPalm, StaticGesture::None, SwingEvent::None, ms(500)),
        3,
    );
    let s = c.state();
    assert_eq!(s.mode, DisplayMode::ViewPhoto);
    assert_eq!(s.selected_photo, Some(0));
    assert!(s.auto_cycling);
    assert!(out.regenerate);
    assert_eq!(out.active, ActiveGesture::ViewPhotos);

    // Holding the palm does not regenerate again.
    let again = c.update(
        &input(StaticGesture::OpenPalm, StaticGesture::None, SwingEvent::None, ms(520)),
        3,
    );
    assert!(!again.regenerate);
    assert_eq!(again.active, ActiveGesture::None);
}

#[test]
fn left_fist_returns_to_heart_shape() {
    let mut c = in_photo_mode(3);
    let out = c.update(
        &input(StaticGesture::Fist, StaticGesture::None, SwingEvent::None, ms(1_100)),
        3,
    );
    let s = c.state();
    assert_eq!(s.mode, DisplayMode::Shape);
    assert_eq!(s.shape, ShapeSelector::Heart);
    assert_eq!(s.color, Vec3::from(FIST_ACCENT_COLOR));
    assert_eq!(s.selected_photo, None);
    assert!(!s.auto_cycling);
    assert!(out.regenerate);
    assert_eq!(out.active, ActiveGesture::ShapeMode);
}

#[test]
fn swing_right_advances_selection_after_cooldown() {
    let mut c = in_photo_mode(3);
    let out = c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, ms(1_300)),
        3,
    );
    assert_eq!(c.state().selected_photo, Some(1));
    assert_eq!(c.state().manual_change.last(), Some(ms(1_300)));
    assert!(out.regenerate);
    assert_eq!(
        out.active,
        ActiveGesture::Swing {
            direction: SwingEvent::SwingRight,
            applied: true
        }
    );
}

#[test]
fn swing_left_wraps_backwards() {
    let mut c = in_photo_mode(3);
    c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingLeft, ms(1_300)),
        3,
    );
    assert_eq!(c.state().selected_photo, Some(2));
}

#[test]
fn swing_during_cooldown_is_reported_but_not_applied() {
    let mut c = in_photo_mode(3);
    c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, ms(1_300)),
        3,
    );
    let out = c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, ms(1_700)),
        3,
    );
    assert_eq!(c.state().selected_photo, Some(1));
    assert!(!out.regenerate);
    assert_eq!(
        out.active,
        ActiveGesture::Swing {
            direction: SwingEvent::SwingRight,
            applied: false
        }
    );
    assert_eq!(c.state().manual_change.last(), Some(ms(1_300)));

    let later = c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, ms(2_200)),
        3,
    );
    assert!(later.regenerate);
    assert_eq!(c.state().selected_photo, Some(2));
}

#[test]
fn swing_ignored_with_single_photo_or_in_shape_mode() {
    let mut c = in_photo_mode(1);
    let out = c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, ms(1_300)),
        1,
    );
    assert_eq!(c.state().selected_photo, Some(0));
    assert_eq!(out.active, ActiveGesture::None);

    let mut shape = controller();
    let out = shape.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, ms(1_300)),
        3,
    );
    assert!(!out.regenerate);
    assert_eq!(shape.state().selected_photo, None);
}

#[test]
fn pointing_hold_reports_hold_then_select() {
    let mut c = in_photo_mode(3);
    let start = ms(2_000);
    let samples = [start, start + POINTING_HOLD - ms(1), start + POINTING_HOLD];

    let point = |now| input(StaticGesture::None, StaticGesture::Pointing, SwingEvent::None, now);
    let first = c.update(&point(samples[0]), 3);
    assert!(matches!(first.active, ActiveGesture::Holding { .. }));
    assert!(!c.state().rotation_paused);

    let second = c.update(&point(samples[1]), 3);
    assert!(matches!(second.active, ActiveGesture::Holding { .. }));
    assert!(!c.state().rotation_paused);

    let third = c.update(&point(samples[2]), 3);
    assert_eq!(third.active, ActiveGesture::Selected);
    assert!(c.state().rotation_paused);
    assert!(!c.state().auto_cycling);
}

#[test]
fn releasing_the_point_resets_the_hold() {
    let mut c = controller();
    let point = |now| input(StaticGesture::None, StaticGesture::Pointing, SwingEvent::None, now);
    c.update(&point(ms(0)), 0);
    c.update(&idle(ms(900)), 0);
    assert!(!c.state().pointing_hold.is_running());
    // The clock restarts, so 1.1s after the first sample is not a selection.
    let out = c.update(&point(ms(1_100)), 0);
    assert!(matches!(out.active, ActiveGesture::Holding { .. }));
}

#[test]
fn right_fist_pauses_and_release_resumes() {
    let mut c = in_photo_mode(3);
    let out = c.update(
        &input(StaticGesture::None, StaticGesture::Fist, SwingEvent::None, ms(1_200)),
        3,
    );
    assert_eq!(out.active, ActiveGesture::Paused);
    assert!(c.state().rotation_paused);
    assert!(!c.state().auto_cycling);

    c.update(&idle(ms(1_300)), 3);
    assert!(!c.state().rotation_paused);
    assert!(c.state().auto_cycling);
}

#[test]
fn resume_in_shape_mode_does_not_enable_autoplay() {
    let mut c = controller();
    c.update(
        &input(StaticGesture::None, StaticGesture::Fist, SwingEvent::None, ms(0)),
        3,
    );
    c.update(&idle(ms(100)), 3);
    assert!(!c.state().rotation_paused);
    assert!(!c.state().auto_cycling);
}

#[test]
fn left_mode_label_outranks_right_static_gesture() {
    let mut c = controller();
    let out = c.update(
        &input(StaticGesture::OpenPalm, StaticGesture::Fist, SwingEvent::None, ms(0)),
        2,
    );
    assert_eq!(out.active, ActiveGesture::ViewPhotos);
    // The right fist still takes effect.
    assert!(c.state().rotation_paused);
}

#[test]
fn held_left_fist_leaves_hold_and_select_visible() {
    let mut c = controller();
    let mut step = |t: u64| {
        let out = c.update(
            &input(StaticGesture::Fist, StaticGesture::Pointing, SwingEvent::None, ms(t)),
            0,
        );
        (out.active, c.state().rotation_paused)
    };
    let (first, paused) = step(0);
    assert!(matches!(first, ActiveGesture::Holding { .. }));
    assert!(!paused);
    let (second, paused) = step(999);
    assert!(matches!(second, ActiveGesture::Holding { .. }));
    assert!(!paused);
    assert_eq!(step(1_000), (ActiveGesture::Selected, true));
}

#[test]
fn held_open_palm_leaves_swing_visible() {
    let mut c = in_photo_mode(3);
    let out = c.update(
        &input(StaticGesture::OpenPalm, StaticGesture::None, SwingEvent::SwingRight, ms(1_300)),
        3,
    );
    assert_eq!(
        out.active,
        ActiveGesture::Swing {
            direction: SwingEvent::SwingRight,
            applied: true,
        }
    );
    assert_eq!(c.state().selected_photo, Some(1));
}

#[test]
fn swing_label_outranks_right_static_gesture() {
    let mut c = in_photo_mode(3);
    let out = c.update(
        &input(StaticGesture::None, StaticGesture::Pointing, SwingEvent::SwingLeft, ms(1_300)),
        3,
    );
    assert!(matches!(out.active, ActiveGesture::Swing { applied: true, .. }));
}

#[test]
fn autoplay_steps_backward_on_interval() {
    let mut c = in_photo_mode(4);
    let t0 = ms(1_000);
    assert!(!c.update(&idle(t0 + AUTO_CYCLE_INTERVAL), 4).regenerate);
    let out = c.update(&idle(t0 + AUTO_CYCLE_INTERVAL + ms(1)), 4);
    assert!(out.regenerate);
    assert_eq!(c.state().selected_photo, Some(3));

    let fraction = c
        .cycle_fraction(t0 + AUTO_CYCLE_INTERVAL + ms(1) + AUTO_CYCLE_INTERVAL / 2, 4)
        .expect("autoplay active");
    assert!((fraction - 0.5).abs() < 1e-3);
}

#[test]
fn manual_swing_restarts_the_autoplay_clock() {
    let mut c = in_photo_mode(3);
    let swing_at = ms(5_000);
    c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingRight, swing_at),
        3,
    );
    // 1s past the original deadline, but under an interval since the swing.
    let out = c.update(&idle(ms(7_000)), 3);
    assert!(!out.regenerate);
    assert_eq!(c.state().selected_photo, Some(1));
}

#[test]
fn no_autoplay_with_single_photo() {
    let mut c = in_photo_mode(1);
    assert_eq!(c.cycle_fraction(ms(2_000), 1), None);
    assert!(!c.update(&idle(ms(60_000)), 1).regenerate);
}

#[test]
fn photo_set_changes_rederive_selection() {
    let mut c = in_photo_mode(5);
    c.update(
        &input(StaticGesture::None, StaticGesture::None, SwingEvent::SwingLeft, ms(1_300)),
        5,
    );
    assert_eq!(c.state().selected_photo, Some(4));

    assert!(c.photos_replaced(3, ms(1_400)));
    assert_eq!(c.state().selected_photo, Some(1));
    assert_eq!(c.state().selected_index(3), Some(1));

    assert!(c.photos_replaced(0, ms(1_500)));
    assert_eq!(c.state().mode, DisplayMode::Shape);
    assert_eq!(c.state().selected_photo, None);
}

#[test]
fn growing_photo_set_restarts_autoplay_clock() {
    // One photo: autoplay stays idle while the clock runs on.
    let mut c = in_photo_mode(1);
    assert!(!c.update(&idle(ms(10_000)), 1).regenerate);

    assert!(c.photos_replaced(3, ms(10_000)));
    let out = c.update(&idle(ms(10_016)), 3);
    assert!(!out.regenerate);
    assert_eq!(c.state().selected_photo, Some(0));

    let due = ms(10_000) + AUTO_CYCLE_INTERVAL + ms(1);
    assert!(c.update(&idle(due), 3).regenerate);
    assert_eq!(c.state().selected_photo, Some(2));
}

#[test]
fn settings_only_regenerate_in_shape_mode() {
    let mut c = controller();
    assert!(c.set_shape(ShapeSelector::Firework));
    assert!(c.set_color(Vec3::X));

    let mut p = in_photo_mode(2);
    assert!(!p.set_shape(ShapeSelector::Sphere));
    assert!(!p.set_color(Vec3::Y));
    assert_eq!(p.state().shape, ShapeSelector::Sphere);
}
