// Host-side tests for the focus state machine, tweens and panel timing.

use gallery_core::{
    CameraPose, Direction, Easing, EntityId, FocusMachine, FocusPhase, FocusTransition,
    InactivityTimer, PanelFade, Tween,
};
use glam::Vec3;

const DURATION: f64 = 0.7;

fn overview() -> CameraPose {
    CameraPose {
        position: Vec3::new(0.0, 0.6, 5.0),
        target: Vec3::new(0.0, 0.4, 0.0),
    }
}

fn machine() -> FocusMachine {
    FocusMachine::new(DURATION, 0.8)
}

/// Focus `id` at `position` and run the tween to completion.
fn focus_and_settle(m: &mut FocusMachine, id: EntityId, position: Vec3, current: CameraPose, now: f64) -> CameraPose {
    assert!(m.request_focus(id, position, Vec3::Z, current, now));
    let (pose, transition) = m.tick(now + DURATION + 0.01);
    assert_eq!(transition, Some(FocusTransition::Reached(id)));
    pose.unwrap()
}

#[test]
fn focus_pose_stands_in_front_of_the_painting() {
    let m = machine();
    let pose = m.focus_pose(Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(pose.target, Vec3::new(1.0, 2.0, 0.0));
    assert!((pose.position - Vec3::new(1.0, 2.0, 0.8)).length() < 1e-6);
}

#[test]
fn request_while_animating_is_dropped() {
    let mut m = machine();
    assert!(m.request_focus(EntityId(0), Vec3::ZERO, Vec3::Z, overview(), 0.0));
    assert_eq!(m.phase(), FocusPhase::Animating(Direction::ToFocus));
    let saved = m.restoration_point();

    assert!(!m.request_focus(EntityId(1), Vec3::X, Vec3::Z, overview(), 0.1));
    assert!(!m.request_defocus(overview(), 0.2));
    assert_eq!(m.phase(), FocusPhase::Animating(Direction::ToFocus));
    assert_eq!(m.focused(), Some(EntityId(0)));
    assert_eq!(m.restoration_point(), saved);
    assert_eq!(m.nesting_depth(), 1);
}

#[test]
fn focus_round_trip_restores_saved_pose() {
    let mut m = machine();
    let start = overview();
    let at = focus_and_settle(&mut m, EntityId(3), Vec3::new(0.0, 0.4, 0.0), start, 0.0);
    assert_eq!(m.phase(), FocusPhase::Focused);
    assert_eq!(m.restoration_point(), Some(start));

    assert!(m.request_defocus(at, 1.0));
    assert_eq!(m.phase(), FocusPhase::Animating(Direction::ToIdle));
    let (pose, transition) = m.tick(1.0 + DURATION + 0.01);
    assert_eq!(transition, Some(FocusTransition::Released));
    assert_eq!(pose, Some(start));
    assert_eq!(m.phase(), FocusPhase::Idle);
    assert_eq!(m.focused(), None);
    assert_eq!(m.nesting_depth(), 0);
}

#[test]
fn tween_eases_out_over_fixed_duration() {
    let mut m = machine();
    let start = overview();
    m.request_focus(EntityId(0), Vec3::new(0.0, 0.4, 0.0), Vec3::Z, start, 0.0);
    let (mid, transition) = m.tick(0.35);
    assert!(transition.is_none());
    let mid = mid.unwrap();
    // quadratic out covers 3/4 of the way at half time
    let end_z = 0.8;
    let expected = start.position.z + (end_z - start.position.z) * 0.75;
    assert!((mid.position.z - expected).abs() < 1e-4);

    // a far painting takes exactly as long
    let mut far = machine();
    far.request_focus(EntityId(1), Vec3::new(50.0, 0.0, 0.0), Vec3::Z, start, 0.0);
    let (_, done) = far.tick(DURATION + 0.01);
    assert_eq!(done, Some(FocusTransition::Reached(EntityId(1))));
}

#[test]
fn nested_focus_unwinds_to_outer_painting() {
    let mut m = machine();
    let start = overview();
    let outer_pose = focus_and_settle(&mut m, EntityId(0), Vec3::ZERO, start, 0.0);

    // same painting again is not a new focus
    assert!(!m.request_focus(EntityId(0), Vec3::ZERO, Vec3::Z, outer_pose, 1.0));

    let inner_pose = focus_and_settle(&mut m, EntityId(1), Vec3::new(1.5, 0.0, 0.0), outer_pose, 1.0);
    assert_eq!(m.focused(), Some(EntityId(1)));
    assert_eq!(m.nesting_depth(), 2);

    assert!(m.request_defocus(inner_pose, 2.0));
    let (pose, transition) = m.tick(2.0 + DURATION + 0.01);
    assert_eq!(transition, Some(FocusTransition::Returned(EntityId(0))));
    assert_eq!(pose, Some(outer_pose));
    assert_eq!(m.phase(), FocusPhase::Focused);
    assert_eq!(m.focused(), Some(EntityId(0)));
    assert_eq!(m.nesting_depth(), 1);

    assert!(m.request_defocus(outer_pose, 3.0));
    let (pose, transition) = m.tick(3.0 + DURATION + 0.01);
    assert_eq!(transition, Some(FocusTransition::Released));
    assert_eq!(pose, Some(start));
}

#[test]
fn forgetting_an_outer_painting_skips_it() {
    let mut m = machine();
    let start = overview();
    let a = focus_and_settle(&mut m, EntityId(0), Vec3::ZERO, start, 0.0);
    let b = focus_and_settle(&mut m, EntityId(1), Vec3::X, a, 1.0);
    focus_and_settle(&mut m, EntityId(2), Vec3::Y, b, 2.0);
    assert_eq!(m.nesting_depth(), 3);

    assert!(m.forget(EntityId(1)));
    assert!(!m.forget(EntityId(1)));
    assert!(!m.forget(EntityId(7)));
    assert_eq!(m.nesting_depth(), 2);
    assert_eq!(m.restoration_point(), Some(a));

    // unwinds to the painting before the forgotten one
    assert!(m.request_defocus(b, 3.0));
    let (pose, transition) = m.tick(3.0 + DURATION + 0.01);
    assert_eq!(transition, Some(FocusTransition::Returned(EntityId(0))));
    assert_eq!(pose, Some(a));
    assert_eq!(m.focused(), Some(EntityId(0)));
}

#[test]
fn editing_blocks_focus_changes() {
    let mut m = machine();
    assert!(!m.begin_edit());
    let at = focus_and_settle(&mut m, EntityId(0), Vec3::ZERO, overview(), 0.0);

    assert!(m.begin_edit());
    assert!(m.is_editing());
    assert!(!m.request_defocus(at, 1.0));
    assert!(!m.request_focus(EntityId(1), Vec3::X, Vec3::Z, at, 1.0));
    assert!(m.end_edit());
    assert_eq!(m.phase(), FocusPhase::Focused);
    assert!(!m.end_edit());
}

#[test]
fn defocus_needs_focus() {
    let mut m = machine();
    assert!(!m.request_defocus(overview(), 0.0));
    assert_eq!(m.phase(), FocusPhase::Idle);
    assert_eq!(m.tick(1.0), (None, None));
}

#[test]
fn reset_returns_home_pose() {
    let mut m = machine();
    let start = overview();
    let a = focus_and_settle(&mut m, EntityId(0), Vec3::ZERO, start, 0.0);
    focus_and_settle(&mut m, EntityId(1), Vec3::X, a, 1.0);
    assert_eq!(m.reset(), Some(start));
    assert_eq!(m.phase(), FocusPhase::Idle);
    assert_eq!(m.nesting_depth(), 0);
    assert_eq!(m.reset(), None);
}

#[test]
fn tween_sampling() {
    let t = Tween::new(0.0f32, 10.0, 1.0, 2.0, Easing::Linear);
    assert_eq!(t.sample(0.0), 0.0);
    assert!((t.sample(2.0) - 5.0).abs() < 1e-6);
    assert_eq!(t.sample(3.0), 10.0);
    assert!(t.is_finished(3.0));
    assert!(!t.is_finished(2.9));

    let instant = Tween::new(1.0f32, 2.0, 0.0, 0.0, Easing::QuadraticOut);
    assert_eq!(instant.sample(0.0), 2.0);

    assert_eq!(Easing::QuadraticIn.apply(0.5), 0.25);
    assert_eq!(Easing::QuadraticOut.apply(0.5), 0.75);
    assert_eq!(Easing::QuadraticOut.apply(2.0), 1.0);
}

#[test]
fn panel_fade_reaches_full_opacity() {
    let mut fade = PanelFade::new(0.5);
    assert!(!fade.is_shown());
    fade.fade_in(1.0);
    assert!(fade.is_shown());
    fade.tick(1.25);
    assert!(fade.opacity() > 0.0 && fade.opacity() < 1.0);
    fade.tick(1.5);
    assert_eq!(fade.opacity(), 1.0);

    // repeated reveal keeps the panel steady
    fade.fade_in(1.6);
    fade.tick(1.6);
    assert_eq!(fade.opacity(), 1.0);
}

#[test]
fn panel_fade_out_hides() {
    let mut fade = PanelFade::new(0.5);
    fade.fade_in(0.0);
    fade.tick(0.5);
    fade.fade_out(1.0);
    fade.tick(1.25);
    assert!(fade.is_shown());
    assert!(fade.opacity() < 1.0);
    fade.tick(1.5);
    assert!(!fade.is_shown());
    assert_eq!(fade.opacity(), 0.0);

    // fading out a hidden panel does nothing
    fade.fade_out(2.0);
    fade.tick(2.1);
    assert!(!fade.is_shown());
}

#[test]
fn hide_now_cancels_fade() {
    let mut fade = PanelFade::default();
    fade.fade_in(0.0);
    fade.tick(0.1);
    fade.hide_now();
    fade.tick(0.2);
    assert!(!fade.is_shown());
    assert_eq!(fade.opacity(), 0.0);
}

#[test]
fn inactivity_timer_fires_once() {
    let mut timer = InactivityTimer::default();
    assert!(!timer.fire(10.0));
    timer.arm(0.0, 1.0);
    assert!(timer.is_armed());
    assert!(!timer.fire(0.9));
    assert!(timer.fire(1.0));
    assert!(!timer.fire(1.1));

    timer.arm(2.0, 1.0);
    timer.clear();
    assert!(!timer.fire(5.0));
}
