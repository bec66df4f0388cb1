// Host-side tests for keyboard, wheel and drag camera movement.

use gallery_core::movement::{apply_move, dolly, orbit, DragState, Move};
use gallery_core::Camera;
use glam::{Vec2, Vec3};

const HEIGHT: f32 = 600.0;

fn camera_at(eye: Vec3) -> Camera {
    Camera {
        eye,
        target: Vec3::ZERO,
        ..Camera::default()
    }
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn orbit_keeps_distance_and_target() {
    let mut cam = camera_at(Vec3::new(1.0, 2.0, 4.0));
    let radius = cam.eye.length();
    orbit(&mut cam, Vec2::new(37.0, -12.0), HEIGHT, 0.05);
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.eye.length() - radius).abs() < 1e-4);
}

#[test]
fn full_height_drag_turns_a_whole_circle() {
    let start = Vec3::new(0.0, 1.0, 5.0);
    let mut cam = camera_at(start);
    orbit(&mut cam, Vec2::new(HEIGHT, 0.0), HEIGHT, 0.05);
    assert!(close(cam.eye, start), "eye {:?}", cam.eye);

    let mut half = camera_at(Vec3::new(0.0, 0.0, 5.0));
    orbit(&mut half, Vec2::new(HEIGHT / 2.0, 0.0), HEIGHT, 0.05);
    assert!(close(half.eye, Vec3::new(0.0, 0.0, -5.0)), "eye {:?}", half.eye);
}

#[test]
fn dragging_right_swings_the_eye_left() {
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 5.0));
    orbit(&mut cam, Vec2::new(HEIGHT / 4.0, 0.0), HEIGHT, 0.05);
    assert!(close(cam.eye, Vec3::new(-5.0, 0.0, 0.0)), "eye {:?}", cam.eye);
}

#[test]
fn dragging_down_raises_the_eye_up_to_the_pole_margin() {
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 5.0));
    orbit(&mut cam, Vec2::new(0.0, 20.0), HEIGHT, 0.05);
    assert!(cam.eye.y > 0.0);

    orbit(&mut cam, Vec2::new(0.0, 10.0 * HEIGHT), HEIGHT, 0.05);
    assert!((cam.eye.y - 5.0 * 0.05f32.cos()).abs() < 1e-4);

    orbit(&mut cam, Vec2::new(0.0, -10.0 * HEIGHT), HEIGHT, 0.05);
    assert!((cam.eye.y + 5.0 * 0.05f32.cos()).abs() < 1e-4);

    // an oversized margin still leaves the horizontal plane reachable
    let mut flat = camera_at(Vec3::new(0.0, 3.0, 4.0));
    orbit(&mut flat, Vec2::new(0.0, 50.0), HEIGHT, 10.0);
    assert!(flat.eye.y.abs() < 1e-4);
    assert!((flat.eye.length() - 5.0).abs() < 1e-4);
}

#[test]
fn degenerate_orbits_do_nothing() {
    let mut on_target = camera_at(Vec3::ZERO);
    orbit(&mut on_target, Vec2::new(40.0, 40.0), HEIGHT, 0.05);
    assert_eq!(on_target.eye, Vec3::ZERO);

    let start = Vec3::new(0.0, 1.0, 5.0);
    let mut cam = camera_at(start);
    orbit(&mut cam, Vec2::new(40.0, 0.0), 0.0, 0.05);
    orbit(&mut cam, Vec2::new(f32::NAN, 0.0), HEIGHT, 0.05);
    assert_eq!(cam.eye, start);
}

#[test]
fn drag_starts_orbiting_past_the_threshold() {
    let mut drag = DragState::default();
    assert_eq!(drag.advance(Vec2::new(50.0, 50.0), 4.0), None);

    drag.begin(Vec2::new(100.0, 100.0));
    assert_eq!(drag.advance(Vec2::new(102.0, 101.0), 4.0), None);
    assert!(!drag.orbiting);

    // first delta spans from the press point
    assert_eq!(drag.advance(Vec2::new(105.0, 100.0), 4.0), Some(Vec2::new(5.0, 0.0)));
    assert!(drag.orbiting);
    // later deltas are incremental, even small ones
    assert_eq!(drag.advance(Vec2::new(106.0, 99.0), 4.0), Some(Vec2::new(1.0, -1.0)));

    assert!(drag.end());
    assert_eq!(drag, DragState::default());
    assert!(!drag.end());
}

#[test]
fn press_and_release_without_moving_is_a_click() {
    let mut drag = DragState::default();
    drag.begin(Vec2::new(10.0, 10.0));
    assert!(!drag.end());
}

#[test]
fn pans_move_eye_and_target_together() {
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 5.0));
    apply_move(&mut cam, Move::Right, 0.5, 0.25, 0.3);
    assert!(close(cam.eye, Vec3::new(0.5, 0.0, 5.0)));
    assert!(close(cam.target, Vec3::new(0.5, 0.0, 0.0)));
    apply_move(&mut cam, Move::Up, 0.5, 0.25, 0.3);
    assert!(close(cam.target, Vec3::new(0.5, 0.5, 0.0)));
}

#[test]
fn dolly_stops_at_min_distance() {
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 1.0));
    dolly(&mut cam, -1.0, 5.0, 0.3);
    assert!(close(cam.eye, Vec3::new(0.0, 0.0, 0.3)));
    dolly(&mut cam, 1.0, 0.2, 0.3);
    assert!(close(cam.eye, Vec3::new(0.0, 0.0, 0.5)));
    dolly(&mut cam, 0.0, 0.2, 0.3);
    assert!(close(cam.eye, Vec3::new(0.0, 0.0, 0.5)));
}
