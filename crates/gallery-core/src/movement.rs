//! Free camera movement: keyboard pans, wheel dolly and drag orbit around
//! the camera target.

use crate::camera::Camera;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    DollyIn,
    DollyOut,
}

#[inline]
pub fn move_for_key(key: &str) -> Option<Move> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Move::Left),
        "ArrowRight" | "d" | "D" => Some(Move::Right),
        "ArrowUp" | "w" | "W" => Some(Move::Up),
        "ArrowDown" | "s" | "S" => Some(Move::Down),
        "e" | "E" => Some(Move::DollyIn),
        "q" | "Q" => Some(Move::DollyOut),
        _ => None,
    }
}

/// Camera-space right and up vectors of the view plane.
fn view_plane(camera: &Camera) -> (Vec3, Vec3) {
    let forward = (camera.target - camera.eye).try_normalize().unwrap_or(Vec3::NEG_Z);
    let right = forward.cross(camera.up).try_normalize().unwrap_or(Vec3::X);
    (right, right.cross(forward))
}

/// Apply one key step. Pans move eye and target together; dollies move the
/// eye only.
pub fn apply_move(camera: &mut Camera, mv: Move, pan_step: f32, dolly_step: f32, min_distance: f32) {
    let (right, up) = view_plane(camera);
    let delta = match mv {
        Move::Left => -right,
        Move::Right => right,
        Move::Up => up,
        Move::Down => -up,
        Move::DollyIn => return dolly(camera, -1.0, dolly_step, min_distance),
        Move::DollyOut => return dolly(camera, 1.0, dolly_step, min_distance),
    } * pan_step;
    camera.eye += delta;
    camera.target += delta;
}

/// Move the eye toward (`delta_y < 0`) or away from the target, never
/// closer than `min_distance`.
pub fn dolly(camera: &mut Camera, delta_y: f32, step: f32, min_distance: f32) {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return;
    }
    let offset = camera.eye - camera.target;
    let distance = offset.length();
    let Some(dir) = offset.try_normalize() else {
        return;
    };
    let next = if delta_y < 0.0 {
        (distance - step).max(min_distance)
    } else {
        distance + step
    };
    camera.eye = camera.target + dir * next;
}

/// Rotate the eye around the target by a pointer drag of `delta_px`. A drag
/// across the full viewport height turns a whole circle; horizontal drags
/// turn around world up, vertical drags tilt, and the tilt stops `polar_margin`
/// radians short of straight up or down.
pub fn orbit(camera: &mut Camera, delta_px: Vec2, viewport_height: f32, polar_margin: f32) {
    if !delta_px.is_finite() || viewport_height <= 0.0 {
        return;
    }
    let offset = camera.eye - camera.target;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return;
    }
    let per_px = TAU / viewport_height;
    let azimuth = offset.x.atan2(offset.z) - delta_px.x * per_px;
    let margin = polar_margin.clamp(0.0, PI / 2.0);
    let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - delta_px.y * per_px)
        .clamp(margin, PI - margin);

    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    camera.eye = camera.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * radius;
}

/// Primary-button drag in progress. Becomes an orbit once the pointer has
/// moved past the click threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub orbiting: bool,
    pub origin: Vec2,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, at: Vec2) {
        *self = Self {
            active: true,
            orbiting: false,
            origin: at,
            last: at,
        };
    }

    /// Pointer delta since the previous move, once past `threshold` pixels.
    pub fn advance(&mut self, at: Vec2, threshold: f32) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        if !self.orbiting && at.distance(self.origin) < threshold {
            return None;
        }
        self.orbiting = true;
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    /// Release the button. Returns whether the gesture was an orbit rather
    /// than a click.
    pub fn end(&mut self) -> bool {
        let orbited = self.active && self.orbiting;
        *self = Self::default();
        orbited
    }
}
