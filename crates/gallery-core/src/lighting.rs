use crate::constants::{
    HEADLIGHT_FAR_Z, HEADLIGHT_FOCUS_DIM, HEADLIGHT_MAX_INTENSITY, HEADLIGHT_MIN_INTENSITY,
    HEADLIGHT_NEAR_Z, HEADLIGHT_OFFSET,
};
use glam::Vec3;

/// Point light riding along with the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Headlight {
    pub position: Vec3,
    pub intensity: f32,
}

#[inline]
pub fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

/// Brighter the further back the camera stands; dimmed while a painting is
/// focused or being approached.
pub fn headlight(eye: Vec3, dimmed: bool) -> Headlight {
    let raw = map_linear(
        eye.z,
        HEADLIGHT_NEAR_Z,
        HEADLIGHT_FAR_Z,
        HEADLIGHT_MIN_INTENSITY,
        HEADLIGHT_MAX_INTENSITY,
    )
    .clamp(HEADLIGHT_MIN_INTENSITY, HEADLIGHT_MAX_INTENSITY);
    Headlight {
        position: eye + Vec3::from(HEADLIGHT_OFFSET),
        intensity: if dimmed { raw * HEADLIGHT_FOCUS_DIM } else { raw },
    }
}
