use crate::constants::{
    CAMERA_ANIMATION_SEC, CAMERA_FOCUS_DISTANCE, DOLLY_STEP, DRAG_THRESHOLD_PX,
    INACTIVITY_TIMEOUT_SEC, MIN_DOLLY_DISTANCE, MOVE_STEP, ORBIT_POLAR_MARGIN, PAINTING_BASE_HEIGHT, PAINTING_BASE_WIDTH, PANEL_FADE_SEC,
    PANEL_HEIGHT_PX, TOOLTIP_OFFSET_PX, UPLOAD_MAX_BYTES, WHEEL_NOTCH_PX,
};
use crate::layout::{GridParams, LayoutMode};
use glam::Vec2;

/// Session tunables. `Default` pulls everything from [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub layout: LayoutMode,
    pub max_painting_size: Vec2,
    pub focus_distance: f32,
    pub animation_sec: f64,
    pub inactivity_sec: f64,
    pub panel_fade_sec: f64,
    pub panel_height_px: f32,
    pub tooltip_offset_px: f32,
    pub move_step: f32,
    pub dolly_step: f32,
    pub min_dolly_distance: f32,
    pub wheel_notch_px: f32,
    pub drag_threshold_px: f32,
    pub orbit_polar_margin: f32,
    pub upload_max_bytes: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Grid(GridParams::default()),
            max_painting_size: Vec2::new(PAINTING_BASE_WIDTH, PAINTING_BASE_HEIGHT),
            focus_distance: CAMERA_FOCUS_DISTANCE,
            animation_sec: CAMERA_ANIMATION_SEC,
            inactivity_sec: INACTIVITY_TIMEOUT_SEC,
            panel_fade_sec: PANEL_FADE_SEC,
            panel_height_px: PANEL_HEIGHT_PX,
            tooltip_offset_px: TOOLTIP_OFFSET_PX,
            move_step: MOVE_STEP,
            dolly_step: DOLLY_STEP,
            min_dolly_distance: MIN_DOLLY_DISTANCE,
            wheel_notch_px: WHEEL_NOTCH_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            orbit_polar_margin: ORBIT_POLAR_MARGIN,
            upload_max_bytes: UPLOAD_MAX_BYTES,
        }
    }
}
