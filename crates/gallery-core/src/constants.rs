// Shared layout/interaction tuning constants used by the web frontend and tests.
// Units are metres unless noted.

// Painting layout
pub const PAINTING_BASE_WIDTH: f32 = 1.0; // max painting width
pub const PAINTING_BASE_HEIGHT: f32 = 0.8; // max painting height
pub const GRID_SPACING: f32 = 0.5; // gap between neighbouring paintings
pub const PAINTINGS_PER_ROW: usize = 11;

// Passepartout (mat) and frame
pub const PASSEPARTOUT_THICKNESS: f32 = 0.1;
pub const PASSEPARTOUT_DEPTH: f32 = 0.005;
pub const FRAME_THICKNESS: f32 = 0.04;
pub const FRAME_DEPTH: f32 = 0.05;
pub const FRAME_BEVEL_STEPS: usize = 2; // stepped molding on the outer frame
pub const BEVEL_DEPTH_FRACTION: f32 = 0.4; // share of frame depth used by the steps

// Camera
pub const CAMERA_START_Z: f32 = 5.0;
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_FOCUS_DISTANCE: f32 = 0.8; // distance from painting when focused
pub const CAMERA_ANIMATION_SEC: f64 = 0.7; // fixed focus/defocus duration

// Action panel and tooltip
pub const PANEL_HEIGHT_PX: f32 = 40.0;
pub const PANEL_FADE_SEC: f64 = 0.5;
pub const INACTIVITY_TIMEOUT_SEC: f64 = 1.0; // hide panel after this long without input
pub const TOOLTIP_OFFSET_PX: f32 = 15.0;

// Headlight following the camera
pub const HEADLIGHT_OFFSET: [f32; 3] = [0.0, 1.0, 0.15];
pub const HEADLIGHT_MIN_INTENSITY: f32 = 5.0; // when near
pub const HEADLIGHT_MAX_INTENSITY: f32 = 200.0; // when far
pub const HEADLIGHT_NEAR_Z: f32 = 1.0;
pub const HEADLIGHT_FAR_Z: f32 = 15.0;
pub const HEADLIGHT_FOCUS_DIM: f32 = 0.35; // multiplier while a painting is focused

// Room around the paintings
pub const ROOM_PADDING: f32 = 2.0;
pub const ROOM_FLOOR_DEPTH: f32 = 5.0;
pub const ROOM_FRONT_WALL_Z: f32 = -0.1;

// Free movement
pub const MOVE_STEP: f32 = 0.15; // per key press
pub const DOLLY_STEP: f32 = 0.25;
pub const WHEEL_NOTCH_PX: f32 = 100.0; // wheel delta worth one full dolly step
pub const DRAG_THRESHOLD_PX: f32 = 4.0; // less than this is still a click
pub const ORBIT_POLAR_MARGIN: f32 = 0.05; // keep the eye off the poles (radians)

// Uploads
pub const UPLOAD_MAX_BYTES: u64 = 10 * 1024 * 1024;

// Paintings hung by the user
pub const PLACEMENT_OFFSET: f32 = 0.01; // keep new paintings off the wall surface
pub const MIN_DOLLY_DISTANCE: f32 = 0.3;

// Placeholder entities
pub const PLACEHOLDER_COLOR: [f32; 3] = [0.333, 0.333, 0.333]; // 0x555555
pub const PLACEHOLDER_DESCRIPTION: &str = "Image not available.";

// Default palette for decorative materials
pub const FRAME_COLOR: [f32; 3] = [0.31, 0.19, 0.06]; // dark wood
pub const PASSEPARTOUT_COLOR: [f32; 3] = [0.87, 0.80, 0.67];
pub const WALL_COLOR: [f32; 3] = [0.67, 0.67, 0.67];
pub const FLOOR_COLOR: [f32; 3] = [0.53, 0.53, 0.53];
pub const LIGHT_BAND_COLOR: [f32; 3] = [1.0, 0.85, 0.55];
