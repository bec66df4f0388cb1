// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use gallery_core::constants as core;
use std::collections::HashSet;

#[test]
fn dom_ids_are_unique() {
    let ids = [
        CONTAINER_ID,
        CANVAS_ID,
        TOOLTIP_ID,
        PANEL_ID,
        DESCRIPTION_ID,
        INFO_BUTTON_ID,
        VIDEO_BUTTON_ID,
        DATA_BUTTON_ID,
        UPLOAD_BUTTON_ID,
        EDIT_BUTTON_ID,
        FILE_INPUT_ID,
        EDITOR_ID,
        EDITOR_TEXT_ID,
        EDITOR_SAVE_ID,
        EDITOR_CANCEL_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
}

#[test]
fn feed_defaults() {
    assert!(DEFAULT_FEED_PATH.ends_with(".json"));
    assert!(FEED_ATTRIBUTE.starts_with("data-"));
    assert!(LAYOUT_ATTRIBUTE.starts_with("data-"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clear_color_is_normalized() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(core::CAMERA_ANIMATION_SEC > 0.0);
    assert!(core::PANEL_FADE_SEC > 0.0);
    assert!(core::INACTIVITY_TIMEOUT_SEC > 0.0);
    // the panel should finish fading in before it can time out
    assert!(core::PANEL_FADE_SEC < core::INACTIVITY_TIMEOUT_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn headlight_range_is_ordered() {
    assert!(core::HEADLIGHT_MIN_INTENSITY < core::HEADLIGHT_MAX_INTENSITY);
    assert!(core::HEADLIGHT_NEAR_Z < core::HEADLIGHT_FAR_Z);
    assert!(core::HEADLIGHT_FOCUS_DIM > 0.0 && core::HEADLIGHT_FOCUS_DIM < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn focused_camera_clears_the_frame() {
    assert!(core::CAMERA_FOCUS_DISTANCE > core::FRAME_DEPTH + core::CAMERA_ZNEAR);
    assert!(core::MIN_DOLLY_DISTANCE > core::CAMERA_ZNEAR);
    assert!(core::PLACEMENT_OFFSET > 0.0 && core::PLACEMENT_OFFSET < core::FRAME_DEPTH);
}
