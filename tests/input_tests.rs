// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use gallery_core::{LayoutMode, PanelRect};
use glam::Vec2;
use input::*;

#[test]
fn client_coordinates_become_canvas_local() {
    let p = client_to_canvas(Vec2::new(120.0, 80.0), Vec2::new(20.0, 30.0));
    assert_eq!(p, Vec2::new(100.0, 50.0));
}

#[test]
fn secondary_button_detection() {
    assert!(is_secondary(2));
    assert!(!is_secondary(0));
    assert!(!is_secondary(1));
    assert!(is_primary(0));
    assert!(!is_primary(2));
}

#[test]
fn wheel_delta_is_normalized_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, 0), 3.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
    assert_eq!(wheel_delta_px(5.0, 7), 5.0);
}

#[test]
fn backing_size_follows_device_pixel_ratio() {
    assert_eq!(backing_size(Vec2::new(800.0, 600.0), 1.0), (800, 600));
    assert_eq!(backing_size(Vec2::new(800.0, 600.0), 2.0), (1600, 1200));
    assert_eq!(backing_size(Vec2::new(100.0, 50.0), 1.5), (150, 75));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(backing_size(Vec2::ZERO, 2.0), (1, 1));
    assert_eq!(backing_size(Vec2::new(320.0, 240.0), 0.0), (320, 240));
    assert_eq!(backing_size(Vec2::new(320.0, 240.0), f64::NAN), (320, 240));
}

#[test]
fn feed_path_falls_back_to_default() {
    assert_eq!(resolve_feed_path(None, "data/gallery.json"), "data/gallery.json");
    assert_eq!(resolve_feed_path(Some("   "), "data/gallery.json"), "data/gallery.json");
    assert_eq!(resolve_feed_path(Some(" feeds/a.json "), "data/gallery.json"), "feeds/a.json");
}

#[test]
fn layout_attribute_selects_mode() {
    assert!(matches!(layout_for(Some("spiral")), LayoutMode::Spiral(_)));
    assert!(matches!(layout_for(Some(" Spiral ")), LayoutMode::Spiral(_)));
    assert!(matches!(layout_for(Some("grid")), LayoutMode::Grid(_)));
    assert!(matches!(layout_for(Some("carousel")), LayoutMode::Grid(_)));
    assert!(matches!(layout_for(None), LayoutMode::Grid(_)));
}

#[test]
fn panel_css_places_and_clamps() {
    let rect = PanelRect {
        left: 10.0,
        top: 480.5,
        width: 244.0,
        height: 40.0,
    };
    assert_eq!(
        panel_css(&rect, 0.5),
        "display:flex;left:10.0px;top:480.5px;width:244.0px;height:40.0px;opacity:0.500"
    );
    assert!(panel_css(&rect, 1.7).ends_with("opacity:1.000"));

    let flipped = PanelRect { width: -3.0, ..rect };
    assert!(panel_css(&flipped, 1.0).contains("width:0.0px"));
}

#[test]
fn tooltip_css_positions_next_to_cursor() {
    assert_eq!(tooltip_css(Vec2::new(115.0, 65.0)), "display:block;left:115.0px;top:65.0px");
    assert_eq!(HIDDEN_CSS, "display:none");
}
