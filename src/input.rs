use gallery_core::{GridParams, LayoutMode, PanelRect, SpiralParams};
use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Client (viewport) coordinates to CSS pixels inside the canvas.
#[inline]
pub fn client_to_canvas(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// `MouseEvent.button` value of the main (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// `MouseEvent.button` value of the secondary (usually right) button.
pub const SECONDARY_BUTTON: i16 = 2;

#[inline]
pub fn is_primary(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

#[inline]
pub fn is_secondary(button: i16) -> bool {
    button == SECONDARY_BUTTON
}

/// Wheel delta in pixels regardless of `WheelEvent.deltaMode`.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => 16.0,  // lines
        2 => 800.0, // pages
        _ => 1.0,
    };
    (delta * scale) as f32
}

// ---------------- Canvas sizing ----------------

/// Backing store size for a CSS size and device pixel ratio, never zero.
#[inline]
pub fn backing_size(css: Vec2, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css.x as f64 * dpr) as u32;
    let h = (css.y as f64 * dpr) as u32;
    (w.max(1), h.max(1))
}

// ---------------- Container attributes ----------------

pub fn resolve_feed_path<'a>(attribute: Option<&'a str>, default: &'a str) -> &'a str {
    attribute.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(default)
}

pub fn layout_for(attribute: Option<&str>) -> LayoutMode {
    match attribute.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("spiral") => LayoutMode::Spiral(SpiralParams::default()),
        _ => LayoutMode::Grid(GridParams::default()),
    }
}

// ---------------- Inline styles ----------------

pub fn panel_css(rect: &PanelRect, opacity: f32) -> String {
    format!(
        "display:flex;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;opacity:{:.3}",
        rect.left,
        rect.top,
        rect.width.max(0.0),
        rect.height,
        opacity.clamp(0.0, 1.0)
    )
}

pub fn tooltip_css(position: Vec2) -> String {
    format!("display:block;left:{:.1}px;top:{:.1}px", position.x, position.y)
}

pub const HIDDEN_CSS: &str = "display:none";
