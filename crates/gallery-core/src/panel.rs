//! Action panel placement and visibility, the inactivity timer that hides it,
//! and the hover tooltip.

use crate::camera::{ndc_to_screen, Camera};
use crate::constants::PANEL_FADE_SEC;
use crate::store::PaintingEntity;
use crate::tween::{Easing, Tween};
use glam::Vec2;

/// Screen rectangle in CSS pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Rectangle directly below the painting's footprint: its left/right edges
/// follow the projected bottom corners.
pub fn panel_rect(camera: &Camera, entity: &PaintingEntity, viewport: Vec2, height_px: f32) -> PanelRect {
    let (bl, br) = entity.bottom_corners();
    let a = ndc_to_screen(camera.project(bl).truncate(), viewport);
    let b = ndc_to_screen(camera.project(br).truncate(), viewport);
    let left = a.x.min(b.x);
    let right = a.x.max(b.x);
    PanelRect {
        left,
        top: a.y.max(b.y),
        width: right - left,
        height: height_px,
    }
}

/// Opacity of the panel with fade in/out. `shown` mirrors CSS `display`.
#[derive(Clone, Debug)]
pub struct PanelFade {
    shown: bool,
    opacity: f32,
    target: f32,
    tween: Option<Tween<f32>>,
    duration_sec: f64,
}

impl Default for PanelFade {
    fn default() -> Self {
        Self::new(PANEL_FADE_SEC)
    }
}

impl PanelFade {
    pub fn new(duration_sec: f64) -> Self {
        Self {
            shown: false,
            opacity: 0.0,
            target: 0.0,
            tween: None,
            duration_sec,
        }
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Make visible and fade toward full opacity. Repeated calls while already
    /// heading to 1 keep the running fade.
    pub fn fade_in(&mut self, now_sec: f64) {
        if self.shown && self.target == 1.0 {
            return;
        }
        self.shown = true;
        self.start(1.0, Easing::QuadraticOut, now_sec);
    }

    /// Fade toward zero; becomes hidden once the fade ends.
    pub fn fade_out(&mut self, now_sec: f64) {
        if !self.shown || self.target == 0.0 {
            return;
        }
        self.start(0.0, Easing::QuadraticIn, now_sec);
    }

    /// Hide at once, cancelling any fade.
    pub fn hide_now(&mut self) {
        self.shown = false;
        self.opacity = 0.0;
        self.target = 0.0;
        self.tween = None;
    }

    pub fn tick(&mut self, now_sec: f64) {
        let Some(tween) = self.tween else {
            return;
        };
        self.opacity = tween.sample(now_sec);
        if tween.is_finished(now_sec) {
            self.tween = None;
            if self.target == 0.0 {
                self.shown = false;
            }
        }
    }

    fn start(&mut self, to: f32, easing: Easing, now_sec: f64) {
        self.target = to;
        self.tween = Some(Tween::new(self.opacity, to, now_sec, self.duration_sec, easing));
    }
}

/// One-shot deadline re-armed by every user input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InactivityTimer {
    deadline: Option<f64>,
}

impl InactivityTimer {
    #[inline]
    pub fn arm(&mut self, now_sec: f64, timeout_sec: f64) {
        self.deadline = Some(now_sec + timeout_sec);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline passes.
    pub fn fire(&mut self, now_sec: f64) -> bool {
        match self.deadline {
            Some(d) if now_sec >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Name shown next to the cursor while hovering a painting.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position: Vec2,
}
