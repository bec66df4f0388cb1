//! Polled interpolation records.
//!
//! A tween is plain data (start, end, start time, duration, easing); callers
//! sample it with the current time every tick and check `is_finished`.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadraticIn,
    QuadraticOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, k: f32) -> f32 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::QuadraticIn => k * k,
            Easing::QuadraticOut => k * (2.0 - k),
        }
    }
}

pub trait Lerp: Copy {
    fn lerp_to(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self.lerp(end, t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start_sec: f64,
    pub duration_sec: f64,
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_sec: f64, duration_sec: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_sec,
            duration_sec,
            easing,
        }
    }

    /// Linear progress in [0, 1]. Zero-length tweens are immediately done.
    #[inline]
    pub fn progress(&self, now_sec: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0) as f32
    }

    #[inline]
    pub fn is_finished(&self, now_sec: f64) -> bool {
        self.progress(now_sec) >= 1.0
    }

    /// Eased value at `now_sec`; exactly `to` once finished.
    pub fn sample(&self, now_sec: f64) -> T {
        let k = self.progress(now_sec);
        if k >= 1.0 {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.apply(k))
    }
}
