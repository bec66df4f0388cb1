//! Perspective camera, screen/world conversions and the camera pose the focus
//! animation interpolates.

use crate::constants::{CAMERA_FOV_Y_DEG, CAMERA_START_Z, CAMERA_ZFAR, CAMERA_ZNEAR, PAINTING_BASE_HEIGHT};
use crate::tween::Lerp;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, PAINTING_BASE_HEIGHT / 2.0 + 0.2, CAMERA_START_Z),
            target: Vec3::new(0.0, PAINTING_BASE_HEIGHT / 2.0, 0.0),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Camera position plus orbit target; what focus saves and restores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Lerp for CameraPose {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(end.position, t),
            target: self.target.lerp(end.target, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.eye,
            target: self.target,
        }
    }

    #[inline]
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.target;
    }

    /// Update the aspect ratio from a viewport size; zero sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Project a world point to normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// World-space ray through a normalized device coordinate.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near: Vec3 = p_near.truncate() / p_near.w;
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (far - near).try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }
}

/// Pixel position inside a viewport to NDC (y up).
#[inline]
pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    Vec2::new((screen.x / w) * 2.0 - 1.0, -(screen.y / h) * 2.0 + 1.0)
}

/// NDC to pixel position inside a viewport (y down).
#[inline]
pub fn ndc_to_screen(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new((ndc.x + 1.0) / 2.0 * viewport.x, (1.0 - ndc.y) / 2.0 * viewport.y)
}
