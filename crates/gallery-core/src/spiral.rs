//! Spiral gallery structure: a helical ramp with an outer wall, an inner
//! railing and an emissive light band following the curve.
//!
//! Surfaces share vertices along the curve and get smooth normals from
//! [`MeshData::compute_vertex_normals`]; the light band is a tube swept along
//! its own centreline with radial normals.

use crate::layout::EntityTransform;
use crate::mesh::MeshData;
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralParams {
    pub turns: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub total_height: f32,
    /// Quads along the whole curve.
    pub segments: usize,
    pub wall_height: f32,
    pub railing_height: f32,
    /// Light band centreline is pulled in from the outer wall by this much...
    pub band_radius_offset: f32,
    /// ...and raised above the ramp by this much.
    pub band_height_offset: f32,
    pub band_tube_radius: f32,
    pub band_radial_segments: usize,
    /// Painting centres sit this far above the ramp.
    pub eye_height: f32,
    /// Painting surfaces sit this far in front of the outer wall.
    pub wall_inset: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            turns: 2.0,
            inner_radius: 2.0,
            outer_radius: 5.0,
            total_height: 8.0,
            segments: 256,
            wall_height: 3.0,
            railing_height: 1.0,
            band_radius_offset: 0.1,
            band_height_offset: 2.6,
            band_tube_radius: 0.03,
            band_radial_segments: 8,
            eye_height: 1.5,
            wall_inset: 0.06,
        }
    }
}

/// Meshes making up one spiral gallery.
#[derive(Clone, Debug)]
pub struct SpiralStructure {
    pub ramp: MeshData,
    pub outer_wall: MeshData,
    pub inner_railing: MeshData,
    pub light_band: MeshData,
}

impl SpiralParams {
    #[inline]
    pub fn angle_at(&self, t: f32) -> f32 {
        t * self.turns * TAU
    }

    #[inline]
    pub fn height_at(&self, t: f32) -> f32 {
        t * self.total_height
    }

    /// Point on the curve at progress `t` and the given radius.
    #[inline]
    pub fn point(&self, t: f32, radius: f32) -> Vec3 {
        let a = self.angle_at(t);
        Vec3::new(radius * a.cos(), self.height_at(t), radius * a.sin())
    }

    /// Unit vector from the axis toward the curve at progress `t`.
    #[inline]
    pub fn radial(&self, t: f32) -> Vec3 {
        let a = self.angle_at(t);
        Vec3::new(a.cos(), 0.0, a.sin())
    }

    fn is_valid(&self) -> bool {
        self.segments > 0
            && self.turns.is_finite()
            && self.total_height.is_finite()
            && self.inner_radius >= 0.0
            && self.outer_radius > self.inner_radius
    }

    pub fn build_structure(&self) -> SpiralStructure {
        SpiralStructure {
            ramp: self.build_ramp(),
            outer_wall: self.build_outer_wall(),
            inner_railing: self.build_inner_railing(),
            light_band: self.build_light_band(),
        }
    }

    /// Ramp floor between the inner and outer radius, facing up.
    pub fn build_ramp(&self) -> MeshData {
        if !self.is_valid() {
            log::warn!("[geometry] invalid spiral parameters: {:?}", self);
            return MeshData::empty();
        }
        let (inner, outer) = (self.inner_radius, self.outer_radius);
        self.sweep_strip(
            |t| self.point(t, inner),
            |t| self.point(t, outer),
            outer - inner,
            // inner_i, inner_i+1, outer_i+1, outer_i faces up
            false,
        )
    }

    /// Outer wall rising from the ramp edge, facing the axis.
    pub fn build_outer_wall(&self) -> MeshData {
        if !self.is_valid() {
            log::warn!("[geometry] invalid spiral parameters: {:?}", self);
            return MeshData::empty();
        }
        let r = self.outer_radius;
        let h = self.wall_height;
        self.sweep_strip(
            |t| self.point(t, r),
            |t| self.point(t, r) + Vec3::Y * h,
            h,
            false,
        )
    }

    /// Railing along the inner edge, facing away from the axis.
    pub fn build_inner_railing(&self) -> MeshData {
        if !self.is_valid() {
            log::warn!("[geometry] invalid spiral parameters: {:?}", self);
            return MeshData::empty();
        }
        let r = self.inner_radius;
        let h = self.railing_height;
        self.sweep_strip(
            |t| self.point(t, r),
            |t| self.point(t, r) + Vec3::Y * h,
            h,
            true,
        )
    }

    /// Two rows of vertices (`lower`, `upper`) per curve step joined by quads.
    fn sweep_strip(
        &self,
        lower: impl Fn(f32) -> Vec3,
        upper: impl Fn(f32) -> Vec3,
        across: f32,
        flip: bool,
    ) -> MeshData {
        let n = self.segments;
        let mut mesh = MeshData::empty();
        let mut along = 0.0f32;
        let mut prev = lower(0.0);
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let lo = lower(t);
            along += lo.distance(prev);
            prev = lo;
            mesh.push_vertex(lo, Vec3::ZERO, [along, 0.0]);
            mesh.push_vertex(upper(t), Vec3::ZERO, [along, across]);
        }
        for i in 0..n as u32 {
            let lo0 = 2 * i;
            let hi0 = lo0 + 1;
            let lo1 = lo0 + 2;
            let hi1 = lo0 + 3;
            if flip {
                mesh.push_quad_indices(lo0, hi0, hi1, lo1);
            } else {
                mesh.push_quad_indices(lo0, lo1, hi1, hi0);
            }
        }
        mesh.compute_vertex_normals();
        mesh
    }

    /// Centreline of the light band at progress `t`.
    #[inline]
    pub fn band_point(&self, t: f32) -> Vec3 {
        self.point(t, self.outer_radius - self.band_radius_offset)
            + Vec3::Y * self.band_height_offset
    }

    /// Tube with a circular cross-section swept along the band centreline.
    pub fn build_light_band(&self) -> MeshData {
        let radial = self.band_radial_segments;
        if !self.is_valid() || radial < 3 || !(self.band_tube_radius > 0.0) {
            log::warn!("[geometry] invalid light band parameters: {:?}", self);
            return MeshData::empty();
        }
        let n = self.segments;
        let dt = 1.0 / n as f32;
        let mut mesh = MeshData::empty();
        for i in 0..=n {
            let t = i as f32 * dt;
            let center = self.band_point(t);
            let ahead = self.band_point((t + dt * 0.5).min(1.0));
            let behind = self.band_point((t - dt * 0.5).max(0.0));
            let tangent = (ahead - behind).try_normalize().unwrap_or(Vec3::X);
            let binormal = tangent.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::Z);
            let normal = binormal.cross(tangent);
            for j in 0..=radial {
                let phi = j as f32 / radial as f32 * TAU;
                let dir = normal * phi.cos() + binormal * phi.sin();
                mesh.push_vertex(
                    center + dir * self.band_tube_radius,
                    dir,
                    [t, j as f32 / radial as f32],
                );
            }
        }
        let ring = (radial + 1) as u32;
        for i in 0..n as u32 {
            for j in 0..radial as u32 {
                let a = i * ring + j;
                let b = (i + 1) * ring + j;
                mesh.push_quad_indices(a, b, b + 1, a + 1);
            }
        }
        mesh
    }

    /// Painting `index` of `count`, evenly spread along the outer wall and
    /// facing the axis.
    pub fn placement(&self, index: usize, count: usize) -> EntityTransform {
        let t = (index as f32 + 0.5) / count.max(1) as f32;
        let radial = self.radial(t);
        let position = self.point(t, self.outer_radius - self.wall_inset) + Vec3::Y * self.eye_height;
        EntityTransform::new(position, -radial)
    }
}
