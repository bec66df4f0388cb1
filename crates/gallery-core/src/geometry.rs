//! Frame and passepartout geometry.
//!
//! A cross-section profile is generated for each of the four corners of a
//! centred rectangle and then swept around it: every profile segment of one
//! corner is joined with the same segment of the next corner by a flat-shaded
//! quad. The result is a closed, frame-like ring with explicit per-face normals
//! and box-projected UVs.

use crate::constants::BEVEL_DEPTH_FRACTION;
use crate::mesh::MeshData;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub const NUM_FRAME_SIDES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStyle {
    /// Rectangular cross-section: 4 profile points per side.
    Flat,
    /// Staircase molding on the front face: `4 + 2 * steps` points per side.
    Stepped(usize),
}

impl FrameStyle {
    #[inline]
    pub fn profile_vertices_per_side(self) -> usize {
        match self {
            FrameStyle::Flat => 4,
            FrameStyle::Stepped(steps) => 4 + 2 * steps,
        }
    }
}

pub type SideProfile = SmallVec<[Vec3; 8]>;

/// Profile points for the four corners, all of identical length.
#[derive(Clone, Debug)]
pub struct FrameProfile {
    sides: [SideProfile; NUM_FRAME_SIDES],
}

impl FrameProfile {
    pub fn new(width: f32, height: f32, thickness: f32, depth: f32, style: FrameStyle) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        let corners = [
            Vec3::new(-hw, hh, 0.0),
            Vec3::new(hw, hh, 0.0),
            Vec3::new(hw, -hh, 0.0),
            Vec3::new(-hw, -hh, 0.0),
        ];
        let signs = [
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, -1.0),
        ];
        let back = Vec3::new(0.0, 0.0, -depth);
        let steps = match style {
            FrameStyle::Flat => 0,
            FrameStyle::Stepped(n) => n,
        };
        let step_z = if steps > 0 {
            depth * BEVEL_DEPTH_FRACTION / steps as f32
        } else {
            0.0
        };

        let sides = std::array::from_fn(|i| {
            let inner_front = corners[i];
            let outer_xy = inner_front.truncate() + signs[i] * thickness;
            let mut profile = SideProfile::new();
            profile.push(inner_front);
            for k in 1..=steps {
                let f = k as f32 / (steps + 1) as f32;
                let xy = inner_front.truncate().lerp(outer_xy, f);
                profile.push(xy.extend(-(k as f32 - 1.0) * step_z));
                profile.push(xy.extend(-(k as f32) * step_z));
            }
            let outer_front = outer_xy.extend(-(steps as f32) * step_z);
            profile.push(outer_front);
            profile.push(outer_xy.extend(0.0) + back);
            profile.push(inner_front + back);
            profile
        });
        Self { sides }
    }

    #[inline]
    pub fn vertices_per_side(&self) -> usize {
        self.sides[0].len()
    }

    #[inline]
    pub fn side(&self, i: usize) -> &[Vec3] {
        &self.sides[i % NUM_FRAME_SIDES]
    }

    /// Unique profile vertices, side by side.
    pub fn unique_vertices(&self) -> Vec<Vec3> {
        self.sides.iter().flat_map(|s| s.iter().copied()).collect()
    }

    pub fn is_uniform(&self) -> bool {
        let n = self.vertices_per_side();
        self.sides.iter().all(|s| s.len() == n)
    }
}

/// Build the swept frame mesh. Invalid parameters yield an empty mesh and a
/// diagnostic rather than an error.
pub fn build_frame_geometry(
    width: f32,
    height: f32,
    thickness: f32,
    depth: f32,
    style: FrameStyle,
) -> MeshData {
    let params = [width, height, thickness, depth];
    if params.iter().any(|p| !p.is_finite()) || width < 0.0 || height < 0.0 {
        log::warn!(
            "[geometry] invalid frame parameters w={} h={} t={} d={}",
            width,
            height,
            thickness,
            depth
        );
        return MeshData::empty();
    }
    if thickness <= 0.0 || depth <= 0.0 {
        log::warn!(
            "[geometry] frame needs positive thickness and depth (t={} d={})",
            thickness,
            depth
        );
        return MeshData::empty();
    }

    let profile = FrameProfile::new(width, height, thickness, depth, style);
    if !profile.is_uniform() {
        log::error!("[geometry] profile sides differ in length");
        return MeshData::empty();
    }
    let num_faces = profile.vertices_per_side();

    let quad_count = NUM_FRAME_SIDES * num_faces;
    let mut positions = Vec::with_capacity(quad_count * 4);
    let mut normals = Vec::with_capacity(quad_count * 4);
    let mut indices = Vec::with_capacity(quad_count * 6);

    for i_side in 0..NUM_FRAME_SIDES {
        let i_next_side = (i_side + 1) % NUM_FRAME_SIDES;
        for i_face in 0..num_faces {
            let i_next_face = (i_face + 1) % num_faces;

            // winding matters: it decides the face normal below
            let p0 = profile.side(i_side)[i_face];
            let p1 = profile.side(i_next_side)[i_face];
            let p2 = profile.side(i_next_side)[i_next_face];
            let p3 = profile.side(i_side)[i_next_face];

            let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();

            let base = positions.len() as u32;
            for p in [p0, p1, p2, p3] {
                positions.push(p);
                normals.push(normal);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    let vertices_per_side = 4 * num_faces;
    let uvs = compute_uvs(&profile.unique_vertices(), &positions, &normals, vertices_per_side);
    if uvs.len() != positions.len() {
        return MeshData::empty();
    }

    MeshData {
        positions: positions.iter().map(|p| p.to_array()).collect(),
        normals: normals.iter().map(|n| n.to_array()).collect(),
        uvs,
        indices,
    }
}

/// Index of the component with the largest magnitude; ties prefer x, then y.
#[inline]
pub fn dominant_axis(v: Vec3) -> usize {
    let a = v.abs();
    if a.x >= a.y && a.x >= a.z {
        0
    } else if a.y >= a.x && a.y >= a.z {
        1
    } else {
        2
    }
}

/// Box-projected texture coordinates.
///
/// Coordinates are normalized by the largest extent of the bounding box of
/// `unique_vertices` (not of the expanded per-face list). Vertices whose
/// `index / vertices_per_side` is odd get u and v swapped so grain runs along
/// every side of the frame.
pub fn compute_uvs(
    unique_vertices: &[Vec3],
    mesh_vertices: &[Vec3],
    mesh_normals: &[Vec3],
    vertices_per_side: usize,
) -> Vec<[f32; 2]> {
    if mesh_vertices.is_empty() || mesh_vertices.len() != mesh_normals.len() {
        log::warn!(
            "[geometry] uv input mismatch: {} vertices, {} normals",
            mesh_vertices.len(),
            mesh_normals.len()
        );
        return Vec::new();
    }

    let (v_min, v_max) = match unique_vertices.split_first() {
        Some((first, rest)) => rest
            .iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
        None => {
            log::warn!("[geometry] no profile vertices for uv bounds");
            (Vec3::ZERO, Vec3::ONE)
        }
    };

    let mut scale = (v_max - v_min).max_element();
    if !(scale > 0.0) || !scale.is_finite() {
        scale = 1.0;
    }

    let per_side = vertices_per_side.max(1);
    mesh_vertices
        .iter()
        .zip(mesh_normals)
        .enumerate()
        .map(|(i, (v, n))| {
            let d = (*v - v_min) / scale;
            let (u, w) = match dominant_axis(*n) {
                0 => (d.z, d.y),
                1 => (d.x, d.z),
                _ => (d.x, d.y),
            };
            if (i / per_side) % 2 == 1 {
                [w, u]
            } else {
                [u, w]
            }
        })
        .collect()
}
