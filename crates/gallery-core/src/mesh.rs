//! Plain mesh buffers plus the role/material tags that the picker and the
//! renderer dispatch on.

use glam::{Mat4, Vec3};

/// What a renderable object is for. Only `Surface` objects take part in
/// painting picks; `Structural` geometry is the target of wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshRole {
    Surface,
    Passepartout,
    Frame,
    Structural,
    LightBand,
}

impl MeshRole {
    #[inline]
    pub fn is_pickable(self) -> bool {
        matches!(self, MeshRole::Surface)
    }

    #[inline]
    pub fn is_placement_target(self) -> bool {
        matches!(self, MeshRole::Structural)
    }
}

/// Opaque handle to a texture owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Lit by ambient + headlight.
    Lit,
    /// Lit, with a procedural wood grain driven by the UVs.
    WoodGrain,
    /// Lit, with a fine woven pattern driven by the UVs.
    Fabric,
    /// Ignores lighting.
    Emissive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub texture: Option<TextureHandle>,
    pub shading: Shading,
}

impl Material {
    pub fn solid(color: [f32; 3]) -> Self {
        Self {
            color,
            texture: None,
            shading: Shading::Lit,
        }
    }

    pub fn textured(texture: TextureHandle) -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            texture: Some(texture),
            shading: Shading::Lit,
        }
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }
}

/// Interleaved vertex layout uploaded to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh with per-vertex normals and UVs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let idx = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv);
        idx
    }

    /// Two triangles (a, b, c) and (a, c, d).
    pub fn push_quad_indices(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    /// Iterate triangles as world-space corner triples.
    pub fn triangles(&self, model: Mat4) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(move |tri| {
            let fetch = |i: u32| {
                self.positions
                    .get(i as usize)
                    .map(|p| model.transform_point3(Vec3::from(*p)))
            };
            Some([fetch(tri[0])?, fetch(tri[1])?, fetch(tri[2])?])
        })
    }

    /// Axis-aligned bounds in local space, `None` when there are no vertices.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Recompute smooth normals by accumulating (area-weighted) face normals on
    /// shared vertices, then normalizing.
    pub fn compute_vertex_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if ia >= acc.len() || ib >= acc.len() || ic >= acc.len() {
                log::warn!("[geometry] index out of range while computing normals");
                continue;
            }
            let a = Vec3::from(self.positions[ia]);
            let b = Vec3::from(self.positions[ib]);
            let c = Vec3::from(self.positions[ic]);
            let face = (b - a).cross(c - a);
            acc[ia] += face;
            acc[ib] += face;
            acc[ic] += face;
        }
        self.normals = acc
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
            .collect();
    }

    /// Interleave attributes for upload. Missing normals/uvs are zero-filled.
    pub fn to_gpu_vertices(&self) -> Vec<GpuVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| GpuVertex {
                position: *p,
                normal: self.normals.get(i).copied().unwrap_or_default(),
                uv: self.uvs.get(i).copied().unwrap_or_default(),
            })
            .collect()
    }
}

/// Centred quad in the XY plane facing +Z, UVs spanning 0..1 (v down).
pub fn build_plane(width: f32, height: f32) -> MeshData {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let mut mesh = MeshData::empty();
    let a = mesh.push_vertex(Vec3::new(-hw, hh, 0.0), Vec3::Z, [0.0, 0.0]);
    let b = mesh.push_vertex(Vec3::new(-hw, -hh, 0.0), Vec3::Z, [0.0, 1.0]);
    let c = mesh.push_vertex(Vec3::new(hw, -hh, 0.0), Vec3::Z, [1.0, 1.0]);
    let d = mesh.push_vertex(Vec3::new(hw, hh, 0.0), Vec3::Z, [1.0, 0.0]);
    mesh.push_quad_indices(a, b, c, d);
    mesh
}
