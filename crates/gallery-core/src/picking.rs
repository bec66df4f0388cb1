//! Ray casting against scene objects.

use crate::camera::Ray;
use crate::mesh::MeshRole;
use crate::scene::{ObjectId, Scene};
use crate::store::EntityId;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub object: ObjectId,
    pub owner: Option<EntityId>,
    pub t: f32,
    pub point: Vec3,
    /// Geometric normal of the hit triangle, turned to face the ray origin.
    pub normal: Vec3,
}

/// Möller–Trumbore ray-triangle intersection. Double sided.
/// Returns `(t, u, v)` for hits in front of the origin.
pub fn ray_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<(f32, f32, f32)> {
    const EPSILON: f32 = 1e-8;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.dir.cross(edge2);
    let a = edge1.dot(h);

    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.dir.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    (t > EPSILON).then_some((t, u, v))
}

/// Nearest hit among objects whose role passes `accept`.
pub fn pick_nearest(scene: &Scene, ray: &Ray, accept: impl Fn(MeshRole) -> bool) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for obj in scene.iter().filter(|o| accept(o.role)) {
        for [a, b, c] in obj.mesh.triangles(obj.model) {
            let Some((t, _, _)) = ray_triangle(ray, a, b, c) else {
                continue;
            };
            if best.as_ref().is_some_and(|h| t >= h.t) {
                continue;
            }
            let mut normal = (b - a).cross(c - a).normalize_or_zero();
            if normal.dot(ray.dir) > 0.0 {
                normal = -normal;
            }
            best = Some(Hit {
                object: obj.id,
                owner: obj.owner,
                t,
                point: ray.at(t),
                normal,
            });
        }
    }
    best
}

/// Nearest painting surface under the ray.
pub fn pick_entity(scene: &Scene, ray: &Ray) -> Option<(EntityId, Hit)> {
    let hit = pick_nearest(scene, ray, MeshRole::is_pickable)?;
    hit.owner.map(|id| (id, hit))
}

/// Nearest wall/floor point for hanging a new painting.
pub fn pick_placement(scene: &Scene, ray: &Ray) -> Option<Hit> {
    pick_nearest(scene, ray, MeshRole::is_placement_target)
}
