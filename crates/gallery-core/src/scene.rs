//! Flat list of renderable objects tagged by role, plus the change log the
//! renderer drains to keep its GPU buffers in sync.

use crate::mesh::{Material, MeshData, MeshRole};
use crate::store::EntityId;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub role: MeshRole,
    pub mesh: MeshData,
    pub model: Mat4,
    pub material: Material,
    pub owner: Option<EntityId>,
}

impl SceneObject {
    /// World-space axis-aligned bounds.
    pub fn world_bounds(&self) -> Option<(Vec3, Vec3)> {
        let (lo, hi) = self.mesh.bounds()?;
        let corners = [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ];
        let mut it = corners.iter().map(|c| self.model.transform_point3(*c));
        let first = it.next()?;
        Some(it.fold((first, first), |(a, b), p| (a.min(p), b.max(p))))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneChange {
    Added(ObjectId),
    Updated(ObjectId),
    Removed(ObjectId),
}

#[derive(Default)]
pub struct Scene {
    objects: FnvHashMap<ObjectId, SceneObject>,
    next_id: u32,
    changes: Vec<SceneChange>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        role: MeshRole,
        mesh: MeshData,
        model: Mat4,
        material: Material,
        owner: Option<EntityId>,
    ) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(
            id,
            SceneObject {
                id,
                role,
                mesh,
                model,
                material,
                owner,
            },
        );
        self.changes.push(SceneChange::Added(id));
        id
    }

    /// Mutate an object in place and record the update.
    pub fn update(&mut self, id: ObjectId, f: impl FnOnce(&mut SceneObject)) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                f(obj);
                self.changes.push(SceneChange::Updated(id));
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let obj = self.objects.remove(&id)?;
        self.changes.push(SceneChange::Removed(id));
        Some(obj)
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    pub fn with_role(&self, role: MeshRole) -> impl Iterator<Item = &SceneObject> {
        self.objects.values().filter(move |o| o.role == role)
    }

    /// Pending changes since the last call, oldest first.
    pub fn take_changes(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.changes)
    }
}
