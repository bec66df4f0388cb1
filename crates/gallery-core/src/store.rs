//! In-memory painting store.
//!
//! Each painting owns exactly three scene objects (surface, passepartout and
//! frame) which are created, rebuilt and destroyed together.

use crate::constants::{
    FRAME_BEVEL_STEPS, FRAME_COLOR, FRAME_DEPTH, FRAME_THICKNESS, PAINTING_BASE_HEIGHT,
    PAINTING_BASE_WIDTH, PASSEPARTOUT_COLOR, PASSEPARTOUT_DEPTH, PASSEPARTOUT_THICKNESS,
    PLACEHOLDER_COLOR,
};
use crate::error::StoreError;
use crate::geometry::{build_frame_geometry, FrameStyle};
use crate::layout::{fit_visual_size, EntityTransform};
use crate::mesh::{build_plane, Material, MeshData, MeshRole, Shading, TextureHandle};
use crate::scene::{ObjectId, Scene};
use fnv::FnvHashMap;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaintingMetadata {
    pub name: String,
    pub description: String,
    pub video_link: Option<String>,
    pub data_link: Option<String>,
    pub is_placeholder: bool,
    pub is_custom_upload: bool,
}

/// A decoded image already uploaded by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshRefs {
    pub surface: ObjectId,
    pub passepartout: ObjectId,
    pub frame: ObjectId,
}

#[derive(Clone, Debug)]
pub struct PaintingEntity {
    pub id: EntityId,
    pub transform: EntityTransform,
    pub visual_size: Vec2,
    pub metadata: PaintingMetadata,
    pub mesh_refs: MeshRefs,
    pub texture: Option<TextureHandle>,
}

impl PaintingEntity {
    /// Local bottom-left and bottom-right corners of the surface, in world space.
    pub fn bottom_corners(&self) -> (Vec3, Vec3) {
        let m = self.transform.matrix();
        let hw = self.visual_size.x * 0.5;
        let hh = self.visual_size.y * 0.5;
        (
            m.transform_point3(Vec3::new(-hw, -hh, 0.0)),
            m.transform_point3(Vec3::new(hw, -hh, 0.0)),
        )
    }
}

struct PaintingMeshes {
    surface: (MeshData, Mat4),
    passepartout: (MeshData, Mat4),
    frame: (MeshData, Mat4),
}

fn painting_meshes(transform: &EntityTransform, size: Vec2) -> PaintingMeshes {
    let mat_size = size + Vec2::splat(PASSEPARTOUT_THICKNESS * 2.0);
    PaintingMeshes {
        surface: (build_plane(size.x, size.y), transform.matrix()),
        passepartout: (
            build_frame_geometry(
                size.x,
                size.y,
                PASSEPARTOUT_THICKNESS,
                PASSEPARTOUT_DEPTH,
                FrameStyle::Flat,
            ),
            transform.offset(PASSEPARTOUT_DEPTH),
        ),
        frame: (
            build_frame_geometry(
                mat_size.x,
                mat_size.y,
                FRAME_THICKNESS,
                FRAME_DEPTH,
                FrameStyle::Stepped(FRAME_BEVEL_STEPS),
            ),
            transform.offset(FRAME_DEPTH),
        ),
    }
}

fn surface_material(texture: Option<TextureHandle>) -> Material {
    match texture {
        Some(t) => Material::textured(t),
        None => Material::solid(PLACEHOLDER_COLOR),
    }
}

pub struct EntityStore {
    entities: FnvHashMap<EntityId, PaintingEntity>,
    order: Vec<EntityId>,
    next_id: u32,
    max_size: Vec2,
    disposed: Vec<TextureHandle>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(Vec2::new(PAINTING_BASE_WIDTH, PAINTING_BASE_HEIGHT))
    }
}

impl EntityStore {
    /// `max_size` bounds every painting's visual size.
    pub fn new(max_size: Vec2) -> Self {
        Self {
            entities: FnvHashMap::default(),
            order: Vec::new(),
            next_id: 0,
            max_size,
            disposed: Vec::new(),
        }
    }

    /// Create a painting and its three scene objects.
    pub fn insert(
        &mut self,
        scene: &mut Scene,
        transform: EntityTransform,
        metadata: PaintingMetadata,
        image: Option<ImageInfo>,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let visual_size = match image {
            Some(img) => fit_visual_size(img.aspect_ratio(), self.max_size),
            None => self.max_size,
        };
        let texture = image.map(|i| i.texture);
        let meshes = painting_meshes(&transform, visual_size);
        let mesh_refs = MeshRefs {
            surface: scene.add(
                MeshRole::Surface,
                meshes.surface.0,
                meshes.surface.1,
                surface_material(texture),
                Some(id),
            ),
            passepartout: scene.add(
                MeshRole::Passepartout,
                meshes.passepartout.0,
                meshes.passepartout.1,
                Material::solid(PASSEPARTOUT_COLOR).with_shading(Shading::Fabric),
                Some(id),
            ),
            frame: scene.add(
                MeshRole::Frame,
                meshes.frame.0,
                meshes.frame.1,
                Material::solid(FRAME_COLOR).with_shading(Shading::WoodGrain),
                Some(id),
            ),
        };

        log::info!("[store] added {:?} '{}'", id, metadata.name);
        self.entities.insert(
            id,
            PaintingEntity {
                id,
                transform,
                visual_size,
                metadata,
                mesh_refs,
                texture,
            },
        );
        self.order.push(id);
        id
    }

    /// New painting hung at a wall point, facing along the wall normal.
    pub fn place_new(
        &mut self,
        scene: &mut Scene,
        position: Vec3,
        normal: Vec3,
        metadata: PaintingMetadata,
    ) -> EntityId {
        let transform = EntityTransform::new(position, normal);
        self.insert(scene, transform, metadata, None)
    }

    pub fn update_description(&mut self, id: EntityId, text: &str) -> Result<(), StoreError> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(StoreError::UnknownEntity(id))?;
        entity.metadata.description = text.trim().to_string();
        Ok(())
    }

    /// Swap the surface texture, refit the painting to the new aspect ratio
    /// and queue the previous texture for disposal.
    pub fn replace_image(
        &mut self,
        scene: &mut Scene,
        id: EntityId,
        image: ImageInfo,
    ) -> Result<(), StoreError> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(StoreError::UnknownEntity(id))?;

        if let Some(old) = entity.texture.replace(image.texture) {
            if old != image.texture {
                self.disposed.push(old);
            }
        }
        entity.metadata.is_custom_upload = true;
        entity.metadata.is_placeholder = false;
        entity.visual_size = fit_visual_size(image.aspect_ratio(), self.max_size);

        let meshes = painting_meshes(&entity.transform, entity.visual_size);
        let refs = entity.mesh_refs;
        let texture = entity.texture;
        scene.update(refs.surface, |o| {
            o.mesh = meshes.surface.0;
            o.model = meshes.surface.1;
            o.material = surface_material(texture);
        });
        scene.update(refs.passepartout, |o| {
            o.mesh = meshes.passepartout.0;
            o.model = meshes.passepartout.1;
        });
        scene.update(refs.frame, |o| {
            o.mesh = meshes.frame.0;
            o.model = meshes.frame.1;
        });
        log::info!("[store] replaced image of {:?}", id);
        Ok(())
    }

    /// Destroy a painting together with its three objects.
    pub fn remove(&mut self, scene: &mut Scene, id: EntityId) -> Result<PaintingEntity, StoreError> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or(StoreError::UnknownEntity(id))?;
        self.order.retain(|e| *e != id);
        scene.remove(entity.mesh_refs.surface);
        scene.remove(entity.mesh_refs.passepartout);
        scene.remove(entity.mesh_refs.frame);
        if let Some(t) = entity.texture {
            self.disposed.push(t);
        }
        Ok(entity)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&PaintingEntity> {
        self.entities.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Paintings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PaintingEntity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Textures no longer referenced by any painting; the renderer frees them.
    pub fn take_disposed_textures(&mut self) -> Vec<TextureHandle> {
        std::mem::take(&mut self.disposed)
    }
}
