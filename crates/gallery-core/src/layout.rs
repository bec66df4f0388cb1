//! Placement of paintings in world space.
//!
//! Both layouts yield the same [`EntityTransform`] so picking and focusing
//! never need to know how a painting got where it is.

use crate::constants::{GRID_SPACING, PAINTINGS_PER_ROW, PAINTING_BASE_HEIGHT, PAINTING_BASE_WIDTH};
use crate::spiral::SpiralParams;
use glam::{Mat4, Quat, Vec2, Vec3};

/// World-space placement of a painting: centre position and outward normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityTransform {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Default for EntityTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            normal: Vec3::Z,
        }
    }
}

impl EntityTransform {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal: normal.try_normalize().unwrap_or(Vec3::Z),
        }
    }

    /// Shortest rotation taking local +Z onto the outward normal.
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Z, self.normal)
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }

    /// Same orientation, pushed `distance` along the normal.
    #[inline]
    pub fn offset(&self, distance: f32) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position + self.normal * distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub items_per_row: usize,
    pub item_width: f32,
    pub item_height: f32,
    pub spacing: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            items_per_row: PAINTINGS_PER_ROW,
            item_width: PAINTING_BASE_WIDTH,
            item_height: PAINTING_BASE_HEIGHT,
            spacing: GRID_SPACING,
        }
    }
}

impl GridParams {
    #[inline]
    pub fn num_rows(&self, count: usize) -> usize {
        count.div_ceil(self.items_per_row.max(1))
    }

    pub fn transform(&self, index: usize, count: usize) -> EntityTransform {
        let per_row = self.items_per_row.max(1);
        let num_rows = self.num_rows(count) as f32;
        let row = (index / per_row) as f32;
        let col = (index % per_row) as f32;
        let x = (col - (per_row as f32 - 1.0) / 2.0) * (self.item_width + self.spacing);
        let y = ((num_rows - 1.0) / 2.0 - row) * (self.item_height + self.spacing)
            + self.item_height / 2.0;
        EntityTransform::new(Vec3::new(x, y, 0.0), Vec3::Z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMode {
    Grid(GridParams),
    Spiral(SpiralParams),
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::Grid(GridParams::default())
    }
}

impl LayoutMode {
    pub fn transform(&self, index: usize, count: usize) -> EntityTransform {
        match self {
            LayoutMode::Grid(grid) => grid.transform(index, count),
            LayoutMode::Spiral(spiral) => spiral.placement(index, count),
        }
    }

    pub fn layout(&self, count: usize) -> Vec<EntityTransform> {
        (0..count).map(|i| self.transform(i, count)).collect()
    }
}

/// Fit an image of the given aspect ratio (width / height) inside `max`,
/// preferring the full width.
pub fn fit_visual_size(aspect_ratio: f32, max: Vec2) -> Vec2 {
    if !(aspect_ratio > 0.0) || !aspect_ratio.is_finite() {
        return max;
    }
    let mut size = Vec2::new(max.x, max.x / aspect_ratio);
    if size.y > max.y {
        size = Vec2::new(max.y * aspect_ratio, max.y);
    }
    size
}
