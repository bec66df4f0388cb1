//! The whole gallery state behind one struct: camera, scene, paintings, focus,
//! panel and tooltip. The front-end forwards DOM events here and reads back
//! what to draw.

use crate::actions::{panel_buttons, resolve_action, ActionKind, ActionOutcome, PanelButtons};
use crate::camera::{screen_to_ndc, Camera, CameraPose, Ray};
use crate::config::GalleryConfig;
use crate::constants::{FLOOR_COLOR, LIGHT_BAND_COLOR, PLACEMENT_OFFSET, WALL_COLOR};
use crate::decode;
use crate::error::{ActionError, StoreError, UploadError};
use crate::feed::{placeholder_metadata, record_metadata, FeedEntry};
use crate::focus::{FocusMachine, FocusPhase, FocusTransition};
use crate::interaction::{resolve_click, resolve_context_click, InteractionCommand};
use crate::layout::LayoutMode;
use crate::lighting::{headlight, Headlight};
use crate::mesh::{Material, MeshData, MeshRole, Shading, TextureHandle};
use crate::movement::{apply_move, dolly, move_for_key, orbit, DragState};
use crate::panel::{panel_rect, InactivityTimer, PanelFade, PanelRect, Tooltip};
use crate::picking::{pick_entity, pick_placement};
use crate::room::{build_room, union_bounds};
use crate::scene::Scene;
use crate::spiral::SpiralParams;
use crate::store::{EntityId, EntityStore, ImageInfo, PaintingMetadata};
use glam::{Mat4, Vec2, Vec3};

/// Everything the front-end needs to lay out the action panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub entity: EntityId,
    pub rect: PanelRect,
    pub opacity: f32,
    pub description: String,
    pub buttons: PanelButtons,
}

pub struct GallerySession {
    config: GalleryConfig,
    pub camera: Camera,
    pub scene: Scene,
    store: EntityStore,
    focus: FocusMachine,
    panel: PanelFade,
    inactivity: InactivityTimer,
    tooltip: Option<Tooltip>,
    viewport: Vec2,
    drag: DragState,
    // set by a drag release so the click that follows is not a pick
    suppress_click: bool,
    next_texture: u32,
}

impl Default for GallerySession {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}

impl GallerySession {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            store: EntityStore::new(config.max_painting_size),
            focus: FocusMachine::new(config.animation_sec, config.focus_distance),
            panel: PanelFade::new(config.panel_fade_sec),
            config,
            camera: Camera::default(),
            scene: Scene::new(),
            inactivity: InactivityTimer::default(),
            tooltip: None,
            viewport: Vec2::new(1.0, 1.0),
            drag: DragState::default(),
            suppress_click: false,
            next_texture: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[inline]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    #[inline]
    pub fn phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    #[inline]
    pub fn focused(&self) -> Option<EntityId> {
        self.focus.focused()
    }

    #[inline]
    pub fn focus(&self) -> &FocusMachine {
        &self.focus
    }

    #[inline]
    pub fn panel(&self) -> &PanelFade {
        &self.panel
    }

    #[inline]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Fresh id for a texture the renderer is about to upload.
    pub fn new_texture_handle(&mut self) -> TextureHandle {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        handle
    }

    /// Create one painting per feed slot, then the surrounding structure.
    /// Slots without an image become placeholders. Call once per session.
    pub fn populate(&mut self, items: Vec<(FeedEntry, Option<ImageInfo>)>) -> usize {
        let count = items.len();
        let layout = self.config.layout;
        for (i, (entry, image)) in items.into_iter().enumerate() {
            let metadata = match (&entry, image) {
                (FeedEntry::Record(record), Some(_)) => record_metadata(record, i),
                _ => placeholder_metadata(&entry, i),
            };
            self.store
                .insert(&mut self.scene, layout.transform(i, count), metadata, image);
        }
        match layout {
            LayoutMode::Grid(_) => self.build_room(),
            LayoutMode::Spiral(params) => self.build_spiral(&params),
        }
        log::info!("[feed] populated {} paintings", count);
        count
    }

    fn build_room(&mut self) {
        let bounds = union_bounds(
            self.scene
                .iter()
                .filter(|o| o.owner.is_some())
                .filter_map(|o| o.world_bounds()),
        );
        for part in build_room(bounds) {
            log::debug!("[geometry] room part {}", part.name);
            self.add_structure(MeshRole::Structural, part.mesh, Material::solid(part.color));
        }
    }

    fn build_spiral(&mut self, params: &SpiralParams) {
        let structure = params.build_structure();
        self.add_structure(MeshRole::Structural, structure.ramp, Material::solid(FLOOR_COLOR));
        self.add_structure(MeshRole::Structural, structure.outer_wall, Material::solid(WALL_COLOR));
        self.add_structure(
            MeshRole::Structural,
            structure.inner_railing,
            Material::solid(WALL_COLOR),
        );
        self.add_structure(
            MeshRole::LightBand,
            structure.light_band,
            Material::solid(LIGHT_BAND_COLOR).with_shading(Shading::Emissive),
        );

        // Stand on the ramp facing the first painting.
        let start = params.point(0.0, (params.inner_radius + params.outer_radius) * 0.5)
            + Vec3::Y * params.eye_height;
        let target = self
            .store
            .iter()
            .next()
            .map(|e| e.transform.position)
            .unwrap_or_else(|| params.point(0.05, params.outer_radius) + Vec3::Y * params.eye_height);
        self.camera.set_pose(CameraPose {
            position: start,
            target,
        });
    }

    fn add_structure(&mut self, role: MeshRole, mesh: MeshData, material: Material) {
        if mesh.is_empty() {
            return;
        }
        self.scene.add(role, mesh, Mat4::IDENTITY, material, None);
    }

    /// Track the canvas size in CSS pixels. Idempotent.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
            self.camera.set_viewport(width, height);
        }
    }

    fn ray(&self, screen: Vec2) -> Ray {
        self.camera.ray_from_ndc(screen_to_ndc(screen, self.viewport))
    }

    /// Painting under a canvas pixel.
    pub fn pick(&self, screen: Vec2) -> Option<EntityId> {
        pick_entity(&self.scene, &self.ray(screen)).map(|(id, _)| id)
    }

    fn pointer_locked(&self) -> bool {
        self.focus.is_animating() || self.focus.is_editing()
    }

    /// Any pointer or keyboard input while focused brings the panel back and
    /// restarts the inactivity countdown.
    fn note_activity(&mut self, now_sec: f64) {
        if self.focus.phase() == FocusPhase::Focused {
            self.panel.fade_in(now_sec);
            self.inactivity.arm(now_sec, self.config.inactivity_sec);
        }
    }

    /// Primary button pressed on the canvas; may turn into an orbit drag.
    pub fn pointer_down(&mut self, screen: Vec2, now_sec: f64) {
        self.suppress_click = false;
        if self.pointer_locked() {
            return;
        }
        self.note_activity(now_sec);
        self.drag.begin(screen);
    }

    /// Primary button released. Returns true when the gesture was an orbit,
    /// in which case the click that follows is ignored.
    pub fn pointer_up(&mut self) -> bool {
        self.suppress_click = self.drag.end();
        self.suppress_click
    }

    #[inline]
    pub fn is_orbiting(&self) -> bool {
        self.drag.orbiting
    }

    pub fn pointer_move(&mut self, screen: Vec2, now_sec: f64) {
        self.note_activity(now_sec);
        if self.drag.active {
            if self.pointer_locked() {
                self.drag = DragState::default();
            } else if let Some(delta) = self.drag.advance(screen, self.config.drag_threshold_px) {
                orbit(
                    &mut self.camera,
                    delta,
                    self.viewport.y,
                    self.config.orbit_polar_margin,
                );
                self.tooltip = None;
                return;
            }
        }
        self.tooltip = if self.focus.phase() == FocusPhase::Idle {
            self.pick(screen)
                .and_then(|id| self.store.get(id))
                .map(|e| Tooltip {
                    text: e.metadata.name.clone(),
                    position: screen + Vec2::splat(self.config.tooltip_offset_px),
                })
        } else {
            None
        };
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip = None;
    }

    /// Primary click. Returns the command that was accepted, if any.
    pub fn click(&mut self, screen: Vec2, now_sec: f64) -> Option<InteractionCommand> {
        if std::mem::take(&mut self.suppress_click) {
            return None;
        }
        if self.pointer_locked() {
            log::debug!("[pick] click ignored in {:?}", self.focus.phase());
            return None;
        }
        let command = resolve_click(self.pick(screen), self.focus.focused())?;
        self.apply(command, now_sec).then_some(command)
    }

    /// Secondary click on a wall: hang a new painting there.
    pub fn context_click(&mut self, screen: Vec2, now_sec: f64) -> Option<EntityId> {
        let hit = pick_placement(&self.scene, &self.ray(screen));
        match resolve_context_click(hit)? {
            InteractionCommand::PlacementRequested { point, normal } => {
                self.note_activity(now_sec);
                Some(self.place_new(point, normal))
            }
            _ => None,
        }
    }

    /// Execute a command. Returns whether the state changed.
    pub fn apply(&mut self, command: InteractionCommand, now_sec: f64) -> bool {
        match command {
            InteractionCommand::FocusRequested(id) => self.request_focus(id, now_sec),
            InteractionCommand::DefocusRequested => self.request_defocus(now_sec),
            InteractionCommand::PlacementRequested { point, normal } => {
                self.place_new(point, normal);
                true
            }
        }
    }

    pub fn request_focus(&mut self, id: EntityId, now_sec: f64) -> bool {
        let Some(entity) = self.store.get(id) else {
            log::warn!("[focus] unknown painting {:?}", id);
            return false;
        };
        let (position, normal) = (entity.transform.position, entity.transform.normal);
        if !self
            .focus
            .request_focus(id, position, normal, self.camera.pose(), now_sec)
        {
            return false;
        }
        self.tooltip = None;
        self.panel.hide_now();
        self.inactivity.clear();
        true
    }

    pub fn request_defocus(&mut self, now_sec: f64) -> bool {
        if !self.focus.request_defocus(self.camera.pose(), now_sec) {
            return false;
        }
        self.tooltip = None;
        self.panel.hide_now();
        self.inactivity.clear();
        true
    }

    /// Hang an empty painting at a wall point.
    pub fn place_new(&mut self, point: Vec3, normal: Vec3) -> EntityId {
        let normal = normal.try_normalize().unwrap_or(Vec3::Z);
        let metadata = PaintingMetadata {
            name: format!("Painting {}", self.store.len() + 1),
            is_placeholder: true,
            ..Default::default()
        };
        self.store.place_new(
            &mut self.scene,
            point + normal * PLACEMENT_OFFSET,
            normal,
            metadata,
        )
    }

    /// Mouse wheel: hide the panel and dolly toward (`delta_y < 0`) or away
    /// from the target, one full step per wheel notch.
    pub fn wheel(&mut self, delta_y: f32, now_sec: f64) {
        self.panel.fade_out(now_sec);
        self.tooltip = None;
        if self.pointer_locked() {
            return;
        }
        let notches = (delta_y.abs() / self.config.wheel_notch_px.max(f32::EPSILON)).min(1.0);
        dolly(
            &mut self.camera,
            delta_y,
            self.config.dolly_step * notches,
            self.config.min_dolly_distance,
        );
    }

    /// Keyboard input. Returns true when the key was consumed.
    pub fn key_down(&mut self, key: &str, now_sec: f64) -> bool {
        if self.pointer_locked() {
            return false;
        }
        self.note_activity(now_sec);
        if key == "Escape" {
            return self.request_defocus(now_sec);
        }
        let Some(mv) = move_for_key(key) else {
            return false;
        };
        apply_move(
            &mut self.camera,
            mv,
            self.config.move_step,
            self.config.dolly_step,
            self.config.min_dolly_distance,
        );
        self.tooltip = None;
        true
    }

    /// Advance tweens and timers. Call once per animation frame.
    pub fn tick(&mut self, now_sec: f64) -> Option<FocusTransition> {
        let (pose, transition) = self.focus.tick(now_sec);
        if let Some(pose) = pose {
            self.camera.set_pose(pose);
        }
        match transition {
            Some(FocusTransition::Reached(_)) | Some(FocusTransition::Returned(_)) => {
                self.panel.fade_in(now_sec);
                self.inactivity.arm(now_sec, self.config.inactivity_sec);
            }
            Some(FocusTransition::Released) | None => {}
        }
        if self.focus.phase() == FocusPhase::Focused && self.inactivity.fire(now_sec) {
            self.panel.fade_out(now_sec);
            self.tooltip = None;
        }
        self.panel.tick(now_sec);
        transition
    }

    /// Enter description editing. Returns the text to prefill the editor with.
    pub fn begin_edit(&mut self) -> Option<String> {
        let id = self.focus.focused()?;
        let text = self.store.get(id)?.metadata.description.clone();
        if !self.focus.begin_edit() {
            return None;
        }
        self.inactivity.clear();
        Some(text)
    }

    pub fn save_edit(&mut self, text: &str, now_sec: f64) -> Result<(), StoreError> {
        if !self.focus.is_editing() {
            return Ok(());
        }
        if let Some(id) = self.focus.focused() {
            self.store.update_description(id, text)?;
            log::info!("[store] description of {:?} updated", id);
        }
        self.finish_edit(now_sec);
        Ok(())
    }

    pub fn cancel_edit(&mut self, now_sec: f64) {
        if self.focus.is_editing() {
            self.finish_edit(now_sec);
        }
    }

    fn finish_edit(&mut self, now_sec: f64) {
        self.focus.end_edit();
        self.inactivity.arm(now_sec, self.config.inactivity_sec);
    }

    /// Panel button press on the focused painting.
    pub fn trigger_action(&mut self, kind: ActionKind, now_sec: f64) -> Result<ActionOutcome, ActionError> {
        // the editor is open over the panel
        if self.focus.is_editing() {
            return Ok(ActionOutcome::Nothing);
        }
        if self.focus.phase() != FocusPhase::Focused {
            return Err(ActionError::NothingFocused);
        }
        let id = self.focus.focused().ok_or(ActionError::NothingFocused)?;
        self.note_activity(now_sec);
        let entity = self.store.get(id).ok_or(ActionError::NothingFocused)?;
        let outcome = resolve_action(kind, &entity.metadata)?;
        if outcome == ActionOutcome::BeginEdit && self.begin_edit().is_none() {
            return Err(ActionError::NothingFocused);
        }
        Ok(outcome)
    }

    /// Checks run before the selected file is read.
    pub fn check_upload(&self, mime: &str, size: u64) -> Result<EntityId, UploadError> {
        let id = self.focus.focused().ok_or(UploadError::NothingFocused)?;
        decode::validate_upload(mime, size, self.config.upload_max_bytes)?;
        Ok(id)
    }

    /// Show an uploaded image on `id`, the painting focused when the upload
    /// started. Refused if focus has moved on since.
    pub fn apply_upload(&mut self, id: EntityId, image: ImageInfo) -> Result<(), UploadError> {
        let settled = matches!(
            self.focus.phase(),
            FocusPhase::Focused | FocusPhase::EditingDescription
        );
        if !settled || self.focus.focused() != Some(id) {
            log::warn!("[upload] {:?} no longer focused; image discarded", id);
            return Err(UploadError::FocusMoved);
        }
        self.store.replace_image(&mut self.scene, id, image)?;
        log::info!("[upload] {:?} now shows a {}x{} image", id, image.width, image.height);
        Ok(())
    }

    /// Remove a painting; if it was in focus, jump back to the overview. An
    /// outer painting of a nested focus is skipped when unwinding.
    pub fn remove(&mut self, id: EntityId) -> Result<(), StoreError> {
        self.store.remove(&mut self.scene, id)?;
        if self.focus.focused() == Some(id) {
            if let Some(home) = self.focus.reset() {
                self.camera.set_pose(home);
            }
            self.panel.hide_now();
            self.inactivity.clear();
        } else if self.focus.forget(id) {
            log::debug!("[focus] dropped removed {:?} from the focus stack", id);
        }
        Ok(())
    }

    pub fn panel_view(&self) -> Option<PanelView> {
        if !self.panel.is_shown() {
            return None;
        }
        let id = self.focus.focused()?;
        let entity = self.store.get(id)?;
        Some(PanelView {
            entity: id,
            rect: panel_rect(&self.camera, entity, self.viewport, self.config.panel_height_px),
            opacity: self.panel.opacity(),
            description: entity.metadata.description.clone(),
            buttons: panel_buttons(&entity.metadata),
        })
    }

    pub fn headlight(&self) -> Headlight {
        headlight(self.camera.eye, self.focus.focused().is_some())
    }

    pub fn take_disposed_textures(&mut self) -> Vec<TextureHandle> {
        self.store.take_disposed_textures()
    }
}
