//! Turning clicks into commands for the focus machine and the store.

use crate::picking::Hit;
use crate::store::EntityId;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionCommand {
    FocusRequested(EntityId),
    DefocusRequested,
    PlacementRequested { point: Vec3, normal: Vec3 },
}

/// Primary click. Hitting the focused painting or empty space defocuses,
/// hitting any other painting focuses it.
pub fn resolve_click(hit: Option<EntityId>, focused: Option<EntityId>) -> Option<InteractionCommand> {
    match (hit, focused) {
        (Some(h), Some(f)) if h == f => Some(InteractionCommand::DefocusRequested),
        (Some(h), _) => Some(InteractionCommand::FocusRequested(h)),
        (None, Some(_)) => Some(InteractionCommand::DefocusRequested),
        (None, None) => None,
    }
}

/// Secondary click on structural geometry.
pub fn resolve_context_click(hit: Option<Hit>) -> Option<InteractionCommand> {
    hit.map(|h| InteractionCommand::PlacementRequested {
        point: h.point,
        normal: h.normal,
    })
}
