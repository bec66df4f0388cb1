//! Camera focus state machine.
//!
//! ```text
//! Idle ──focus──▶ Animating(ToFocus) ──done──▶ Focused ──edit──▶ EditingDescription
//!  ▲                                            │  ▲                  │
//!  └──done── Animating(ToIdle) ◀──defocus───────┘  └──save/cancel─────┘
//! ```
//!
//! Focusing pushes the current camera pose (and the painting focused before,
//! if any) onto a stack; defocusing animates back to the top of that stack and
//! pops it, returning to the outer painting when there was one. While a tween
//! runs every request is dropped.

use crate::camera::CameraPose;
use crate::constants::{CAMERA_ANIMATION_SEC, CAMERA_FOCUS_DISTANCE};
use crate::store::EntityId;
use crate::tween::{Easing, Tween};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    ToFocus,
    ToIdle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPhase {
    Idle,
    Animating(Direction),
    Focused,
    EditingDescription,
}

/// Emitted by [`FocusMachine::tick`] when a tween completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTransition {
    /// Camera arrived in front of the painting.
    Reached(EntityId),
    /// Nested focus unwound back to an outer painting.
    Returned(EntityId),
    /// Back to the overview.
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SavedView {
    pose: CameraPose,
    previous: Option<EntityId>,
}

#[derive(Clone, Debug)]
pub struct FocusMachine {
    phase: FocusPhase,
    focused: Option<EntityId>,
    saved: Vec<SavedView>,
    tween: Option<Tween<CameraPose>>,
    duration_sec: f64,
    focus_distance: f32,
}

impl Default for FocusMachine {
    fn default() -> Self {
        Self::new(CAMERA_ANIMATION_SEC, CAMERA_FOCUS_DISTANCE)
    }
}

impl FocusMachine {
    pub fn new(duration_sec: f64, focus_distance: f32) -> Self {
        Self {
            phase: FocusPhase::Idle,
            focused: None,
            saved: Vec::new(),
            tween: None,
            duration_sec,
            focus_distance,
        }
    }

    #[inline]
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    #[inline]
    pub fn focused(&self) -> Option<EntityId> {
        self.focused
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, FocusPhase::Animating(_))
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.phase == FocusPhase::EditingDescription
    }

    /// Pose the next defocus returns to.
    #[inline]
    pub fn restoration_point(&self) -> Option<CameraPose> {
        self.saved.last().map(|s| s.pose)
    }

    #[inline]
    pub fn nesting_depth(&self) -> usize {
        self.saved.len()
    }

    /// Camera pose in front of a painting.
    pub fn focus_pose(&self, position: Vec3, normal: Vec3) -> CameraPose {
        CameraPose {
            position: position + normal.normalize_or_zero() * self.focus_distance,
            target: position,
        }
    }

    /// Start approaching `entity`. Accepted from `Idle` and from `Focused` on a
    /// different painting; everything else is dropped.
    pub fn request_focus(
        &mut self,
        entity: EntityId,
        position: Vec3,
        normal: Vec3,
        current: CameraPose,
        now_sec: f64,
    ) -> bool {
        match self.phase {
            FocusPhase::Idle => {}
            FocusPhase::Focused if self.focused != Some(entity) => {}
            _ => {
                log::debug!("[focus] focus request dropped in {:?}", self.phase);
                return false;
            }
        }
        self.saved.push(SavedView {
            pose: current,
            previous: self.focused,
        });
        self.focused = Some(entity);
        self.phase = FocusPhase::Animating(Direction::ToFocus);
        self.tween = Some(Tween::new(
            current,
            self.focus_pose(position, normal),
            now_sec,
            self.duration_sec,
            Easing::QuadraticOut,
        ));
        log::info!("[focus] approaching {:?}", entity);
        true
    }

    /// Start returning to the saved pose. Only accepted while `Focused`.
    pub fn request_defocus(&mut self, current: CameraPose, now_sec: f64) -> bool {
        if self.phase != FocusPhase::Focused {
            log::debug!("[focus] defocus request dropped in {:?}", self.phase);
            return false;
        }
        let Some(saved) = self.saved.last() else {
            log::warn!("[focus] focused without a saved view");
            self.phase = FocusPhase::Idle;
            self.focused = None;
            return false;
        };
        self.phase = FocusPhase::Animating(Direction::ToIdle);
        self.tween = Some(Tween::new(
            current,
            saved.pose,
            now_sec,
            self.duration_sec,
            Easing::QuadraticOut,
        ));
        log::info!("[focus] leaving {:?}", self.focused);
        true
    }

    pub fn begin_edit(&mut self) -> bool {
        if self.phase != FocusPhase::Focused {
            return false;
        }
        self.phase = FocusPhase::EditingDescription;
        true
    }

    pub fn end_edit(&mut self) -> bool {
        if self.phase != FocusPhase::EditingDescription {
            return false;
        }
        self.phase = FocusPhase::Focused;
        true
    }

    /// Advance the running tween. Returns the camera pose to apply (if
    /// animating) and the transition that completed this tick (if any).
    pub fn tick(&mut self, now_sec: f64) -> (Option<CameraPose>, Option<FocusTransition>) {
        let FocusPhase::Animating(direction) = self.phase else {
            return (None, None);
        };
        let Some(tween) = self.tween else {
            log::warn!("[focus] animating without a tween");
            self.phase = FocusPhase::Idle;
            return (None, None);
        };
        let pose = tween.sample(now_sec);
        if !tween.is_finished(now_sec) {
            return (Some(pose), None);
        }

        self.tween = None;
        let transition = match direction {
            Direction::ToFocus => {
                self.phase = FocusPhase::Focused;
                self.focused.map(FocusTransition::Reached)
            }
            Direction::ToIdle => {
                let previous = self.saved.pop().and_then(|s| s.previous);
                match previous {
                    Some(outer) => {
                        self.focused = Some(outer);
                        self.phase = FocusPhase::Focused;
                        Some(FocusTransition::Returned(outer))
                    }
                    None => {
                        self.focused = None;
                        self.saved.clear();
                        self.phase = FocusPhase::Idle;
                        Some(FocusTransition::Released)
                    }
                }
            }
        };
        log::info!("[focus] {:?}", transition);
        (Some(pose), transition)
    }

    /// Forget an outer painting that no longer exists. Its saved view is
    /// dropped, so unwinding skips straight past it. Returns whether the
    /// stack changed.
    pub fn forget(&mut self, entity: EntityId) -> bool {
        let before = self.saved.len();
        self.saved.retain(|s| s.previous != Some(entity));
        before != self.saved.len()
    }

    /// Drop focus without animating, e.g. when the focused painting is removed.
    pub fn reset(&mut self) -> Option<CameraPose> {
        let home = self.saved.first().map(|s| s.pose);
        self.phase = FocusPhase::Idle;
        self.focused = None;
        self.saved.clear();
        self.tween = None;
        home
    }
}
