use crate::error::PlanningError;
use crate::landmark::{LandmarkId, LandmarkRegistry};
use glam::Vec3;

/// What a pick ray hit. Only `Surface` hits can create a landmark; markers,
/// axis lines and plane quads are ignored when resolving a placement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Surface,
    Marker,
    AxisLine,
    Plane,
}

/// One entry of the collaborator's ordered intersection list, nearest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub kind: HitKind,
    pub point: Vec3,
}

impl Intersection {
    pub fn new(kind: HitKind, point: Vec3) -> Self {
        Self { kind, point }
    }
}

/// Placement/edit mode of the picking tool. Replaces the loose
/// `activeLandmark`/`isTransformMode` flag pair with one explicit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickingState {
    #[default]
    Idle,
    /// A name is selected and not yet placed; the next surface click places it.
    Placing(LandmarkId),
    /// The selected name already exists; interaction repositions it.
    Editing(LandmarkId),
}

/// Result of a landmark-name selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Name not yet placed; next surface click will place it.
    Placement(LandmarkId),
    /// Name already placed and editable. The external gizmo must detach from
    /// `detach` (if any) and attach to `attach`.
    Edit {
        attach: LandmarkId,
        detach: Option<LandmarkId>,
    },
    /// Name already placed but fixed (canned case); nothing to edit.
    Locked(LandmarkId),
}

/// Result of a surface-click event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// A landmark was created at the pick point. The gizmo attaches to it,
    /// detaching from `detach` first.
    Placed {
        id: LandmarkId,
        position: Vec3,
        detach: Option<LandmarkId>,
    },
    /// The ray met no physical surface. Normal outcome, not an error.
    NoSurfaceHit,
    /// Click arrived while idle, while editing, or for an already-placed
    /// name. Guard against duplicate placement; no state change.
    Ignored,
}

/// Governs whether a surface click creates a landmark or is ignored, and
/// tracks which landmark the external transform gizmo is attached to.
#[derive(Debug, Clone, Default)]
pub struct PickingStateMachine {
    state: PickingState,
    attached: Option<LandmarkId>,
}

impl PickingStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PickingState {
        self.state
    }

    /// Landmark the gizmo is currently attached to, if any.
    pub fn attached(&self) -> Option<LandmarkId> {
        self.attached
    }

    /// Handles a landmark-name selection from the external selector.
    pub fn select(&mut self, id: LandmarkId, registry: &LandmarkRegistry) -> SelectOutcome {
        if !registry.exists(id) {
            self.state = PickingState::Placing(id);
            return SelectOutcome::Placement(id);
        }

        let editable = registry.get(id).map(|l| l.mutable).unwrap_or(false);
        if !editable {
            self.state = PickingState::Idle;
            return SelectOutcome::Locked(id);
        }

        let detach = self.attached.filter(|previous| *previous != id);
        self.attached = Some(id);
        self.state = PickingState::Editing(id);
        SelectOutcome::Edit { attach: id, detach }
    }

    /// Drops the active selection and reports which landmark to detach from.
    pub fn clear_selection(&mut self) -> Option<LandmarkId> {
        self.state = PickingState::Idle;
        self.attached.take()
    }

    /// Handles a surface-click event given the collaborator's ordered
    /// intersection list. Placement only happens in `Placing` state for a
    /// name the registry does not have yet; everything else is a no-op.
    pub fn surface_click(
        &mut self,
        hits: &[Intersection],
        registry: &mut LandmarkRegistry,
    ) -> Result<ClickOutcome, PlanningError> {
        let PickingState::Placing(id) = self.state else {
            return Ok(ClickOutcome::Ignored);
        };
        if registry.exists(id) {
            return Ok(ClickOutcome::Ignored);
        }

        let Some(hit) = hits.iter().find(|h| h.kind == HitKind::Surface) else {
            return Ok(ClickOutcome::NoSurfaceHit);
        };

        registry.add(id, hit.point)?;

        // A freshly placed landmark immediately carries the gizmo, so a
        // follow-up drag repositions it without reselecting.
        let detach = self.attached.replace(id).filter(|previous| *previous != id);
        self.state = PickingState::Editing(id);
        Ok(ClickOutcome::Placed {
            id,
            position: hit.point,
            detach,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_hit(x: f32) -> Intersection {
        Intersection::new(HitKind::Surface, Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn selecting_unplaced_name_enters_placement_mode() {
        let registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();

        let outcome = machine.select(LandmarkId::FemoralCenter, &registry);
        assert_eq!(outcome, SelectOutcome::Placement(LandmarkId::FemoralCenter));
        assert_eq!(machine.state(), PickingState::Placing(LandmarkId::FemoralCenter));
    }

    #[test]
    fn click_with_surface_hit_places_landmark_and_attaches_gizmo() {
        let mut registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();
        machine.select(LandmarkId::FemoralCenter, &registry);

        let hits = [
            Intersection::new(HitKind::Marker, Vec3::ONE),
            surface_hit(4.0),
            surface_hit(9.0),
        ];
        let outcome = machine.surface_click(&hits, &mut registry).unwrap();

        // First surface-kind hit wins; the marker hit in front is skipped.
        assert_eq!(
            outcome,
            ClickOutcome::Placed {
                id: LandmarkId::FemoralCenter,
                position: Vec3::new(4.0, 0.0, 0.0),
                detach: None,
            }
        );
        assert!(registry.exists(LandmarkId::FemoralCenter));
        assert_eq!(machine.attached(), Some(LandmarkId::FemoralCenter));
        assert_eq!(machine.state(), PickingState::Editing(LandmarkId::FemoralCenter));
    }

    #[test]
    fn click_while_idle_changes_nothing() {
        let mut registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();

        let outcome = machine
            .surface_click(&[surface_hit(1.0)], &mut registry)
            .unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(registry.is_empty());
    }

    #[test]
    fn click_while_editing_is_ignored() {
        let mut registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();
        machine.select(LandmarkId::HipCenter, &registry);
        machine
            .surface_click(&[surface_hit(1.0)], &mut registry)
            .unwrap();

        let outcome = machine
            .surface_click(&[surface_hit(2.0)], &mut registry)
            .unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(LandmarkId::HipCenter).unwrap().position,
            Vec3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn click_without_surface_hit_is_a_non_event() {
        let mut registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();
        machine.select(LandmarkId::HipCenter, &registry);

        let hits = [Intersection::new(HitKind::Plane, Vec3::ONE)];
        let outcome = machine.surface_click(&hits, &mut registry).unwrap();
        assert_eq!(outcome, ClickOutcome::NoSurfaceHit);
        assert!(registry.is_empty());
        assert_eq!(machine.state(), PickingState::Placing(LandmarkId::HipCenter));
    }

    #[test]
    fn selecting_placed_name_enters_edit_mode_with_attach_detach() {
        let mut registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();

        machine.select(LandmarkId::FemoralCenter, &registry);
        machine
            .surface_click(&[surface_hit(1.0)], &mut registry)
            .unwrap();
        machine.select(LandmarkId::HipCenter, &registry);
        machine
            .surface_click(&[surface_hit(2.0)], &mut registry)
            .unwrap();
        assert_eq!(machine.attached(), Some(LandmarkId::HipCenter));

        let outcome = machine.select(LandmarkId::FemoralCenter, &registry);
        assert_eq!(
            outcome,
            SelectOutcome::Edit {
                attach: LandmarkId::FemoralCenter,
                detach: Some(LandmarkId::HipCenter),
            }
        );
        assert_eq!(machine.state(), PickingState::Editing(LandmarkId::FemoralCenter));
    }

    #[test]
    fn selecting_fixed_landmark_is_locked() {
        let mut registry = LandmarkRegistry::new();
        registry.add_fixed(LandmarkId::HipCenter, Vec3::ONE).unwrap();
        let mut machine = PickingStateMachine::new();

        let outcome = machine.select(LandmarkId::HipCenter, &registry);
        assert_eq!(outcome, SelectOutcome::Locked(LandmarkId::HipCenter));
        assert_eq!(machine.state(), PickingState::Idle);
    }

    #[test]
    fn clear_selection_detaches() {
        let mut registry = LandmarkRegistry::new();
        let mut machine = PickingStateMachine::new();
        machine.select(LandmarkId::FemoralCenter, &registry);
        machine
            .surface_click(&[surface_hit(1.0)], &mut registry)
            .unwrap();

        assert_eq!(machine.clear_selection(), Some(LandmarkId::FemoralCenter));
        assert_eq!(machine.state(), PickingState::Idle);
        assert_eq!(machine.attached(), None);
    }
}
