use bevy::prelude::*;

use planning_core::{
    DerivedGeometry, LandmarkId, LandmarkRegistry, PickingStateMachine, PlanAdjustments, rebuild,
};

// Resources

/// The complete planning state: landmark registry, picking state machine
/// and accumulated plane adjustments. Single source of truth the scene is
/// rebuilt from.
#[derive(Resource, Default)]
pub struct PlanningSession {
    pub registry: LandmarkRegistry,
    pub picking: PickingStateMachine,
    pub adjustments: PlanAdjustments,
}

/// Last output of the dependency pass. Swapped wholesale on every
/// [`RebuildPlanEvent`], never mutated piecemeal.
#[derive(Resource, Default)]
pub struct DerivedPlan(pub DerivedGeometry);

#[derive(Resource)]
pub struct LandmarkPanelUiState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}

impl Default for LandmarkPanelUiState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: 280.0,
            closed_width: 32.0,
        }
    }
}

// Events

/// Fired after any landmark or adjustment mutation; triggers the
/// dependency pass.
#[derive(Event)]
pub struct RebuildPlanEvent;

/// A landmark name was chosen, from the panel or a number key.
#[derive(Event)]
pub struct LandmarkSelectionEvent(pub LandmarkId);

// Components

/// Sphere marker for a placed landmark.
#[derive(Component)]
pub struct LandmarkMarker(pub LandmarkId);

#[derive(Component)]
pub struct LandmarkPanelRoot;
#[derive(Component)]
pub struct LandmarkPanelBody;
#[derive(Component)]
pub struct PanelHeaderNode;
#[derive(Component)]
pub struct PanelTitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct LandmarkButton(pub LandmarkId);
#[derive(Component)]
pub struct PickingStatusText;

/// Runs the dependency pass: recompute all derived geometry from the
/// session and swap the result in wholesale.
pub fn rebuild_plan_on_event(
    mut events: EventReader<RebuildPlanEvent>,
    session: Res<PlanningSession>,
    mut derived: ResMut<DerivedPlan>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    derived.0 = rebuild(&session.registry, &session.adjustments);
}
