//! Keyboard adjustments for the resection plane stack.
//!
//! U/J tilt the varus/valgus plane, I/K tilt the flexion plane, R toggles
//! resection plane visibility. Each press accumulates one fixed rotation
//! step in the session; the dependency pass re-derives the plane stack
//! from the accumulated angles.

use bevy::prelude::*;

use crate::tools::landmarks::state::{PlanningSession, RebuildPlanEvent, rebuild_plan_on_event};
use constants::anatomy::PLANE_ROTATION_STEP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustablePlane {
    VarusValgus,
    Flexion,
}

#[derive(Event)]
pub struct PlaneAdjustEvent {
    pub plane: AdjustablePlane,
    /// Signed step count, +1 or -1.
    pub steps: i32,
}

pub fn plane_adjust_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<PlaneAdjustEvent>,
) {
    let bindings = [
        (KeyCode::KeyU, AdjustablePlane::VarusValgus, 1),
        (KeyCode::KeyJ, AdjustablePlane::VarusValgus, -1),
        (KeyCode::KeyI, AdjustablePlane::Flexion, 1),
        (KeyCode::KeyK, AdjustablePlane::Flexion, -1),
    ];
    for (key, plane, steps) in bindings {
        if keyboard.just_pressed(key) {
            events.write(PlaneAdjustEvent { plane, steps });
        }
    }
}

pub fn handle_plane_adjust_events(
    mut events: EventReader<PlaneAdjustEvent>,
    mut session: ResMut<PlanningSession>,
    mut rebuilds: EventWriter<RebuildPlanEvent>,
) {
    for event in events.read() {
        let step = event.steps as f32 * PLANE_ROTATION_STEP;
        match event.plane {
            AdjustablePlane::VarusValgus => session.adjustments.varus_valgus += step,
            AdjustablePlane::Flexion => session.adjustments.flexion += step,
        }
        info!(
            varus_valgus = session.adjustments.varus_valgus,
            flexion = session.adjustments.flexion,
            "plane adjustment applied"
        );
        rebuilds.write(RebuildPlanEvent);
    }
}

/// Visibility is display state only; the toggle never forces a geometry
/// rebuild. The scene side applies it to the spawned quad directly.
pub fn toggle_resection_visibility(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<PlanningSession>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    session.adjustments.resection_visible = !session.adjustments.resection_visible;
    info!(
        visible = session.adjustments.resection_visible,
        "resection plane visibility toggled"
    );
}

pub struct ResectionToolPlugin;

impl Plugin for ResectionToolPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaneAdjustEvent>().add_systems(
            Update,
            (
                plane_adjust_keyboard,
                handle_plane_adjust_events,
                toggle_resection_visibility,
            )
                .chain()
                .before(rebuild_plan_on_event),
        );
    }
}
