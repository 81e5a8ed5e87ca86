use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::picking::scene_intersections;
use super::state::{LandmarkMarker, LandmarkSelectionEvent, PlanningSession, RebuildPlanEvent};
use crate::engine::camera::cursor_ray;
use crate::engine::loading::surface_loader::BoneSurface;
use crate::engine::scene::{AxisSegment, PlaneQuad, ProjectedPointMarker};
use planning_core::{HitKind, PickingState, SelectOutcome};

/// Route a landmark-name selection through the state machine and report
/// the gizmo attach/detach it decided on.
pub fn handle_landmark_selection(
    mut events: EventReader<LandmarkSelectionEvent>,
    mut session: ResMut<PlanningSession>,
) {
    for LandmarkSelectionEvent(id) in events.read() {
        let session = &mut *session;
        match session.picking.select(*id, &session.registry) {
            SelectOutcome::Placement(id) => {
                info!(landmark = %id, "placement armed, next surface click places");
            }
            SelectOutcome::Edit { attach, detach } => {
                if let Some(previous) = detach {
                    info!(landmark = %previous, "gizmo detached");
                }
                info!(landmark = %attach, "gizmo attached, drag to reposition");
            }
            SelectOutcome::Locked(id) => {
                info!(landmark = %id, "landmark is fixed, editing disabled");
            }
        }
    }
}

/// While a landmark carries the gizmo, a left drag slides it along the
/// bone surface under the cursor.
pub fn drag_attached_landmark(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut ray_cast: MeshRayCast,
    surfaces: Query<(), With<BoneSurface>>,
    markers: Query<(), Or<(With<LandmarkMarker>, With<ProjectedPointMarker>)>>,
    axis_segments: Query<(), With<AxisSegment>>,
    plane_quads: Query<(), With<PlaneQuad>>,
    mut session: ResMut<PlanningSession>,
    mut marker_transforms: Query<(&LandmarkMarker, &mut Transform)>,
    mut rebuilds: EventWriter<RebuildPlanEvent>,
) {
    if !buttons.pressed(MouseButton::Left) {
        return;
    }
    let PickingState::Editing(id) = session.picking.state() else {
        return;
    };
    let Ok(window) = windows.single() else { return };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, cam_xf) else {
        return;
    };

    let hits = scene_intersections(
        &mut ray_cast,
        ray,
        &surfaces,
        &markers,
        &axis_segments,
        &plane_quads,
    );
    let Some(hit) = hits.iter().find(|h| h.kind == HitKind::Surface) else {
        return;
    };

    if session.registry.position(id) == Some(hit.point) {
        return;
    }
    match session.registry.reposition(id, hit.point) {
        Ok(()) => {
            // Move the marker in place so the drag reads instantly; the
            // respawn pass catches up on the same frame.
            for (marker, mut transform) in &mut marker_transforms {
                if marker.0 == id {
                    transform.translation = hit.point;
                }
            }
            rebuilds.write(RebuildPlanEvent);
        }
        Err(err) => warn!(landmark = %id, %err, "reposition rejected"),
    }
}

/// Escape drops the active selection and detaches the gizmo.
pub fn deselect_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<PlanningSession>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    if let Some(detached) = session.picking.clear_selection() {
        info!(landmark = %detached, "gizmo detached");
    }
}
