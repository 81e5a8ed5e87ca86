use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::picking::scene_intersections;
use super::state::{LandmarkMarker, PlanningSession, RebuildPlanEvent};
use crate::engine::camera::cursor_ray;
use crate::engine::loading::surface_loader::BoneSurface;
use crate::engine::scene::{AxisSegment, PlaneQuad, ProjectedPointMarker};
use constants::render_settings::MOUSE_INTERSECTION_SPHERE_SIZE;
use planning_core::{ClickOutcome, HitKind, PickingState};

/// Cursor-follow sphere shown while a placement is armed.
#[derive(Component)]
pub struct PlacementPreview;

/// Despawn and respawn the preview sphere at the surface point the next
/// click would place on. No preview without a surface under the cursor.
pub fn update_placement_preview(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut ray_cast: MeshRayCast,
    surfaces: Query<(), With<BoneSurface>>,
    markers: Query<(), Or<(With<LandmarkMarker>, With<ProjectedPointMarker>)>>,
    axis_segments: Query<(), With<AxisSegment>>,
    plane_quads: Query<(), With<PlaneQuad>>,
    session: Res<PlanningSession>,
    existing_preview: Query<Entity, With<PlacementPreview>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in existing_preview.iter() {
        commands.entity(entity).despawn();
    }

    let PickingState::Placing(_) = session.picking.state() else {
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

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(MOUSE_INTERSECTION_SPHERE_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::hsv(0.0, 1.0, 1.0),
            emissive: LinearRgba::new(1.0, 1.0, 1.0, 1.0),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(hit.point),
        PlacementPreview,
        Name::new("placement_preview"),
    ));
}

/// Resolve a left click into a landmark placement. The state machine
/// decides whether the click places, and which intersection counts; this
/// system only supplies the ordered hit list and reacts to the outcome.
pub fn handle_landmark_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut ray_cast: MeshRayCast,
    surfaces: Query<(), With<BoneSurface>>,
    markers: Query<(), Or<(With<LandmarkMarker>, With<ProjectedPointMarker>)>>,
    axis_segments: Query<(), With<AxisSegment>>,
    plane_quads: Query<(), With<PlaneQuad>>,
    mut session: ResMut<PlanningSession>,
    mut rebuilds: EventWriter<RebuildPlanEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
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

    let session = &mut *session;
    match session.picking.surface_click(&hits, &mut session.registry) {
        Ok(ClickOutcome::Placed {
            id,
            position,
            detach,
        }) => {
            if let Some(previous) = detach {
                info!(landmark = %previous, "gizmo detached");
            }
            info!(landmark = %id, ?position, "landmark placed, gizmo attached");
            rebuilds.write(RebuildPlanEvent);
        }
        Ok(ClickOutcome::NoSurfaceHit) => {
            info!("click missed the bone surfaces");
        }
        Ok(ClickOutcome::Ignored) => {}
        Err(err) => warn!(%err, "placement rejected"),
    }
}
