use bevy::prelude::*;

use super::ProjectedPointMarker;
use crate::tools::landmarks::state::{DerivedPlan, LandmarkMarker, PlanningSession};
use constants::render_settings::{LANDMARK_MARKER_RADIUS, PROJECTED_POINT_RADIUS};

/// Respawn landmark sphere markers from registry state. The marker
/// carrying the transform gizmo renders highlighted.
pub fn sync_landmark_markers(
    session: Res<PlanningSession>,
    existing: Query<Entity, With<LandmarkMarker>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !session.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let attached = session.picking.attached();
    for landmark in session.registry.iter() {
        let highlighted = attached == Some(landmark.id);
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(LANDMARK_MARKER_RADIUS))),
            MeshMaterial3d(materials.add(marker_material(highlighted))),
            Transform::from_translation(landmark.position),
            LandmarkMarker(landmark.id),
            Name::new(format!("{}_marker", landmark.id)),
        ));
    }
}

/// Respawn projected-point markers from the derived geometry.
pub fn sync_projected_markers(
    derived: Res<DerivedPlan>,
    existing: Query<Entity, With<ProjectedPointMarker>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !derived.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    for reference in &derived.0.reference_projections {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(PROJECTED_POINT_RADIUS))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.95, 0.85, 0.1),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(reference.point),
            ProjectedPointMarker,
            Name::new(format!("{}_projection", reference.id)),
        ));
    }
}

fn marker_material(highlighted: bool) -> StandardMaterial {
    let base_color = if highlighted {
        Color::srgb(1.0, 0.8, 0.0)
    } else {
        Color::srgb(0.9, 0.1, 0.1)
    };
    StandardMaterial {
        base_color,
        emissive: if highlighted {
            LinearRgba::new(0.8, 0.6, 0.0, 1.0)
        } else {
            LinearRgba::BLACK
        },
        unlit: true,
        ..default()
    }
}
