use bevy::prelude::*;

use super::{PlaneQuad, PlaneRole};
use crate::tools::landmarks::state::{DerivedPlan, PlanningSession};
use constants::render_settings::{PLANE_ALPHA, PLANE_HALF_EXTENT};
use planning_core::Plane;

/// Respawn translucent plane quads from the derived geometry. The
/// resection quad honours the session's visibility toggle.
pub fn sync_plane_quads(
    derived: Res<DerivedPlan>,
    session: Res<PlanningSession>,
    existing: Query<Entity, With<PlaneQuad>>,
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

    let geometry = &derived.0;
    let quads = [
        (PlaneRole::DistalPerpendicular, &geometry.distal_perpendicular, Color::srgb(0.6, 0.6, 0.65), true),
        (PlaneRole::VarusValgus, &geometry.varus_valgus, Color::srgb(0.2, 0.4, 0.9), true),
        (PlaneRole::Flexion, &geometry.flexion, Color::srgb(0.6, 0.25, 0.85), true),
        (PlaneRole::DistalReference, &geometry.distal_reference, Color::srgb(0.2, 0.8, 0.35), true),
        (PlaneRole::Resection, &geometry.resection, Color::srgb(0.95, 0.35, 0.15), session.adjustments.resection_visible),
    ];

    for (role, plane, colour, visible) in quads {
        let Some(plane) = plane else { continue };
        spawn_plane_quad(&mut commands, &mut meshes, &mut materials, role, plane, colour, visible);
    }
}

/// Apply the resection visibility toggle to the live quad without waiting
/// for a geometry respawn.
pub fn apply_resection_visibility(
    session: Res<PlanningSession>,
    mut quads: Query<(&PlaneQuad, &mut Visibility)>,
) {
    if !session.is_changed() {
        return;
    }
    for (quad, mut visibility) in &mut quads {
        if quad.0 == PlaneRole::Resection {
            *visibility = if session.adjustments.resection_visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn spawn_plane_quad(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    role: PlaneRole,
    plane: &Plane,
    colour: Color,
    visible: bool,
) {
    // Rectangle lies in local XY facing +Z, so the plane rotation maps its
    // face normal straight onto the plane normal.
    let side = PLANE_HALF_EXTENT * 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(side, side))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour.with_alpha(PLANE_ALPHA),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::from_translation(plane.position).with_rotation(plane.rotation),
        PlaneQuad(role),
        if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        },
        Name::new(format!("{role:?}_quad")),
    ));
}
