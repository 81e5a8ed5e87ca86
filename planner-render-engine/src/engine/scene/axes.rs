use bevy::prelude::*;

use super::AxisSegment;
use crate::tools::landmarks::state::DerivedPlan;
use constants::render_settings::AXIS_LINE_WIDTH;
use planning_core::{Axis, AxisKind};

/// Respawn axis line segments from the derived geometry.
pub fn sync_axis_segments(
    derived: Res<DerivedPlan>,
    existing: Query<Entity, With<AxisSegment>>,
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

    let all = derived
        .0
        .axes
        .iter()
        .chain(derived.0.projected_tea.as_ref());
    for axis in all {
        spawn_axis_segment(&mut commands, &mut meshes, &mut materials, axis);
    }
}

fn spawn_axis_segment(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    axis: &Axis,
) {
    let length = axis.length();
    if length <= f32::EPSILON {
        return;
    }

    // Thin cuboid stretched along X, rotated onto the axis direction.
    let midpoint = (axis.a + axis.b) * 0.5;
    let rotation = Quat::from_rotation_arc(Vec3::X, axis.direction());

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(length, AXIS_LINE_WIDTH, AXIS_LINE_WIDTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: axis_colour(axis.kind),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(midpoint).with_rotation(rotation),
        AxisSegment,
        Name::new(axis.kind.label()),
    ));
}

fn axis_colour(kind: AxisKind) -> Color {
    match kind {
        AxisKind::Mechanical => Color::srgb(0.1, 0.85, 0.2),
        AxisKind::Anatomical => Color::srgb(0.15, 0.45, 0.95),
        AxisKind::Tea => Color::srgb(0.95, 0.9, 0.15),
        AxisKind::Pca => Color::srgb(0.85, 0.2, 0.85),
        AxisKind::ProjectedTea => Color::srgb(0.95, 0.55, 0.1),
    }
}
