//! Screen-space measurement labels.
//!
//! Each derived measurement gets a UI text node anchored to a world-space
//! point; labels are respawned when the plan changes and repositioned
//! every frame via viewport projection.

use bevy::prelude::*;

use crate::tools::landmarks::state::{DerivedPlan, rebuild_plan_on_event};
use constants::render_settings::LABEL_FONT_SIZE;

#[derive(Component)]
pub struct MeasurementLabel {
    pub anchor: Vec3,
}

/// Respawn label nodes from the derived measurement list.
pub fn sync_measurement_labels(
    derived: Res<DerivedPlan>,
    existing: Query<Entity, With<MeasurementLabel>>,
    mut commands: Commands,
) {
    if !derived.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    for measurement in &derived.0.measurements {
        commands.spawn((
            MeasurementLabel {
                anchor: measurement.anchor,
            },
            Text::new(measurement.display_text()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::axes(Val::Px(4.0), Val::Px(2.0)),
                ..default()
            },
        ));
    }
}

/// Project each label's world anchor into the viewport. Labels whose
/// anchor falls outside the view are hidden rather than clamped.
pub fn position_measurement_labels(
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut labels: Query<(&MeasurementLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut visibility) in &mut labels {
        match camera.world_to_viewport(cam_xf, label.anchor) {
            Ok(pos) => {
                node.left = Val::Px(pos.x + 10.0);
                node.top = Val::Px(pos.y - 10.0);
                *visibility = Visibility::Inherited;
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

pub struct MeasurementOverlayPlugin;

impl Plugin for MeasurementOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_measurement_labels.after(rebuild_plan_on_event),
                position_measurement_labels,
            ),
        );
    }
}
