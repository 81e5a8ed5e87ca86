//! Rebuild-from-state scene rendering.
//!
//! Nothing in the 3D scene is mutated in place: whenever the planning
//! session or its derived geometry changes, the affected marker, axis and
//! plane entities are despawned and respawned from current state. The
//! entity tree is therefore always a pure function of the session.

/// Axis segments rendered as thin stretched cuboids.
pub mod axes;

/// Landmark and projected-point sphere markers.
pub mod markers;

/// Translucent plane quads with per-plane visibility.
pub mod planes;

use bevy::prelude::*;

use crate::tools::landmarks::state::rebuild_plan_on_event;
use axes::sync_axis_segments;
use markers::{sync_landmark_markers, sync_projected_markers};
use planes::{apply_resection_visibility, sync_plane_quads};

/// Which derived plane a quad entity visualises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneRole {
    DistalPerpendicular,
    VarusValgus,
    Flexion,
    DistalReference,
    Resection,
}

#[derive(Component)]
pub struct PlaneQuad(pub PlaneRole);

#[derive(Component)]
pub struct AxisSegment;

#[derive(Component)]
pub struct ProjectedPointMarker;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // Sync runs after the dependency pass so change detection sees the
        // freshly swapped-in geometry within the same frame.
        app.add_systems(
            Update,
            (
                sync_landmark_markers,
                sync_projected_markers,
                sync_axis_segments,
                sync_plane_quads,
                apply_resection_visibility,
            )
                .after(rebuild_plan_on_event),
        );
    }
}
