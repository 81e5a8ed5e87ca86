use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;

use super::state::LandmarkMarker;
use crate::engine::loading::surface_loader::BoneSurface;
use crate::engine::scene::{AxisSegment, PlaneQuad, ProjectedPointMarker};
use planning_core::{HitKind, Intersection};

/// Cast the pick ray against the scene and classify every hit for the
/// picking state machine, nearest first. Entities outside the planning
/// scene are dropped from the list.
pub fn scene_intersections(
    ray_cast: &mut MeshRayCast,
    ray: Ray3d,
    surfaces: &Query<(), With<BoneSurface>>,
    markers: &Query<(), Or<(With<LandmarkMarker>, With<ProjectedPointMarker>)>>,
    axis_segments: &Query<(), With<AxisSegment>>,
    plane_quads: &Query<(), With<PlaneQuad>>,
) -> Vec<Intersection> {
    ray_cast
        .cast_ray(ray, &MeshRayCastSettings::default())
        .iter()
        .filter_map(|(entity, hit)| {
            let kind = if surfaces.contains(*entity) {
                HitKind::Surface
            } else if markers.contains(*entity) {
                HitKind::Marker
            } else if axis_segments.contains(*entity) {
                HitKind::AxisLine
            } else if plane_quads.contains(*entity) {
                HitKind::Plane
            } else {
                return None;
            };
            Some(Intersection::new(kind, hit.point))
        })
        .collect()
}
