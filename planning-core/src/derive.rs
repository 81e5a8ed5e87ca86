//! The explicit dependency pass: every axis, plane, projection and
//! measurement is recomputed from current landmark positions plus the
//! accumulated plane adjustments. Nothing is reactively tracked; the owner
//! calls [`rebuild`] after each landmark or adjustment mutation and swaps
//! the result in wholesale.

use crate::axis::{Axis, AxisKind, axes_from};
use crate::landmark::{LandmarkId, LandmarkRegistry};
use crate::measure::{Measurement, distance, format_measurement};
use crate::plane::Plane;
use crate::project::project;
use constants::anatomy::{
    FLEXION_AXIS, PROJECTION_DIRECTION, RESECTION_OFFSET_MM, VARUS_VALGUS_AXIS,
};
use glam::Vec3;
use tracing::warn;

/// Accumulated clinician adjustments, radians. These survive landmark
/// edits: a rebuild re-applies them to freshly derived planes instead of
/// resetting to the parent orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanAdjustments {
    pub varus_valgus: f32,
    pub flexion: f32,
    pub resection_visible: bool,
}

impl Default for PlanAdjustments {
    fn default() -> Self {
        Self {
            varus_valgus: 0.0,
            flexion: 0.0,
            resection_visible: true,
        }
    }
}

/// A landmark dropped onto a derived plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub id: LandmarkId,
    pub point: Vec3,
}

/// Everything derivable from the current registry state. Quantities whose
/// prerequisite landmarks are missing, or whose projection failed, are
/// simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedGeometry {
    pub axes: Vec<Axis>,
    /// Plane through the femoral center, perpendicular to the mechanical axis.
    pub distal_perpendicular: Option<Plane>,
    /// Varus/valgus adjustment plane derived from the perpendicular plane.
    pub varus_valgus: Option<Plane>,
    /// Flexion adjustment plane derived from the varus/valgus plane.
    pub flexion: Option<Plane>,
    /// Plane through the distal medial landmark, parallel to the flexion plane.
    pub distal_reference: Option<Plane>,
    /// The resection reference, offset proximally from the distal reference.
    pub resection: Option<Plane>,
    pub projected_tea: Option<Axis>,
    /// Distal reference landmarks dropped onto the varus/valgus plane.
    pub reference_projections: Vec<ReferencePoint>,
    pub measurements: Vec<Measurement>,
}

/// Recomputes all derived geometry from landmark positions and adjustments.
pub fn rebuild(registry: &LandmarkRegistry, adjustments: &PlanAdjustments) -> DerivedGeometry {
    let mut out = DerivedGeometry {
        axes: axes_from(registry),
        ..Default::default()
    };

    let (Some(femoral_center), Some(hip_center)) = (
        registry.position(LandmarkId::FemoralCenter),
        registry.position(LandmarkId::HipCenter),
    ) else {
        // Without the mechanical axis there is no plane stack to build.
        return out;
    };

    let Some(perpendicular) = Plane::perpendicular_at(femoral_center, hip_center) else {
        // Coincident picks happen; a degenerate mechanical axis must not
        // poison the plane stack with non-finite orientations.
        warn!("femoral center and hip center coincide, plane stack skipped");
        return out;
    };
    let varus_valgus = perpendicular
        .adjustable()
        .rotated(VARUS_VALGUS_AXIS, adjustments.varus_valgus);
    let flexion = varus_valgus.rotated(FLEXION_AXIS, adjustments.flexion);

    out.projected_tea = projected_tea(registry, &perpendicular);

    for id in [LandmarkId::DistalMedial, LandmarkId::DistalLateral] {
        let Some(point) = registry.position(id) else {
            continue;
        };
        match project(point, &varus_valgus, PROJECTION_DIRECTION) {
            Ok(projected) => out.reference_projections.push(ReferencePoint {
                id,
                point: projected,
            }),
            Err(err) => warn!(landmark = %id, %err, "reference projection dropped"),
        }
    }

    if let Some(distal_medial) = registry.position(LandmarkId::DistalMedial) {
        let reference = flexion.through_parallel(distal_medial);
        let resection = reference.translated_along_normal(RESECTION_OFFSET_MM);

        out.measurements = resection_measurements(registry, &resection);
        out.distal_reference = Some(reference);
        out.resection = Some(resection);
    }

    out.distal_perpendicular = Some(perpendicular);
    out.varus_valgus = Some(varus_valgus);
    out.flexion = Some(flexion);
    out
}

fn projected_tea(registry: &LandmarkRegistry, plane: &Plane) -> Option<Axis> {
    let medial = registry.position(LandmarkId::MedialEpicondyle)?;
    let lateral = registry.position(LandmarkId::LateralEpicondyle)?;

    match (
        project(medial, plane, PROJECTION_DIRECTION),
        project(lateral, plane, PROJECTION_DIRECTION),
    ) {
        (Ok(a), Ok(b)) => Some(Axis::new(AxisKind::ProjectedTea, a, b)),
        _ => {
            warn!("projected TEA dropped: ray parallel to distal plane");
            None
        }
    }
}

/// Distances from the distal landmarks to the resection plane's reference
/// position. Deliberately point-to-anchor, not perpendicular plane
/// distance; this mirrors the measurement the tool has always displayed.
fn resection_measurements(registry: &LandmarkRegistry, resection: &Plane) -> Vec<Measurement> {
    [
        (LandmarkId::DistalMedial, "distal medial resection"),
        (LandmarkId::DistalLateral, "distal lateral resection"),
    ]
    .into_iter()
    .filter_map(|(id, label)| {
        let anchor = registry.position(id)?;
        Some(format_measurement(
            label,
            distance(anchor, resection.position),
            anchor,
        ))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::PlanningCase;

    #[test]
    fn empty_registry_derives_nothing() {
        let derived = rebuild(&LandmarkRegistry::new(), &PlanAdjustments::default());
        assert!(derived.axes.is_empty());
        assert!(derived.distal_perpendicular.is_none());
        assert!(derived.measurements.is_empty());
    }

    #[test]
    fn coincident_axis_landmarks_skip_the_plane_stack() {
        let mut registry = LandmarkRegistry::new();
        let point = Vec3::new(-56.71, -89.15, 722.36);
        registry.add(LandmarkId::FemoralCenter, point).unwrap();
        registry.add(LandmarkId::HipCenter, point).unwrap();

        let derived = rebuild(&registry, &PlanAdjustments::default());

        // The degenerate mechanical axis must not leak non-finite planes.
        assert!(derived.distal_perpendicular.is_none());
        assert!(derived.varus_valgus.is_none());
        assert!(derived.resection.is_none());
        assert!(derived.measurements.is_empty());
    }

    #[test]
    fn full_case_derives_the_complete_plane_stack() {
        let registry = PlanningCase::demo().seed_registry();
        let derived = rebuild(&registry, &PlanAdjustments::default());

        assert_eq!(derived.axes.len(), 4);
        assert!(derived.distal_perpendicular.is_some());
        assert!(derived.varus_valgus.is_some());
        assert!(derived.flexion.is_some());
        assert!(derived.distal_reference.is_some());
        assert!(derived.resection.is_some());
        assert!(derived.projected_tea.is_some());
        assert_eq!(derived.reference_projections.len(), 2);
        assert_eq!(derived.measurements.len(), 2);
    }

    #[test]
    fn resection_sits_ten_millimetres_proximal_of_the_reference() {
        let registry = PlanningCase::demo().seed_registry();
        let derived = rebuild(&registry, &PlanAdjustments::default());

        let reference = derived.distal_reference.unwrap();
        let resection = derived.resection.unwrap();
        let offset = resection.position - reference.position;

        assert!((offset.length() - RESECTION_OFFSET_MM).abs() < 1e-4);
        assert!((offset.normalize() - reference.normal()).length() < 1e-5);
    }

    #[test]
    fn adjustments_tilt_the_varus_valgus_plane_but_not_the_perpendicular() {
        let registry = PlanningCase::demo().seed_registry();
        let neutral = rebuild(&registry, &PlanAdjustments::default());
        let adjusted = rebuild(
            &registry,
            &PlanAdjustments {
                varus_valgus: 0.2,
                ..Default::default()
            },
        );

        assert_eq!(
            neutral.distal_perpendicular.unwrap().rotation,
            adjusted.distal_perpendicular.unwrap().rotation
        );
        let angle = neutral
            .varus_valgus
            .unwrap()
            .normal()
            .angle_between(adjusted.varus_valgus.unwrap().normal());
        // The normal has a small component along the rotation axis, so the
        // apparent tilt is marginally under the commanded angle.
        assert!((angle - 0.2).abs() < 2e-3);
    }

    #[test]
    fn flexion_composes_on_top_of_varus_valgus() {
        let registry = PlanningCase::demo().seed_registry();
        let adjustments = PlanAdjustments {
            varus_valgus: 0.1,
            flexion: 0.3,
            ..Default::default()
        };
        let derived = rebuild(&registry, &adjustments);

        let expected = derived
            .varus_valgus
            .unwrap()
            .rotated(FLEXION_AXIS, adjustments.flexion);
        assert!(
            (derived.flexion.unwrap().normal() - expected.normal()).length() < 1e-5
        );
    }

    #[test]
    fn moving_a_landmark_moves_dependent_geometry_on_rebuild() {
        let mut registry = LandmarkRegistry::new();
        registry.add(LandmarkId::FemoralCenter, Vec3::ZERO).unwrap();
        registry
            .add(LandmarkId::HipCenter, Vec3::new(0.0, 0.0, 400.0))
            .unwrap();

        let before = rebuild(&registry, &PlanAdjustments::default());
        registry
            .reposition(LandmarkId::FemoralCenter, Vec3::new(10.0, 0.0, 0.0))
            .unwrap();
        let after = rebuild(&registry, &PlanAdjustments::default());

        assert_eq!(before.axes[0].a, Vec3::ZERO);
        assert_eq!(after.axes[0].a, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(
            after.distal_perpendicular.unwrap().position,
            Vec3::new(10.0, 0.0, 0.0)
        );
    }
}
