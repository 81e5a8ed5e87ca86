use crate::landmark::{LandmarkId, LandmarkRegistry};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One record of the canned case list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CasePoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<CasePoint> for Vec3 {
    fn from(p: CasePoint) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

/// A canned planning case: ten landmark coordinates indexed positionally
/// (0 = femoral center … 9 = distal lateral, see [`LandmarkId::case_index`]).
/// This is the only wire format the engine consumes; it stands in for live
/// picking when no clinician is at the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanningCase {
    pub points: Vec<CasePoint>,
}

impl PlanningCase {
    /// The built-in demonstration case, a right femur scan.
    pub fn demo() -> Self {
        let raw = [
            (-56.71, -89.15, 722.36),  // femoral center
            (-68.76, -107.15, 1151.44), // hip center
            (-59.24, -94.43, 770.11),  // proximal canal
            (-57.38, -90.22, 731.57),  // distal canal
            (-97.33, -92.48, 717.25),  // medial epicondyle
            (-16.9, -87.62, 719.08),   // lateral epicondyle
            (-84.2, -118.31, 708.74),  // posterior medial
            (-30.55, -116.02, 711.63), // posterior lateral
            (-82.17, -85.9, 694.41),   // distal medial
            (-33.64, -83.75, 696.88),  // distal lateral
        ];
        Self {
            points: raw.into_iter().map(|(x, y, z)| CasePoint { x, y, z }).collect(),
        }
    }

    /// Coordinate of `id`, if the case carries that index.
    pub fn point(&self, id: LandmarkId) -> Option<Vec3> {
        self.points.get(id.case_index()).copied().map(Into::into)
    }

    /// Builds a registry of fixed (non-editable) landmarks from this case.
    pub fn seed_registry(&self) -> LandmarkRegistry {
        let mut registry = LandmarkRegistry::new();
        for id in LandmarkId::ALL {
            if let Some(position) = self.point(id) {
                // Ids are unique, so seeding a fresh registry cannot collide.
                let _ = registry.add_fixed(id, position);
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_case_has_ten_points_with_known_anchors() {
        let case = PlanningCase::demo();
        assert_eq!(case.points.len(), 10);
        assert_eq!(
            case.point(LandmarkId::FemoralCenter).unwrap(),
            Vec3::new(-56.71, -89.15, 722.36)
        );
        assert_eq!(
            case.point(LandmarkId::HipCenter).unwrap(),
            Vec3::new(-68.76, -107.15, 1151.44)
        );
    }

    #[test]
    fn seeding_creates_one_fixed_landmark_per_point() {
        let registry = PlanningCase::demo().seed_registry();
        assert_eq!(registry.len(), 10);
        assert!(registry.iter().all(|l| !l.mutable));
    }

    #[test]
    fn case_round_trips_through_json() {
        let case = PlanningCase::demo();
        let json = serde_json::to_string(&case).unwrap();
        let back: PlanningCase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, case);
    }
}
