use crate::error::PlanningError;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of anatomical landmark names a clinician can mark.
///
/// Discriminants double as positional indices into the canned planning case
/// wire format (0 = femoral center, 9 = distal lateral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkId {
    FemoralCenter,
    HipCenter,
    ProximalCanal,
    DistalCanal,
    MedialEpicondyle,
    LateralEpicondyle,
    PosteriorMedial,
    PosteriorLateral,
    DistalMedial,
    DistalLateral,
}

impl LandmarkId {
    pub const ALL: [LandmarkId; 10] = [
        Self::FemoralCenter,
        Self::HipCenter,
        Self::ProximalCanal,
        Self::DistalCanal,
        Self::MedialEpicondyle,
        Self::LateralEpicondyle,
        Self::PosteriorMedial,
        Self::PosteriorLateral,
        Self::DistalMedial,
        Self::DistalLateral,
    ];

    /// Positional index of this landmark in the canned case list.
    pub fn case_index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FemoralCenter => "femoral center",
            Self::HipCenter => "hip center",
            Self::ProximalCanal => "proximal canal",
            Self::DistalCanal => "distal canal",
            Self::MedialEpicondyle => "medial epicondyle",
            Self::LateralEpicondyle => "lateral epicondyle",
            Self::PosteriorMedial => "posterior medial",
            Self::PosteriorLateral => "posterior lateral",
            Self::DistalMedial => "distal medial",
            Self::DistalLateral => "distal lateral",
        }
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A clinician-marked anatomical point. Identity is the id; at most one
/// landmark exists per id. Canned-case landmarks are not editable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub id: LandmarkId,
    pub position: Vec3,
    pub mutable: bool,
}

/// Named point storage. Knows nothing about rendering or picking; callers
/// run the derivation pass themselves after any mutation.
#[derive(Debug, Clone, Default)]
pub struct LandmarkRegistry {
    landmarks: BTreeMap<LandmarkId, Landmark>,
}

impl LandmarkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, id: LandmarkId) -> bool {
        self.landmarks.contains_key(&id)
    }

    /// Adds a live-picked (editable) landmark.
    pub fn add(&mut self, id: LandmarkId, position: Vec3) -> Result<(), PlanningError> {
        self.insert(id, position, true)
    }

    /// Adds a fixed landmark, used when seeding from the canned case.
    pub fn add_fixed(&mut self, id: LandmarkId, position: Vec3) -> Result<(), PlanningError> {
        self.insert(id, position, false)
    }

    fn insert(&mut self, id: LandmarkId, position: Vec3, mutable: bool) -> Result<(), PlanningError> {
        if self.exists(id) {
            return Err(PlanningError::DuplicateLandmark(id));
        }
        self.landmarks.insert(id, Landmark { id, position, mutable });
        Ok(())
    }

    pub fn get(&self, id: LandmarkId) -> Result<&Landmark, PlanningError> {
        self.landmarks
            .get(&id)
            .ok_or(PlanningError::LandmarkNotFound(id))
    }

    /// Position lookup for derivation code that treats absence as "skip".
    pub fn position(&self, id: LandmarkId) -> Option<Vec3> {
        self.landmarks.get(&id).map(|l| l.position)
    }

    pub fn reposition(&mut self, id: LandmarkId, position: Vec3) -> Result<(), PlanningError> {
        let landmark = self
            .landmarks
            .get_mut(&id)
            .ok_or(PlanningError::LandmarkNotFound(id))?;
        landmark.position = position;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_exists_then_duplicate_fails() {
        let mut registry = LandmarkRegistry::new();
        assert!(!registry.exists(LandmarkId::HipCenter));

        registry
            .add(LandmarkId::HipCenter, Vec3::new(1.0, 2.0, 3.0))
            .unwrap();
        assert!(registry.exists(LandmarkId::HipCenter));

        let err = registry
            .add(LandmarkId::HipCenter, Vec3::ZERO)
            .unwrap_err();
        assert_eq!(err, PlanningError::DuplicateLandmark(LandmarkId::HipCenter));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_and_reposition_unknown_fail_with_not_found() {
        let mut registry = LandmarkRegistry::new();
        assert_eq!(
            registry.get(LandmarkId::DistalCanal).unwrap_err(),
            PlanningError::LandmarkNotFound(LandmarkId::DistalCanal)
        );
        assert_eq!(
            registry
                .reposition(LandmarkId::DistalCanal, Vec3::ONE)
                .unwrap_err(),
            PlanningError::LandmarkNotFound(LandmarkId::DistalCanal)
        );
    }

    #[test]
    fn reposition_moves_without_duplicating() {
        let mut registry = LandmarkRegistry::new();
        registry.add(LandmarkId::FemoralCenter, Vec3::ZERO).unwrap();
        registry
            .reposition(LandmarkId::FemoralCenter, Vec3::new(0.0, 5.0, 0.0))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(LandmarkId::FemoralCenter).unwrap().position,
            Vec3::new(0.0, 5.0, 0.0)
        );
    }

    #[test]
    fn seeded_landmarks_are_not_mutable() {
        let mut registry = LandmarkRegistry::new();
        registry.add_fixed(LandmarkId::HipCenter, Vec3::ONE).unwrap();
        registry.add(LandmarkId::FemoralCenter, Vec3::ZERO).unwrap();

        assert!(!registry.get(LandmarkId::HipCenter).unwrap().mutable);
        assert!(registry.get(LandmarkId::FemoralCenter).unwrap().mutable);
    }
}
