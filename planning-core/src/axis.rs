use crate::landmark::{LandmarkId, LandmarkRegistry};
use glam::Vec3;

/// The named reference axes used for alignment planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Femoral center to hip center; primary alignment reference.
    Mechanical,
    /// Proximal to distal femoral canal.
    Anatomical,
    /// Trans-epicondylar axis, medial to lateral epicondyle.
    Tea,
    /// Posterior condylar axis, posterior medial to posterior lateral.
    Pca,
    /// TEA endpoints dropped onto the distal perpendicular plane.
    ProjectedTea,
}

impl AxisKind {
    /// Axes derived directly from landmark pairs. `ProjectedTea` is excluded;
    /// it comes out of the projection pass, not the registry.
    pub const LANDMARK_DERIVED: [AxisKind; 4] =
        [Self::Mechanical, Self::Anatomical, Self::Tea, Self::Pca];

    /// The landmark pair defining this axis.
    pub fn endpoints(self) -> (LandmarkId, LandmarkId) {
        match self {
            Self::Mechanical => (LandmarkId::FemoralCenter, LandmarkId::HipCenter),
            Self::Anatomical => (LandmarkId::ProximalCanal, LandmarkId::DistalCanal),
            Self::Tea | Self::ProjectedTea => {
                (LandmarkId::MedialEpicondyle, LandmarkId::LateralEpicondyle)
            }
            Self::Pca => (LandmarkId::PosteriorMedial, LandmarkId::PosteriorLateral),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mechanical => "mechanical axis",
            Self::Anatomical => "anatomical axis",
            Self::Tea => "TEA",
            Self::Pca => "PCA",
            Self::ProjectedTea => "projected TEA",
        }
    }
}

/// A named line segment. Pure value, recomputed whenever either endpoint
/// landmark moves; no hidden state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub kind: AxisKind,
    pub a: Vec3,
    pub b: Vec3,
}

impl Axis {
    pub fn new(kind: AxisKind, a: Vec3, b: Vec3) -> Self {
        Self { kind, a, b }
    }

    /// Unit direction from `a` toward `b`.
    pub fn direction(&self) -> Vec3 {
        (self.b - self.a).normalize()
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

/// Derives every landmark-pair axis whose two endpoints are present.
pub fn axes_from(registry: &LandmarkRegistry) -> Vec<Axis> {
    AxisKind::LANDMARK_DERIVED
        .into_iter()
        .filter_map(|kind| {
            let (a, b) = kind.endpoints();
            Some(Axis::new(kind, registry.position(a)?, registry.position(b)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_endpoints_are_returned_exactly() {
        let a = Vec3::new(-56.71, -89.15, 722.36);
        let b = Vec3::new(-68.76, -107.15, 1151.44);
        let axis = Axis::new(AxisKind::Mechanical, a, b);
        assert_eq!(axis.a, a);
        assert_eq!(axis.b, b);
    }

    #[test]
    fn axes_from_skips_incomplete_pairs() {
        let mut registry = LandmarkRegistry::new();
        registry.add(LandmarkId::FemoralCenter, Vec3::ZERO).unwrap();
        registry.add(LandmarkId::HipCenter, Vec3::Z).unwrap();
        registry.add(LandmarkId::MedialEpicondyle, Vec3::X).unwrap();
        // Lateral epicondyle missing: no TEA.

        let axes = axes_from(&registry);
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].kind, AxisKind::Mechanical);
    }

    #[test]
    fn direction_is_unit_length() {
        let axis = Axis::new(AxisKind::Anatomical, Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        let dir = axis.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }
}
