use glam::{Quat, Vec3};

/// A cutting or reference plane: a position the plane passes through and a
/// rotation whose local +Z is the plane normal.
///
/// Orientation changes only through the explicit operations below, never
/// implicitly. Secondary planes start as a copy of their parent and then
/// accumulate independent rotation/translation offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub position: Vec3,
    pub rotation: Quat,
    pub rotatable: bool,
}

impl Plane {
    /// Plane through `point` facing `toward`: the normal is collinear with
    /// `toward - point`. This is how the distal plane perpendicular to the
    /// mechanical axis is built at the femoral center. `None` when the two
    /// points coincide and no direction exists.
    pub fn perpendicular_at(point: Vec3, toward: Vec3) -> Option<Self> {
        let normal = (toward - point).try_normalize()?;
        Some(Self {
            position: point,
            rotation: Quat::from_rotation_arc(Vec3::Z, normal),
            rotatable: false,
        })
    }

    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Copy of this plane marked adjustable, the starting point for a
    /// dependent varus/valgus or flexion plane.
    pub fn adjustable(&self) -> Self {
        Self {
            rotatable: true,
            ..*self
        }
    }

    /// Composes an incremental world-axis rotation with the current
    /// orientation. Repeated calls accumulate; nothing resets to the parent.
    pub fn rotated(&self, axis: Vec3, angle: f32) -> Self {
        Self {
            rotation: (Quat::from_axis_angle(axis, angle) * self.rotation).normalize(),
            ..*self
        }
    }

    /// Moves the plane along its own normal by `offset_mm`.
    pub fn translated_along_normal(&self, offset_mm: f32) -> Self {
        Self {
            position: self.position + self.normal() * offset_mm,
            ..*self
        }
    }

    /// Same orientation, repositioned to pass through `point`.
    pub fn through_parallel(&self, point: Vec3) -> Self {
        Self {
            position: point,
            ..*self
        }
    }

    /// Signed distance of `point` from the plane, along the normal.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.normal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::anatomy::PLANE_ROTATION_STEP;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn perpendicular_plane_faces_the_target() {
        let point = Vec3::new(-56.71, -89.15, 722.36);
        let toward = Vec3::new(-68.76, -107.15, 1151.44);

        let plane = Plane::perpendicular_at(point, toward).unwrap();
        let expected = (toward - point).normalize();

        assert!((plane.normal() - expected).length() < TOLERANCE);
        assert_eq!(plane.position, point);
        assert!(plane.signed_distance(point).abs() < TOLERANCE);
    }

    #[test]
    fn coincident_points_yield_no_plane() {
        let point = Vec3::new(-56.71, -89.15, 722.36);
        assert_eq!(Plane::perpendicular_at(point, point), None);
    }

    #[test]
    fn rotation_round_trip_restores_orientation() {
        let plane = Plane::perpendicular_at(Vec3::ZERO, Vec3::Z).unwrap().adjustable();
        let rotated = plane
            .rotated(Vec3::Y, PLANE_ROTATION_STEP)
            .rotated(Vec3::Y, -PLANE_ROTATION_STEP);

        assert!((rotated.normal() - plane.normal()).length() < 1e-5);
    }

    #[test]
    fn rotations_accumulate_instead_of_resetting() {
        let plane = Plane::perpendicular_at(Vec3::ZERO, Vec3::Z).unwrap().adjustable();
        let twice = plane
            .rotated(Vec3::Y, PLANE_ROTATION_STEP)
            .rotated(Vec3::Y, PLANE_ROTATION_STEP);
        let direct = plane.rotated(Vec3::Y, 2.0 * PLANE_ROTATION_STEP);

        assert!((twice.normal() - direct.normal()).length() < 1e-5);
    }

    #[test]
    fn translate_moves_along_normal_only() {
        let plane = Plane::perpendicular_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)).unwrap();
        let moved = plane.translated_along_normal(10.0);

        assert!((moved.position - Vec3::new(0.0, 0.0, 10.0)).length() < TOLERANCE);
        assert_eq!(moved.rotation, plane.rotation);
    }

    #[test]
    fn through_parallel_keeps_orientation() {
        let plane = Plane::perpendicular_at(Vec3::ZERO, Vec3::ONE).unwrap();
        let anchor = Vec3::new(5.0, -3.0, 2.0);
        let parallel = plane.through_parallel(anchor);

        assert_eq!(parallel.rotation, plane.rotation);
        assert!(parallel.signed_distance(anchor).abs() < TOLERANCE);
    }
}
