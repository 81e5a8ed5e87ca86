use crate::error::PlanningError;
use crate::plane::Plane;
use glam::Vec3;

/// Below this, the direction counts as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Intersects the line through `point` along `direction` with `plane`.
///
/// The direction is the fixed model "through" axis
/// ([`constants::anatomy::PROJECTION_DIRECTION`]), not something derived
/// from the plane; that keeps projections stable for the fixed scan
/// orientation but is only valid for small plane adjustments. A direction
/// orthogonal to the plane normal fails loudly instead of returning an
/// arbitrary point.
pub fn project(point: Vec3, plane: &Plane, direction: Vec3) -> Result<Vec3, PlanningError> {
    let normal = plane.normal();
    let denom = direction.dot(normal);
    if denom.abs() <= PARALLEL_EPSILON {
        return Err(PlanningError::NoIntersection);
    }

    let t = (plane.position - point).dot(normal) / denom;
    Ok(point + direction * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::anatomy::PROJECTION_DIRECTION;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn projected_point_lies_on_plane_and_ray() {
        let plane = Plane::perpendicular_at(
            Vec3::new(-56.71, -89.15, 722.36),
            Vec3::new(-68.76, -107.15, 1151.44),
        )
        .unwrap();
        let source = Vec3::new(-97.33, -92.48, 717.25);

        let projected = project(source, &plane, PROJECTION_DIRECTION).unwrap();

        assert!(plane.signed_distance(projected).abs() < TOLERANCE);
        // The offset from source to projection is collinear with the ray.
        let offset = projected - source;
        assert!(offset.cross(PROJECTION_DIRECTION).length() < 1e-4);
    }

    #[test]
    fn parallel_direction_fails_with_no_intersection() {
        let plane = Plane::perpendicular_at(Vec3::ZERO, Vec3::Z).unwrap();
        let err = project(Vec3::new(1.0, 2.0, 3.0), &plane, Vec3::X).unwrap_err();
        assert_eq!(err, PlanningError::NoIntersection);
    }

    #[test]
    fn point_already_on_plane_projects_to_itself() {
        let plane = Plane::perpendicular_at(Vec3::ZERO, Vec3::Z).unwrap();
        let on_plane = Vec3::new(7.0, -2.0, 0.0);
        let projected = project(on_plane, &plane, PROJECTION_DIRECTION).unwrap();
        assert!((projected - on_plane).length() < TOLERANCE);
    }
}
