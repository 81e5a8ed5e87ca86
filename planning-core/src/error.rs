use crate::landmark::LandmarkId;
use thiserror::Error;

/// Failures the geometry layer can report.
///
/// State-machine guards keep `DuplicateLandmark` and most `LandmarkNotFound`
/// cases from ever reaching callers; `NoIntersection` is a genuine geometric
/// failure that invalidates one derived point, never the whole session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningError {
    /// Placement attempted for a landmark that is already present.
    #[error("landmark {0} is already placed")]
    DuplicateLandmark(LandmarkId),

    /// Operation referenced a landmark that has not been placed.
    #[error("landmark {0} has not been placed")]
    LandmarkNotFound(LandmarkId),

    /// Projection ray runs parallel to the target plane.
    #[error("projection ray does not intersect the target plane")]
    NoIntersection,
}
