use glam::Vec3;

/// Anatomical frame of the imported scan (right leg, supine):
/// +X lateral→medial, +Y posterior→anterior, +Z inferior→superior.
/// All planning geometry assumes this fixed model orientation.
pub const SUPERIOR: Vec3 = Vec3::Z;

/// Fixed direction used to drop reference points onto derived planes.
/// Runs down the scan's long axis; only well conditioned while planes
/// stay near their initial orientation (small adjustment angles).
pub const PROJECTION_DIRECTION: Vec3 = Vec3::NEG_Z;

/// World axis for varus/valgus (coronal) cut-plane adjustment.
pub const VARUS_VALGUS_AXIS: Vec3 = Vec3::Y;

/// World axis for flexion (sagittal) cut-plane adjustment.
pub const FLEXION_AXIS: Vec3 = Vec3::X;

/// Rotation applied per adjustment command, radians.
pub const PLANE_ROTATION_STEP: f32 = 0.1;

/// Proximal offset from the distal reference plane to the resection plane, mm.
pub const RESECTION_OFFSET_MM: f32 = 10.0;
