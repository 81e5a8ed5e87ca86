pub const LANDMARK_MARKER_RADIUS: f32 = 2.0;
pub const PROJECTED_POINT_RADIUS: f32 = 1.4;
pub const MOUSE_INTERSECTION_SPHERE_SIZE: f32 = 1.2;

/// Half extent of rendered plane quads, mm. Planes are mathematically
/// infinite; this is display size only.
pub const PLANE_HALF_EXTENT: f32 = 60.0;
pub const PLANE_ALPHA: f32 = 0.35;

/// Cross-section width of axis line meshes, mm.
pub const AXIS_LINE_WIDTH: f32 = 0.6;

pub const LABEL_FONT_SIZE: f32 = 14.0;
