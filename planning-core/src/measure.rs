use glam::Vec3;

/// Euclidean distance between two points, millimetres.
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// A derived scalar distance anchored to a 3D location so the external
/// label renderer knows where to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: String,
    pub value_mm: f32,
    pub anchor: Vec3,
}

impl Measurement {
    pub fn display_text(&self) -> String {
        format!("{}: {:.1} mm", self.label, self.value_mm)
    }
}

/// Packages a distance for display, rounded to one decimal place.
pub fn format_measurement(label: impl Into<String>, value_mm: f32, anchor: Vec3) -> Measurement {
    Measurement {
        label: label.into(),
        value_mm: (value_mm * 10.0).round() / 10.0,
        anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Vec3::new(1.0, -2.0, 3.5);
        let b = Vec3::new(-4.0, 0.5, 9.0);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn measurement_rounds_to_one_decimal() {
        let m = format_measurement("distal medial resection", 9.4649, Vec3::ZERO);
        assert_eq!(m.value_mm, 9.5);
        assert_eq!(m.display_text(), "distal medial resection: 9.5 mm");
    }

    #[test]
    fn anchor_is_preserved_for_the_label_renderer() {
        let anchor = Vec3::new(-82.17, -85.9, 694.41);
        let m = format_measurement("x", 1.0, anchor);
        assert_eq!(m.anchor, anchor);
    }
}
