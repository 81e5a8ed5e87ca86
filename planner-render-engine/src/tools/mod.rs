/// Landmark picking tool: selection panel, surface clicks, edit drags.
pub mod landmarks;

/// Screen-space measurement label overlay.
pub mod measurements;

/// Resection plane adjustments and visibility toggle.
pub mod resection;
