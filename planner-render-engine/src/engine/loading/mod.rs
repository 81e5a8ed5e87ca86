/// Canned case JSON loading and registry seeding.
pub mod case_loader;

/// Bone surface mesh loading and spawning.
pub mod surface_loader;
