/// Orbit camera resource and controller.
pub mod camera;

/// Application state machine and loading progress tracking.
pub mod core;

/// Canned case and bone surface loading.
pub mod loading;

/// Rebuild-from-state rendering of markers, axes and planes.
pub mod scene;
