//! Landmark-driven surgical planning geometry for knee arthroplasty.
//!
//! Turns clinician-marked anatomical landmarks on femur/tibia surfaces into
//! mechanical reference axes, cutting planes, projected reference points and
//! resection distances. The crate is deliberately renderer-free: picking
//! rays, meshes, gizmos and labels are external collaborators that feed
//! intersection lists in and take display primitives out.
//!
//! ## Derivation flow
//!
//! ```text
//! pick ray hits ──> PickingStateMachine ──> LandmarkRegistry
//!                                               │
//!                               rebuild() pass on every mutation
//!                                               ▼
//!                 axes ── planes ── projections ── measurements
//! ```
//!
//! Axes and planes are pure functions of landmark positions plus the
//! accumulated plane adjustments; nothing is cached or reactively tracked.
//! After any landmark or adjustment change the owner runs [`derive::rebuild`]
//! and swaps in the fresh [`derive::DerivedGeometry`].

/// Planning error types shared across the crate.
pub mod error;

/// Named landmark storage with add/lookup/reposition semantics.
pub mod landmark;

/// Placement/edit state machine governing what a surface click means.
pub mod picking;

/// Named anatomical axes derived from landmark pairs.
pub mod axis;

/// Cutting-plane construction and incremental rotation/translation.
pub mod plane;

/// Point-onto-plane projection along the fixed model direction.
pub mod project;

/// Euclidean distances and display-ready measurements.
pub mod measure;

/// The canned ten-point planning case used without live picking.
pub mod case;

/// Explicit rebuild pass recomputing all derived geometry.
pub mod derive;

pub use axis::{Axis, AxisKind, axes_from};
pub use case::PlanningCase;
pub use derive::{DerivedGeometry, PlanAdjustments, ReferencePoint, rebuild};
pub use error::PlanningError;
pub use landmark::{Landmark, LandmarkId, LandmarkRegistry};
pub use measure::{Measurement, distance, format_measurement};
pub use picking::{ClickOutcome, HitKind, Intersection, PickingState, PickingStateMachine, SelectOutcome};
pub use plane::Plane;
pub use project::project;
