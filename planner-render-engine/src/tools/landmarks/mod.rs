//! Landmark picking and editing tool.
//!
//! Keeps the anatomical landmark workflow in one place: a side panel (and
//! number keys) to choose a landmark name, surface clicks to place it, and
//! drag-to-reposition for landmarks carrying the transform gizmo.
//!
//! ## Architecture
//!
//! All decisions live in the `planning-core` picking state machine; the
//! systems here only translate Bevy input into its vocabulary and react to
//! the outcomes it returns:
//!
//! ### Placement mode
//! Active while the state machine is `Placing(name)`:
//! - Left click raycasts the scene and hands the classified hit list to
//!   the state machine
//! - The first bone-surface hit places the landmark; marker and plane
//!   quad hits in front of it are skipped
//! - The fresh landmark immediately carries the gizmo
//!
//! ### Edit mode
//! Active while the state machine is `Editing(name)`:
//! - Further clicks never place; the duplicate-placement guard holds
//! - Left drag slides the landmark along the bone surface under the cursor
//! - Escape detaches the gizmo and returns to idle
//!
//! ## Data flow
//!
//! ```text
//! PlanningSession (Resource)
//!   └─> registry + picking state machine + accumulated adjustments
//!
//! RebuildPlanEvent
//!   └─> rebuild_plan_on_event() runs the dependency pass
//!
//! DerivedPlan (Resource)
//!   └─> axes, planes, projections, measurements
//!   └─> scene sync systems respawn their entities from it
//! ```
//!
//! Every mutation path (placement, drag, adjustment keys, case seeding)
//! ends in a `RebuildPlanEvent`; nothing downstream is edited in place.

/// UI button interactions and number-key shortcuts.
pub mod interactions;

/// Selection routing, edit-mode dragging, and escape-to-deselect.
pub mod manipulation;

/// Scene raycast classification for the picking state machine.
pub mod picking;

/// Surface-click placement.
pub mod placement;

/// Session resources, events and components.
pub mod state;

/// Panel spawning and state-reflection systems.
pub mod ui;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

pub use state::{DerivedPlan, LandmarkPanelUiState, PlanningSession, RebuildPlanEvent};

use interactions::{
    collapse_button_interaction, landmark_button_interaction, landmark_keyboard_shortcuts,
};
use manipulation::{deselect_on_escape, drag_attached_landmark, handle_landmark_selection};
use placement::{handle_landmark_click, update_placement_preview};
use state::{LandmarkSelectionEvent, rebuild_plan_on_event};
use ui::{
    apply_collapse_state, reflect_landmark_buttons, reflect_status_text, spawn_landmark_panel,
};

// Registers the landmark panel, session resources, and picking systems.
pub struct LandmarkToolPlugin;

impl Plugin for LandmarkToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlanningSession>()
            .init_resource::<DerivedPlan>()
            .init_resource::<LandmarkPanelUiState>()
            .add_event::<RebuildPlanEvent>()
            .add_event::<LandmarkSelectionEvent>()
            .add_systems(Startup, spawn_landmark_panel)
            .add_systems(
                Update,
                (
                    landmark_keyboard_shortcuts,
                    landmark_button_interaction,
                    handle_landmark_selection,
                    deselect_on_escape,
                    (
                        update_placement_preview,
                        handle_landmark_click,
                        drag_attached_landmark,
                    )
                        .run_if(in_state(AppState::Running)),
                    rebuild_plan_on_event,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    collapse_button_interaction,
                    apply_collapse_state,
                    reflect_landmark_buttons,
                    reflect_status_text,
                ),
            );
    }
}
