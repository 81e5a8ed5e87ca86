use bevy::prelude::*;

use super::state::{CollapseButton, LandmarkButton, LandmarkPanelUiState, LandmarkSelectionEvent};
use planning_core::LandmarkId;

const DIGIT_BINDINGS: [(KeyCode, LandmarkId); 10] = [
    (KeyCode::Digit1, LandmarkId::FemoralCenter),
    (KeyCode::Digit2, LandmarkId::HipCenter),
    (KeyCode::Digit3, LandmarkId::ProximalCanal),
    (KeyCode::Digit4, LandmarkId::DistalCanal),
    (KeyCode::Digit5, LandmarkId::MedialEpicondyle),
    (KeyCode::Digit6, LandmarkId::LateralEpicondyle),
    (KeyCode::Digit7, LandmarkId::PosteriorMedial),
    (KeyCode::Digit8, LandmarkId::PosteriorLateral),
    (KeyCode::Digit9, LandmarkId::DistalMedial),
    (KeyCode::Digit0, LandmarkId::DistalLateral),
];

/// Number keys 1-0 select landmark names in panel order.
pub fn landmark_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<LandmarkSelectionEvent>,
) {
    for (key, id) in DIGIT_BINDINGS {
        if keyboard.just_pressed(key) {
            events.write(LandmarkSelectionEvent(id));
        }
    }
}

pub fn landmark_button_interaction(
    mut interactions: Query<
        (&Interaction, &LandmarkButton, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut events: EventWriter<LandmarkSelectionEvent>,
) {
    for (interaction, button, mut bg) in &mut interactions {
        match interaction {
            Interaction::Pressed => {
                events.write(LandmarkSelectionEvent(button.0));
            }
            Interaction::Hovered => {
                *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.33));
            }
            Interaction::None => {
                *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28));
            }
        }
    }
}

pub fn collapse_button_interaction(
    interactions: Query<&Interaction, (Changed<Interaction>, With<CollapseButton>)>,
    mut state: ResMut<LandmarkPanelUiState>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            state.collapsed = !state.collapsed;
        }
    }
}
