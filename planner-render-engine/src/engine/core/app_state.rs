use bevy::prelude::*;

/// Top-level application state. Interactive picking is gated on `Running`
/// so a click cannot land before the bone surfaces exist; the canned case
/// and its derived geometry render in either state.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub surfaces_spawned: bool,
    pub case_seeded: bool,
}

pub fn transition_when_loaded(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.surfaces_spawned {
        info!(
            case_seeded = progress.case_seeded,
            "surfaces ready, interactive planning enabled"
        );
        next_state.set(AppState::Running);
    }
}
