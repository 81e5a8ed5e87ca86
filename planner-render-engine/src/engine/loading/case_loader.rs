use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::core::app_state::LoadingProgress;
use crate::tools::landmarks::state::{PlanningSession, RebuildPlanEvent};
use planning_core::PlanningCase;

const RELATIVE_CASE_PATH: &str = "cases/right_femur_demo.json";

/// JSON asset wrapper around the canned case wire format.
#[derive(bevy::asset::Asset, TypePath, Deserialize, Clone)]
#[serde(transparent)]
pub struct PlanningCaseAsset(pub PlanningCase);

#[derive(Resource, Default)]
pub struct CaseLoader {
    handle: Option<Handle<PlanningCaseAsset>>,
    seeded: bool,
}

/// Load the canned case JSON and seed the landmark registry once.
/// Seeded landmarks are fixed; live picking takes over for anything the
/// case does not carry.
pub fn load_case_system(
    mut loader: ResMut<CaseLoader>,
    asset_server: Res<AssetServer>,
    cases: Res<Assets<PlanningCaseAsset>>,
    mut session: ResMut<PlanningSession>,
    mut progress: ResMut<LoadingProgress>,
    mut rebuilds: EventWriter<RebuildPlanEvent>,
) {
    if loader.handle.is_none() {
        info!(path = RELATIVE_CASE_PATH, "loading canned case");
        loader.handle = Some(asset_server.load(RELATIVE_CASE_PATH));
        return;
    }

    if loader.seeded {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };
    let Some(case) = cases.get(handle) else {
        return;
    };

    session.registry = case.0.seed_registry();
    loader.seeded = true;
    progress.case_seeded = true;
    info!(landmarks = session.registry.len(), "canned case seeded");
    rebuilds.write(RebuildPlanEvent);
}
