use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod tools;

use engine::camera::{ViewportCamera, camera_controller};
use engine::core::app_state::{AppState, LoadingProgress, transition_when_loaded};
use engine::loading::case_loader::{CaseLoader, PlanningCaseAsset, load_case_system};
use engine::loading::surface_loader::{SurfaceLoader, spawn_surfaces_when_ready};
use engine::scene::ScenePlugin;
use tools::landmarks::LandmarkToolPlugin;
use tools::measurements::MeasurementOverlayPlugin;
use tools::resection::ResectionToolPlugin;

fn main() {
    create_app().run();
}

/// Create the planning application with all tool plugins registered.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<PlanningCaseAsset>::new(&["json"]))
        .add_plugins(ScenePlugin)
        .add_plugins(LandmarkToolPlugin)
        .add_plugins(ResectionToolPlugin)
        .add_plugins(MeasurementOverlayPlugin);

    app.init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<CaseLoader>()
        .init_resource::<SurfaceLoader>()
        .insert_resource(ViewportCamera::default())
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                load_case_system,
                spawn_surfaces_when_ready,
                camera_controller,
                transition_when_loaded.run_if(in_state(AppState::Loading)),
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(Window {
            title: "Knee Arthroplasty Planner".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Setup camera and lighting. The camera is reframed once bone surfaces
/// finish loading and their combined bounds are known.
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-60.0, -260.0, 760.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}
