use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;

use crate::engine::camera::ViewportCamera;
use crate::engine::core::app_state::LoadingProgress;

const FEMUR_MESH_PATH: &str = "models/right_femur.glb#Mesh0/Primitive0";
const TIBIA_MESH_PATH: &str = "models/right_tibia.glb#Mesh0/Primitive0";

/// Pickable bone geometry. Only meshes carrying this component can
/// resolve a landmark placement click.
#[derive(Component)]
pub struct BoneSurface;

#[derive(Resource, Default)]
pub struct SurfaceLoader {
    femur: Option<Handle<Mesh>>,
    tibia: Option<Handle<Mesh>>,
    spawned: bool,
}

/// Spawn femur and tibia once both meshes finish loading, then frame the
/// camera on their combined bounds.
pub fn spawn_surfaces_when_ready(
    mut loader: ResMut<SurfaceLoader>,
    asset_server: Res<AssetServer>,
    meshes: Res<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
    mut progress: ResMut<LoadingProgress>,
) {
    if loader.femur.is_none() {
        info!(femur = FEMUR_MESH_PATH, tibia = TIBIA_MESH_PATH, "loading bone surfaces");
        loader.femur = Some(asset_server.load(FEMUR_MESH_PATH));
        loader.tibia = Some(asset_server.load(TIBIA_MESH_PATH));
        return;
    }
    if loader.spawned {
        return;
    }

    let (Some(femur_handle), Some(tibia_handle)) = (loader.femur.clone(), loader.tibia.clone())
    else {
        return;
    };
    let (Some(femur_mesh), Some(tibia_mesh)) =
        (meshes.get(&femur_handle), meshes.get(&tibia_handle))
    else {
        return;
    };

    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for mesh in [femur_mesh, tibia_mesh] {
        if let Some(aabb) = mesh.compute_aabb() {
            min = min.min(Vec3::from(aabb.min()));
            max = max.max(Vec3::from(aabb.max()));
        }
    }

    commands.spawn((
        Mesh3d(femur_handle),
        MeshMaterial3d(materials.add(bone_material(Color::srgb_u8(0x24, 0x8b, 0x82)))),
        Transform::IDENTITY,
        BoneSurface,
        Name::new("femur_surface"),
    ));
    commands.spawn((
        Mesh3d(tibia_handle),
        MeshMaterial3d(materials.add(bone_material(Color::srgb_u8(0x97, 0x3a, 0x3c)))),
        Transform::IDENTITY,
        BoneSurface,
        Name::new("tibia_surface"),
    ));

    if min.x.is_finite() {
        let center = (min + max) * 0.5;
        let size = max - min;
        commands.insert_resource(ViewportCamera::framed_on(center, size));
    }

    loader.spawned = true;
    progress.surfaces_spawned = true;
    info!("bone surfaces spawned");
}

fn bone_material(base_color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color,
        perceptual_roughness: 0.9,
        ..default()
    }
}
