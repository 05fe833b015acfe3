use bevy::prelude::*;
use crate::core::components::FlyingBody;

fn scene_handle(asset_server: &AssetServer, path: &str) -> Handle<Scene> {
    asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_string()))
}

pub(crate) fn spawn_scene_from_path(
    commands: &mut Commands,
    asset_server: &AssetServer,
    path: &str,
    transform: Transform,
) -> Entity {
    let filename = std::path::Path::new(path)
        .file_name()
        .and_then(|file_name| file_name.to_str())
        .unwrap_or(path)
        .to_string();

    debug!("[Spawn] scene {}", path);
    commands.spawn_empty()
        .insert(SceneRoot(scene_handle(asset_server, path)))
        .insert(transform)
        .insert(Name::new(filename))
        .id()
}

// The transform is overwritten from the flight pose every frame.
pub(crate) fn spawn_flying_body(
    commands: &mut Commands,
    asset_server: &AssetServer,
    path: &str,
) -> Entity {
    let entity = spawn_scene_from_path(commands, asset_server, path, Transform::default());
    commands.entity(entity)
        .insert(FlyingBody)
        .insert(Name::new("FlyingBody"));
    entity
}
