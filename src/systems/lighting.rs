use bevy::prelude::*;
use crate::core::simulation::SimulationContext;
use crate::management::viewer_config::ViewerConfig;
use crate::materials::lighting::{FrameLighting, SceneLighting};
use crate::materials::scene_shading::{SceneShadingMaterial, ShadingMaterialCache};

pub fn gather_lighting_system(
    sim: Res<SimulationContext>,
    config: Res<ViewerConfig>,
    mut frame: ResMut<FrameLighting>,
) {
    frame.0 = SceneLighting::for_frame(&sim, &config.lights);
}

// glTF scenes spawn their meshes over several frames; each one is switched
// over as soon as its source material has loaded.
pub fn convert_scene_materials_system(
    mut commands: Commands,
    frame: Res<FrameLighting>,
    standard: Res<Assets<StandardMaterial>>,
    mut shading: ResMut<Assets<SceneShadingMaterial>>,
    mut cache: ResMut<ShadingMaterialCache>,
    meshes: Query<(Entity, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (entity, material) in meshes.iter() {
        let Some(handle) = cache.convert(&material.0, &standard, &mut shading, &frame.0) else {
            continue;
        };
        commands.entity(entity)
            .remove::<MeshMaterial3d<StandardMaterial>>()
            .insert(MeshMaterial3d(handle));
    }
}

pub fn apply_scene_lighting_system(
    frame: Res<FrameLighting>,
    cache: Res<ShadingMaterialCache>,
    mut shading: ResMut<Assets<SceneShadingMaterial>>,
) {
    for handle in cache.handles() {
        let Some(material) = shading.get_mut(handle) else {
            continue;
        };
        if material.extension.lighting != frame.0 {
            material.extension.lighting = frame.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modes::ShadingMode;

    #[test]
    fn scene_meshes_follow_the_shading_mode() {
        let mut app = App::new();
        app.insert_resource(SimulationContext::default())
            .insert_resource(ViewerConfig::default())
            .init_resource::<FrameLighting>()
            .init_resource::<ShadingMaterialCache>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<SceneShadingMaterial>>()
            .add_systems(
                Update,
                (gather_lighting_system, convert_scene_materials_system, apply_scene_lighting_system).chain(),
            );

        let source = app.world_mut().resource_mut::<Assets<StandardMaterial>>().add(StandardMaterial::default());
        let mesh = app.world_mut().spawn(MeshMaterial3d(source)).id();

        app.world_mut().resource_mut::<SimulationContext>().shading_mode = ShadingMode::Flat;
        app.update();
        assert!(app.world().get::<MeshMaterial3d<StandardMaterial>>(mesh).is_none());
        let converted = app.world().get::<MeshMaterial3d<SceneShadingMaterial>>(mesh).unwrap().0.clone();

        app.world_mut().resource_mut::<SimulationContext>().shading_mode = ShadingMode::Gouraud;
        app.update();
        let materials = app.world().resource::<Assets<SceneShadingMaterial>>();
        assert_eq!(materials.get(&converted).unwrap().extension.lighting.shading(), 2);
    }
}
