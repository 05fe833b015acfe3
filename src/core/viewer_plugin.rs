use bevy::prelude::*;

use crate::core::components::{BezierSurface, BodyLight, FlyingBody};
use crate::core::modes::{CameraMode, ShadingMode, SkyboxKind};
use crate::core::patch_controller::PatchState;
use crate::core::simulation::SimulationContext;
use crate::management::viewer_config::ViewerConfig;
use crate::materials::bezier_patch::{BezierPatchMaterial, BezierPatchPlugin};
use crate::materials::lighting::LightingPlugin;
use crate::materials::scene_shading::SceneShadingPlugin;
use crate::spawning::light_spawning::{spawn_body_lights, spawn_street_lamps, spawn_sun};
use crate::spawning::mesh_spawning::spawn_bezier_surface;
use crate::spawning::scene_spawning::{spawn_flying_body, spawn_scene_from_path};
use crate::systems::{camera, debug_draw, environment, flight, lighting, overlay, patch};

/// Ordering of the per-frame work. Flight runs first so that everything
/// placed relative to the body sees this frame's pose. User edits land in
/// `Input`, ahead of everything that pushes state into lights and materials.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    Flight,
    Input,
    Follow,
    Render,
}

pub fn configure_viewer_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (ViewerSet::Flight, ViewerSet::Input, ViewerSet::Follow, ViewerSet::Render).chain(),
    );
}

pub struct ViewerPlugin {
    pub config: ViewerConfig,
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        let context = self.config.build_context().unwrap_or_else(|e| {
            error!("[Viewer] {}, starting with default simulation", e);
            SimulationContext::default()
        });

        configure_viewer_sets(app);
        app
            .insert_resource(self.config.clone())
            .insert_resource(context)
            .init_resource::<ClearColor>()
            .add_plugins(LightingPlugin)
            .add_plugins(BezierPatchPlugin)
            .add_plugins(SceneShadingPlugin)
            .register_type::<FlyingBody>()
            .register_type::<BodyLight>()
            .register_type::<BezierSurface>()
            .register_type::<CameraMode>()
            .register_type::<ShadingMode>()
            .register_type::<SkyboxKind>()
            .register_type::<PatchState>()
            .add_systems(Startup, (setup_world, overlay::spawn_status_overlay))
            .add_systems(Update, flight::advance_flight_system.in_set(ViewerSet::Flight))
            .add_systems(
                Update,
                (
                    flight::update_body_lights_system,
                    camera::apply_camera_mode_system,
                    patch::tick_patch_system,
                )
                    .in_set(ViewerSet::Follow),
            )
            .add_systems(
                Update,
                (
                    environment::apply_skybox_system,
                    environment::apply_fog_system,
                    (
                        lighting::gather_lighting_system,
                        lighting::convert_scene_materials_system,
                        lighting::apply_scene_lighting_system,
                        patch::upload_patch_system,
                    )
                        .chain(),
                    debug_draw::draw_control_net_system,
                    overlay::update_status_overlay,
                )
                    .in_set(ViewerSet::Render),
            );
    }
}

fn setup_world(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<BezierPatchMaterial>>,
) {
    info!("[Viewer] spawning scene {} and body {}", config.assets.scene_model, config.assets.body_model);
    spawn_scene_from_path(&mut commands, &asset_server, &config.assets.scene_model, Transform::default());
    spawn_flying_body(&mut commands, &asset_server, &config.assets.body_model);
    spawn_sun(&mut commands, &config.lights);
    spawn_street_lamps(&mut commands, &config.lights);
    spawn_body_lights(&mut commands, &config.lights);
    spawn_bezier_surface(&mut commands, &mut meshes, &mut materials, &config.patch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::bezier_patch::PatchRenderer;
    use crate::materials::lighting::FrameLighting;

    fn edit_elevation(mut sim: ResMut<SimulationContext>) {
        sim.patch.set_control_point_elevation(5, 0.7).unwrap();
    }

    #[test]
    fn input_edits_reach_patch_material_in_same_frame() {
        let mut app = App::new();
        configure_viewer_sets(&mut app);
        app.insert_resource(SimulationContext::default())
            .init_resource::<FrameLighting>()
            .init_resource::<Assets<BezierPatchMaterial>>()
            .add_systems(Update, patch::upload_patch_system.in_set(ViewerSet::Render))
            .add_systems(Update, edit_elevation.in_set(ViewerSet::Input));

        let renderer = {
            let mut materials = app.world_mut().resource_mut::<Assets<BezierPatchMaterial>>();
            PatchRenderer::new(&mut materials, [0.2, 0.2, 0.2])
        };
        let handle = renderer.material();
        app.world_mut().spawn((renderer, Visibility::Hidden, BezierSurface));

        app.update();
        let materials = app.world().resource::<Assets<BezierPatchMaterial>>();
        assert_eq!(materials.get(&handle).unwrap().params.control_points[5].z, 0.7);
    }
}
