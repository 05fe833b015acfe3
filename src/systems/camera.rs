use bevy::prelude::*;
use crate::core::camera_policy::{place_camera, CameraPlacement};
use crate::core::components::MainCamera;
use crate::core::simulation::SimulationContext;
use crate::management::viewer_config::ViewerConfig;

pub fn apply_camera_mode_system(
    sim: Res<SimulationContext>,
    config: Res<ViewerConfig>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(pose) = sim.pose() else {
        return;
    };
    let CameraPlacement::Placed { position, target } = place_camera(sim.camera_mode, pose, &config.camera) else {
        return;
    };
    for mut transform in cameras.iter_mut() {
        transform.translation = position;
        transform.look_at(target, Vec3::Y);
    }
}
