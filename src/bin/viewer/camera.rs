use bevy::app::{App, Plugin};
use bevy::prelude::*;
use bevy_atmosphere::plugin::AtmosphereCamera;
use flight_viewer::core::components::MainCamera;
use flight_viewer::core::modes::CameraMode;
use flight_viewer::core::simulation::SimulationContext;
use flight_viewer::core::viewer_plugin::ViewerSet;
use flight_viewer::management::viewer_config::ViewerConfig;
use crate::input_manager::InputStates;

const PITCH_LIMIT: f32 = 89.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, initialize_camera_system)
            .add_systems(Update, free_camera_controller_system.in_set(ViewerSet::Follow));
    }
}

// Yaw and pitch in degrees. Yaw -90 looks down -Z.
#[derive(Component, Debug)]
pub(crate) struct FreeLook {
    yaw: f32,
    pitch: f32,
    fov: f32,
}

impl FreeLook {
    fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    // Picks up where a placed camera left off.
    fn sync_from(&mut self, forward: Vec3) {
        self.yaw = forward.z.atan2(forward.x).to_degrees();
        self.pitch = forward.y.clamp(-1.0, 1.0).asin().to_degrees().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

pub(crate) fn initialize_camera_system(mut commands: Commands, config: Res<ViewerConfig>) {
    let rig = &config.camera;
    let look = FreeLook { yaw: -90.0, pitch: 0.0, fov: rig.fov_degrees };
    let cam_trans = Transform::from_translation(rig.start_position).looking_to(look.front(), Vec3::Y);

    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(Projection::Perspective(PerspectiveProjection {
            fov: rig.fov_degrees.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }))
        .insert(cam_trans)
        .insert(AtmosphereCamera::default())
        .insert(DistanceFog {
            color: Color::srgb(0.5, 0.5, 0.5),
            falloff: FogFalloff::Exponential { density: 0.0 },
            ..default()
        })
        .insert(Name::new("MainCamera"))
        .insert(MainCamera)
        .insert(look);
}

fn free_camera_controller_system(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    input: Res<InputStates>,
    sim: Res<SimulationContext>,
    config: Res<ViewerConfig>,
    mut last_mode: Local<Option<CameraMode>>,
    mut camera_query: Query<(&mut Transform, &mut FreeLook, &mut Projection), With<MainCamera>>,
) {
    let Ok((mut cam_trans, mut look, mut projection)) = camera_query.get_single_mut() else {
        return;
    };
    let entered = *last_mode != Some(sim.camera_mode);
    *last_mode = Some(sim.camera_mode);
    if sim.camera_mode != CameraMode::Free {
        return;
    }
    if entered {
        look.sync_from(cam_trans.forward().as_vec3());
    }
    // Looking around needs a captured cursor, so the panel stays usable.
    if sim.cursor_enabled {
        return;
    }
    let rig = &config.camera;

    if input.look_delta != Vec2::ZERO {
        look.yaw += input.look_delta.x * rig.mouse_sensitivity;
        look.pitch = (look.pitch - input.look_delta.y * rig.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let front = look.front();
        cam_trans.look_to(front, Vec3::Y);
    }

    let forward = cam_trans.forward().as_vec3();
    let right = cam_trans.right().as_vec3();
    let step = rig.move_speed * time.delta_secs();
    let mut translation = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        translation += forward;
    }
    if keys.pressed(KeyCode::KeyS) {
        translation -= forward;
    }
    if keys.pressed(KeyCode::KeyD) {
        translation += right;
    }
    if keys.pressed(KeyCode::KeyA) {
        translation -= right;
    }
    cam_trans.translation += translation * step;

    if input.scroll != 0.0 {
        look.fov = (look.fov - input.scroll).clamp(rig.min_fov_degrees, rig.max_fov_degrees);
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = look.fov.to_radians();
        }
    }
}
