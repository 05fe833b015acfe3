use bevy::prelude::*;
use crate::core::body_lights::{belly_light, nose_light, SpotPlacement};
use crate::core::components::{BodyLight, FlyingBody};
use crate::core::simulation::SimulationContext;

pub fn advance_flight_system(
    time: Res<Time>,
    mut sim: ResMut<SimulationContext>,
    mut bodies: Query<&mut Transform, With<FlyingBody>>,
) {
    let now = time.elapsed_secs();
    match sim.advance_flight(now) {
        Ok(pose) => {
            for mut transform in bodies.iter_mut() {
                *transform = pose.to_transform();
            }
        }
        Err(e) => warn!("[Flight] pose rejected at t={:.3}: {}", now, e),
    }
}

fn spot_transform(placement: SpotPlacement, up_hint: Vec3) -> Transform {
    Transform::from_translation(placement.position).looking_to(placement.direction, up_hint)
}

pub fn update_body_lights_system(
    sim: Res<SimulationContext>,
    mut lights: Query<(&BodyLight, &mut Transform)>,
) {
    let Some(pose) = sim.pose() else {
        return;
    };
    for (light, mut transform) in lights.iter_mut() {
        *transform = match light {
            BodyLight::Nose => spot_transform(nose_light(pose), pose.up),
            BodyLight::Belly => spot_transform(
                belly_light(pose, sim.belly_light_pitch(), sim.belly_light_roll()),
                pose.direction,
            ),
        };
    }
}
