use bevy::prelude::*;
use crate::core::body_lights::{LightRig, SpotSettings};
use crate::core::components::{BodyLight, MainDirectionalLight, StreetLamp};

pub(crate) fn spot_light_from(settings: &SpotSettings) -> SpotLight {
    SpotLight {
        color: Color::srgb(settings.color[0], settings.color[1], settings.color[2]),
        intensity: settings.intensity,
        range: settings.range,
        inner_angle: settings.inner_degrees.to_radians(),
        outer_angle: settings.outer_degrees.to_radians(),
        shadows_enabled: false,
        ..default()
    }
}

pub(crate) fn spawn_spot_light(
    commands: &mut Commands,
    spot_light: SpotLight,
    transform: Transform,
    name: &str,
) -> Entity {
    commands.spawn_empty()
        .insert(spot_light)
        .insert(transform)
        .insert(Name::new(name.to_string()))
        .insert(InheritedVisibility::default())
        .id()
}

pub(crate) fn spawn_street_lamps(commands: &mut Commands, rig: &LightRig) {
    for (index, position) in rig.street_lamps.iter().enumerate() {
        let transform = Transform::from_translation(*position).looking_to(Vec3::NEG_Y, Vec3::Z);
        let entity = spawn_spot_light(commands, spot_light_from(&rig.street_lamp), transform, &format!("StreetLamp{}", index + 1));
        commands.entity(entity).insert(StreetLamp);
    }
}

// Placed every frame from the current pose.
pub(crate) fn spawn_body_lights(commands: &mut Commands, rig: &LightRig) {
    let nose = spawn_spot_light(commands, spot_light_from(&rig.nose), Transform::default(), "NoseLight");
    commands.entity(nose).insert(BodyLight::Nose);
    let belly = spawn_spot_light(commands, spot_light_from(&rig.belly), Transform::default(), "BellyLight");
    commands.entity(belly).insert(BodyLight::Belly);
}

pub(crate) fn spawn_sun(commands: &mut Commands, rig: &LightRig) -> Entity {
    commands.spawn_empty()
        .insert(DirectionalLight {
            shadows_enabled: true,
            illuminance: rig.sun_illuminance,
            color: Color::srgb(rig.day_color[0], rig.day_color[1], rig.day_color[2]),
            ..default()
        })
        .insert(Transform::default().looking_to(rig.sun_direction, Vec3::Z))
        .insert(Name::new("Sun"))
        .insert(InheritedVisibility::default())
        .insert(MainDirectionalLight)
        .id()
}
