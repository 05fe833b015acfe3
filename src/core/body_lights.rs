use bevy_math::{Quat, Vec3};
use serde::{Serialize, Deserialize};
use crate::core::pose::Pose;

const NOSE_OFFSET: f32 = 0.5;
const BELLY_OFFSET: f32 = 0.1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpotSettings {
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    pub inner_degrees: f32,
    pub outer_degrees: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LightRig {
    pub street_lamps: Vec<Vec3>,
    pub street_lamp: SpotSettings,
    pub nose: SpotSettings,
    pub belly: SpotSettings,
    pub sun_direction: Vec3,
    pub day_color: [f32; 3],
    pub night_color: [f32; 3],
    pub sun_illuminance: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        LightRig {
            street_lamps: vec![Vec3::new(6.66, 3.72, 1.67), Vec3::new(-7.0, 3.81, 4.46)],
            street_lamp: SpotSettings {
                color: [1.0, 0.95, 0.8],
                intensity: 200_000.0,
                range: 20.0,
                inner_degrees: 12.5,
                outer_degrees: 17.5,
            },
            nose: SpotSettings {
                color: [0.1, 1.0, 0.1],
                intensity: 100_000.0,
                range: 20.0,
                inner_degrees: 15.0,
                outer_degrees: 20.0,
            },
            belly: SpotSettings {
                color: [1.0, 0.2, 0.2],
                intensity: 150_000.0,
                range: 25.0,
                inner_degrees: 20.0,
                outer_degrees: 25.0,
            },
            sun_direction: Vec3::NEG_Y,
            day_color: [1.0, 1.0, 0.9],
            night_color: [0.5, 0.5, 0.7],
            sun_illuminance: 10_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotPlacement {
    pub position: Vec3,
    pub direction: Vec3,
}

pub fn nose_light(pose: &Pose) -> SpotPlacement {
    SpotPlacement {
        position: pose.position + pose.direction * NOSE_OFFSET,
        direction: pose.direction,
    }
}

/// Belly light aimed along `-up`, tilted by `pitch_degrees` about the
/// body's lateral axis and then by `roll_degrees` about its heading.
pub fn belly_light(pose: &Pose, pitch_degrees: f32, roll_degrees: f32) -> SpotPlacement {
    let lateral = pose.direction.cross(pose.up).normalize();
    let rotation = Quat::from_axis_angle(lateral, pitch_degrees.to_radians())
        * Quat::from_axis_angle(pose.direction, roll_degrees.to_radians());
    let direction = rotation * -pose.up;
    SpotPlacement {
        position: pose.position + direction * BELLY_OFFSET,
        direction,
    }
}
