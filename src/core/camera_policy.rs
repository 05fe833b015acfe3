use bevy_math::Vec3;
use serde::{Serialize, Deserialize};
use crate::core::modes::CameraMode;
use crate::core::pose::Pose;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraRig {
    pub start_position: Vec3,
    pub behind_offset: Vec3,    // y lifts the camera, |z| is the distance behind the body
    pub scene_position: Vec3,
    pub tracking_position: Vec3,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub fov_degrees: f32,
    pub min_fov_degrees: f32,
    pub max_fov_degrees: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        CameraRig {
            start_position: Vec3::new(0.0, 11.0, 8.0),
            behind_offset: Vec3::new(0.0, 2.0, -5.0),
            scene_position: Vec3::new(0.0, 25.0, 25.0),
            tracking_position: Vec3::new(0.0, 15.0, 15.0),
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            fov_degrees: 45.0,
            min_fov_degrees: 1.0,
            max_fov_degrees: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraPlacement {
    /// The user drives the camera.
    Unchanged,
    Placed { position: Vec3, target: Vec3 },
}

pub fn place_camera(mode: CameraMode, pose: &Pose, rig: &CameraRig) -> CameraPlacement {
    match mode {
        CameraMode::Free => CameraPlacement::Unchanged,
        CameraMode::BehindBody => {
            let position = pose.position - pose.direction * rig.behind_offset.z.abs()
                + Vec3::new(0.0, rig.behind_offset.y, 0.0);
            CameraPlacement::Placed { position, target: pose.position }
        }
        CameraMode::Scene => CameraPlacement::Placed {
            position: rig.scene_position,
            target: Vec3::ZERO,
        },
        CameraMode::StaticTracking => CameraPlacement::Placed {
            position: rig.tracking_position,
            target: pose.position,
        },
    }
}
