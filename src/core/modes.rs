use bevy::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum CameraMode {
    #[default]
    Free,
    BehindBody,
    Scene,
    StaticTracking,
}

impl CameraMode {
    pub const ALL: [CameraMode; 4] = [
        CameraMode::Free,
        CameraMode::BehindBody,
        CameraMode::Scene,
        CameraMode::StaticTracking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Free => "Free Camera",
            CameraMode::BehindBody => "Behind Plane Camera",
            CameraMode::Scene => "Scene Camera",
            CameraMode::StaticTracking => "Static Tracking Camera",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum ShadingMode {
    Flat,
    #[default]
    Phong,
    Gouraud,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 3] = [ShadingMode::Flat, ShadingMode::Phong, ShadingMode::Gouraud];

    pub fn label(&self) -> &'static str {
        match self {
            ShadingMode::Flat => "Flat Shading",
            ShadingMode::Phong => "Phong Shading",
            ShadingMode::Gouraud => "Gouraud Shading",
        }
    }

    /// Selector packed into the lighting uniform (`counts.y`).
    pub fn shader_index(&self) -> u32 {
        match self {
            ShadingMode::Flat => 0,
            ShadingMode::Phong => 1,
            ShadingMode::Gouraud => 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum SkyboxKind {
    #[default]
    Day,
    Night,
}

impl SkyboxKind {
    pub const ALL: [SkyboxKind; 2] = [SkyboxKind::Day, SkyboxKind::Night];

    pub fn label(&self) -> &'static str {
        match self {
            SkyboxKind::Day => "Day",
            SkyboxKind::Night => "Night",
        }
    }
}
