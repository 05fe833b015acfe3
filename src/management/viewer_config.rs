use std::fs::File;
use std::path::Path;
use bevy::prelude::*;
use ron::de::from_reader;
use serde::{Serialize, Deserialize};
use crate::core::body_lights::LightRig;
use crate::core::camera_policy::CameraRig;
use crate::core::flight_pose::{FlightPoseSolver, DEFAULT_BODY_SCALE};
use crate::core::patch_controller::{TessellationPatchController, DEFAULT_ANIMATION_SPEED, DEFAULT_RIPPLE_AMPLITUDE};
use crate::core::path_parameters::PathParameters;
use crate::core::simulation::SimulationContext;
use crate::core::viewer_error::ViewerError;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/viewer.ron";
pub const CONFIG_PATH_ENV: &str = "FLIGHT_VIEWER_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PatchSettings {
    pub animation_speed: f32,
    pub ripple_amplitude: f32,
    pub tessellation_level: u32,
    pub translation: Vec3,
    pub scale: Vec3,
    pub color: [f32; 3],
}

impl Default for PatchSettings {
    fn default() -> Self {
        PatchSettings {
            animation_speed: DEFAULT_ANIMATION_SPEED,
            ripple_amplitude: DEFAULT_RIPPLE_AMPLITUDE,
            tessellation_level: 32,
            translation: Vec3::new(-9.0, 6.0, 2.0),
            scale: Vec3::new(3.0, 4.0, 2.0),
            color: [0.2, 0.2, 0.2],
        }
    }
}

impl PatchSettings {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_scale(self.scale)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub scene_model: String,
    pub body_model: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            scene_model: "models/winter_scene.glb".to_string(),
            body_model: "models/jet.glb".to_string(),
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub path: PathParameters,
    pub body_scale: f32,
    pub patch: PatchSettings,
    pub camera: CameraRig,
    pub lights: LightRig,
    pub assets: AssetPaths,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            path: PathParameters::default(),
            body_scale: DEFAULT_BODY_SCALE,
            patch: PatchSettings::default(),
            camera: CameraRig::default(),
            lights: LightRig::default(),
            assets: AssetPaths::default(),
        }
    }
}

impl ViewerConfig {
    /// Builds the simulation state, rejecting values the solver or patch
    /// controller would not accept.
    pub fn build_context(&self) -> Result<SimulationContext, ViewerError> {
        let solver = FlightPoseSolver::with_scale(self.path, self.body_scale)?;
        let patch = TessellationPatchController::new(self.patch.animation_speed, self.patch.ripple_amplitude)?;
        if self.patch.tessellation_level == 0 {
            return Err(ViewerError::InvalidConfiguration("tessellation level must be at least 1".to_string()));
        }
        Ok(SimulationContext::new(solver, patch))
    }
}

pub fn load_viewer_config(path: impl AsRef<Path>) -> Result<ViewerConfig, ViewerError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ViewerError::ConfigIo {
        path: path.display().to_string(),
        source,
    })?;
    from_reader(file).map_err(|source| ViewerError::ConfigParse {
        path: path.display().to_string(),
        source,
    })
}

/// Config path from the environment, or the bundled default.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Loads the config, falling back to defaults when the file is absent,
/// unreadable or describes an invalid simulation.
pub fn load_or_default(path: impl AsRef<Path>) -> ViewerConfig {
    let path = path.as_ref();
    let config = match load_viewer_config(path) {
        Ok(config) => config,
        Err(ViewerError::ConfigIo { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!("[Config] {} not found, using defaults", path.display());
            return ViewerConfig::default();
        }
        Err(e) => {
            error!("[Config] {}, using defaults", e);
            return ViewerConfig::default();
        }
    };

    match config.build_context() {
        Ok(_) => {
            info!("[Config] loaded {}", path.display());
            config
        }
        Err(e) => {
            error!("[Config] rejected {}: {}, using defaults", path.display(), e);
            ViewerConfig::default()
        }
    }
}
