use bevy::prelude::*;
use crate::core::flight_pose::FlightPoseSolver;
use crate::core::modes::{CameraMode, ShadingMode, SkyboxKind};
use crate::core::patch_controller::TessellationPatchController;
use crate::core::pose::Pose;
use crate::core::viewer_error::ViewerError;

pub const DEFAULT_FOG_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
pub const PITCH_LIMIT_DEGREES: f32 = 90.0;
pub const ROLL_LIMIT_DEGREES: f32 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogState {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl FogState {
    pub fn enabled(&self) -> bool {
        self.intensity > 0.0
    }
}

impl Default for FogState {
    fn default() -> Self {
        FogState {
            color: DEFAULT_FOG_COLOR,
            intensity: 0.0,
        }
    }
}

/// Everything the frame loop and the control panel share. Owned by the app
/// as a resource; fields with constraints are only reachable via setters.
#[derive(Resource)]
pub struct SimulationContext {
    solver: FlightPoseSolver,
    pose: Option<Pose>,
    pub patch: TessellationPatchController,
    pub camera_mode: CameraMode,
    pub shading_mode: ShadingMode,
    pub skybox: SkyboxKind,
    pub show_surface: bool,
    pub show_control_net: bool,
    pub cursor_enabled: bool,
    fog: FogState,
    belly_light_pitch: f32,
    belly_light_roll: f32,
}

impl Default for SimulationContext {
    fn default() -> Self {
        SimulationContext::new(FlightPoseSolver::default(), TessellationPatchController::default())
    }
}

impl SimulationContext {
    pub fn new(solver: FlightPoseSolver, patch: TessellationPatchController) -> Self {
        SimulationContext {
            solver,
            pose: None,
            patch,
            camera_mode: CameraMode::default(),
            shading_mode: ShadingMode::default(),
            skybox: SkyboxKind::default(),
            show_surface: false,
            show_control_net: false,
            cursor_enabled: false,
            fog: FogState::default(),
            belly_light_pitch: 0.0,
            belly_light_roll: 0.0,
        }
    }

    pub fn solver(&self) -> &FlightPoseSolver {
        &self.solver
    }

    /// Latest successfully computed pose.
    pub fn pose(&self) -> Option<&Pose> {
        self.pose.as_ref()
    }

    /// On failure the previous pose is kept.
    pub fn advance_flight(&mut self, time: f32) -> Result<Pose, ViewerError> {
        let pose = self.solver.compute_pose(time)?;
        self.pose = Some(pose);
        Ok(pose)
    }

    pub fn fog(&self) -> FogState {
        self.fog
    }

    pub fn set_fog_color(&mut self, color: [f32; 3]) {
        self.fog.color = color;
    }

    pub fn set_fog_intensity(&mut self, intensity: f32) -> Result<(), ViewerError> {
        if !intensity.is_finite() {
            return Err("fog intensity must be finite".into());
        }
        if !(0.0..=1.0).contains(&intensity) {
            return Err(ViewerError::InvalidArgument(format!("fog intensity must lie in [0, 1], got {}", intensity)));
        }
        self.fog.intensity = intensity;
        Ok(())
    }

    pub fn belly_light_pitch(&self) -> f32 {
        self.belly_light_pitch
    }

    pub fn belly_light_roll(&self) -> f32 {
        self.belly_light_roll
    }

    pub fn set_belly_light_pitch(&mut self, degrees: f32) -> Result<(), ViewerError> {
        check_angle("belly light pitch", degrees, PITCH_LIMIT_DEGREES)?;
        self.belly_light_pitch = degrees;
        Ok(())
    }

    pub fn set_belly_light_roll(&mut self, degrees: f32) -> Result<(), ViewerError> {
        check_angle("belly light roll", degrees, ROLL_LIMIT_DEGREES)?;
        self.belly_light_roll = degrees;
        Ok(())
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        if self.camera_mode != mode {
            info!("[Camera] {:?} -> {:?}", self.camera_mode, mode);
        }
        self.camera_mode = mode;
    }
}

fn check_angle(name: &str, degrees: f32, limit: f32) -> Result<(), ViewerError> {
    if !degrees.is_finite() || degrees.abs() > limit {
        return Err(ViewerError::InvalidArgument(format!("{} must lie in [-{}, {}] degrees, got {}", name, limit, limit, degrees)));
    }
    Ok(())
}
