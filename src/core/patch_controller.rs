use bevy::prelude::*;
use crate::core::control_grid::{ControlGrid, PATCH_FLOATS};
use crate::core::viewer_error::ViewerError;

pub const DEFAULT_ANIMATION_SPEED: f32 = 0.5;
pub const DEFAULT_RIPPLE_AMPLITUDE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum PatchState {
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub enabled: bool,
    pub speed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState {
            enabled: false,
            speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}

/// Owns the control net of the tessellated patch and its ripple animation.
///
/// The controller holds no GPU resources. The render side uploads
/// [`TessellationPatchController::buffer`] every frame and draws one
/// 16-vertex patch.
#[derive(Debug, Clone)]
pub struct TessellationPatchController {
    grid: ControlGrid,
    animation: AnimationState,
    amplitude: f32,
}

impl Default for TessellationPatchController {
    fn default() -> Self {
        TessellationPatchController {
            grid: ControlGrid::default(),
            animation: AnimationState::default(),
            amplitude: DEFAULT_RIPPLE_AMPLITUDE,
        }
    }
}

impl TessellationPatchController {
    pub fn new(speed: f32, amplitude: f32) -> Result<Self, ViewerError> {
        if !amplitude.is_finite() {
            return Err(ViewerError::InvalidConfiguration(format!("ripple amplitude must be finite, got {}", amplitude)));
        }
        let mut controller = TessellationPatchController { amplitude, ..Default::default() };
        controller
            .set_speed(speed)
            .map_err(|e| ViewerError::InvalidConfiguration(e.to_string()))?;
        Ok(controller)
    }

    pub fn state(&self) -> PatchState {
        if self.animation.enabled {
            PatchState::Animating
        } else {
            PatchState::Idle
        }
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn grid(&self) -> &ControlGrid {
        &self.grid
    }

    pub fn set_animating(&mut self, enabled: bool) {
        if self.animation.enabled != enabled {
            info!("[Patch] animation -> {:?}", if enabled { PatchState::Animating } else { PatchState::Idle });
        }
        self.animation.enabled = enabled;
    }

    /// Negative or non-finite speeds are rejected, never clamped.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), ViewerError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ViewerError::InvalidArgument(format!("animation speed must be a non-negative number, got {}", speed)));
        }
        self.animation.speed = speed;
        Ok(())
    }

    /// Rewrites every elevation when animating: `sin(time * speed + index) * amplitude`,
    /// phased by the flat row-major index.
    pub fn tick(&mut self, time: f32) {
        if !self.animation.enabled {
            return;
        }
        let speed = self.animation.speed;
        let amplitude = self.amplitude;
        self.grid
            .set_elevations_with(|index| (time * speed + index as f32).sin() * amplitude);
    }

    pub fn set_control_point_elevation(&mut self, index: usize, value: f32) -> Result<(), ViewerError> {
        if !value.is_finite() {
            return Err(ViewerError::InvalidArgument(format!("elevation must be finite, got {}", value)));
        }
        self.grid.set_elevation(index, value)
    }

    pub fn reset_grid(&mut self) {
        self.grid = ControlGrid::default();
    }

    pub fn buffer(&self) -> [f32; PATCH_FLOATS] {
        self.grid.to_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_default_speed() {
        let controller = TessellationPatchController::default();
        assert_eq!(controller.state(), PatchState::Idle);
        assert_eq!(controller.animation().speed, DEFAULT_ANIMATION_SPEED);
    }

    #[test]
    fn toggling_switches_state() {
        let mut controller = TessellationPatchController::default();
        controller.set_animating(true);
        assert_eq!(controller.state(), PatchState::Animating);
        controller.set_animating(false);
        assert_eq!(controller.state(), PatchState::Idle);
    }

    #[test]
    fn negative_speed_is_rejected_and_speed_kept() {
        let mut controller = TessellationPatchController::default();
        assert!(matches!(controller.set_speed(-0.1), Err(ViewerError::InvalidArgument(_))));
        assert_eq!(controller.animation().speed, DEFAULT_ANIMATION_SPEED);
        assert!(controller.set_speed(0.0).is_ok());
    }

    #[test]
    fn non_finite_elevation_is_rejected() {
        let mut controller = TessellationPatchController::default();
        assert!(controller.set_control_point_elevation(3, f32::INFINITY).is_err());
        assert_eq!(controller.grid().elevation(3).unwrap(), 0.0);
    }

    #[test]
    fn amplitude_scales_ripple() {
        let mut controller = TessellationPatchController::new(1.0, 0.5).unwrap();
        controller.set_animating(true);
        controller.tick(0.25);
        let expected = (0.25f32 + 2.0).sin() * 0.5;
        assert!((controller.grid().elevation(2).unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_planar_layout() {
        let mut controller = TessellationPatchController::default();
        controller.set_control_point_elevation(0, 0.9).unwrap();
        controller.reset_grid();
        assert_eq!(controller.grid(), &ControlGrid::default());
    }
}
