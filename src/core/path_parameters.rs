use serde::{Serialize, Deserialize};
use crate::core::viewer_error::ViewerError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PathParameters {
    pub radius: f32,               // radius of the horizontal circle in world units
    pub angular_speed: f32,        // radians per second around the circle, sign gives the travel direction
    pub min_height: f32,           // lowest altitude reached by the oscillation
    pub oscillation_amplitude: f32,// peak-to-peak vertical travel above min_height
    pub heading_sample_delta: f32, // time step used for the finite-difference heading
}

impl Default for PathParameters {
    fn default() -> Self {
        PathParameters {
            radius: 6.0,
            angular_speed: 1.0,
            min_height: 8.0,
            oscillation_amplitude: 2.0,
            heading_sample_delta: 0.01,
        }
    }
}

impl PathParameters {
    pub fn validate(&self) -> Result<(), ViewerError> {
        let finite = [
            self.radius,
            self.angular_speed,
            self.min_height,
            self.oscillation_amplitude,
            self.heading_sample_delta,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ViewerError::InvalidConfiguration(format!("non-finite path parameter in {:?}", self)));
        }
        if self.radius <= 0.0 {
            return Err(ViewerError::InvalidConfiguration(format!("radius must be positive, got {}", self.radius)));
        }
        if self.angular_speed == 0.0 {
            return Err(ViewerError::InvalidConfiguration("angular speed must be non-zero".to_string()));
        }
        if self.oscillation_amplitude < 0.0 {
            return Err(ViewerError::InvalidConfiguration(format!(
                "oscillation amplitude must not be negative, got {}",
                self.oscillation_amplitude
            )));
        }
        if self.heading_sample_delta <= 0.0 {
            return Err(ViewerError::InvalidConfiguration(format!(
                "heading sample delta must be positive, got {}",
                self.heading_sample_delta
            )));
        }
        Ok(())
    }

    /// Period of the horizontal circle in seconds.
    pub fn lap_time(&self) -> f32 {
        std::f32::consts::TAU / self.angular_speed.abs()
    }
}
