use std::f32::consts::TAU;
use bevy_math::{Mat4, Vec3, Vec4};
use crate::core::path_parameters::PathParameters;
use crate::core::pose::{normalize_checked, Pose};
use crate::core::viewer_error::ViewerError;

pub const DEFAULT_BODY_SCALE: f32 = 0.5;

// Vertical oscillation runs at a fixed rate, independent of angular_speed.
const OSCILLATION_RATE: f32 = 0.5;

/// Maps elapsed time to the pose of a body circling at constant angular
/// speed while its altitude oscillates sinusoidally.
#[derive(Debug, Clone)]
pub struct FlightPoseSolver {
    params: PathParameters,
    scale: f32,
}

impl Default for FlightPoseSolver {
    fn default() -> Self {
        FlightPoseSolver {
            params: PathParameters::default(),
            scale: DEFAULT_BODY_SCALE,
        }
    }
}

impl FlightPoseSolver {
    pub fn new(params: PathParameters) -> Result<Self, ViewerError> {
        Self::with_scale(params, DEFAULT_BODY_SCALE)
    }

    pub fn with_scale(params: PathParameters, scale: f32) -> Result<Self, ViewerError> {
        params.validate()?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewerError::InvalidConfiguration(format!("body scale must be positive, got {}", scale)));
        }
        Ok(FlightPoseSolver { params, scale })
    }

    pub fn params(&self) -> &PathParameters {
        &self.params
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Angle along the circle, reduced to a single lap so that later
    /// offsets keep full precision however long the app has run.
    fn path_angle(&self, time: f32) -> f32 {
        (time * self.params.angular_speed).rem_euclid(TAU)
    }

    pub fn position_at(&self, time: f32) -> Vec3 {
        let p = &self.params;
        let angle = self.path_angle(time);
        Vec3::new(
            p.radius * angle.cos(),
            p.min_height + p.oscillation_amplitude * (0.5 * (1.0 + (time * OSCILLATION_RATE).sin())),
            p.radius * angle.sin(),
        )
    }

    /// Analytic derivative of the altitude with respect to time.
    pub fn height_change_at(&self, time: f32) -> f32 {
        self.params.oscillation_amplitude * 0.25 * (time * OSCILLATION_RATE).cos()
    }

    pub fn compute_pose(&self, time: f32) -> Result<Pose, ViewerError> {
        let p = &self.params;
        let position = self.position_at(time);

        // Heading comes from a secant over heading_sample_delta; only its
        // horizontal part is kept and the analytic climb rate is substituted.
        let next_angle = self.path_angle(time) + p.heading_sample_delta * p.angular_speed;
        let next = Vec3::new(p.radius * next_angle.cos(), 0.0, p.radius * next_angle.sin());
        let horizontal = normalize_checked(Vec3::new(next.x - position.x, 0.0, next.z - position.z))?;

        let height_change = self.height_change_at(time);
        let pitch = height_change.atan2(p.angular_speed * p.radius);

        let direction = normalize_checked(Vec3::new(horizontal.x, height_change, horizontal.z))?;
        let right = normalize_checked(Vec3::Y.cross(direction))?;
        let up = normalize_checked(direction.cross(right))?;

        let rotation = Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            direction.extend(0.0),
            Vec4::W,
        );
        let transform = Mat4::from_translation(position) * rotation * Mat4::from_scale(Vec3::splat(self.scale));

        Ok(Pose {
            position,
            direction,
            up,
            right,
            pitch,
            transform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    fn reference_solver() -> FlightPoseSolver {
        FlightPoseSolver::new(PathParameters::default()).expect("default parameters are valid")
    }

    #[test]
    fn pose_at_time_zero_matches_reference_point() {
        let pose = reference_solver().compute_pose(0.0).unwrap();
        assert!(approx_eq(pose.position.x, 6.0, 1e-5));
        assert!(approx_eq(pose.position.y, 9.0, 1e-5));
        assert!(approx_eq(pose.position.z, 0.0, 1e-5));
    }

    #[test]
    fn heading_points_along_counter_rotation_at_start() {
        // At angle 0 the circle moves towards +z.
        let pose = reference_solver().compute_pose(0.0).unwrap();
        assert!(pose.direction.z > 0.85);
        assert!(pose.direction.x.abs() < 0.05);
        // Climb rate at t = 0 is amplitude / 4.
        let expected = Vec3::new(0.0, 0.5, 1.0).normalize();
        assert!(approx_eq(pose.direction.y, expected.y, 1e-2));
    }

    #[test]
    fn pitch_uses_nominal_horizontal_speed() {
        let solver = reference_solver();
        let pose = solver.compute_pose(1.3).unwrap();
        let expected = (2.0 * 0.25 * (1.3f32 * 0.5).cos()).atan2(6.0);
        assert!(approx_eq(pose.pitch, expected, 1e-6));
    }

    #[test]
    fn negative_angular_speed_reverses_heading() {
        let params = PathParameters { angular_speed: -1.0, ..Default::default() };
        let pose = FlightPoseSolver::new(params).unwrap().compute_pose(0.0).unwrap();
        assert!(pose.direction.z < -0.85);
    }

    #[test]
    fn transform_places_model_origin_at_position_with_scale() {
        let pose = reference_solver().compute_pose(2.0).unwrap();
        let origin = pose.transform.transform_point3(Vec3::ZERO);
        assert!(origin.distance(pose.position) < 1e-5);
        let forward = pose.transform.transform_vector3(Vec3::Z);
        assert!(approx_eq(forward.length(), DEFAULT_BODY_SCALE, 1e-5));
        assert!(forward.normalize().distance(pose.direction) < 1e-5);
    }

    #[test]
    fn rejects_invalid_configuration() {
        for params in [
            PathParameters { radius: 0.0, ..Default::default() },
            PathParameters { radius: -2.0, ..Default::default() },
            PathParameters { angular_speed: 0.0, ..Default::default() },
            PathParameters { heading_sample_delta: 0.0, ..Default::default() },
            PathParameters { oscillation_amplitude: f32::NAN, ..Default::default() },
        ] {
            assert!(matches!(FlightPoseSolver::new(params), Err(ViewerError::InvalidConfiguration(_))));
        }
        assert!(matches!(
            FlightPoseSolver::with_scale(PathParameters::default(), 0.0),
            Err(ViewerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn vanishing_heading_sample_is_degenerate() {
        // 1.0 + 1e-9 rounds back to 1.0, so the secant has zero length.
        let params = PathParameters { heading_sample_delta: 1e-9, ..Default::default() };
        let err = FlightPoseSolver::new(params).unwrap().compute_pose(1.0).unwrap_err();
        assert!(matches!(err, ViewerError::DegenerateDirection { length } if length == 0.0));
    }

    #[test]
    fn non_finite_time_is_degenerate() {
        let err = reference_solver().compute_pose(f32::NAN).unwrap_err();
        assert!(matches!(err, ViewerError::DegenerateDirection { .. }));
    }
}
