use bevy::prelude::Transform;
use bevy_math::{Mat4, Vec3};
use crate::core::viewer_error::ViewerError;

/// Rigid-body snapshot of the flying body at one instant.
///
/// `direction`, `up` and `right` form a right-handed orthonormal frame.
/// `transform` maps model space (X = right, Y = up, Z = forward) into world
/// space and already carries the body scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub pitch: f32,
    pub transform: Mat4,
}

impl Pose {
    pub fn to_transform(&self) -> Transform {
        Transform::from_matrix(self.transform)
    }
}

/// Normalizes `v`, failing instead of producing NaN for near-zero vectors.
pub(crate) fn normalize_checked(v: Vec3) -> Result<Vec3, ViewerError> {
    let length = v.length();
    if !length.is_finite() || length < DIRECTION_EPSILON {
        return Err(ViewerError::DegenerateDirection { length });
    }
    Ok(v / length)
}

pub(crate) const DIRECTION_EPSILON: f32 = 1e-6;
