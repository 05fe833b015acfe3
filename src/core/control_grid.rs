use bevy_math::Vec3;
use crate::core::viewer_error::ViewerError;

pub const GRID_SIDE: usize = 4;
pub const PATCH_VERTICES: usize = GRID_SIDE * GRID_SIDE;
pub const PATCH_FLOATS: usize = PATCH_VERTICES * 3;

/// 4x4 control net of a bicubic Bezier patch, stored row-major.
///
/// The net lies in the XY plane; Z is the elevation edited by the panel and
/// the ripple animation. Row 0 sits at y = 1 and the last row at y = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlGrid {
    points: [Vec3; PATCH_VERTICES],
}

impl Default for ControlGrid {
    fn default() -> Self {
        let step = 1.0 / (GRID_SIDE - 1) as f32;
        let points = std::array::from_fn(|index| {
            let row = index / GRID_SIDE;
            let column = index % GRID_SIDE;
            Vec3::new(column as f32 * step, 1.0 - row as f32 * step, 0.0)
        });
        ControlGrid { points }
    }
}

impl ControlGrid {
    pub fn points(&self) -> &[Vec3; PATCH_VERTICES] {
        &self.points
    }

    pub fn point(&self, row: usize, column: usize) -> Vec3 {
        self.points[row * GRID_SIDE + column]
    }

    pub fn elevation(&self, index: usize) -> Result<f32, ViewerError> {
        self.points
            .get(index)
            .map(|p| p.z)
            .ok_or(ViewerError::IndexOutOfRange { index, len: PATCH_VERTICES })
    }

    pub fn set_elevation(&mut self, index: usize, value: f32) -> Result<(), ViewerError> {
        let point = self
            .points
            .get_mut(index)
            .ok_or(ViewerError::IndexOutOfRange { index, len: PATCH_VERTICES })?;
        point.z = value;
        Ok(())
    }

    pub fn set_elevations_with(&mut self, mut elevation: impl FnMut(usize) -> f32) {
        for (index, point) in self.points.iter_mut().enumerate() {
            point.z = elevation(index);
        }
    }

    /// Tightly packed xyz floats in row-major order.
    pub fn to_buffer(&self) -> [f32; PATCH_FLOATS] {
        let mut buffer = [0.0; PATCH_FLOATS];
        for (chunk, point) in buffer.chunks_exact_mut(3).zip(self.points.iter()) {
            chunk.copy_from_slice(&point.to_array());
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_planar_unit_square() {
        let grid = ControlGrid::default();
        assert_eq!(grid.point(0, 0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(grid.point(0, 3), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(grid.point(3, 0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(grid.point(3, 3), Vec3::new(1.0, 0.0, 0.0));
        assert!(grid.points().iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn buffer_is_row_major_xyz() {
        let mut grid = ControlGrid::default();
        grid.set_elevation(6, 0.25).unwrap();
        let buffer = grid.to_buffer();
        assert_eq!(buffer.len(), 48);
        assert_eq!(&buffer[18..21], &grid.point(1, 2).to_array());
        assert_eq!(buffer[20], 0.25);
    }

    #[test]
    fn out_of_range_index_leaves_grid_untouched() {
        let mut grid = ControlGrid::default();
        let before = grid.clone();
        let err = grid.set_elevation(16, 1.0).unwrap_err();
        assert!(matches!(err, ViewerError::IndexOutOfRange { index: 16, len: 16 }));
        assert_eq!(grid, before);
    }
}
