//! CPU evaluation of the bicubic patch. Mirrors the math in
//! `assets/shaders/bezier_patch.wgsl` so overlays and tests agree with
//! what the GPU draws.

use bevy_math::{Vec2, Vec3, Vec4};
use itertools::iproduct;
use crate::core::control_grid::{ControlGrid, GRID_SIDE};

pub fn bernstein(t: f32) -> Vec4 {
    let s = 1.0 - t;
    Vec4::new(s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t)
}

pub fn bernstein_derivative(t: f32) -> Vec4 {
    let s = 1.0 - t;
    Vec4::new(
        -3.0 * s * s,
        3.0 * s * s - 6.0 * t * s,
        6.0 * t * s - 3.0 * t * t,
        3.0 * t * t,
    )
}

fn weighted_sum(grid: &ControlGrid, bu: Vec4, bv: Vec4) -> Vec3 {
    let bu = bu.to_array();
    let bv = bv.to_array();
    iproduct!(0..GRID_SIDE, 0..GRID_SIDE)
        .fold(Vec3::ZERO, |acc, (row, column)| acc + grid.point(row, column) * bv[row] * bu[column])
}

/// Surface point; `u` runs along a row (columns), `v` down the rows.
pub fn evaluate(grid: &ControlGrid, u: f32, v: f32) -> Vec3 {
    weighted_sum(grid, bernstein(u), bernstein(v))
}

/// Unnormalized surface normal, `dP/du x dP/dv`.
pub fn normal(grid: &ControlGrid, u: f32, v: f32) -> Vec3 {
    let du = weighted_sum(grid, bernstein_derivative(u), bernstein(v));
    let dv = weighted_sum(grid, bernstein(u), bernstein_derivative(v));
    du.cross(dv)
}

/// UV coordinates and triangle indices of a `(level + 1)^2` parameter grid.
pub fn parameter_grid(level: u32) -> (Vec<Vec2>, Vec<u32>) {
    let level = level.max(1);
    let side = level + 1;
    let uvs = iproduct!(0..side, 0..side)
        .map(|(row, column)| Vec2::new(column as f32 / level as f32, row as f32 / level as f32))
        .collect();
    let indices = iproduct!(0..level, 0..level)
        .flat_map(|(row, column)| {
            let a = row * side + column;
            let b = a + 1;
            let c = a + side;
            let d = c + 1;
            [a, c, b, b, c, d]
        })
        .collect();
    (uvs, indices)
}

/// Evaluates the surface on a `(level + 1)^2` grid, row-major in `v`.
pub fn tessellate(grid: &ControlGrid, level: u32) -> Vec<Vec3> {
    let (uvs, _) = parameter_grid(level);
    uvs.iter().map(|uv| evaluate(grid, uv.x, uv.y)).collect()
}
