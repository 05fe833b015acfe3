use bevy::prelude::*;
use crate::core::bezier::tessellate;
use crate::core::control_grid::GRID_SIDE;
use crate::core::simulation::SimulationContext;
use crate::management::viewer_config::ViewerConfig;

const ISO_LEVEL: u32 = 8;
const PATH_SAMPLES: usize = 128;

// Control net, surface iso-lines and one lap of the flight path.
pub fn draw_control_net_system(
    sim: Res<SimulationContext>,
    config: Res<ViewerConfig>,
    mut gizmos: Gizmos,
) {
    if !sim.show_control_net {
        return;
    }
    let to_world = config.patch.transform();
    let grid = sim.patch.grid();

    for row in 0..GRID_SIDE {
        gizmos.linestrip((0..GRID_SIDE).map(|column| to_world.transform_point(grid.point(row, column))), Color::srgb(1.0, 0.8, 0.1));
    }
    for column in 0..GRID_SIDE {
        gizmos.linestrip((0..GRID_SIDE).map(|row| to_world.transform_point(grid.point(row, column))), Color::srgb(1.0, 0.8, 0.1));
    }

    let side = (ISO_LEVEL + 1) as usize;
    let surface: Vec<Vec3> = tessellate(grid, ISO_LEVEL).into_iter().map(|p| to_world.transform_point(p)).collect();
    for row in surface.chunks_exact(side) {
        gizmos.linestrip(row.iter().copied(), Color::srgb(0.2, 0.7, 1.0));
    }
    for column in 0..side {
        gizmos.linestrip(surface.iter().skip(column).step_by(side).copied(), Color::srgb(0.2, 0.7, 1.0));
    }

    let solver = sim.solver();
    let lap = solver.params().lap_time();
    gizmos.linestrip(
        (0..=PATH_SAMPLES).map(|i| solver.position_at(lap * i as f32 / PATH_SAMPLES as f32)),
        Color::srgb(0.9, 0.3, 0.9),
    );
}
