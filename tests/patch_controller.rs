use flight_viewer::core::bezier::{evaluate, tessellate};
use flight_viewer::core::control_grid::{ControlGrid, PATCH_VERTICES};
use flight_viewer::core::patch_controller::{PatchState, TessellationPatchController};
use flight_viewer::core::viewer_error::ViewerError;

fn elevations(buffer: &[f32]) -> Vec<f32> {
    buffer.chunks_exact(3).map(|xyz| xyz[2]).collect()
}

#[test]
fn idle_tick_leaves_buffer_untouched() {
    let mut patch = TessellationPatchController::default();
    patch.set_control_point_elevation(3, -0.25).unwrap();
    let before = patch.buffer();
    for time in [0.0, 0.5, 10.0, 1234.5] {
        patch.tick(time);
        assert_eq!(patch.buffer(), before);
    }
    assert_eq!(patch.state(), PatchState::Idle);
}

#[test]
fn animating_tick_follows_closed_form() {
    let speed = 1.7;
    let mut patch = TessellationPatchController::new(speed, 1.0).unwrap();
    patch.set_animating(true);
    assert_eq!(patch.state(), PatchState::Animating);
    for time in [0.0, 0.3, 4.2] {
        patch.tick(time);
        let z = elevations(&patch.buffer());
        assert_eq!(z.len(), PATCH_VERTICES);
        for (index, value) in z.iter().enumerate() {
            let expected = (time * speed + index as f32).sin();
            assert!((value - expected).abs() < 1e-5, "t={} i={}", time, index);
        }
    }
}

#[test]
fn manual_elevation_survives_idle_tick() {
    let mut patch = TessellationPatchController::default();
    patch.set_control_point_elevation(5, 0.7).unwrap();
    assert_eq!(patch.buffer()[5 * 3 + 2], 0.7);
    patch.tick(2.0);
    assert_eq!(patch.buffer()[5 * 3 + 2], 0.7);
}

#[test]
fn out_of_range_index_is_rejected_without_mutation() {
    let mut patch = TessellationPatchController::default();
    let before = patch.buffer();
    for index in [16, 17, usize::MAX] {
        let err = patch.set_control_point_elevation(index, 0.5).unwrap_err();
        assert!(matches!(err, ViewerError::IndexOutOfRange { index: i, len: 16 } if i == index));
    }
    assert_eq!(patch.buffer(), before);
}

#[test]
fn surface_interpolates_corners_of_edited_grid() {
    let mut patch = TessellationPatchController::default();
    patch.set_control_point_elevation(0, 0.4).unwrap();
    patch.set_control_point_elevation(15, -0.6).unwrap();
    let grid = patch.grid();
    assert!((evaluate(grid, 0.0, 0.0) - grid.point(0, 0)).length() < 1e-6);
    assert!((evaluate(grid, 1.0, 1.0) - grid.point(3, 3)).length() < 1e-6);

    let samples = tessellate(grid, 4);
    assert_eq!(samples.len(), 25);
    assert!((samples[0] - grid.point(0, 0)).length() < 1e-6);

    patch.reset_grid();
    assert_eq!(patch.grid(), &ControlGrid::default());
}
