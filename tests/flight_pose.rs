use std::f32::consts::TAU;
use flight_viewer::core::flight_pose::FlightPoseSolver;
use flight_viewer::core::path_parameters::PathParameters;
use flight_viewer::management::viewer_config::ViewerConfig;

const EPS: f32 = 1e-4;

fn sample_times() -> impl Iterator<Item = f32> {
    (0..400).map(|i| -20.0 + i as f32 * 0.173)
}

#[test]
fn frame_is_orthonormal_at_every_sampled_time() {
    let solver = FlightPoseSolver::new(PathParameters::default()).unwrap();
    for time in sample_times() {
        let pose = solver.compute_pose(time).unwrap();
        for axis in [pose.direction, pose.up, pose.right] {
            assert!((axis.length() - 1.0).abs() < EPS, "t={} |axis|={}", time, axis.length());
        }
        assert!(pose.direction.dot(pose.up).abs() < EPS, "t={}", time);
        assert!(pose.direction.dot(pose.right).abs() < EPS, "t={}", time);
        assert!(pose.up.dot(pose.right).abs() < EPS, "t={}", time);
        assert!(pose.up.y > 0.0, "t={} body flipped", time);
    }
}

#[test]
fn altitude_stays_within_oscillation_band() {
    let params = PathParameters { min_height: 3.0, oscillation_amplitude: 4.5, ..Default::default() };
    let solver = FlightPoseSolver::new(params).unwrap();
    for time in sample_times() {
        let y = solver.compute_pose(time).unwrap().position.y;
        assert!(y >= 3.0 - EPS && y <= 7.5 + EPS, "t={} y={}", time, y);
    }
}

#[test]
fn horizontal_path_repeats_every_lap() {
    for angular_speed in [1.0, 0.4, -2.0] {
        let params = PathParameters { angular_speed, ..Default::default() };
        let solver = FlightPoseSolver::new(params).unwrap();
        let lap = TAU / angular_speed;
        assert!((params.lap_time() - lap.abs()).abs() < 1e-6);
        for time in [0.0, 0.7, 3.1, 11.0] {
            let a = solver.compute_pose(time).unwrap().position;
            let b = solver.compute_pose(time + lap).unwrap().position;
            assert!((a.x - b.x).abs() < 1e-3, "speed={} t={}", angular_speed, time);
            assert!((a.z - b.z).abs() < 1e-3, "speed={} t={}", angular_speed, time);
        }
    }
}

#[test]
fn reference_configuration_starts_at_known_point() {
    let params = PathParameters {
        radius: 6.0,
        angular_speed: 1.0,
        min_height: 8.0,
        oscillation_amplitude: 2.0,
        ..Default::default()
    };
    let pose = FlightPoseSolver::new(params).unwrap().compute_pose(0.0).unwrap();
    assert!((pose.position.x - 6.0).abs() < 1e-5);
    assert!((pose.position.y - 9.0).abs() < 1e-5);
    assert!(pose.position.z.abs() < 1e-5);
}

#[test]
fn transform_places_and_scales_the_body() {
    let config = ViewerConfig::default();
    let solver = FlightPoseSolver::with_scale(config.path, 2.0).unwrap();
    let pose = solver.compute_pose(2.5).unwrap();
    let transform = pose.to_transform();
    assert!((transform.translation - pose.position).length() < EPS);
    assert!((transform.scale - bevy::math::Vec3::splat(2.0)).length() < EPS);
    // Local +Z maps onto the heading.
    let forward = transform.rotation * bevy::math::Vec3::Z;
    assert!((forward - pose.direction).length() < 1e-3);
}

#[test]
fn heading_stays_tangent_after_days_of_uptime() {
    let solver = FlightPoseSolver::new(PathParameters::default()).unwrap();
    for time in [2.7e5_f32, 3.0e5, 5.0e5, 1.0e6] {
        let pose = solver.compute_pose(time).unwrap();
        let heading = bevy::math::Vec3::new(pose.direction.x, 0.0, pose.direction.z).normalize();
        let radial = bevy::math::Vec3::new(pose.position.x, 0.0, pose.position.z).normalize();
        assert!(heading.dot(radial).abs() < 0.02, "t={} heading drifted off the circle", time);
        assert!((pose.direction.length() - 1.0).abs() < EPS, "t={}", time);
        assert!(pose.direction.dot(pose.up).abs() < EPS, "t={}", time);
    }
}
