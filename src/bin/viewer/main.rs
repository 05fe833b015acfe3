use bevy::prelude::*;
use bevy::input::common_conditions::input_toggle_active;
use bevy_atmosphere::plugin::AtmospherePlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use flight_viewer::core::viewer_plugin::ViewerPlugin;
use flight_viewer::management::viewer_config::{config_path, load_or_default};

mod input_manager;
mod camera;
mod panel;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,flight_viewer=info,viewer=info".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Flight Viewer".into(),
                    resolution: (1280.0, 720.0).into(),
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Logging is up from here on, so config problems get reported
    let config = load_or_default(config_path());

    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
    });

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::F1)),
    );

    // Setup skybox (atmosphere)
    app.add_plugins(AtmospherePlugin);

    // Setup simulation, scene and patch rendering
    app.add_plugins(ViewerPlugin { config });

    // Setup input system
    app.add_plugins(crate::input_manager::InputPlugin);

    // Setup camera
    app.add_plugins(crate::camera::CameraPlugin);

    // Setup control panel
    app.add_plugins(crate::panel::ControlPanelPlugin);

    app.run();
}
