use bevy::app::Plugin;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use flight_viewer::core::simulation::SimulationContext;
use flight_viewer::core::viewer_plugin::ViewerSet;

pub(crate) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<InputStates>()
            .add_systems(Startup, apply_cursor_capture_system)
            .add_systems(PreUpdate, input_management_system.after(bevy::input::InputSystem))
            .add_systems(Update, (keyboard_command_system, apply_cursor_capture_system).chain().in_set(ViewerSet::Input));
    }
}

// Per-frame mouse deltas, cleared at the start of every frame.
#[derive(Default, Resource)]
pub(crate) struct InputStates {
    pub look_delta: Vec2,
    pub scroll: f32,
}

fn input_management_system(
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut mouse_wheel_events: EventReader<MouseWheel>,
    mut input: ResMut<InputStates>,
) {
    input.look_delta = mouse_motion_events.read().map(|event| event.delta).sum();
    input.scroll = mouse_wheel_events.read().map(|event| event.y).sum();
}

fn keyboard_command_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<SimulationContext>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("[Input] escape pressed, exiting");
        exit.send(AppExit::Success);
    }
    if keys.just_pressed(KeyCode::KeyP) {
        sim.cursor_enabled = !sim.cursor_enabled;
        info!("[Input] cursor {}", if sim.cursor_enabled { "released" } else { "captured" });
    }
}

// A captured cursor is hidden and locked; the free camera reads raw motion.
fn apply_cursor_capture_system(
    sim: Res<SimulationContext>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    let (grab_mode, visible) = if sim.cursor_enabled {
        (CursorGrabMode::None, true)
    } else {
        (CursorGrabMode::Locked, false)
    };
    if window.cursor_options.grab_mode != grab_mode {
        window.cursor_options.grab_mode = grab_mode;
        window.cursor_options.visible = visible;
    }
}
