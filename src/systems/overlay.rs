use bevy::prelude::*;
use crate::core::components::StatusOverlay;
use crate::core::simulation::SimulationContext;

pub fn spawn_status_overlay(mut commands: Commands) {
    let root = commands
        .spawn_empty()
        .insert(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(8.0),
            bottom: Val::Px(8.0),
            ..Default::default()
        })
        .insert(BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.25)))
        .insert(Name::new("StatusOverlayRoot"))
        .id();

    commands.entity(root).with_children(|parent| {
        parent
            .spawn_empty()
            .insert(Text::new("Flight: initializing"))
            .insert(TextFont { font_size: 14.0, ..Default::default() })
            .insert(TextColor(Color::WHITE))
            .insert(StatusOverlay);
    });
}

pub fn update_status_overlay(
    sim: Res<SimulationContext>,
    mut q: Query<&mut Text, With<StatusOverlay>>,
) {
    let mut text = match q.get_single_mut() {
        Ok(t) => t,
        Err(_) => return,
    };
    let flight = match sim.pose() {
        Some(pose) => format!(
            "Body: ({:.2}, {:.2}, {:.2}) pitch {:.1} deg",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.pitch.to_degrees()
        ),
        None => "Body: no pose".to_string(),
    };
    text.0 = format!(
        "Camera: {}\nPatch: {:?} (speed {:.2})\n{}",
        sim.camera_mode.label(),
        sim.patch.state(),
        sim.patch.animation().speed,
        flight
    );
}
