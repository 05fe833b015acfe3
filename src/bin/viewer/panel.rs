use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::{egui, EguiContexts};
use flight_viewer::core::components::MainCamera;
use flight_viewer::core::control_grid::PATCH_VERTICES;
use flight_viewer::core::modes::{CameraMode, ShadingMode, SkyboxKind};
use flight_viewer::core::patch_controller::PatchState;
use flight_viewer::core::simulation::{SimulationContext, PITCH_LIMIT_DEGREES, ROLL_LIMIT_DEGREES};
use flight_viewer::core::viewer_error::ViewerError;
use flight_viewer::core::viewer_plugin::ViewerSet;

const SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.1..=2.0;
const ELEVATION_RANGE: std::ops::RangeInclusive<f32> = -1.0..=1.0;

pub(crate) struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, control_panel_system.in_set(ViewerSet::Input));
    }
}

fn report(result: Result<(), ViewerError>) {
    if let Err(e) = result {
        warn!("[Panel] {}", e);
    }
}

fn control_panel_system(
    mut contexts: EguiContexts,
    mut sim: ResMut<SimulationContext>,
    cameras: Query<&Transform, With<MainCamera>>,
) {
    let sim = &mut *sim;
    let camera_position = cameras.get_single().map(|t| t.translation).unwrap_or(Vec3::ZERO);

    egui::Window::new("Control Panel").show(contexts.ctx_mut(), |ui| {
        ui.label("Press P to toggle the cursor, Esc to quit, F1 for the inspector");

        let mut skybox = sim.skybox;
        egui::ComboBox::from_label("Skybox")
            .selected_text(skybox.label())
            .show_ui(ui, |ui| {
                for kind in SkyboxKind::ALL {
                    ui.selectable_value(&mut skybox, kind, kind.label());
                }
            });
        sim.skybox = skybox;

        let mut camera_mode = sim.camera_mode;
        egui::ComboBox::from_label("Camera")
            .selected_text(camera_mode.label())
            .show_ui(ui, |ui| {
                for mode in CameraMode::ALL {
                    ui.selectable_value(&mut camera_mode, mode, mode.label());
                }
            });
        sim.set_camera_mode(camera_mode);

        let mut shading_mode = sim.shading_mode;
        egui::ComboBox::from_label("Shading")
            .selected_text(shading_mode.label())
            .show_ui(ui, |ui| {
                for mode in ShadingMode::ALL {
                    ui.selectable_value(&mut shading_mode, mode, mode.label());
                }
            });
        sim.shading_mode = shading_mode;

        ui.separator();
        let mut fog = sim.fog();
        ui.horizontal(|ui| {
            ui.label("Fog color");
            ui.color_edit_button_rgb(&mut fog.color);
        });
        sim.set_fog_color(fog.color);
        if ui.add(egui::Slider::new(&mut fog.intensity, 0.0..=1.0).text("Fog intensity")).changed() {
            report(sim.set_fog_intensity(fog.intensity));
        }

        ui.label(format!(
            "Camera position: ({:.2}, {:.2}, {:.2})",
            camera_position.x, camera_position.y, camera_position.z
        ));

        ui.separator();
        let mut pitch = sim.belly_light_pitch();
        if ui.add(egui::Slider::new(&mut pitch, -PITCH_LIMIT_DEGREES..=PITCH_LIMIT_DEGREES).text("Belly light pitch")).changed() {
            report(sim.set_belly_light_pitch(pitch));
        }
        let mut roll = sim.belly_light_roll();
        if ui.add(egui::Slider::new(&mut roll, -ROLL_LIMIT_DEGREES..=ROLL_LIMIT_DEGREES).text("Belly light roll")).changed() {
            report(sim.set_belly_light_roll(roll));
        }

        ui.separator();
        ui.checkbox(&mut sim.show_surface, "Show Bezier surface");
        if sim.show_surface {
            patch_controls(ui, sim);
        }
    });
}

fn patch_controls(ui: &mut egui::Ui, sim: &mut SimulationContext) {
    let animating = sim.patch.state() == PatchState::Animating;
    if ui.button(if animating { "Stop animation" } else { "Start animation" }).clicked() {
        sim.patch.set_animating(!animating);
    }

    let mut speed = sim.patch.animation().speed;
    if ui.add(egui::Slider::new(&mut speed, SPEED_RANGE).text("Animation speed")).changed() {
        report(sim.patch.set_speed(speed));
    }

    egui::CollapsingHeader::new("Control point elevations").show(ui, |ui| {
        for index in 0..PATCH_VERTICES {
            let Ok(mut elevation) = sim.patch.grid().elevation(index) else {
                continue;
            };
            let slider = egui::Slider::new(&mut elevation, ELEVATION_RANGE).text(format!("Point {}", index));
            if ui.add(slider).changed() {
                report(sim.patch.set_control_point_elevation(index, elevation));
            }
        }
    });

    if ui.button("Reset grid").clicked() {
        sim.patch.reset_grid();
    }
    ui.checkbox(&mut sim.show_control_net, "Show control net");
}
