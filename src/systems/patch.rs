use bevy::prelude::*;
use crate::core::components::BezierSurface;
use crate::core::simulation::SimulationContext;
use crate::materials::bezier_patch::{BezierPatchMaterial, PatchRenderer};
use crate::materials::lighting::FrameLighting;

pub fn tick_patch_system(time: Res<Time>, mut sim: ResMut<SimulationContext>) {
    let now = time.elapsed_secs();
    sim.patch.tick(now);
}

// Uploads every frame, animating or not, so panel edits show up immediately.
pub fn upload_patch_system(
    sim: Res<SimulationContext>,
    frame: Res<FrameLighting>,
    mut materials: ResMut<Assets<BezierPatchMaterial>>,
    mut surfaces: Query<(&PatchRenderer, &mut Visibility), With<BezierSurface>>,
) {
    let buffer = sim.patch.buffer();
    for (renderer, mut visibility) in surfaces.iter_mut() {
        let wanted = if sim.show_surface { Visibility::Inherited } else { Visibility::Hidden };
        if *visibility != wanted {
            *visibility = wanted;
        }
        if !renderer.upload_and_draw(&mut materials, &buffer) {
            warn!("[Patch] material for surface is not loaded, skipping upload");
            continue;
        }
        renderer.apply_lighting(&mut materials, &frame.0);
    }
}
