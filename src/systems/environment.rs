use bevy::prelude::*;
use bevy_atmosphere::prelude::*;
use crate::core::components::{MainCamera, MainDirectionalLight};
use crate::core::modes::SkyboxKind;
use crate::core::simulation::{FogState, SimulationContext};
use crate::management::viewer_config::ViewerConfig;

const FOG_DENSITY_SCALE: f32 = 0.1;
const DEFAULT_CLEAR: Color = Color::srgb(0.05, 0.05, 0.05);

fn sun_position(kind: SkyboxKind) -> Vec3 {
    match kind {
        SkyboxKind::Day => Vec3::new(0.0, 1.0, 0.3),
        SkyboxKind::Night => Vec3::new(0.0, -0.2, 1.0),
    }
}

pub fn apply_skybox_system(
    sim: Res<SimulationContext>,
    config: Res<ViewerConfig>,
    mut last: Local<Option<SkyboxKind>>,
    mut atmosphere: AtmosphereMut<Nishita>,
    mut suns: Query<&mut DirectionalLight, With<MainDirectionalLight>>,
) {
    if *last == Some(sim.skybox) {
        return;
    }
    info!("[Sky] {:?} -> {:?}", *last, sim.skybox);
    *last = Some(sim.skybox);

    atmosphere.sun_position = sun_position(sim.skybox);
    let color = match sim.skybox {
        SkyboxKind::Day => config.lights.day_color,
        SkyboxKind::Night => config.lights.night_color,
    };
    for mut sun in suns.iter_mut() {
        sun.color = Color::srgb(color[0], color[1], color[2]);
    }
}

/// Clear colour and sky presence for a fog setting. With fog on the sky
/// is dropped so the fog colour fills the background.
pub fn fog_background(fog: FogState) -> (Color, bool) {
    if fog.enabled() {
        (Color::srgb(fog.color[0], fog.color[1], fog.color[2]), false)
    } else {
        (DEFAULT_CLEAR, true)
    }
}

pub fn apply_fog_system(
    mut commands: Commands,
    sim: Res<SimulationContext>,
    mut clear_color: ResMut<ClearColor>,
    mut cameras: Query<(Entity, &mut DistanceFog, Has<AtmosphereCamera>), With<MainCamera>>,
) {
    let fog = sim.fog();
    let (background, show_sky) = fog_background(fog);
    let density = if fog.enabled() { fog.intensity * FOG_DENSITY_SCALE } else { 0.0 };

    for (entity, mut distance_fog, has_sky) in cameras.iter_mut() {
        distance_fog.color = Color::srgb(fog.color[0], fog.color[1], fog.color[2]);
        distance_fog.falloff = FogFalloff::Exponential { density };

        if has_sky && !show_sky {
            info!("[Sky] fog on, hiding sky");
            commands.entity(entity).remove::<AtmosphereCamera>();
        } else if !has_sky && show_sky {
            info!("[Sky] fog off, restoring sky");
            commands.entity(entity).insert(AtmosphereCamera::default());
        }
    }
    if clear_color.0 != background {
        clear_color.0 = background;
    }
}
