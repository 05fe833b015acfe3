use bevy::prelude::*;
use bevy::asset::load_internal_asset;
use bevy::render::render_resource::{Shader, ShaderType};
use crate::core::body_lights::{belly_light, nose_light, LightRig, SpotPlacement, SpotSettings};
use crate::core::modes::{ShadingMode, SkyboxKind};
use crate::core::simulation::{FogState, SimulationContext};

// Street lamps, nose and belly.
pub const MAX_SPOTS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, ShaderType)]
pub struct SpotUniform {
    // w = cos(inner cone)
    pub position: Vec4,
    // w = cos(outer cone)
    pub direction: Vec4,
    pub color: Vec4,
}

/// Light and fog state shared by every shader in the viewer, bound next to
/// each material's own data and read through `flight_viewer::lighting`.
#[derive(Clone, Copy, Debug, PartialEq, ShaderType)]
pub struct SceneLighting {
    // Direction the sunlight travels
    pub sun_direction: Vec4,
    pub sun_color: Vec4,
    // rgb = fog colour, w = intensity (0 disables fog)
    pub fog: Vec4,
    pub spots: [SpotUniform; MAX_SPOTS],
    // x = spot count, y = shading model
    pub counts: UVec4,
}

impl Default for SceneLighting {
    fn default() -> Self {
        SceneLighting::new(ShadingMode::default(), Vec3::NEG_Y, [1.0, 1.0, 0.9], FogState::default())
    }
}

impl SceneLighting {
    pub fn new(shading: ShadingMode, sun_direction: Vec3, sun_color: [f32; 3], fog: FogState) -> Self {
        SceneLighting {
            sun_direction: sun_direction.normalize_or(Vec3::NEG_Y).extend(0.0),
            sun_color: Vec3::from_array(sun_color).extend(1.0),
            fog: Vec3::from_array(fog.color).extend(fog.intensity),
            spots: [SpotUniform::default(); MAX_SPOTS],
            counts: UVec4::new(0, shading.shader_index(), 0, 0),
        }
    }

    /// Everything lit this frame: the sun for the current sky, the street
    /// lamps and, once the body has a pose, its nose and belly lights.
    pub fn for_frame(sim: &SimulationContext, rig: &LightRig) -> Self {
        let sun_color = match sim.skybox {
            SkyboxKind::Day => rig.day_color,
            SkyboxKind::Night => rig.night_color,
        };
        let mut lighting = SceneLighting::new(sim.shading_mode, rig.sun_direction, sun_color, sim.fog());

        for position in rig.street_lamps.iter() {
            let placement = SpotPlacement { position: *position, direction: Vec3::NEG_Y };
            if !lighting.push_spot(placement, &rig.street_lamp) {
                debug!("[Lighting] street lamp at {} dropped, all {} spot slots in use", position, MAX_SPOTS);
            }
        }
        if let Some(pose) = sim.pose() {
            lighting.push_spot(nose_light(pose), &rig.nose);
            lighting.push_spot(
                belly_light(pose, sim.belly_light_pitch(), sim.belly_light_roll()),
                &rig.belly,
            );
        }
        lighting
    }

    pub fn spot_count(&self) -> usize {
        self.counts.x as usize
    }

    pub fn shading(&self) -> u32 {
        self.counts.y
    }

    /// Returns false when every slot is taken.
    pub fn push_spot(&mut self, placement: SpotPlacement, settings: &SpotSettings) -> bool {
        let index = self.spot_count();
        if index >= MAX_SPOTS {
            return false;
        }
        self.spots[index] = SpotUniform {
            position: placement.position.extend(settings.inner_degrees.to_radians().cos()),
            direction: placement.direction.normalize_or(Vec3::NEG_Y).extend(settings.outer_degrees.to_radians().cos()),
            color: Vec3::from_array(settings.color).extend(1.0),
        };
        self.counts.x += 1;
        true
    }
}

/// This frame's lighting, rebuilt once and copied into every material.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct FrameLighting(pub SceneLighting);

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        // Import-only module, resolved by path from the material shaders
        load_internal_asset!(
            app,
            VIEWER_LIGHTING_SHADER_HANDLE,
            "../../assets/shaders/viewer_lighting.wgsl",
            Shader::from_wgsl
        );
        app.init_resource::<FrameLighting>();
    }
}

pub const VIEWER_LIGHTING_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x6C21_F0A8_93D4_4B17);
