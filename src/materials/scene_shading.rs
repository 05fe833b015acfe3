use std::collections::HashMap;
use bevy::prelude::*;
use bevy::asset::load_internal_asset;
use bevy::reflect::TypePath;
use bevy::render::render_resource::{AsBindGroup, Shader, ShaderRef};
use bevy_pbr::{ExtendedMaterial, MaterialExtension, StandardMaterial};
use crate::materials::lighting::SceneLighting;

// Replaces PBR lighting on glTF meshes with the viewer's flat, Phong and
// Gouraud models. The base StandardMaterial keeps supplying colour and texture.
#[derive(Asset, AsBindGroup, TypePath, Clone, Debug, Default)]
pub struct SceneShadingExt {
    #[uniform(100)]
    pub lighting: SceneLighting,
}

impl MaterialExtension for SceneShadingExt {
    fn vertex_shader() -> ShaderRef {
        ShaderRef::Handle(SCENE_SHADING_SHADER_HANDLE)
    }

    fn fragment_shader() -> ShaderRef {
        ShaderRef::Handle(SCENE_SHADING_SHADER_HANDLE)
    }
}

pub type SceneShadingMaterial = ExtendedMaterial<StandardMaterial, SceneShadingExt>;

/// One shading material per source StandardMaterial, so meshes sharing a
/// glTF material keep sharing after conversion.
#[derive(Resource, Default)]
pub struct ShadingMaterialCache {
    map: HashMap<AssetId<StandardMaterial>, Handle<SceneShadingMaterial>>,
}

impl ShadingMaterialCache {
    /// `None` while the source material is still loading.
    pub fn convert(
        &mut self,
        source: &Handle<StandardMaterial>,
        standard: &Assets<StandardMaterial>,
        shading: &mut Assets<SceneShadingMaterial>,
        lighting: &SceneLighting,
    ) -> Option<Handle<SceneShadingMaterial>> {
        if let Some(handle) = self.map.get(&source.id()) {
            return Some(handle.clone());
        }
        let base = standard.get(source)?.clone();
        let handle = shading.add(SceneShadingMaterial {
            base,
            extension: SceneShadingExt { lighting: *lighting },
        });
        self.map.insert(source.id(), handle.clone());
        Some(handle)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = &Handle<SceneShadingMaterial>> {
        self.map.values()
    }
}

pub struct SceneShadingPlugin;

impl Plugin for SceneShadingPlugin {
    fn build(&self, app: &mut App) {
        load_internal_asset!(
            app,
            SCENE_SHADING_SHADER_HANDLE,
            "../../assets/shaders/scene_shading.wgsl",
            Shader::from_wgsl
        );
        app.add_plugins(bevy_pbr::MaterialPlugin::<SceneShadingMaterial>::default());
        app.init_resource::<ShadingMaterialCache>();
    }
}

pub const SCENE_SHADING_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x9A04_57E2_C1B8_4D3E);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modes::ShadingMode;

    #[test]
    fn shared_sources_convert_once() {
        let mut standard = Assets::<StandardMaterial>::default();
        let mut shading = Assets::<SceneShadingMaterial>::default();
        let mut cache = ShadingMaterialCache::default();
        let source = standard.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.6, 0.9),
            ..Default::default()
        });
        let lighting = SceneLighting::new(ShadingMode::Gouraud, Vec3::NEG_Y, [1.0, 1.0, 0.9], Default::default());

        let first = cache.convert(&source, &standard, &mut shading, &lighting).unwrap();
        let second = cache.convert(&source, &standard, &mut shading, &lighting).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        let stored = shading.get(&first).unwrap();
        assert_eq!(stored.base.base_color, Color::srgb(0.3, 0.6, 0.9));
        assert_eq!(stored.extension.lighting.shading(), 2);
    }

    #[test]
    fn unloaded_source_is_retried_later() {
        let standard = Assets::<StandardMaterial>::default();
        let mut shading = Assets::<SceneShadingMaterial>::default();
        let mut cache = ShadingMaterialCache::default();
        let pending = Handle::<StandardMaterial>::weak_from_u128(42);
        assert!(cache.convert(&pending, &standard, &mut shading, &SceneLighting::default()).is_none());
        assert!(cache.is_empty());
    }
}
