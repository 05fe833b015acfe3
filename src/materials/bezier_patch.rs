use bevy::prelude::*;
use bevy::asset::load_internal_asset;
use bevy::reflect::TypePath;
use bevy::render::mesh::{Indices, MeshVertexBufferLayoutRef, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, Shader, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use bevy_pbr::{Material, MaterialPipeline, MaterialPipelineKey, MaterialPlugin};
use crate::core::bezier::parameter_grid;
use crate::core::control_grid::{ControlGrid, PATCH_FLOATS, PATCH_VERTICES};
use crate::materials::lighting::SceneLighting;

// Uniform block read by bezier_patch.wgsl. The vertex stage evaluates the
// bicubic surface from `control_points` at each parameter-grid vertex.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct BezierPatchParams {
    // xyz = control point, w unused
    pub control_points: [Vec4; PATCH_VERTICES],
    pub base_color: Vec4,
}

impl Default for BezierPatchParams {
    fn default() -> Self {
        let mut params = BezierPatchParams {
            control_points: [Vec4::ZERO; PATCH_VERTICES],
            base_color: Vec4::new(0.2, 0.2, 0.2, 1.0),
        };
        params.set_control_points(&ControlGrid::default().to_buffer());
        params
    }
}

impl BezierPatchParams {
    pub fn set_control_points(&mut self, buffer: &[f32; PATCH_FLOATS]) {
        for (slot, xyz) in self.control_points.iter_mut().zip(buffer.chunks_exact(3)) {
            *slot = Vec4::new(xyz[0], xyz[1], xyz[2], 1.0);
        }
    }
}

#[derive(Asset, AsBindGroup, TypePath, Clone, Debug, Default)]
pub struct BezierPatchMaterial {
    #[uniform(0)]
    pub params: BezierPatchParams,
    #[uniform(1)]
    pub lighting: SceneLighting,
}

impl Material for BezierPatchMaterial {
    fn vertex_shader() -> ShaderRef {
        ShaderRef::Handle(BEZIER_PATCH_SHADER_HANDLE)
    }

    fn fragment_shader() -> ShaderRef {
        ShaderRef::Handle(BEZIER_PATCH_SHADER_HANDLE)
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Ripples expose both faces.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// Owns the patch material. Dropping it releases the handle, and with it the
/// GPU buffer once no other strong handle remains.
#[derive(Component)]
pub struct PatchRenderer {
    material: Handle<BezierPatchMaterial>,
}

impl PatchRenderer {
    pub fn new(materials: &mut Assets<BezierPatchMaterial>, color: [f32; 3]) -> Self {
        let mut material = BezierPatchMaterial::default();
        material.params.base_color = Vec3::from_array(color).extend(1.0);
        PatchRenderer {
            material: materials.add(material),
        }
    }

    pub fn material(&self) -> Handle<BezierPatchMaterial> {
        self.material.clone()
    }

    /// Writes the 16 control points into the material. The render world
    /// extracts the changed asset after `Update`, so the write always lands
    /// before this frame's patch draw.
    pub fn upload_and_draw(&self, materials: &mut Assets<BezierPatchMaterial>, buffer: &[f32; PATCH_FLOATS]) -> bool {
        match materials.get_mut(&self.material) {
            Some(material) => {
                material.params.set_control_points(buffer);
                true
            }
            None => false,
        }
    }

    pub fn apply_lighting(&self, materials: &mut Assets<BezierPatchMaterial>, lighting: &SceneLighting) {
        if let Some(material) = materials.get_mut(&self.material) {
            material.lighting = *lighting;
        }
    }
}

/// Parameter-grid mesh the vertex stage displaces into the patch surface.
/// Positions hold the flat default layout; only the UVs drive the shader.
pub fn patch_mesh(level: u32) -> Mesh {
    let (uvs, indices) = parameter_grid(level);
    let positions: Vec<[f32; 3]> = uvs.iter().map(|uv| [uv.x, 1.0 - uv.y, 0.0]).collect();
    let uvs: Vec<[f32; 2]> = uvs.iter().map(|uv| uv.to_array()).collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

pub struct BezierPatchPlugin;

impl Plugin for BezierPatchPlugin {
    fn build(&self, app: &mut App) {
        load_internal_asset!(
            app,
            BEZIER_PATCH_SHADER_HANDLE,
            "../../assets/shaders/bezier_patch.wgsl",
            Shader::from_wgsl
        );
        // The displaced surface has no matching prepass or shadow shader.
        app.add_plugins(MaterialPlugin::<BezierPatchMaterial> {
            prepass_enabled: false,
            shadows_enabled: false,
            ..Default::default()
        });
    }
}

pub const BEZIER_PATCH_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x3B7E_91C4_0D52_4A6F);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modes::ShadingMode;

    #[test]
    fn control_points_are_packed_from_flat_buffer() {
        let mut grid = ControlGrid::default();
        grid.set_elevation(5, 0.7).unwrap();
        let mut params = BezierPatchParams::default();
        params.set_control_points(&grid.to_buffer());
        assert_eq!(params.control_points[5].truncate(), grid.points()[5]);
        assert_eq!(params.control_points[5].z, 0.7);
    }

    #[test]
    fn lighting_is_copied_into_owned_material() {
        let mut materials = Assets::<BezierPatchMaterial>::default();
        let renderer = PatchRenderer::new(&mut materials, [0.2, 0.2, 0.2]);
        let lighting = SceneLighting::new(ShadingMode::Flat, Vec3::NEG_Z, [0.5, 0.5, 0.7], Default::default());
        renderer.apply_lighting(&mut materials, &lighting);
        let stored = materials.get(&renderer.material()).unwrap();
        assert_eq!(stored.lighting, lighting);
        assert_eq!(stored.lighting.shading(), 0);
    }

    #[test]
    fn upload_writes_into_owned_material() {
        let mut materials = Assets::<BezierPatchMaterial>::default();
        let renderer = PatchRenderer::new(&mut materials, [0.2, 0.2, 0.2]);
        let mut buffer = ControlGrid::default().to_buffer();
        buffer[47] = -0.5;
        assert!(renderer.upload_and_draw(&mut materials, &buffer));
        let stored = materials.get(&renderer.material()).unwrap();
        assert_eq!(stored.params.control_points[15].z, -0.5);
    }

    #[test]
    fn patch_mesh_has_uv_grid() {
        let mesh = patch_mesh(8);
        assert_eq!(mesh.count_vertices(), 81);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_UV_0).is_some());
        assert_eq!(mesh.indices().map(|i| i.len()), Some(8 * 8 * 6));
    }
}
