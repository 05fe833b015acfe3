use bevy::prelude::*;
use bevy::pbr::NotShadowCaster;
use bevy::render::view::NoFrustumCulling;
use crate::core::components::BezierSurface;
use crate::management::viewer_config::PatchSettings;
use crate::materials::bezier_patch::{patch_mesh, BezierPatchMaterial, PatchRenderer};

// The vertex shader moves vertices off the placeholder plane, so the mesh
// AABB is meaningless and culling is disabled.
pub(crate) fn spawn_bezier_surface(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<BezierPatchMaterial>,
    settings: &PatchSettings,
) -> Entity {
    let renderer = PatchRenderer::new(materials, settings.color);
    let mesh_handle = meshes.add(patch_mesh(settings.tessellation_level));

    commands.spawn_empty()
        .insert(Mesh3d(mesh_handle))
        .insert(MeshMaterial3d(renderer.material()))
        .insert(settings.transform())
        .insert(Visibility::Hidden)
        .insert(NoFrustumCulling)
        .insert(NotShadowCaster)
        .insert(Name::new("BezierSurface"))
        .insert(BezierSurface)
        .insert(renderer)
        .id()
}
