pub mod lighting;
pub mod bezier_patch;
pub mod scene_shading;
