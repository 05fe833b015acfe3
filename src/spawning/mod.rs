pub mod light_spawning;
pub mod scene_spawning;
pub mod mesh_spawning;
