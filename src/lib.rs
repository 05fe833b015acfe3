pub mod core;
pub mod management;
pub mod materials;
pub mod spawning;
pub mod systems;
