pub mod flight;
pub mod patch;
pub mod camera;
pub mod lighting;
pub mod environment;
pub mod debug_draw;
pub mod overlay;
