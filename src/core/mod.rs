pub mod viewer_error;
pub mod path_parameters;
pub mod pose;
pub mod flight_pose;
pub mod control_grid;
pub mod patch_controller;
pub mod bezier;
pub mod modes;
pub mod camera_policy;
pub mod body_lights;
pub mod components;
pub mod simulation;
pub mod viewer_plugin;
