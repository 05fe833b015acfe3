use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct MainDirectionalLight;

// The rendered body that follows the flight path.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct FlyingBody;

#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub enum BodyLight {
    Nose,
    Belly,
}

#[derive(Component)]
pub struct StreetLamp;

// Entity carrying the tessellated Bezier patch mesh.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct BezierSurface;

#[derive(Component)]
pub struct StatusOverlay;
