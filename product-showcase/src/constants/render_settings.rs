use bevy::prelude::Vec3;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera offset along +Z from the slot origin, looking down -Z.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Model spin around Y in radians per second (0.01 rad per frame at 60 Hz).
pub const ROTATION_SPEED: f32 = 0.6;

pub const AMBIENT_BRIGHTNESS: f32 = 800.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 4_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.5);
