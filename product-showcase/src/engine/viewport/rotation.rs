use crate::constants::render_settings::ROTATION_SPEED;
use bevy::prelude::*;

/// Spins an entity around its local Y axis every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct Rotating {
    pub radians_per_second: f32,
}

impl Default for Rotating {
    fn default() -> Self {
        Self {
            radians_per_second: ROTATION_SPEED,
        }
    }
}

pub fn rotate_visible_models(time: Res<Time>, mut query: Query<(&mut Transform, &Rotating)>) {
    let dt = time.delta_secs();
    for (mut transform, rotating) in &mut query {
        transform.rotate_y(rotating.radians_per_second * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn rotates_by_speed_times_elapsed_time() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(500));
        world.insert_resource(time);

        let spinning = world
            .spawn((Transform::default(), Rotating { radians_per_second: 1.0 }))
            .id();
        let still = world.spawn(Transform::default()).id();

        world.run_system_once(rotate_visible_models).unwrap();

        let (_, angle) = world
            .get::<Transform>(spinning)
            .unwrap()
            .rotation
            .to_axis_angle();
        assert!((angle - 0.5).abs() < 1e-5);
        assert_eq!(world.get::<Transform>(still).unwrap().rotation, Quat::IDENTITY);
    }
}
