//! ab_physics: Rapier integration for the ball scene.
//!
//! * Body and wall factories (`factory`) producing descriptors and spawn bundles.
//! * Category bits mapped onto Rapier collision groups.
//! * World gravity, fixed or accelerometer driven, pushed into `RapierConfiguration`.
//! * Contact classification and counters.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use ab_core::{GameConfigRes, PostPhysicsAdjustSet, PrePhysicsSet};

pub mod categories;
pub mod contacts;
pub mod factory;
pub mod gravity;

pub use categories::{collision_groups, pair_interacts};
pub use contacts::{classify_contact, ContactKind, ContactObserved, ContactStats};
pub use factory::{
    bounding_walls, boundary_edge, create_ball, create_wall, resolve_ball_type, BallDescriptor,
    BodyKind, EdgeDescriptor, WallDescriptor, WallLayout,
};
pub use gravity::{gravity_vector, WorldGravity};

pub(crate) const LOG_TARGET: &str = "physics";

/// Installs Rapier scaled by `physics.pixels_per_meter`. Expects `CorePlugin` first.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        let ppm = app
            .world()
            .get_resource::<GameConfigRes>()
            .map(|c| c.0.physics.pixels_per_meter)
            .unwrap_or(ab_config::PhysicsConfig::default().pixels_per_meter);
        info!(target: LOG_TARGET, "rapier at {ppm} px/m");

        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm))
            .init_resource::<WorldGravity>()
            .init_resource::<ContactStats>()
            .add_event::<ContactObserved>()
            .add_systems(Update, gravity::apply_world_gravity.in_set(PrePhysicsSet))
            .add_systems(Update, contacts::route_contacts.in_set(PostPhysicsAdjustSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_core::CorePlugin;

    #[test]
    fn plugin_initializes() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(CorePlugin)
            .add_plugins(PhysicsPlugin);
        app.update();
        assert!(app.world().contains_resource::<ContactStats>());
        assert_eq!(
            app.world().resource::<WorldGravity>().0,
            Vec2::new(0.0, -9.8)
        );
    }

    #[test]
    fn spawned_ball_bundle_gets_rapier_components() {
        use ab_config::{BallType, BallsConfig};
        use rand::{rngs::StdRng, SeedableRng};

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(CorePlugin)
            .add_plugins(PhysicsPlugin);
        let mut rng = StdRng::seed_from_u64(3);
        let d = create_ball(
            Vec2::new(0.0, 50.0),
            BallType::Baseball,
            0.8,
            &BallsConfig::default(),
            &mut rng,
        );
        let e = app.world_mut().spawn(d.bundle(true)).id();
        app.update();
        assert!(app.world().get::<RigidBody>(e).is_some());
        let r = app.world().get::<Restitution>(e).unwrap();
        assert_eq!(r.coefficient, 0.8);
        assert_eq!(r.combine_rule, CoefficientCombineRule::Max);
        let groups = app.world().get::<CollisionGroups>(e).unwrap();
        assert_eq!(groups.memberships.bits(), 0x1);
    }
}
