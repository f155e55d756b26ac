//! ab_gameplay: the world controller.
//!
//! Turns taps into balls, applies saved settings, keeps the bounding walls and boundary edge
//! in sync with the scene, feeds accelerometer tilt to gravity, and tracks the scene lifecycle.

use bevy::prelude::*;

use ab_core::{
    settings_panel_closed, InputSet, PostPhysicsAdjustSet, PrePhysicsSet, SettingsSet, SpawnSet,
};
use ab_physics::gravity::apply_world_gravity;

pub mod interactions;
pub mod lifecycle;
pub mod spawning;
pub mod tilt;
pub mod walls;
pub mod world;

pub use interactions::ActiveDrag;
pub use spawning::SpawnRng;
pub use walls::BoundingWalls;

pub(crate) const LOG_TARGET: &str = "gameplay";

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnRng>()
            .init_resource::<BoundingWalls>()
            .init_resource::<ActiveDrag>();

        app.add_systems(
            Update,
            (
                lifecycle::track_window_bounds,
                (interactions::handle_pointer, interactions::reset_on_key)
                    .run_if(settings_panel_closed),
            )
                .in_set(InputSet),
        )
        .add_systems(Update, world::apply_settings_outcome.in_set(SettingsSet))
        .add_systems(
            Update,
            (
                lifecycle::reset_scene,
                spawning::handle_taps,
                walls::sync_boundary_edge,
                walls::sync_bounding_walls,
            )
                .chain()
                .in_set(SpawnSet),
        )
        .add_systems(
            Update,
            (
                tilt::poll_sensor.before(apply_world_gravity),
                interactions::apply_drag_force,
            )
                .in_set(PrePhysicsSet),
        )
        .add_systems(
            Update,
            (lifecycle::cull_escaped_balls, lifecycle::track_scene_phase)
                .chain()
                .in_set(PostPhysicsAdjustSet),
        );
    }
}
