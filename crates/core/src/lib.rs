//! ab_core: shared ECS vocabulary (components, resources, events, system sets) used across
//! the game crates.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod resources;
pub mod sensor;

pub use ab_config::{BallType, GameConfig, WorldSettings};
pub use components::*;
pub use events::*;
pub use resources::*;
pub use sensor::{AccelSample, SensorHandle};

// Frame ordering inside `Update`. Rapier steps afterwards in `PostUpdate`.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct InputSet; // pointer / keyboard -> events
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct SettingsSet; // settings outcomes applied to the world
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct SpawnSet; // bodies added / removed
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct PrePhysicsSet; // forces and gravity written before the physics step
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct PostPhysicsAdjustSet; // bookkeeping after the world changed

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                InputSet,
                SettingsSet,
                SpawnSet,
                PrePhysicsSet,
                PostPhysicsAdjustSet,
            )
                .chain(),
        );

        let cfg = app
            .world_mut()
            .get_resource_or_insert_with::<GameConfigRes>(GameConfigRes::default)
            .0
            .clone();
        if !app.world().contains_resource::<WorldSettingsRes>() {
            app.insert_resource(WorldSettingsRes(cfg.initial_settings()));
        }
        if !app.world().contains_resource::<SceneBounds>() {
            app.insert_resource(SceneBounds::from_size(cfg.window.width, cfg.window.height));
        }

        app.add_event::<TapEvent>()
            .add_event::<BallSpawned>()
            .add_event::<SettingsOutcome>()
            .add_event::<ResetScene>()
            .init_resource::<SensorHandle>()
            .init_resource::<TiltState>()
            .init_resource::<ScenePhase>()
            .init_resource::<SettingsPanelOpen>()
            .init_resource::<RngSeed>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_adds_sets() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        fn dummy() {}
        app.add_systems(Update, dummy.in_set(InputSet));
        app.add_systems(Update, dummy.in_set(PrePhysicsSet));
        app.add_systems(Update, dummy.in_set(PostPhysicsAdjustSet));
        app.update();
    }

    #[test]
    fn settings_and_bounds_derive_from_config() {
        let mut cfg = GameConfig::default();
        cfg.window.width = 320.0;
        cfg.window.height = 480.0;
        cfg.walls.enabled = true;
        cfg.gravity.magnitude = 4.0;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfigRes(cfg));
        app.add_plugins(CorePlugin);

        let settings = &app.world().resource::<WorldSettingsRes>().0;
        assert!(settings.bounding_wall);
        assert_eq!(settings.gravity, 4.0);
        let bounds = app.world().resource::<SceneBounds>();
        assert_eq!(bounds.size(), Vec2::new(320.0, 480.0));
        assert_eq!(*app.world().resource::<ScenePhase>(), ScenePhase::Idle);
    }

    #[test]
    fn preinserted_settings_are_kept() {
        let persisted = WorldSettings {
            ball_type: BallType::Football,
            ..Default::default()
        };
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(WorldSettingsRes(persisted.clone()));
        app.add_plugins(CorePlugin);
        assert_eq!(app.world().resource::<WorldSettingsRes>().0, persisted);
    }
}
