//! Amaze Balls: tap to drop balls into a box, tune gravity and bounciness, tilt to pour.
//!
//! The crates compose as: `ab_settings` (draft → outcome) → `ab_gameplay` (world controller)
//! → `ab_physics` (factories, gravity, contacts on top of Rapier). `ab_core` carries the
//! shared vocabulary and `ab_config` the RON configuration.

use std::path::Path;

use bevy::prelude::*;

pub mod tilt_keys;

pub use ab_config::{BallType, GameConfig, WorldSettings};
pub use ab_core::{CorePlugin, GameConfigRes, SensorHandle, WorldSettingsRes};
pub use ab_gameplay::GameplayPlugin;
pub use ab_physics::PhysicsPlugin;
pub use ab_settings::{SettingsPlugin, SettingsStore};
pub use tilt_keys::KeyTiltPlugin;

/// Core, physics, world controller and settings bridge. Insert `GameConfigRes` (and
/// optionally `WorldSettingsRes`, `SensorHandle`, `SettingsStore`) before adding it.
pub struct AmazeBallsPlugin;

impl Plugin for AmazeBallsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CorePlugin)
            .add_plugins(PhysicsPlugin)
            .add_plugins(GameplayPlugin)
            .add_plugins(SettingsPlugin);
    }
}

/// `game.ron` overlaid by `game.local.ron` from `dir`. Problems are logged; never fails.
pub fn load_config(dir: &Path) -> GameConfig {
    let (cfg, used, errors) =
        GameConfig::load_layered([dir.join("game.ron"), dir.join("game.local.ron")]);
    for e in errors {
        warn!("CONFIG LOAD ISSUE: {e}");
    }
    if used.is_empty() {
        info!("No config layers found; using defaults");
    } else {
        info!(?used, "Config layers loaded");
    }
    for w in cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
    cfg
}

/// Persisted settings if present and readable, else the config-derived defaults.
pub fn initial_world_settings(cfg: &GameConfig, store: &SettingsStore) -> anyhow::Result<WorldSettings> {
    let loaded = store
        .load()
        .map_err(anyhow::Error::msg)
        .map_err(|e| e.context("loading persisted settings"))?;
    Ok(loaded.unwrap_or_else(|| cfg.initial_settings()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_dir_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope"));
        assert_eq!(cfg.window.width, GameConfig::default().window.width);
    }

    #[test]
    fn unreadable_settings_surface_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "not ron at all (").unwrap();
        let err = initial_world_settings(&GameConfig::default(), &SettingsStore::new(&path))
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("loading persisted settings"));
    }
}
