//! ab_settings: the settings bridge.
//!
//! Collects control values into a draft, emits one `SettingsOutcome` per session and persists
//! saved settings as RON.

use bevy::prelude::*;

use ab_core::{GameConfigRes, InputSet, SettingsSet};

pub mod bridge;
pub mod controls;
pub mod store;

pub use bridge::{gravity_to_slider, slider_to_gravity, SettingsDraft};
pub use controls::SettingsPanel;
pub use store::SettingsStore;

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SettingsStore>() {
            let store = app
                .world()
                .get_resource::<GameConfigRes>()
                .map(|c| SettingsStore::from_config(&c.0.settings_store))
                .unwrap_or_else(|| SettingsStore::from_config(&Default::default()));
            app.insert_resource(store);
        }
        app.init_resource::<SettingsPanel>()
            .add_systems(
                Update,
                (controls::panel_keys, controls::sync_panel_open)
                    .chain()
                    .in_set(InputSet),
            )
            .add_systems(Update, controls::persist_saved.in_set(SettingsSet));
    }
}
