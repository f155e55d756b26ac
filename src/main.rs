/*!
Desktop host for Amaze Balls.

* Layered config (`assets/config/game.ron` + `game.local.ron`) with validation warnings.
* Persisted world settings from `settings_store.path`, falling back to config defaults.
* One `SensorHandle` shared with the keyboard tilt emulator.
* Rapier debug render gating (config + `debug` feature).
*/

use std::path::Path;

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierDebugRenderPlugin;

use amaze_balls::{
    initial_world_settings, load_config, AmazeBallsPlugin, GameConfigRes, KeyTiltPlugin,
    SensorHandle, SettingsStore, WorldSettingsRes,
};
use ab_core::RngSeed;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("MainCamera")));
}

fn main() -> anyhow::Result<()> {
    let cfg = load_config(Path::new("assets/config"));
    let store = SettingsStore::from_config(&cfg.settings_store);
    let settings = match initial_world_settings(&cfg, &store) {
        Ok(s) => s,
        Err(e) => {
            warn!("{e:#}; using config defaults");
            cfg.initial_settings()
        }
    };
    info!(?cfg.window, "Window config");
    info!(
        gravity = settings.gravity,
        bounciness = settings.bounciness,
        walls = settings.bounding_wall,
        accelerometer = settings.accelerometer,
        ball = settings.ball_type.name(),
        "Initial world settings"
    );

    let sensor = SensorHandle::new();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let mut app = App::new();
    app.insert_resource(GameConfigRes(cfg.clone()))
        .insert_resource(WorldSettingsRes(settings))
        .insert_resource(store)
        .insert_resource(sensor)
        .insert_resource(RngSeed(seed))
        .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(AmazeBallsPlugin)
        .add_systems(Startup, setup_camera);

    if cfg.accelerometer.emulate_with_keys {
        app.add_plugins(KeyTiltPlugin);
    }

    // Balls have no sprites; the debug renderer draws the colliders.
    #[cfg(feature = "debug")]
    {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
    #[cfg(not(feature = "debug"))]
    {
        if cfg.rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }

    app.run();
    Ok(())
}
