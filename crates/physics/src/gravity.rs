use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use ab_config::WorldSettings;
use ab_core::{GameConfigRes, TiltState, WorldSettingsRes};

use crate::LOG_TARGET;

/// Gravity currently in effect, in m/s² (scene units are pixels; Rapier receives `value * pixels_per_meter`).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldGravity(pub Vec2);

impl Default for WorldGravity {
    fn default() -> Self {
        Self(gravity_vector(&WorldSettings::default(), None))
    }
}

/// Straight down at the configured magnitude, or along the latest tilt when the accelerometer
/// is on and a sample has arrived. Tilt components are scaled, not normalized.
pub fn gravity_vector(settings: &WorldSettings, tilt: Option<Vec2>) -> Vec2 {
    match tilt {
        Some(t) if settings.accelerometer => t * settings.gravity,
        _ => Vec2::new(0.0, -settings.gravity),
    }
}

pub fn apply_world_gravity(
    settings: Res<WorldSettingsRes>,
    tilt: Res<TiltState>,
    cfg: Res<GameConfigRes>,
    mut current: ResMut<WorldGravity>,
    mut rapier_cfg: Query<&mut RapierConfiguration>,
) {
    let g = gravity_vector(&settings.0, tilt.latest);
    if current.0 != g {
        debug!(target: LOG_TARGET, "gravity -> ({:.2}, {:.2})", g.x, g.y);
        current.0 = g;
    }
    let scaled = g * cfg.0.physics.pixels_per_meter;
    for mut rc in &mut rapier_cfg {
        if rc.gravity != scaled {
            rc.gravity = scaled;
        }
    }
}
