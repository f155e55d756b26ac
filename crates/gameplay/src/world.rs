use bevy::prelude::*;

use ab_core::{SettingsOutcome, WorldSettingsRes};

use crate::LOG_TARGET;

/// A saved settings session replaces the live settings in one step. Existing balls keep the
/// restitution they were spawned with.
pub fn apply_settings_outcome(
    mut outcomes: EventReader<SettingsOutcome>,
    mut settings: ResMut<WorldSettingsRes>,
) {
    for outcome in outcomes.read() {
        match outcome {
            SettingsOutcome::Saved(next) => {
                if settings.0 == *next {
                    debug!(target: LOG_TARGET, "settings saved unchanged");
                    continue;
                }
                info!(
                    target: LOG_TARGET,
                    "settings applied: gravity={:.2} bounciness={:.2} walls={} accel={} ball={}",
                    next.gravity,
                    next.bounciness,
                    next.bounding_wall,
                    next.accelerometer,
                    next.ball_type.name()
                );
                settings.0 = next.clone();
            }
            SettingsOutcome::Cancelled => {
                debug!(target: LOG_TARGET, "settings cancelled");
            }
        }
    }
}
