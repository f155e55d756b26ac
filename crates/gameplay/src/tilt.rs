use bevy::prelude::*;

use ab_core::{SensorHandle, TiltState, WorldSettingsRes};

use crate::LOG_TARGET;

/// Drains the sensor slot once per frame. While the accelerometer is off samples are dropped
/// and any held tilt is released, so gravity falls back to straight down.
pub fn poll_sensor(
    sensor: Res<SensorHandle>,
    settings: Res<WorldSettingsRes>,
    mut tilt: ResMut<TiltState>,
) {
    let sample = sensor.take_latest();
    if !settings.0.accelerometer {
        if tilt.latest.is_some() {
            debug!(target: LOG_TARGET, "accelerometer off, tilt released");
            tilt.latest = None;
        }
        return;
    }
    if let Some(s) = sample {
        tilt.latest = Some(s.tilt());
    }
}
