//! Desktop stand-in for a device accelerometer: arrow keys tilt, Space levels.
//! Samples go through the same `SensorHandle` a platform sensor thread would use.

use bevy::prelude::*;

use ab_core::{AccelSample, GameConfigRes, InputSet, SensorHandle};

const LOG_TARGET: &str = "tilt_keys";

/// Emulated device tilt, length at most 1.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyTilt(pub Vec2);

/// Publishes the held tilt every frame, like a platform sensor streaming at a fixed rate.
/// Without keyboard input the tilt is held as is.
pub fn emulate_tilt(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    time: Res<Time>,
    cfg: Res<GameConfigRes>,
    sensor: Res<SensorHandle>,
    mut tilt: ResMut<KeyTilt>,
) {
    if let Some(keys) = keys {
        let mut dir = Vec2::ZERO;
        if keys.pressed(KeyCode::ArrowLeft) {
            dir.x -= 1.0;
        }
        if keys.pressed(KeyCode::ArrowRight) {
            dir.x += 1.0;
        }
        if keys.pressed(KeyCode::ArrowDown) {
            dir.y -= 1.0;
        }
        if keys.pressed(KeyCode::ArrowUp) {
            dir.y += 1.0;
        }

        let next = if keys.just_pressed(KeyCode::Space) {
            Vec2::ZERO
        } else {
            (tilt.0 + dir * cfg.0.accelerometer.key_tilt_rate * time.delta_secs())
                .clamp_length_max(1.0)
        };
        if tilt.set_if_neq(KeyTilt(next)) {
            trace!(target: LOG_TARGET, "tilt ({:.2}, {:.2})", next.x, next.y);
        }
    }
    sensor.publish(AccelSample::new(tilt.0.x, tilt.0.y, -1.0));
}

pub struct KeyTiltPlugin;

impl Plugin for KeyTiltPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyTilt>()
            .add_systems(Update, emulate_tilt.in_set(InputSet));
    }
}
