//! Pointer input: a press on a ball grabs it, a press on empty space is a tap (spawns a ball).
//! Keyboard `R` resets the scene.
//!
//! Input resources are optional so the systems degrade to no-ops in headless apps.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use ab_core::{Ball, GameConfigRes, ResetScene, TapEvent};

use crate::LOG_TARGET;

/// The ball currently held by the pointer, if any.
#[derive(Resource, Default, Debug)]
pub struct ActiveDrag {
    pub entity: Option<Entity>,
    pub last_pos: Option<Vec2>,
}

fn cursor_world_pos(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// First touch if any, else the mouse cursor, in world coordinates.
fn pointer_world_pos(
    window: &Window,
    touches: Option<&Touches>,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.and_then(|t| t.iter().next()) {
        return cursor_world_pos(camera_q, touch.position());
    }
    cursor_world_pos(camera_q, window.cursor_position()?)
}

/// Nearest ball whose grab circle (`max(grab_radius, ball radius)`) contains `point`.
pub fn pick_ball(
    point: Vec2,
    grab_radius: f32,
    balls: impl IntoIterator<Item = (Entity, Vec2, f32)>,
) -> Option<Entity> {
    let mut nearest: Option<(Entity, f32)> = None;
    for (e, pos, radius) in balls {
        let d2 = pos.distance_squared(point);
        let r = grab_radius.max(radius);
        if d2 > r * r {
            continue;
        }
        match nearest {
            Some((_, best)) if d2 >= best => {}
            _ => nearest = Some((e, d2)),
        }
    }
    nearest.map(|(e, _)| e)
}

pub fn handle_pointer(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    balls: Query<(Entity, &Transform, &Ball)>,
    mut active: ResMut<ActiveDrag>,
    mut taps: EventWriter<TapEvent>,
    cfg: Res<GameConfigRes>,
) {
    let touches = touches.as_deref();
    let pressed = buttons.as_ref().is_some_and(|b| b.just_pressed(MouseButton::Left))
        || touches.is_some_and(|t| t.iter_just_pressed().next().is_some());
    let released = buttons.as_ref().is_some_and(|b| b.just_released(MouseButton::Left))
        || touches.is_some_and(|t| t.iter_just_released().next().is_some());

    if released && active.entity.take().is_some() {
        active.last_pos = None;
        debug!(target: LOG_TARGET, "drag released");
    }
    let Some(window) = windows_q.iter().next() else {
        return;
    };
    let Some(world_pos) = pointer_world_pos(window, touches, &camera_q) else {
        return;
    };

    if pressed && active.entity.is_none() {
        let drag = &cfg.0.interactions.drag;
        let grabbed = drag
            .enabled
            .then(|| {
                pick_ball(
                    world_pos,
                    drag.grab_radius,
                    balls
                        .iter()
                        .map(|(e, tf, b)| (e, tf.translation.truncate(), b.radius)),
                )
            })
            .flatten();
        match grabbed {
            Some(e) => {
                active.entity = Some(e);
                debug!(target: LOG_TARGET, "drag {:?}", e);
            }
            None => {
                taps.write(TapEvent { position: world_pos });
            }
        }
    }
    if active.entity.is_some() {
        active.last_pos = Some(world_pos);
    }
}

/// Pulls the held ball toward the pointer.
pub fn apply_drag_force(
    time: Res<Time>,
    mut active: ResMut<ActiveDrag>,
    mut q: Query<(&Transform, &mut Velocity), With<Ball>>,
    cfg: Res<GameConfigRes>,
) {
    let drag = &cfg.0.interactions.drag;
    let (Some(entity), Some(target)) = (active.entity, active.last_pos) else {
        return;
    };
    let Ok((tf, mut vel)) = q.get_mut(entity) else {
        // Despawned mid-drag (culled or reset).
        active.entity = None;
        active.last_pos = None;
        return;
    };
    let to_pointer = target - tf.translation.truncate();
    let dist = to_pointer.length();
    if dist < 1e-3 {
        return;
    }
    vel.linvel += to_pointer / dist * drag.pull_strength * time.delta_secs();
    if drag.max_speed > 0.0 {
        vel.linvel = vel.linvel.clamp_length_max(drag.max_speed);
    }
}

pub fn reset_on_key(keys: Option<Res<ButtonInput<KeyCode>>>, mut resets: EventWriter<ResetScene>) {
    if keys.is_some_and(|k| k.just_pressed(KeyCode::KeyR)) {
        resets.write(ResetScene);
    }
}
