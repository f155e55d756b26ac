//! Scene lifecycle: reset, out-of-bounds culling, window tracking and the Idle/Active phase.

use bevy::prelude::*;

use ab_core::{Ball, GameConfigRes, ResetScene, SceneBounds, ScenePhase};

use crate::LOG_TARGET;

pub fn reset_scene(
    mut commands: Commands,
    mut resets: EventReader<ResetScene>,
    balls: Query<Entity, With<Ball>>,
) {
    if resets.read().count() == 0 {
        return;
    }
    let mut removed = 0usize;
    for e in &balls {
        commands.entity(e).despawn();
        removed += 1;
    }
    info!(target: LOG_TARGET, "scene reset, {removed} balls removed");
}

/// Balls that escaped past the cull margin (tunnelled out, flung by a drag) are dropped.
pub fn cull_escaped_balls(
    mut commands: Commands,
    balls: Query<(Entity, &Transform), With<Ball>>,
    bounds: Res<SceneBounds>,
    cfg: Res<GameConfigRes>,
) {
    let keep = bounds.inflated(cfg.0.scene.cull_margin);
    for (e, tf) in &balls {
        let p = tf.translation.truncate();
        if !keep.contains(p) {
            debug!(target: LOG_TARGET, "culling {:?} at ({:.0}, {:.0})", e, p.x, p.y);
            commands.entity(e).despawn();
        }
    }
}

pub fn track_scene_phase(balls: Query<(), With<Ball>>, mut phase: ResMut<ScenePhase>) {
    let next = ScenePhase::for_ball_count(balls.iter().count());
    if *phase != next {
        info!(target: LOG_TARGET, "scene {:?} -> {:?}", *phase, next);
        *phase = next;
    }
}

/// Scene bounds follow the primary window's logical size.
pub fn track_window_bounds(
    windows: Query<&Window, Changed<Window>>,
    mut bounds: ResMut<SceneBounds>,
) {
    let Some(window) = windows.iter().next() else {
        return;
    };
    let next = SceneBounds::from_size(window.width(), window.height());
    if next.size().min_element() <= 0.0 {
        return; // minimized
    }
    if bounds.set_if_neq(next) {
        info!(
            target: LOG_TARGET,
            "scene bounds -> {}x{}",
            next.size().x,
            next.size().y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_core::{BallType, CorePlugin};

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(CorePlugin);
        app.insert_resource(SceneBounds::from_size(320.0, 480.0));
        app.add_systems(
            Update,
            (
                reset_scene,
                cull_escaped_balls,
                track_scene_phase,
                track_window_bounds,
            )
                .chain(),
        );
        app
    }

    fn ball_at(app: &mut App, p: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Ball {
                    kind: BallType::AmazeBall,
                    radius: 10.0,
                    restitution: 0.5,
                },
                Transform::from_translation(p.extend(0.0)),
            ))
            .id()
    }

    fn ball_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query_filtered::<(), With<Ball>>().iter(world).count()
    }

    #[test]
    fn reset_removes_every_ball() {
        let mut app = app();
        ball_at(&mut app, Vec2::ZERO);
        ball_at(&mut app, Vec2::new(10.0, 10.0));
        app.update();
        assert_eq!(*app.world().resource::<ScenePhase>(), ScenePhase::Active);

        app.world_mut().send_event(ResetScene);
        app.update();
        assert_eq!(ball_count(&mut app), 0);
        assert_eq!(*app.world().resource::<ScenePhase>(), ScenePhase::Idle);
    }

    #[test]
    fn escaped_balls_are_culled() {
        let mut app = app();
        let inside = ball_at(&mut app, Vec2::new(150.0, 0.0));
        // Within the margin is kept; default margin is 200.
        let margin = ball_at(&mut app, Vec2::new(300.0, 0.0));
        let gone = ball_at(&mut app, Vec2::new(0.0, -2000.0));
        app.update();
        assert!(app.world().get_entity(inside).is_ok());
        assert!(app.world().get_entity(margin).is_ok());
        assert!(app.world().get_entity(gone).is_err());
    }

    #[test]
    fn window_resize_moves_bounds() {
        let mut app = app();
        let mut window = Window::default();
        window.resolution.set(640.0, 960.0);
        app.world_mut().spawn(window);
        app.update();
        assert_eq!(
            app.world().resource::<SceneBounds>().size(),
            Vec2::new(640.0, 960.0)
        );
    }
}
