//! Tap-to-spawn. Each tap inside the scene drops one ball of the currently selected type with
//! the current bounciness; later settings changes never touch it.

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use ab_core::{BallSpawned, GameConfigRes, RngSeed, SceneBounds, TapEvent, WorldSettingsRes};
use ab_physics::create_ball;

use crate::LOG_TARGET;

/// RNG used to resolve `Random` ball picks. Seeded from `RngSeed` so tests are reproducible.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl FromWorld for SpawnRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world.get_resource::<RngSeed>().map(|s| s.0).unwrap_or_default();
        Self(StdRng::seed_from_u64(seed))
    }
}

pub fn handle_taps(
    mut commands: Commands,
    mut taps: EventReader<TapEvent>,
    bounds: Res<SceneBounds>,
    settings: Res<WorldSettingsRes>,
    cfg: Res<GameConfigRes>,
    mut rng: ResMut<SpawnRng>,
    mut spawned: EventWriter<BallSpawned>,
) {
    // With walls up only the space between them accepts taps.
    let accept = if settings.0.bounding_wall {
        bounds.rect.inflate(-cfg.0.walls.thickness)
    } else {
        bounds.rect
    };
    for tap in taps.read() {
        if !accept.contains(tap.position) {
            debug!(target: LOG_TARGET, "tap at {:?} outside play area, ignored", tap.position);
            continue;
        }
        let d = create_ball(
            tap.position,
            settings.0.ball_type,
            settings.0.bounciness,
            &cfg.0.balls,
            &mut rng.0,
        );
        let entity = commands.spawn(d.bundle(cfg.0.physics.ccd)).id();
        debug!(
            target: LOG_TARGET,
            "spawned {} at ({:.1}, {:.1}) r={:.1} e={:.2}",
            d.kind.name(),
            d.position.x,
            d.position.y,
            d.radius,
            d.restitution
        );
        spawned.write(BallSpawned {
            entity,
            kind: d.kind,
            position: d.position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_core::{Ball, BallType, CollisionCategory, CorePlugin};

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(CorePlugin);
        app.insert_resource(SceneBounds::from_size(320.0, 480.0));
        app.init_resource::<SpawnRng>();
        app.add_systems(Update, handle_taps);
        app
    }

    fn balls(app: &mut App) -> Vec<(Ball, CollisionCategory, Vec2)> {
        let world = app.world_mut();
        let mut q = world.query::<(&Ball, &CollisionCategory, &Transform)>();
        q.iter(world)
            .map(|(b, c, t)| (*b, *c, t.translation.truncate()))
            .collect()
    }

    #[test]
    fn tap_spawns_selected_type_with_current_bounciness() {
        let mut app = app();
        {
            let mut s = app.world_mut().resource_mut::<WorldSettingsRes>();
            s.0.ball_type = BallType::Basketball;
            s.0.bounciness = 0.5;
        }
        app.world_mut().send_event(TapEvent { position: Vec2::new(100.0, 100.0) });
        app.update();

        let spawned = balls(&mut app);
        assert_eq!(spawned.len(), 1);
        let (ball, cat, pos) = spawned[0];
        assert_eq!(ball.kind, BallType::Basketball);
        assert_eq!(ball.restitution, 0.5);
        assert_eq!(cat, CollisionCategory::Ball);
        assert_eq!(pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn taps_outside_the_scene_are_ignored() {
        let mut app = app();
        app.world_mut().send_event(TapEvent { position: Vec2::new(500.0, 0.0) });
        app.update();
        assert!(balls(&mut app).is_empty());
    }

    #[test]
    fn taps_on_a_wall_band_are_ignored_while_walls_are_up() {
        let mut app = app();
        let thickness = app.world().resource::<GameConfigRes>().0.walls.thickness;
        // Just inside the right edge, within the wall band.
        let on_wall = Vec2::new(160.0 - thickness * 0.5, 0.0);
        app.world_mut().resource_mut::<WorldSettingsRes>().0.bounding_wall = true;
        app.world_mut().send_event(TapEvent { position: on_wall });
        app.world_mut().send_event(TapEvent { position: Vec2::new(100.0, 0.0) });
        app.update();
        let spawned = balls(&mut app);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].2, Vec2::new(100.0, 0.0));

        app.world_mut().resource_mut::<WorldSettingsRes>().0.bounding_wall = false;
        app.world_mut().send_event(TapEvent { position: on_wall });
        app.update();
        assert_eq!(balls(&mut app).len(), 2);
    }

    #[test]
    fn random_selection_yields_concrete_types() {
        let mut app = app();
        app.world_mut().resource_mut::<WorldSettingsRes>().0.ball_type = BallType::Random;
        for i in 0..10 {
            app.world_mut().send_event(TapEvent { position: Vec2::new(i as f32, 0.0) });
        }
        app.update();
        let spawned = balls(&mut app);
        assert_eq!(spawned.len(), 10);
        assert!(spawned.iter().all(|(b, _, _)| !b.kind.is_random()));
    }
}
