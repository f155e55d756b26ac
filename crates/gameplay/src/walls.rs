//! Scene frame bodies: the always-present boundary edge plus the four optional bounding walls.

use bevy::prelude::*;
use smallvec::SmallVec;

use ab_core::{BoundaryEdge, GameConfigRes, SceneBounds, WorldSettingsRes};
use ab_physics::{boundary_edge, bounding_walls, WallLayout};

use crate::LOG_TARGET;

/// Live bounding-wall entities. Empty when walls are off, exactly four when on.
#[derive(Resource, Debug, Default)]
pub struct BoundingWalls(pub SmallVec<[Entity; 4]>);

impl BoundingWalls {
    pub fn is_up(&self) -> bool {
        !self.0.is_empty()
    }
}

/// Keeps the wall set in line with `bounding_wall`. Walls are rebuilt when the scene bounds move.
pub fn sync_bounding_walls(
    mut commands: Commands,
    settings: Res<WorldSettingsRes>,
    bounds: Res<SceneBounds>,
    cfg: Res<GameConfigRes>,
    mut walls: ResMut<BoundingWalls>,
) {
    if !settings.is_changed() && !bounds.is_changed() {
        return;
    }
    let wanted = settings.0.bounding_wall;
    if walls.is_up() && (!wanted || bounds.is_changed()) {
        for e in walls.0.drain(..) {
            commands.entity(e).despawn();
        }
        if !wanted {
            info!(target: LOG_TARGET, "bounding walls removed");
        }
    }
    if wanted && !walls.is_up() {
        let layout = WallLayout {
            bounds: bounds.rect,
            thickness: cfg.0.walls.thickness,
        };
        for d in bounding_walls(&layout) {
            walls.0.push(commands.spawn(d.bundle()).id());
        }
        info!(
            target: LOG_TARGET,
            "bounding walls up ({}x{})",
            bounds.size().x,
            bounds.size().y
        );
    }
}

/// One boundary edge per scene, replaced whenever the bounds change.
pub fn sync_boundary_edge(
    mut commands: Commands,
    bounds: Res<SceneBounds>,
    existing: Query<Entity, With<BoundaryEdge>>,
) {
    if !bounds.is_changed() {
        return;
    }
    for e in &existing {
        commands.entity(e).despawn();
    }
    commands.spawn(boundary_edge(bounds.rect).bundle());
    debug!(target: LOG_TARGET, "boundary edge at {:?}", bounds.rect);
}
