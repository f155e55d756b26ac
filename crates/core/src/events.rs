use bevy::prelude::*;

use ab_config::{BallType, WorldSettings};

/// A tap on the playfield in scene coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub position: Vec2,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct BallSpawned {
    pub entity: Entity,
    pub kind: BallType,
    pub position: Vec2,
}

/// Result of a settings session: saved as one unit, or discarded.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SettingsOutcome {
    Saved(WorldSettings),
    Cancelled,
}

/// Removes every live ball; walls and the boundary edge stay.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetScene;
