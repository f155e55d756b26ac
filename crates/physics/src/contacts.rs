//! Contact routing. Rapier reports started contacts between entities; here they are tagged by
//! the categories involved, counted, and re-emitted with the ball first.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use ab_core::CollisionCategory;

use crate::LOG_TARGET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    BallBall,
    BallWall,
    BallEdge,
}

/// `None` for pairs that never collide (wall/edge against wall/edge).
pub fn classify_contact(a: CollisionCategory, b: CollisionCategory) -> Option<ContactKind> {
    use ab_core::CollisionCategory as C;
    match (a, b) {
        (C::Ball, C::Ball) => Some(ContactKind::BallBall),
        (C::Ball, C::Wall) | (C::Wall, C::Ball) => Some(ContactKind::BallWall),
        (C::Ball, C::Edge) | (C::Edge, C::Ball) => Some(ContactKind::BallEdge),
        _ => None,
    }
}

/// A started contact. `ball` is always a ball; `other` is whatever it hit.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ContactObserved {
    pub kind: ContactKind,
    pub ball: Entity,
    pub other: Entity,
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub ball_ball: u64,
    pub ball_wall: u64,
    pub ball_edge: u64,
}

impl ContactStats {
    pub fn record(&mut self, kind: ContactKind) {
        match kind {
            ContactKind::BallBall => self.ball_ball += 1,
            ContactKind::BallWall => self.ball_wall += 1,
            ContactKind::BallEdge => self.ball_edge += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.ball_ball + self.ball_wall + self.ball_edge
    }
}

pub fn route_contacts(
    mut collisions: EventReader<CollisionEvent>,
    categories: Query<&CollisionCategory>,
    mut stats: ResMut<ContactStats>,
    mut observed: EventWriter<ContactObserved>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        // Either side may already be despawned (culled this frame).
        let (Ok(c1), Ok(c2)) = (categories.get(*e1), categories.get(*e2)) else {
            continue;
        };
        let Some(kind) = classify_contact(*c1, *c2) else {
            warn!(target: LOG_TARGET, "unexpected contact {:?} <-> {:?}", c1, c2);
            continue;
        };
        let (ball, other) = if *c1 == CollisionCategory::Ball {
            (*e1, *e2)
        } else {
            (*e2, *e1)
        };
        stats.record(kind);
        trace!(target: LOG_TARGET, "{:?}: {:?} <-> {:?}", kind, ball, other);
        observed.write(ContactObserved { kind, ball, other });
    }
}
