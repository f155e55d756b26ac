//! Body and wall factories.
//!
//! Both produce plain descriptors first (easy to inspect and test) and only then turn
//! them into Rapier component bundles. Nothing here touches the world.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use ab_config::{BallType, BallsConfig};
use ab_core::{Ball, BoundaryEdge, CategoryMask, CollisionCategory, Wall, WallEdge};

use crate::categories::collision_groups;

/// Whether the engine integrates the body (dynamic) or treats it as immovable (static).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Dynamic,
    Static,
}

impl BodyKind {
    pub fn rigid_body(self) -> RigidBody {
        match self {
            BodyKind::Dynamic => RigidBody::Dynamic,
            BodyKind::Static => RigidBody::Fixed,
        }
    }
}

/// `Random` resolves uniformly over the concrete types; anything else is returned unchanged.
pub fn resolve_ball_type<R: Rng + ?Sized>(requested: BallType, rng: &mut R) -> BallType {
    if requested.is_random() {
        BallType::CONCRETE[rng.gen_range(0..BallType::CONCRETE.len())]
    } else {
        requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallDescriptor {
    pub kind: BallType,
    pub position: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
    pub body: BodyKind,
    pub category: CollisionCategory,
    pub collides_with: CategoryMask,
}

pub fn create_ball<R: Rng + ?Sized>(
    location: Vec2,
    ball_type: BallType,
    bounciness: f32,
    catalog: &BallsConfig,
    rng: &mut R,
) -> BallDescriptor {
    let kind = resolve_ball_type(ball_type, rng);
    let shape = catalog.shape_for(kind);
    BallDescriptor {
        kind,
        position: location,
        radius: shape.radius,
        mass: shape.mass,
        friction: catalog.friction,
        restitution: bounciness,
        body: BodyKind::Dynamic,
        category: CollisionCategory::Ball,
        collides_with: CollisionCategory::Ball.collides_with(),
    }
}

impl BallDescriptor {
    /// Component bundle for spawning. Restitution combines with `Max` so a ball keeps its own
    /// bounciness against walls and the edge, which carry none.
    pub fn bundle(&self, ccd: bool) -> impl Bundle {
        (
            Ball {
                kind: self.kind,
                radius: self.radius,
                restitution: self.restitution,
            },
            self.category,
            Name::new(format!("Ball:{}", self.kind.name())),
            Transform::from_translation(self.position.extend(0.0)),
            self.body.rigid_body(),
            Collider::ball(self.radius),
            ColliderMassProperties::Mass(self.mass),
            Restitution {
                coefficient: self.restitution,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction::coefficient(self.friction),
            collision_groups(self.category),
            ActiveEvents::COLLISION_EVENTS,
            Velocity::zero(),
            Ccd { enabled: ccd },
        )
    }
}

/// Frame and thickness the wall factory lays walls against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallLayout {
    pub bounds: Rect,
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallDescriptor {
    pub edge: WallEdge,
    pub position: Vec2,
    pub rotation: f32,
    /// Local half extents: x along the wall, y across it.
    pub half_extents: Vec2,
    pub body: BodyKind,
    pub category: CollisionCategory,
    pub collides_with: CategoryMask,
}

/// Static wall spanning `edge`, inset by half its thickness, rotated by `rotation` about its centre.
pub fn create_wall(edge: WallEdge, rotation: f32, layout: &WallLayout) -> WallDescriptor {
    let r = layout.bounds;
    let half_t = layout.thickness * 0.5;
    let center = r.center();
    let (position, length) = match edge {
        WallEdge::Bottom => (Vec2::new(center.x, r.min.y + half_t), r.width()),
        WallEdge::Top => (Vec2::new(center.x, r.max.y - half_t), r.width()),
        WallEdge::Left => (Vec2::new(r.min.x + half_t, center.y), r.height()),
        WallEdge::Right => (Vec2::new(r.max.x - half_t, center.y), r.height()),
    };
    WallDescriptor {
        edge,
        position,
        rotation,
        half_extents: Vec2::new(length * 0.5, half_t),
        body: BodyKind::Static,
        category: CollisionCategory::Wall,
        collides_with: CollisionCategory::Wall.collides_with(),
    }
}

/// One wall per scene edge, each laid along its edge.
pub fn bounding_walls(layout: &WallLayout) -> [WallDescriptor; 4] {
    WallEdge::ALL.map(|edge| create_wall(edge, edge.default_rotation(), layout))
}

impl WallDescriptor {
    pub fn bundle(&self) -> impl Bundle {
        (
            Wall {
                edge: self.edge,
                rotation: self.rotation,
            },
            self.category,
            Name::new(self.edge.label()),
            Transform::from_translation(self.position.extend(0.0))
                .with_rotation(Quat::from_rotation_z(self.rotation)),
            self.body.rigid_body(),
            Collider::cuboid(self.half_extents.x, self.half_extents.y),
            collision_groups(self.category),
        )
    }
}

/// Closed loop tracing the scene frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDescriptor {
    /// Counter-clockwise from bottom-left.
    pub corners: [Vec2; 4],
    pub body: BodyKind,
    pub category: CollisionCategory,
}

pub fn boundary_edge(bounds: Rect) -> EdgeDescriptor {
    EdgeDescriptor {
        corners: [
            bounds.min,
            Vec2::new(bounds.max.x, bounds.min.y),
            bounds.max,
            Vec2::new(bounds.min.x, bounds.max.y),
        ],
        body: BodyKind::Static,
        category: CollisionCategory::Edge,
    }
}

impl EdgeDescriptor {
    pub fn segments(&self) -> [(Vec2, Vec2); 4] {
        let c = self.corners;
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    pub fn bundle(&self) -> impl Bundle {
        let shapes: Vec<(Vec2, f32, Collider)> = self
            .segments()
            .iter()
            .map(|(a, b)| (Vec2::ZERO, 0.0, Collider::segment(*a, *b)))
            .collect();
        (
            BoundaryEdge,
            self.category,
            Name::new("BoundaryEdge"),
            Transform::IDENTITY,
            self.body.rigid_body(),
            Collider::compound(shapes),
            collision_groups(self.category),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn layout_320x480() -> WallLayout {
        WallLayout {
            bounds: Rect::from_center_size(Vec2::ZERO, Vec2::new(320.0, 480.0)),
            thickness: 16.0,
        }
    }

    #[test]
    fn every_type_spawns_as_ball_with_supplied_restitution() {
        let catalog = BallsConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for t in BallType::CONCRETE.into_iter().chain([BallType::Random]) {
            let d = create_ball(Vec2::new(10.0, 20.0), t, 0.37, &catalog, &mut rng);
            assert_eq!(d.category, CollisionCategory::Ball);
            assert_eq!(d.restitution, 0.37);
            assert_eq!(d.body, BodyKind::Dynamic);
            assert_eq!(d.collides_with, CategoryMask::ALL);
            assert!(!d.kind.is_random());
        }
    }

    #[test]
    fn basketball_at_100_100() {
        let mut rng = StdRng::seed_from_u64(0);
        let d = create_ball(
            Vec2::new(100.0, 100.0),
            BallType::Basketball,
            0.5,
            &BallsConfig::default(),
            &mut rng,
        );
        assert_eq!(d.kind, BallType::Basketball);
        assert_eq!(d.position, Vec2::new(100.0, 100.0));
        assert_eq!(d.category, CollisionCategory::Ball);
        assert_eq!(d.restitution, 0.5);
        assert_eq!(d.radius, BallsConfig::default().shape_for(BallType::Basketball).radius);
    }

    #[test]
    fn random_is_deterministic_per_seed_and_covers_types() {
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..64)
                .map(|_| resolve_ball_type(BallType::Random, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(9), pick(9));
        let seen = pick(9);
        assert!(seen.iter().all(|t| !t.is_random()));
        let distinct: std::collections::HashSet<_> = seen.into_iter().collect();
        assert!(distinct.len() > 3, "64 draws should hit most of the 7 types");
    }

    #[test]
    fn walls_are_static_and_only_touch_balls() {
        let layout = layout_320x480();
        for edge in WallEdge::ALL {
            for rotation in [0.0, 0.3, std::f32::consts::FRAC_PI_2] {
                let w = create_wall(edge, rotation, &layout);
                assert_eq!(w.body, BodyKind::Static);
                assert_eq!(w.category, CollisionCategory::Wall);
                assert_eq!(w.collides_with, CategoryMask::BALL);
                assert_eq!(w.rotation, rotation);
            }
        }
    }

    #[test]
    fn bounding_walls_sit_inside_each_edge() {
        let walls = bounding_walls(&layout_320x480());
        assert_eq!(walls.len(), 4);
        let by_edge = |e| walls.iter().find(|w| w.edge == e).copied().unwrap();
        assert_eq!(by_edge(WallEdge::Bottom).position, Vec2::new(0.0, -232.0));
        assert_eq!(by_edge(WallEdge::Top).position, Vec2::new(0.0, 232.0));
        assert_eq!(by_edge(WallEdge::Left).position, Vec2::new(-152.0, 0.0));
        assert_eq!(by_edge(WallEdge::Right).position, Vec2::new(152.0, 0.0));
        assert_eq!(by_edge(WallEdge::Bottom).half_extents, Vec2::new(160.0, 8.0));
        assert_eq!(by_edge(WallEdge::Left).half_extents, Vec2::new(240.0, 8.0));
        assert_eq!(by_edge(WallEdge::Left).rotation, std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn edge_loop_is_closed() {
        let e = boundary_edge(Rect::from_center_size(Vec2::ZERO, Vec2::new(320.0, 480.0)));
        assert_eq!(e.body, BodyKind::Static);
        assert_eq!(e.category, CollisionCategory::Edge);
        let segs = e.segments();
        for i in 0..4 {
            assert_eq!(segs[i].1, segs[(i + 1) % 4].0);
        }
        assert_eq!(segs[0].0, Vec2::new(-160.0, -240.0));
    }
}
