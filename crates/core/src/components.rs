use bevy::prelude::*;
use std::ops::BitOr;

use ab_config::BallType;

/// Physical role of a body. Every live body carries exactly one.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCategory {
    Ball,
    Wall,
    Edge,
}

impl CollisionCategory {
    pub const fn mask(self) -> CategoryMask {
        match self {
            CollisionCategory::Ball => CategoryMask::BALL,
            CollisionCategory::Wall => CategoryMask::WALL,
            CollisionCategory::Edge => CategoryMask::EDGE,
        }
    }

    /// Categories this role is allowed to touch.
    pub const fn collides_with(self) -> CategoryMask {
        match self {
            CollisionCategory::Ball => CategoryMask::ALL,
            CollisionCategory::Wall | CollisionCategory::Edge => CategoryMask::BALL,
        }
    }
}

/// Category bitmask (`ball = 1 << 0`, `wall = 1 << 1`, `edge = 1 << 2`).
///
/// Kept as plain bits so this crate stays free of Rapier; `ab_physics::categories::group`
/// converts it to Rapier's `Group` with `Group::from_bits_truncate`, bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryMask(pub u32);

impl CategoryMask {
    pub const NONE: Self = Self(0);
    pub const BALL: Self = Self(1 << 0);
    pub const WALL: Self = Self(1 << 1);
    pub const EDGE: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::BALL.0 | Self::WALL.0 | Self::EDGE.0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for CategoryMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A dropped ball. `kind` is always concrete; `restitution` is fixed at spawn time.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub kind: BallType,
    pub radius: f32,
    pub restitution: f32,
}

/// Scene edge a wall is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WallEdge {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl WallEdge {
    pub const ALL: [WallEdge; 4] = [WallEdge::Bottom, WallEdge::Top, WallEdge::Left, WallEdge::Right];

    /// Unknown indices resolve to the bottom edge.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => WallEdge::Top,
            2 => WallEdge::Left,
            3 => WallEdge::Right,
            _ => WallEdge::Bottom,
        }
    }

    /// Rotation that lays a wall's long axis along this edge.
    pub fn default_rotation(self) -> f32 {
        match self {
            WallEdge::Bottom | WallEdge::Top => 0.0,
            WallEdge::Left | WallEdge::Right => std::f32::consts::FRAC_PI_2,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, WallEdge::Bottom | WallEdge::Top)
    }

    pub fn label(self) -> &'static str {
        match self {
            WallEdge::Bottom => "WallBottom",
            WallEdge::Top => "WallTop",
            WallEdge::Left => "WallLeft",
            WallEdge::Right => "WallRight",
        }
    }
}

/// Static wall toggled by the bounding-wall setting.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub edge: WallEdge,
    pub rotation: f32,
}

/// The scene frame collider. Always present.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BoundaryEdge;
