//! User-adjustable world settings and the ball type selector.
//!
//! Both types are plain data so they can be persisted (RON) and passed between the
//! settings panel and the world controller without any engine dependency.

use serde::{Deserialize, Serialize};

/// Selectable ball types, in settings-button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BallType {
    #[default]
    AmazeBall,
    Baseball,
    Basketball,
    Football,
    Pumpkin,
    SoccerBallOne,
    SoccerBallTwo,
    /// Picks one of the concrete types each time a ball is spawned.
    Random,
}

impl BallType {
    /// Every concrete (non-random) type.
    pub const CONCRETE: [BallType; 7] = [
        BallType::AmazeBall,
        BallType::Baseball,
        BallType::Basketball,
        BallType::Football,
        BallType::Pumpkin,
        BallType::SoccerBallOne,
        BallType::SoccerBallTwo,
    ];

    /// Map a settings button index to a type. Unknown indices fall back to the default type.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => BallType::AmazeBall,
            1 => BallType::Baseball,
            2 => BallType::Basketball,
            3 => BallType::Football,
            4 => BallType::Pumpkin,
            5 => BallType::SoccerBallOne,
            6 => BallType::SoccerBallTwo,
            7 => BallType::Random,
            _ => BallType::default(),
        }
    }

    pub fn index(self) -> i32 {
        match self {
            BallType::AmazeBall => 0,
            BallType::Baseball => 1,
            BallType::Basketball => 2,
            BallType::Football => 3,
            BallType::Pumpkin => 4,
            BallType::SoccerBallOne => 5,
            BallType::SoccerBallTwo => 6,
            BallType::Random => 7,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "AmazeBall" => Some(Self::AmazeBall),
            "Baseball" => Some(Self::Baseball),
            "Basketball" => Some(Self::Basketball),
            "Football" => Some(Self::Football),
            "Pumpkin" => Some(Self::Pumpkin),
            "SoccerBallOne" => Some(Self::SoccerBallOne),
            "SoccerBallTwo" => Some(Self::SoccerBallTwo),
            "Random" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BallType::AmazeBall => "AmazeBall",
            BallType::Baseball => "Baseball",
            BallType::Basketball => "Basketball",
            BallType::Football => "Football",
            BallType::Pumpkin => "Pumpkin",
            BallType::SoccerBallOne => "SoccerBallOne",
            BallType::SoccerBallTwo => "SoccerBallTwo",
            BallType::Random => "Random",
        }
    }

    pub fn is_random(self) -> bool {
        matches!(self, BallType::Random)
    }
}

/// The atomic bundle of user-configurable simulation parameters.
///
/// Applied as one unit when the settings panel saves; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Gravity magnitude in m/s².
    pub gravity: f32,
    /// Restitution given to balls spawned from now on (0..=1).
    pub bounciness: f32,
    pub bounding_wall: bool,
    pub accelerometer: bool,
    pub ball_type: BallType,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            bounciness: 0.6,
            bounding_wall: false,
            accelerometer: false,
            ball_type: BallType::AmazeBall,
        }
    }
}
