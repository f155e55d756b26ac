use bevy::prelude::*;

use ab_config::{GameConfig, WorldSettings};

// Wrapper Bevy resource for the pure-data GameConfig (keeps ab_config free of bevy dependency).
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfigRes(pub GameConfig);

/// Live world settings. Replaced as a whole when the settings panel saves.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct WorldSettingsRes(pub WorldSettings);

/// Deterministic RNG seed resource (set once at startup / tests for reproducible spawning).
#[derive(Resource, Debug, Copy, Clone, Default)]
pub struct RngSeed(pub u64);

/// Playable area in scene coordinates (centered on the origin).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub rect: Rect,
}

impl SceneBounds {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::from_center_size(Vec2::ZERO, Vec2::new(width, height)),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Bounds grown by `margin` on every side.
    pub fn inflated(&self, margin: f32) -> Rect {
        self.rect.inflate(margin)
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        let w = ab_config::WindowConfig::default();
        Self::from_size(w.width, w.height)
    }
}

/// Latest accelerometer tilt (x, y) accepted by the world controller.
/// `None` means gravity is the fixed downward vector.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltState {
    pub latest: Option<Vec2>,
}

/// Mirrors whether the settings panel is shown. Scene input is suspended while it is.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPanelOpen(pub bool);

/// Run condition for scene input systems.
pub fn settings_panel_closed(open: Option<Res<SettingsPanelOpen>>) -> bool {
    !open.is_some_and(|o| o.0)
}

/// Per-scene phase: `Idle` with no balls, `Active` with at least one.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScenePhase {
    #[default]
    Idle,
    Active,
}

impl ScenePhase {
    pub fn for_ball_count(count: usize) -> Self {
        if count == 0 {
            ScenePhase::Idle
        } else {
            ScenePhase::Active
        }
    }
}
