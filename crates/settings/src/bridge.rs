//! Settings draft: raw control values collected while the panel is open.
//!
//! Sliders hold positions in `0..=1`; switches and the ball buttons hold their plain values.
//! Nothing reaches the world until `save`, which yields the whole settings value at once.

use ab_config::{BallType, GravityConfig, WorldSettings};
use ab_core::SettingsOutcome;

/// Slider position → gravity magnitude, linear over `[slider_min, slider_max]`.
pub fn slider_to_gravity(slider: f32, range: &GravityConfig) -> f32 {
    range.slider_min + slider.clamp(0.0, 1.0) * (range.slider_max - range.slider_min)
}

/// Inverse of [`slider_to_gravity`]. A degenerate range maps everything to 0.
pub fn gravity_to_slider(gravity: f32, range: &GravityConfig) -> f32 {
    let span = range.slider_max - range.slider_min;
    if span <= f32::EPSILON {
        return 0.0;
    }
    ((gravity - range.slider_min) / span).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    gravity_slider: f32,
    bounciness_slider: f32,
    pub bounding_wall: bool,
    pub accelerometer: bool,
    pub ball_type: BallType,
}

impl SettingsDraft {
    /// Seeds the controls from the live settings.
    pub fn from_settings(settings: &WorldSettings, range: &GravityConfig) -> Self {
        Self {
            gravity_slider: gravity_to_slider(settings.gravity, range),
            bounciness_slider: settings.bounciness.clamp(0.0, 1.0),
            bounding_wall: settings.bounding_wall,
            accelerometer: settings.accelerometer,
            ball_type: settings.ball_type,
        }
    }

    pub fn gravity_slider(&self) -> f32 {
        self.gravity_slider
    }

    pub fn bounciness_slider(&self) -> f32 {
        self.bounciness_slider
    }

    pub fn set_gravity_slider(&mut self, value: f32) {
        self.gravity_slider = value.clamp(0.0, 1.0);
    }

    pub fn set_bounciness_slider(&mut self, value: f32) {
        self.bounciness_slider = value.clamp(0.0, 1.0);
    }

    /// Ball-type button by index; out-of-range indices select the default type.
    pub fn select_ball_button(&mut self, index: i32) -> BallType {
        self.ball_type = BallType::from_index(index);
        self.ball_type
    }

    pub fn to_settings(&self, range: &GravityConfig) -> WorldSettings {
        WorldSettings {
            gravity: slider_to_gravity(self.gravity_slider, range),
            bounciness: self.bounciness_slider,
            bounding_wall: self.bounding_wall,
            accelerometer: self.accelerometer,
            ball_type: self.ball_type,
        }
    }

    pub fn save(&self, range: &GravityConfig) -> SettingsOutcome {
        SettingsOutcome::Saved(self.to_settings(range))
    }

    pub fn cancel(self) -> SettingsOutcome {
        SettingsOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> GravityConfig {
        GravityConfig {
            magnitude: 9.8,
            slider_min: 0.0,
            slider_max: 19.6,
        }
    }

    #[test]
    fn slider_maps_linearly_and_clamps() {
        let r = range();
        assert_eq!(slider_to_gravity(0.0, &r), 0.0);
        assert!((slider_to_gravity(0.5, &r) - 9.8).abs() < 1e-5);
        assert_eq!(slider_to_gravity(2.0, &r), 19.6);
        assert_eq!(slider_to_gravity(-1.0, &r), 0.0);
        assert!((gravity_to_slider(9.8, &r) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn degenerate_range_is_safe() {
        let r = GravityConfig {
            slider_min: 5.0,
            slider_max: 5.0,
            ..range()
        };
        assert_eq!(gravity_to_slider(9.8, &r), 0.0);
        assert_eq!(slider_to_gravity(0.7, &r), 5.0);
    }

    #[test]
    fn draft_seeds_from_settings_and_saves_whole() {
        let r = range();
        let live = WorldSettings::default();
        let mut draft = SettingsDraft::from_settings(&live, &r);
        assert_eq!(draft.to_settings(&r).ball_type, live.ball_type);
        assert!((draft.to_settings(&r).gravity - live.gravity).abs() < 1e-4);

        draft.set_gravity_slider(1.0);
        draft.set_bounciness_slider(1.7);
        draft.bounding_wall = true;
        assert_eq!(draft.select_ball_button(2), BallType::Basketball);
        let SettingsOutcome::Saved(s) = draft.save(&r) else {
            panic!("save must yield Saved");
        };
        assert_eq!(s.gravity, 19.6);
        assert_eq!(s.bounciness, 1.0);
        assert!(s.bounding_wall);
        assert!(!s.accelerometer);
        assert_eq!(s.ball_type, BallType::Basketball);
    }

    #[test]
    fn unknown_button_selects_default() {
        let mut draft = SettingsDraft::from_settings(&WorldSettings::default(), &range());
        draft.select_ball_button(4);
        assert_eq!(draft.select_ball_button(42), BallType::AmazeBall);
    }

    #[test]
    fn cancel_discards() {
        let draft = SettingsDraft::from_settings(&WorldSettings::default(), &range());
        assert_eq!(draft.cancel(), SettingsOutcome::Cancelled);
    }
}
