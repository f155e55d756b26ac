//! Keyboard-driven settings panel.
//!
//! Tab opens the panel with a draft seeded from the live settings. While open:
//! G/H gravity -/+, N/M bounciness -/+, B walls, A accelerometer, 1..8 ball buttons,
//! Enter saves, Escape cancels.

use bevy::prelude::*;

use ab_core::{GameConfigRes, SettingsOutcome, SettingsPanelOpen, WorldSettingsRes};

use crate::bridge::SettingsDraft;
use crate::store::SettingsStore;

const LOG_TARGET: &str = "settings";
const SLIDER_STEP: f32 = 0.05;

const BALL_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

/// Open panel state. `draft` is `Some` while the panel is shown.
#[derive(Resource, Debug, Default)]
pub struct SettingsPanel {
    pub draft: Option<SettingsDraft>,
}

impl SettingsPanel {
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }
}

pub fn panel_keys(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut panel: ResMut<SettingsPanel>,
    settings: Res<WorldSettingsRes>,
    cfg: Res<GameConfigRes>,
    mut outcomes: EventWriter<SettingsOutcome>,
) {
    let Some(keys) = keys else {
        return;
    };
    let range = &cfg.0.gravity;

    let Some(draft) = panel.draft.as_mut() else {
        if keys.just_pressed(KeyCode::Tab) {
            panel.draft = Some(SettingsDraft::from_settings(&settings.0, range));
            info!(target: LOG_TARGET, "settings panel open");
        }
        return;
    };

    if keys.just_pressed(KeyCode::KeyG) {
        draft.set_gravity_slider(draft.gravity_slider() - SLIDER_STEP);
    }
    if keys.just_pressed(KeyCode::KeyH) {
        draft.set_gravity_slider(draft.gravity_slider() + SLIDER_STEP);
    }
    if keys.just_pressed(KeyCode::KeyN) {
        draft.set_bounciness_slider(draft.bounciness_slider() - SLIDER_STEP);
    }
    if keys.just_pressed(KeyCode::KeyM) {
        draft.set_bounciness_slider(draft.bounciness_slider() + SLIDER_STEP);
    }
    if keys.just_pressed(KeyCode::KeyB) {
        draft.bounding_wall = !draft.bounding_wall;
        info!(target: LOG_TARGET, "bounding wall -> {}", draft.bounding_wall);
    }
    if keys.just_pressed(KeyCode::KeyA) {
        draft.accelerometer = !draft.accelerometer;
        info!(target: LOG_TARGET, "accelerometer -> {}", draft.accelerometer);
    }
    for (i, key) in BALL_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            let t = draft.select_ball_button(i as i32);
            info!(target: LOG_TARGET, "ball -> {}", t.name());
        }
    }

    if keys.just_pressed(KeyCode::Enter) {
        let outcome = draft.save(range);
        if let SettingsOutcome::Saved(s) = &outcome {
            info!(
                target: LOG_TARGET,
                "save: gravity={:.2} bounciness={:.2}",
                s.gravity,
                s.bounciness
            );
        }
        outcomes.write(outcome);
        panel.draft = None;
    } else if keys.just_pressed(KeyCode::Escape) {
        if let Some(d) = panel.draft.take() {
            outcomes.write(d.cancel());
            info!(target: LOG_TARGET, "settings panel cancelled");
        }
    }
}

/// Publishes the panel's visibility for systems outside this crate.
pub fn sync_panel_open(panel: Res<SettingsPanel>, mut open: ResMut<SettingsPanelOpen>) {
    open.set_if_neq(SettingsPanelOpen(panel.is_open()));
}

/// Writes each saved settings value to the store. Failures are logged, never fatal.
pub fn persist_saved(mut outcomes: EventReader<SettingsOutcome>, store: Option<Res<SettingsStore>>) {
    for outcome in outcomes.read() {
        let SettingsOutcome::Saved(s) = outcome else {
            continue;
        };
        let Some(store) = store.as_ref() else {
            continue;
        };
        match store.save(s) {
            Ok(()) if store.persist => {
                debug!(target: LOG_TARGET, "settings written to {}", store.path().display())
            }
            Ok(()) => {}
            Err(e) => warn!(target: LOG_TARGET, "settings not persisted: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_core::{BallType, CorePlugin};

    #[derive(Resource, Default)]
    struct Seen(Vec<SettingsOutcome>);

    fn collect(mut reader: EventReader<SettingsOutcome>, mut seen: ResMut<Seen>) {
        seen.0.extend(reader.read().cloned());
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(CorePlugin);
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<SettingsPanel>()
            .init_resource::<Seen>()
            .add_systems(Update, (panel_keys, sync_panel_open, collect).chain());
        app
    }

    fn tap(app: &mut App, key: KeyCode) {
        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            input.clear();
            input.press(key);
        }
        app.update();
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(key);
        input.clear();
    }

    #[test]
    fn keys_edit_draft_and_save() {
        let mut app = app();
        tap(&mut app, KeyCode::Tab);
        assert!(app.world().resource::<SettingsPanel>().is_open());
        tap(&mut app, KeyCode::KeyB);
        tap(&mut app, KeyCode::Digit4);
        tap(&mut app, KeyCode::KeyM);
        tap(&mut app, KeyCode::Enter);

        assert!(!app.world().resource::<SettingsPanel>().is_open());
        let seen = &app.world().resource::<Seen>().0;
        assert_eq!(seen.len(), 1);
        let SettingsOutcome::Saved(s) = &seen[0] else {
            panic!("expected Saved, got {:?}", seen[0]);
        };
        assert!(s.bounding_wall);
        assert_eq!(s.ball_type, BallType::Football);
        assert!((s.bounciness - 0.65).abs() < 1e-4);
    }

    #[test]
    fn escape_cancels_without_touching_settings() {
        let mut app = app();
        let before = app.world().resource::<WorldSettingsRes>().clone();
        tap(&mut app, KeyCode::Tab);
        tap(&mut app, KeyCode::KeyA);
        tap(&mut app, KeyCode::Escape);
        assert_eq!(
            app.world().resource::<Seen>().0,
            vec![SettingsOutcome::Cancelled]
        );
        assert_eq!(*app.world().resource::<WorldSettingsRes>(), before);
    }

    #[test]
    fn open_flag_follows_the_panel() {
        let mut app = app();
        let open = |app: &App| app.world().resource::<SettingsPanelOpen>().0;
        assert!(!open(&app));
        tap(&mut app, KeyCode::Tab);
        assert!(open(&app));
        tap(&mut app, KeyCode::Escape);
        assert!(!open(&app));
        tap(&mut app, KeyCode::Tab);
        tap(&mut app, KeyCode::Enter);
        assert!(!open(&app));
    }

    #[test]
    fn edits_ignored_while_closed() {
        let mut app = app();
        tap(&mut app, KeyCode::KeyB);
        tap(&mut app, KeyCode::Enter);
        assert!(app.world().resource::<Seen>().0.is_empty());
    }

    #[test]
    fn saved_settings_reach_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.ron"));
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(CorePlugin);
        app.insert_resource(store.clone());
        app.add_systems(Update, persist_saved);
        let s = ab_core::WorldSettings {
            ball_type: BallType::Pumpkin,
            ..Default::default()
        };
        app.world_mut().send_event(SettingsOutcome::Saved(s.clone()));
        app.update();
        assert_eq!(store.load().unwrap(), Some(s));
    }
}
