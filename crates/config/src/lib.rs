// Pure data configuration crate (no Bevy dependency).
// Provides: data structures, layered loading, validation producing warnings (non-fatal), and tests.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

mod settings;

pub use settings::{BallType, WorldSettings};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 720.0,
            title: "Amaze Balls".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Scene units per physics meter; gravity in m/s² is scaled by this before reaching Rapier.
    pub pixels_per_meter: f32,
    /// Continuous collision detection on balls (avoids tunnelling through thin walls).
    pub ccd: bool,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 100.0,
            ccd: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    /// Initial magnitude (m/s²) when no persisted settings exist.
    pub magnitude: f32,
    /// Range covered by the settings slider (0..1 maps linearly onto min..max).
    pub slider_min: f32,
    pub slider_max: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            magnitude: 9.8,
            slider_min: 0.0,
            slider_max: 19.6,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BounceConfig {
    pub restitution: f32,
}
impl Default for BounceConfig {
    fn default() -> Self {
        Self { restitution: 0.6 }
    }
}

/// Per-type override of the uniform ball shape. `kind` is a `BallType` name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallShapeConfig {
    pub kind: String,
    pub radius: f32,
    pub mass: f32,
}
impl Default for BallShapeConfig {
    fn default() -> Self {
        Self {
            kind: "AmazeBall".into(),
            radius: 24.0,
            mass: 1.0,
        }
    }
}

/// Resolved shape for one ball type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallShape {
    pub radius: f32,
    pub mass: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallsConfig {
    pub radius: f32,
    pub mass: f32,
    pub friction: f32,
    pub shapes: Vec<BallShapeConfig>,
}
impl Default for BallsConfig {
    fn default() -> Self {
        let shape = |kind: &str, radius: f32, mass: f32| BallShapeConfig {
            kind: kind.into(),
            radius,
            mass,
        };
        Self {
            radius: 24.0,
            mass: 1.0,
            friction: 0.3,
            shapes: vec![
                shape("Baseball", 16.0, 0.4),
                shape("Basketball", 30.0, 1.2),
                shape("Football", 26.0, 0.9),
                shape("Pumpkin", 32.0, 2.5),
            ],
        }
    }
}

impl BallsConfig {
    /// Shape for a concrete type: matching override if any, else the uniform shape.
    pub fn shape_for(&self, kind: BallType) -> BallShape {
        self.shapes
            .iter()
            .find(|s| BallType::from_name(&s.kind) == Some(kind))
            .map(|s| BallShape {
                radius: s.radius,
                mass: s.mass,
            })
            .unwrap_or(BallShape {
                radius: self.radius,
                mass: self.mass,
            })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WallsConfig {
    /// Bounding wall state when no persisted settings exist.
    pub enabled: bool,
    pub thickness: f32,
}
impl Default for WallsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            thickness: 16.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AccelerometerConfig {
    /// Tilt-driven gravity state when no persisted settings exist.
    pub enabled: bool,
    /// Desktop host only: drive the sensor mailbox from the arrow keys.
    pub emulate_with_keys: bool,
    /// Tilt change per second while an arrow key is held (desktop emulation).
    pub key_tilt_rate: f32,
}
impl Default for AccelerometerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            emulate_with_keys: true,
            key_tilt_rate: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Balls further than this outside the scene bounds are despawned.
    pub cull_margin: f32,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self { cull_margin: 200.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    pub grab_radius: f32,
    pub pull_strength: f32,
    pub max_speed: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grab_radius: 35.0,
            pull_strength: 1000.0,
            max_speed: 1500.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub drag: DragConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SettingsStoreConfig {
    pub path: String,
    pub persist: bool,
}
impl Default for SettingsStoreConfig {
    fn default() -> Self {
        Self {
            path: "settings.ron".into(),
            persist: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub gravity: GravityConfig,
    pub bounce: BounceConfig,
    pub balls: BallsConfig,
    pub walls: WallsConfig,
    pub accelerometer: AccelerometerConfig,
    pub scene: SceneConfig,
    pub interactions: InteractionConfig,
    pub settings_store: SettingsStoreConfig,
    /// Initial ball type name when no persisted settings exist.
    pub ball_type: String,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            physics: Default::default(),
            gravity: Default::default(),
            bounce: Default::default(),
            balls: Default::default(),
            walls: Default::default(),
            accelerometer: Default::default(),
            scene: Default::default(),
            interactions: Default::default(),
            settings_store: Default::default(),
            ball_type: "AmazeBall".into(),
            rapier_debug: true,
        }
    }
}

impl GameConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Skips missing files; returns (config, used_paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            if !path_ref.exists() {
                continue;
            }
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Settings used when nothing has been persisted yet.
    pub fn initial_settings(&self) -> WorldSettings {
        WorldSettings {
            gravity: self.gravity.magnitude,
            bounciness: self.bounce.restitution,
            bounding_wall: self.walls.enabled,
            accelerometer: self.accelerometer.enabled,
            ball_type: BallType::from_name(&self.ball_type).unwrap_or_default(),
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push(format!(
                "physics.pixels_per_meter {} must be > 0",
                self.physics.pixels_per_meter
            ));
        }
        if self.gravity.slider_min > self.gravity.slider_max {
            w.push(format!(
                "gravity.slider_min ({}) greater than slider_max ({})",
                self.gravity.slider_min, self.gravity.slider_max
            ));
        }
        if self.gravity.slider_min < 0.0 {
            w.push("gravity.slider_min negative; gravity magnitude should be >= 0".into());
        }
        if !(self.gravity.slider_min..=self.gravity.slider_max).contains(&self.gravity.magnitude) {
            w.push(format!(
                "gravity.magnitude {} outside slider range {}..{}",
                self.gravity.magnitude, self.gravity.slider_min, self.gravity.slider_max
            ));
        }
        if self.gravity.magnitude > 100.0 {
            w.push(format!(
                "gravity.magnitude {} very large; instability possible",
                self.gravity.magnitude
            ));
        }
        if !(0.0..=1.0).contains(&self.bounce.restitution) {
            w.push(format!(
                "bounce.restitution {} outside 0..1",
                self.bounce.restitution
            ));
        }
        if self.balls.radius <= 0.0 {
            w.push("balls.radius must be > 0".into());
        }
        if self.balls.mass <= 0.0 {
            w.push("balls.mass must be > 0".into());
        }
        if self.balls.friction < 0.0 {
            w.push("balls.friction negative".into());
        }
        for s in &self.balls.shapes {
            match BallType::from_name(&s.kind) {
                None => w.push(format!("balls.shapes: unknown ball kind '{}' ignored", s.kind)),
                Some(BallType::Random) => {
                    w.push("balls.shapes: 'Random' has no shape of its own; entry ignored".into())
                }
                Some(_) => {}
            }
            if s.radius <= 0.0 || s.mass <= 0.0 {
                w.push(format!(
                    "balls.shapes '{}': radius and mass must be > 0",
                    s.kind
                ));
            }
        }
        if self.walls.thickness <= 0.0 {
            w.push("walls.thickness must be > 0".into());
        }
        if self.walls.thickness * 2.0 >= self.window.width.min(self.window.height) {
            w.push(format!(
                "walls.thickness {} leaves no room inside a {}x{} scene",
                self.walls.thickness, self.window.width, self.window.height
            ));
        }
        if self.accelerometer.key_tilt_rate < 0.0 {
            w.push("accelerometer.key_tilt_rate negative".into());
        }
        if self.scene.cull_margin < 0.0 {
            w.push("scene.cull_margin negative; balls despawn before leaving the frame".into());
        }
        if BallType::from_name(&self.ball_type).is_none() {
            w.push(format!(
                "ball_type '{}' unknown; falling back to AmazeBall",
                self.ball_type
            ));
        }
        if self.interactions.drag.enabled {
            let dr = &self.interactions.drag;
            if dr.grab_radius <= 0.0 {
                w.push("drag.grab_radius must be > 0".into());
            }
            if dr.pull_strength <= 0.0 {
                w.push("drag.pull_strength must be > 0".into());
            }
            if dr.max_speed < 0.0 {
                w.push("drag.max_speed negative -> treated as uncapped".into());
            }
        }
        if self.settings_store.persist && self.settings_store.path.trim().is_empty() {
            w.push("settings_store.path empty while persist = true".into());
        }
        w
    }
}
