use bevy::prelude::*;
use std::path::{Path, PathBuf};

use ab_config::{SettingsStoreConfig, WorldSettings};

/// RON file holding the last saved `WorldSettings`.
#[derive(Resource, Debug, Clone)]
pub struct SettingsStore {
    pub path: PathBuf,
    pub persist: bool,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            persist: true,
        }
    }

    pub fn from_config(cfg: &SettingsStoreConfig) -> Self {
        Self {
            path: PathBuf::from(&cfg.path),
            persist: cfg.persist,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<WorldSettings>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("read {}: {e}", self.path.display()))?;
        ron::from_str(&text)
            .map(Some)
            .map_err(|e| format!("parse {}: {e}", self.path.display()))
    }

    pub fn save(&self, settings: &WorldSettings) -> Result<(), String> {
        if !self.persist {
            return Ok(());
        }
        let text = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("serialize settings: {e}"))?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| format!("create {}: {e}", dir.display()))?;
        }
        std::fs::write(&self.path, text).map_err(|e| format!("write {}: {e}", self.path.display()))
    }
}
