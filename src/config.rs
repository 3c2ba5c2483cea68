use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{FrontendError, Result};
use crate::immersive::{ImmersiveListConfig, ImmersiveListParams};

pub const APP_DIR: &str = "emulair";
const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfigFile {
    pub visible_items: Option<usize>,
    pub item_spacing: Option<f32>,
    pub selected_item_offset: Option<f32>,
    pub overshoot_items: Option<usize>,
    /// Display density multiplier used for fling distances.
    pub density: Option<f32>,
    pub font_path: Option<String>,
    pub fullscreen: Option<bool>,
    pub onboarding_complete: Option<bool>,
    /// Action name (`A`, `UP`, `L1`, ...) to binding string.
    pub controller_map: Option<HashMap<String, String>>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            visible_items: Some(6),
            item_spacing: Some(16.0),
            selected_item_offset: Some(32.0),
            overshoot_items: Some(0),
            density: Some(1.0),
            font_path: None,
            fullscreen: Some(true),
            onboarding_complete: Some(true),
            controller_map: None,
        }
    }
}

impl ConfigFile {
    /// Take every field `parsed` sets.
    pub fn merge(&mut self, parsed: ConfigFile) {
        if parsed.visible_items.is_some() {
            self.visible_items = parsed.visible_items;
        }
        if parsed.item_spacing.is_some() {
            self.item_spacing = parsed.item_spacing;
        }
        if parsed.selected_item_offset.is_some() {
            self.selected_item_offset = parsed.selected_item_offset;
        }
        if parsed.overshoot_items.is_some() {
            self.overshoot_items = parsed.overshoot_items;
        }
        if parsed.density.is_some() {
            self.density = parsed.density;
        }
        if parsed.controller_map.is_some() {
            self.controller_map = parsed.controller_map;
        }
        if parsed.font_path.is_some() {
            self.font_path = parsed.font_path;
        }
        if parsed.fullscreen.is_some() {
            self.fullscreen = parsed.fullscreen;
        }
        if parsed.onboarding_complete.is_some() {
            self.onboarding_complete = parsed.onboarding_complete;
        }
    }

    /// List layout from the config. Invalid values fall back to the defaults.
    pub fn list_params(&self) -> ImmersiveListParams {
        let defaults = ImmersiveListParams::default();
        let params = ImmersiveListParams {
            visible_items: self.visible_items.unwrap_or(defaults.visible_items),
            overshoot_items: self.overshoot_items.unwrap_or(defaults.overshoot_items),
            selected_item_offset: self
                .selected_item_offset
                .unwrap_or(defaults.selected_item_offset),
            item_spacing: self.item_spacing.unwrap_or(defaults.item_spacing),
        };
        let check = ImmersiveListConfig {
            visible_items: params.visible_items,
            overshoot_items: params.overshoot_items,
            selected_item_offset: params.selected_item_offset,
            item_spacing: params.item_spacing,
            ..ImmersiveListConfig::default()
        };
        match check.validate() {
            Ok(()) => params,
            Err(e) => {
                warn!("Ignoring list layout from config: {}", e);
                defaults
            }
        }
    }

    pub fn density(&self) -> f32 {
        match self.density {
            Some(d) if d > 0.0 && d.is_finite() => d,
            _ => 1.0,
        }
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete.unwrap_or(true)
    }
}

/// `$XDG_CONFIG_HOME/emulair/<file>`, else `~/.config/emulair/<file>`.
pub fn user_file_path(file: &str) -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push(APP_DIR);
        p.push(file);
        Some(p)
    } else if let Some(home) = dirs::home_dir() {
        let mut p = home;
        p.push(".config");
        p.push(APP_DIR);
        p.push(file);
        Some(p)
    } else {
        None
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    user_file_path("config.toml")
}

/// Write `contents` next to `path` and rename it into place.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents.as_bytes())?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Parse the TOML file at `path`, first creating it from `sample` if it is
/// missing. Problems are logged and yield `None`.
pub(crate) fn read_or_create<T: DeserializeOwned>(path: &Path, sample: &str) -> Option<T> {
    if !path.exists() {
        match write_atomic(path, sample) {
            Ok(()) => info!("Wrote default {}", path.display()),
            Err(e) => warn!("Failed to write default {}: {}", path.display(), e),
        }
    }
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };
    match toml::from_str::<T>(&contents) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_config_from(path: &Path) -> ConfigFile {
    let mut cfg = ConfigFile::default();
    if let Some(parsed) = read_or_create::<ConfigFile>(path, SAMPLE_CONFIG) {
        cfg.merge(parsed);
    }
    cfg
}

pub fn load_config() -> ConfigFile {
    match user_config_path() {
        Some(p) => load_config_from(&p),
        None => {
            warn!("No config path available, using defaults");
            ConfigFile::default()
        }
    }
}

pub fn write_config_to(path: &Path, cfg: &ConfigFile) -> Result<()> {
    let s = toml::to_string_pretty(cfg)?;
    write_atomic(path, &s)
}

pub fn write_config(cfg: &ConfigFile) -> Result<()> {
    let p = user_config_path().ok_or(FrontendError::NoConfigPath)?;
    write_config_to(&p, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_from_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emulair").join("config.toml");
        let cfg = load_config_from(&path);
        assert!(path.exists());
        assert_eq!(cfg, ConfigFile::default());
    }

    #[test]
    fn parsed_fields_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "visible_items = 4\nonboarding_complete = false\n[controller_map]\nA = \"joybutton:1\"\n",
        )
        .unwrap();
        let cfg = load_config_from(&path);
        assert_eq!(cfg.visible_items, Some(4));
        assert_eq!(cfg.item_spacing, Some(16.0));
        assert!(!cfg.onboarding_complete());
        assert_eq!(
            cfg.controller_map.as_ref().and_then(|m| m.get("A")).map(String::as_str),
            Some("joybutton:1")
        );
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "visible_items = \"many\"").unwrap();
        assert_eq!(load_config_from(&path), ConfigFile::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = ConfigFile::default();
        cfg.font_path = Some("/fonts/Inter.ttf".into());
        cfg.overshoot_items = Some(1);
        write_config_to(&path, &cfg).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(load_config_from(&path), cfg);
    }

    #[test]
    fn invalid_layout_uses_default_params() {
        let cfg = ConfigFile {
            visible_items: Some(0),
            ..ConfigFile::default()
        };
        assert_eq!(cfg.list_params(), ImmersiveListParams::default());
        let cfg = ConfigFile {
            density: Some(-2.0),
            ..ConfigFile::default()
        };
        assert_eq!(cfg.density(), 1.0);
    }
}
