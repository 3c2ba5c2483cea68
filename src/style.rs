use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::{read_or_create, user_file_path};

const SAMPLE_STYLE: &str = include_str!("../style.sample.toml");

/// Colour theme. Colours are RGB triples.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub background: Option<[u8; 3]>,
    pub tile_selected: Option<[u8; 3]>,
    pub tile_normal: Option<[u8; 3]>,
    pub text_primary: Option<[u8; 3]>,
    pub text_secondary: Option<[u8; 3]>,
    pub top_bar_bg: Option<[u8; 3]>,
    pub top_bar_text: Option<[u8; 3]>,
    pub tab_selected: Option<[u8; 3]>,
    pub overlay_bg: Option<[u8; 3]>,
    pub overlay_alpha: Option<u8>,
    pub menu_box: Option<[u8; 3]>,
    pub menu_selected: Option<[u8; 3]>,
    pub menu_title: Option<[u8; 3]>,
    pub menu_text: Option<[u8; 3]>,
    pub message_overlay_alpha: Option<u8>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            background: Some([12, 12, 12]),
            tile_selected: Some([200, 180, 50]),
            tile_normal: Some([60, 60, 60]),
            text_primary: Some([240, 240, 240]),
            text_secondary: Some([180, 180, 180]),
            top_bar_bg: Some([20, 20, 20]),
            top_bar_text: Some([220, 220, 220]),
            tab_selected: Some([200, 180, 50]),
            overlay_bg: Some([0, 0, 0]),
            overlay_alpha: Some(200),
            menu_box: Some([40, 40, 40]),
            menu_selected: Some([80, 80, 80]),
            menu_title: Some([230, 230, 230]),
            menu_text: Some([220, 220, 220]),
            message_overlay_alpha: Some(160),
        }
    }
}

impl StyleConfig {
    pub fn merge(&mut self, parsed: StyleConfig) {
        if parsed.background.is_some() {
            self.background = parsed.background;
        }
        if parsed.tile_selected.is_some() {
            self.tile_selected = parsed.tile_selected;
        }
        if parsed.tile_normal.is_some() {
            self.tile_normal = parsed.tile_normal;
        }
        if parsed.text_primary.is_some() {
            self.text_primary = parsed.text_primary;
        }
        if parsed.text_secondary.is_some() {
            self.text_secondary = parsed.text_secondary;
        }
        if parsed.top_bar_bg.is_some() {
            self.top_bar_bg = parsed.top_bar_bg;
        }
        if parsed.top_bar_text.is_some() {
            self.top_bar_text = parsed.top_bar_text;
        }
        if parsed.tab_selected.is_some() {
            self.tab_selected = parsed.tab_selected;
        }
        if parsed.overlay_bg.is_some() {
            self.overlay_bg = parsed.overlay_bg;
        }
        if parsed.overlay_alpha.is_some() {
            self.overlay_alpha = parsed.overlay_alpha;
        }
        if parsed.menu_box.is_some() {
            self.menu_box = parsed.menu_box;
        }
        if parsed.menu_selected.is_some() {
            self.menu_selected = parsed.menu_selected;
        }
        if parsed.menu_title.is_some() {
            self.menu_title = parsed.menu_title;
        }
        if parsed.menu_text.is_some() {
            self.menu_text = parsed.menu_text;
        }
        if parsed.message_overlay_alpha.is_some() {
            self.message_overlay_alpha = parsed.message_overlay_alpha;
        }
    }
}

pub fn user_style_path() -> Option<PathBuf> {
    user_file_path("style.toml")
}

pub fn load_style_from(path: &Path) -> StyleConfig {
    let mut s = StyleConfig::default();
    if let Some(parsed) = read_or_create::<StyleConfig>(path, SAMPLE_STYLE) {
        s.merge(parsed);
    }
    s
}

pub fn load_style() -> StyleConfig {
    match user_style_path() {
        Some(p) => load_style_from(&p),
        None => {
            warn!("No style path available, using defaults");
            StyleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        assert_eq!(load_style_from(&path), StyleConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_style_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "background = [1, 2, 3]\noverlay_alpha = 90\n").unwrap();
        let style = load_style_from(&path);
        assert_eq!(style.background, Some([1, 2, 3]));
        assert_eq!(style.overlay_alpha, Some(90));
        assert_eq!(style.tile_normal, StyleConfig::default().tile_normal);
    }
}
