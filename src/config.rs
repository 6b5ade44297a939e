//! Configuration loading for fcd.
//!
//! fcd reads an optional TOML file (`fcd.toml`) from the platform config
//! directory, overridable with the `FCD_CONFIG` environment variable. A missing
//! file means defaults; a malformed file warns on stderr and falls back to
//! defaults so the tool stays usable.
//!
//! ```toml
//! [general]
//! visible_entries = 10
//! icons = true
//!
//! [theme]
//! highlight = "magenta"
//! text = "default"
//! ```

use crate::utils::helpers::parse_color;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;

/// Default number of entries shown before the user resizes the window.
pub const DEFAULT_VISIBLE_ENTRIES: usize = 10;

/// Raw deserialization target; every field optional so partial files work.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    general: RawGeneral,
    #[serde(default)]
    theme: RawTheme,
}

#[derive(Debug, Default, Deserialize)]
struct RawGeneral {
    visible_entries: Option<usize>,
    icons: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTheme {
    highlight: Option<String>,
    text: Option<String>,
}

/// Resolved runtime configuration.
#[derive(Debug)]
pub struct Config {
    visible_entries: usize,
    icons: bool,
    highlight: Color,
    text: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visible_entries: DEFAULT_VISIBLE_ENTRIES,
            icons: true,
            highlight: Color::Magenta,
            text: Color::Reset,
        }
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let defaults = Config::default();
        Self {
            visible_entries: raw
                .general
                .visible_entries
                .unwrap_or(defaults.visible_entries),
            icons: raw.general.icons.unwrap_or(defaults.icons),
            highlight: raw
                .theme
                .highlight
                .as_deref()
                .map(parse_color)
                .unwrap_or(defaults.highlight),
            text: raw
                .theme
                .text
                .as_deref()
                .map(parse_color)
                .unwrap_or(defaults.text),
        }
    }
}

impl Config {
    /// The config file location: `$FCD_CONFIG`, else `<config dir>/fcd/fcd.toml`.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("FCD_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("fcd").join("fcd.toml"))
    }

    /// Load the config, tolerating a missing or malformed file.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str::<RawConfig>(&content) {
            Ok(raw) => Config::from(raw),
            Err(e) => {
                eprintln!("[fcd] Warning: could not parse {}: {e}", path.display());
                Self::default()
            }
        }
    }

    // Getters / accessors

    #[inline]
    pub fn visible_entries(&self) -> usize {
        self.visible_entries
    }

    #[inline]
    pub fn icons(&self) -> bool {
        self.icons
    }

    #[inline]
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    #[inline]
    pub fn text(&self) -> Color {
        self.text
    }
}
