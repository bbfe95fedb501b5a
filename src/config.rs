//! Configuration for tileboard
//!
//! Only chrome and layout preferences live here. The board content and
//! the view state are never read from or written to disk.
//!
//! Config file location: ~/.config/tileboard/config.toml

use crate::catalog::GROUPS;
use crate::layout::{LayoutEngine, Orientation, TileSpec};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: ThemeName,
    pub orientation: Orientation,
    /// Rows per block in horizontal orientation
    pub row_count: u32,
    /// Columns per block in vertical orientation
    pub column_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: ThemeName::Gruvbox,
            orientation: Orientation::Vertical,
            row_count: 2,
            column_count: 4,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tileboard");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        tracing::info!(?config, "Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        // Every built-in group must pack, otherwise drawing would fail later
        let engine = config.layout_engine(1)?;
        for group in GROUPS {
            engine
                .layout(group.tiles.iter().map(TileSpec::from), config.orientation)
                .with_context(|| format!("Group '{}' does not fit the configured blocks", group.id))?;
        }
        Ok(config)
    }

    /// Layout engine for these block settings at the given item size
    pub fn layout_engine(&self, item_size: u32) -> Result<LayoutEngine> {
        LayoutEngine::new(item_size, self.row_count, self.column_count)
    }
}

/// Available chrome palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Catppuccin,
    Transparent,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Gruvbox => "Gruvbox",
            ThemeName::Nord => "Nord",
            ThemeName::Catppuccin => "Catppuccin",
            ThemeName::Transparent => "Transparent",
        }
    }
}
