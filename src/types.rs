//! Core data types shared across the board
//!
//! Tile/group definitions, the enums keyed into the lookup tables,
//! and the transient flash message used by the status bar.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// A temporary UI message shown to the user (e.g. "Density: roomy")
#[derive(Clone)]
pub struct FlashMessage {
    pub text: String,
    pub created: Instant,
}

impl FlashMessage {
    pub fn new(text: String) -> Self {
        Self {
            text,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, seconds: u64) -> bool {
        self.created.elapsed().as_secs() >= seconds
    }
}

/// Sizing preset controlling base tile size and grid gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Roomy,
}

impl Density {
    pub fn all() -> &'static [Density] {
        &[Density::Compact, Density::Standard, Density::Roomy]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Standard => "standard",
            Density::Roomy => "roomy",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Density::Compact => Density::Standard,
            Density::Standard => Density::Roomy,
            Density::Roomy => Density::Compact,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "compact" => Ok(Density::Compact),
            "standard" => Ok(Density::Standard),
            "roomy" => Ok(Density::Roomy),
            other => bail!("unknown density '{}' (expected compact, standard or roomy)", other),
        }
    }
}

/// Tile footprint on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    Small,
    Medium,
    Wide,
    Tall,
    Large,
}

impl TileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileSize::Small => "small",
            TileSize::Medium => "medium",
            TileSize::Wide => "wide",
            TileSize::Tall => "tall",
            TileSize::Large => "large",
        }
    }

    /// (width, height) in multiples of the base item size
    pub fn units(&self) -> (u16, u16) {
        match self {
            TileSize::Small | TileSize::Medium => (1, 1),
            TileSize::Wide => (2, 1),
            TileSize::Tall => (1, 2),
            TileSize::Large => (2, 2),
        }
    }
}

/// Color preset for a tile's gradient background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileTheme {
    Blue,
    Indigo,
    Purple,
    Emerald,
    Amber,
    Teal,
    Cyan,
    Slate,
    Lime,
    Pink,
    Fuchsia,
    Rose,
    Violet,
}

impl TileTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileTheme::Blue => "blue",
            TileTheme::Indigo => "indigo",
            TileTheme::Purple => "purple",
            TileTheme::Emerald => "emerald",
            TileTheme::Amber => "amber",
            TileTheme::Teal => "teal",
            TileTheme::Cyan => "cyan",
            TileTheme::Slate => "slate",
            TileTheme::Lime => "lime",
            TileTheme::Pink => "pink",
            TileTheme::Fuchsia => "fuchsia",
            TileTheme::Rose => "rose",
            TileTheme::Violet => "violet",
        }
    }

    /// Look up a theme by its table key. Unknown keys yield None.
    pub fn from_key(key: &str) -> Option<Self> {
        let theme = match key {
            "blue" => TileTheme::Blue,
            "indigo" => TileTheme::Indigo,
            "purple" => TileTheme::Purple,
            "emerald" => TileTheme::Emerald,
            "amber" => TileTheme::Amber,
            "teal" => TileTheme::Teal,
            "cyan" => TileTheme::Cyan,
            "slate" => TileTheme::Slate,
            "lime" => TileTheme::Lime,
            "pink" => TileTheme::Pink,
            "fuchsia" => TileTheme::Fuchsia,
            "rose" => TileTheme::Rose,
            "violet" => TileTheme::Violet,
            _ => return None,
        };
        Some(theme)
    }
}

/// A single shortcut tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub size: TileSize,
    pub theme: TileTheme,
    pub badge: Option<&'static str>,
    pub metric: Option<&'static str>,
}

/// A named, collapsible collection of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Hex color, e.g. "#2563eb"
    pub accent: &'static str,
    pub tiles: &'static [Tile],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_parse() {
        assert_eq!("compact".parse::<Density>().unwrap(), Density::Compact);
        assert_eq!("roomy".parse::<Density>().unwrap(), Density::Roomy);
        assert!("cozy".parse::<Density>().is_err());
        assert!("Standard".parse::<Density>().is_err());
    }

    #[test]
    fn test_density_cycle() {
        let mut d = Density::default();
        assert_eq!(d, Density::Standard);
        for _ in 0..3 {
            d = d.next();
        }
        assert_eq!(d, Density::Standard);
    }

    #[test]
    fn test_theme_keys_round_trip() {
        for key in ["blue", "slate", "violet"] {
            assert_eq!(TileTheme::from_key(key).map(|t| t.as_str()), Some(key));
        }
        assert_eq!(TileTheme::from_key("nonexistent"), None);
    }

    #[test]
    fn test_tile_size_units() {
        assert_eq!(TileSize::Wide.units(), (2, 1));
        assert_eq!(TileSize::Tall.units(), (1, 2));
        assert_eq!(TileSize::Large.units(), (2, 2));
    }

    #[test]
    fn test_flash_message_expiry() {
        let msg = FlashMessage::new("test".into());
        assert!(!msg.is_expired(3));
        assert!(msg.is_expired(0));
        assert_eq!(msg.text, "test");
    }
}
