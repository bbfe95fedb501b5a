//! Presentation mapper
//!
//! Pure lookups from view state and the static tables to renderable
//! attributes: color pairs, CSS custom properties, class names, labels.
//! Every function here is total.

use crate::types::{Density, TileSize, TileTheme};
use std::collections::HashSet;

/// Gradient start/end for a tile background (hex strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub from: &'static str,
    pub to: &'static str,
}

/// Used for any theme key missing from the table
pub const FALLBACK_THEME_COLORS: ThemeColors = ThemeColors {
    from: "#0f172a",
    to: "#475569",
};

/// Pixel sizes derived from a density preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityVars {
    pub base_size_px: u16,
    pub gap_px: u16,
}

impl DensityVars {
    /// CSS custom properties applied to the page wrapper
    pub fn css_vars(&self) -> [(&'static str, String); 2] {
        [
            ("--tile-base", format!("{}px", self.base_size_px)),
            ("--tile-gap", format!("{}px", self.gap_px)),
        ]
    }
}

pub fn theme_colors(theme: TileTheme) -> ThemeColors {
    let (from, to) = match theme {
        TileTheme::Blue => ("#1d4ed8", "#3b82f6"),
        TileTheme::Indigo => ("#4338ca", "#6366f1"),
        TileTheme::Purple => ("#6b21a8", "#a855f7"),
        TileTheme::Emerald => ("#047857", "#34d399"),
        TileTheme::Amber => ("#b45309", "#f59e0b"),
        TileTheme::Teal => ("#0f766e", "#2dd4bf"),
        TileTheme::Cyan => ("#0ea5e9", "#22d3ee"),
        TileTheme::Slate => ("#1f2937", "#9ca3af"),
        TileTheme::Lime => ("#3f6212", "#a3e635"),
        TileTheme::Pink => ("#be185d", "#fb7185"),
        TileTheme::Fuchsia => ("#a21caf", "#e879f9"),
        TileTheme::Rose => ("#b91c1c", "#f87171"),
        TileTheme::Violet => ("#6d28d9", "#c4b5fd"),
    };
    ThemeColors { from, to }
}

/// Resolve a theme table key, falling back to slate-on-navy for unknown keys
pub fn resolve_theme_colors(theme_key: &str) -> ThemeColors {
    TileTheme::from_key(theme_key)
        .map(theme_colors)
        .unwrap_or(FALLBACK_THEME_COLORS)
}

pub fn resolve_density_vars(density: Density) -> DensityVars {
    let (base_size_px, gap_px) = match density {
        Density::Compact => (120, 12),
        Density::Standard => (150, 14),
        Density::Roomy => (180, 18),
    };
    DensityVars {
        base_size_px,
        gap_px,
    }
}

pub fn is_group_collapsed(group_id: &str, collapsed: &HashSet<String>) -> bool {
    collapsed.contains(group_id)
}

pub fn is_tile_active(tile_id: &str, active_tile_id: Option<&str>) -> bool {
    active_tile_id == Some(tile_id)
}

pub fn tile_gradient(theme_key: &str) -> String {
    let ThemeColors { from, to } = resolve_theme_colors(theme_key);
    format!("linear-gradient(135deg, {}, {})", from, to)
}

pub fn tile_class_name(size: TileSize, active: bool) -> String {
    let mut class = format!("tile tile-{}", size.as_str());
    if active {
        class.push_str(" tile-active");
    }
    class
}

pub fn group_class_name(outlined: bool) -> &'static str {
    if outlined {
        "group group-outlined"
    } else {
        "group"
    }
}

pub fn chip_class_name(density: Density, current: Density) -> &'static str {
    if density == current {
        "chip active"
    } else {
        "chip"
    }
}

/// Label of the group header button
pub fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Expand"
    } else {
        "Collapse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INITIAL_ACTIVE_TILE;
    use crate::state::ViewState;

    #[test]
    fn test_density_table_literals() {
        let expected = [
            (Density::Compact, 120, 12),
            (Density::Standard, 150, 14),
            (Density::Roomy, 180, 18),
        ];
        for (density, base, gap) in expected {
            assert_eq!(
                resolve_density_vars(density),
                DensityVars {
                    base_size_px: base,
                    gap_px: gap
                }
            );
        }
    }

    #[test]
    fn test_set_density_then_resolve() {
        let mut state = ViewState::new();
        state.set_density(Density::Roomy);
        let vars = resolve_density_vars(state.density());
        assert_eq!((vars.base_size_px, vars.gap_px), (180, 18));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let colors = resolve_theme_colors("nonexistent");
        assert_eq!((colors.from, colors.to), ("#0f172a", "#475569"));
        assert_eq!(resolve_theme_colors(""), FALLBACK_THEME_COLORS);
    }

    #[test]
    fn test_known_theme_lookup() {
        let colors = resolve_theme_colors("violet");
        assert_eq!((colors.from, colors.to), ("#6d28d9", "#c4b5fd"));
        assert_eq!(resolve_theme_colors("teal"), theme_colors(TileTheme::Teal));
    }

    #[test]
    fn test_is_tile_active() {
        let state = ViewState::new();
        assert!(is_tile_active("sales-dash", state.active_tile_id()));
        assert!(is_tile_active(INITIAL_ACTIVE_TILE, Some("sales-dash")));
        assert!(!is_tile_active("inventory", state.active_tile_id()));
        assert!(!is_tile_active("sales-dash", None));
    }

    #[test]
    fn test_is_group_collapsed() {
        let mut state = ViewState::new();
        assert!(!is_group_collapsed("research", state.collapsed_group_ids()));
        state.toggle_group_collapsed("research");
        assert!(is_group_collapsed("research", state.collapsed_group_ids()));
        assert!(!is_group_collapsed("analytics", state.collapsed_group_ids()));
    }

    #[test]
    fn test_css_vars() {
        let vars = resolve_density_vars(Density::Compact).css_vars();
        assert_eq!(vars[0], ("--tile-base", "120px".to_string()));
        assert_eq!(vars[1], ("--tile-gap", "12px".to_string()));
    }

    #[test]
    fn test_class_names_and_labels() {
        assert_eq!(tile_class_name(TileSize::Wide, true), "tile tile-wide tile-active");
        assert_eq!(tile_class_name(TileSize::Small, false), "tile tile-small");
        assert_eq!(group_class_name(true), "group group-outlined");
        assert_eq!(group_class_name(false), "group");
        assert_eq!(chip_class_name(Density::Roomy, Density::Roomy), "chip active");
        assert_eq!(chip_class_name(Density::Compact, Density::Roomy), "chip");
        assert_eq!(toggle_label(true), "Expand");
        assert_eq!(toggle_label(false), "Collapse");
    }

    #[test]
    fn test_gradient_string() {
        assert_eq!(
            tile_gradient("blue"),
            "linear-gradient(135deg, #1d4ed8, #3b82f6)"
        );
        assert_eq!(
            tile_gradient("mystery"),
            "linear-gradient(135deg, #0f172a, #475569)"
        );
    }
}
