//! Built-in group and tile definitions
//!
//! The board content is compiled in. Nothing here is ever mutated.

use crate::types::{Group, Tile, TileSize, TileTheme};

/// Tile that is active when a session starts
pub const INITIAL_ACTIVE_TILE: &str = "sales-dash";

pub const HERO_EYEBROW: &str = "Tile groups";
pub const HERO_TITLE: &str = "Arrange tiles into groups just like the DevExpress Tile Control";
pub const HERO_LEDE: &str = "Organize shortcuts into visual groups, resize tiles, and collapse \
sections while keeping a consistent grid.";

const ANALYTICS: &[Tile] = &[
    Tile {
        id: "sales-dash",
        title: "Sales overview",
        subtitle: "Charts, grids, pivots",
        size: TileSize::Wide,
        theme: TileTheme::Blue,
        badge: Some("Live"),
        metric: Some("+12%"),
    },
    Tile {
        id: "inventory",
        title: "Inventory",
        subtitle: "Warehouse + stores",
        size: TileSize::Medium,
        theme: TileTheme::Indigo,
        badge: None,
        metric: Some("4 alerts"),
    },
    Tile {
        id: "customers",
        title: "Customers",
        subtitle: "Segments and churn",
        size: TileSize::Tall,
        theme: TileTheme::Purple,
        badge: None,
        metric: Some("97% happy"),
    },
    Tile {
        id: "finance",
        title: "Finance",
        subtitle: "Cash flow + AR",
        size: TileSize::Medium,
        theme: TileTheme::Emerald,
        badge: None,
        metric: Some("$1.2M"),
    },
    Tile {
        id: "teams",
        title: "Team velocity",
        subtitle: "Burndown + throughput",
        size: TileSize::Wide,
        theme: TileTheme::Amber,
        badge: None,
        metric: Some("Sprint 24"),
    },
];

const OPERATIONS: &[Tile] = &[
    Tile {
        id: "routes",
        title: "Transport routes",
        subtitle: "Load + ETA monitoring",
        size: TileSize::Medium,
        theme: TileTheme::Teal,
        badge: None,
        metric: Some("7 trucks"),
    },
    Tile {
        id: "service",
        title: "Service queue",
        subtitle: "On-site teams",
        size: TileSize::Wide,
        theme: TileTheme::Cyan,
        badge: Some("Now"),
        metric: Some("3 visits"),
    },
    Tile {
        id: "tickets",
        title: "Tickets",
        subtitle: "Helpdesk and escalations",
        size: TileSize::Medium,
        theme: TileTheme::Slate,
        badge: None,
        metric: Some("18 open"),
    },
    Tile {
        id: "templates",
        title: "Quick templates",
        subtitle: "Repairs + inspections",
        size: TileSize::Small,
        theme: TileTheme::Lime,
        badge: None,
        metric: Some("6 drafts"),
    },
    Tile {
        id: "approvals",
        title: "Approvals",
        subtitle: "Contracts and vacation",
        size: TileSize::Tall,
        theme: TileTheme::Emerald,
        badge: None,
        metric: Some("5 waiting"),
    },
];

const RESEARCH: &[Tile] = &[
    Tile {
        id: "ai-lab",
        title: "AI lab",
        subtitle: "Notebooks + metrics",
        size: TileSize::Wide,
        theme: TileTheme::Pink,
        badge: Some("Beta"),
        metric: Some("9 runs"),
    },
    Tile {
        id: "design-kit",
        title: "Design kit",
        subtitle: "Tokens + Figma links",
        size: TileSize::Medium,
        theme: TileTheme::Fuchsia,
        badge: None,
        metric: Some("Updated"),
    },
    Tile {
        id: "features",
        title: "Feature flags",
        subtitle: "Rollouts + killswitch",
        size: TileSize::Medium,
        theme: TileTheme::Rose,
        badge: None,
        metric: Some("12 toggles"),
    },
    Tile {
        id: "playground",
        title: "Tile playground",
        subtitle: "Custom layout tests",
        size: TileSize::Large,
        theme: TileTheme::Violet,
        badge: None,
        metric: Some("Freeform"),
    },
];

/// All groups, in display order
pub static GROUPS: &[Group] = &[
    Group {
        id: "analytics",
        title: "Analytics",
        description: "Dashboards and KPIs you open several times a day.",
        accent: "#2563eb",
        tiles: ANALYTICS,
    },
    Group {
        id: "operations",
        title: "Operations",
        description: "Pinned processes and maintenance shortcuts.",
        accent: "#0f766e",
        tiles: OPERATIONS,
    },
    Group {
        id: "research",
        title: "Research",
        description: "Experiments, prototypes and playgrounds.",
        accent: "#c026d3",
        tiles: RESEARCH,
    },
];

/// Every tile across all groups, in display order
pub fn all_tiles() -> impl Iterator<Item = &'static Tile> {
    GROUPS.iter().flat_map(|g| g.tiles.iter())
}

pub fn find_tile(id: &str) -> Option<&'static Tile> {
    all_tiles().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tile_ids_unique_across_groups() {
        let mut seen = HashSet::new();
        for tile in all_tiles() {
            assert!(seen.insert(tile.id), "duplicate tile id: {}", tile.id);
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_group_ids_unique() {
        let ids: HashSet<&str> = GROUPS.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), GROUPS.len());
    }

    #[test]
    fn test_initial_active_tile_exists() {
        let tile = find_tile(INITIAL_ACTIVE_TILE).expect("initial tile must exist");
        assert_eq!(tile.title, "Sales overview");
        assert!(find_tile("nope").is_none());
    }
}
