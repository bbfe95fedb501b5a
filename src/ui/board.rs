//! Board geometry
//!
//! Turns view state plus the catalog into positioned sections and tiles,
//! in board content coordinates (x from the board's left edge, y from the
//! top of the scrollable content). Drawing happens in `render`.

use crate::catalog::GROUPS;
use crate::config::Config;
use crate::layout::TileSpec;
use crate::presentation::{is_group_collapsed, resolve_density_vars, DensityVars};
use crate::state::ViewState;
use crate::types::{Group, Tile};
use anyhow::{Context, Result};
use ratatui::layout::Rect;

/// Rows taken by a group header (title line + description)
pub const HEADER_ROWS: u16 = 2;
/// Blank rows between consecutive groups
pub const SECTION_GAP: u16 = 1;

/// Terminal cell sizes derived from the pixel density table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub unit_w: u16,
    pub unit_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl CellMetrics {
    pub fn from_vars(vars: DensityVars) -> Self {
        Self {
            unit_w: vars.base_size_px / 10,
            unit_h: vars.base_size_px / 30,
            gap_x: vars.gap_px / 6,
            gap_y: 1,
        }
    }

    fn span_w(&self, units: u32) -> u16 {
        let units = units as u16;
        units * self.unit_w + units.saturating_sub(1) * self.gap_x
    }

    fn span_h(&self, units: u32) -> u16 {
        let units = units as u16;
        units * self.unit_h + units.saturating_sub(1) * self.gap_y
    }

    fn offset_x(&self, unit: u32) -> u16 {
        unit as u16 * (self.unit_w + self.gap_x)
    }

    fn offset_y(&self, unit: u32) -> u16 {
        unit as u16 * (self.unit_h + self.gap_y)
    }
}

#[derive(Debug, Clone)]
pub struct TilePlacement {
    pub tile: &'static Tile,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct SectionPlan {
    pub group: &'static Group,
    pub collapsed: bool,
    pub outlined: bool,
    /// Whole section including the outline
    pub rect: Rect,
    /// Header title line
    pub header: Rect,
    pub tiles: Vec<TilePlacement>,
}

#[derive(Debug, Clone)]
pub struct BoardPlan {
    pub sections: Vec<SectionPlan>,
    pub height: u16,
}

impl BoardPlan {
    pub fn tile_rect(&self, tile_id: &str) -> Option<Rect> {
        self.sections
            .iter()
            .flat_map(|s| s.tiles.iter())
            .find(|p| p.tile.id == tile_id)
            .map(|p| p.rect)
    }

    pub fn header_rect(&self, group_id: &str) -> Option<Rect> {
        self.sections
            .iter()
            .find(|s| s.group.id == group_id)
            .map(|s| s.header)
    }
}

/// Lay out every group for a board of the given width
pub fn plan(state: &ViewState, config: &Config, width: u16) -> Result<BoardPlan> {
    let metrics = CellMetrics::from_vars(resolve_density_vars(state.density()));
    let engine = config.layout_engine(1)?;
    let outlined = state.outlined();
    // Outline + one column of padding, or just the padding
    let (inset_x, inset_y) = if outlined { (2, 1) } else { (1, 0) };

    let mut sections = Vec::with_capacity(GROUPS.len());
    let mut y = 0u16;

    for group in GROUPS {
        let collapsed = is_group_collapsed(group.id, state.collapsed_group_ids());
        let header = Rect::new(inset_x, y + inset_y, width.saturating_sub(2 * inset_x), 1);
        let mut inner_bottom = header.y + HEADER_ROWS;

        let mut tiles = Vec::new();
        if !collapsed {
            let grid_top = inner_bottom + 1;
            let placed = engine
                .layout(group.tiles.iter().map(TileSpec::from), config.orientation)
                .with_context(|| format!("Failed to lay out group '{}'", group.id))?;

            for (tile, pos) in group.tiles.iter().zip(placed) {
                debug_assert_eq!(tile.id, pos.id);
                let rect = Rect::new(
                    inset_x + metrics.offset_x(pos.x),
                    grid_top + metrics.offset_y(pos.y),
                    metrics.span_w(pos.width_units),
                    metrics.span_h(pos.height_units),
                );
                inner_bottom = inner_bottom.max(rect.bottom());
                tiles.push(TilePlacement { tile, rect });
            }
        }

        let bottom = inner_bottom + inset_y;
        sections.push(SectionPlan {
            group,
            collapsed,
            outlined,
            rect: Rect::new(0, y, width, bottom - y),
            header,
            tiles,
        });
        y = bottom + SECTION_GAP;
    }

    Ok(BoardPlan {
        sections,
        height: y.saturating_sub(SECTION_GAP),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Orientation;
    use crate::types::Density;

    #[test]
    fn test_cell_metrics_per_density() {
        let m = |d| CellMetrics::from_vars(resolve_density_vars(d));
        assert_eq!(
            m(Density::Compact),
            CellMetrics { unit_w: 12, unit_h: 4, gap_x: 2, gap_y: 1 }
        );
        assert_eq!(
            m(Density::Standard),
            CellMetrics { unit_w: 15, unit_h: 5, gap_x: 2, gap_y: 1 }
        );
        assert_eq!(
            m(Density::Roomy),
            CellMetrics { unit_w: 18, unit_h: 6, gap_x: 3, gap_y: 1 }
        );
    }

    #[test]
    fn test_plan_places_every_tile() {
        let plan = plan(&ViewState::new(), &Config::default(), 100).unwrap();
        assert_eq!(plan.sections.len(), 3);
        let count: usize = plan.sections.iter().map(|s| s.tiles.len()).sum();
        assert_eq!(count, 14);
    }

    #[test]
    fn test_wide_tile_spans_two_units() {
        let plan = plan(&ViewState::new(), &Config::default(), 100).unwrap();
        let sales = plan.tile_rect("sales-dash").unwrap();
        let inventory = plan.tile_rect("inventory").unwrap();
        let customers = plan.tile_rect("customers").unwrap();
        // standard: 15 cols per unit, 2 cols gap
        assert_eq!(sales.width, 32);
        assert_eq!(inventory.width, 15);
        assert_eq!(sales.height, 5);
        assert_eq!(customers.height, 11);
        // outlined: border + padding, then header, blank line
        assert_eq!((sales.x, sales.y), (2, 4));
        // vertical packing fills the column under the wide tile first
        assert_eq!((inventory.x, inventory.y), (2, 10));
        assert_eq!((customers.x, customers.y), (2 + 17 * 2, 4));
    }

    #[test]
    fn test_collapsed_group_is_header_only() {
        let mut state = ViewState::new();
        let expanded = plan(&state, &Config::default(), 100).unwrap();
        state.toggle_group_collapsed("operations");
        let collapsed = plan(&state, &Config::default(), 100).unwrap();

        let ops = &collapsed.sections[1];
        assert!(ops.collapsed);
        assert!(ops.tiles.is_empty());
        // border, header (2 rows), border
        assert_eq!(ops.rect.height, 4);
        assert!(collapsed.height < expanded.height);
        assert!(collapsed.tile_rect("routes").is_none());
        assert!(collapsed.header_rect("operations").is_some());
    }

    #[test]
    fn test_sections_do_not_overlap() {
        let mut state = ViewState::new();
        state.set_outlined(false);
        state.set_density(Density::Roomy);
        let plan = plan(&state, &Config::default(), 120).unwrap();
        for pair in plan.sections.windows(2) {
            assert!(pair[0].rect.bottom() + SECTION_GAP <= pair[1].rect.y);
        }
        for section in &plan.sections {
            for t in &section.tiles {
                assert!(t.rect.bottom() <= section.rect.bottom());
            }
        }
    }

    #[test]
    fn test_horizontal_orientation_packs_sideways() {
        let config = Config {
            orientation: Orientation::Horizontal,
            ..Config::default()
        };
        let plan = plan(&ViewState::new(), &config, 200).unwrap();
        let sales = plan.tile_rect("sales-dash").unwrap();
        let teams = plan.tile_rect("teams").unwrap();
        assert_eq!(teams.y, sales.y);
        assert!(teams.x > sales.x);
    }

    #[test]
    fn test_roomy_board_is_taller() {
        let mut state = ViewState::new();
        let standard = plan(&state, &Config::default(), 100).unwrap();
        state.set_density(Density::Roomy);
        let roomy = plan(&state, &Config::default(), 100).unwrap();
        assert!(roomy.height > standard.height);
    }
}
