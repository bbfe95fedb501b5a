//! Tile layout engine
//!
//! Packs tiles into fixed-size blocks, in one of two orientations.
//!
//! Horizontal:
//! - each block is 2 units wide and `row_count` units tall
//! - slots are scanned row by row, left to right
//! - a full block is followed by a new block `2 * item_size` to the right
//!
//! Vertical mirrors this with the axes swapped:
//! - each block is `column_count` units wide and 2 units tall
//! - slots are scanned column by column, top to bottom
//! - a full block is followed by a new block `2 * item_size` below
//!
//! Tile dimensions are multiples of `item_size`; output positions are in
//! the same scale as `item_size` (pixels for the HTML page, grid units
//! when `item_size` is 1).

use crate::types::Tile;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => bail!("orientation must be 'horizontal' or 'vertical', got '{}'", s),
        }
    }
}

/// A tile to be placed, sized in multiples of the item size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec<'a> {
    pub id: &'a str,
    pub width_units: u32,
    pub height_units: u32,
}

impl<'a> TileSpec<'a> {
    #[cfg(test)]
    pub fn new(id: &'a str, width_units: u32, height_units: u32) -> Result<Self> {
        if width_units == 0 || height_units == 0 {
            bail!("tile '{}' dimensions must be positive", id);
        }
        Ok(Self {
            id,
            width_units,
            height_units,
        })
    }
}

impl From<&Tile> for TileSpec<'static> {
    fn from(tile: &Tile) -> Self {
        let (w, h) = tile.size.units();
        Self {
            id: tile.id,
            width_units: u32::from(w),
            height_units: u32::from(h),
        }
    }
}

/// A tile with its assigned position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedTile<'a> {
    pub id: &'a str,
    pub width_units: u32,
    pub height_units: u32,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanOrder {
    RowsFirst,
    ColumnsFirst,
}

/// Occupancy of the block currently being filled
struct Block {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Block {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| !c)
    }

    fn fits(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        (y..y + h).all(|cy| (x..x + w).all(|cx| !self.cells[(cy * self.width + cx) as usize]))
    }

    fn occupy(&mut self, x: u32, y: u32, w: u32, h: u32) {
        for cy in y..y + h {
            for cx in x..x + w {
                self.cells[(cy * self.width + cx) as usize] = true;
            }
        }
    }

    fn find_space(&self, w: u32, h: u32, order: ScanOrder) -> Option<(u32, u32)> {
        if w > self.width || h > self.height {
            return None;
        }
        let xs = 0..=self.width - w;
        let ys = 0..=self.height - h;
        match order {
            ScanOrder::RowsFirst => ys
                .flat_map(|y| xs.clone().map(move |x| (x, y)))
                .find(|&(x, y)| self.fits(x, y, w, h)),
            ScanOrder::ColumnsFirst => xs
                .flat_map(|x| ys.clone().map(move |y| (x, y)))
                .find(|&(x, y)| self.fits(x, y, w, h)),
        }
    }
}

/// Upper bound for `row_count` and `column_count`
pub const MAX_BLOCK_UNITS: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    item_size: u32,
    row_count: u32,
    column_count: u32,
}

impl LayoutEngine {
    pub fn new(item_size: u32, row_count: u32, column_count: u32) -> Result<Self> {
        if item_size == 0 {
            bail!("item_size must be positive");
        }
        if row_count == 0 {
            bail!("row_count must be positive");
        }
        if column_count == 0 {
            bail!("column_count must be positive");
        }
        if row_count > MAX_BLOCK_UNITS {
            bail!("row_count must be at most {}, got {}", MAX_BLOCK_UNITS, row_count);
        }
        if column_count > MAX_BLOCK_UNITS {
            bail!("column_count must be at most {}, got {}", MAX_BLOCK_UNITS, column_count);
        }
        Ok(Self {
            item_size,
            row_count,
            column_count,
        })
    }

    /// Block footprint in units (width, height) for an orientation
    pub fn block_units(&self, orientation: Orientation) -> (u32, u32) {
        match orientation {
            Orientation::Horizontal => (2, self.row_count),
            Orientation::Vertical => (self.column_count, 2),
        }
    }

    /// Position every tile, in input order.
    ///
    /// Fails if a tile is larger than a whole block, since no new block
    /// could ever hold it.
    pub fn layout<'a, I>(&self, tiles: I, orientation: Orientation) -> Result<Vec<PositionedTile<'a>>>
    where
        I: IntoIterator<Item = TileSpec<'a>>,
    {
        let (block_width, block_height) = self.block_units(orientation);
        let step = self
            .item_size
            .checked_mul(2)
            .context("item_size is too large")?;
        let (advance, order) = match orientation {
            Orientation::Horizontal => ((step, 0), ScanOrder::RowsFirst),
            Orientation::Vertical => ((0, step), ScanOrder::ColumnsFirst),
        };

        let mut origin = (0u32, 0u32);
        let mut block = Block::new(block_width, block_height);
        let mut positions = Vec::new();

        for tile in tiles {
            let (w, h) = (tile.width_units, tile.height_units);
            let (gx, gy) = loop {
                if let Some(slot) = block.find_space(w, h, order) {
                    break slot;
                }
                if block.is_empty() {
                    bail!(
                        "tile '{}' ({}x{}) does not fit in a {}x{} block",
                        tile.id,
                        w,
                        h,
                        block_width,
                        block_height
                    );
                }
                origin = (
                    origin.0.checked_add(advance.0).context("layout position overflows")?,
                    origin.1.checked_add(advance.1).context("layout position overflows")?,
                );
                block = Block::new(block_width, block_height);
            };

            block.occupy(gx, gy, w, h);
            positions.push(PositionedTile {
                id: tile.id,
                width_units: w,
                height_units: h,
                x: offset(origin.0, gx, self.item_size)?,
                y: offset(origin.1, gy, self.item_size)?,
            });
        }

        Ok(positions)
    }
}

fn offset(origin: u32, slot: u32, item_size: u32) -> Result<u32> {
    slot.checked_mul(item_size)
        .and_then(|d| origin.checked_add(d))
        .context("layout position overflows")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GROUPS;

    fn unit_tiles(ids: &[&'static str]) -> Vec<TileSpec<'static>> {
        ids.iter().map(|id| TileSpec::new(id, 1, 1).unwrap()).collect()
    }

    #[test]
    fn test_horizontal_layout_respects_row_count() {
        let engine = LayoutEngine::new(100, 2, 3).unwrap();
        let tiles = unit_tiles(&["1", "2", "3", "4", "5"]);

        let positions = engine.layout(tiles, Orientation::Horizontal).unwrap();

        // first row of the first block
        assert_eq!((positions[0].x, positions[0].y), (0, 0));
        assert_eq!((positions[1].x, positions[1].y), (100, 0));
        // row full, next row of the same block
        assert_eq!((positions[2].x, positions[2].y), (0, 100));
        // row limit reached, next block to the right
        assert_eq!(positions[4].x, 200);
        assert_eq!(positions[4].y, 0);
    }

    #[test]
    fn test_vertical_layout_respects_column_count() {
        let engine = LayoutEngine::new(50, 4, 2).unwrap();
        let tiles = vec![
            TileSpec::new("1", 1, 1).unwrap(),
            TileSpec::new("2", 1, 1).unwrap(),
            TileSpec::new("3", 1, 2).unwrap(),
            TileSpec::new("4", 2, 1).unwrap(),
        ];

        let positions = engine.layout(tiles, Orientation::Vertical).unwrap();

        // 1 and 2 fill the first column
        assert_eq!(positions[0].y, 0);
        assert_eq!(positions[1].y, 50);
        // 3 is too tall for what is left there, takes the next column
        assert_eq!((positions[2].x, positions[2].y), (50, 0));
        // column limit reached, 4 starts a block underneath
        assert_eq!((positions[3].x, positions[3].y), (0, 100));
    }

    #[test]
    fn test_invalid_orientation() {
        assert!("diagonal".parse::<Orientation>().is_err());
        assert_eq!("Vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("HORIZONTAL".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(LayoutEngine::new(0, 1, 1).is_err());
        assert!(LayoutEngine::new(10, 0, 1).is_err());
        assert!(LayoutEngine::new(10, 1, 0).is_err());
        assert!(TileSpec::new("x", 0, 1).is_err());
    }

    #[test]
    fn test_block_size_is_capped() {
        assert!(LayoutEngine::new(1, MAX_BLOCK_UNITS, MAX_BLOCK_UNITS).is_ok());
        let err = LayoutEngine::new(1, 3_000_000_000, 4).unwrap_err();
        assert!(err.to_string().contains("row_count"));
        let err = LayoutEngine::new(1, 2, u32::MAX).unwrap_err();
        assert!(err.to_string().contains("column_count"));
    }

    #[test]
    fn test_huge_item_size_errors_instead_of_wrapping() {
        let engine = LayoutEngine::new(u32::MAX, 1, 1).unwrap();
        let tiles = unit_tiles(&["1", "2"]);
        assert!(engine.layout(tiles, Orientation::Horizontal).is_err());

        let engine = LayoutEngine::new(u32::MAX / 2, 1, 1).unwrap();
        // the fourth tile lands one item below the second block's origin
        let tiles = unit_tiles(&["1", "2", "3", "4"]);
        assert!(engine.layout(tiles, Orientation::Vertical).is_err());
    }

    #[test]
    fn test_oversized_tile_is_rejected() {
        let engine = LayoutEngine::new(10, 1, 1).unwrap();
        let tiles = vec![TileSpec::new("big", 1, 2).unwrap()];
        let err = engine.layout(tiles, Orientation::Horizontal).unwrap_err();
        assert!(err.to_string().contains("big"));
    }

    #[test]
    fn test_empty_input() {
        let engine = LayoutEngine::new(10, 2, 2).unwrap();
        assert!(engine.layout(Vec::new(), Orientation::Vertical).unwrap().is_empty());
    }

    #[test]
    fn test_catalog_groups_pack_without_overlap() {
        let engine = LayoutEngine::new(1, 2, 4).unwrap();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for group in GROUPS {
                let placed = engine
                    .layout(group.tiles.iter().map(TileSpec::from), orientation)
                    .unwrap();
                assert_eq!(placed.len(), group.tiles.len());
                for (i, a) in placed.iter().enumerate() {
                    for b in &placed[i + 1..] {
                        let overlap = a.x < b.x + b.width_units
                            && b.x < a.x + a.width_units
                            && a.y < b.y + b.height_units
                            && b.y < a.y + a.height_units;
                        assert!(!overlap, "{} overlaps {} ({})", a.id, b.id, orientation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_analytics_horizontal_blocks() {
        let engine = LayoutEngine::new(1, 2, 4).unwrap();
        let placed = engine
            .layout(GROUPS[0].tiles.iter().map(TileSpec::from), Orientation::Horizontal)
            .unwrap();
        let pos: Vec<(u32, u32)> = placed.iter().map(|p| (p.x, p.y)).collect();
        // sales-dash, inventory | customers, finance | teams
        assert_eq!(pos, vec![(0, 0), (0, 1), (2, 0), (3, 0), (4, 0)]);
    }
}
