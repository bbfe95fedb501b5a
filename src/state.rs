//! View state store
//!
//! Owns the four independent pieces of UI state. The store is passed
//! explicitly to render code and only changes through the mutators below.

use crate::catalog::INITIAL_ACTIVE_TILE;
use crate::types::Density;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    density: Density,
    active_tile_id: Option<String>,
    outlined: bool,
    collapsed_group_ids: HashSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            density: Density::Standard,
            active_tile_id: Some(INITIAL_ACTIVE_TILE.to_string()),
            outlined: true,
            collapsed_group_ids: HashSet::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn active_tile_id(&self) -> Option<&str> {
        self.active_tile_id.as_deref()
    }

    pub fn outlined(&self) -> bool {
        self.outlined
    }

    pub fn collapsed_group_ids(&self) -> &HashSet<String> {
        &self.collapsed_group_ids
    }

    pub fn set_density(&mut self, level: Density) {
        tracing::debug!(density = %level, "density changed");
        self.density = level;
    }

    /// Any id is accepted; an id that matches no tile just leaves
    /// nothing highlighted.
    pub fn set_active_tile(&mut self, tile_id: impl Into<String>) {
        let tile_id = tile_id.into();
        tracing::debug!(tile = %tile_id, "active tile changed");
        self.active_tile_id = Some(tile_id);
    }

    pub fn set_outlined(&mut self, flag: bool) {
        tracing::debug!(outlined = flag, "group outlines changed");
        self.outlined = flag;
    }

    pub fn toggle_group_collapsed(&mut self, group_id: &str) {
        if !self.collapsed_group_ids.remove(group_id) {
            self.collapsed_group_ids.insert(group_id.to_string());
        }
        tracing::debug!(
            group = group_id,
            collapsed = self.collapsed_group_ids.contains(group_id),
            "group collapse toggled"
        );
    }
}
