//! Application state and event handling for tileboard
//!
//! Every interaction ends in one of the four view state mutators.
//! Keyboard focus and scrolling are front-end concerns and live here,
//! next to the store, not inside it.

use crate::catalog::{self, GROUPS};
use crate::config::Config;
use crate::presentation::is_group_collapsed;
use crate::state::ViewState;
use crate::types::{Density, FlashMessage};
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

const SCROLL_STEP: u16 = 3;

/// Something the user can click or focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Density(Density),
    Outline,
    GroupToggle(&'static str),
    Tile(&'static str),
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub state: ViewState,
    pub focus: Target,
    /// Board scroll offset in rows
    pub scroll: u16,
    /// Ask the next render to scroll the focused target into view
    pub follow_focus: bool,
    pub show_help: bool,
    pub flash_message: Option<FlashMessage>,
    /// Set by render functions: clickable regions of the current frame
    pub hitboxes: Vec<(Rect, Target)>,
    /// Set by render functions: rows available to the board
    pub board_height: u16,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(config.palette);
        let state = ViewState::new();
        let focus = state
            .active_tile_id()
            .and_then(catalog::find_tile)
            .map(|t| Target::Tile(t.id))
            .unwrap_or(Target::GroupToggle(GROUPS[0].id));
        tracing::debug!(
            palette = config.palette.as_str(),
            orientation = %config.orientation,
            "app initialized"
        );

        Self {
            should_quit: false,
            config,
            theme,
            state,
            focus,
            scroll: 0,
            follow_focus: false,
            show_help: false,
            flash_message: None,
            hitboxes: Vec::new(),
            board_height: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter
            ) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,

            KeyCode::Char('1') => self.activate(Target::Density(Density::Compact)),
            KeyCode::Char('2') => self.activate(Target::Density(Density::Standard)),
            KeyCode::Char('3') => self.activate(Target::Density(Density::Roomy)),
            KeyCode::Char('d') => self.activate(Target::Density(self.state.density().next())),
            KeyCode::Char('o') => self.activate(Target::Outline),

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.move_focus(1),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Down | KeyCode::Char('j') => self.focus_group(true),
            KeyCode::Up | KeyCode::Char('k') => self.focus_group(false),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.focus),
            KeyCode::Char('c') => {
                if let Some(group_id) = self.focused_group() {
                    self.activate(Target::GroupToggle(group_id));
                }
            }

            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(self.page_rows());
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(self.page_rows());
            }
            KeyCode::Home => {
                self.scroll = 0;
                if let Some(first) = self.focus_order().first() {
                    self.focus = *first;
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.show_help {
                    self.show_help = false;
                    return;
                }
                if let Some(target) = self.hit_test(mouse.column, mouse.row) {
                    if matches!(target, Target::Tile(_) | Target::GroupToggle(_)) {
                        self.focus = target;
                    }
                    self.activate(target);
                }
            }
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            _ => {}
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        self.hitboxes
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, target)| *target)
    }

    /// Route a target to its view state mutator
    pub fn activate(&mut self, target: Target) {
        match target {
            Target::Density(level) => {
                self.state.set_density(level);
                self.flash(format!("Density: {}", level));
                self.follow_focus = true;
            }
            Target::Outline => {
                let outlined = !self.state.outlined();
                self.state.set_outlined(outlined);
                let text = if outlined {
                    "Group outlines shown"
                } else {
                    "Group outlines hidden"
                };
                self.flash(text.to_string());
            }
            Target::GroupToggle(group_id) => {
                self.state.toggle_group_collapsed(group_id);
                // Focus must not stay on a tile that just disappeared
                if self.focused_group() == Some(group_id)
                    && is_group_collapsed(group_id, self.state.collapsed_group_ids())
                {
                    self.focus = Target::GroupToggle(group_id);
                }
                self.follow_focus = true;
            }
            Target::Tile(tile_id) => self.state.set_active_tile(tile_id),
        }
    }

    /// Focusable targets in reading order: each group's toggle, then its
    /// tiles unless the group is collapsed
    pub fn focus_order(&self) -> Vec<Target> {
        let collapsed = self.state.collapsed_group_ids();
        let mut order = Vec::new();
        for group in GROUPS {
            order.push(Target::GroupToggle(group.id));
            if !is_group_collapsed(group.id, collapsed) {
                order.extend(group.tiles.iter().map(|t| Target::Tile(t.id)));
            }
        }
        order
    }

    fn focus_index(&self, order: &[Target]) -> usize {
        order.iter().position(|t| *t == self.focus).unwrap_or(0)
    }

    fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        if order.is_empty() {
            return;
        }
        let idx = self.focus_index(&order) as isize + delta;
        let idx = idx.clamp(0, order.len() as isize - 1) as usize;
        self.focus = order[idx];
        self.follow_focus = true;
    }

    fn focus_group(&mut self, forward: bool) {
        let order = self.focus_order();
        let idx = self.focus_index(&order);
        let is_toggle = |t: &&Target| matches!(t, Target::GroupToggle(_));
        let found = if forward {
            order.iter().skip(idx + 1).find(is_toggle)
        } else {
            order[..idx].iter().rev().find(is_toggle)
        };
        if let Some(target) = found {
            self.focus = *target;
            self.follow_focus = true;
        }
    }

    /// Group owning the focused target
    pub fn focused_group(&self) -> Option<&'static str> {
        match self.focus {
            Target::GroupToggle(id) => Some(id),
            Target::Tile(tile_id) => GROUPS
                .iter()
                .find(|g| g.tiles.iter().any(|t| t.id == tile_id))
                .map(|g| g.id),
            Target::Density(_) | Target::Outline => None,
        }
    }

    fn page_rows(&self) -> u16 {
        self.board_height.saturating_sub(2).max(1)
    }

    fn flash(&mut self, text: String) {
        self.flash_message = Some(FlashMessage::new(text));
    }

    pub fn update_timers(&mut self) {
        expire_flash(&mut self.flash_message);
    }
}

/// Expire a flash message after 3 seconds
fn expire_flash(msg: &mut Option<FlashMessage>) {
    if let Some(m) = msg {
        if m.is_expired(3) {
            *msg = None;
        }
    }
}
