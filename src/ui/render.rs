//! Main rendering module for tileboard
//!
//! Renders the complete UI:
//! - Hero panel with density chips and the outline checkbox (top)
//! - Scrollable board of groups and tiles (middle)
//! - Status bar with flash messages (bottom)
//! - Help popup overlay
//!
//! Clickable regions are recorded into `App::hitboxes` while drawing.

use crate::app::{App, Target};
use crate::catalog::{self, HERO_EYEBROW, HERO_LEDE, HERO_TITLE};
use crate::presentation::{is_tile_active, resolve_density_vars, resolve_theme_colors, toggle_label};
use crate::state::ViewState;
use crate::types::Density;
use crate::ui::board::{self, BoardPlan, SectionPlan, TilePlacement};
use crate::ui::theme::{gradient_at, hex_to_color, TILE_TEXT};
use crate::ui::{widgets, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HERO_HEIGHT: u16 = 7;

/// Main render function – entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hitboxes.clear();

    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.block_style()), area);

    let vertical = Layout::vertical([
        Constraint::Length(HERO_HEIGHT),
        Constraint::Min(3),    // board
        Constraint::Length(1), // status bar
    ])
    .split(area);

    render_hero(frame, app, vertical[0]);
    render_board(frame, app, vertical[1]);
    render_status_bar(frame, app, vertical[2]);

    if app.show_help {
        render_help(frame, &app.theme, area);
    }
}

fn render_hero(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };

    let lines = vec![
        Line::styled(
            HERO_EYEBROW.to_uppercase(),
            theme.text_dim().fg(theme.accent_dim).add_modifier(Modifier::BOLD),
        ),
        Line::styled(HERO_TITLE, theme.title()),
        Line::styled(HERO_LEDE, theme.text()),
    ];
    frame.render_widget(Paragraph::new(lines), Rect { height: inner.height.min(3), ..inner });

    if inner.height < 5 {
        return;
    }
    let row = Rect {
        y: inner.y + 4,
        height: 1,
        ..inner
    };

    let mut spans = Vec::new();
    let mut x = row.x;
    let mut push = |text: String, style: Style, target: Option<Target>| {
        let width = text.chars().count() as u16;
        if let Some(target) = target {
            let rect = Rect::new(x, row.y, width, 1).intersection(row);
            if !rect.is_empty() {
                app.hitboxes.push((rect, target));
            }
        }
        x = x.saturating_add(width);
        spans.push(Span::styled(text, style));
    };

    push("Tile density  ".to_string(), theme.text(), None);
    let current = app.state.density();
    for &density in Density::all() {
        let style = if density == current {
            theme.selected()
        } else {
            theme.text_dim()
        };
        push(format!(" {} ", density), style, Some(Target::Density(density)));
        push(" ".to_string(), theme.text(), None);
    }

    push("    ".to_string(), theme.text(), None);
    let mark = if app.state.outlined() { "x" } else { " " };
    push(
        format!("[{}] Show group outlines", mark),
        theme.text(),
        Some(Target::Outline),
    );

    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

/// Maps board content coordinates onto the screen
#[derive(Debug, Clone, Copy)]
struct Viewport {
    area: Rect,
    scroll: u16,
}

impl Viewport {
    /// Screen rect of a content rect, clipped to the board area
    fn project(&self, rect: Rect) -> Option<Rect> {
        let top = rect.y.max(self.scroll);
        let bottom = rect.bottom().min(self.scroll.saturating_add(self.area.height));
        let left = self.area.x.saturating_add(rect.x);
        let right = self.area.x.saturating_add(rect.right()).min(self.area.right());
        if top >= bottom || left >= right {
            return None;
        }
        Some(Rect::new(
            left,
            self.area.y + (top - self.scroll),
            right - left,
            bottom - top,
        ))
    }

    fn row(&self, content_y: u16) -> Option<u16> {
        content_y
            .checked_sub(self.scroll)
            .filter(|r| *r < self.area.height)
            .map(|r| self.area.y + r)
    }

    fn top_visible(&self, content_y: u16) -> bool {
        content_y >= self.scroll
    }

    fn bottom_visible(&self, content_bottom: u16) -> bool {
        content_bottom <= self.scroll.saturating_add(self.area.height)
    }
}

fn render_board(frame: &mut Frame, app: &mut App, area: Rect) {
    app.board_height = area.height;

    let plan = match board::plan(&app.state, &app.config, area.width) {
        Ok(plan) => plan,
        Err(e) => {
            widgets::render_error_popup(frame, "Layout error", &format!("{:#}", e), &app.theme, area);
            return;
        }
    };

    let max_scroll = plan.height.saturating_sub(area.height);
    if app.follow_focus {
        app.scroll = scroll_to_focus(&plan, app.focus, app.scroll, area.height);
        app.follow_focus = false;
    }
    app.scroll = app.scroll.min(max_scroll);

    let view = Viewport {
        area,
        scroll: app.scroll,
    };
    for section in &plan.sections {
        render_section(frame, app, section, view);
    }

    if max_scroll > 0 && area.height > 2 {
        let mut state = ScrollbarState::new(max_scroll as usize).position(app.scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

/// Scroll offset that brings the focused target fully into view
fn scroll_to_focus(plan: &BoardPlan, focus: Target, scroll: u16, height: u16) -> u16 {
    let rect = match focus {
        Target::Tile(id) => plan.tile_rect(id),
        // include the outline row above the header
        Target::GroupToggle(id) => plan.header_rect(id).map(|r| Rect {
            y: r.y.saturating_sub(1),
            height: r.height + 1,
            ..r
        }),
        Target::Density(_) | Target::Outline => None,
    };
    let Some(rect) = rect else {
        return scroll;
    };

    if rect.y < scroll || rect.height > height {
        rect.y
    } else if rect.bottom() > scroll.saturating_add(height) {
        rect.bottom() - height
    } else {
        scroll
    }
}

fn render_section(frame: &mut Frame, app: &mut App, section: &SectionPlan, view: Viewport) {
    let theme = &app.theme;
    let group = section.group;
    let accent = hex_to_color(group.accent).unwrap_or(theme.accent);

    if section.outlined {
        if let Some(screen) = view.project(section.rect) {
            let mut borders = Borders::LEFT | Borders::RIGHT;
            if view.top_visible(section.rect.y) {
                borders |= Borders::TOP;
            }
            if view.bottom_visible(section.rect.bottom()) {
                borders |= Borders::BOTTOM;
            }
            let block = Block::default()
                .borders(borders)
                .border_type(BorderType::Rounded)
                .border_style(theme.border().fg(accent));
            frame.render_widget(block, screen);
        }
    }

    // Header: title + toggle, then description
    if let Some(screen) = view.project(section.header) {
        let arrow = if section.collapsed { "▸ " } else { "▾ " };
        let title = Line::from(vec![
            Span::styled(arrow, Style::default().fg(accent)),
            Span::styled(
                group.title.to_uppercase(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), screen);

        let label = format!("[ {} ]", toggle_label(section.collapsed));
        let width = label.chars().count() as u16;
        let toggle = Rect {
            x: screen.right().saturating_sub(width).max(screen.x),
            width: width.min(screen.width),
            ..screen
        };
        let target = Target::GroupToggle(group.id);
        let style = if app.focus == target {
            theme.selected()
        } else {
            theme.text()
        };
        frame.render_widget(Paragraph::new(label).style(style), toggle);
        app.hitboxes.push((toggle, target));
    }
    let description = Rect {
        y: section.header.y + 1,
        ..section.header
    };
    if let Some(screen) = view.project(description) {
        frame.render_widget(Paragraph::new(group.description).style(theme.text_dim()), screen);
    }

    for placement in &section.tiles {
        let target = Target::Tile(placement.tile.id);
        let focused = app.focus == target;
        if let Some(screen) = render_tile(frame, &app.state, placement, focused, view) {
            app.hitboxes.push((screen, target));
        }
    }
}

/// Paint one tile; returns its on-screen rect if any part is visible
fn render_tile(
    frame: &mut Frame,
    state: &ViewState,
    placement: &TilePlacement,
    focused: bool,
    view: Viewport,
) -> Option<Rect> {
    let tile = placement.tile;
    let rect = placement.rect;
    let screen = view.project(rect)?;

    let colors = resolve_theme_colors(tile.theme.as_str());
    let buf = frame.buffer_mut();
    for col in 0..screen.width {
        let column = Rect::new(screen.x + col, screen.y, 1, screen.height);
        buf.set_style(column, Style::default().bg(gradient_at(colors, col, rect.width)));
    }

    let active = is_tile_active(tile.id, state.active_tile_id());
    let text = Style::default().fg(TILE_TEXT);
    let line_area = |offset: u16| {
        view.row(rect.y + offset).map(|y| Rect {
            x: screen.x + 1,
            y,
            width: screen.width.saturating_sub(2),
            height: 1,
        })
    };

    // Meta row: active marker + badge left, metric right
    if let Some(area) = line_area(0) {
        let mut meta = Vec::new();
        if active {
            meta.push(Span::styled("● ", text.add_modifier(Modifier::BOLD)));
        }
        if let Some(badge) = tile.badge {
            meta.push(Span::styled(
                format!(" {} ", badge),
                text.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(meta)), area);
        if let Some(metric) = tile.metric {
            frame.render_widget(
                Paragraph::new(metric).style(text).alignment(Alignment::Right),
                area,
            );
        }
    }

    let mut title_style = text.add_modifier(Modifier::BOLD);
    if active {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }
    if focused {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }
    let title = if focused {
        format!("› {}", tile.title)
    } else {
        tile.title.to_string()
    };

    let rows = rect.height;
    if let Some(area) = line_area(rows.saturating_sub(2)) {
        frame.render_widget(Paragraph::new(title).style(title_style), area);
    }
    if let Some(area) = line_area(rows.saturating_sub(1)) {
        frame.render_widget(Paragraph::new(tile.subtitle).style(text), area);
    }

    Some(screen)
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(msg) = &app.flash_message {
        widgets::render_flash_message(frame, &msg.text, theme, area);
        return;
    }

    let state = &app.state;
    let vars = resolve_density_vars(state.density());
    let active = state
        .active_tile_id()
        .map(|id| catalog::find_tile(id).map(|t| t.title).unwrap_or(id))
        .unwrap_or("none");
    let left = format!(
        "{} {}px/{}px │ outlines {} │ active: {}",
        state.density(),
        vars.base_size_px,
        vars.gap_px,
        if state.outlined() { "on" } else { "off" },
        active,
    );
    widgets::render_status_bar(frame, &left, "?:help  q:quit", theme, area);
}

fn render_help(frame: &mut Frame, theme: &Theme, area: Rect) {
    let keys: &[(&str, &str)] = &[
        ("1 2 3", "Density compact / standard / roomy"),
        ("d", "Cycle density"),
        ("o", "Toggle group outlines"),
        ("←→ h l Tab", "Move focus"),
        ("↑↓ j k", "Jump between groups"),
        ("Enter Space", "Activate tile / toggle group"),
        ("c", "Collapse or expand focused group"),
        ("PgUp PgDn", "Scroll board"),
        ("Mouse", "Click chips, toggles and tiles"),
        ("q Esc", "Quit"),
    ];
    let content: Vec<Line> = keys
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", key),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, theme.text()),
            ])
        })
        .collect();

    widgets::render_popup(frame, "Keys", content, &[("Close", '?')], theme, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        let width = buffer.area.width as usize;
        let start = row as usize * width;
        buffer.content()[start..start + width]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn find_row(buffer: &Buffer, text: &str) -> Option<u16> {
        (0..buffer.area.height).find(|&row| row_text(buffer, row).contains(text))
    }

    fn count(buffer: &Buffer, text: &str) -> usize {
        (0..buffer.area.height)
            .map(|row| row_text(buffer, row).matches(text).count())
            .sum()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hero_and_controls() {
        let mut app = App::new(Config::default());
        let buffer = render_app(&mut app, 100, 40);
        assert!(find_row(&buffer, "TILE GROUPS").is_some());
        let controls = find_row(&buffer, "Tile density").expect("controls row");
        let text = row_text(&buffer, controls);
        assert!(text.contains(" compact "));
        assert!(text.contains(" roomy "));
        assert!(text.contains("[x] Show group outlines"));
    }

    #[test]
    fn test_default_board_shows_first_group() {
        let mut app = App::new(Config::default());
        let buffer = render_app(&mut app, 100, 40);
        assert!(find_row(&buffer, "ANALYTICS").is_some());
        assert!(find_row(&buffer, "Sales overview").is_some());
        assert!(find_row(&buffer, "[ Collapse ]").is_some());
        assert!(find_row(&buffer, "standard 150px/14px").is_some());
    }

    #[test]
    fn test_collapsed_group_hides_tiles() {
        let mut app = App::new(Config::default());
        app.state.toggle_group_collapsed("analytics");
        let buffer = render_app(&mut app, 100, 40);
        assert!(find_row(&buffer, "Charts, grids, pivots").is_none());
        assert!(find_row(&buffer, "[ Expand ]").is_some());
        // operations moves up into view
        assert!(find_row(&buffer, "Transport routes").is_some());
    }

    #[test]
    fn test_active_marker_follows_state() {
        let mut app = App::new(Config::default());
        let buffer = render_app(&mut app, 100, 40);
        assert_eq!(count(&buffer, "●"), 1);

        app.state.set_active_tile("no-such-tile");
        let buffer = render_app(&mut app, 100, 40);
        assert_eq!(count(&buffer, "●"), 0);
        assert!(find_row(&buffer, "active: no-such-tile").is_some());
    }

    #[test]
    fn test_outline_toggle_removes_borders() {
        let mut app = App::new(Config::default());
        let buffer = render_app(&mut app, 100, 40);
        assert!(count(&buffer, "╭") > 0);

        app.state.set_outlined(false);
        let buffer = render_app(&mut app, 100, 40);
        assert_eq!(count(&buffer, "╭"), 0);
        assert!(find_row(&buffer, "[ ] Show group outlines").is_some());
    }

    #[test]
    fn test_click_on_rendered_chip_and_tile() {
        let mut app = App::new(Config::default());
        render_app(&mut app, 100, 40);

        let (chip, _) = *app
            .hitboxes
            .iter()
            .find(|(_, t)| *t == Target::Density(Density::Roomy))
            .expect("roomy chip hitbox");
        app.handle_mouse(click(chip.x + 1, chip.y));
        assert_eq!(app.state.density(), Density::Roomy);

        render_app(&mut app, 100, 40);
        let (tile, _) = *app
            .hitboxes
            .iter()
            .find(|(_, t)| *t == Target::Tile("finance"))
            .expect("finance tile hitbox");
        app.handle_mouse(click(tile.x + 2, tile.y + 1));
        assert_eq!(app.state.active_tile_id(), Some("finance"));
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let mut app = App::new(Config::default());
        app.focus = Target::Tile("playground");
        app.follow_focus = true;
        let buffer = render_app(&mut app, 100, 30);
        assert!(app.scroll > 0);
        assert!(find_row(&buffer, "Tile playground").is_some());
        assert!(!app.follow_focus);
    }

    #[test]
    fn test_help_popup() {
        let mut app = App::new(Config::default());
        app.show_help = true;
        let buffer = render_app(&mut app, 100, 40);
        assert!(find_row(&buffer, "Cycle density").is_some());
    }

    #[test]
    fn test_flash_replaces_status_line() {
        let mut app = App::new(Config::default());
        app.activate(Target::Density(Density::Roomy));
        let buffer = render_app(&mut app, 100, 40);
        let row = find_row(&buffer, "✓ Density: roomy").expect("flash row");
        assert_eq!(row, 39);
        assert!(find_row(&buffer, "?:help").is_none());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(Config::default());
        app.state.set_density(Density::Roomy);
        render_app(&mut app, 20, 6);
        render_app(&mut app, 1, 1);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = App::new(Config::default());
        app.scroll = u16::MAX;
        render_app(&mut app, 100, 40);
        assert!(app.scroll < 200);
    }
}
