//! Reusable UI widgets for tileboard
//!
//! - Popup dialogs (help, errors)
//! - Status bar and flash messages
//! - Layout helpers

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog with optional key hints underneath
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    hints: &[(&str, char)],
    theme: &Theme,
    area: Rect,
) {
    let widest = content.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = (widest + 6).clamp(30, 64).min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let body = Rect {
        x: inner.x + 2,
        y: inner.y + 1,
        width: inner.width.saturating_sub(4),
        height: inner.height.saturating_sub(3),
    };
    frame.render_widget(
        Paragraph::new(content)
            .style(theme.text())
            .wrap(Wrap { trim: false }),
        body,
    );

    if hints.is_empty() || inner.height < 2 {
        return;
    }

    let hint_spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (label, key))| {
            let mut spans = vec![
                Span::styled("[", theme.text_dim()),
                Span::styled(
                    key.to_string(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled("] ", theme.text_dim()),
                Span::styled(*label, theme.text()),
            ];
            if i + 1 < hints.len() {
                spans.push(Span::raw("    "));
            }
            spans
        })
        .collect();

    let hint_area = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center),
        hint_area,
    );
}

pub fn render_error_popup(frame: &mut Frame, title: &str, message: &str, theme: &Theme, area: Rect) {
    let content = vec![Line::raw(""), Line::styled(message.to_string(), theme.error())];
    render_popup(frame, title, content, &[("Quit", 'q')], theme, area);
}

/// Render a confirmation message over the last row of `area`
pub fn render_flash_message(frame: &mut Frame, message: &str, theme: &Theme, area: Rect) {
    let style = theme.success();

    let flash_area = last_row(area);
    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(" ✓ ", style),
        Span::styled(message, style),
    ]))
    .style(theme.block_style());
    frame.render_widget(flash, flash_area);
}

/// Render status bar at the bottom of `area`: left text, right-aligned hints
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = last_row(area);
    frame.render_widget(Clear, status_area);
    frame.render_widget(
        Paragraph::new(format!(" {}", left_content)).style(theme.text_dim()),
        status_area,
    );

    let right_len = right_content.chars().count() as u16 + 1;
    let right_area = Rect {
        x: status_area.right().saturating_sub(right_len),
        width: right_len.min(status_area.width),
        ..status_area
    };
    frame.render_widget(
        Paragraph::new(right_content).style(theme.text_dim()),
        right_area,
    );
}

fn last_row(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    }
}

/// Helper: create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        // never larger than the area
        assert_eq!(centered_rect(100, 30, area), area);
    }

    #[test]
    fn test_last_row() {
        assert_eq!(last_row(Rect::new(2, 3, 10, 5)), Rect::new(2, 7, 10, 1));
    }
}
