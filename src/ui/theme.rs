//! Chrome palettes and color helpers for tileboard
//!
//! The palette colors the frame around the board (hero, headers, status
//! bar). Tile backgrounds come from the tile theme table instead and are
//! converted here from hex into terminal colors.

use crate::config::ThemeName;
use crate::presentation::ThemeColors;
use ratatui::style::{Color, Modifier, Style};

/// Foreground used for text painted on top of tile gradients
pub const TILE_TEXT: Color = Color::Rgb(248, 250, 252);

/// Chrome palette
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Internal flag for transparent mode
    is_transparent: bool,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Catppuccin => Self::catppuccin(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark (default)
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            fg: Color::Rgb(235, 219, 178),
            fg_dim: Color::Rgb(146, 131, 116),
            accent: Color::Rgb(254, 128, 25),
            accent_dim: Color::Rgb(214, 93, 14),
            success: Color::Rgb(184, 187, 38),
            error: Color::Rgb(251, 73, 52),
            border: Color::Rgb(80, 73, 69),
            border_focused: Color::Rgb(168, 153, 132),
            selection_bg: Color::Rgb(80, 73, 69),
            selection_fg: Color::Rgb(235, 219, 178),
            is_transparent: false,
        }
    }

    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            fg_dim: Color::Rgb(76, 86, 106),
            accent: Color::Rgb(136, 192, 208),
            accent_dim: Color::Rgb(94, 129, 172),
            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),
            border: Color::Rgb(59, 66, 82),
            border_focused: Color::Rgb(136, 192, 208),
            selection_bg: Color::Rgb(76, 86, 106),
            selection_fg: Color::Rgb(236, 239, 244),
            is_transparent: false,
        }
    }

    /// Catppuccin Mocha
    pub fn catppuccin() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            fg_dim: Color::Rgb(108, 112, 134),
            accent: Color::Rgb(137, 180, 250),     // blue
            accent_dim: Color::Rgb(116, 199, 236), // sapphire
            success: Color::Rgb(166, 227, 161),    // green
            error: Color::Rgb(243, 139, 168),      // red
            border: Color::Rgb(69, 71, 90),        // surface1
            border_focused: Color::Rgb(137, 180, 250),
            selection_bg: Color::Rgb(69, 71, 90),
            selection_fg: Color::Rgb(205, 214, 244),
            is_transparent: false,
        }
    }

    /// Uses the terminal's own colors
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::Gray,
            accent: Color::Cyan,
            accent_dim: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::Reset,
            selection_fg: Color::White,
            is_transparent: true,
        }
    }

    // === STYLE HELPERS ===

    fn on_bg(&self, style: Style) -> Style {
        if self.is_transparent {
            style
        } else {
            style.bg(self.bg)
        }
    }

    pub fn block_style(&self) -> Style {
        self.on_bg(Style::default())
    }

    pub fn text(&self) -> Style {
        self.on_bg(Style::default().fg(self.fg))
    }

    pub fn text_dim(&self) -> Style {
        self.on_bg(Style::default().fg(self.fg_dim))
    }

    pub fn title(&self) -> Style {
        self.on_bg(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
    }

    pub fn border(&self) -> Style {
        self.on_bg(Style::default().fg(self.border))
    }

    pub fn border_focused(&self) -> Style {
        self.on_bg(Style::default().fg(self.border_focused))
    }

    pub fn success(&self) -> Style {
        self.on_bg(Style::default().fg(self.success))
    }

    pub fn error(&self) -> Style {
        self.on_bg(Style::default().fg(self.error))
    }

    /// Selected chip / focused button
    pub fn selected(&self) -> Style {
        let style = Style::default()
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD);
        if self.is_transparent {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style.bg(self.selection_bg)
        }
    }
}

/// Convert "#rrggbb" into a terminal color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Color at position `step` of `steps` along a tile gradient
pub fn gradient_at(colors: ThemeColors, step: u16, steps: u16) -> Color {
    let (Some(Color::Rgb(r1, g1, b1)), Some(Color::Rgb(r2, g2, b2))) =
        (hex_to_color(colors.from), hex_to_color(colors.to))
    else {
        return Color::Reset;
    };
    if steps <= 1 {
        return Color::Rgb(r1, g1, b1);
    }

    let t = f32::from(step.min(steps - 1)) / f32::from(steps - 1);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}
