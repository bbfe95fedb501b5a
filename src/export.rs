//! Static HTML export of the board
//!
//! Produces the demo page markup for a view state: density custom
//! properties on the page wrapper, chip/group/tile class names and tile
//! gradients. No stylesheet is emitted.

use crate::catalog::{GROUPS, HERO_EYEBROW, HERO_LEDE, HERO_TITLE};
use crate::presentation::{
    chip_class_name, group_class_name, is_group_collapsed, is_tile_active, resolve_density_vars,
    tile_class_name, tile_gradient, toggle_label,
};
use crate::state::ViewState;
use crate::types::{Density, Group, Tile};
use anyhow::Result;
use std::fmt::Write;

/// Render the whole page for `state`
pub fn render_page(state: &ViewState) -> Result<String> {
    let mut out = String::new();

    let vars = resolve_density_vars(state.density())
        .css_vars()
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("; ");

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head><meta charset=\"utf-8\"><title>{}</title></head>", escape(HERO_EYEBROW))?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"page\" style=\"{}\">", vars)?;

    write_hero(&mut out, state)?;

    writeln!(out, "  <main class=\"board\">")?;
    for group in GROUPS {
        write_group(&mut out, group, state)?;
    }
    writeln!(out, "  </main>")?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn write_hero(out: &mut String, state: &ViewState) -> Result<()> {
    writeln!(out, "  <header class=\"hero\">")?;
    writeln!(out, "    <p class=\"eyebrow\">{}</p>", escape(HERO_EYEBROW))?;
    writeln!(out, "    <h1>{}</h1>", escape(HERO_TITLE))?;
    writeln!(out, "    <p class=\"lede\">{}</p>", escape(HERO_LEDE))?;
    writeln!(out, "    <div class=\"controls\">")?;
    writeln!(out, "      <label class=\"control\">")?;
    writeln!(out, "        <span>Tile density</span>")?;
    writeln!(out, "        <div class=\"chip-row\">")?;
    for &density in Density::all() {
        writeln!(
            out,
            "          <button class=\"{}\" type=\"button\">{}</button>",
            chip_class_name(density, state.density()),
            density
        )?;
    }
    writeln!(out, "        </div>")?;
    writeln!(out, "      </label>")?;
    writeln!(out, "      <label class=\"control inline\">")?;
    writeln!(
        out,
        "        <input type=\"checkbox\"{}>",
        if state.outlined() { " checked" } else { "" }
    )?;
    writeln!(out, "        <span>Show group outlines</span>")?;
    writeln!(out, "      </label>")?;
    writeln!(out, "    </div>")?;
    writeln!(out, "  </header>")?;
    Ok(())
}

fn write_group(out: &mut String, group: &Group, state: &ViewState) -> Result<()> {
    let collapsed = is_group_collapsed(group.id, state.collapsed_group_ids());

    writeln!(
        out,
        "    <section class=\"{}\" data-group=\"{}\">",
        group_class_name(state.outlined()),
        escape(group.id)
    )?;
    writeln!(out, "      <header class=\"group-header\">")?;
    writeln!(out, "        <div>")?;
    writeln!(
        out,
        "          <p class=\"group-eyebrow\" style=\"color: {}\">{}</p>",
        escape(group.accent),
        escape(group.title)
    )?;
    writeln!(
        out,
        "          <p class=\"group-description\">{}</p>",
        escape(group.description)
    )?;
    writeln!(out, "        </div>")?;
    writeln!(
        out,
        "        <button class=\"group-toggle\" type=\"button\">{}</button>",
        toggle_label(collapsed)
    )?;
    writeln!(out, "      </header>")?;

    if !collapsed {
        writeln!(out, "      <div class=\"tile-grid\">")?;
        for tile in group.tiles {
            write_tile(out, tile, state)?;
        }
        writeln!(out, "      </div>")?;
    }

    writeln!(out, "    </section>")?;
    Ok(())
}

fn write_tile(out: &mut String, tile: &Tile, state: &ViewState) -> Result<()> {
    let active = is_tile_active(tile.id, state.active_tile_id());

    writeln!(
        out,
        "        <button class=\"{}\" style=\"background: {}\" type=\"button\" data-tile=\"{}\">",
        tile_class_name(tile.size, active),
        tile_gradient(tile.theme.as_str()),
        escape(tile.id)
    )?;

    write!(out, "          <div class=\"tile-meta\">")?;
    if let Some(badge) = tile.badge {
        write!(out, "<span class=\"badge\">{}</span>", escape(badge))?;
    }
    if let Some(metric) = tile.metric {
        write!(out, "<span class=\"metric\">{}</span>", escape(metric))?;
    }
    writeln!(out, "</div>")?;

    writeln!(
        out,
        "          <div class=\"tile-body\"><p class=\"tile-title\">{}</p><p class=\"tile-subtitle\">{}</p></div>",
        escape(tile.title),
        escape(tile.subtitle)
    )?;
    writeln!(out, "        </button>")?;
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
