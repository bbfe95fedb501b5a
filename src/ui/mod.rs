//! User Interface layer for tileboard
//!
//! - Chrome palettes and color helpers
//! - Board geometry (sections, tile rects)
//! - Reusable widgets
//! - Main render function

pub mod board;
pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
