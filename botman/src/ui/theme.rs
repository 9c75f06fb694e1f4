//! Shared UI palette.

use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(37, 99, 235);
pub const PRIMARY_LIGHT: Color = Color::Rgb(59, 130, 246);
pub const ACCENT: Color = Color::Rgb(129, 140, 248);

// Pie slices: used, available
pub const SLICE_USED: Color = Color::Rgb(59, 130, 246);
pub const SLICE_AVAILABLE: Color = Color::Rgb(147, 197, 253);

pub const ONLINE: Color = Color::Rgb(34, 197, 94);
pub const ERROR: Color = Color::Rgb(220, 38, 38);
pub const MUTED: Color = Color::Rgb(148, 163, 184);
