//! Color definitions for the terminal UI

use ratatui::style::Color;

// Brand colours
pub const PRIMARY: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const PRIMARY_MUTED: Color = Color::Rgb(0x81, 0x8c, 0xf8);
pub const ACCENT: Color = Color::Rgb(0x93, 0x33, 0xea);
pub const ACCENT_MUTED: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const DESTRUCTIVE: Color = Color::Rgb(0xef, 0x44, 0x44);

// Text
pub const TEXT: Color = Color::Rgb(230, 230, 235);
pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 150);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 100);

// Surfaces
pub const BORDER: Color = Color::Rgb(70, 70, 85);
pub const TRACK: Color = Color::Rgb(55, 55, 65);
pub const SELECTED_BG: Color = Color::Rgb(40, 40, 55);
