use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x0d, 0x94, 0x88);
pub const ACCENT_DIM: Color = Color::Rgb(0x0f, 0x76, 0x6e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const TEXT_DIMMED: Color = Color::Rgb(0x73, 0x73, 0x73);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
