use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the dashboard. Built once from config and
/// passed into the render functions; nothing reads colors from global
/// state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub epic: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xCC, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            highlight: Color::Rgb(0xE8, 0xA8, 0x3C),
            epic: Color::Rgb(0xB8, 0x7C, 0xE8),
            red: Color::Rgb(0xE8, 0x5C, 0x5C),
            yellow: Color::Rgb(0xE8, 0xC8, 0x4C),
            green: Color::Rgb(0x58, 0xC8, 0x7C),
            cyan: Color::Rgb(0x4C, 0xC8, 0xD8),
            selection_bg: Color::Rgb(0x2C, 0x34, 0x44),
        }
    }
}

/// Parse a hex color string like "#E8A83C" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui.colors]` config table, falling back
    /// to defaults for anything unset or unparseable.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "epic" => theme.epic = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }
        theme
    }

    /// Badge color for an issue status.
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "open" | "ready" => self.green,
            "in_progress" => self.cyan,
            "blocked" => self.red,
            "closed" => self.dim,
            _ => self.text,
        }
    }
}
