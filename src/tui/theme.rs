use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub done: Color,
    pub current: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x0C, 0x08),
            text: Color::Rgb(0xC8, 0xB8, 0x98),
            text_bright: Color::Rgb(0xFF, 0xF4, 0xDC),
            dim: Color::Rgb(0x7A, 0x6E, 0x5A),
            highlight: Color::Rgb(0xFF, 0x98, 0x1F),
            green: Color::Rgb(0x3C, 0xC8, 0x5A),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            red: Color::Rgb(0xE6, 0x3C, 0x3C),
            selection_bg: Color::Rgb(0x3A, 0x2C, 0x14),
            done: Color::Rgb(0x5A, 0x8C, 0x5A),
            current: Color::Rgb(0x58, 0xB0, 0xE0),
        }
    }
}

impl Theme {
    /// Build the theme, applying hex overrides from config
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        apply_override(&ui.colors, "background", &mut theme.background);
        apply_override(&ui.colors, "text", &mut theme.text);
        apply_override(&ui.colors, "text_bright", &mut theme.text_bright);
        apply_override(&ui.colors, "dim", &mut theme.dim);
        apply_override(&ui.colors, "highlight", &mut theme.highlight);
        apply_override(&ui.colors, "green", &mut theme.green);
        apply_override(&ui.colors, "yellow", &mut theme.yellow);
        apply_override(&ui.colors, "red", &mut theme.red);
        apply_override(&ui.colors, "selection_bg", &mut theme.selection_bg);
        apply_override(&ui.colors, "done", &mut theme.done);
        apply_override(&ui.colors, "current", &mut theme.current);
        theme
    }
}

fn apply_override(colors: &HashMap<String, String>, key: &str, slot: &mut Color) {
    if let Some(hex) = colors.get(key)
        && let Some(color) = parse_hex_color(hex)
    {
        *slot = color;
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
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
