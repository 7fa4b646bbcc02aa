//! Colors and the shared style registry.

pub mod adapter;
mod styles;

pub use styles::{StyleName, StyleSheet, StyleSpec};

use ratatui::style::{Color, Style};
use std::str::FromStr;

/// Base palette derived from the accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#007AFF")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    Color::Blue
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..=i].repeat(2));
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#007AFF"), Color::Rgb(0, 122, 255));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#12"), Color::Blue);
        assert_eq!(parse_color("Invalid"), Color::Blue);
    }

    #[test]
    fn test_default_accent() {
        assert_eq!(Theme::default().accent, Color::Rgb(0, 122, 255));
    }
}
