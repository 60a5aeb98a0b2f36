//! Colour palette for the TUI
//!
//! Two palettes are available (dark and light), selected by the `theme`
//! setting. Category colours come from the category table and are the same
//! in both palettes.

use ratatui::style::{Color, Modifier, Style};

use crate::config::settings::ThemeName;
use crate::models::{Category, TransactionType};

/// Resolved colours for one palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub attention: Color,
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(0x56, 0x36, 0xD3),
            secondary: Color::Rgb(0xFF, 0x87, 0x2C),
            success: Color::Rgb(0x12, 0xA4, 0x54),
            attention: Color::Rgb(0xE8, 0x3F, 0x5B),
            title: Color::White,
            text: Color::Gray,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            highlight_bg: Color::Rgb(0x26, 0x19, 0x5C),
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(0x56, 0x36, 0xD3),
            secondary: Color::Rgb(0xFF, 0x87, 0x2C),
            success: Color::Rgb(0x12, 0xA4, 0x54),
            attention: Color::Rgb(0xE8, 0x3F, 0x5B),
            title: Color::Rgb(0x36, 0x3F, 0x5F),
            text: Color::Rgb(0x96, 0x9C, 0xB2),
            muted: Color::Gray,
            border: Color::Gray,
            highlight_bg: Color::Rgb(0xF0, 0xF2, 0xF5),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Style for a header or block title
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Border style, brighter when the block has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Colour used for amounts of the given type
    pub fn amount_color(&self, kind: TransactionType) -> Color {
        match kind {
            TransactionType::Positive => self.success,
            TransactionType::Negative => self.attention,
        }
    }

    /// Colour for a category key, falling back to the text colour
    pub fn category_color(&self, key: &str) -> Color {
        match Category::find(key) {
            Some(category) => {
                let (r, g, b) = category.rgb();
                Color::Rgb(r, g, b)
            }
            None => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
