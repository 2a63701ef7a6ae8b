//! Pitch/gold theme tokens for the Squad Builder TUI
//!
//! # Color Palette
//! - **Background**: Deep pitch green-black
//! - **Accent**: Electric cyan (focus, highlights)
//! - **Gold**: Card gold (team card text, ratings)
//! - **Positive**: Neon green (high attributes, success)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (alerts)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (hints, disabled)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(14, 22, 18);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const GOLD: Color = Color::Rgb(233, 204, 116);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Highlight for the focused control / card under the cursor.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Color for a 0–100 attribute value.
pub fn attribute_color(value: u8) -> Color {
    match value {
        v if v >= 85 => POSITIVE,
        v if v >= 75 => ACCENT,
        v if v >= 60 => NEUTRAL,
        _ => WARNING,
    }
}
