//! Color theme system
//!
//! Provides built-in presets (classic, dark) selected by config name.

use ratatui::style::Color;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel colors
    pub panel_border_active: Color,
    pub panel_border_inactive: Color,
    pub panel_title: Color,

    // Candidate list colors
    pub remote_normal: Color,
    pub remote_selected: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,

    // Listing colors
    pub entry_file: Color,
    pub entry_dir: Color,
    pub loading: Color,
    pub failed: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,
    pub ready_bg: Color,
    pub ready_fg: Color,
    pub hint: Color,
}

impl Theme {
    /// Classic blue-panel look
    pub fn classic() -> Self {
        Self {
            panel_border_active: Color::Cyan,
            panel_border_inactive: Color::DarkGray,
            panel_title: Color::Yellow,
            remote_normal: Color::White,
            remote_selected: Color::LightGreen,
            cursor_bg: Color::Cyan,
            cursor_fg: Color::Black,
            entry_file: Color::Gray,
            entry_dir: Color::LightBlue,
            loading: Color::Yellow,
            failed: Color::LightRed,
            status_bg: Color::Blue,
            status_fg: Color::White,
            ready_bg: Color::Green,
            ready_fg: Color::Black,
            hint: Color::Gray,
        }
    }

    /// Muted dark preset
    pub fn dark() -> Self {
        Self {
            panel_border_active: Color::LightBlue,
            panel_border_inactive: Color::DarkGray,
            panel_title: Color::White,
            remote_normal: Color::Gray,
            remote_selected: Color::LightCyan,
            cursor_bg: Color::DarkGray,
            cursor_fg: Color::White,
            entry_file: Color::DarkGray,
            entry_dir: Color::Blue,
            loading: Color::LightYellow,
            failed: Color::Red,
            status_bg: Color::Black,
            status_fg: Color::Gray,
            ready_bg: Color::LightGreen,
            ready_fg: Color::Black,
            hint: Color::DarkGray,
        }
    }

    /// Look up a preset by name, falling back to classic.
    pub fn preset(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::classic(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
