//! Theme system for TUI colors and styles
//!
//! Colors match the CLI table output in `display`.

use iocraft::prelude::Color;

use crate::console::{HealthStatus, NoticeLevel};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Record state colors
    pub completed: Color,
    pub open: Color,
    pub orphan: Color,

    // Health badge colors
    pub health_checking: Color,
    pub health_online: Color,
    pub health_offline: Color,

    // Notice colors
    pub notice_info: Color,
    pub notice_success: Color,
    pub notice_error: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub search_match: Color,
    pub id_color: Color,
    pub label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let grey = Color::Rgb {
            r: 120,
            g: 120,
            b: 120,
        };

        Self {
            completed: Color::Green,
            open: Color::Yellow,
            orphan: Color::Magenta,

            health_checking: grey,
            health_online: Color::Green,
            health_offline: Color::Red,

            notice_info: Color::Cyan,
            notice_success: Color::Green,
            notice_error: Color::Red,

            border: grey,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: grey,
            highlight: Color::Blue,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
            label: Color::Cyan,
        }
    }
}

impl Theme {
    /// Color for a pallet's completed flag
    pub fn completion_color(&self, completed: bool) -> Color {
        if completed { self.completed } else { self.open }
    }

    /// Color for the API health badge
    pub fn health_color(&self, health: HealthStatus) -> Color {
        match health {
            HealthStatus::Checking => self.health_checking,
            HealthStatus::Online => self.health_online,
            HealthStatus::Offline => self.health_offline,
        }
    }

    pub fn notice_color(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Info => self.notice_info,
            NoticeLevel::Success => self.notice_success,
            NoticeLevel::Error => self.notice_error,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
