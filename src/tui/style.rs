//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::fmt::UsageLevel;
use crate::model::DomainState;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Accents
    pub const PRIMARY: Color = Color::Rgb(0x7C, 0x3A, 0xED);
    pub const SECONDARY: Color = Color::Rgb(0x06, 0xB6, 0xD4);

    // Status colors
    pub const SUCCESS: Color = Color::Rgb(0x10, 0xB9, 0x81);
    pub const WARNING: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
    pub const DANGER: Color = Color::Rgb(0xEF, 0x44, 0x44);
    pub const INFO: Color = Color::Rgb(0x3B, 0x82, 0xF6);

    // Neutrals
    pub const TEXT: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
    pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
    pub const BORDER: Color = Color::Rgb(0x4B, 0x55, 0x63);
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::TEXT)
    }

    /// Title band of the detail pane.
    pub fn title() -> Style {
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style ("Memory", "CPU", ...).
    pub fn section_header() -> Style {
        Style::default()
            .fg(Theme::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::TEXT_MUTED)
    }

    /// Error text style.
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::DANGER)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected VM in the sidebar.
    pub fn selected() -> Style {
        Style::default()
            .fg(Theme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Box borders.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Shut-off placeholder.
    pub fn offline_message() -> Style {
        Style::default()
            .fg(Theme::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    /// "Terminal too small" notice.
    pub fn warning() -> Style {
        Style::default().fg(Theme::WARNING)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::TEXT_MUTED)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Foreground for a usage level; normal usage keeps the default text color.
    pub fn usage_text(level: UsageLevel) -> Style {
        match level {
            UsageLevel::Normal => Self::default(),
            UsageLevel::Warning => Style::default().fg(Theme::WARNING),
            UsageLevel::Critical => Self::error(),
        }
    }

    /// Filled part of a usage bar.
    pub fn bar_filled(level: UsageLevel) -> Style {
        let color = match level {
            UsageLevel::Normal => Theme::SUCCESS,
            UsageLevel::Warning => Theme::WARNING,
            UsageLevel::Critical => Theme::DANGER,
        };
        Style::default().fg(color)
    }

    /// Empty part of a usage bar.
    pub fn bar_empty() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// vCPU state column.
    pub fn vcpu_state(online: bool) -> Style {
        if online {
            Style::default().fg(Theme::SUCCESS)
        } else {
            Self::dim()
        }
    }
}

/// Display attributes of a domain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    pub icon: &'static str,
    pub text: &'static str,
    pub color: Color,
}

impl StateInfo {
    pub fn style(&self) -> Style {
        Style::default().fg(self.color)
    }
}

/// Icon, label and color for `state`. Icons are single-width glyphs.
pub fn state_info(state: DomainState) -> StateInfo {
    let (icon, text, color) = match state {
        DomainState::Running => ("●", "Running", Theme::SUCCESS),
        DomainState::Idle => ("◌", "Idle", Theme::INFO),
        DomainState::Paused => ("‖", "Paused", Theme::WARNING),
        DomainState::Shutdown => ("▼", "Shutdown", Theme::WARNING),
        DomainState::Shutoff => ("○", "Shutoff", Theme::DANGER),
        DomainState::Crashed => ("✖", "Crashed", Theme::DANGER),
        DomainState::PmSuspended => ("◒", "Suspended", Theme::INFO),
        DomainState::NoState | DomainState::Other(_) => ("?", "Unknown", Theme::TEXT_MUTED),
    };
    StateInfo { icon, text, color }
}
