//! The two style pairs of the dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Header and body styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub header: Style,
    pub body: Style,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            body: Style::default().fg(Color::Black).bg(Color::White),
        }
    }
}

impl ColorTheme {
    /// Attribute-only theme for terminals without color.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            body: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// [`ColorTheme::monochrome`] when `NO_COLOR` is set, the default otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }

    /// Get the style for the header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    /// Get the style for attribute lines.
    #[must_use]
    pub fn body_style(&self) -> Style {
        self.body
    }
}
