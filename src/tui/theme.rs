//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) and applies the matching
//! neon-on-steel palette.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders and titles
    pub primary: Color,
    /// Accent color for highlights and the active dot
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Warning/glitch state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for faint log lines and help text
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for panels and overlays
    pub surface: Color,

    /// Inactive element color (idle dots, idle gauges)
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a theme from the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark steel palette: indigo chrome with a neon pink accent.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(98, 114, 195),
            accent: Color::Rgb(255, 75, 129),
            success: Color::Green,
            warning: Color::Yellow,

            text: Color::Rgb(220, 223, 240),
            text_muted: Color::Rgb(110, 118, 160),

            background: Color::Rgb(10, 12, 24),
            surface: Color::Rgb(24, 27, 46),

            inactive: Color::Rgb(62, 71, 115),
        }
    }

    /// Light palette with darker chrome for visibility.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(52, 64, 128),
            accent: Color::Rgb(190, 30, 85),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(240, 241, 248),

            inactive: Color::Rgb(180, 184, 210),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_contrast() {
        let theme = Theme::dark();
        assert_ne!(theme.text, theme.background);
        assert_ne!(theme.accent, theme.inactive);
    }

    #[test]
    fn test_light_theme_contrast() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
