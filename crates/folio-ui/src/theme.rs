//! Color palettes for the light and dark themes.

use folio_core::ThemePreference;
use iced::Color;

/// Resolved colors for the active theme. Everything the view layer needs
/// is derived from the `ThemePreference` through this one struct.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_hover: Color,
    pub nav_solid: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub border: Color,
    pub success: Color,
    pub destructive: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        background: Color::from_rgb(0.08, 0.08, 0.10),
        surface: Color::from_rgb(0.12, 0.12, 0.15),
        surface_hover: Color::from_rgb(0.17, 0.17, 0.20),
        nav_solid: Color::from_rgb(0.10, 0.10, 0.13),
        text_primary: Color::from_rgb(0.93, 0.93, 0.93),
        text_secondary: Color::from_rgb(0.65, 0.65, 0.68),
        text_muted: Color::from_rgb(0.45, 0.45, 0.48),
        accent: Color::from_rgb(0.36, 0.54, 0.90),
        accent_soft: Color::from_rgba(0.36, 0.54, 0.90, 0.15),
        border: Color::from_rgb(0.25, 0.25, 0.28),
        success: Color::from_rgb(0.30, 0.70, 0.40),
        destructive: Color::from_rgb(0.85, 0.30, 0.30),
    };

    pub const LIGHT: Self = Self {
        background: Color::from_rgb(0.99, 0.99, 1.0),
        surface: Color::from_rgb(0.96, 0.96, 0.97),
        surface_hover: Color::from_rgb(0.92, 0.92, 0.94),
        nav_solid: Color::from_rgb(0.97, 0.97, 0.99),
        text_primary: Color::from_rgb(0.10, 0.10, 0.12),
        text_secondary: Color::from_rgb(0.32, 0.32, 0.36),
        text_muted: Color::from_rgb(0.52, 0.52, 0.55),
        accent: Color::from_rgb(0.20, 0.40, 0.80),
        accent_soft: Color::from_rgba(0.20, 0.40, 0.80, 0.12),
        border: Color::from_rgb(0.85, 0.85, 0.87),
        success: Color::from_rgb(0.15, 0.55, 0.30),
        destructive: Color::from_rgb(0.75, 0.18, 0.18),
    };

    pub fn of(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::DARK,
            ThemePreference::Light => Self::LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_preference() {
        assert_eq!(
            Palette::of(ThemePreference::Dark).background.r,
            Palette::DARK.background.r
        );
        assert_eq!(
            Palette::of(ThemePreference::Light).background.r,
            Palette::LIGHT.background.r
        );
    }
}
