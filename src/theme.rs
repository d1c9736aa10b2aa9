//! Application-wide theme system
//!
//! Semantic colors for every UI element, with built-in dark and light
//! presets selectable from config.

use ratatui::style::Color;

/// Complete application theme defining all UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: String,
    pub description: String,

    // Title bar
    pub title_bar_background: Color,
    pub title_bar_text: Color,
    pub back_hint: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // List rows
    pub cursor_background: Color,
    pub cursor_text: Color,
    pub selected_marker: Color,
    pub price: Color,

    // Status line
    pub status_background: Color,
    pub status_text: Color,

    // Checkout
    pub total_emphasis: Color,

    // Key hints
    pub key_hint: Color,
    pub key_hint_disabled: Color,
}

impl AppTheme {
    /// Resolve a theme by its config name, falling back to dark
    pub fn by_name(name: &str) -> AppTheme {
        match name {
            "dark" => ThemePresets::dark(),
            "light" => ThemePresets::light(),
            other => {
                tracing::warn!(
                    "Unknown theme '{}', falling back to dark (valid: {})",
                    other,
                    ThemePresets::names().join(", ")
                );
                ThemePresets::dark()
            }
        }
    }
}

/// Built-in theme presets
pub struct ThemePresets;

impl ThemePresets {
    /// Names accepted by [`AppTheme::by_name`]
    pub fn names() -> Vec<&'static str> {
        vec!["dark", "light"]
    }

    /// Default dark theme
    pub fn dark() -> AppTheme {
        AppTheme {
            name: "Dark".to_string(),
            description: "Classic dark theme with cyan accents".to_string(),

            // Title bar
            title_bar_background: Color::Rgb(20, 40, 60),
            title_bar_text: Color::White,
            back_hint: Color::Cyan,

            // Text
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_disabled: Color::DarkGray,

            // List rows
            cursor_background: Color::Rgb(74, 74, 74),
            cursor_text: Color::Yellow,
            selected_marker: Color::Green,
            price: Color::Cyan,

            // Status line
            status_background: Color::Rgb(20, 20, 20),
            status_text: Color::Gray,

            // Checkout
            total_emphasis: Color::Rgb(255, 215, 0), // Gold

            // Key hints
            key_hint: Color::Cyan,
            key_hint_disabled: Color::DarkGray,
        }
    }

    /// Light theme for daytime use
    pub fn light() -> AppTheme {
        AppTheme {
            name: "Light".to_string(),
            description: "Bright light theme for daytime use".to_string(),

            // Title bar
            title_bar_background: Color::Rgb(205, 225, 245),
            title_bar_text: Color::Black,
            back_hint: Color::Blue,

            // Text
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            text_disabled: Color::Gray,

            // List rows
            cursor_background: Color::Rgb(215, 215, 215),
            cursor_text: Color::Blue,
            selected_marker: Color::Rgb(0, 128, 0), // Dark green
            price: Color::Blue,

            // Status line
            status_background: Color::Rgb(235, 235, 235),
            status_text: Color::DarkGray,

            // Checkout
            total_emphasis: Color::Rgb(178, 104, 0), // Dark orange

            // Key hints
            key_hint: Color::Blue,
            key_hint_disabled: Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_resolves_builtins() {
        assert_eq!(AppTheme::by_name("dark").name, "Dark");
        assert_eq!(AppTheme::by_name("light").name, "Light");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let theme = AppTheme::by_name("synthwave");
        assert_eq!(theme.name, "Dark");
    }

    #[test]
    fn test_presets_cover_all_names() {
        for name in ThemePresets::names() {
            assert_eq!(
                AppTheme::by_name(name).name.to_lowercase(),
                name.to_lowercase()
            );
        }
    }
}
