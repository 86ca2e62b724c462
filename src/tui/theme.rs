//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across all sections and
//! chrome. The active theme is runtime switchable and persisted through
//! preferences.

use ratatui::prelude::*;
use std::sync::RwLock;

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub highlight: Color,

    // Content colors
    pub heading: Color,
    pub subtitle: Color,
    pub link: Color,

    // Badge colors (skill chips, back-to-top)
    pub badge_fg: Color,
    pub badge_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::Yellow,

            heading: Color::White,
            subtitle: Color::Gray,
            link: Color::LightBlue,

            badge_fg: Color::White,
            badge_bg: Color::Rgb(55, 65, 81),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            highlight: Color::Rgb(180, 140, 0),

            heading: Color::Rgb(20, 20, 20),
            subtitle: Color::Rgb(100, 100, 100),
            link: Color::Rgb(0, 0, 200),

            badge_fg: Color::Rgb(30, 30, 30),
            badge_bg: Color::Rgb(220, 220, 230),
        }
    }

    /// High contrast theme (accessibility)
    pub fn high_contrast() -> Self {
        Self {
            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            background: Color::Black,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::LightYellow,

            heading: Color::White,
            subtitle: Color::White,
            link: Color::LightCyan,

            badge_fg: Color::Black,
            badge_bg: Color::White,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub fn dark() -> Self {
        Self::dark_const()
    }

    pub fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Page/section heading style
    pub fn heading() -> Style {
        Style::default().fg(colors().heading).bold()
    }

    /// Hero name style
    pub fn hero_name() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Rotating subtitle style
    pub fn subtitle() -> Style {
        Style::default().fg(colors().subtitle).italic()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// External link style
    pub fn link() -> Style {
        Style::default().fg(colors().link).underlined()
    }

    /// Active nav entry style
    pub fn nav_active() -> Style {
        Style::default().fg(colors().primary).bold().underlined()
    }

    /// Inactive nav entry style
    pub fn nav_inactive() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a skill badge with consistent styling
pub fn skill_badge(label: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {label} "),
        Style::default().fg(scheme.badge_fg).bg(scheme.badge_bg),
    )
}

/// Render the back-to-top badge
pub fn back_to_top_badge() -> Span<'static> {
    let scheme = colors();
    Span::styled(
        " ↑ top ",
        Style::default().fg(scheme.badge_fg).bg(scheme.badge_bg).bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Global key hints shown in the footer
pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1-5", "section"),
        ("Tab", "next"),
        ("↑↓/jk", "scroll"),
        ("t", "top"),
        ("T", "theme"),
        ("?", "help"),
        ("q", "quit"),
    ]
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{}]", key), Styles::shortcut_key()));
        spans.push(Span::styled(desc.to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("hc").name, "high-contrast");
        assert_eq!(Theme::from_name("sepia").name, "dark");
    }

    #[test]
    fn rotation_visits_all_themes() {
        let mut theme = Theme::dark();
        let mut names = vec![theme.name];
        for _ in 0..2 {
            theme = theme.next();
            names.push(theme.name);
        }
        assert_eq!(names, ["dark", "light", "high-contrast"]);
        assert_eq!(theme.next().name, "dark");
    }
}
