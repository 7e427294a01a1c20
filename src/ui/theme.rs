//! Theme registry for the sidebar
//!
//! Each theme is a set of semantic tokens. A token does not carry a colour,
//! it names a colour variable (`--color-text-light-default`, ...). The
//! [`Palette`] owns the variable definitions: built-in defaults that user
//! settings may override.

use std::collections::{BTreeMap, HashMap};

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector, color};

// ============================================================================
// Theme names and tokens
// ============================================================================

/// The two sidebar themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// Seed from the `color` input: "dark" selects Dark, anything else Light
    pub fn from_color(color: Option<&str>) -> Self {
        match color {
            Some("dark") => ThemeName::Dark,
            _ => ThemeName::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeName::Dark
    }

    /// Token set for this theme
    pub fn tokens(self) -> &'static ThemeTokens<&'static str> {
        match self {
            ThemeName::Light => &LIGHT_TOKENS,
            ThemeName::Dark => &DARK_TOKENS,
        }
    }

    /// Matching built-in iced theme for everything outside the sidebar
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeName::Light => Theme::Light,
            ThemeName::Dark => Theme::Dark,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "light"),
            ThemeName::Dark => write!(f, "dark"),
        }
    }
}

/// Semantic colour slots used by the sidebar
///
/// Generic over the slot value so the same shape describes both the variable
/// names of a theme and their resolved colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens<T> {
    pub sidebar_bg: T,
    pub sidebar_bg_hover: T,
    pub sidebar_bg_active: T,
    pub text: T,
    pub text_hover: T,
    pub text_active: T,
    pub logo: T,
    pub button_bg: T,
    pub button_bg_active: T,
}

impl<T: Copy> ThemeTokens<T> {
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> ThemeTokens<U> {
        ThemeTokens {
            sidebar_bg: f(self.sidebar_bg),
            sidebar_bg_hover: f(self.sidebar_bg_hover),
            sidebar_bg_active: f(self.sidebar_bg_active),
            text: f(self.text),
            text_hover: f(self.text_hover),
            text_active: f(self.text_active),
            logo: f(self.logo),
            button_bg: f(self.button_bg),
            button_bg_active: f(self.button_bg_active),
        }
    }
}

/// Tokens resolved against a palette
pub type ResolvedTokens = ThemeTokens<Color>;

pub const LIGHT_TOKENS: ThemeTokens<&str> = ThemeTokens {
    sidebar_bg: "--color-sidebar-background-light-default",
    sidebar_bg_hover: "--color-sidebar-background-light-hover",
    sidebar_bg_active: "--color-sidebar-background-light-active",
    text: "--color-text-light-default",
    text_hover: "--color-text-light-hover",
    text_active: "--color-text-light-active",
    logo: "--color-text-logo-light-default",
    button_bg: "--color-button-background-light-default",
    button_bg_active: "--color-button-background-light-active",
};

pub const DARK_TOKENS: ThemeTokens<&str> = ThemeTokens {
    sidebar_bg: "--color-sidebar-background-dark-default",
    sidebar_bg_hover: "--color-sidebar-background-dark-hover",
    sidebar_bg_active: "--color-sidebar-background-dark-active",
    text: "--color-text-dark-default",
    text_hover: "--color-text-dark-hover",
    text_active: "--color-text-dark-active",
    logo: "--color-text-logo-dark-default",
    button_bg: "--color-button-background-dark-default",
    button_bg_active: "--color-button-background-dark-active",
};

// ============================================================================
// Palette - colour variable definitions
// ============================================================================

const BUILTIN_COLORS: [(&str, Color); 18] = [
    ("--color-sidebar-background-light-default", color!(0xffffff)),
    ("--color-sidebar-background-light-hover", color!(0xf1f3f5)),
    ("--color-sidebar-background-light-active", color!(0xe7f0ff)),
    ("--color-text-light-default", color!(0x5f6b7a)),
    ("--color-text-light-hover", color!(0x1f2933)),
    ("--color-text-light-active", color!(0x1a5fd0)),
    ("--color-text-logo-light-default", color!(0x1f2933)),
    ("--color-button-background-light-default", color!(0xf1f3f5)),
    ("--color-button-background-light-active", color!(0xdce3ea)),
    ("--color-sidebar-background-dark-default", color!(0x16181d)),
    ("--color-sidebar-background-dark-hover", color!(0x22262e)),
    ("--color-sidebar-background-dark-active", color!(0x1f2b3f)),
    ("--color-text-dark-default", color!(0x9aa4b2)),
    ("--color-text-dark-hover", color!(0xe6e9ee)),
    ("--color-text-dark-active", color!(0x6ea8ff)),
    ("--color-text-logo-dark-default", color!(0xf5f7fa)),
    ("--color-button-background-dark-default", color!(0x22262e)),
    ("--color-button-background-dark-active", color!(0x2e3440)),
];

/// Colour variable definitions
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<&'static str, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Palette {
    /// Built-in definitions for every variable the token sets reference
    pub fn builtin() -> Self {
        Self {
            colors: BUILTIN_COLORS.into_iter().collect(),
        }
    }

    /// Built-in definitions with user overrides applied
    ///
    /// Unknown variable names and unparsable colours are skipped.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut palette = Self::builtin();
        for (name, value) in overrides {
            let Some((&key, _)) = palette.colors.get_key_value(name.as_str()) else {
                tracing::warn!("Ignoring override for unknown colour variable {}", name);
                continue;
            };
            match value.parse::<Color>().ok() {
                Some(parsed) => {
                    tracing::debug!("Colour variable {} overridden with {}", name, value);
                    palette.colors.insert(key, parsed);
                }
                None => {
                    tracing::warn!("Ignoring unparsable colour {:?} for {}", value, name);
                }
            }
        }
        palette
    }

    /// Look up a variable; undefined variables render transparent
    pub fn color(&self, var: &str) -> Color {
        self.colors.get(var).copied().unwrap_or(Color::TRANSPARENT)
    }

    /// Resolve a theme's token set
    pub fn resolve(&self, theme: ThemeName) -> ResolvedTokens {
        theme.tokens().map(|var| self.color(var))
    }
}

// ============================================================================
// Colour helpers
// ============================================================================

/// Linear blend from `a` to `b`
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    Color {
        r: a.r * u + b.r * t,
        g: a.g * u + b.g * t,
        b: a.b * u + b.b * t,
        a: a.a * u + b.a * t,
    }
}

// ============================================================================
// Styles
// ============================================================================

/// Sidebar panel
pub fn sidebar(tokens: ResolvedTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(tokens.sidebar_bg)),
        text_color: Some(tokens.text),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.04),
            offset: Vector::new(2.0, 0.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Square toolbar button (toggle sidebar / toggle theme)
pub fn toolbar_button(
    tokens: ResolvedTokens,
    hover_progress: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Pressed => tokens.button_bg_active,
            _ => mix(tokens.button_bg, tokens.button_bg_active, 0.5 * hover_progress),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: tokens.text,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Navigation row
pub fn nav_item(
    tokens: ResolvedTokens,
    is_active: bool,
    hover_progress: f32,
    opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| {
        // Hover wins over the active highlight
        let resting = if is_active {
            tokens.sidebar_bg_active
        } else {
            tokens.sidebar_bg_hover.scale_alpha(0.0)
        };
        let background = mix(resting, tokens.sidebar_bg_hover, hover_progress);
        button::Style {
            background: Some(Background::Color(background.scale_alpha(opacity))),
            text_color: nav_foreground(&tokens, is_active, hover_progress).scale_alpha(opacity),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Icon and label colour of a navigation row
pub fn nav_foreground(tokens: &ResolvedTokens, is_active: bool, hover_progress: f32) -> Color {
    let resting = if is_active { tokens.text_active } else { tokens.text };
    mix(resting, tokens.text_hover, hover_progress)
}

/// Content pane next to the sidebar
pub fn content_pane(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_seed() {
        assert_eq!(ThemeName::from_color(Some("dark")), ThemeName::Dark);
        assert_eq!(ThemeName::from_color(Some("light")), ThemeName::Light);
        assert_eq!(ThemeName::from_color(None), ThemeName::Light);
        assert_eq!(ThemeName::from_color(Some("DARK")), ThemeName::Light);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for theme in [ThemeName::Light, ThemeName::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn every_token_has_a_builtin_definition() {
        let palette = Palette::builtin();
        for theme in [ThemeName::Light, ThemeName::Dark] {
            let tokens = theme.tokens();
            for var in [
                tokens.sidebar_bg,
                tokens.sidebar_bg_hover,
                tokens.sidebar_bg_active,
                tokens.text,
                tokens.text_hover,
                tokens.text_active,
                tokens.logo,
                tokens.button_bg,
                tokens.button_bg_active,
            ] {
                assert!(palette.colors.contains_key(var), "{var} undefined");
            }
        }
    }

    #[test]
    fn themes_reference_their_own_variables() {
        assert!(LIGHT_TOKENS.text.contains("-light-"));
        assert!(DARK_TOKENS.text.contains("-dark-"));
        let light = Palette::builtin().resolve(ThemeName::Light);
        let dark = Palette::builtin().resolve(ThemeName::Dark);
        assert_ne!(light.sidebar_bg, dark.sidebar_bg);
    }

    #[test]
    fn overrides_replace_known_variables_only() {
        let mut overrides = BTreeMap::new();
        overrides.insert("--color-text-light-default".to_string(), "#ff0000".to_string());
        overrides.insert("--color-unknown".to_string(), "#00ff00".to_string());
        overrides.insert("--color-text-dark-default".to_string(), "red-ish".to_string());

        let palette = Palette::with_overrides(&overrides);
        assert_eq!(palette.color("--color-text-light-default"), color!(0xff0000));
        assert_eq!(palette.color("--color-unknown"), Color::TRANSPARENT);
        assert_eq!(palette.color("--color-text-dark-default"), color!(0x9aa4b2));
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 2.0), b);
    }

    #[test]
    fn active_row_uses_active_text() {
        let tokens = Palette::builtin().resolve(ThemeName::Dark);
        assert_eq!(nav_foreground(&tokens, true, 0.0), tokens.text_active);
        assert_eq!(nav_foreground(&tokens, false, 0.0), tokens.text);
        assert_eq!(nav_foreground(&tokens, false, 1.0), tokens.text_hover);
        assert_eq!(nav_foreground(&tokens, true, 1.0), tokens.text_hover);
    }

    #[test]
    fn hovered_active_row_takes_hover_background() {
        let tokens = Palette::builtin().resolve(ThemeName::Light);
        let theme = ThemeName::Light.iced_theme();

        let resting = nav_item(tokens, true, 0.0, 1.0)(&theme, button::Status::Active);
        assert_eq!(
            resting.background,
            Some(Background::Color(tokens.sidebar_bg_active))
        );

        let hovered = nav_item(tokens, true, 1.0, 1.0)(&theme, button::Status::Hovered);
        assert_eq!(
            hovered.background,
            Some(Background::Color(tokens.sidebar_bg_hover))
        );
        assert_eq!(hovered.text_color, tokens.text_hover);
    }
}
