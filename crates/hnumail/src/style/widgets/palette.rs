//! Color palette with light and dark theme support.

use std::sync::{LazyLock, RwLock};

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Brand color for primary actions.
    pub primary: Color,
    /// Hover shade of the brand color.
    pub primary_light: Color,
    /// Pressed shade of the brand color.
    pub primary_dark: Color,

    /// Cards and panels.
    pub surface: Color,
    /// Raised surfaces such as inputs.
    pub surface_elevated: Color,
    /// Recessed surfaces such as the drawer.
    pub surface_sunken: Color,
    /// Window background.
    pub background: Color,

    /// Body text.
    pub text_primary: Color,
    /// Secondary labels.
    pub text_secondary: Color,
    /// Hints and placeholders.
    pub text_muted: Color,
    /// Text drawn on the brand color.
    pub text_on_primary: Color,

    /// Success messages.
    pub accent_green: Color,
    /// Warnings.
    pub accent_yellow: Color,
    /// Errors and destructive actions.
    pub accent_red: Color,

    /// Selected item background.
    pub selected: Color,
    /// Hovered item background.
    pub hover: Color,
    /// Unread marker.
    pub unread: Color,

    /// Hairline borders.
    pub border_subtle: Color,
    /// Input and card borders.
    pub border_medium: Color,

    /// Soft shadow.
    pub shadow: Color,
    /// Stronger shadow for raised elements.
    pub shadow_medium: Color,
}

impl Palette {
    /// Light palette with the university crimson as brand color.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.72, 0.11, 0.16),
            primary_light: Color::from_rgb(0.84, 0.22, 0.26),
            primary_dark: Color::from_rgb(0.56, 0.07, 0.11),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(0.99, 0.99, 0.99),
            surface_sunken: Color::from_rgb(0.96, 0.95, 0.95),
            background: Color::from_rgb(0.975, 0.97, 0.97),

            text_primary: Color::from_rgb(0.11, 0.10, 0.11),
            text_secondary: Color::from_rgb(0.40, 0.38, 0.40),
            text_muted: Color::from_rgb(0.60, 0.58, 0.60),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.13, 0.60, 0.33),
            accent_yellow: Color::from_rgb(0.90, 0.65, 0.05),
            accent_red: Color::from_rgb(0.85, 0.18, 0.20),

            selected: Color::from_rgb(0.99, 0.92, 0.92),
            hover: Color::from_rgb(0.97, 0.95, 0.95),
            unread: Color::from_rgb(0.72, 0.11, 0.16),

            border_subtle: Color::from_rgb(0.91, 0.89, 0.89),
            border_medium: Color::from_rgb(0.83, 0.81, 0.81),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.10),
        }
    }

    /// Dark palette with a muted rose brand color.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.95, 0.42, 0.45),
            primary_light: Color::from_rgb(1.0, 0.55, 0.57),
            primary_dark: Color::from_rgb(0.78, 0.30, 0.34),

            surface: Color::from_rgb(0.13, 0.12, 0.13),
            surface_elevated: Color::from_rgb(0.17, 0.16, 0.17),
            surface_sunken: Color::from_rgb(0.10, 0.09, 0.10),
            background: Color::from_rgb(0.08, 0.075, 0.08),

            text_primary: Color::from_rgb(0.93, 0.92, 0.92),
            text_secondary: Color::from_rgb(0.68, 0.66, 0.67),
            text_muted: Color::from_rgb(0.50, 0.48, 0.49),
            text_on_primary: Color::from_rgb(0.10, 0.07, 0.08),

            accent_green: Color::from_rgb(0.35, 0.85, 0.55),
            accent_yellow: Color::from_rgb(1.0, 0.82, 0.30),
            accent_red: Color::from_rgb(1.0, 0.42, 0.42),

            selected: Color::from_rgb(0.24, 0.14, 0.15),
            hover: Color::from_rgb(0.18, 0.17, 0.18),
            unread: Color::from_rgb(0.95, 0.42, 0.45),

            border_subtle: Color::from_rgb(0.22, 0.21, 0.22),
            border_medium: Color::from_rgb(0.30, 0.29, 0.30),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Palette used by every style function.
static CURRENT: LazyLock<RwLock<Palette>> = LazyLock::new(|| RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
