use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Prefix shared by every CSS custom property the theme writes.
pub const CSS_VARIABLE_PREFIX: &str = "--app";

/// Attribute set on the document root with the resolved color scheme.
pub const COLOR_SCHEME_ATTRIBUTE: &str = "data-color-scheme";

/// User-selectable color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    /// Follow the user agent's `prefers-color-scheme`
    Auto,
}

/// Color scheme after `Auto` has been resolved against the media preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedColorScheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme {0:?} (expected light, dark or auto)")]
pub struct ColorSchemeParseError(pub String);

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolve `Auto` using whether the user agent prefers a dark scheme.
    pub const fn resolve(self, prefers_dark: bool) -> ResolvedColorScheme {
        match self {
            Self::Light => ResolvedColorScheme::Light,
            Self::Dark => ResolvedColorScheme::Dark,
            Self::Auto => {
                if prefers_dark {
                    ResolvedColorScheme::Dark
                } else {
                    ResolvedColorScheme::Light
                }
            }
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ColorSchemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            _ => Err(ColorSchemeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolvedColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite scheme, used by the toggle button.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<ResolvedColorScheme> for ColorScheme {
    fn from(resolved: ResolvedColorScheme) -> Self {
        match resolved {
            ResolvedColorScheme::Light => Self::Light,
            ResolvedColorScheme::Dark => Self::Dark,
        }
    }
}

/// Named step of the spacing and radius scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Xs => 0,
            Self::Sm => 1,
            Self::Md => 2,
            Self::Lg => 3,
            Self::Xl => 4,
        }
    }
}

const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, Arial, sans-serif";
const FONT_FAMILY_MONOSPACE: &str =
    "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace";

/// Visual design tokens shared by every component through the theme context.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary_color: String,
    pub white: String,
    pub black: String,
    pub font_family: String,
    pub font_family_monospace: String,
    pub font_size: String,
    pub line_height: String,
    pub default_radius: Size,
    /// Spacing scale in `Size` order (xs..xl)
    pub spacing: [String; 5],
    /// Radius scale in `Size` order (xs..xl)
    pub radius: [String; 5],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#228be6".to_string(),
            white: "#ffffff".to_string(),
            black: "#000000".to_string(),
            font_family: FONT_FAMILY.to_string(),
            font_family_monospace: FONT_FAMILY_MONOSPACE.to_string(),
            font_size: "1rem".to_string(),
            line_height: "1.55".to_string(),
            default_radius: Size::Sm,
            spacing: ["0.625rem", "0.75rem", "1rem", "1.25rem", "2rem"].map(String::from),
            radius: ["0.125rem", "0.25rem", "0.5rem", "1rem", "2rem"].map(String::from),
        }
    }
}

impl Theme {
    pub fn spacing(&self, size: Size) -> &str {
        &self.spacing[size.index()]
    }

    pub fn radius(&self, size: Size) -> &str {
        &self.radius[size.index()]
    }

    /// Body background for the given scheme.
    pub fn body_color(&self, scheme: ResolvedColorScheme) -> &str {
        match scheme {
            ResolvedColorScheme::Light => &self.white,
            ResolvedColorScheme::Dark => "#242424",
        }
    }

    /// Default text color for the given scheme.
    pub fn text_color(&self, scheme: ResolvedColorScheme) -> &str {
        match scheme {
            ResolvedColorScheme::Light => &self.black,
            ResolvedColorScheme::Dark => "#c9c9c9",
        }
    }

    /// All CSS custom properties for this theme as `(name, value)` pairs.
    pub fn css_variables(&self, scheme: ResolvedColorScheme) -> Vec<(String, String)> {
        let var = |name: &str| format!("{CSS_VARIABLE_PREFIX}-{name}");

        let mut vars = vec![
            (var("color-primary"), self.primary_color.clone()),
            (var("color-white"), self.white.clone()),
            (var("color-black"), self.black.clone()),
            (var("color-body"), self.body_color(scheme).to_string()),
            (var("color-text"), self.text_color(scheme).to_string()),
            (var("font-family"), self.font_family.clone()),
            (var("font-family-monospace"), self.font_family_monospace.clone()),
            (var("font-size"), self.font_size.clone()),
            (var("line-height"), self.line_height.clone()),
        ];

        for size in Size::ALL {
            let name = var(&format!("spacing-{}", size.as_str()));
            vars.push((name, self.spacing(size).to_string()));
        }
        for size in Size::ALL {
            let name = var(&format!("radius-{}", size.as_str()));
            vars.push((name, self.radius(size).to_string()));
        }
        vars.push((var("radius-default"), self.radius(self.default_radius).to_string()));

        vars
    }
}
