pub mod color_scheme_manager;
pub mod theme;
pub mod theme_context;

pub use color_scheme_manager::ColorSchemeManager;
pub use theme::{ColorScheme, ColorSchemeParseError, ResolvedColorScheme, Size, Theme};
pub use theme_context::{use_theme, ThemeContext};
