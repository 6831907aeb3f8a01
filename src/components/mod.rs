pub mod color_scheme_toggle;
pub mod home;
pub mod not_found;
pub mod strict_mode;
pub mod theme_provider;

pub use color_scheme_toggle::ColorSchemeToggle;
pub use home::Home;
pub use not_found::NotFound;
pub use strict_mode::{StrictChecks, StrictMode};
pub use theme_provider::ThemeProvider;
