use leptos::prelude::*;

use crate::models::{ColorScheme, ColorSchemeManager, ResolvedColorScheme, Theme};

/// Reactive theme state shared with every descendant via `use_context()`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Active design tokens
    pub theme: RwSignal<Theme>,
    /// Scheme chosen by the user (may be `Auto`)
    pub color_scheme: RwSignal<ColorScheme>,
    /// Whether the user agent currently prefers a dark scheme
    pub prefers_dark: RwSignal<bool>,
    default_color_scheme: ColorScheme,
    manager: ColorSchemeManager,
}

impl ThemeContext {
    /// Create theme state, restoring a persisted scheme when one exists.
    pub fn new(theme: Theme, default_color_scheme: ColorScheme, prefers_dark: bool) -> Self {
        let manager = ColorSchemeManager::new();
        let initial = manager.get().unwrap_or(default_color_scheme);

        Self {
            theme: RwSignal::new(theme),
            color_scheme: RwSignal::new(initial),
            prefers_dark: RwSignal::new(prefers_dark),
            default_color_scheme,
            manager,
        }
    }

    /// Scheme actually applied to the document.
    pub fn resolved_color_scheme(&self) -> ResolvedColorScheme {
        self.color_scheme.get().resolve(self.prefers_dark.get())
    }

    /// Change the scheme and remember it across page loads.
    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        self.color_scheme.set(scheme);
        self.manager.set(scheme);
    }

    /// Flip between light and dark starting from what is currently shown.
    pub fn toggle_color_scheme(&self) {
        let next = self.resolved_color_scheme().inverse();
        self.set_color_scheme(next.into());
    }

    /// Forget the stored preference and fall back to the provider default.
    pub fn clear_color_scheme(&self) {
        self.manager.clear();
        self.color_scheme.set(self.default_color_scheme);
    }
}

/// Access the nearest theme provider's state.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext missing: wrap the tree in <ThemeProvider>")
}
