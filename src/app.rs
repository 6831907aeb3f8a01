use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::{ColorSchemeToggle, Home, NotFound, StrictMode, ThemeProvider};
use crate::models::{use_theme, ColorScheme};

/// Provider tree mounted by the bootstrap:
/// strict mode → router → theme → application.
#[component]
pub fn Root(
    /// Scheme used until the user picks one
    #[prop(optional)]
    default_color_scheme: Option<ColorScheme>,
) -> impl IntoView {
    view! {
        <StrictMode>
            <Router>
                <ThemeProvider default_color_scheme=default_color_scheme.unwrap_or_default()>
                    <App />
                </ThemeProvider>
            </Router>
        </StrictMode>
    }
}

/// Top-level application component. Needs the router and theme contexts.
#[component]
pub fn App() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="app-shell" data-color-scheme=move || theme.resolved_color_scheme().as_str()>
            <header class="app-header">
                <span class="app-brand">
                    <A href="/">"Frontend"</A>
                </span>
                <ColorSchemeToggle />
            </header>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                </Routes>
            </main>
        </div>
    }
}
