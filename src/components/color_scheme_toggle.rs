use leptos::prelude::*;

use crate::models::{use_theme, ResolvedColorScheme};

/// Header button switching between light and dark.
#[component]
pub fn ColorSchemeToggle() -> impl IntoView {
    let theme = use_theme();

    let label = move || match theme.resolved_color_scheme() {
        ResolvedColorScheme::Light => "Switch to dark mode",
        ResolvedColorScheme::Dark => "Switch to light mode",
    };

    view! {
        <button
            type="button"
            class="color-scheme-toggle"
            title=label
            aria-label=label
            on:click=move |_| theme.toggle_color_scheme()
        >
            {move || match theme.resolved_color_scheme() {
                ResolvedColorScheme::Light => "☾",
                ResolvedColorScheme::Dark => "☀",
            }}
        </button>
    }
}
