use leptos::prelude::*;

use crate::models::use_theme;

/// Landing page shown at `/`.
#[component]
pub fn Home() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="home">
            <h1>"Welcome"</h1>
            <p class="text-secondary">
                "Current color scheme: "
                <span class="home-scheme">{move || theme.resolved_color_scheme().as_str()}</span>
            </p>
        </section>
    }
}
