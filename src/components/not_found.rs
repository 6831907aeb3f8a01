use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Fallback for any route the application does not know.
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>
                "Nothing lives at "
                <code>{move || location.pathname.get()}</code>
            </p>
            <A href="/">"Back home"</A>
        </section>
    }
}
