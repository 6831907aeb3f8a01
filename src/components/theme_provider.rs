use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MediaQueryList};

use crate::components::strict_mode::check_unique_provider;
use crate::models::theme::COLOR_SCHEME_ATTRIBUTE;
use crate::models::{ColorScheme, ResolvedColorScheme, Theme, ThemeContext};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Supplies theme values and the color scheme to all descendants and keeps
/// the document root styled to match.
#[component]
pub fn ThemeProvider(
    /// Design tokens; `Theme::default()` when omitted
    #[prop(optional)]
    theme: Option<Theme>,
    /// Scheme used when no preference has been stored
    #[prop(optional)]
    default_color_scheme: Option<ColorScheme>,
    children: Children,
) -> impl IntoView {
    check_unique_provider::<ThemeContext>("ThemeProvider");

    let media = dark_scheme_query();
    let prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);

    let state = ThemeContext::new(
        theme.unwrap_or_default(),
        default_color_scheme.unwrap_or_default(),
        prefers_dark,
    );
    provide_context(state);

    if let Some(media) = media {
        watch_dark_preference(media, state);
    }

    // Restyle the document whenever the theme or the resolved scheme changes
    Effect::new(move |_| {
        let scheme = state.resolved_color_scheme();
        state.theme.with(|theme| apply_to_document(theme, scheme));
    });

    children()
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    let window = web_sys::window()?;
    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(media) => media,
        Err(e) => {
            tracing::warn!("matchMedia({DARK_SCHEME_QUERY}) failed: {e:?}");
            None
        }
    }
}

/// Track the user agent preference for the lifetime of the page.
fn watch_dark_preference(media: MediaQueryList, state: ThemeContext) {
    let source = media.clone();
    let on_change: Closure<dyn FnMut()> = Closure::new(move || {
        let matches = source.matches();
        tracing::debug!("prefers-color-scheme changed, dark = {matches}");
        state.prefers_dark.set(matches);
    });

    media.set_onchange(Some(on_change.as_ref().unchecked_ref()));
    // Keep the closure alive
    on_change.forget();
}

fn apply_to_document(theme: &Theme, scheme: ResolvedColorScheme) {
    let Some(root) = document_root() else {
        tracing::warn!("No document element to apply the theme to");
        return;
    };

    if let Err(e) = root.set_attribute(COLOR_SCHEME_ATTRIBUTE, scheme.as_str()) {
        tracing::warn!("Failed to set {COLOR_SCHEME_ATTRIBUTE}: {e:?}");
    }

    let style = root.style();
    if let Err(e) = style.set_property("color-scheme", scheme.as_str()) {
        tracing::warn!("Failed to set color-scheme: {e:?}");
    }
    for (name, value) in theme.css_variables(scheme) {
        if let Err(e) = style.set_property(&name, &value) {
            tracing::warn!("Failed to set {name}: {e:?}");
        }
    }

    tracing::debug!("Applied {} theme to document", scheme.as_str());
}

fn document_root() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}
