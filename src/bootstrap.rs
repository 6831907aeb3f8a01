use leptos::mount::mount_to;
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::app::Root;
use crate::config::Config;

/// Id of the element the host page provides for the application.
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Marker set on the mount element once the application is rendered into it.
pub const MOUNTED_ATTRIBUTE: &str = "data-app-mounted";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount element #{id} not found in document")]
    MountElementMissing { id: String },
    #[error("mount element #{id} is not an HTML element")]
    MountElementNotHtml { id: String },
    #[error("application already mounted into #{id}")]
    AlreadyMounted { id: String },
}

/// The live document of the current window.
pub fn current_document() -> Result<Document, BootstrapError> {
    web_sys::window()
        .ok_or(BootstrapError::NoWindow)?
        .document()
        .ok_or(BootstrapError::NoDocument)
}

/// Look up the mount element by id.
pub fn find_mount_element(document: &Document, id: &str) -> Result<HtmlElement, BootstrapError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BootstrapError::MountElementMissing { id: id.to_string() })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootstrapError::MountElementNotHtml { id: id.to_string() })
}

/// Render the provider-wrapped application into the configured mount element.
///
/// The tree lives for the rest of the page; it is never unmounted. Mounting
/// twice into the same element is refused.
pub fn start(config: &Config) -> Result<(), BootstrapError> {
    let id = config.mount_element_id.as_str();
    let document = current_document()?;
    let root = find_mount_element(&document, id)?;

    if root.has_attribute(MOUNTED_ATTRIBUTE) {
        return Err(BootstrapError::AlreadyMounted { id: id.to_string() });
    }

    if root.has_child_nodes() {
        if cfg!(debug_assertions) {
            tracing::warn!("#{id} is not empty; its contents will be replaced");
        }
        root.replace_children_with_node_0();
    }

    let default_color_scheme = config.default_color_scheme;
    mount_to(root.clone(), move || {
        view! { <Root default_color_scheme=default_color_scheme /> }
    })
    .forget();

    if let Err(e) = root.set_attribute(MOUNTED_ATTRIBUTE, "true") {
        tracing::warn!("Failed to mark #{id} as mounted: {e:?}");
    }

    tracing::info!("Application mounted into #{id}");
    Ok(())
}
