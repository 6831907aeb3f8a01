//! Browser tests for mounting the application into the host document.
//!
//! Run with `wasm-pack test --headless --firefox` (or chrome). Every test
//! mounts into its own element so the leaked trees do not interfere.
#![cfg(target_arch = "wasm32")]

use frontend::bootstrap::{
    current_document, find_mount_element, start, BootstrapError, MOUNTED_ATTRIBUTE,
};
use frontend::config::Config;
use frontend::MOUNT_ELEMENT_ID;
use frontend::models::ColorSchemeManager;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Append an empty `<div id=…>` to the body
fn create_mount_point(id: &str) -> HtmlElement {
    let document = current_document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    document.body().unwrap().append_child(&div).unwrap();
    div.dyn_into().unwrap()
}

fn config_for(id: &str) -> Config {
    Config {
        mount_element_id: id.to_string(),
        ..Config::default()
    }
}

/// Let pending effects run
async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn count_class(element: &Element, class: &str) -> u32 {
    element.get_elements_by_class_name(class).length()
}

// an empty <div id="root"> ends up holding the application markup
#[wasm_bindgen_test]
fn test_start_renders_into_default_root() {
    let root = create_mount_point(MOUNT_ELEMENT_ID);

    start(&Config::default()).expect("bootstrap should succeed");

    assert!(root.has_child_nodes(), "mount element should not be empty");
    assert_eq!(count_class(&root, "app-shell"), 1);
    assert_eq!(count_class(&root, "app-header"), 1);
    assert_eq!(count_class(&root, "app-main"), 1);
    assert_eq!(root.get_attribute(MOUNTED_ATTRIBUTE).as_deref(), Some("true"));
}

// exactly one tree per element
#[wasm_bindgen_test]
fn test_second_start_is_refused() {
    let root = create_mount_point("mount-twice");
    let config = config_for("mount-twice");

    start(&config).unwrap();
    let second = start(&config);

    assert_eq!(
        second,
        Err(BootstrapError::AlreadyMounted {
            id: "mount-twice".to_string()
        })
    );
    assert_eq!(count_class(&root, "app-shell"), 1);
}

// a missing element fails fast and renders nothing
#[wasm_bindgen_test]
fn test_missing_mount_element_fails() {
    let document = current_document().unwrap();
    let body = document.body().unwrap();
    let before = count_class(&body, "app-shell");

    let result = start(&config_for("no-such-element"));

    assert_eq!(
        result,
        Err(BootstrapError::MountElementMissing {
            id: "no-such-element".to_string()
        })
    );
    assert_eq!(count_class(&body, "app-shell"), before);
}

#[wasm_bindgen_test]
fn test_non_html_mount_element_is_rejected() {
    let document = current_document().unwrap();
    let svg = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_id("svg-mount");
    document.body().unwrap().append_child(&svg).unwrap();

    assert_eq!(
        find_mount_element(&document, "svg-mount").unwrap_err(),
        BootstrapError::MountElementNotHtml {
            id: "svg-mount".to_string()
        }
    );
    assert!(!svg.has_child_nodes());
}

#[wasm_bindgen_test]
fn test_placeholder_content_is_replaced() {
    let root = create_mount_point("with-placeholder");
    root.set_inner_html("<p class=\"loading\">Loading…</p>");

    start(&config_for("with-placeholder")).unwrap();

    assert_eq!(count_class(&root, "loading"), 0);
    assert_eq!(count_class(&root, "app-shell"), 1);
}

// the application reads both the router and the theme context
#[wasm_bindgen_test]
fn test_app_is_wrapped_in_router_and_theme() {
    let root = create_mount_point("provider-tree");

    start(&config_for("provider-tree")).unwrap();

    let shells = root.get_elements_by_class_name("app-shell");
    assert_eq!(shells.length(), 1);
    let shell = shells.item(0).unwrap();

    // Set from the theme context
    let scheme = shell.get_attribute("data-color-scheme");
    assert!(matches!(scheme.as_deref(), Some("light" | "dark")), "got {scheme:?}");

    // <A> only renders inside a router
    let brand = root.get_elements_by_class_name("app-brand").item(0).unwrap();
    assert_eq!(brand.get_elements_by_tag_name("a").length(), 1);

    // Routes picked either the home page or the fallback
    let main = root.get_elements_by_class_name("app-main").item(0).unwrap();
    assert_eq!(count_class(&main, "home") + count_class(&main, "not-found"), 1);
}

#[wasm_bindgen_test]
async fn test_header_toggle_flips_app_shell_scheme() {
    ColorSchemeManager::new().clear();
    let root = create_mount_point("toggle-tree");

    start(&config_for("toggle-tree")).unwrap();

    let shell = root.get_elements_by_class_name("app-shell").item(0).unwrap();
    assert_eq!(shell.get_attribute("data-color-scheme").as_deref(), Some("light"));

    let toggle: HtmlElement = root
        .get_elements_by_class_name("color-scheme-toggle")
        .item(0)
        .unwrap()
        .dyn_into()
        .unwrap();
    toggle.click();
    next_tick().await;

    assert_eq!(shell.get_attribute("data-color-scheme").as_deref(), Some("dark"));

    toggle.click();
    next_tick().await;

    assert_eq!(shell.get_attribute("data-color-scheme").as_deref(), Some("light"));
    ColorSchemeManager::new().clear();
}
