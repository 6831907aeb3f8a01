//! Browser client bootstrap: mounts the application, wrapped in strict-mode
//! checks, the router and the theme provider, into the host page.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod logging;
pub mod models;

pub use app::{App, Root};
pub use bootstrap::{start, BootstrapError, MOUNT_ELEMENT_ID};
pub use config::Config;
