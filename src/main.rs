use frontend::bootstrap::{self, current_document};
use frontend::config::Config;
use frontend::logging::setup_logging;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = current_document().map(|document| Config::from_document(&document));
    let (config, config_error) = match loaded {
        Ok(Ok(config)) => (config, None),
        Ok(Err(e)) => (Config::default(), Some(e)),
        // No document: bootstrap below reports it
        Err(_) => (Config::default(), None),
    };

    let (max_level, level_error) = match config.max_level() {
        Ok(level) => (level, None),
        Err(e) => (tracing::Level::INFO, Some(e)),
    };
    if let Err(e) = setup_logging(max_level) {
        web_sys::console::warn_1(&format!("Warning: Failed to setup logging: {e}").into());
    }

    if let Some(e) = config_error {
        tracing::warn!("Invalid configuration, using defaults: {e}");
    }
    if let Some(e) = level_error {
        tracing::warn!("{e}; logging at info level");
    }

    tracing::info!("Starting application");

    if let Err(e) = bootstrap::start(&config) {
        tracing::error!("Bootstrap failed: {e}");
        wasm_bindgen::throw_str(&e.to_string());
    }
}
