use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Route `tracing` events to the browser console.
///
/// Does nothing if a global subscriber is already installed.
///
/// # Errors
/// Returns an error if the subscriber fails to install.
pub fn setup_logging(max_level: Level) -> Result<(), Box<dyn std::error::Error>> {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("Global subscriber already installed; keeping it");
        return Ok(());
    }

    let console_layer = WASMLayer::new(
        WASMLayerConfigBuilder::default()
            .set_max_level(max_level)
            .build(),
    );

    tracing_subscriber::registry()
        .with(console_layer)
        .with(LevelFilter::from_level(max_level))
        .try_init()?;

    tracing::info!("Logging initialized to browser console (max level {max_level})");

    Ok(())
}
