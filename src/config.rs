use serde::Deserialize;
use thiserror::Error;
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::bootstrap::MOUNT_ELEMENT_ID;
use crate::models::ColorScheme;

/// Id of the optional `<script type="application/json">` element holding
/// runtime configuration.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("#app-config is not valid JSON: {0}")]
    Parse(String),
    #[error("#app-config has unexpected contents: {0}")]
    Deserialize(String),
    #[error("unknown log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

/// Runtime settings. Every field has a default so the host page may omit
/// any of them, or the whole config element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Id of the element the application is rendered into
    pub mount_element_id: String,
    pub log_level: String,
    /// Scheme used until the user picks one
    pub default_color_scheme: ColorScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_element_id: MOUNT_ELEMENT_ID.to_string(),
            log_level: "info".to_string(),
            default_color_scheme: ColorScheme::default(),
        }
    }
}

impl Config {
    /// Read the config element from the host document; defaults when absent.
    pub fn from_document(document: &Document) -> Result<Self, ConfigError> {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };

        let text = element.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let value =
            js_sys::JSON::parse(&text).map_err(|e| ConfigError::Parse(js_error_message(&e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Parsed `log_level`. Checked separately from loading so an unknown
    /// level never discards the rest of the config.
    pub fn max_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

fn js_error_message(error: &JsValue) -> String {
    js_sys::Error::from(error.clone())
        .message()
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mount_element_id, "root");
        assert_eq!(config.default_color_scheme, ColorScheme::Light);
        assert_eq!(config.max_level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_log_levels() {
        for (input, expected) in [
            ("trace", Level::TRACE),
            ("DEBUG", Level::DEBUG),
            (" warn ", Level::WARN),
            ("error", Level::ERROR),
        ] {
            let config = Config {
                log_level: input.to_string(),
                ..Config::default()
            };
            assert_eq!(config.max_level().unwrap(), expected, "level {input:?}");
        }
    }

    #[test]
    fn test_invalid_log_level() {
        let config = Config {
            log_level: "verbose".to_string(),
            ..Config::default()
        };
        let err = config.max_level().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "verbose"));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_error_messages_name_the_element() {
        let err = ConfigError::Parse("Unexpected token".to_string());
        assert_eq!(err.to_string(), "#app-config is not valid JSON: Unexpected token");
    }
}
