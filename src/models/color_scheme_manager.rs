use web_sys::Storage;

use crate::models::ColorScheme;

/// localStorage key holding the user's color scheme choice.
pub const COLOR_SCHEME_STORAGE_KEY: &str = "app-color-scheme";

/// Persists the color scheme preference in `localStorage`.
///
/// Storage failures are logged and otherwise ignored: a missing or broken
/// preference must never prevent the application from rendering.
#[derive(Debug, Clone, Copy)]
pub struct ColorSchemeManager {
    key: &'static str,
}

impl ColorSchemeManager {
    pub const fn new() -> Self {
        Self {
            key: COLOR_SCHEME_STORAGE_KEY,
        }
    }

    /// Read the stored preference, if any.
    pub fn get(&self) -> Option<ColorScheme> {
        let storage = local_storage()?;

        match storage.get_item(self.key) {
            Ok(Some(value)) => match value.parse::<ColorScheme>() {
                Ok(scheme) => Some(scheme),
                Err(e) => {
                    tracing::warn!("Ignoring stored color scheme: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read {} from localStorage: {e:?}", self.key);
                None
            }
        }
    }

    pub fn set(&self, scheme: ColorScheme) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(self.key, scheme.as_str()) {
                tracing::warn!("Failed to store {} in localStorage: {e:?}", self.key);
            }
        }
    }

    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(self.key) {
                tracing::warn!("Failed to remove {} from localStorage: {e:?}", self.key);
            }
        }
    }
}

impl Default for ColorSchemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}
