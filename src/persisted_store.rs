use folio_core::{initial_theme, persist_theme, PreferenceStorage, StorageError, ThemePreference};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// `window.localStorage` on the web. Other targets (native test runs) fall
/// back to a per-thread in-memory map.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalPreferences;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "unknown js error".to_string()
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStorage for LocalPreferences {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_string(),
                reason: js_err(err),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static MEMORY: folio_core::MemoryStorage = folio_core::MemoryStorage::new();
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStorage for LocalPreferences {
    fn read(&self, key: &str) -> Option<String> {
        MEMORY.with(|storage| storage.read(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        MEMORY.with(|storage| storage.write(key, value))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn clear_memory() {
    MEMORY.with(|storage| storage.clear());
}

pub(crate) fn load_theme() -> ThemePreference {
    initial_theme(&LocalPreferences)
}

/// Write failures are logged; the caller's state change stands.
pub(crate) fn save_theme(theme: ThemePreference) {
    if let Err(err) = persist_theme(&LocalPreferences, theme) {
        gloo::console::warn!("theme preference not saved", err.to_string());
    }
}
