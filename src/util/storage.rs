//! Thin `localStorage` access.
//!
//! `localStorage` can be unavailable (server render, privacy modes,
//! storage quota errors), so every failure collapses to "no value" and
//! writes are best-effort. Callers treat persistence as advisory.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read a string value from `localStorage`.
///
/// Returns `None` when storage is unavailable or the key is unset.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a string value to `localStorage`, ignoring failures.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
