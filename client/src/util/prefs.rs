//! Browser localStorage persistence for local-only preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Notification toggles on the settings page are presentation-only and
//! never leave the browser, so they persist in `localStorage` rather
//! than the profile store.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
const PREFS_STORAGE_KEY: &str = "wordsmith_notification_prefs";

/// Email notification preferences from the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    /// Account activity notifications.
    pub account: bool,
    /// Marketing emails.
    pub marketing: bool,
    /// Product update announcements.
    pub updates: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self { account: true, marketing: false, updates: true }
    }
}

/// Load notification preferences, falling back to defaults.
#[must_use]
pub fn load_notification_prefs() -> NotificationPrefs {
    #[cfg(feature = "csr")]
    {
        load_json(PREFS_STORAGE_KEY).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        NotificationPrefs::default()
    }
}

/// Persist notification preferences.
pub fn save_notification_prefs(prefs: &NotificationPrefs) {
    #[cfg(feature = "csr")]
    {
        save_json(PREFS_STORAGE_KEY, prefs);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prefs;
    }
}

/// Load a JSON value from `localStorage` for `key`.
#[allow(dead_code)]
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
#[allow(dead_code)]
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
