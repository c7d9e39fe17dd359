use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted choice wins, then the OS preference, then light.
    pub fn resolve(stored: Option<Theme>, os_prefers_dark: Option<bool>) -> Self {
        match (stored, os_prefers_dark) {
            (Some(theme), _) => theme,
            (None, Some(true)) => Theme::Dark,
            (None, Some(false) | None) => Theme::default(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Where the theme preference is persisted.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// In-memory store, standing in for local storage off the browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.value.as_deref().and_then(|s| s.parse().ok())
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme.to_string());
    }
}

/// Owns the active theme and keeps the store in sync with it.
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Resolve the initial theme. Nothing is written until the user toggles.
    pub fn init(store: S, os_prefers_dark: Option<bool>) -> Self {
        let theme = Theme::resolve(store.load(), os_prefers_dark);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Inline script for the document head: applies the resolved theme class
/// before first paint so there is no flash of the wrong theme.
pub fn boot_script() -> String {
    format!(
        "(function(){{try{{var t=localStorage.getItem('{key}');\
if(t!=='light'&&t!=='dark'){{t=window.matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light';}}\
document.documentElement.classList.add(t);}}catch(e){{document.documentElement.classList.add('{fallback}');}}}})();",
        key = THEME_KEY,
        fallback = Theme::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(Theme::resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ParseThemeError("sepia".to_string()))
        );
    }

    #[test]
    fn test_toggle_persists_and_remount_reads_back() {
        let controller = ThemeController::init(MemoryStore::default(), Some(true));
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.store.raw(), None);

        let mut controller = controller;
        assert_eq!(controller.toggle(), Theme::Light);
        let store = controller.into_store();
        assert_eq!(store.raw(), Some("light"));

        let remounted = ThemeController::init(store, Some(true));
        assert_eq!(remounted.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_in_store_falls_back() {
        let store = MemoryStore {
            value: Some("purple".to_string()),
        };
        assert_eq!(ThemeController::init(store, Some(true)).theme(), Theme::Dark);
    }

    #[test]
    fn test_boot_script_mentions_key() {
        let script = boot_script();
        assert!(script.contains("localStorage.getItem('theme')"));
        assert!(script.contains("prefers-color-scheme: dark"));
        assert!(script.contains("classList.add('light')"));
    }
}
