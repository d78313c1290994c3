//! Per-request view state: the visitor's theme and which overlays are open.
//!
//! Built once from the preference store when a request comes in and handed to
//! every page template. Theme changes go through [`ViewState::set_theme`],
//! which writes through to the store.

use std::collections::HashMap;

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

pub const THEME_KEY: &str = "theme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Preferences kept in the visitor's cookies.
#[derive(Debug, Clone, Default)]
pub struct CookieStore(CookieJar);

impl CookieStore {
    pub fn new(jar: CookieJar) -> Self {
        Self(jar)
    }

    pub fn into_jar(self) -> CookieJar {
        self.0
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).map(|c| c.value().to_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .permanent();

        self.0 = self.0.clone().add(cookie);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    Menu,
    Catalog,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    theme: Theme,
    overlays: Vec<Overlay>,
}

impl ViewState {
    /// Unknown stored values fall back to the default theme.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            theme,
            overlays: vec![],
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, store: &mut impl PreferenceStore, theme: Theme) {
        self.theme = theme;
        store.set(THEME_KEY, theme.as_ref());
    }

    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> Theme {
        let theme = self.theme.toggled();
        self.set_theme(store, theme);

        theme
    }

    pub fn open_overlay(&mut self, overlay: Overlay) {
        if !self.overlays.contains(&overlay) {
            self.overlays.push(overlay);
        }
    }

    pub fn close_overlay(&mut self, overlay: Overlay) {
        self.overlays.retain(|o| *o != overlay);
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.overlays.contains(&overlay)
    }

    /// Page scrolling is locked while any overlay is open.
    pub fn scroll_locked(&self) -> bool {
        !self.overlays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_store() {
        let mut store = MemoryStore::default();
        assert_eq!(ViewState::load(&store).theme(), Theme::Light);

        store.set(THEME_KEY, "dark");
        assert_eq!(ViewState::load(&store).theme(), Theme::Dark);

        store.set(THEME_KEY, "sepia");
        assert_eq!(ViewState::load(&store).theme(), Theme::Light);
    }

    #[test]
    fn test_set_theme_writes_through() {
        let mut store = MemoryStore::default();
        let mut state = ViewState::load(&store);

        assert_eq!(state.toggle_theme(&mut store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        state.set_theme(&mut store, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_overlays_lock_scroll() {
        let mut state = ViewState::default();
        assert!(!state.scroll_locked());

        state.open_overlay(Overlay::Menu);
        state.open_overlay(Overlay::Catalog);
        state.open_overlay(Overlay::Menu);
        assert!(state.scroll_locked());

        state.close_overlay(Overlay::Menu);
        assert!(state.scroll_locked());
        assert!(state.is_open(Overlay::Catalog));

        state.close_overlay(Overlay::Catalog);
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_cookie_store() {
        let mut store = CookieStore::default();
        store.set(THEME_KEY, "dark");

        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        let jar = store.into_jar();
        let cookie = jar.get(THEME_KEY).unwrap();
        assert_eq!(cookie.path(), Some("/"));
    }
}
