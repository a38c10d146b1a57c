//! Light/dark theme preference.
//!
//! `ThemeStore` keeps the persisted preference, the document surface and an
//! optional decorative scene in step: every write goes to all three.

use crate::constants::{PARTICLE_OPACITY, SHAPE_OPACITY, THEME_STORAGE_KEY};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class shown for this theme; the other one must be absent.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
        }
    }

    pub fn particle_opacity(self) -> f32 {
        PARTICLE_OPACITY[self.index()]
    }

    pub fn shape_opacity(self) -> f32 {
        SHAPE_OPACITY[self.index()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preference store unavailable: {0}")]
pub struct StoreError(pub String);

/// Key-value persistence for the preference (browser local storage).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Where the theme is visible: document attribute plus toggle icon.
pub trait ThemeSurface {
    fn applied(&self) -> Option<Theme>;
    fn apply(&self, theme: Theme);
}

/// A decorative layer that repaints on theme change. Opacity/colour only.
pub trait Recolor {
    fn recolor(&self, theme: Theme);
}

pub struct ThemeStore<S, D> {
    store: S,
    surface: D,
    scene: RefCell<Option<Rc<dyn Recolor>>>,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeStore<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self {
            store,
            surface,
            scene: RefCell::new(None),
        }
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persisted theme, `Light` when nothing usable is stored.
    pub fn get_theme(&self) -> Theme {
        match self.store.load(THEME_STORAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e: ParseThemeError| {
                log::warn!("[theme] {}; falling back to light", e);
                Theme::Light
            }),
            None => Theme::Light,
        }
    }

    /// Apply the persisted theme to the surface at startup.
    pub fn init(&self) -> Theme {
        let theme = self.get_theme();
        self.surface.apply(theme);
        log::info!("[theme] initial theme {}", theme);
        theme
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] {}", e);
        }
        self.surface.apply(theme);
        if let Some(scene) = self.scene.borrow().as_ref() {
            scene.recolor(theme);
        }
    }

    pub fn toggle_theme(&self) -> Theme {
        let current = self.surface.applied().unwrap_or_else(|| self.get_theme());
        let next = current.toggled();
        self.set_theme(next);
        log::info!("[theme] {} -> {}", current, next);
        next
    }

    pub fn attach_scene(&self, scene: Rc<dyn Recolor>) {
        *self.scene.borrow_mut() = Some(scene);
    }
}
