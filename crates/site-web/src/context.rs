use crate::theme::{DocumentTheme, LocalStorage};
use site_core::{Recolor, Theme, ThemeStore};
use std::rc::Rc;
use web_sys as web;

/// Process-wide state shared between components: the theme (and through it
/// the attached hero scene). Handed out as `Rc<AppContext>`.
pub struct AppContext {
    pub document: web::Document,
    pub theme: ThemeStore<LocalStorage, DocumentTheme>,
}

impl AppContext {
    pub fn new(document: web::Document) -> Rc<Self> {
        let theme = ThemeStore::new(LocalStorage::new(), DocumentTheme::new(&document));
        Rc::new(Self { document, theme })
    }

    /// Theme currently shown on the page.
    pub fn current_theme(&self) -> Theme {
        use site_core::ThemeSurface;
        self.theme
            .surface()
            .applied()
            .unwrap_or_else(|| self.theme.get_theme())
    }

    pub fn attach_scene(&self, scene: Rc<dyn Recolor>) {
        self.theme.attach_scene(scene);
    }
}
