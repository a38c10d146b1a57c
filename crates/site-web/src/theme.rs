use crate::constants::{THEME_ATTRIBUTE, THEME_ICON_ID, THEME_TOGGLE_ID};
use crate::context::AppContext;
use crate::dom;
use site_core::{PreferenceStore, StoreError, Theme, ThemeSurface};
use std::rc::Rc;
use web_sys as web;

/// `window.localStorage`, looked up per call so a blocked store only
/// disables persistence.
#[derive(Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        LocalStorage
    }

    fn storage() -> Result<web::Storage, StoreError> {
        web::window()
            .ok_or_else(|| StoreError("no window".into()))?
            .local_storage()
            .map_err(|e| StoreError(format!("{:?}", e)))?
            .ok_or_else(|| StoreError("localStorage disabled".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError(format!("{:?}", e)))
    }
}

/// `data-theme` on `<html>` plus the sun/moon icon in the toggle.
pub struct DocumentTheme {
    root: Option<web::Element>,
    icon: Option<web::Element>,
}

impl DocumentTheme {
    pub fn new(document: &web::Document) -> Self {
        Self {
            root: document.document_element(),
            icon: document.get_element_by_id(THEME_ICON_ID),
        }
    }
}

impl ThemeSurface for DocumentTheme {
    fn applied(&self) -> Option<Theme> {
        self.root
            .as_ref()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn apply(&self, theme: Theme) {
        if let Some(root) = &self.root {
            _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
        if let Some(icon) = &self.icon {
            let cl = icon.class_list();
            _ = cl.remove_1(theme.toggled().icon_class());
            _ = cl.add_1(theme.icon_class());
        }
    }
}

pub fn wire_theme_toggle(ctx: &Rc<AppContext>) {
    ctx.theme.init();
    let ctx_click = ctx.clone();
    dom::add_click_listener(&ctx.document, THEME_TOGGLE_ID, move || {
        ctx_click.theme.toggle_theme();
    });
}
