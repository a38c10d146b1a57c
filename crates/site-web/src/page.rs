//! Small page conveniences: preloader, download toast, analytics hook,
//! footer year, lazy images, Lottie mount and the console banner.

use crate::constants::*;
use crate::dom;
use crate::lifecycle;
use crate::reveal;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade the preloader out shortly after `window.load`, then drop it from layout.
/// If `load` has already fired the fade starts immediately.
pub fn wire_preloader(document: &web::Document) {
    let Some(preloader) = dom::by_id::<web::HtmlElement>(document, PRELOADER_ID) else {
        return;
    };
    if !lifecycle::load_pending(&document.ready_state()) {
        hide_preloader(preloader);
        return;
    }
    dom::add_window_listener("load", move |_: web::Event| hide_preloader(preloader.clone()));
}

fn hide_preloader(preloader: web::HtmlElement) {
    dom::after(PRELOADER_FADE_DELAY_MS, move || {
        _ = preloader.class_list().add_1(CLASS_HIDDEN);
        dom::after(PRELOADER_REMOVE_DELAY_MS, move || {
            dom::set_display(&preloader, "none");
        });
    });
}

pub fn wire_catalogue_tracking(document: &web::Document) {
    for button in dom::query_all(document, CATALOGUE_BUTTON_SELECTOR) {
        let doc = document.clone();
        dom::add_listener(&button, "click", move |_: web::Event| {
            log::info!("[catalogue] download started");
            show_download_toast(&doc);
            report_download();
        });
    }
}

fn show_download_toast(document: &web::Document) {
    let (Some(body), Ok(toast)) = (document.body(), document.create_element("div")) else {
        return;
    };
    toast.set_class_name(CLASS_TOAST);
    toast.set_inner_html(TOAST_HTML);
    if body.append_child(&toast).is_err() {
        return;
    }
    let shown = toast.clone();
    dom::after(TOAST_SHOW_DELAY_MS, move || dom::set_class(&shown, CLASS_SHOW, true));
    dom::after(TOAST_VISIBLE_MS, move || {
        dom::set_class(&toast, CLASS_SHOW, false);
        dom::after(TOAST_REMOVE_DELAY_MS, move || toast.remove());
    });
}

/// `gtag('event', 'download', {...})` when the analytics global exists.
fn report_download() {
    let global = js_sys::global();
    let Ok(gtag) = js_sys::Reflect::get(&global, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        log::debug!("[catalogue] no gtag; analytics skipped");
        return;
    };
    let params = js_sys::Object::new();
    _ = js_sys::Reflect::set(&params, &"event_category".into(), &ANALYTICS_CATEGORY.into());
    _ = js_sys::Reflect::set(&params, &"event_label".into(), &ANALYTICS_LABEL.into());
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &"event".into(),
        &ANALYTICS_EVENT.into(),
        &params,
    ) {
        log::warn!("[catalogue] gtag failed: {:?}", e);
    }
}

pub fn set_current_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CURRENT_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

pub fn inject_invalid_style(document: &web::Document) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(INVALID_FIELD_CSS));
    _ = head.append_child(&style);
}

/// Swap `data-src` into `src` the first time each image nears the viewport.
pub fn wire_lazy_images(document: &web::Document) {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR);
    let fallback = images.clone();
    if !reveal::observe_once(images, "0px", |_, el| load_lazy_image(el)) {
        fallback.iter().for_each(load_lazy_image);
    }
}

fn load_lazy_image(el: &web::Element) {
    if let Some(src) = el.get_attribute("data-src") {
        _ = el.set_attribute("src", &src);
        _ = el.remove_attribute("data-src");
    }
}

pub fn mount_lottie(document: &web::Document) {
    let Some(mount) = document.get_element_by_id(LOTTIE_MOUNT_ID) else {
        return;
    };
    let Ok(player) = document.create_element("lottie-player") else {
        return;
    };
    for (name, value) in [
        ("src", LOTTIE_SRC),
        ("background", "transparent"),
        ("speed", "1"),
        ("loop", ""),
        ("autoplay", ""),
    ] {
        _ = player.set_attribute(name, value);
    }
    _ = player.set_attribute("style", &format!("width: 100%; height: {};", LOTTIE_HEIGHT));

    let retry = player.clone();
    dom::add_listener(&player, "error", move |_: web::Event| {
        log::info!("[lottie] animation failed to load, retrying");
        _ = retry.set_attribute("src", LOTTIE_SRC);
    });
    _ = mount.append_child(&player);
}

pub fn print_console_banner() {
    for (text, css) in CONSOLE_BANNER {
        web::console::log_2(&text.into(), &css.into());
    }
}
