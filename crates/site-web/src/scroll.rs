use crate::constants::*;
use crate::dom;
use site_core::scroll::{
    active_section, anchor_scroll_target, back_to_top_visible, navbar_scrolled, SectionSpan,
};
use wasm_bindgen::JsCast;
use web_sys as web;

fn section_spans(sections: &[web::HtmlElement]) -> Vec<SectionSpan> {
    sections
        .iter()
        .map(|s| SectionSpan {
            id: s.id(),
            top: s.offset_top() as f64,
            height: s.offset_height() as f64,
        })
        .collect()
}

/// Navbar style, active link and back-to-top visibility, recomputed from
/// `scrollY` on every scroll event.
pub fn wire_scroll_reactors(document: &web::Document) {
    let navbar = document.get_element_by_id(NAVBAR_ID);
    let back_to_top = document.get_element_by_id(BACK_TO_TOP_ID);
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let sections: Vec<web::HtmlElement> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();

    dom::add_window_listener("scroll", move |_: web::Event| {
        let y = dom::scroll_y();
        if let Some(nav) = &navbar {
            dom::set_class(nav, CLASS_SCROLLED, navbar_scrolled(y));
        }
        // section offsets move with layout, so read them per event
        let spans = section_spans(&sections);
        if let Some(id) = active_section(y, &spans) {
            let href = format!("#{}", id);
            for link in &links {
                let is_current = link.get_attribute("href").as_deref() == Some(href.as_str());
                dom::set_class(link, CLASS_ACTIVE, is_current);
            }
        }
        if let Some(btn) = &back_to_top {
            dom::set_class(btn, CLASS_VISIBLE, back_to_top_visible(y));
        }
    });

    dom::add_click_listener(document, BACK_TO_TOP_ID, || dom::smooth_scroll_to(0.0));
}

/// In-page anchors scroll smoothly and stop just below the fixed navbar.
pub fn wire_smooth_scroll(document: &web::Document) {
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let doc = document.clone();
        let anchor = link.clone();
        dom::add_listener(&link, "click", move |ev: web::Event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(target) = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            let navbar_height = dom::by_id::<web::HtmlElement>(&doc, NAVBAR_ID)
                .map(|n| n.offset_height() as f64)
                .unwrap_or(0.0);
            dom::smooth_scroll_to(anchor_scroll_target(target.offset_top() as f64, navbar_height));
        });
    }
}

/// Collapse the open mobile menu when a nav link is followed.
pub fn wire_mobile_menu(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        dom::add_listener(&link, "click", move |_: web::Event| {
            let Some(menu) = doc.get_element_by_id(NAVBAR_COLLAPSE_ID) else {
                return;
            };
            if menu.class_list().contains(CLASS_SHOW) && !hide_with_bootstrap(&menu) {
                dom::set_class(&menu, CLASS_SHOW, false);
            }
        });
    }
}

/// `bootstrap.Collapse.getInstance(menu).hide()` when Bootstrap is loaded.
fn hide_with_bootstrap(menu: &web::Element) -> bool {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::JsValue;

    let Ok(collapse) = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))
        .and_then(|b| Reflect::get(&b, &JsValue::from_str("Collapse")))
    else {
        return false;
    };
    let Some(get_instance) = Reflect::get(&collapse, &JsValue::from_str("getInstance"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return false;
    };
    let Ok(instance) = get_instance.call1(&collapse, menu) else {
        return false;
    };
    if instance.is_null() || instance.is_undefined() {
        return false;
    }
    Reflect::get(&instance, &JsValue::from_str("hide"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .map(|hide| hide.call0(&instance).is_ok())
        .unwrap_or(false)
}
