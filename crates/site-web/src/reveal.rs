//! Entrance timelines, once-only scroll reveals and the highlight parallax,
//! driven by inline styles and CSS transitions.

use crate::constants::*;
use crate::dom;
use site_core::constants::{
    AOS_DURATION_MS, AOS_MIN_VIEWPORT_WIDTH, AOS_OFFSET_PX, REVEAL_START_FRACTION,
};
use site_core::scroll::{is_in_viewport, parallax_offset, past_reveal_start, Throttle};
use site_core::timeline::{Tween, HERO_TIMELINE, SCROLL_REVEALS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Put `el` in the tween's starting state without animating.
pub fn prepare(el: &web::HtmlElement, tween: &Tween) {
    let style = el.style();
    _ = style.set_property("transition", "none");
    _ = style.set_property("opacity", "0");
    _ = style.set_property("transform", &tween.initial_transform());
}

/// Animate from the prepared state to the natural one.
pub fn release(el: &web::HtmlElement, tween: &Tween) {
    // flush the prepared styles so the transition has a start point
    _ = el.offset_height();
    let style = el.style();
    _ = style.set_property("transition", &tween.transition());
    _ = style.set_property("opacity", "1");
    _ = style.set_property("transform", "none");
}

#[inline]
pub fn play(el: &web::HtmlElement, tween: &Tween) {
    prepare(el, tween);
    release(el, tween);
}

fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    dom::query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn play_hero_timeline(document: &web::Document) {
    for tween in &HERO_TIMELINE {
        for el in html_elements(document, tween.selector) {
            play(&el, tween);
        }
    }
}

/// Call `on_enter(index, element)` the first time each element intersects
/// the viewport (shrunk by `root_margin`), then stop watching it.
/// Returns false, observing nothing, when IntersectionObserver is unavailable.
pub fn observe_once(
    elements: Vec<web::Element>,
    root_margin: &str,
    mut on_enter: impl FnMut(usize, &web::Element) + 'static,
) -> bool {
    if elements.is_empty() {
        return true;
    }
    let watched = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Some(i) = watched.iter().position(|el| *el == target) {
                    on_enter(i, &target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
            callback.forget();
            true
        }
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            false
        }
    }
}

/// Root margin that fires once an element's top passes `fraction` of the
/// viewport height.
fn start_margin(fraction: f64) -> String {
    let shrink = ((1.0 - fraction) * 100.0).round();
    format!("0px 0px -{}% 0px", shrink)
}

/// Cards already past the start line play at once; the rest are hidden only
/// once an observer is watching them.
pub fn wire_scroll_reveals(document: &web::Document) {
    let margin = start_margin(REVEAL_START_FRACTION);
    let (_, vh) = dom::viewport_size();
    for group in SCROLL_REVEALS {
        let mut pending: Vec<(usize, web::HtmlElement)> = Vec::new();
        for (i, el) in html_elements(document, group.selector).into_iter().enumerate() {
            if past_reveal_start(&dom::view_rect(&el), vh) {
                play(&el, &group.tween_for(i));
            } else {
                pending.push((i, el));
            }
        }
        let indices: Vec<usize> = pending.iter().map(|(i, _)| *i).collect();
        let plain: Vec<web::Element> = pending.iter().map(|(_, e)| e.clone().into()).collect();
        let observing = observe_once(plain, &margin, move |k, el| {
            if let (Some(el), Some(&i)) = (el.dyn_ref::<web::HtmlElement>(), indices.get(k)) {
                release(el, &group.tween_for(i));
            }
        });
        if observing {
            for (i, el) in &pending {
                prepare(el, &group.tween_for(*i));
            }
        }
    }
}

/// Drop every `data-aos*` attribute so the AOS stylesheet leaves `el` visible.
fn strip_aos(el: &web::Element) {
    for name in el.get_attribute_names().iter().filter_map(|n| n.as_string()) {
        if name.starts_with(AOS_ATTRIBUTE_PREFIX) {
            _ = el.remove_attribute(&name);
        }
    }
}

/// Attribute-driven reveals for `[data-aos]` elements, desktop widths only.
/// Where reveals are off the attributes are removed instead.
pub fn wire_aos(document: &web::Document) {
    let elements = dom::query_all(document, AOS_SELECTOR);
    let (width, _) = dom::viewport_size();
    if width < AOS_MIN_VIEWPORT_WIDTH {
        log::debug!("[reveal] viewport {}px; data-aos reveals disabled", width);
        elements.iter().for_each(strip_aos);
        return;
    }
    for el in &elements {
        if !el.has_attribute("data-aos-duration") {
            _ = el.set_attribute("data-aos-duration", &AOS_DURATION_MS.to_string());
        }
    }
    let margin = format!("0px 0px -{}px 0px", AOS_OFFSET_PX);
    let fallback = elements.clone();
    if !observe_once(elements, &margin, |_, el| {
        dom::set_class(el, CLASS_AOS_ANIMATE, true);
    }) {
        fallback.iter().for_each(strip_aos);
    }
}

/// `.animate-on-scroll` elements fully in view get `animated`, checked at
/// most every 100 ms while scrolling.
pub fn wire_animate_on_scroll(document: &web::Document) {
    let doc = document.clone();
    let throttle = Rc::new(RefCell::new(Throttle::default()));
    dom::add_window_listener("scroll", move |_: web::Event| {
        if !throttle.borrow_mut().ready() {
            return;
        }
        let (vw, vh) = dom::viewport_size();
        for el in dom::query_all(&doc, ANIMATE_ON_SCROLL_SELECTOR) {
            if is_in_viewport(&dom::view_rect(&el), vw, vh) {
                dom::set_class(&el, CLASS_ANIMATED, true);
            }
        }
    });
}

pub fn wire_parallax(document: &web::Document) {
    let Ok(Some(band)) = document.query_selector(PARALLAX_TRIGGER_SELECTOR) else {
        return;
    };
    let targets = html_elements(document, PARALLAX_TARGET_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let update = move || {
        let (_, vh) = dom::viewport_size();
        let y = parallax_offset(&dom::view_rect(&band), vh);
        let transform = format!("translateY({:.2}px)", y);
        for t in &targets {
            _ = t.style().set_property("transform", &transform);
        }
    };
    update();
    dom::add_window_listener("scroll", move |_: web::Event| update());
}
