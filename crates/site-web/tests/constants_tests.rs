// Host-side checks on the document contract. The crate itself is wasm-only,
// so the constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_plain_and_distinct() {
    let ids = [
        PRELOADER_ID,
        THEME_TOGGLE_ID,
        THEME_ICON_ID,
        NAVBAR_ID,
        NAVBAR_COLLAPSE_ID,
        CONTACT_FORM_ID,
        FORM_SUCCESS_ID,
        BACK_TO_TOP_ID,
        HERO_CANVAS_ID,
        LOTTIE_MOUNT_ID,
        CURRENT_YEAR_ID,
    ];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{} should be a bare id", id);
        assert!(!id.contains(' '));
    }
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn anchor_selector_matches_fragment_links() {
    assert_eq!(ANCHOR_LINK_SELECTOR, "a[href^=\"#\"]");
    assert_eq!(SECTION_SELECTOR, "section[id]");
    assert!(EMAILJS_KEY_META.starts_with("meta["));
}

#[test]
fn invalid_style_targets_the_invalid_class() {
    assert!(INVALID_FIELD_CSS.contains(&format!(".form-control.{}", CLASS_INVALID)));
    assert!(INVALID_FIELD_CSS.contains(":focus"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn toast_fades_in_before_it_is_dismissed() {
    assert!(TOAST_SHOW_DELAY_MS < TOAST_VISIBLE_MS);
    assert!(TOAST_REMOVE_DELAY_MS > 0);
    assert!(PRELOADER_FADE_DELAY_MS > 0 && PRELOADER_REMOVE_DELAY_MS > 0);
}

#[test]
fn console_banner_lines_are_styled() {
    for (text, css) in CONSOLE_BANNER {
        assert!(text.starts_with("%c"));
        assert!(!css.is_empty());
    }
}

#[test]
fn sending_label_shows_a_spinner() {
    assert!(SUBMIT_SENDING_HTML.contains("fa-spinner"));
    assert!(SUBMIT_SENDING_HTML.ends_with("Sending..."));
}

#[test]
fn aos_prefix_covers_every_aos_attribute() {
    assert!(AOS_SELECTOR.contains(AOS_ATTRIBUTE_PREFIX));
    for name in ["data-aos", "data-aos-duration", "data-aos-delay", "data-aos-offset"] {
        assert!(name.starts_with(AOS_ATTRIBUTE_PREFIX));
    }
    assert!(!"data-src".starts_with(AOS_ATTRIBUTE_PREFIX));
}
