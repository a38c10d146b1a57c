//! Scroll-position reactors. Each function recomputes from the current
//! offset alone; nothing here remembers the previous scroll event.

use crate::constants::*;
use instant::Instant;
use std::time::Duration;

/// Vertical extent of a page section, as read from `offsetTop`/`offsetHeight`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Viewport-relative bounding box (`getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl ViewRect {
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Section whose bounds contain `scroll_y + 150`. Sections are checked in
/// document order and the last hit wins.
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE;
    sections
        .iter()
        .filter(|s| s.contains(probe))
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll offset that puts `offset_top` just below a fixed navbar.
#[inline]
pub fn anchor_scroll_target(offset_top: f64, navbar_height: f64) -> f64 {
    offset_top - navbar_height - ANCHOR_EXTRA_OFFSET
}

/// Fully inside the viewport.
pub fn is_in_viewport(rect: &ViewRect, viewport_w: f64, viewport_h: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= viewport_h && rect.right <= viewport_w
}

/// The element's top has already crossed the reveal start line (85% of the
/// viewport height), including elements scrolled past entirely.
#[inline]
pub fn past_reveal_start(rect: &ViewRect, viewport_h: f64) -> bool {
    rect.top < viewport_h * REVEAL_START_FRACTION
}

/// Scrub progress of an element pass: 0 when its top meets the viewport
/// bottom, 1 when its bottom leaves through the viewport top.
pub fn pass_progress(rect: &ViewRect, viewport_h: f64) -> f64 {
    let span = viewport_h + rect.height();
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_h - rect.top) / span).clamp(0.0, 1.0)
}

#[inline]
pub fn parallax_offset(rect: &ViewRect, viewport_h: f64) -> f64 {
    PARALLAX_DISTANCE_PX * pass_progress(rect, viewport_h)
}

/// Leading-edge throttle: the first call passes, later calls pass once
/// `limit` has elapsed since the last one that did.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now < last + self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    #[inline]
    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Throttle::new(ANIMATE_ON_SCROLL_THROTTLE)
    }
}
