// Host-side tests for the scroll reactors.

use instant::Instant;
use site_core::scroll::*;
use std::time::Duration;

fn sections() -> Vec<SectionSpan> {
    [("home", 0.0, 800.0), ("services", 800.0, 1200.0), ("contact", 2000.0, 600.0)]
        .into_iter()
        .map(|(id, top, height)| SectionSpan {
            id: id.to_string(),
            top,
            height,
        })
        .collect()
}

#[test]
fn navbar_and_back_to_top_thresholds_are_exclusive() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(50.5));
    assert!(!back_to_top_visible(500.0));
    assert!(back_to_top_visible(501.0));
}

#[test]
fn active_section_probes_150px_below_scroll() {
    let s = sections();
    assert_eq!(active_section(0.0, &s), Some("home"));
    // 649 + 150 = 799 still inside home
    assert_eq!(active_section(649.0, &s), Some("home"));
    assert_eq!(active_section(650.0, &s), Some("services"));
    assert_eq!(active_section(1900.0, &s), Some("contact"));
    assert_eq!(active_section(2500.0, &s), None);
}

#[test]
fn active_section_last_overlap_wins() {
    let mut s = sections();
    s.push(SectionSpan {
        id: "overlay".into(),
        top: 900.0,
        height: 100.0,
    });
    assert_eq!(active_section(800.0, &s), Some("overlay"));
    assert_eq!(active_section(0.0, &[]), None);
}

#[test]
fn anchor_target_clears_navbar() {
    assert_eq!(anchor_scroll_target(1000.0, 80.0), 900.0);
}

#[test]
fn viewport_containment() {
    let inside = ViewRect {
        top: 10.0,
        left: 0.0,
        bottom: 300.0,
        right: 400.0,
    };
    assert!(is_in_viewport(&inside, 400.0, 300.0));
    let clipped = ViewRect { top: -1.0, ..inside };
    assert!(!is_in_viewport(&clipped, 400.0, 300.0));
    let wide = ViewRect { right: 401.0, ..inside };
    assert!(!is_in_viewport(&wide, 400.0, 300.0));
}

#[test]
fn parallax_scrubs_from_zero_to_full_distance() {
    let vh = 800.0;
    let entering = ViewRect {
        top: 800.0,
        left: 0.0,
        bottom: 1200.0,
        right: 100.0,
    };
    assert_eq!(parallax_offset(&entering, vh), 0.0);
    let leaving = ViewRect {
        top: -400.0,
        bottom: 0.0,
        ..entering
    };
    assert_eq!(parallax_offset(&leaving, vh), -30.0);
    let halfway = ViewRect {
        top: 200.0,
        bottom: 600.0,
        ..entering
    };
    assert!((pass_progress(&halfway, vh) - 0.5).abs() < 1e-9);
    let below = ViewRect {
        top: 2000.0,
        bottom: 2400.0,
        ..entering
    };
    assert_eq!(pass_progress(&below, vh), 0.0);
}

#[test]
fn throttle_passes_leading_call_then_waits() {
    let mut t = Throttle::new(Duration::from_millis(100));
    let t0 = Instant::now();
    assert!(t.ready_at(t0));
    assert!(!t.ready_at(t0 + Duration::from_millis(50)));
    assert!(!t.ready_at(t0 + Duration::from_millis(99)));
    assert!(t.ready_at(t0 + Duration::from_millis(100)));
    assert!(!t.ready_at(t0 + Duration::from_millis(150)));
    assert!(t.ready_at(t0 + Duration::from_millis(250)));
}

#[test]
fn reveal_start_covers_cards_above_the_viewport() {
    let vh = 1000.0;
    let at = |top: f64| ViewRect {
        top,
        left: 0.0,
        bottom: top + 300.0,
        right: 400.0,
    };
    // scrolled past entirely after a reload mid-page
    assert!(past_reveal_start(&at(-1200.0), vh));
    assert!(past_reveal_start(&at(100.0), vh));
    assert!(past_reveal_start(&at(849.0), vh));
    assert!(!past_reveal_start(&at(851.0), vh));
    assert!(!past_reveal_start(&at(1400.0), vh));
}
