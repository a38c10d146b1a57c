//! Entrance and scroll-reveal animation tables.
//!
//! Every animation goes from an offset, transparent state to the element's
//! natural position at full opacity. The web side turns a `Tween` into an
//! inline starting style plus a CSS transition.

/// CSS approximation of a power-3 ease-out.
pub const EASE_OUT_CUBIC: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub selector: &'static str,
    pub from_x: f32,
    pub from_y: f32,
    pub from_scale: f32,
    pub duration_sec: f32,
    /// Start time relative to the timeline (or trigger) start.
    pub start_sec: f32,
}

impl Tween {
    const fn rise(selector: &'static str, from_y: f32, duration_sec: f32, start_sec: f32) -> Self {
        Self {
            selector,
            from_x: 0.0,
            from_y,
            from_scale: 1.0,
            duration_sec,
            start_sec,
        }
    }

    pub fn initial_transform(&self) -> String {
        if self.from_scale == 1.0 {
            format!("translate({}px, {}px)", self.from_x, self.from_y)
        } else {
            format!(
                "translate({}px, {}px) scale({})",
                self.from_x, self.from_y, self.from_scale
            )
        }
    }

    pub fn transition(&self) -> String {
        format!(
            "opacity {d}s {e} {s}s, transform {d}s {e} {s}s",
            d = self.duration_sec,
            e = EASE_OUT_CUBIC,
            s = self.start_sec
        )
    }

    #[inline]
    pub fn end_sec(&self) -> f32 {
        self.start_sec + self.duration_sec
    }
}

/// Hero entrance, played once on load.
pub const HERO_TIMELINE: [Tween; 6] = [
    Tween::rise(".hero-badge", 30.0, 0.8, 0.3),
    Tween::rise(".hero-title", 40.0, 1.0, 0.5),
    Tween::rise(".hero-subtitle", 30.0, 0.8, 0.7),
    Tween::rise(".hero-buttons", 20.0, 0.8, 0.9),
    Tween::rise(".hero-tagline", 20.0, 0.8, 1.1),
    Tween {
        selector: ".hero-visual",
        from_x: 50.0,
        from_y: 0.0,
        from_scale: 1.0,
        duration_sec: 1.0,
        start_sec: 0.5,
    },
];

/// Cards revealed the first time each one scrolls into view. Later cards in
/// a group wait `stagger_sec` per index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub from_y: f32,
    pub from_scale: f32,
    pub duration_sec: f32,
    pub stagger_sec: f32,
}

impl RevealGroup {
    pub fn tween_for(&self, index: usize) -> Tween {
        Tween {
            selector: self.selector,
            from_x: 0.0,
            from_y: self.from_y,
            from_scale: self.from_scale,
            duration_sec: self.duration_sec,
            start_sec: index as f32 * self.stagger_sec,
        }
    }
}

pub const SCROLL_REVEALS: [RevealGroup; 5] = [
    RevealGroup {
        selector: ".stat-card",
        from_y: 50.0,
        from_scale: 1.0,
        duration_sec: 0.8,
        stagger_sec: 0.1,
    },
    RevealGroup {
        selector: ".service-card",
        from_y: 50.0,
        from_scale: 0.95,
        duration_sec: 0.6,
        stagger_sec: 0.05,
    },
    RevealGroup {
        selector: ".pricing-card",
        from_y: 50.0,
        from_scale: 1.0,
        duration_sec: 0.8,
        stagger_sec: 0.15,
    },
    RevealGroup {
        selector: ".process-step",
        from_y: 40.0,
        from_scale: 1.0,
        duration_sec: 0.8,
        stagger_sec: 0.2,
    },
    RevealGroup {
        selector: ".why-card",
        from_y: 40.0,
        from_scale: 1.0,
        duration_sec: 0.6,
        stagger_sec: 0.1,
    },
];

/// Success panel fade-in after a sent form.
pub const SUCCESS_PANEL: Tween = Tween::rise("#formSuccess", 20.0, 0.6, 0.0);
