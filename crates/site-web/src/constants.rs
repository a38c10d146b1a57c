// Document contract: element ids, classes and selectors the markup must
// provide, plus page-level timings.

// Element ids
pub const PRELOADER_ID: &str = "preloader";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ICON_ID: &str = "themeIcon";
pub const NAVBAR_ID: &str = "mainNavbar";
pub const NAVBAR_COLLAPSE_ID: &str = "navbarNav";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_SUCCESS_ID: &str = "formSuccess";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const HERO_CANVAS_ID: &str = "heroCanvas";
pub const LOTTIE_MOUNT_ID: &str = "lottieAnimation";
pub const CURRENT_YEAR_ID: &str = "currentYear";

// Selectors
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".btn-submit";
pub const FORM_CONTROL_SELECTOR: &str = ".form-control";
pub const CATALOGUE_BUTTON_SELECTOR: &str = ".btn-catalogue";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const ANIMATE_ON_SCROLL_SELECTOR: &str = ".animate-on-scroll";
pub const AOS_SELECTOR: &str = "[data-aos]";
pub const AOS_ATTRIBUTE_PREFIX: &str = "data-aos";
pub const PARALLAX_TRIGGER_SELECTOR: &str = ".highlight-band";
pub const PARALLAX_TARGET_SELECTOR: &str = ".highlight-content";

// State classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_INVALID: &str = "is-invalid";
pub const CLASS_FOCUSED: &str = "focused";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_AOS_ANIMATE: &str = "aos-animate";
pub const CLASS_TOAST: &str = "download-toast";

// Theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

// Submit button labels
pub const SUBMIT_SENDING_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";

// Relay configuration lookup
pub const EMAILJS_KEY_META: &str = "meta[name=\"emailjs-public-key\"]";

// Preloader (ms after window load)
pub const PRELOADER_FADE_DELAY_MS: u32 = 800;
pub const PRELOADER_REMOVE_DELAY_MS: u32 = 500;

// Download toast (ms)
pub const TOAST_SHOW_DELAY_MS: u32 = 100;
pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_REMOVE_DELAY_MS: u32 = 300;
pub const TOAST_HTML: &str = "<div class=\"toast-content\"><i class=\"fas fa-check-circle\"></i><span>Catalogue download started!</span></div>";

// Analytics event reported on catalogue download
pub const ANALYTICS_EVENT: &str = "download";
pub const ANALYTICS_CATEGORY: &str = "Catalogue";
pub const ANALYTICS_LABEL: &str = "WebMint Catalogue PDF";

// Lottie hero animation
pub const LOTTIE_SRC: &str = "assets/heroanime.json";
pub const LOTTIE_HEIGHT: &str = "400px";

pub const INVALID_FIELD_CSS: &str = "
    .form-control.is-invalid {
        border-color: #dc3545 !important;
        box-shadow: 0 0 0 3px rgba(220, 53, 69, 0.1) !important;
    }

    .form-control.is-invalid:focus {
        border-color: #dc3545 !important;
        box-shadow: 0 0 0 3px rgba(220, 53, 69, 0.2) !important;
    }
";

// Console banner: (text, css)
pub const CONSOLE_BANNER: [(&str, &str); 3] = [
    (
        "%c WebMint Solutions ",
        "background: #1868FF; color: white; font-size: 20px; font-weight: bold; padding: 10px 20px; border-radius: 5px;",
    ),
    ("%c Digital Product Studio ", "color: #118866; font-size: 14px; padding: 5px 0;"),
    ("%c Code · Clarity · Conversion ", "color: #666; font-size: 12px;"),
];
