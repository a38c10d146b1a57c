use std::time::Duration;

// Shared behavior tuning constants used by the web frontend.

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "webmint-theme";

// Scroll reactors (CSS pixels)
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0; // navbar gets `scrolled` past this
pub const ACTIVE_SECTION_PROBE: f64 = 150.0; // added to scrollY before section hit-testing
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0; // back-to-top becomes visible past this
pub const ANCHOR_EXTRA_OFFSET: f64 = 20.0; // breathing room below the fixed navbar
pub const ANIMATE_ON_SCROLL_THROTTLE: Duration = Duration::from_millis(100);

// Parallax: total travel of `.highlight-content` over the band's pass
pub const PARALLAX_DISTANCE_PX: f64 = -30.0;

// Contact form
pub const SUCCESS_REVERT_DELAY: Duration = Duration::from_secs(10);

// Email relay (EmailJS)
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "service_3qv7u4b";
pub const ACK_TEMPLATE_ID: &str = "template_ehqpvfk"; // thank-you mail to the customer
pub const NOTIFY_TEMPLATE_ID: &str = "template_iqqlx6r"; // notification mail to the studio

// Hero scene
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_SPREAD: f32 = 10.0; // edge length of the cube particles are scattered in
pub const PARTICLE_SIZE: f32 = 0.025; // world units
pub const PARTICLE_COLOR: u32 = 0x1868FF;
pub const SHAPE_COUNT: usize = 5;
pub const SHAPE_COLORS: [u32; 2] = [0x1868FF, 0x118866]; // alternated by index
pub const SHAPE_SPREAD: [f32; 3] = [8.0, 6.0, 4.0]; // x/y/z extents for sphere placement

// Rotation speeds (radians per second) and pointer influence
pub const PARTICLE_SPIN_Y: f32 = 0.05;
pub const PARTICLE_SPIN_X: f32 = 0.03;
pub const POINTER_FOLLOW: f32 = 0.01;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Theme-dependent opacity: [light, dark]
pub const PARTICLE_OPACITY: [f32; 2] = [0.5, 0.7];
pub const SHAPE_OPACITY: [f32; 2] = [0.25, 0.15];

// Attribute-driven reveals
pub const AOS_DURATION_MS: u32 = 800;
pub const AOS_OFFSET_PX: u32 = 50;
pub const AOS_MIN_VIEWPORT_WIDTH: f64 = 768.0;

// Scroll reveals start once the element top crosses this fraction of the viewport
pub const REVEAL_START_FRACTION: f64 = 0.85;
