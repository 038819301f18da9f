// Tuning constants for the page controller. `ControllerConfig::default()`
// collects them; the browser layer never hard-codes these numbers.

// Navbar
pub const NAVBAR_HIDE_THRESHOLD_PX: f64 = 100.0; // below this offset the navbar never hides
// A section counts as active this far before its top.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0; // clearance left for the fixed navbar

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.05; // fraction visible before an element reveals
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10px 0px";
pub const REVEAL_INITIAL_OFFSET_PX: f64 = 30.0; // hidden elements sit this far below their slot
pub const REVEAL_FALLBACK_MS: u64 = 3000; // force-reveal deadline after start

// Counters
pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNTER_STEPS: f64 = 50.0;
pub const COUNTER_INTERVAL_MS: u64 = 30;

// Typing
pub const TYPING_START_DELAY_MS: u64 = 500; // after window load
pub const TYPING_CHAR_INTERVAL_MS: u64 = 100;

// Tilt and parallax
pub const TILT_DIVISOR: f64 = 20.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = 10.0;
pub const PARALLAX_SPEED: f64 = 0.5;
pub const PARALLAX_IMAGE_FACTOR: f64 = 0.8; // image layer moves slower than the text

// Back-to-top control
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;
pub const BACK_TO_TOP_LIFT_PX: f64 = 5.0;

// Decorative timers
pub const GRADIENT_INTERVAL_MS: u64 = 100;
pub const GRADIENT_STEP_EVERY: u32 = 10; // repaint on every tenth hue step
pub const HERO_FADE_IN_DELAY_MS: u64 = 100;
pub const SKILL_TAG_STAGGER_MS: u64 = 50;
pub const TIMELINE_EVEN_DELAY: &str = "0.2s";
pub const TIMELINE_ODD_DELAY: &str = "0.4s";

// Footer
pub const FOOTER_OWNER: &str = "Priyanka Yadav";
