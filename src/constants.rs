/// Motion and interaction tuning constants.
///
/// These constants express intended behavior (damping factors, clamp limits,
/// durations) and keep magic numbers out of the code. `config.rs` groups them
/// into parameter structs that can be overridden at start-up.
// Smooth scroll: per-frame easing toward the native scroll offset
pub const SCROLL_EASE: f64 = 0.08;
pub const SCROLL_SNAP_EPSILON_PX: f64 = 0.5;

// Pointer sampler: per-frame damping of the smoothed position
pub const POINTER_DAMPING: f32 = 0.1;

// Particle emission
pub const PARTICLE_MIN_JITTER_PX: f32 = 0.1; // below this the pointer is considered still
pub const PARTICLE_SIZE_GAIN: f32 = 1.5; // jitter -> base radius
pub const PARTICLE_MAX_SIZE_PX: f32 = 150.0;
pub const PARTICLE_LIFESPAN_MS: f64 = 5000.0;
pub const PARTICLE_PEAK_FRACTION: f64 = 0.01; // share of lifespan spent growing

// Header hide/show
pub const HEADER_REVEAL_ZONE_PX: f64 = 100.0; // always visible above this offset
pub const HEADER_FALLBACK_HEIGHT_PX: f64 = 80.0;

// Layout switch between desktop effects and native mobile behavior
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Accordion reveal
pub const ACCORDION_OPEN_ROTATION_DEG: f64 = 90.0;
pub const ACCORDION_MAX_HEIGHT_PX: f64 = 500.0;
pub const REVEAL_DURATION_MS: f64 = 600.0;
pub const REVEAL_CLOSE_OVERLAP_MS: f64 = 0.0; // close of the previous region starts immediately
pub const REVEAL_OPEN_DELAY_MS: f64 = 120.0; // open of the new region trails the close

// Overlay shared-element morph
pub const MORPH_DURATION_MS: f64 = 550.0;
pub const OVERLAY_FADE_MS: f64 = 300.0;

// Testimonial deck
pub const DECK_AUTOPLAY_MS: f64 = 5000.0;
pub const DECK_VISIBLE_BEHIND: usize = 2;
pub const DECK_STACK_STEP_PX: f64 = -25.0;
pub const DECK_STACK_SCALE_STEP: f64 = 0.1;
pub const DECK_ROTATION_STEP_DEG: f64 = 6.0;
pub const DECK_HIDDEN_OFFSET_PX: f64 = 50.0;
pub const DECK_HIDDEN_SCALE: f64 = 0.8;

// Custom cursor
pub const CURSOR_OUTER_LAG_MS: f64 = 400.0;
pub const CURSOR_INNER_LAG_MS: f64 = 100.0;
pub const CURSOR_SIZE_MS: f64 = 300.0;
pub const CURSOR_SIZE_IDLE_PX: f64 = 32.0;
pub const CURSOR_SIZE_HOVER_PX: f64 = 60.0;

// Text effects
pub const TAGLINE_HOLD_MS: f64 = 3500.0;
pub const TAGLINE_FADE_MS: f64 = 500.0;
pub const SCRAMBLE_GLYPHS: &str = "!#$&*?%";
pub const CODED_GLYPHS: &str = "#?@!&";
pub const COLOR_STEP_MS: f64 = 1500.0;
