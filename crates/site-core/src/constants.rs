use std::time::Duration;

// Shared tuning constants used by the web frontend.

// Canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Streak spawning
pub const STREAK_SPAWN_INTERVAL: Duration = Duration::from_millis(120);
pub const STREAK_SPAWN_PROBABILITY: f32 = 0.85;
pub const STREAK_MAX_COUNT: usize = 90; // oldest evicted past this
pub const STREAK_X_OFFSET_FRAC: f32 = 0.2; // spawn band starts 20% of the width to the right
pub const STREAK_Y_SPAN_FRAC: f32 = 0.7; // spawn in the upper 70% of the height
pub const STREAK_LEN_MIN: f32 = 60.0;
pub const STREAK_LEN_SPAN: f32 = 140.0;
pub const STREAK_SPEED_MIN: f32 = 8.0;
pub const STREAK_SPEED_SPAN: f32 = 10.0;
pub const STREAK_ANGLE: f32 = std::f32::consts::PI * 3.0 / 4.0; // down-left
pub const STREAK_ANGLE_JITTER: f32 = 0.25;
pub const STREAK_ALPHA_MIN: f32 = 0.07;
pub const STREAK_ALPHA_SPAN: f32 = 0.13;
pub const STREAK_WIDTH_MIN: f32 = 1.0;
pub const STREAK_WIDTH_SPAN: f32 = 2.0;
pub const STREAK_TAIL_DIVISOR: f32 = 10.0;

// Streak lifecycle
pub const STREAK_FADE_PER_FRAME: f32 = 0.992;
pub const STREAK_ALPHA_FLOOR: f32 = 0.01;
pub const STREAK_OFFSCREEN_MARGIN: f32 = 300.0;

// Streak colors
pub const BACKGROUND_FILL: &str = "rgba(245, 247, 255, 0.55)";
pub const STREAK_RGB: [u8; 3] = [40, 40, 60];

// Orbit layout
pub const ORBIT_RADIUS_WIDTH_FRAC: f32 = 0.22;
pub const ORBIT_RADIUS_MIN: f32 = 160.0;
pub const ORBIT_RADIUS_MAX: f32 = 340.0;
pub const ORBIT_Y_SCALE_DIVISOR: f32 = 1000.0;
pub const ORBIT_Y_SCALE_MIN: f32 = 0.52;
pub const ORBIT_Y_SCALE_MAX: f32 = 0.70;
pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 768.0; // exclusive

// Orbit motion (radians per millisecond) and scene tilt
pub const ORBIT_SPEED_NARROW: f64 = 0.00018;
pub const ORBIT_SPEED_WIDE: f64 = 0.00022;
pub const ORBIT_TILT_NARROW: [f32; 2] = [-8.0, 14.0]; // rotateX, rotateY degrees
pub const ORBIT_TILT_WIDE: [f32; 2] = [-10.0, 18.0];
pub const ORBIT_BASE_Z_NARROW: f32 = 24.0;
pub const ORBIT_BASE_Z_WIDE: f32 = 40.0;

// Orbit depth cues
pub const ORBIT_SCALE_BASE: f32 = 0.76;
pub const ORBIT_SCALE_SPAN: f32 = 0.36;
pub const ORBIT_OPACITY_BASE: f32 = 0.40;
pub const ORBIT_OPACITY_SPAN: f32 = 0.60;
pub const ORBIT_Z_INDEX_SPAN: f32 = 1000.0;
pub const ORBIT_BLUR_MAX_PX: f32 = 0.9;

// Orbit content
pub const ORBIT_VIDEO_IDS: [&str; 3] = ["JT7jlgqqSuU", "zJFXuLmmEvY", "TZJUg9_QVy8"];

// Welcome sequence timings
pub const HERO_HIDE_DELAY: Duration = Duration::from_millis(2500);
pub const HOME_REVEAL_DELAY: Duration = Duration::from_millis(3700);
pub const HOME_ONLY_REVEAL_DELAY: Duration = Duration::from_millis(120);

// Menu
pub const MENU_MOBILE_QUERY: &str = "(max-width: 820px)";

// Info list
pub const INFO_PAGE_SIZE: usize = 5;
pub const INFO_SYNC_LIMIT: usize = 3;

// Session storage keys
pub const KEY_SEEN_WELCOME: &str = "seenWelcome";
pub const KEY_SEEN_HOME_REVEAL: &str = "seenHomeReveal";
pub const KEY_ORBIT_EPOCH: &str = "orbitEpoch";
pub const FLAG_SET: &str = "1";
